//! Provider listing.

use conteur::ProviderKind;
use strum::IntoEnumIterator;

/// Prints every supported provider with its default model and credential status.
pub fn list_providers() {
    println!("{:<12} {:<40} {:<22} CREDENTIAL", "PROVIDER", "DEFAULT MODEL", "VARIABLE");
    for provider in ProviderKind::iter() {
        let configured = std::env::var(provider.credential_var())
            .is_ok_and(|value| !value.trim().is_empty());
        println!(
            "{:<12} {:<40} {:<22} {}",
            provider.to_string(),
            provider.default_model(),
            provider.credential_var(),
            if configured { "configured" } else { "missing" }
        );
    }
}
