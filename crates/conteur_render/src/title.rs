//! Cover title heuristic.

use regex::Regex;
use std::sync::OnceLock;

/// Title used when no hero name can be found.
pub const FALLBACK_TITLE: &str = "Une histoire extraordinaire";

const STOPWORDS: &[&str] = &[
    "Il", "Elle", "Ils", "Elles", "Le", "La", "Les", "Un", "Une", "Des", "Ce", "Cette", "Ces",
    "Mais", "Et", "Alors", "Puis", "Quand", "Dans", "Sur", "Au", "Aux", "Du", "De", "Son", "Sa",
    "Ses", "Mon", "Ma", "Mes", "Tout", "Tous", "Chaque", "Ici", "Oh", "Ah", "Bonjour", "Maman",
    "Papa", "Introduction", "Page", "Option", "Fin", "FIN",
];

fn cue_pattern() -> Option<&'static Regex> {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    PATTERN
        .get_or_init(|| {
            Regex::new(
                r"(?i:s['’]appel(?:le|ait)|pr[ée]nomm[ée]e?|nomm[ée]e?|named|called)\s+(\p{Lu}[\p{L}\-]+)",
            )
            .ok()
        })
        .as_ref()
}

/// Finds the hero's name in an introduction.
///
/// Looks first for an explicit naming cue (`s'appelle Léo`, `nommée Zoé`,
/// `named Sam`), then for the first capitalized word that neither starts a
/// sentence nor is a common capitalized word.
///
/// ```
/// use conteur_render::extract_hero_name;
///
/// assert_eq!(extract_hero_name("Il était une fois un garçon qui s'appelle Léo."), Some("Léo".to_string()));
/// assert_eq!(extract_hero_name("Ce matin-là, la petite Zoé se réveilla."), Some("Zoé".to_string()));
/// assert_eq!(extract_hero_name("il pleuvait. tout était calme."), None);
/// ```
pub fn extract_hero_name(intro: &str) -> Option<String> {
    if let Some(caps) = cue_pattern().and_then(|pattern| pattern.captures(intro)) {
        if let Some(name) = caps.get(1) {
            return Some(name.as_str().to_string());
        }
    }

    let mut sentence_start = true;
    for raw in intro.split_whitespace() {
        let word = raw.trim_matches(|c: char| !c.is_alphanumeric() && c != '-');
        let capitalized = word.chars().next().is_some_and(char::is_uppercase)
            && word.chars().count() > 1;
        if capitalized && !sentence_start && !STOPWORDS.contains(&word) {
            return Some(word.to_string());
        }
        sentence_start = raw.ends_with(['.', '!', '?', ':', '«', '"', '—']) || raw == "-";
    }
    None
}

/// Cover title derived from the introduction.
///
/// ```
/// use conteur_render::{FALLBACK_TITLE, derive_title};
///
/// assert_eq!(derive_title("Une fille nommée Inès aimait les étoiles."), "L'aventure de Inès");
/// assert_eq!(derive_title(""), FALLBACK_TITLE);
/// ```
pub fn derive_title(intro: &str) -> String {
    match extract_hero_name(intro) {
        Some(name) => format!("L'aventure de {}", name),
        None => FALLBACK_TITLE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cue_beats_earlier_capitalized_word() {
        let intro = "À Paris vivait un enfant. Il s'appelait Malo et adorait les trains.";
        assert_eq!(extract_hero_name(intro).as_deref(), Some("Malo"));
    }

    #[test]
    fn test_sentence_starts_are_skipped() {
        let intro = "Le soleil brillait. Dans le jardin, Noé jouait.";
        assert_eq!(extract_hero_name(intro).as_deref(), Some("Noé"));
    }

    #[test]
    fn test_english_cue() {
        assert_eq!(
            extract_hero_name("once upon a time a dog called Rex").as_deref(),
            Some("Rex")
        );
    }
}
