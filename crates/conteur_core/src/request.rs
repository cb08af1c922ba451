//! User-submitted story parameters.

use crate::StoryStyle;
use conteur_error::{ValidationError, ValidationErrorKind};
use serde::{Deserialize, Serialize};

/// Shape of the story to generate.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum StoryVariant {
    /// Eight-page branching tree
    #[default]
    Full,
    /// One self-contained page
    Single,
}

/// Parameters of one story generation.
///
/// # Examples
///
/// ```
/// use conteur_core::{StoryRequest, StoryStyle};
///
/// let request = StoryRequest::builder()
///     .child_info("Léo, 6 ans, aime le foot")
///     .style(StoryStyle::Aventure)
///     .title(Some("Le grand match".to_string()))
///     .build()
///     .unwrap();
///
/// assert_eq!(request.child_info(), "Léo, 6 ans, aime le foot");
/// assert!(request.subtitle().is_none());
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_builder::Builder,
)]
#[builder(setter(into))]
pub struct StoryRequest {
    /// Free text describing the child
    child_info: String,
    /// Story style tag
    style: StoryStyle,
    /// Optional title chosen by the user
    #[builder(default)]
    title: Option<String>,
    /// Optional subtitle chosen by the user
    #[builder(default)]
    subtitle: Option<String>,
}

impl StoryRequest {
    /// Creates a new request builder.
    pub fn builder() -> StoryRequestBuilder {
        StoryRequestBuilder::default()
    }

    /// Builds a request from raw form fields, rejecting blank required ones.
    ///
    /// Fields are checked in form order so the first missing one is reported.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] naming the first blank field.
    ///
    /// ```
    /// use conteur_core::StoryRequest;
    ///
    /// let err = StoryRequest::from_form("Titre", "Sous-titre", "  ", "aventure").unwrap_err();
    /// assert!(err.to_string().contains("mainText"));
    /// ```
    pub fn from_form(
        headline: &str,
        subheadline: &str,
        main_text: &str,
        style: &str,
    ) -> Result<Self, ValidationError> {
        let required = |name: &str, value: &str| -> Result<String, ValidationError> {
            let value = value.trim();
            if value.is_empty() {
                Err(ValidationError::new(ValidationErrorKind::MissingField(
                    name.to_string(),
                )))
            } else {
                Ok(value.to_string())
            }
        };
        let title = required("headline", headline)?;
        let subtitle = required("subheadline", subheadline)?;
        let child_info = required("mainText", main_text)?;
        let style = StoryStyle::parse_tag(style).ok_or_else(|| {
            ValidationError::new(ValidationErrorKind::MissingField("style".to_string()))
        })?;
        Ok(Self {
            child_info,
            style,
            title: Some(title),
            subtitle: Some(subtitle),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_form_trims_fields() {
        let request = StoryRequest::from_form(" Titre ", "Sous", " Léo ", "conte").unwrap();
        assert_eq!(request.title().as_deref(), Some("Titre"));
        assert_eq!(request.child_info(), "Léo");
        assert_eq!(request.style(), &StoryStyle::Conte);
    }

    #[test]
    fn test_from_form_reports_each_missing_field() {
        let cases = [
            (["", "s", "m", "aventure"], "headline"),
            (["h", "", "m", "aventure"], "subheadline"),
            (["h", "s", "", "aventure"], "mainText"),
            (["h", "s", "m", ""], "style"),
        ];
        for ([h, s, m, st], field) in cases {
            let err = StoryRequest::from_form(h, s, m, st).unwrap_err();
            assert_eq!(err.kind, ValidationErrorKind::MissingField(field.to_string()));
        }
    }

    #[test]
    fn test_variant_parsing() {
        assert_eq!("SINGLE".parse::<StoryVariant>().unwrap(), StoryVariant::Single);
        assert_eq!(StoryVariant::default(), StoryVariant::Full);
    }
}
