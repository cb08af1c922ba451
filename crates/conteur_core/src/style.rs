//! Story style tags.

use serde::{Deserialize, Serialize};

/// Story style selected on the form.
///
/// Known tags map to a dedicated prompt flavour. Any other non-empty tag is
/// kept verbatim in [`StoryStyle::Other`] and forwarded to the model as is.
///
/// # Examples
///
/// ```
/// use conteur_core::StoryStyle;
///
/// let style: StoryStyle = " Aventure ".parse().unwrap();
/// assert_eq!(style, StoryStyle::Aventure);
/// assert_eq!(style.to_string(), "aventure");
///
/// let custom: StoryStyle = "pirates".parse().unwrap();
/// assert_eq!(custom, StoryStyle::Other("pirates".to_string()));
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::AsRefStr,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(try_from = "String", into = "String")]
pub enum StoryStyle {
    /// Action and exploration
    Aventure,
    /// Magic and fantastic creatures
    Fantastique,
    /// Classic fairy tale
    Conte,
    /// Space and robots
    ScienceFiction,
    /// Gentle mystery to solve
    Mystere,
    /// Funny situations
    Humour,
    /// Learning something along the way
    Educatif,
    /// Free-form tag typed by the user
    Other(String),
}

impl StoryStyle {
    /// Tags with a dedicated prompt flavour.
    pub const KNOWN: [StoryStyle; 7] = [
        StoryStyle::Aventure,
        StoryStyle::Fantastique,
        StoryStyle::Conte,
        StoryStyle::ScienceFiction,
        StoryStyle::Mystere,
        StoryStyle::Humour,
        StoryStyle::Educatif,
    ];

    /// Wire tag of this style.
    pub fn tag(&self) -> &str {
        match self {
            StoryStyle::Other(tag) => tag,
            known => known.as_ref(),
        }
    }

    /// French description injected into prompts.
    pub fn description(&self) -> String {
        match self {
            StoryStyle::Aventure => "une aventure pleine d'action et d'exploration".into(),
            StoryStyle::Fantastique => {
                "une histoire fantastique avec de la magie et des créatures merveilleuses".into()
            }
            StoryStyle::Conte => "un conte de fées classique et poétique".into(),
            StoryStyle::ScienceFiction => {
                "une histoire de science-fiction avec des vaisseaux et des robots amicaux".into()
            }
            StoryStyle::Mystere => "un petit mystère à résoudre, sans rien d'effrayant".into(),
            StoryStyle::Humour => "une histoire drôle avec des situations amusantes".into(),
            StoryStyle::Educatif => {
                "une histoire éducative où l'on apprend quelque chose de nouveau".into()
            }
            StoryStyle::Other(tag) => format!("une histoire de style « {} »", tag),
        }
    }

    /// Parses a user-supplied tag, trimming whitespace.
    ///
    /// Returns `None` for a blank tag.
    pub fn parse_tag(tag: &str) -> Option<Self> {
        let tag = tag.trim();
        if tag.is_empty() {
            return None;
        }
        let lowered = tag.to_lowercase();
        let normalized = match lowered.as_str() {
            "mystère" => "mystere",
            "éducatif" => "educatif",
            "science fiction" | "sf" => "science-fiction",
            other => other,
        };
        let known = Self::KNOWN
            .iter()
            .find(|style| style.as_ref() == normalized)
            .cloned();
        Some(known.unwrap_or_else(|| StoryStyle::Other(tag.to_string())))
    }
}

impl std::fmt::Display for StoryStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

impl std::str::FromStr for StoryStyle {
    type Err = conteur_error::ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_tag(s).ok_or_else(|| {
            conteur_error::ValidationError::new(conteur_error::ValidationErrorKind::InvalidStyle(
                s.to_string(),
            ))
        })
    }
}

impl TryFrom<String> for StoryStyle {
    type Error = conteur_error::ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<StoryStyle> for String {
    fn from(style: StoryStyle) -> Self {
        style.tag().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_tags_round_trip() {
        for style in StoryStyle::KNOWN {
            let parsed: StoryStyle = style.tag().parse().unwrap();
            assert_eq!(parsed, style);
        }
    }

    #[test]
    fn test_accented_and_cased_tags() {
        assert_eq!(StoryStyle::parse_tag("Mystère"), Some(StoryStyle::Mystere));
        assert_eq!(
            StoryStyle::parse_tag("SCIENCE-FICTION"),
            Some(StoryStyle::ScienceFiction)
        );
    }

    #[test]
    fn test_blank_tag_is_rejected() {
        assert!("   ".parse::<StoryStyle>().is_err());
        assert_eq!(StoryStyle::parse_tag(""), None);
    }

    #[test]
    fn test_serde_uses_wire_tag() {
        let json = serde_json::to_string(&StoryStyle::ScienceFiction).unwrap();
        assert_eq!(json, "\"science-fiction\"");
        let back: StoryStyle = serde_json::from_str("\"dinosaures\"").unwrap();
        assert_eq!(back, StoryStyle::Other("dinosaures".into()));
    }
}
