//! Extraction of labelled options from generated prose.

use conteur_core::parse_option_line;
use regex::Regex;
use tracing::warn;

/// Labels substituted when the model output has no recognizable options.
pub const FALLBACK_CHOICES: [&str; 2] = ["continue the adventure", "take another path"];

/// Result of scanning a page for its two options.
#[derive(Debug, Clone, PartialEq, Eq, derive_getters::Getters)]
pub struct ExtractedChoices {
    /// Page text with the option lines removed
    prose: String,
    /// Label of the first option
    first: String,
    /// Label of the second option
    second: String,
    /// Whether the options were found in the text
    matched: bool,
}

impl ExtractedChoices {
    /// Both labels in order.
    pub fn labels(&self) -> [&str; 2] {
        [&self.first, &self.second]
    }
}

fn option_pattern(first: &str, second: &str) -> Result<Regex, regex::Error> {
    let line = |key: &str| {
        format!(
            r"^[ \t>\-•*]*option[ \t]+{}\**[ \t]*:\**[ \t]*(.*?)[ \t]*$",
            regex::escape(key)
        )
    };
    Regex::new(&format!(r"(?mi){}\s*{}", line(first), line(second)))
}

fn clean_label(raw: Option<regex::Match<'_>>, fallback: &str) -> String {
    let label = raw
        .map(|m| m.as_str().trim().trim_matches('*').trim())
        .unwrap_or_default();
    if label.is_empty() {
        fallback.to_string()
    } else {
        label.to_string()
    }
}

/// Finds the two options keyed `keys[0]` and `keys[1]` in `text`.
///
/// The options must appear as consecutive `Option <key> : label` lines, in
/// order, with optional blank lines, list markers or bold markers around them.
/// When they are missing, the whole text is returned as prose together with
/// [`FALLBACK_CHOICES`]. Both returned labels are always non-empty.
///
/// # Examples
///
/// ```
/// use conteur_narrative::extract_choices;
///
/// let page = "Léo voit deux portes.\n\nOption A : La porte rouge\nOption B : La porte bleue";
/// let choices = extract_choices(page, ["A", "B"]);
/// assert!(choices.matched());
/// assert_eq!(choices.labels(), ["La porte rouge", "La porte bleue"]);
/// assert_eq!(choices.prose(), "Léo voit deux portes.");
///
/// let drifted = extract_choices("Pas d'options ici.", ["A", "B"]);
/// assert!(!drifted.matched());
/// assert_eq!(drifted.labels(), ["continue the adventure", "take another path"]);
/// ```
pub fn extract_choices(text: &str, keys: [&str; 2]) -> ExtractedChoices {
    let captures = option_pattern(keys[0], keys[1])
        .ok()
        .and_then(|pattern| pattern.captures(text));

    match captures {
        Some(caps) => {
            let whole = caps.get(0).map_or(0..0, |m| m.range());
            let prose = format!("{}\n{}", &text[..whole.start], &text[whole.end..])
                .trim()
                .to_string();
            ExtractedChoices {
                prose,
                first: clean_label(caps.get(1), FALLBACK_CHOICES[0]),
                second: clean_label(caps.get(2), FALLBACK_CHOICES[1]),
                matched: true,
            }
        }
        None => {
            warn!(
                first = keys[0],
                second = keys[1],
                "No options found in generated text, using fallback choices"
            );
            ExtractedChoices {
                prose: text.trim().to_string(),
                first: FALLBACK_CHOICES[0].to_string(),
                second: FALLBACK_CHOICES[1].to_string(),
                matched: false,
            }
        }
    }
}

/// Removes every option line from `text`, keeping the prose.
///
/// Pages without outgoing choices run through this so that options the model
/// wrote anyway never reach the document.
///
/// # Examples
///
/// ```
/// use conteur_narrative::strip_option_lines;
///
/// let ending = "Ils rentrèrent.\n\nOption A : à gauche\nFIN";
/// assert_eq!(strip_option_lines(ending), "Ils rentrèrent.\n\nFIN");
/// ```
pub fn strip_option_lines(text: &str) -> String {
    let mut kept: Vec<&str> = Vec::new();
    let mut dropped = 0;
    for line in text.lines() {
        if parse_option_line(line.trim()).is_some() {
            dropped += 1;
            continue;
        }
        // Collapse the blank runs left behind by removed lines
        if line.trim().is_empty() && kept.last().is_some_and(|last| last.trim().is_empty()) {
            continue;
        }
        kept.push(line);
    }
    if dropped > 0 {
        warn!(dropped, "Dropped option lines from a page without choices");
    }
    kept.join("\n").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_keeps_prose_and_marker() {
        let text = "La nuit tombe.\r\n\r\n**Option B2 :** rester\r\nOption A1 : partir\r\n\r\nFIN";
        let stripped = strip_option_lines(text);
        assert_eq!(stripped, "La nuit tombe.\n\nFIN");
        assert!(!stripped.contains("Option"));
    }

    #[test]
    fn test_strip_without_options_is_trim() {
        assert_eq!(strip_option_lines("  Le dragon dort.\n"), "Le dragon dort.");
    }

    #[test]
    fn test_markdown_and_blank_lines_are_tolerated() {
        let text = "Le dragon attend.\n\n**Option A1 :** Lui offrir un gâteau\n\n- Option A2: Lui chanter une chanson  \n";
        let choices = extract_choices(text, ["A1", "A2"]);
        assert!(choices.matched());
        assert_eq!(choices.labels(), ["Lui offrir un gâteau", "Lui chanter une chanson"]);
        assert_eq!(choices.prose(), "Le dragon attend.");
    }

    #[test]
    fn test_crlf_and_lowercase_keyword() {
        let text = "Texte.\r\noption B1 : Courir\r\noption B2 : Marcher\r\n";
        let choices = extract_choices(text, ["B1", "B2"]);
        assert_eq!(choices.labels(), ["Courir", "Marcher"]);
    }

    #[test]
    fn test_wrong_keys_fall_back() {
        let text = "Option A : Un\nOption B : Deux";
        let choices = extract_choices(text, ["A1", "A2"]);
        assert!(!choices.matched());
        assert_eq!(choices.prose(), text);
    }

    #[test]
    fn test_empty_label_is_replaced() {
        let text = "Option A :\nOption B : Rentrer";
        let choices = extract_choices(text, ["A", "B"]);
        assert_eq!(choices.labels(), [FALLBACK_CHOICES[0], "Rentrer"]);
    }

    #[test]
    fn test_totality_on_odd_inputs() {
        for text in [
            "",
            "\n\n",
            "Option",
            "Option A : x",
            "🐉🐉🐉",
            "Option A : \nOption B : ",
        ] {
            let choices = extract_choices(text, ["A", "B"]);
            assert!(choices.labels().iter().all(|label| !label.is_empty()), "{text:?}");
        }
    }
}
