//! Parsing of the assembled story document into sections.

use conteur_core::{NodeId, parse_option_line, parse_section_header};
use serde::{Deserialize, Serialize};

/// Classification of one document line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// Section header, carrying the heading
    Heading(&'a str),
    /// `Option <key> : <label>` line
    Option {
        /// Option key such as `A` or `B2`
        key: &'a str,
        /// Option label
        label: &'a str,
    },
    /// Story text
    Prose(&'a str),
    /// Empty or whitespace-only line
    Blank,
}

/// Classifies a line, ignoring surrounding whitespace.
///
/// ```
/// use conteur_render::{LineKind, classify_line};
///
/// assert_eq!(classify_line("=== Page 1 ==="), LineKind::Heading("Page 1"));
/// assert_eq!(classify_line("  \t"), LineKind::Blank);
/// assert_eq!(
///     classify_line("Option B : Rester"),
///     LineKind::Option { key: "B", label: "Rester" }
/// );
/// ```
pub fn classify_line(line: &str) -> LineKind<'_> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return LineKind::Blank;
    }
    if let Some(heading) = parse_section_header(trimmed) {
        return LineKind::Heading(heading);
    }
    if let Some((key, label)) = parse_option_line(trimmed) {
        return LineKind::Option { key, label };
    }
    LineKind::Prose(trimmed)
}

/// An option offered at the end of a section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct OptionLine {
    /// Option key such as `A` or `B2`
    key: String,
    /// Option label
    label: String,
    /// Section the option leads to, when the key is a tree key
    target: Option<NodeId>,
}

impl OptionLine {
    /// The line as written in the document.
    pub fn display(&self) -> String {
        conteur_core::format_option_line(&self.key, &self.label)
    }
}

/// One section of the document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct Section {
    /// Heading, absent for text preceding the first header
    heading: Option<String>,
    /// Tree position matching the heading
    node: Option<NodeId>,
    /// Prose paragraphs in order
    paragraphs: Vec<String>,
    /// Options in order
    options: Vec<OptionLine>,
}

impl Section {
    fn new(heading: Option<&str>) -> Self {
        Self {
            heading: heading.map(str::to_string),
            node: heading.and_then(node_for_heading),
            paragraphs: Vec::new(),
            options: Vec::new(),
        }
    }

    /// All prose of the section as one block, paragraphs separated by a blank line.
    pub fn prose(&self) -> String {
        self.paragraphs.join("\n\n")
    }

    fn is_empty(&self) -> bool {
        self.heading.is_none() && self.paragraphs.is_empty() && self.options.is_empty()
    }
}

/// A parsed story document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct Document {
    /// Sections in document order
    sections: Vec<Section>,
}

impl Document {
    /// Prose of the first section, used for title heuristics.
    pub fn intro_text(&self) -> Option<String> {
        self.sections
            .iter()
            .find(|section| !section.paragraphs.is_empty())
            .map(Section::prose)
    }
}

/// Splits a document into sections.
///
/// Consecutive prose lines form one paragraph; blank lines separate
/// paragraphs. Options are collected wherever they appear in the section.
///
/// # Examples
///
/// ```
/// use conteur_render::parse_document;
///
/// let doc = parse_document("=== Page 1 ===\nLéo hésite.\n\nOption A : Sauter\nOption B : Attendre");
/// let section = &doc.sections()[0];
/// assert_eq!(section.heading().as_deref(), Some("Page 1"));
/// assert_eq!(section.prose(), "Léo hésite.");
/// assert_eq!(section.options().len(), 2);
/// ```
pub fn parse_document(text: &str) -> Document {
    let mut sections = Vec::new();
    let mut current = Section::new(None);
    let mut paragraph: Vec<&str> = Vec::new();

    fn flush(paragraph: &mut Vec<&str>, section: &mut Section) {
        if !paragraph.is_empty() {
            section.paragraphs.push(paragraph.join(" "));
            paragraph.clear();
        }
    }

    for line in text.lines() {
        match classify_line(line) {
            LineKind::Heading(heading) => {
                flush(&mut paragraph, &mut current);
                let finished = std::mem::replace(&mut current, Section::new(Some(heading)));
                if !finished.is_empty() {
                    sections.push(finished);
                }
            }
            LineKind::Option { key, label } => {
                flush(&mut paragraph, &mut current);
                current.options.push(OptionLine {
                    key: key.to_string(),
                    label: label.to_string(),
                    target: NodeId::from_option_key(key),
                });
            }
            LineKind::Prose(prose) => paragraph.push(prose),
            LineKind::Blank => flush(&mut paragraph, &mut current),
        }
    }
    flush(&mut paragraph, &mut current);
    if !current.is_empty() {
        sections.push(current);
    }

    Document { sections }
}

/// Tree position whose heading or id matches `heading`.
fn node_for_heading(heading: &str) -> Option<NodeId> {
    let heading = heading.trim();
    NodeId::TREE
        .into_iter()
        .chain([NodeId::Story])
        .find(|id| {
            id.heading().eq_ignore_ascii_case(heading)
                || id.to_string().eq_ignore_ascii_case(heading)
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headings_map_to_nodes() {
        assert_eq!(node_for_heading("Fin B2"), Some(NodeId::EndingB2));
        assert_eq!(node_for_heading("page2a"), Some(NodeId::Page2A));
        assert_eq!(node_for_heading("Chapitre secret"), None);
    }

    #[test]
    fn test_text_before_first_header_is_kept() {
        let doc = parse_document("Préface.\n=== Introduction ===\nIl était une fois.");
        assert_eq!(doc.sections().len(), 2);
        assert!(doc.sections()[0].heading().is_none());
        assert_eq!(doc.sections()[1].node(), &Some(NodeId::Intro));
    }

    #[test]
    fn test_wrapped_lines_join_into_one_paragraph() {
        let doc = parse_document("=== Page 1 ===\nLéo court\nvers la rivière.\n\n\n\nIl saute.");
        assert_eq!(
            doc.sections()[0].paragraphs(),
            &vec![
                "Léo court vers la rivière.".to_string(),
                "Il saute.".to_string()
            ]
        );
    }

    #[test]
    fn test_empty_input_has_no_sections() {
        assert!(parse_document(" \n\n ").sections().is_empty());
    }

    #[test]
    fn test_option_targets_follow_keys() {
        let doc = parse_document("Option A1 : Voler\nOption Z : Rêver");
        let options = doc.sections()[0].options();
        assert_eq!(options[0].target(), &Some(NodeId::EndingA1));
        assert_eq!(options[1].target(), &None);
    }
}
