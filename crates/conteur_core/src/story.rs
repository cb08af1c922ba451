//! Assembled story and its derived views.

use crate::{NodeId, StoryNode, StoryStyle, format_option_line, format_section_header};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A fully generated story.
///
/// Nodes are kept in document order. The full variant holds exactly the eight
/// pages of [`NodeId::TREE`], the single variant one [`NodeId::Story`] page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_getters::Getters)]
pub struct Story {
    /// Title chosen by the user, if any
    title: Option<String>,
    /// Subtitle shown under the title
    subtitle: Option<String>,
    /// Style the story was generated with
    style: StoryStyle,
    /// Pages in document order
    nodes: Vec<StoryNode>,
}

impl Story {
    /// Creates a story from its pages.
    pub fn new(
        title: Option<String>,
        subtitle: Option<String>,
        style: StoryStyle,
        nodes: Vec<StoryNode>,
    ) -> Self {
        Self {
            title,
            subtitle,
            style,
            nodes,
        }
    }

    /// Replaces the title, typically with one derived from the introduction.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Looks up a page by tree position.
    pub fn node(&self, id: NodeId) -> Option<&StoryNode> {
        self.nodes.iter().find(|node| *node.id() == id)
    }

    /// Concatenates all pages into a single document.
    ///
    /// Every page starts with a `=== Heading ===` line, followed by its prose
    /// and, for branching pages, one `Option X : label` line per choice.
    /// Pages are separated by a blank line.
    ///
    /// # Examples
    ///
    /// ```
    /// use conteur_core::{NodeId, Story, StoryNode, StoryStyle};
    ///
    /// let story = Story::new(
    ///     Some("L'aventure de Léo".to_string()),
    ///     None,
    ///     StoryStyle::Aventure,
    ///     vec![
    ///         StoryNode::linear(NodeId::Intro, "Léo a six ans."),
    ///         StoryNode::branching(NodeId::Page1, "Deux chemins.", ["Forêt", "Rivière"]),
    ///     ],
    /// );
    /// let doc = story.to_document();
    /// assert!(doc.starts_with("=== Introduction ===\nLéo a six ans."));
    /// assert!(doc.contains("Option A : Forêt\nOption B : Rivière"));
    /// ```
    pub fn to_document(&self) -> String {
        self.nodes
            .iter()
            .map(|node| {
                let mut section = format_section_header(node.id().heading());
                section.push('\n');
                section.push_str(node.text().trim());
                if let Some(choices) = node.choices() {
                    section.push_str("\n\n");
                    let lines: Vec<String> = choices
                        .iter()
                        .map(|choice| {
                            format_option_line(
                                choice.target().option_key().unwrap_or("?"),
                                choice.label(),
                            )
                        })
                        .collect();
                    section.push_str(&lines.join("\n"));
                }
                section
            })
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    /// Tree view keyed by node id, used by the interactive reader.
    ///
    /// The introduction links to `page1` with a single continuation choice.
    pub fn sections(&self) -> StorySections {
        let sections = self
            .nodes
            .iter()
            .map(|node| {
                let choices = match (node.choices(), node.id()) {
                    (Some(choices), _) => choices
                        .iter()
                        .map(|c| SectionChoice {
                            text: c.label().clone(),
                            goto: *c.target(),
                        })
                        .collect(),
                    (None, NodeId::Intro) => vec![SectionChoice {
                        text: "Continuer".to_string(),
                        goto: NodeId::Page1,
                    }],
                    (None, _) => Vec::new(),
                };
                (
                    *node.id(),
                    SectionView {
                        heading: node.id().heading().to_string(),
                        text: node.text().clone(),
                        choices,
                    },
                )
            })
            .collect();
        StorySections {
            title: self.title.clone(),
            subtitle: self.subtitle.clone(),
            start: self.nodes.first().map_or(NodeId::Intro, |n| *n.id()),
            sections,
        }
    }
}

/// Client-side replay view of a story.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorySections {
    /// Story title
    pub title: Option<String>,
    /// Story subtitle
    pub subtitle: Option<String>,
    /// First section to display
    pub start: NodeId,
    /// Sections keyed by node id
    pub sections: BTreeMap<NodeId, SectionView>,
}

/// One section of the replay view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionView {
    /// Human heading
    pub heading: String,
    /// Prose of the page
    pub text: String,
    /// Links to follow-up sections
    pub choices: Vec<SectionChoice>,
}

/// A link between sections of the replay view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionChoice {
    /// Text of the button
    pub text: String,
    /// Section to display next
    pub goto: NodeId,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree_story() -> Story {
        let nodes = NodeId::TREE
            .iter()
            .map(|id| match id.children() {
                Some(_) => StoryNode::branching(*id, format!("texte {id}"), ["un", "deux"]),
                None => StoryNode::linear(*id, format!("texte {id}")),
            })
            .collect();
        Story::new(
            Some("Titre".into()),
            Some("Sous-titre".into()),
            StoryStyle::Conte,
            nodes,
        )
    }

    #[test]
    fn test_document_keeps_tree_order() {
        let doc = tree_story().to_document();
        let positions: Vec<usize> = NodeId::TREE
            .iter()
            .map(|id| doc.find(&format!("texte {id}")).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(doc.matches("=== ").count(), 8);
    }

    #[test]
    fn test_sections_link_tree() {
        let view = tree_story().sections();
        assert_eq!(view.sections.len(), 8);
        assert_eq!(view.start, NodeId::Intro);
        assert_eq!(view.sections[&NodeId::Intro].choices[0].goto, NodeId::Page1);
        let page2b: Vec<NodeId> = view.sections[&NodeId::Page2B]
            .choices
            .iter()
            .map(|c| c.goto)
            .collect();
        assert_eq!(page2b, vec![NodeId::EndingB1, NodeId::EndingB2]);
        assert!(view.sections[&NodeId::EndingA2].choices.is_empty());
    }

    #[test]
    fn test_sections_serialize_with_node_keys() {
        let json = serde_json::to_value(tree_story().sections()).unwrap();
        assert!(json["sections"]["page2A"]["text"].is_string());
        assert_eq!(json["sections"]["page1"]["choices"][0]["goto"], "page2A");
    }
}
