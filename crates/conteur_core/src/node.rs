//! Story tree positions, nodes and choices.

use serde::{Deserialize, Serialize};

/// Position of a page in the story tree.
///
/// The tree shape is fixed: `intro → page1 → {page2A, page2B} →
/// {endingA1, endingA2, endingB1, endingB2}`. [`NodeId::Story`] identifies the
/// single page of the one-shot variant.
///
/// # Examples
///
/// ```
/// use conteur_core::NodeId;
///
/// assert_eq!(NodeId::Page2A.to_string(), "page2A");
/// assert_eq!("endingB1".parse::<NodeId>().unwrap(), NodeId::EndingB1);
/// assert_eq!(NodeId::Page1.children(), Some([NodeId::Page2A, NodeId::Page2B]));
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
pub enum NodeId {
    /// Character and setting introduction
    #[strum(serialize = "intro")]
    #[serde(rename = "intro")]
    Intro,
    /// First branching page
    #[strum(serialize = "page1")]
    #[serde(rename = "page1")]
    Page1,
    /// Second page after choice A
    #[strum(serialize = "page2A")]
    #[serde(rename = "page2A")]
    Page2A,
    /// Second page after choice B
    #[strum(serialize = "page2B")]
    #[serde(rename = "page2B")]
    Page2B,
    /// Ending after choices A then A1
    #[strum(serialize = "endingA1")]
    #[serde(rename = "endingA1")]
    EndingA1,
    /// Ending after choices A then A2
    #[strum(serialize = "endingA2")]
    #[serde(rename = "endingA2")]
    EndingA2,
    /// Ending after choices B then B1
    #[strum(serialize = "endingB1")]
    #[serde(rename = "endingB1")]
    EndingB1,
    /// Ending after choices B then B2
    #[strum(serialize = "endingB2")]
    #[serde(rename = "endingB2")]
    EndingB2,
    /// Whole story of the single-page variant
    #[strum(serialize = "story")]
    #[serde(rename = "story")]
    Story,
}

impl NodeId {
    /// Document order of the full branching variant.
    pub const TREE: [NodeId; 8] = [
        NodeId::Intro,
        NodeId::Page1,
        NodeId::Page2A,
        NodeId::Page2B,
        NodeId::EndingA1,
        NodeId::EndingA2,
        NodeId::EndingB1,
        NodeId::EndingB2,
    ];

    /// Human heading used in the assembled document.
    pub fn heading(self) -> &'static str {
        match self {
            NodeId::Intro => "Introduction",
            NodeId::Page1 => "Page 1",
            NodeId::Page2A => "Page 2A",
            NodeId::Page2B => "Page 2B",
            NodeId::EndingA1 => "Fin A1",
            NodeId::EndingA2 => "Fin A2",
            NodeId::EndingB1 => "Fin B1",
            NodeId::EndingB2 => "Fin B2",
            NodeId::Story => "Histoire",
        }
    }

    /// One-based page number in the document.
    pub fn page_number(self) -> usize {
        match self {
            NodeId::Story => 1,
            other => Self::TREE.iter().position(|n| *n == other).map_or(1, |i| i + 1),
        }
    }

    /// Key written after `Option` when this node is the target of a choice.
    pub fn option_key(self) -> Option<&'static str> {
        match self {
            NodeId::Page2A => Some("A"),
            NodeId::Page2B => Some("B"),
            NodeId::EndingA1 => Some("A1"),
            NodeId::EndingA2 => Some("A2"),
            NodeId::EndingB1 => Some("B1"),
            NodeId::EndingB2 => Some("B2"),
            _ => None,
        }
    }

    /// Node reached by an option key, inverse of [`NodeId::option_key`].
    ///
    /// ```
    /// use conteur_core::NodeId;
    ///
    /// assert_eq!(NodeId::from_option_key("a1"), Some(NodeId::EndingA1));
    /// assert_eq!(NodeId::from_option_key("C"), None);
    /// ```
    pub fn from_option_key(key: &str) -> Option<Self> {
        match key.trim().to_ascii_uppercase().as_str() {
            "A" => Some(NodeId::Page2A),
            "B" => Some(NodeId::Page2B),
            "A1" => Some(NodeId::EndingA1),
            "A2" => Some(NodeId::EndingA2),
            "B1" => Some(NodeId::EndingB1),
            "B2" => Some(NodeId::EndingB2),
            _ => None,
        }
    }

    /// The two nodes a branching page leads to.
    pub fn children(self) -> Option<[NodeId; 2]> {
        match self {
            NodeId::Page1 => Some([NodeId::Page2A, NodeId::Page2B]),
            NodeId::Page2A => Some([NodeId::EndingA1, NodeId::EndingA2]),
            NodeId::Page2B => Some([NodeId::EndingB1, NodeId::EndingB2]),
            _ => None,
        }
    }

    /// True for pages closing the story.
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            NodeId::EndingA1
                | NodeId::EndingA2
                | NodeId::EndingB1
                | NodeId::EndingB2
                | NodeId::Story
        )
    }
}

/// A labelled choice leading to another page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct Choice {
    /// Text shown to the reader
    label: String,
    /// Page reached by picking this choice
    target: NodeId,
}

impl Choice {
    /// Creates a choice.
    pub fn new(label: impl Into<String>, target: NodeId) -> Self {
        Self {
            label: label.into(),
            target,
        }
    }
}

/// One generated page of the story.
///
/// # Examples
///
/// ```
/// use conteur_core::{Choice, NodeId, StoryNode};
///
/// let page = StoryNode::branching(
///     NodeId::Page1,
///     "Léo arrive devant deux chemins.",
///     ["Prendre la forêt", "Longer la rivière"],
/// );
/// assert_eq!(page.choices().as_ref().unwrap()[1].target(), &NodeId::Page2B);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct StoryNode {
    /// Tree position
    id: NodeId,
    /// Prose of the page
    text: String,
    /// Two choices for branching pages, none otherwise
    choices: Option<[Choice; 2]>,
}

impl StoryNode {
    /// Creates a page without choices.
    pub fn linear(id: NodeId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            choices: None,
        }
    }

    /// Creates a branching page whose choices target the node's children.
    ///
    /// Falls back to a linear page for nodes without children.
    pub fn branching(id: NodeId, text: impl Into<String>, labels: [&str; 2]) -> Self {
        let choices = id.children().map(|[first, second]| {
            [
                Choice::new(labels[0].trim(), first),
                Choice::new(labels[1].trim(), second),
            ]
        });
        Self {
            id,
            text: text.into(),
            choices,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_tree_order_and_page_numbers() {
        for (index, id) in NodeId::TREE.iter().enumerate() {
            assert_eq!(id.page_number(), index + 1);
        }
    }

    #[test]
    fn test_option_keys_invert() {
        for id in NodeId::iter() {
            if let Some(key) = id.option_key() {
                assert_eq!(NodeId::from_option_key(key), Some(id));
            }
        }
    }

    #[test]
    fn test_serde_names_match_display() {
        for id in NodeId::iter() {
            let json = serde_json::to_string(&id).unwrap();
            assert_eq!(json, format!("\"{}\"", id));
        }
    }

    #[test]
    fn test_branching_on_leaf_has_no_choices() {
        let node = StoryNode::branching(NodeId::EndingA1, "FIN", ["x", "y"]);
        assert!(node.choices().is_none());
        assert!(node.id().is_terminal());
    }
}
