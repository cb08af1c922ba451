//! Core data types for the Conteur story generator.
//!
//! This crate provides the story tree model shared by the pipeline, the renderers
//! and the HTTP layer, plus the provider-neutral completion request.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod completion;
mod format;
mod node;
mod request;
mod story;
mod style;

pub use completion::{CompletionParams, CompletionParamsBuilder, CompletionRequest};
pub use format::{
    END_MARKER, format_option_line, format_section_header, parse_option_line,
    parse_section_header,
};
pub use node::{Choice, NodeId, StoryNode};
pub use request::{StoryRequest, StoryRequestBuilder, StoryVariant};
pub use story::{SectionChoice, SectionView, Story, StorySections};
pub use style::StoryStyle;
