//! Branching story pipeline for Conteur.
//!
//! The [`StoryAssembler`] drives a fixed tree of generation stages over any
//! [`conteur_interface::CompletionDriver`]:
//!
//! ```text
//! intro -> page1 -> {page2A, page2B} -> {endingA1, endingA2, endingB1, endingB2}
//! ```
//!
//! Branch labels are pulled out of generated prose by [`extract_choices`],
//! which never fails: unparseable output yields [`FALLBACK_CHOICES`].

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod assembler;
mod choices;
mod config;
mod prompts;

pub use assembler::{Continuation, StoryAssembler};
pub use choices::{ExtractedChoices, FALLBACK_CHOICES, extract_choices, strip_option_lines};
pub use config::{Dispatch, PipelineConfig, PipelineConfigBuilder};
pub use prompts::{SYSTEM_PROMPT, StoryPrompts};
