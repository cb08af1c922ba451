//! HTML and PDF rendering of Conteur stories.
//!
//! Both renderers work on the assembled document text:
//!
//! 1. [`parse_document`] splits it into sections of heading, prose and options
//! 2. [`render_html`] wraps each section in presentation markup
//! 3. [`layout_pdf`] paginates sections behind a cover page, and
//!    [`write_pdf`] serializes the layout with builtin PDF fonts
//!
//! [`derive_title`] guesses a cover title from the introduction.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod document;
mod html;
mod pdf;
mod title;

pub use document::{Document, LineKind, OptionLine, Section, classify_line, parse_document};
pub use html::{escape_html, render_html};
pub use pdf::{
    Block, Layout, LayoutPage, PlacedLine, TextStyle, layout_pdf, render_pdf, write_pdf,
};
pub use title::{FALLBACK_TITLE, derive_title, extract_hero_name};
