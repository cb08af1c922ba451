//! Paginated PDF rendering.

mod layout;
mod writer;

pub use layout::{Block, Layout, LayoutPage, PlacedLine, TextStyle, layout_pdf};
pub use writer::write_pdf;

use crate::parse_document;
use conteur_error::ConteurResult;
use tracing::instrument;

/// Parses, lays out and writes a story document as PDF bytes.
///
/// The cover title is `title` when given, otherwise derived from the
/// introduction.
#[instrument(skip(text), fields(chars = text.len()))]
pub fn render_pdf(
    text: &str,
    title: Option<&str>,
    subtitle: Option<&str>,
) -> ConteurResult<Vec<u8>> {
    let document = parse_document(text);
    let layout = layout_pdf(&document, title, subtitle)?;
    write_pdf(&layout)
}
