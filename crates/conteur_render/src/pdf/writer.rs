//! PDF serialization of a finished layout.

use super::layout::{Layout, PAGE_HEIGHT_MM, PAGE_WIDTH_MM, TextStyle};
use conteur_error::{ConteurResult, RenderError, RenderErrorKind};
use printpdf::{BuiltinFont, IndirectFontRef, Mm, PdfDocument};
use tracing::debug;

fn pdf_error(error: impl std::fmt::Display) -> RenderError {
    RenderError::new(RenderErrorKind::Pdf(error.to_string()))
}

/// Replaces characters the builtin fonts cannot encode.
///
/// Builtin fonts use WinAnsi encoding: Latin-1 plus a handful of
/// typographic marks.
fn encodable(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '\u{20}'..='\u{7e}' | '\u{a0}'..='\u{ff}' => c,
            '‘' | '’' | '“' | '”' | '–' | '—' | '…' | '•' | '€' | 'œ' | 'Œ' | 'Ÿ' => c,
            '\u{202f}' => ' ',
            '→' => '>',
            _ if c.is_whitespace() => ' ',
            _ => '?',
        })
        .collect()
}

struct Fonts {
    regular: IndirectFontRef,
    bold: IndirectFontRef,
    italic: IndirectFontRef,
}

impl Fonts {
    fn for_style(&self, style: TextStyle) -> &IndirectFontRef {
        match style {
            TextStyle::Title | TextStyle::Heading => &self.bold,
            TextStyle::Subtitle | TextStyle::Option => &self.italic,
            TextStyle::Body | TextStyle::Footer => &self.regular,
        }
    }
}

/// Writes a layout as an A4 PDF using builtin Helvetica fonts.
///
/// # Errors
///
/// Returns [`RenderErrorKind::EmptyDocument`] for a layout without pages and
/// [`RenderErrorKind::Pdf`] when the PDF writer fails.
pub fn write_pdf(layout: &Layout) -> ConteurResult<Vec<u8>> {
    if layout.pages().is_empty() {
        return Err(RenderError::new(RenderErrorKind::EmptyDocument).into());
    }

    let (doc, first_page, first_layer) = PdfDocument::new(
        encodable(layout.title()),
        Mm(PAGE_WIDTH_MM),
        Mm(PAGE_HEIGHT_MM),
        "Page 1",
    );
    let fonts = Fonts {
        regular: doc.add_builtin_font(BuiltinFont::Helvetica).map_err(pdf_error)?,
        bold: doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(pdf_error)?,
        italic: doc
            .add_builtin_font(BuiltinFont::HelveticaOblique)
            .map_err(pdf_error)?,
    };

    for page in layout.pages() {
        let (page_index, layer_index) = if *page.number() == 1 {
            (first_page, first_layer)
        } else {
            doc.add_page(
                Mm(PAGE_WIDTH_MM),
                Mm(PAGE_HEIGHT_MM),
                format!("Page {}", page.number()),
            )
        };
        let layer = doc.get_page(page_index).get_layer(layer_index);
        for line in page.lines() {
            layer.use_text(
                encodable(line.text()),
                line.style().size(),
                Mm(*line.x_mm()),
                Mm(*line.y_mm()),
                fonts.for_style(*line.style()),
            );
        }
    }

    let bytes = doc.save_to_bytes().map_err(pdf_error)?;
    debug!(pages = layout.pages().len(), bytes = bytes.len(), "Wrote PDF");
    Ok(bytes)
}
