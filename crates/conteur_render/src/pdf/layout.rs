//! Page layout: blocks, word wrap and pagination.

use crate::{Document, derive_title};
use conteur_error::{ConteurResult, RenderError, RenderErrorKind};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A4 width in millimetres.
pub(crate) const PAGE_WIDTH_MM: f32 = 210.0;
/// A4 height in millimetres.
pub(crate) const PAGE_HEIGHT_MM: f32 = 297.0;
const MARGIN_X_MM: f32 = 20.0;
const MARGIN_TOP_MM: f32 = 25.0;
/// Content stops once the cursor would pass this height.
const MARGIN_BOTTOM_MM: f32 = 25.0;
const OPTION_INDENT_MM: f32 = 6.0;
const FOOTER_Y_MM: f32 = 12.0;
const PT_TO_MM: f32 = 0.3528;
/// Average Helvetica glyph width as a fraction of the font size.
const GLYPH_WIDTH: f32 = 0.5;

/// Typographic role of a placed line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TextStyle {
    /// Cover title
    Title,
    /// Cover subtitle
    Subtitle,
    /// Section heading
    Heading,
    /// Story prose
    Body,
    /// Option line
    Option,
    /// Running page number
    Footer,
}

impl TextStyle {
    /// Font size in points.
    pub fn size(self) -> f32 {
        match self {
            TextStyle::Title => 26.0,
            TextStyle::Subtitle => 16.0,
            TextStyle::Heading => 16.0,
            TextStyle::Body => 12.0,
            TextStyle::Option => 12.0,
            TextStyle::Footer => 9.0,
        }
    }

    /// Vertical advance of one line in millimetres.
    pub fn line_height_mm(self) -> f32 {
        self.size() * PT_TO_MM * 1.45
    }

    fn glyph_width_mm(self) -> f32 {
        self.size() * PT_TO_MM * GLYPH_WIDTH
    }

    /// Approximate rendered width of `text` in millimetres.
    pub fn text_width_mm(self, text: &str) -> f32 {
        text.chars().count() as f32 * self.glyph_width_mm()
    }
}

/// A logical unit of the document before pagination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Block {
    /// Cover page
    Cover {
        /// Cover title
        title: String,
        /// Cover subtitle
        subtitle: Option<String>,
    },
    /// Section heading
    Heading(String),
    /// Prose of one section, paragraphs separated by a blank line
    Prose(String),
    /// One option line
    Option(String),
}

/// A line of text at a fixed position, origin at the bottom-left corner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_getters::Getters)]
pub struct PlacedLine {
    /// Text of the line
    text: String,
    /// Typographic role
    style: TextStyle,
    /// Distance from the left edge
    x_mm: f32,
    /// Baseline distance from the bottom edge
    y_mm: f32,
}

/// One physical page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_getters::Getters)]
pub struct LayoutPage {
    /// 1-based page number
    number: usize,
    /// Lines in drawing order, footer last
    lines: Vec<PlacedLine>,
}

impl LayoutPage {
    /// The running footer of the page, if any.
    pub fn footer(&self) -> Option<&PlacedLine> {
        self.lines
            .iter()
            .rev()
            .find(|line| line.style == TextStyle::Footer)
    }
}

/// Blocks and the pages they were laid out on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_getters::Getters)]
pub struct Layout {
    /// Blocks in document order, cover first
    blocks: Vec<Block>,
    /// Physical pages, cover first
    pages: Vec<LayoutPage>,
}

impl Layout {
    /// The cover title.
    pub fn title(&self) -> &str {
        match self.blocks.first() {
            Some(Block::Cover { title, .. }) => title,
            _ => "",
        }
    }
}

/// Greedy word wrap against an approximate glyph width.
///
/// Words longer than a line are split on character boundaries.
fn wrap(text: &str, style: TextStyle, width_mm: f32) -> Vec<String> {
    let max_chars = ((width_mm / style.glyph_width_mm()) as usize).max(1);
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let mut word: Vec<char> = word.chars().collect();
        while word.len() > max_chars {
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            lines.push(word.drain(..max_chars).collect());
        }
        let word: String = word.into_iter().collect();
        let needed =
            current.chars().count() + usize::from(!current.is_empty()) + word.chars().count();
        if needed > max_chars && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(&word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

struct Paginator {
    pages: Vec<Vec<PlacedLine>>,
    cursor_mm: f32,
    /// The last page is the cover, which takes no content.
    on_cover: bool,
}

impl Paginator {
    fn new() -> Self {
        Self {
            pages: Vec::new(),
            cursor_mm: 0.0,
            on_cover: false,
        }
    }

    fn new_page(&mut self) {
        self.pages.push(Vec::new());
        self.cursor_mm = PAGE_HEIGHT_MM - MARGIN_TOP_MM;
        self.on_cover = false;
    }

    fn fits(&self, height_mm: f32) -> bool {
        self.cursor_mm - height_mm >= MARGIN_BOTTOM_MM
    }

    /// Places a line at the cursor, breaking the page first if needed.
    fn place(&mut self, text: String, style: TextStyle, x_mm: f32) {
        let height = style.line_height_mm();
        if self.pages.is_empty() || self.on_cover || !self.fits(height) {
            self.new_page();
        }
        self.cursor_mm -= height;
        self.push(PlacedLine {
            text,
            style,
            x_mm,
            y_mm: self.cursor_mm,
        });
    }

    fn push(&mut self, line: PlacedLine) {
        if let Some(page) = self.pages.last_mut() {
            page.push(line);
        }
    }

    fn gap(&mut self, height_mm: f32) {
        self.cursor_mm -= height_mm;
    }

    fn cover(&mut self, title: &str, subtitle: Option<&str>) {
        self.new_page();
        self.on_cover = true;
        let centered = |style: TextStyle, text: &str| {
            ((PAGE_WIDTH_MM - style.text_width_mm(text)) / 2.0).max(MARGIN_X_MM)
        };
        let mut y = PAGE_HEIGHT_MM * 0.6;
        for line in wrap(title, TextStyle::Title, PAGE_WIDTH_MM - 2.0 * MARGIN_X_MM) {
            let x = centered(TextStyle::Title, &line);
            self.push(PlacedLine {
                text: line,
                style: TextStyle::Title,
                x_mm: x,
                y_mm: y,
            });
            y -= TextStyle::Title.line_height_mm();
        }
        if let Some(subtitle) = subtitle {
            y -= TextStyle::Subtitle.line_height_mm();
            for line in wrap(subtitle, TextStyle::Subtitle, PAGE_WIDTH_MM - 2.0 * MARGIN_X_MM) {
                let x = centered(TextStyle::Subtitle, &line);
                self.push(PlacedLine {
                    text: line,
                    style: TextStyle::Subtitle,
                    x_mm: x,
                    y_mm: y,
                });
                y -= TextStyle::Subtitle.line_height_mm();
            }
        }
    }

    fn block(&mut self, block: &Block) {
        let width = PAGE_WIDTH_MM - 2.0 * MARGIN_X_MM;
        match block {
            Block::Cover { title, subtitle } => self.cover(title, subtitle.as_deref()),
            Block::Heading(heading) => {
                // Keep the heading with the first line that follows it.
                let needed = TextStyle::Heading.line_height_mm() * 2.0
                    + TextStyle::Body.line_height_mm() * 1.5;
                if self.pages.is_empty() || self.on_cover || !self.fits(needed) {
                    self.new_page();
                } else {
                    self.gap(TextStyle::Heading.line_height_mm());
                }
                for line in wrap(heading, TextStyle::Heading, width) {
                    self.place(line, TextStyle::Heading, MARGIN_X_MM);
                }
                self.gap(TextStyle::Body.line_height_mm() * 0.5);
            }
            Block::Prose(prose) => {
                for (index, paragraph) in prose.split("\n\n").enumerate() {
                    if index > 0 {
                        self.gap(TextStyle::Body.line_height_mm() * 0.5);
                    }
                    for line in wrap(paragraph, TextStyle::Body, width) {
                        self.place(line, TextStyle::Body, MARGIN_X_MM);
                    }
                }
                self.gap(TextStyle::Body.line_height_mm() * 0.5);
            }
            Block::Option(option) => {
                let text = format!("• {}", option);
                let width = width - OPTION_INDENT_MM;
                for line in wrap(&text, TextStyle::Option, width) {
                    self.place(line, TextStyle::Option, MARGIN_X_MM + OPTION_INDENT_MM);
                }
            }
        }
    }

    /// Closes the layout, stamping `Page n / N` on every page.
    fn finish(self) -> Vec<LayoutPage> {
        let total = self.pages.len();
        self.pages
            .into_iter()
            .enumerate()
            .map(|(index, mut lines)| {
                let number = index + 1;
                let text = format!("Page {} / {}", number, total);
                let x_mm = (PAGE_WIDTH_MM - TextStyle::Footer.text_width_mm(&text)) / 2.0;
                lines.push(PlacedLine {
                    text,
                    style: TextStyle::Footer,
                    x_mm,
                    y_mm: FOOTER_Y_MM,
                });
                LayoutPage { number, lines }
            })
            .collect()
    }
}

/// Converts a parsed document into blocks, cover first.
fn blocks(document: &Document, title: String, subtitle: Option<String>) -> Vec<Block> {
    let mut blocks = vec![Block::Cover { title, subtitle }];
    for section in document.sections() {
        if let Some(heading) = section.heading() {
            blocks.push(Block::Heading(heading.clone()));
        }
        if !section.paragraphs().is_empty() {
            blocks.push(Block::Prose(section.prose()));
        }
        for option in section.options() {
            blocks.push(Block::Option(option.display()));
        }
    }
    blocks
}

/// Lays out a document behind a cover page.
///
/// A page break is inserted whenever the next line would cross the bottom
/// margin. Each section heading starts below the previous section, or on a
/// fresh page when it would be stranded at the bottom.
///
/// # Errors
///
/// Returns [`RenderErrorKind::EmptyDocument`] when the document has no
/// sections.
///
/// # Examples
///
/// ```
/// use conteur_render::{Block, layout_pdf, parse_document};
///
/// let doc = parse_document("=== Introduction ===\nIl était une fois une fille nommée Zoé.");
/// let layout = layout_pdf(&doc, None, Some("Pour Zoé")).unwrap();
/// assert_eq!(layout.title(), "L'aventure de Zoé");
/// assert_eq!(layout.pages().len(), 2);
/// assert!(matches!(layout.blocks()[1], Block::Heading(_)));
/// ```
pub fn layout_pdf(
    document: &Document,
    title: Option<&str>,
    subtitle: Option<&str>,
) -> ConteurResult<Layout> {
    if document.sections().is_empty() {
        return Err(RenderError::new(RenderErrorKind::EmptyDocument).into());
    }

    let title = match title.map(str::trim).filter(|title| !title.is_empty()) {
        Some(title) => title.to_string(),
        None => derive_title(&document.intro_text().unwrap_or_default()),
    };
    let subtitle = subtitle
        .map(str::trim)
        .filter(|subtitle| !subtitle.is_empty())
        .map(str::to_string);

    let blocks = blocks(document, title, subtitle);
    let mut paginator = Paginator::new();
    for block in &blocks {
        paginator.block(block);
    }
    let pages = paginator.finish();
    debug!(blocks = blocks.len(), pages = pages.len(), "Laid out document");

    Ok(Layout { blocks, pages })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_respects_width() {
        let text = "le petit renard roux saute par-dessus la barrière du jardin ".repeat(10);
        let lines = wrap(&text, TextStyle::Body, 60.0);
        assert!(lines.len() > 1);
        for line in &lines {
            assert!(TextStyle::Body.text_width_mm(line) <= 60.0);
        }
        assert_eq!(lines.join(" "), text.trim());
    }

    #[test]
    fn test_wrap_splits_overlong_word() {
        let lines = wrap(&"a".repeat(50), TextStyle::Body, 20.0);
        assert!(lines.len() > 1);
        assert_eq!(lines.concat(), "a".repeat(50));
    }

    #[test]
    fn test_wrap_empty_text_has_no_lines() {
        assert!(wrap("   ", TextStyle::Body, 100.0).is_empty());
    }
}
