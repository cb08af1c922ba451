//! Inline HTML rendering.

use crate::{Document, Section};

/// Escapes text for HTML element content and attribute values.
///
/// ```
/// assert_eq!(
///     conteur_render::escape_html(r#"<b>"Léo" & 'Zoé'</b>"#),
///     "&lt;b&gt;&quot;Léo&quot; &amp; &#39;Zoé&#39;&lt;/b&gt;"
/// );
/// ```
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

fn render_section(out: &mut String, section: &Section) {
    let node = section
        .node()
        .as_ref()
        .map(|id| format!(" data-node=\"{}\"", id))
        .unwrap_or_default();
    out.push_str(&format!("<section class=\"story-page\"{}>\n", node));
    if let Some(heading) = section.heading() {
        out.push_str(&format!(
            "  <h2 class=\"page-heading\">{}</h2>\n",
            escape_html(heading)
        ));
    }
    if !section.paragraphs().is_empty() {
        out.push_str("  <div class=\"story-text\">\n");
        for paragraph in section.paragraphs() {
            out.push_str(&format!("    <p>{}</p>\n", escape_html(paragraph)));
        }
        out.push_str("  </div>\n");
    }
    if !section.options().is_empty() {
        out.push_str("  <div class=\"options\">\n");
        for option in section.options() {
            let goto = option
                .target()
                .as_ref()
                .map(|id| format!(" data-goto=\"{}\"", id))
                .unwrap_or_default();
            out.push_str(&format!(
                "    <button type=\"button\" class=\"choice-button\" data-key=\"{}\"{}>{}</button>\n",
                escape_html(option.key()),
                goto,
                escape_html(option.label())
            ));
        }
        out.push_str("  </div>\n");
    }
    out.push_str("</section>\n");
}

/// Renders every section as a presentation container.
///
/// Option buttons carry a `data-goto` attribute with the target node id so
/// the interactive reader can jump to the next section by id.
///
/// # Examples
///
/// ```
/// use conteur_render::{parse_document, render_html};
///
/// let html = render_html(&parse_document("=== Page 1 ===\nLéo <3 le foot.\nOption A : Jouer"));
/// assert!(html.contains("<h2 class=\"page-heading\">Page 1</h2>"));
/// assert!(html.contains("Léo &lt;3 le foot."));
/// assert!(html.contains("data-goto=\"page2A\""));
/// ```
pub fn render_html(document: &Document) -> String {
    let mut out = String::from("<article class=\"story\">\n");
    for section in document.sections() {
        render_section(&mut out, section);
    }
    out.push_str("</article>\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse_document;

    #[test]
    fn test_sections_render_in_order() {
        let html = render_html(&parse_document(
            "=== Introduction ===\nUn.\n\n=== Page 1 ===\nDeux.\nOption A : a\nOption B : b",
        ));
        let intro = html.find("data-node=\"intro\"").unwrap();
        let page1 = html.find("data-node=\"page1\"").unwrap();
        assert!(intro < page1);
        assert_eq!(html.matches("choice-button").count(), 2);
    }

    #[test]
    fn test_section_markup_is_line_per_element() {
        let html = render_html(&parse_document("=== Page 2A ===\nLéo saute.\nOption A1 : Rire"));
        let expected = concat!(
            "<article class=\"story\">\n",
            "<section class=\"story-page\" data-node=\"page2A\">\n",
            "  <h2 class=\"page-heading\">Page 2A</h2>\n",
            "  <div class=\"story-text\">\n",
            "    <p>Léo saute.</p>\n",
            "  </div>\n",
            "  <div class=\"options\">\n",
            "    <button type=\"button\" class=\"choice-button\" data-key=\"A1\" ",
            "data-goto=\"endingA1\">Rire</button>\n",
            "  </div>\n",
            "</section>\n",
            "</article>\n",
        );
        assert_eq!(html, expected);
    }

    #[test]
    fn test_terminal_section_has_no_options_block() {
        let html = render_html(&parse_document("=== Fin A1 ===\nIls rentrèrent.\n\nFIN"));
        assert!(!html.contains("class=\"options\""));
        assert_eq!(html.matches("<p>").count(), 2);
    }
}
