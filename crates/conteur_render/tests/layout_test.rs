//! Layout tests for the PDF renderer.

use conteur_render::{Block, TextStyle, layout_pdf, parse_document, render_pdf, write_pdf};

fn content_blocks(text: &str) -> Vec<Block> {
    let layout = layout_pdf(&parse_document(text), Some("Titre"), None).unwrap();
    layout.blocks()[1..].to_vec()
}

#[test]
fn test_options_section_yields_heading_prose_and_two_options() {
    let expected = vec![
        Block::Heading("Page 1".to_string()),
        Block::Prose("Léo arrive devant la rivière.".to_string()),
        Block::Option("Option A : Nager".to_string()),
        Block::Option("Option B : Construire un pont".to_string()),
    ];

    let variants = [
        "=== Page 1 ===\nLéo arrive devant la rivière.\nOption A : Nager\nOption B : Construire un pont",
        "\n\n===   Page 1   ===\n\n   Léo arrive devant la rivière.   \n\n\n  Option A :   Nager  \n\nOption B : Construire un pont\n\n",
        "=== Page 1 ===\r\nLéo arrive devant la rivière.\r\n\r\nOption A : Nager\r\nOption B : Construire un pont\r\n",
        "=== Page 1 ===\nLéo arrive\ndevant la rivière.\n\t\nOption A: Nager\nOption B: Construire un pont",
    ];
    for text in variants {
        assert_eq!(content_blocks(text), expected, "input: {:?}", text);
    }
}

#[test]
fn test_long_story_breaks_pages_and_numbers_every_page() {
    let paragraph =
        "Le petit dragon vola au-dessus des collines et des forêts profondes. ".repeat(12);
    let mut text = String::new();
    for heading in ["Introduction", "Page 1", "Page 2A", "Page 2B"] {
        text.push_str(&format!("=== {} ===\n{}\n\n{}\n\n", heading, paragraph, paragraph));
    }

    let layout = layout_pdf(&parse_document(&text), None, None).unwrap();
    let total = layout.pages().len();
    assert!(total > 3, "expected several pages, got {}", total);

    for page in layout.pages() {
        let footer = page.footer().expect("footer on every page");
        assert_eq!(footer.text(), &format!("Page {} / {}", page.number(), total));
        for line in page.lines() {
            assert!(*line.y_mm() >= 12.0, "line below footer: {:?}", line);
            if *line.style() != TextStyle::Footer && page.number() > &1 {
                assert!(*line.y_mm() >= 25.0, "line in bottom margin: {:?}", line);
            }
        }
    }
}

#[test]
fn test_heading_is_never_last_line_of_a_page() {
    let filler = "Une phrase assez longue pour remplir une bonne partie de la ligne. ".repeat(30);
    let text = format!(
        "=== Introduction ===\n{}\n\n=== Page 1 ===\n{}\n\n=== Fin A1 ===\nFIN",
        filler, filler
    );
    let layout = layout_pdf(&parse_document(&text), Some("Titre"), None).unwrap();

    for page in layout.pages() {
        let content: Vec<_> = page
            .lines()
            .iter()
            .filter(|line| *line.style() != TextStyle::Footer)
            .collect();
        if let Some(last) = content.last() {
            assert_ne!(*last.style(), TextStyle::Heading, "page {}", page.number());
        }
    }
}

#[test]
fn test_cover_uses_derived_title_and_subtitle() {
    let layout = layout_pdf(
        &parse_document("=== Introduction ===\nUn garçon qui s'appelait Malo rêvait."),
        None,
        Some("Pour Malo"),
    )
    .unwrap();
    let cover = &layout.pages()[0];
    let texts: Vec<_> = cover.lines().iter().map(|line| line.text().as_str()).collect();
    assert!(texts.contains(&"L'aventure de Malo"));
    assert!(texts.contains(&"Pour Malo"));
    assert!(texts.contains(&"Page 1 / 2"));
}

#[test]
fn test_text_without_headings_starts_after_the_cover() {
    let inputs = [
        "Il était une fois Léo, un petit dragon curieux. ".repeat(40),
        "Option A : Voler\nOption B : Nager".to_string(),
        "Léo s'endort.\n\n=== Page 1 ===\nLe matin arrive.".to_string(),
    ];
    for text in inputs {
        let layout =
            layout_pdf(&parse_document(&text), Some("Le dragon"), Some("Pour Léo")).unwrap();
        assert!(layout.pages().len() >= 2, "input: {:?}", text);

        let cover_styles: Vec<TextStyle> = layout.pages()[0]
            .lines()
            .iter()
            .map(|line| *line.style())
            .collect();
        assert_eq!(
            cover_styles,
            vec![TextStyle::Title, TextStyle::Subtitle, TextStyle::Footer],
            "input: {:?}",
            text
        );

        let first = &layout.pages()[1].lines()[0];
        assert_ne!(*first.style(), TextStyle::Footer);
        assert!(*first.y_mm() > 250.0, "content starts at the top: {:?}", first);
    }
}

#[test]
fn test_empty_document_is_rejected() {
    assert!(layout_pdf(&parse_document(" \n\n "), None, None).is_err());
    assert!(render_pdf("", Some("Titre"), None).is_err());
}

#[test]
fn test_written_pdf_has_pdf_header() {
    let text = "=== Introduction ===\nZoé s’élance vers la forêt → vite !\n\n=== Fin A1 ===\nFIN";
    let layout = layout_pdf(&parse_document(text), None, None).unwrap();
    let bytes = write_pdf(&layout).unwrap();
    assert!(bytes.starts_with(b"%PDF"));
}
