//! Inline HTML rendering tests.

use conteur_render::{parse_document, render_html};

const STORY: &str = "=== Introduction ===
Il était une fois <Léo> & son chien.

=== Page 1 ===
Léo hésite.
Option A : Traverser le \"pont\"
Option B : Rester

=== Fin A1 ===
Tout finit bien.

FIN";

#[test]
fn test_prose_and_labels_are_escaped() {
    let html = render_html(&parse_document(STORY));
    assert!(html.contains("Il était une fois &lt;Léo&gt; &amp; son chien."));
    assert!(html.contains("Traverser le &quot;pont&quot;"));
    assert!(!html.contains("<Léo>"));
}

#[test]
fn test_option_buttons_target_child_nodes() {
    let html = render_html(&parse_document(STORY));
    assert!(html.contains("data-key=\"A\" data-goto=\"page2A\""));
    assert!(html.contains("data-key=\"B\" data-goto=\"page2B\""));
    assert_eq!(html.matches("<section class=\"story-page\"").count(), 3);
    assert!(html.contains("data-node=\"endingA1\""));
}

#[test]
fn test_unknown_option_key_has_no_target() {
    let html = render_html(&parse_document("=== Page 9 ===\nTexte.\nOption Z : Ailleurs"));
    assert!(html.contains("data-key=\"Z\">Ailleurs</button>"));
    assert!(!html.contains("data-node"));
}
