//! Textual conventions of the assembled story document.
//!
//! Sections are introduced by `=== Heading ===` lines and end with option lines
//! of the form `Option A : label`. Terminal pages close with [`END_MARKER`].

/// Marker closing every terminal page.
pub const END_MARKER: &str = "FIN";

/// Formats a section header line.
///
/// ```
/// assert_eq!(conteur_core::format_section_header("Page 1"), "=== Page 1 ===");
/// ```
pub fn format_section_header(heading: &str) -> String {
    format!("=== {} ===", heading.trim())
}

/// Parses a section header line, returning the heading.
///
/// Accepts `=== Heading ===` (any run of three or more `=`) and markdown
/// `#`-headings. Surrounding whitespace is ignored.
///
/// ```
/// use conteur_core::parse_section_header;
///
/// assert_eq!(parse_section_header("  ===  Page 2A ===  "), Some("Page 2A"));
/// assert_eq!(parse_section_header("## Fin A1"), Some("Fin A1"));
/// assert_eq!(parse_section_header("Il était une fois"), None);
/// ```
pub fn parse_section_header(line: &str) -> Option<&str> {
    let line = line.trim();
    if line.starts_with("===") {
        let heading = line.trim_start_matches('=').trim_end_matches('=').trim();
        return (!heading.is_empty()).then_some(heading);
    }
    if line.starts_with('#') {
        let heading = line.trim_start_matches('#').trim();
        return (!heading.is_empty()).then_some(heading);
    }
    None
}

/// Formats an option line.
///
/// ```
/// assert_eq!(conteur_core::format_option_line("A", "Ouvrir la porte"), "Option A : Ouvrir la porte");
/// ```
pub fn format_option_line(key: &str, label: &str) -> String {
    format!("Option {} : {}", key, label.trim())
}

/// Parses an option line into `(key, label)`.
///
/// Tolerates markdown emphasis and list markers, any spacing around the colon,
/// and a lowercase `option` keyword.
///
/// ```
/// use conteur_core::parse_option_line;
///
/// assert_eq!(parse_option_line("Option A1 : Suivre le chat"), Some(("A1", "Suivre le chat")));
/// assert_eq!(parse_option_line("- **Option B**: Rester"), Some(("B", "Rester")));
/// assert_eq!(parse_option_line("Une option intéressante"), None);
/// ```
pub fn parse_option_line(line: &str) -> Option<(&str, &str)> {
    let line = line
        .trim()
        .trim_start_matches(['-', '*', '•'])
        .trim_start()
        .trim_start_matches('*');
    let rest = line
        .strip_prefix("Option")
        .or_else(|| line.strip_prefix("option"))
        .or_else(|| line.strip_prefix("OPTION"))?;
    if !rest.starts_with([' ', '\t']) {
        return None;
    }
    let (key, label) = rest.split_once(':')?;
    let key = key.trim().trim_matches('*').trim();
    if key.is_empty() || key.len() > 3 || !key.chars().all(|c| c.is_ascii_alphanumeric()) {
        return None;
    }
    let label = label.trim().trim_matches('*').trim();
    Some((key, label))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_round_trips_heading() {
        let header = format_section_header("Introduction");
        assert_eq!(parse_section_header(&header), Some("Introduction"));
    }

    #[test]
    fn test_empty_header_is_not_a_header() {
        assert_eq!(parse_section_header("======"), None);
        assert_eq!(parse_section_header("#"), None);
    }

    #[test]
    fn test_option_line_rejects_prose_with_colon() {
        assert_eq!(parse_option_line("Optionnellement : rien"), None);
        assert_eq!(parse_option_line("Option numéro un : rien"), None);
    }

    #[test]
    fn test_option_line_with_bold_key() {
        assert_eq!(
            parse_option_line("**Option A :** Grimper à l'arbre"),
            Some(("A", "Grimper à l'arbre"))
        );
    }
}
