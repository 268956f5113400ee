//! HTML to text line extraction.

use scraper::{Html, Node};

/// Elements whose text is never rendered.
const HIDDEN_ELEMENTS: &[&str] = &["script", "style", "noscript", "template"];

/// Extracts the visible text of an HTML page as trimmed, non-blank lines in
/// document order.
///
/// Every text node contributes its own lines, so adjacent inline elements
/// end up on separate lines.
#[must_use]
pub fn extract_lines(html: &str) -> Vec<String> {
    let document = Html::parse_document(html);
    document
        .root_element()
        .descendants()
        .filter_map(|node| {
            let text = node.value().as_text()?;
            let hidden = node.ancestors().any(|ancestor| {
                matches!(ancestor.value(), Node::Element(el) if HIDDEN_ELEMENTS.contains(&el.name()))
            });
            (!hidden).then_some(&**text)
        })
        .flat_map(str::lines)
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_lines_drops_blanks_and_trims() {
        // Arrange
        let html = "<html><body>\n  <h2> Programación de Jueves 1 </h2>\n\n<p>08:00</p>\n<p>  Noticias  </p></body></html>";

        // Act
        let lines = extract_lines(html);

        // Assert
        assert_eq!(lines, ["Programación de Jueves 1", "08:00", "Noticias"]);
    }

    #[test]
    fn test_extract_lines_splits_inline_elements() {
        // Arrange
        let html = "<div><span>08:00</span><span>Noticias</span></div>";

        // Act
        let lines = extract_lines(html);

        // Assert
        assert_eq!(lines, ["08:00", "Noticias"]);
    }

    #[test]
    fn test_extract_lines_splits_multiline_text() {
        // Arrange
        let html = "<pre>09:00\nDeportes\n\n10:00</pre>";

        // Act
        let lines = extract_lines(html);

        // Assert
        assert_eq!(lines, ["09:00", "Deportes", "10:00"]);
    }

    #[test]
    fn test_extract_lines_skips_scripts_and_styles() {
        // Arrange
        let html = "<html><head><style>p { color: red; }</style>\
                    <script>var x = \"08:00\";</script></head>\
                    <body><p>Visible</p><noscript>Enable JS</noscript></body></html>";

        // Act
        let lines = extract_lines(html);

        // Assert
        assert_eq!(lines, ["Visible"]);
    }

    #[test]
    fn test_extract_lines_decodes_entities() {
        // Arrange
        let html = "<p>Programaci&oacute;n de S&aacute;bado 3</p><p>Caf&eacute; &amp; Noticias</p>";

        // Act
        let lines = extract_lines(html);

        // Assert
        assert_eq!(lines, ["Programación de Sábado 3", "Café & Noticias"]);
    }

    #[test]
    fn test_extract_lines_empty_document() {
        // Arrange & Act
        let lines = extract_lines("");

        // Assert
        assert!(lines.is_empty());
    }
}
