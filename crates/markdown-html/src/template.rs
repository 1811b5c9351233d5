//! The fixed page scaffold wrapped around every rendered fragment.

use html_escape::encode_text;
use markdown_html_config::DocumentMeta;

use crate::convert::Fragment;

/// Inline stylesheet: print layout, typography, tables, code, header/footer.
pub const STYLE: &str = include_str!("../assets/style.css");

/// Inline script: print button handler and diagram/status highlighting.
pub const SCRIPT: &str = include_str!("../assets/script.js");

const PRINT_BUTTON: &str = r#"    <div class="no-print">
        <button class="print-button" onclick="printDocument()">🖨️ Print to PDF</button>
    </div>"#;

/// Standalone HTML page template bound to a set of document metadata.
#[derive(Clone, Debug)]
pub struct Document {
    meta: DocumentMeta,
}

impl Document {
    pub fn new(meta: DocumentMeta) -> Self {
        Self { meta }
    }

    pub fn render(&self, fragment: &Fragment) -> String {
        self.render_content(&fragment.html)
    }

    /// Embed an already rendered HTML fragment in the page.
    pub fn render_content(&self, content: &str) -> String {
        let mut page = String::with_capacity(STYLE.len() + SCRIPT.len() + content.len() + 1024);

        page.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
        page.push_str("    <meta charset=\"UTF-8\">\n");
        page.push_str(
            "    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n",
        );
        page.push_str(&format!(
            "    <title>{}</title>\n",
            encode_text(&self.meta.page_title)
        ));
        page.push_str("    <style>\n");
        page.push_str(STYLE);
        page.push_str("    </style>\n</head>\n<body>\n");

        page.push_str(PRINT_BUTTON);
        page.push_str("\n\n");
        page.push_str(&header_block(&self.meta));
        page.push_str("\n\n    <div class=\"document-content\">\n");
        page.push_str(content);
        page.push_str("    </div>\n\n");
        page.push_str(&footer_block(&self.meta));
        page.push_str("\n\n    <script>\n");
        page.push_str(SCRIPT);
        page.push_str("    </script>\n</body>\n</html>\n");

        page
    }
}

/// Title banner placed above the content region.
pub fn header_block(meta: &DocumentMeta) -> String {
    format!(
        "    <div class=\"document-header\">\n        \
         <div class=\"document-title\">{}</div>\n        \
         <div class=\"document-subtitle\">{}</div>\n    \
         </div>",
        encode_text(&meta.title),
        encode_text(&meta.subtitle)
    )
}

/// Version, date and author block placed below the content region.
pub fn footer_block(meta: &DocumentMeta) -> String {
    format!(
        "    <div class=\"document-footer\">\n        \
         <p><strong>Document Version:</strong> {}</p>\n        \
         <p><strong>Last Updated:</strong> {}</p>\n        \
         <p><strong>Authors:</strong> {}</p>\n    \
         </div>",
        encode_text(&meta.version),
        encode_text(&meta.last_updated),
        encode_text(&meta.authors)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn document() -> Document {
        Document::new(DocumentMeta::default())
    }

    #[test]
    fn empty_content_still_yields_full_page() {
        let page = document().render_content("");

        assert!(page.starts_with("<!DOCTYPE html>\n"));
        assert!(page.contains("<title>Ganjes DAO - Comprehensive Design Document</title>"));
        assert!(page.contains("<div class=\"document-content\">\n    </div>"));
        assert!(page.contains("<style>"));
        assert!(page.contains("<script>"));
        assert!(page.trim_end().ends_with("</html>"));
    }

    #[test]
    fn header_and_footer_appear_once() {
        let meta = DocumentMeta::default();
        let page = document().render_content("<h1>Intro</h1>\n<p>Body</p>\n");

        assert_eq!(page.matches(&header_block(&meta)).count(), 1);
        assert_eq!(page.matches(&footer_block(&meta)).count(), 1);
        assert_eq!(page.matches("<style>").count(), 1);
        assert_eq!(page.matches("<script>").count(), 1);
    }

    #[test]
    fn content_sits_between_header_and_footer() {
        let meta = DocumentMeta::default();
        let page = document().render_content("<p>marker</p>\n");

        let header = page.find(&header_block(&meta)).unwrap();
        let content = page.find("<p>marker</p>").unwrap();
        let footer = page.find(&footer_block(&meta)).unwrap();
        assert!(header < content && content < footer);
    }

    #[test]
    fn footer_carries_version_and_date() {
        let footer = footer_block(&DocumentMeta::default());
        assert!(footer.contains("<strong>Document Version:</strong> 1.0"));
        assert!(footer.contains("<strong>Last Updated:</strong> August 7, 2025"));
    }

    #[test]
    fn assets_are_embedded() {
        assert!(STYLE.contains(".document-header"));
        assert!(STYLE.contains("@media print"));
        assert!(SCRIPT.contains("function printDocument()"));
    }
}
