//! HTML article extraction
//!
//! Extracts article text from web pages by collecting paragraph elements.

use scraper::{Html, Selector};

/// Extract article text from HTML
///
/// Selects every `<p>` element in document order and joins their texts
/// with a single space. No deduplication and no whitespace normalization
/// beyond what the parser provides.
pub fn extract_paragraph_text(html: &str) -> String {
    let document = Html::parse_document(html);

    if let Ok(selector) = Selector::parse("p") {
        document
            .select(&selector)
            .map(|p| p.text().collect::<String>())
            .collect::<Vec<_>>()
            .join(" ")
    } else {
        String::new()
    }
}
