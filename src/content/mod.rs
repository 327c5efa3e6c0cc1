//! Article content fetching and extraction
//!
//! Turns a user-supplied link into extracted article text.
//!
//! ## Architecture
//!
//! ```text
//! Link → ContentFetcher → raw bytes → extractor (by ArticleKind) → ArticleText
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! let fetcher = ContentFetcher::new("ArticleQaBot/1.0", 30, 5);
//! let bytes = fetcher.fetch("https://example.com/article.pdf").await?;
//! let text = match ArticleKind::classify("https://example.com/article.pdf") {
//!     ArticleKind::Pdf => extract_pdf_text(&bytes, 5120)?,
//!     ArticleKind::Html => extract_paragraph_text(&String::from_utf8_lossy(&bytes)),
//! };
//! ```

pub mod fetcher;
pub mod html;
pub mod pdf;

pub use fetcher::{ContentFetcher, FetchError};
pub use html::extract_paragraph_text;
pub use pdf::{extract_pdf_text, truncate_chars, ExtractError};

/// How a link's content gets parsed, decided by the link suffix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArticleKind {
    /// Paginated PDF document
    Pdf,
    /// Anything else is treated as a web page
    Html,
}

impl ArticleKind {
    /// Classify a link by suffix (case-insensitive `.pdf`)
    pub fn classify(link: &str) -> Self {
        if link.to_lowercase().ends_with(".pdf") {
            Self::Pdf
        } else {
            Self::Html
        }
    }
}
