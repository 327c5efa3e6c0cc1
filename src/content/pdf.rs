//! PDF article extraction
//!
//! Extracts page text from PDF byte streams in page order and caps the
//! result at a fixed character budget.

use thiserror::Error;

/// PDF extraction error
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("failed to parse PDF: {0}")]
    Pdf(String),
}

/// Extract text from a PDF byte stream.
///
/// Pages are concatenated in page order, then hard-truncated to the first
/// `max_chars` characters. Truncation is a hard cutoff, not sentence-aware.
pub fn extract_pdf_text(bytes: &[u8], max_chars: usize) -> Result<String, ExtractError> {
    let text = pdf_extract::extract_text_from_mem(bytes)
        .map_err(|e| ExtractError::Pdf(e.to_string()))?;
    Ok(truncate_chars(&text, max_chars))
}

/// Hard cutoff after `max_chars` characters.
///
/// Counts characters rather than bytes so the cut never lands inside a
/// UTF-8 sequence.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => text[..idx].to_string(),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_text_unchanged() {
        let text = "a".repeat(5120);
        assert_eq!(truncate_chars(&text, 5120), text);
        assert_eq!(truncate_chars("short", 5120), "short");
    }

    #[test]
    fn test_long_text_cut_to_exactly_max_chars() {
        // Two 4000-char pages concatenate to 8000 and cap at 5120
        let concatenated = "x".repeat(8000);
        let truncated = truncate_chars(&concatenated, 5120);
        assert_eq!(truncated.chars().count(), 5120);
        assert_eq!(truncated, concatenated[..5120]);
    }

    #[test]
    fn test_truncation_counts_chars_not_bytes() {
        let text = "é".repeat(10);
        let truncated = truncate_chars(&text, 5);
        assert_eq!(truncated.chars().count(), 5);
        assert_eq!(truncated, "é".repeat(5));
    }

    #[test]
    fn test_invalid_pdf_bytes_error() {
        let result = extract_pdf_text(b"definitely not a pdf", 5120);
        assert!(result.is_err());
    }
}
