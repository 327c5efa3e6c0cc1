// Version information for the Article QA Node

/// Full version string with feature description
pub const VERSION: &str = "v0.1.0-extractive-qa-2025-08-28";

/// Semantic version number
pub const VERSION_NUMBER: &str = "0.1.0";

/// Build date
pub const BUILD_DATE: &str = "2025-08-28";

/// Supported features in this version
pub const FEATURES: &[&str] = &[
    "html-extraction",
    "pdf-extraction",
    "extractive-summarization",
    "extractive-qa",
    "per-link-records",
];

/// Get formatted version string for logging
pub fn get_version_string() -> String {
    format!("Article QA Node {} ({})", VERSION_NUMBER, BUILD_DATE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_constants() {
        assert_eq!(VERSION_NUMBER, "0.1.0");
        assert!(FEATURES.contains(&"extractive-qa"));
        assert!(FEATURES.contains(&"pdf-extraction"));
    }

    #[test]
    fn test_version_string() {
        let version = get_version_string();
        assert!(version.contains("0.1.0"));
        assert!(version.contains("2025-08-28"));
    }
}
