//! Configuration for the article QA node
//!
//! Defines settings for HTTP fetching, extraction limits, summarization
//! and the pretrained model locations.

use std::env;

/// Node configuration, loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// User-Agent header sent with article fetches
    pub user_agent: String,
    /// Timeout per fetch in seconds (default: 30)
    pub fetch_timeout_secs: u64,
    /// Maximum redirects to follow (default: 5)
    pub max_redirects: usize,
    /// Maximum characters kept from a PDF extraction (default: 5120)
    pub pdf_max_chars: usize,
    /// Fraction of sentences kept by the summarizer (default: 0.2)
    pub summary_ratio: f64,
    /// Maximum token sequence length for the QA model (default: 512)
    pub qa_max_seq_len: usize,
    /// Hugging Face repo for the extractive QA model
    pub qa_model_repo: String,
    /// Local directory with model.onnx + tokenizer.json (overrides the repo)
    pub qa_model_dir: Option<String>,
    /// Hugging Face repo for the sentence embedding model
    pub embed_model_repo: String,
    /// Local directory with model.onnx + tokenizer.json (overrides the repo)
    pub embed_model_dir: Option<String>,
    /// Directory where per-link record files are written (default: ".")
    pub records_dir: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            user_agent: env::var("FETCH_USER_AGENT").unwrap_or_else(|_| {
                "Mozilla/5.0 (compatible; ArticleQaBot/1.0)".to_string()
            }),
            fetch_timeout_secs: env::var("FETCH_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(30),
            max_redirects: env::var("FETCH_MAX_REDIRECTS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(5),
            pdf_max_chars: env::var("PDF_MAX_CHARS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(5120),
            summary_ratio: env::var("SUMMARY_RATIO")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(0.2),
            qa_max_seq_len: env::var("QA_MAX_SEQ_LEN")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(512),
            qa_model_repo: env::var("QA_MODEL_REPO").unwrap_or_else(|_| {
                "Xenova/bert-large-uncased-whole-word-masking-finetuned-squad".to_string()
            }),
            qa_model_dir: env::var("QA_MODEL_DIR").ok(),
            embed_model_repo: env::var("EMBED_MODEL_REPO")
                .unwrap_or_else(|_| "Xenova/all-MiniLM-L6-v2".to_string()),
            embed_model_dir: env::var("EMBED_MODEL_DIR").ok(),
            records_dir: env::var("RECORDS_DIR").unwrap_or_else(|_| ".".to_string()),
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), String> {
        if self.fetch_timeout_secs == 0 {
            return Err("fetch_timeout_secs must be at least 1".to_string());
        }
        if self.pdf_max_chars < 100 {
            return Err("pdf_max_chars must be at least 100".to_string());
        }
        if !(self.summary_ratio > 0.0 && self.summary_ratio <= 1.0) {
            return Err("summary_ratio must be in (0, 1]".to_string());
        }
        if self.qa_max_seq_len < 32 {
            return Err("qa_max_seq_len must be at least 32".to_string());
        }
        if self.qa_model_repo.is_empty() && self.qa_model_dir.is_none() {
            return Err("either qa_model_repo or qa_model_dir must be set".to_string());
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            user_agent: "Mozilla/5.0 (compatible; ArticleQaBot/1.0)".to_string(),
            fetch_timeout_secs: 30,
            max_redirects: 5,
            pdf_max_chars: 5120,
            summary_ratio: 0.2,
            qa_max_seq_len: 512,
            qa_model_repo: "Xenova/bert-large-uncased-whole-word-masking-finetuned-squad"
                .to_string(),
            qa_model_dir: None,
            embed_model_repo: "Xenova/all-MiniLM-L6-v2".to_string(),
            embed_model_dir: None,
            records_dir: ".".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = Config::default();
        assert_eq!(config.fetch_timeout_secs, 30);
        assert_eq!(config.max_redirects, 5);
        assert_eq!(config.pdf_max_chars, 5120);
        assert_eq!(config.qa_max_seq_len, 512);
        assert!((config.summary_ratio - 0.2).abs() < f64::EPSILON);
        assert_eq!(config.records_dir, ".");
    }

    #[test]
    fn test_config_validation() {
        let mut config = Config::default();
        assert!(config.validate().is_ok());

        config.fetch_timeout_secs = 0;
        assert!(config.validate().is_err());

        config.fetch_timeout_secs = 30;
        config.pdf_max_chars = 50;
        assert!(config.validate().is_err());

        config.pdf_max_chars = 5120;
        config.summary_ratio = 0.0;
        assert!(config.validate().is_err());

        config.summary_ratio = 1.5;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_from_env() {
        // Test that from_env doesn't panic with no env vars
        let config = Config::from_env();
        assert!(config.validate().is_ok());
    }
}
