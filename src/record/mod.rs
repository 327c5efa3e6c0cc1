//! Per-link record persistence
//!
//! Every extracted article gets a semicolon-delimited UTF-8 CSV file named
//! after the sanitized link. The file starts with a `Link;Extracted Text`
//! header and one extraction row; each answered question appends one
//! `question;answer` row.
//!
//! Single-writer discipline: the `Recorder` created for a link is owned by
//! the session that extracted it, and it is the only writer of that file.

use anyhow::{Context, Result};
use serde::Serialize;
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Header + first data row of a record file
#[derive(Debug, Serialize)]
struct ExtractionRow<'a> {
    #[serde(rename = "Link")]
    link: &'a str,
    #[serde(rename = "Extracted Text")]
    extracted_text: &'a str,
}

/// Derive the record filename from the link: remove `/` and `:` and
/// append `.csv`.
pub fn record_filename(link: &str) -> String {
    let sanitized: String = link.chars().filter(|c| !matches!(c, '/' | ':')).collect();
    format!("{}.csv", sanitized)
}

/// Writer for one link's record file
#[derive(Debug)]
pub struct Recorder {
    path: PathBuf,
}

impl Recorder {
    /// Creates the record file for a link, replacing any previous file
    /// with the same derived name, and writes the header and the
    /// extraction row.
    pub fn create(records_dir: &Path, link: &str, article_text: &str) -> Result<Self> {
        let path = records_dir.join(record_filename(link));
        let mut writer = csv::WriterBuilder::new()
            .delimiter(b';')
            .from_path(&path)
            .with_context(|| format!("Failed to create record file {}", path.display()))?;
        writer.serialize(ExtractionRow {
            link,
            extracted_text: article_text,
        })?;
        writer.flush()?;

        debug!("Record file created: {}", path.display());
        Ok(Self { path })
    }

    /// Appends one question/answer row.
    pub fn append_qa(&self, question: &str, answer: &str) -> Result<()> {
        let file = OpenOptions::new()
            .append(true)
            .open(&self.path)
            .with_context(|| format!("Failed to open record file {}", self.path.display()))?;
        let mut writer = csv::WriterBuilder::new()
            .delimiter(b';')
            .has_headers(false)
            .from_writer(file);
        writer.write_record([question, answer])?;
        writer.flush()?;
        Ok(())
    }

    /// Path of the record file
    pub fn path(&self) -> &Path {
        &self.path
    }
}
