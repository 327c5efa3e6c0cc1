//! Interactive session state
//!
//! A `Session` is created on a successful extraction and replaced when a
//! new link is extracted. It owns the record file writer for its link, so
//! exactly one writer exists per open article.

use crate::record::Recorder;

/// One extracted article and its record file
#[derive(Debug)]
pub struct Session {
    /// The link the article was extracted from
    pub link: String,
    /// Extracted article text (capped for PDF sources)
    pub article_text: String,
    pub(crate) recorder: Recorder,
}

impl Session {
    pub(crate) fn new(link: String, article_text: String, recorder: Recorder) -> Self {
        Self {
            link,
            article_text,
            recorder,
        }
    }

    /// Path of this session's record file
    pub fn record_path(&self) -> &std::path::Path {
        self.recorder.path()
    }
}
