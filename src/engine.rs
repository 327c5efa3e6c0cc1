// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! Article QA engine
//!
//! Ties the pipeline together: fetch → extract → record → summarize, plus
//! question answering against the open session. Both pretrained models are
//! loaded once at startup and reused for every request; they live for the
//! process lifetime.

use anyhow::Result;
use std::path::Path;
use std::sync::Arc;
use tracing::info;

use crate::config::Config;
use crate::content::{extract_paragraph_text, extract_pdf_text, ArticleKind, ContentFetcher};
use crate::embeddings::SentenceEmbedder;
use crate::models::resolve_model_files;
use crate::qa::QaModel;
use crate::record::Recorder;
use crate::session::Session;
use crate::summarize::Summarizer;

/// Result of opening a link: the new session and its summary
#[derive(Debug)]
pub struct OpenedArticle {
    pub session: Session,
    pub summary: String,
}

/// Process-wide engine holding the fetcher and the loaded models
pub struct ArticleEngine {
    config: Config,
    fetcher: ContentFetcher,
    qa: Arc<QaModel>,
    summarizer: Summarizer,
}

impl ArticleEngine {
    /// Loads both pretrained models and builds the HTTP client.
    pub async fn new(config: Config) -> Result<Self> {
        let fetcher = ContentFetcher::new(
            &config.user_agent,
            config.fetch_timeout_secs,
            config.max_redirects,
        );

        info!("Loading QA model: {}", config.qa_model_repo);
        let qa_files =
            resolve_model_files(&config.qa_model_repo, config.qa_model_dir.as_deref()).await?;
        let qa = Arc::new(
            QaModel::load(&config.qa_model_repo, &qa_files, config.qa_max_seq_len).await?,
        );

        info!("Loading sentence embedding model: {}", config.embed_model_repo);
        let embed_files =
            resolve_model_files(&config.embed_model_repo, config.embed_model_dir.as_deref())
                .await?;
        let embedder =
            Arc::new(SentenceEmbedder::load(&config.embed_model_repo, &embed_files).await?);
        let summarizer = Summarizer::new(embedder, config.summary_ratio);

        Ok(Self {
            config,
            fetcher,
            qa,
            summarizer,
        })
    }

    /// Fetch, extract, record and summarize an article.
    ///
    /// Returns the new session, which replaces any previously open one at
    /// the caller.
    pub async fn open(&self, link: &str) -> Result<OpenedArticle> {
        let bytes = self.fetcher.fetch(link).await?;

        let article_text = match ArticleKind::classify(link) {
            ArticleKind::Pdf => extract_pdf_text(&bytes, self.config.pdf_max_chars)?,
            ArticleKind::Html => extract_paragraph_text(&String::from_utf8_lossy(&bytes)),
        };
        info!("Extracted {} characters from {}", article_text.len(), link);

        let recorder = Recorder::create(Path::new(&self.config.records_dir), link, &article_text)?;
        let summary = self.summarizer.summarize(&article_text).await?;

        Ok(OpenedArticle {
            session: Session::new(link.to_string(), article_text, recorder),
            summary,
        })
    }

    /// Answer a question against the session's article text and append the
    /// question/answer row to the session's record file.
    pub async fn ask(&self, session: &Session, question: &str) -> Result<String> {
        let answer = self.qa.answer(question, &session.article_text).await?;
        session.recorder.append_qa(question, &answer)?;
        Ok(answer)
    }

    /// Recompute the summary for the session's current article text.
    pub async fn summarize(&self, session: &Session) -> Result<String> {
        self.summarizer.summarize(&session.article_text).await
    }
}
