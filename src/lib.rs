// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
pub mod config;
pub mod content;
pub mod embeddings;
pub mod engine;
pub mod models;
pub mod qa;
pub mod record;
pub mod session;
pub mod summarize;
pub mod version;

// Re-export main types
pub use config::Config;
pub use content::{ArticleKind, ContentFetcher, FetchError};
pub use engine::{ArticleEngine, OpenedArticle};
pub use qa::{QaModel, NO_ANSWER};
pub use record::Recorder;
pub use session::Session;
pub use summarize::Summarizer;
