// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! Pretrained model acquisition
//!
//! Resolves the ONNX model and tokenizer files for a pretrained model,
//! either from a local directory override or from the Hugging Face Hub
//! (downloaded into the local HF cache on first use).

use anyhow::{Context, Result};
use hf_hub::api::tokio::Api;
use std::path::PathBuf;
use tracing::info;

/// Filename of the ONNX graph inside a model repo / local directory
const MODEL_FILE: &str = "model.onnx";
/// Filename of the tokenizer definition
const TOKENIZER_FILE: &str = "tokenizer.json";

/// Resolved on-disk locations of a pretrained model's files
#[derive(Debug, Clone)]
pub struct ModelFiles {
    /// Path to the ONNX model file
    pub model: PathBuf,
    /// Path to the tokenizer JSON file
    pub tokenizer: PathBuf,
}

/// Resolve the files for a pretrained model.
///
/// When `local_dir` is set, both files must already exist there. Otherwise
/// the files are fetched from the Hub repo `repo_id` (Xenova-style layout,
/// with the graph under `onnx/model.onnx`).
pub async fn resolve_model_files(repo_id: &str, local_dir: Option<&str>) -> Result<ModelFiles> {
    if let Some(dir) = local_dir {
        let dir = PathBuf::from(dir);
        let model = dir.join(MODEL_FILE);
        let tokenizer = dir.join(TOKENIZER_FILE);
        if !model.exists() {
            anyhow::bail!("ONNX model file not found: {}", model.display());
        }
        if !tokenizer.exists() {
            anyhow::bail!("Tokenizer file not found: {}", tokenizer.display());
        }
        info!("Using local model files from {}", dir.display());
        return Ok(ModelFiles { model, tokenizer });
    }

    info!("Resolving {} from the Hugging Face Hub", repo_id);
    let api = Api::new().context("Failed to initialize Hugging Face Hub client")?;
    let repo = api.model(repo_id.to_string());

    let model = repo
        .get(&format!("onnx/{}", MODEL_FILE))
        .await
        .with_context(|| format!("Failed to fetch {}/onnx/{}", repo_id, MODEL_FILE))?;
    let tokenizer = repo
        .get(TOKENIZER_FILE)
        .await
        .with_context(|| format!("Failed to fetch {}/{}", repo_id, TOKENIZER_FILE))?;

    Ok(ModelFiles { model, tokenizer })
}
