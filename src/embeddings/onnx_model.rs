// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! ONNX sentence embedding model wrapper
//!
//! Runs a pretrained sentence-transformer (e.g. all-MiniLM-L6-v2) through
//! ONNX Runtime on CPU and mean-pools the token embeddings into one vector
//! per input text.

use anyhow::{Context, Result};
use ndarray::{Array2, Axis};
use ort::execution_providers::CPUExecutionProvider;
use ort::session::builder::GraphOptimizationLevel;
use ort::session::Session;
use ort::value::Value;
use std::path::Path;
use std::sync::{Arc, Mutex};
use tokenizers::{Encoding, Tokenizer, TruncationParams, TruncationStrategy};
use tracing::info;

use crate::models::ModelFiles;

/// Maximum token sequence length fed to the embedding model
const MAX_LENGTH: usize = 256;

/// Builds a CPU-only ONNX Runtime session for a BERT-style graph.
pub(crate) fn build_session(model_path: &Path) -> Result<Session> {
    Session::builder()
        .context("Failed to create session builder")?
        .with_execution_providers([CPUExecutionProvider::default().build()])
        .context("Failed to set CPU execution provider")?
        .with_optimization_level(GraphOptimizationLevel::Level3)
        .context("Failed to set optimization level")?
        .with_intra_threads(4)
        .context("Failed to set intra threads")?
        .commit_from_file(model_path)
        .with_context(|| format!("Failed to load ONNX model from {}", model_path.display()))
}

/// Shapes one encoding into the three `[1, seq_len]` input tensors a
/// BERT-style graph expects.
pub(crate) fn encoding_tensors(
    encoding: &Encoding,
) -> Result<(Array2<i64>, Array2<i64>, Array2<i64>)> {
    let input_ids: Vec<i64> = encoding.get_ids().iter().map(|&id| id as i64).collect();
    let attention_mask: Vec<i64> = encoding
        .get_attention_mask()
        .iter()
        .map(|&m| m as i64)
        .collect();
    let token_type_ids: Vec<i64> = encoding
        .get_type_ids()
        .iter()
        .map(|&t| t as i64)
        .collect();

    let len = input_ids.len();
    Ok((
        Array2::from_shape_vec((1, len), input_ids)
            .context("Failed to create input_ids array")?,
        Array2::from_shape_vec((1, len), attention_mask)
            .context("Failed to create attention_mask array")?,
        Array2::from_shape_vec((1, len), token_type_ids)
            .context("Failed to create token_type_ids array")?,
    ))
}

/// ONNX-based sentence embedding model
///
/// # Thread Safety
/// The session sits behind `Arc<Mutex>` so the embedder can be shared and
/// cloned cheaply.
#[derive(Clone)]
pub struct SentenceEmbedder {
    /// ONNX Runtime session (Mutex for thread-safe shared access)
    session: Arc<Mutex<Session>>,
    /// BERT tokenizer
    tokenizer: Arc<Tokenizer>,
    /// Model name, for logging
    model_name: String,
    /// Output dimension, discovered with a probe inference at load time
    dimension: usize,
}

impl std::fmt::Debug for SentenceEmbedder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SentenceEmbedder")
            .field("model_name", &self.model_name)
            .field("dimension", &self.dimension)
            .finish_non_exhaustive()
    }
}

impl SentenceEmbedder {
    /// Loads the embedding model and tokenizer from resolved files.
    ///
    /// Runs one probe inference to learn the hidden dimension and to fail
    /// fast on a graph that doesn't output token-level embeddings.
    pub async fn load(model_name: impl Into<String>, files: &ModelFiles) -> Result<Self> {
        let model_name = model_name.into();

        let mut session = build_session(&files.model)?;

        let mut tokenizer = Tokenizer::from_file(&files.tokenizer)
            .map_err(|e| anyhow::anyhow!("Failed to load tokenizer: {}", e))?;
        tokenizer
            .with_truncation(Some(TruncationParams {
                max_length: MAX_LENGTH,
                strategy: TruncationStrategy::LongestFirst,
                ..Default::default()
            }))
            .map_err(|e| anyhow::anyhow!("Failed to configure truncation: {}", e))?;

        // Probe inference: the outputs borrow the session, so the block
        // ends before the session is moved.
        let dimension = {
            let encoding = tokenizer
                .encode("probe", true)
                .map_err(|e| anyhow::anyhow!("Tokenizer probe failed: {}", e))?;
            let (input_ids, attention_mask, token_type_ids) = encoding_tensors(&encoding)?;
            let outputs = session.run(ort::inputs![
                "input_ids" => Value::from_array(input_ids)?,
                "attention_mask" => Value::from_array(attention_mask)?,
                "token_type_ids" => Value::from_array(token_type_ids)?
            ])?;
            let output_tensor = outputs[0]
                .try_extract_array::<f32>()
                .context("Failed to extract output tensor")?;
            let shape = output_tensor.shape().to_vec();
            // Token-level embeddings: [batch, seq_len, hidden_dim]
            if shape.len() != 3 {
                anyhow::bail!(
                    "Model outputs unexpected shape {:?} (expected [batch, seq_len, hidden_dim])",
                    shape
                );
            }
            shape[2]
        };

        info!(
            "Sentence embedding model {} loaded ({} dimensions)",
            model_name, dimension
        );

        Ok(Self {
            session: Arc::new(Mutex::new(session)),
            tokenizer: Arc::new(tokenizer),
            model_name,
            dimension,
        })
    }

    /// Model name
    pub fn model_name(&self) -> &str {
        &self.model_name
    }

    /// Embedding dimension
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Generates the embedding for a single text.
    ///
    /// Mean pooling over the sequence dimension, weighted by the attention
    /// mask so padding tokens don't contribute.
    pub async fn embed(&self, text: &str) -> Result<Vec<f32>> {
        let encoding = self
            .tokenizer
            .encode(text, true)
            .map_err(|e| anyhow::anyhow!("Tokenization failed: {}", e))?;
        let mask = encoding.get_attention_mask().to_vec();
        let (input_ids, attention_mask, token_type_ids) = encoding_tensors(&encoding)?;

        let mut session = self.session.lock().unwrap();
        let outputs = session.run(ort::inputs![
            "input_ids" => Value::from_array(input_ids)?,
            "attention_mask" => Value::from_array(attention_mask)?,
            "token_type_ids" => Value::from_array(token_type_ids)?
        ])?;
        let output_array = outputs[0]
            .try_extract_array::<f32>()
            .context("Failed to extract output tensor")?;

        // [seq_len, hidden_dim]
        let token_embeddings = output_array.index_axis(Axis(0), 0);

        let mut pooled = vec![0.0f32; self.dimension];
        let mut mask_sum = 0.0f32;
        for (i, row) in token_embeddings.axis_iter(Axis(0)).enumerate() {
            let weight = mask.get(i).copied().unwrap_or(0) as f32;
            mask_sum += weight;
            for (p, v) in pooled.iter_mut().zip(row.iter()) {
                *p += v * weight;
            }
        }
        for p in &mut pooled {
            *p /= mask_sum.max(1e-9);
        }

        Ok(pooled)
    }
}
