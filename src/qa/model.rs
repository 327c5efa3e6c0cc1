// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! ONNX extractive QA model wrapper
//!
//! Runs a SQuAD-finetuned BERT model through ONNX Runtime on CPU. The
//! question and context are tokenized as a BERT pair; the model outputs
//! per-token start and end logits; the argmax positions bound the answer
//! span, which decodes back to text.

use anyhow::{Context, Result};
use ndarray::Axis;
use ort::session::Session;
use ort::value::Value;
use std::sync::{Arc, Mutex};
use tokenizers::{Tokenizer, TruncationParams, TruncationStrategy};
use tracing::{debug, info};

use crate::embeddings::onnx_model::{build_session, encoding_tensors};
use crate::models::ModelFiles;
use crate::qa::span::{argmax, normalize_answer};

/// ONNX-based extractive QA model
#[derive(Clone)]
pub struct QaModel {
    /// ONNX Runtime session (Mutex for thread-safe shared access)
    session: Arc<Mutex<Session>>,
    /// BERT tokenizer, configured to truncate the context side only
    tokenizer: Arc<Tokenizer>,
    /// Model name, for logging
    model_name: String,
}

impl std::fmt::Debug for QaModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QaModel")
            .field("model_name", &self.model_name)
            .finish_non_exhaustive()
    }
}

impl QaModel {
    /// Loads the QA model and tokenizer from resolved files.
    ///
    /// `max_seq_len` bounds the tokenized `[CLS] question [SEP] context [SEP]`
    /// pair; only the context side is truncated when the pair is too long.
    pub async fn load(
        model_name: impl Into<String>,
        files: &ModelFiles,
        max_seq_len: usize,
    ) -> Result<Self> {
        let model_name = model_name.into();

        let session = build_session(&files.model)?;

        let mut tokenizer = Tokenizer::from_file(&files.tokenizer)
            .map_err(|e| anyhow::anyhow!("Failed to load tokenizer: {}", e))?;
        tokenizer
            .with_truncation(Some(TruncationParams {
                max_length: max_seq_len,
                strategy: TruncationStrategy::OnlySecond,
                ..Default::default()
            }))
            .map_err(|e| anyhow::anyhow!("Failed to configure truncation: {}", e))?;

        info!("QA model {} loaded", model_name);

        Ok(Self {
            session: Arc::new(Mutex::new(session)),
            tokenizer: Arc::new(tokenizer),
            model_name,
        })
    }

    /// Model name
    pub fn model_name(&self) -> &str {
        &self.model_name
    }

    /// Answers a question against a context.
    ///
    /// Returns the decoded answer span, or the sentinel string when the
    /// model predicts an empty, `[CLS]` or inverted span.
    pub async fn answer(&self, question: &str, context: &str) -> Result<String> {
        let encoding = self
            .tokenizer
            .encode((question, context), true)
            .map_err(|e| anyhow::anyhow!("Tokenization failed: {}", e))?;
        let ids = encoding.get_ids().to_vec();
        let (input_ids, attention_mask, token_type_ids) = encoding_tensors(&encoding)?;

        let (start, end) = {
            let mut session = self.session.lock().unwrap();
            let outputs = session.run(ort::inputs![
                "input_ids" => Value::from_array(input_ids)?,
                "attention_mask" => Value::from_array(attention_mask)?,
                "token_type_ids" => Value::from_array(token_type_ids)?
            ])?;

            let start_logits = outputs["start_logits"]
                .try_extract_array::<f32>()
                .context("Failed to extract start logits")?;
            let end_logits = outputs["end_logits"]
                .try_extract_array::<f32>()
                .context("Failed to extract end logits")?;

            let start_row: Vec<f32> = start_logits.index_axis(Axis(0), 0).iter().copied().collect();
            let end_row: Vec<f32> = end_logits.index_axis(Axis(0), 0).iter().copied().collect();
            (argmax(&start_row), argmax(&end_row))
        };

        debug!("Predicted span: start={} end={}", start, end);

        // The end position is inclusive. Decode with special tokens kept
        // so a bare [CLS] prediction stays visible to the sentinel check.
        let decoded = if start <= end && end < ids.len() {
            self.tokenizer
                .decode(&ids[start..=end], false)
                .map_err(|e| anyhow::anyhow!("Failed to decode answer span: {}", e))?
        } else {
            String::new()
        };

        Ok(normalize_answer(&decoded, start, end))
    }
}
