//! Sentence embedding model
//!
//! Wraps a pretrained sentence-transformer (ONNX) used by the extractive
//! summarizer to score sentences.

pub mod onnx_model;

pub use onnx_model::SentenceEmbedder;
