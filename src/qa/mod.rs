//! Extractive question answering
//!
//! Wraps a pretrained SQuAD-finetuned BERT model: given (question, context),
//! returns the context substring judged most likely to answer the question,
//! or a fixed sentinel when the model predicts no answer.

pub mod model;
pub mod span;

pub use model::QaModel;
pub use span::{argmax, normalize_answer, CLS_TOKEN, NO_ANSWER};
