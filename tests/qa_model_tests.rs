// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! QA model integration tests
//!
//! These tests run real ONNX inference and need the model files on disk.
//! Point QA_MODEL_DIR at a directory containing model.onnx and
//! tokenizer.json (e.g. an exported SQuAD-finetuned BERT); without it the
//! tests skip.

use article_qa_node::models::resolve_model_files;
use article_qa_node::qa::{QaModel, NO_ANSWER};

fn qa_model_dir() -> Option<String> {
    std::env::var("QA_MODEL_DIR").ok()
}

#[tokio::test]
async fn test_answer_is_substring_of_context() {
    let Some(dir) = qa_model_dir() else {
        eprintln!("QA_MODEL_DIR not set, skipping");
        return;
    };
    let files = resolve_model_files("local", Some(&dir)).await.unwrap();
    let model = QaModel::load("local", &files, 512).await.unwrap();

    let context = "The Eiffel Tower was completed in 1889 and stands in Paris.";
    let answer = model
        .answer("When was the Eiffel Tower completed?", context)
        .await
        .unwrap();

    assert!(
        answer == NO_ANSWER || context.contains(&answer),
        "answer {:?} is neither the sentinel nor a context substring",
        answer
    );
}

#[tokio::test]
async fn test_answer_is_deterministic() {
    let Some(dir) = qa_model_dir() else {
        eprintln!("QA_MODEL_DIR not set, skipping");
        return;
    };
    let files = resolve_model_files("local", Some(&dir)).await.unwrap();
    let model = QaModel::load("local", &files, 512).await.unwrap();

    let context = "Rust was first released in 2015.";
    let question = "When was Rust released?";
    let first = model.answer(question, context).await.unwrap();
    let second = model.answer(question, context).await.unwrap();
    assert_eq!(first, second);
}
