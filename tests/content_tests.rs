// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! Extraction pipeline tests
//!
//! Verifies the documented extraction properties: paragraph joining for
//! HTML, the hard character cap for PDF text, and link classification.

use article_qa_node::content::{
    extract_paragraph_text, truncate_chars, ArticleKind,
};

#[test]
fn test_html_paragraphs_join_with_single_spaces_in_order() {
    let html = r#"
        <html><body>
            <h1>Title is not a paragraph</h1>
            <p>Alpha one.</p>
            <div><p>Beta two.</p></div>
            <p>Gamma three.</p>
        </body></html>
    "#;
    assert_eq!(
        extract_paragraph_text(html),
        "Alpha one. Beta two. Gamma three."
    );
}

#[test]
fn test_html_without_paragraphs_extracts_nothing() {
    let html = "<html><body><div>bare div text</div></body></html>";
    assert_eq!(extract_paragraph_text(html), "");
}

#[test]
fn test_pdf_cap_two_pages_of_4000_chars() {
    // Two 4000-char pages concatenate to 8000 characters; the article text
    // must cap at exactly 5120, not 8000.
    let page = "a".repeat(4000);
    let concatenated = format!("{}{}", page, page);
    let article_text = truncate_chars(&concatenated, 5120);
    assert_eq!(article_text.chars().count(), 5120);
    assert_eq!(article_text, concatenated[..5120]);
}

#[test]
fn test_pdf_cap_leaves_short_text_exact() {
    let concatenated = "b".repeat(5120);
    assert_eq!(truncate_chars(&concatenated, 5120), concatenated);
}

#[test]
fn test_link_classification() {
    assert_eq!(
        ArticleKind::classify("https://example.com/article.pdf"),
        ArticleKind::Pdf
    );
    assert_eq!(
        ArticleKind::classify("https://example.com/article"),
        ArticleKind::Html
    );
}
