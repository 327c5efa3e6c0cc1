//! Extractive summarization
//!
//! Splits the article into sentences, embeds each sentence with the
//! pretrained sentence encoder, and keeps the sentences closest to the
//! document centroid, in document order. Deterministic: the same article
//! always yields the same summary.

use anyhow::Result;
use std::cmp::Ordering;
use std::sync::Arc;
use tracing::debug;

use crate::embeddings::SentenceEmbedder;

/// Extractive summarizer over sentence embeddings
#[derive(Debug, Clone)]
pub struct Summarizer {
    embedder: Arc<SentenceEmbedder>,
    /// Fraction of sentences kept, in (0, 1]
    ratio: f64,
}

impl Summarizer {
    /// Create a summarizer around a loaded sentence embedder
    pub fn new(embedder: Arc<SentenceEmbedder>, ratio: f64) -> Self {
        Self { embedder, ratio }
    }

    /// Produce an extractive summary of `text`.
    ///
    /// Recomputed from scratch on every call; nothing is cached, so the
    /// summary always reflects the text it was called with.
    pub async fn summarize(&self, text: &str) -> Result<String> {
        let sentences = split_sentences(text);
        if sentences.len() <= 1 {
            return Ok(text.trim().to_string());
        }

        let mut embeddings = Vec::with_capacity(sentences.len());
        for sentence in &sentences {
            embeddings.push(self.embedder.embed(sentence).await?);
        }

        let keep = select_central(&embeddings, self.ratio);
        debug!("Summary keeps {} of {} sentences", keep.len(), sentences.len());

        Ok(keep
            .iter()
            .map(|&i| sentences[i].as_str())
            .collect::<Vec<_>>()
            .join(" "))
    }
}

/// Split text into sentences.
///
/// A `.`, `!` or `?` ends a sentence only when followed by whitespace or
/// the end of the text, which keeps decimals and inline dots together.
pub fn split_sentences(text: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut current = String::new();
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        current.push(ch);
        if matches!(ch, '.' | '!' | '?')
            && chars.peek().map_or(true, |next| next.is_whitespace())
        {
            let sentence = current.trim();
            if !sentence.is_empty() {
                sentences.push(sentence.to_string());
            }
            current.clear();
        }
    }

    let tail = current.trim();
    if !tail.is_empty() {
        sentences.push(tail.to_string());
    }
    sentences
}

/// Pick the indices of the sentences whose embeddings lie closest to the
/// centroid, keeping `ceil(n * ratio)` of them (at least one). Returned
/// indices are sorted, so selected sentences stay in document order.
pub fn select_central(embeddings: &[Vec<f32>], ratio: f64) -> Vec<usize> {
    let n = embeddings.len();
    if n == 0 {
        return Vec::new();
    }
    let target = ((n as f64 * ratio).ceil() as usize).clamp(1, n);

    let dim = embeddings[0].len();
    let mut centroid = vec![0.0f32; dim];
    for embedding in embeddings {
        for (c, v) in centroid.iter_mut().zip(embedding) {
            *c += v;
        }
    }
    for c in &mut centroid {
        *c /= n as f32;
    }

    let mut scored: Vec<(usize, f32)> = embeddings
        .iter()
        .enumerate()
        .map(|(i, e)| (i, cosine(e, &centroid)))
        .collect();
    // Stable sort: equal scores keep document order, so selection is
    // deterministic.
    scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));

    let mut keep: Vec<usize> = scored.into_iter().take(target).map(|(i, _)| i).collect();
    keep.sort_unstable();
    keep
}

fn cosine(a: &[f32], b: &[f32]) -> f32 {
    let dot: f32 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();
    dot / (norm_a * norm_b).max(1e-9)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_basic_sentences() {
        let text = "First sentence. Second one! Third one? Fourth";
        assert_eq!(
            split_sentences(text),
            vec!["First sentence.", "Second one!", "Third one?", "Fourth"]
        );
    }

    #[test]
    fn test_split_keeps_decimals_together() {
        let text = "Pi is 3.14 roughly. True.";
        assert_eq!(split_sentences(text), vec!["Pi is 3.14 roughly.", "True."]);
    }

    #[test]
    fn test_split_empty_and_whitespace() {
        assert!(split_sentences("").is_empty());
        assert!(split_sentences("   \n\t  ").is_empty());
    }

    #[test]
    fn test_select_central_keeps_at_least_one() {
        let embeddings = vec![vec![1.0, 0.0], vec![0.9, 0.1], vec![-1.0, 0.0]];
        let keep = select_central(&embeddings, 0.01);
        assert_eq!(keep.len(), 1);
    }

    #[test]
    fn test_select_central_prefers_centroid_neighbors() {
        // Three near-identical vectors and one outlier; the outlier should
        // be dropped first.
        let embeddings = vec![
            vec![1.0, 0.0],
            vec![0.95, 0.05],
            vec![-1.0, -0.1],
            vec![0.9, 0.1],
        ];
        let keep = select_central(&embeddings, 0.75);
        assert_eq!(keep, vec![0, 1, 3]);
    }

    #[test]
    fn test_select_central_preserves_document_order() {
        let embeddings = vec![vec![0.5, 0.5]; 10];
        let keep = select_central(&embeddings, 0.3);
        assert_eq!(keep, vec![0, 1, 2]);
        let mut sorted = keep.clone();
        sorted.sort_unstable();
        assert_eq!(keep, sorted);
    }

    #[test]
    fn test_select_central_deterministic() {
        let embeddings = vec![
            vec![0.2, 0.8],
            vec![0.3, 0.7],
            vec![0.25, 0.75],
            vec![0.9, 0.1],
        ];
        let first = select_central(&embeddings, 0.5);
        let second = select_central(&embeddings, 0.5);
        assert_eq!(first, second);
    }

    #[test]
    fn test_select_central_empty() {
        assert!(select_central(&[], 0.5).is_empty());
    }
}
