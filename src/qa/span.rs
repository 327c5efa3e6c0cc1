//! Answer span selection and sentinel mapping

/// Answer returned when the model predicts no span in the article
pub const NO_ANSWER: &str = "The answer does not exist in this article.";

/// BERT's reserved classification token; a span that decodes to exactly
/// this token means "no answer"
pub const CLS_TOKEN: &str = "[CLS]";

/// Index of the maximum logit. Ties resolve to the earliest position.
pub fn argmax(logits: &[f32]) -> usize {
    let mut best = 0;
    for (i, &v) in logits.iter().enumerate() {
        if v > logits[best] {
            best = i;
        }
    }
    best
}

/// Map a decoded span to the final answer.
///
/// Empty spans, the bare classification token and inverted spans
/// (predicted start after predicted end) have no answer in the article.
pub fn normalize_answer(decoded: &str, start: usize, end: usize) -> String {
    let trimmed = decoded.trim();
    if start > end || trimmed.is_empty() || trimmed == CLS_TOKEN {
        NO_ANSWER.to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_argmax_picks_maximum() {
        assert_eq!(argmax(&[0.1, 3.0, 2.0]), 1);
        assert_eq!(argmax(&[5.0, 3.0, 2.0]), 0);
        assert_eq!(argmax(&[-2.0, -1.0, -3.0]), 1);
    }

    #[test]
    fn test_argmax_ties_resolve_to_first() {
        assert_eq!(argmax(&[1.0, 1.0, 1.0]), 0);
    }

    #[test]
    fn test_argmax_empty_is_zero() {
        assert_eq!(argmax(&[]), 0);
    }

    #[test]
    fn test_plain_answer_passes_through() {
        assert_eq!(normalize_answer("the mitochondria", 5, 8), "the mitochondria");
    }

    #[test]
    fn test_answer_is_trimmed() {
        assert_eq!(normalize_answer("  42  ", 1, 1), "42");
    }

    #[test]
    fn test_empty_span_maps_to_sentinel() {
        assert_eq!(normalize_answer("", 3, 7), NO_ANSWER);
        assert_eq!(normalize_answer("   ", 3, 7), NO_ANSWER);
    }

    #[test]
    fn test_cls_token_maps_to_sentinel() {
        assert_eq!(normalize_answer("[CLS]", 0, 0), NO_ANSWER);
    }

    #[test]
    fn test_inverted_span_maps_to_sentinel() {
        assert_eq!(normalize_answer("stale text", 9, 4), NO_ANSWER);
    }
}
