//! Document rankers over a fitted corpus.
//!
//! Both rankers score whole documents against a query and return
//! `(doc_id, score)` pairs; they use the wider ranking tokenizer and share
//! no state with the suggestion model.

pub mod bm25;
pub mod tfidf;

pub use bm25::Bm25Ranker;
pub use tfidf::TfidfRanker;

use std::collections::HashMap;

use crate::types::DocScore;

/// Cosine similarity between two sparse term-weight vectors.
pub(crate) fn cosine_similarity(a: &HashMap<String, f32>, b: &HashMap<String, f32>) -> f32 {
    let mut dot = 0.0f32;
    for (term, wa) in a {
        if let Some(wb) = b.get(term) {
            dot += wa * wb;
        }
    }
    if dot == 0.0 {
        return 0.0;
    }
    let norm_a: f32 = a.values().map(|w| w * w).sum::<f32>().sqrt();
    let norm_b: f32 = b.values().map(|w| w * w).sum::<f32>().sqrt();
    if norm_a == 0.0 || norm_b == 0.0 {
        0.0
    } else {
        dot / (norm_a * norm_b)
    }
}

/// Sort by descending score and truncate to `n`. When `exclude_top` is
/// set, the single best match is dropped first — callers ranking a query
/// that is itself a corpus document use this to skip the self-match. That
/// assumption holds per call site, not universally, which is why it is a
/// parameter and not baked in.
pub(crate) fn take_top(mut scored: Vec<DocScore>, n: usize, exclude_top: bool) -> Vec<DocScore> {
    scored.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    if exclude_top && !scored.is_empty() {
        scored.remove(0);
    }
    scored.truncate(n);
    scored
}
