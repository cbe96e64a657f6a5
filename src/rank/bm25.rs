//! BM25 ranking over a fitted document collection.

use std::collections::HashMap;

use log::debug;

use crate::rank::take_top;
use crate::tokenizer::Tokenizer;
use crate::types::{DocScore, KalimatError, KalimatResult};

const DEFAULT_K1: f32 = 1.5;
const DEFAULT_B: f32 = 0.75;

/// Okapi BM25 ranker. Fit it over a corpus once, then score queries
/// against every fitted document.
pub struct Bm25Ranker {
    tokenizer: Tokenizer,
    k1: f32,
    b: f32,
    /// term → number of documents containing it.
    doc_freqs: HashMap<String, u32>,
    /// Per document: (term frequencies, token count), in corpus order.
    docs: Vec<(HashMap<String, u32>, u32)>,
    avg_doc_length: f32,
}

impl Bm25Ranker {
    pub fn new() -> Self {
        Self::with_params(DEFAULT_K1, DEFAULT_B)
    }

    /// Ranker with explicit `k1` (term-frequency saturation) and `b`
    /// (length normalization) parameters.
    pub fn with_params(k1: f32, b: f32) -> Self {
        Self {
            tokenizer: Tokenizer::ranking(),
            k1,
            b,
            doc_freqs: HashMap::new(),
            docs: Vec::new(),
            avg_doc_length: 0.0,
        }
    }

    /// Fit the ranker over a document collection. Replaces any previous
    /// fit.
    pub fn fit<S: AsRef<str>>(&mut self, corpus: &[S]) {
        self.doc_freqs.clear();
        self.docs.clear();

        let mut total_tokens: u64 = 0;
        for doc in corpus {
            let freqs = self.tokenizer.term_frequencies(doc.as_ref());
            let doc_len: u32 = freqs.values().sum();
            total_tokens += u64::from(doc_len);

            for term in freqs.keys() {
                *self.doc_freqs.entry(term.clone()).or_insert(0) += 1;
            }
            self.docs.push((freqs, doc_len));
        }

        self.avg_doc_length = if self.docs.is_empty() {
            0.0
        } else {
            total_tokens as f32 / self.docs.len() as f32
        };
        debug!(
            "bm25: fitted {} documents, {} distinct terms",
            self.docs.len(),
            self.doc_freqs.len()
        );
    }

    /// Whether the ranker holds a fitted corpus.
    pub fn is_fitted(&self) -> bool {
        !self.docs.is_empty()
    }

    /// Number of fitted documents.
    pub fn doc_count(&self) -> usize {
        self.docs.len()
    }

    /// BM25 score of `query` against every fitted document, in corpus
    /// order.
    pub fn scores(&self, query: &str) -> KalimatResult<Vec<f32>> {
        if !self.is_fitted() {
            return Err(KalimatError::ModelNotTrained);
        }
        let query_terms = self.tokenizer.tokenize(query);
        let n = self.docs.len() as f32;

        let scores = self
            .docs
            .iter()
            .map(|(freqs, doc_len)| {
                let mut score = 0.0f32;
                for term in &query_terms {
                    let Some(&tf) = freqs.get(term) else { continue };
                    let df = *self.doc_freqs.get(term).unwrap_or(&0) as f32;
                    let idf = ((n - df + 0.5) / (df + 0.5) + 1.0).ln();
                    let tf = tf as f32;
                    let dl = *doc_len as f32;
                    score += idf * (tf * (self.k1 + 1.0))
                        / (tf
                            + self.k1
                                * (1.0 - self.b + self.b * dl / self.avg_doc_length.max(1.0)));
                }
                score
            })
            .collect();
        Ok(scores)
    }

    /// Top `n` documents for `query` by descending BM25 score.
    /// `exclude_top` drops the best match (the self-match convention when
    /// the query is itself a corpus document).
    pub fn top_n(&self, query: &str, n: usize, exclude_top: bool) -> KalimatResult<Vec<DocScore>> {
        let scored = self
            .scores(query)?
            .into_iter()
            .enumerate()
            .map(|(doc_id, score)| DocScore { doc_id, score })
            .collect();
        Ok(take_top(scored, n, exclude_top))
    }
}

impl Default for Bm25Ranker {
    fn default() -> Self {
        Self::new()
    }
}
