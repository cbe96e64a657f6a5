//! TF-IDF vector-space ranking with cosine similarity.

use std::collections::HashMap;

use log::debug;

use crate::rank::{cosine_similarity, take_top};
use crate::tokenizer::Tokenizer;
use crate::types::{DocScore, KalimatError, KalimatResult};

/// TF-IDF ranker: each document becomes a sparse tf·idf weight vector and
/// queries are ranked by cosine similarity against those vectors.
pub struct TfidfRanker {
    tokenizer: Tokenizer,
    /// term → ln(N / df).
    idf: HashMap<String, f32>,
    /// Per-document weight vectors, in corpus order.
    vectors: Vec<HashMap<String, f32>>,
}

impl TfidfRanker {
    pub fn new() -> Self {
        Self {
            tokenizer: Tokenizer::ranking(),
            idf: HashMap::new(),
            vectors: Vec::new(),
        }
    }

    /// Fit the ranker over a document collection. Replaces any previous
    /// fit.
    pub fn fit<S: AsRef<str>>(&mut self, corpus: &[S]) {
        self.idf.clear();
        self.vectors.clear();

        let term_freqs: Vec<HashMap<String, u32>> = corpus
            .iter()
            .map(|doc| self.tokenizer.term_frequencies(doc.as_ref()))
            .collect();

        let mut doc_freqs: HashMap<String, u32> = HashMap::new();
        for freqs in &term_freqs {
            for term in freqs.keys() {
                *doc_freqs.entry(term.clone()).or_insert(0) += 1;
            }
        }

        let n = term_freqs.len() as f32;
        self.idf = doc_freqs
            .into_iter()
            .map(|(term, df)| (term, (n / df as f32).ln()))
            .collect();

        self.vectors = term_freqs
            .into_iter()
            .map(|freqs| self.weigh(&freqs))
            .collect();
        debug!(
            "tfidf: fitted {} documents, {} distinct terms",
            self.vectors.len(),
            self.idf.len()
        );
    }

    /// Whether the ranker holds a fitted corpus.
    pub fn is_fitted(&self) -> bool {
        !self.vectors.is_empty()
    }

    /// Number of fitted documents.
    pub fn doc_count(&self) -> usize {
        self.vectors.len()
    }

    /// Cosine similarity of `query` against every fitted document, in
    /// corpus order.
    pub fn scores(&self, query: &str) -> KalimatResult<Vec<f32>> {
        if !self.is_fitted() {
            return Err(KalimatError::ModelNotTrained);
        }
        let query_vec = self.weigh(&self.tokenizer.term_frequencies(query));
        Ok(self
            .vectors
            .iter()
            .map(|doc_vec| cosine_similarity(&query_vec, doc_vec))
            .collect())
    }

    /// Top `n` documents for `query` by descending cosine similarity.
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

    /// Turn raw term frequencies into a tf·idf weight vector. Terms absent
    /// from the fitted vocabulary carry no weight.
    fn weigh(&self, freqs: &HashMap<String, u32>) -> HashMap<String, f32> {
        freqs
            .iter()
            .filter_map(|(term, &tf)| {
                self.idf
                    .get(term)
                    .map(|idf| (term.clone(), tf as f32 * idf))
            })
            .collect()
    }
}

impl Default for TfidfRanker {
    fn default() -> Self {
        Self::new()
    }
}
