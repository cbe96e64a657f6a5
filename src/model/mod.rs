//! Next-word suggestion model: context-keyed counts with multi-level
//! backoff.
//!
//! Training records, for every 1-, 2-, and 3-token context in a document,
//! which token followed it. A query tallies the continuations of the
//! prompt's exact context and, when that yields fewer results than
//! requested, backs off to the next shorter context over the most recent
//! prompt tokens. Backfilled results are appended as-is — a token that
//! already appeared at a higher level may legitimately appear again with
//! its lower-level count.

mod context_index;

pub use context_index::{ContextIndex, Continuations};

use log::debug;

use crate::tokenizer::Tokenizer;
use crate::types::{KalimatError, KalimatResult, Suggestion};

/// N-gram next-word model over Arabic text.
///
/// Built fresh per process: counts accumulate across [`train`] calls and
/// are never persisted, decayed, or reset short of dropping the model.
///
/// [`train`]: NextWordModel::train
pub struct NextWordModel {
    tokenizer: Tokenizer,
    index: ContextIndex,
}

impl NextWordModel {
    /// Create an untrained model using the core Arabic tokenizer.
    pub fn new() -> Self {
        Self {
            tokenizer: Tokenizer::core(),
            index: ContextIndex::new(),
        }
    }

    /// Train on one document (typically one verse or line). Cumulative and
    /// additive: training twice on the same text doubles every count.
    /// Documents of 0 or 1 tokens contribute nothing; that is not an
    /// error.
    pub fn train(&mut self, document: &str) {
        let tokens = self.tokenizer.tokenize(document);
        self.index.ingest(&tokens);
    }

    /// Whether at least one training call produced any context.
    pub fn is_trained(&self) -> bool {
        !self.index.is_empty()
    }

    /// Total number of known contexts across all arities.
    pub fn context_count(&self) -> usize {
        self.index.context_count()
    }

    /// Fold a separately trained model into this one, summing counts per
    /// (context, token). Tie-break order for tokens only `other` knows
    /// follows the merge order, so callers needing deterministic ties must
    /// merge in a fixed order.
    pub fn merge(&mut self, other: &NextWordModel) {
        self.index.merge(&other.index);
    }

    /// Suggest up to `limit` next tokens for `prompt`, ranked by
    /// descending count with ties in first-seen order.
    ///
    /// Dispatch is purely by the prompt's token count: one token queries
    /// the unigram level, two the bigram level (backing off to the second
    /// token's unigrams), three the trigram level (backing off to the last
    /// two tokens' bigram path). Prompts longer than three tokens use only
    /// their last three. An empty prompt yields an empty result.
    ///
    /// # Errors
    ///
    /// [`KalimatError::ModelNotTrained`] if nothing has been ingested,
    /// regardless of prompt or limit; [`KalimatError::InvalidArgument`] if
    /// `limit` is zero.
    pub fn suggest(&self, prompt: &str, limit: usize) -> KalimatResult<Vec<Suggestion>> {
        if !self.is_trained() {
            return Err(KalimatError::ModelNotTrained);
        }
        if limit == 0 {
            return Err(KalimatError::InvalidArgument(
                "limit must be positive".to_string(),
            ));
        }

        let tokens = self.tokenizer.tokenize(prompt);
        debug!(
            "suggest: {} prompt token(s), limit {}, {} known contexts",
            tokens.len(),
            limit,
            self.index.context_count()
        );

        let suggestions = match tokens.len() {
            0 => Vec::new(),
            1 => self.from_unigram(&tokens[0], limit),
            2 => self.from_bigram(&tokens[0], &tokens[1], limit),
            _ => {
                // Only the last three tokens carry context.
                let tail = &tokens[tokens.len() - 3..];
                self.from_trigram(&tail[0], &tail[1], &tail[2], limit)
            }
        };
        Ok(suggestions)
    }

    fn from_unigram(&self, a: &str, limit: usize) -> Vec<Suggestion> {
        self.index
            .unigram(a)
            .map(|c| c.top(limit))
            .unwrap_or_default()
    }

    fn from_bigram(&self, a: &str, b: &str, limit: usize) -> Vec<Suggestion> {
        let mut out = self
            .index
            .bigram(a, b)
            .map(|c| c.top(limit))
            .unwrap_or_default();
        if out.len() < limit {
            out.extend(self.from_unigram(b, limit - out.len()));
        }
        out
    }

    fn from_trigram(&self, a: &str, b: &str, c: &str, limit: usize) -> Vec<Suggestion> {
        let mut out = self
            .index
            .trigram(a, b, c)
            .map(|cont| cont.top(limit))
            .unwrap_or_default();
        if out.len() < limit {
            // Back off over the two most recent tokens.
            out.extend(self.from_bigram(b, c, limit - out.len()));
        }
        out
    }
}

impl Default for NextWordModel {
    fn default() -> Self {
        Self::new()
    }
}
