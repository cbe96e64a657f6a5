//! Context-keyed continuation counts backing the suggestion model.

use std::collections::HashMap;

use crate::types::Suggestion;

/// Tokens observed to follow one context, with counts, in first-seen
/// order.
///
/// The order is part of the data: when two tokens tie on count, the one
/// seen first for this context ranks first. Entries are never removed or
/// decremented.
#[derive(Debug, Clone, Default)]
pub struct Continuations {
    entries: Vec<(String, u32)>,
}

impl Continuations {
    /// Record one more observation of `token` following this context.
    pub fn observe(&mut self, token: &str) {
        if let Some(entry) = self.entries.iter_mut().find(|(t, _)| t == token) {
            entry.1 += 1;
        } else {
            self.entries.push((token.to_string(), 1));
        }
    }

    /// Top `limit` continuations by descending count. The sort is stable,
    /// so equal counts keep first-seen order.
    pub fn top(&self, limit: usize) -> Vec<Suggestion> {
        let mut ranked = self.entries.clone();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked.truncate(limit);
        ranked
            .into_iter()
            .map(|(token, count)| Suggestion { token, count })
            .collect()
    }

    /// Number of distinct continuation tokens.
    pub fn distinct(&self) -> usize {
        self.entries.len()
    }

    /// Sum counts from `other` into this collection. Tokens new to this
    /// collection append in `other`'s order.
    pub fn merge(&mut self, other: &Continuations) {
        for (token, count) in &other.entries {
            if let Some(entry) = self.entries.iter_mut().find(|(t, _)| t == token) {
                entry.1 += count;
            } else {
                self.entries.push((token.clone(), *count));
            }
        }
    }
}

/// The trained lookup state: one map per context arity.
///
/// Separate maps make collisions between a 1-token context and a longer
/// context sharing its prefix impossible; arity is explicit in the key
/// type rather than a property of the data.
#[derive(Debug, Clone, Default)]
pub struct ContextIndex {
    unigrams: HashMap<String, Continuations>,
    bigrams: HashMap<(String, String), Continuations>,
    trigrams: HashMap<(String, String, String), Continuations>,
}

impl ContextIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record every (context, next-token) pair in a token sequence, for
    /// all three arities. Sequences shorter than an arity's window simply
    /// contribute nothing for that arity.
    pub fn ingest(&mut self, tokens: &[String]) {
        for w in tokens.windows(2) {
            self.unigrams.entry(w[0].clone()).or_default().observe(&w[1]);
        }
        for w in tokens.windows(3) {
            self.bigrams
                .entry((w[0].clone(), w[1].clone()))
                .or_default()
                .observe(&w[2]);
        }
        for w in tokens.windows(4) {
            self.trigrams
                .entry((w[0].clone(), w[1].clone(), w[2].clone()))
                .or_default()
                .observe(&w[3]);
        }
    }

    /// Whether nothing has been ingested at any arity.
    pub fn is_empty(&self) -> bool {
        self.unigrams.is_empty() && self.bigrams.is_empty() && self.trigrams.is_empty()
    }

    /// Total number of known contexts across all arities.
    pub fn context_count(&self) -> usize {
        self.unigrams.len() + self.bigrams.len() + self.trigrams.len()
    }

    pub fn unigram(&self, a: &str) -> Option<&Continuations> {
        self.unigrams.get(a)
    }

    pub fn bigram(&self, a: &str, b: &str) -> Option<&Continuations> {
        self.bigrams.get(&(a.to_string(), b.to_string()))
    }

    pub fn trigram(&self, a: &str, b: &str, c: &str) -> Option<&Continuations> {
        self.trigrams
            .get(&(a.to_string(), b.to_string(), c.to_string()))
    }

    /// Fold another index into this one, summing counts per (context,
    /// token). First-seen tie-break order becomes "first seen across the
    /// merge order": the receiver's order wins for tokens both sides know.
    pub fn merge(&mut self, other: &ContextIndex) {
        for (key, cont) in &other.unigrams {
            self.unigrams.entry(key.clone()).or_default().merge(cont);
        }
        for (key, cont) in &other.bigrams {
            self.bigrams.entry(key.clone()).or_default().merge(cont);
        }
        for (key, cont) in &other.trigrams {
            self.trigrams.entry(key.clone()).or_default().merge(cont);
        }
    }
}
