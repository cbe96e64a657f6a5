//! Range-based tokenizer for Arabic script.
//!
//! A token is a maximal contiguous run of characters inside the configured
//! code-point range; every other character (whitespace, digits,
//! punctuation, Latin script) acts purely as a separator and never appears
//! in the output. The suggestion model and the document rankers each use
//! their own stock range and must not be assumed interchangeable.

use std::collections::HashMap;

/// Deterministic tokenizer over a single inclusive code-point range.
#[derive(Debug, Clone, Copy)]
pub struct Tokenizer {
    lo: char,
    hi: char,
}

impl Tokenizer {
    /// Tokenizer for the suggestion model: `U+0600..=U+06D0`.
    ///
    /// The range stops short of the Quranic annotation signs, so verse
    /// ornaments and end-of-ayah marks never become part of a word.
    pub fn core() -> Self {
        Self {
            lo: '\u{0600}',
            hi: '\u{06D0}',
        }
    }

    /// Tokenizer for the document rankers: the full Arabic block
    /// `U+0600..=U+06FF`.
    pub fn ranking() -> Self {
        Self {
            lo: '\u{0600}',
            hi: '\u{06FF}',
        }
    }

    fn is_token_char(&self, c: char) -> bool {
        self.lo <= c && c <= self.hi
    }

    /// Extract tokens in order of appearance. May be empty.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let mut tokens = Vec::new();
        let mut current = String::new();
        for c in text.chars() {
            if self.is_token_char(c) {
                current.push(c);
            } else if !current.is_empty() {
                tokens.push(std::mem::take(&mut current));
            }
        }
        if !current.is_empty() {
            tokens.push(current);
        }
        tokens
    }

    /// Tokenize and return term frequencies.
    pub fn term_frequencies(&self, text: &str) -> HashMap<String, u32> {
        let mut freqs = HashMap::new();
        for token in self.tokenize(text) {
            *freqs.entry(token).or_insert(0) += 1;
        }
        freqs
    }
}
