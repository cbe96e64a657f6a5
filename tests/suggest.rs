//! Tokenizer and next-word suggestion tests.
//!
//! The training document used throughout the n-gram tests is
//! "في بسم الله الرحمن بسم الله الرحيم", whose token sequence follows the
//! pattern [A, B, C, D, B, C, E]:
//!   - unigram  A → [B],  B → [C, C],  C → [D, E]
//!   - bigram   (B, C) → [D, E]
//!   - trigram  (A, B, C) → [D]

use kalimat::types::KalimatError;
use kalimat::{NextWordModel, Suggestion, Tokenizer};

const A: &str = "في";
const B: &str = "بسم";
const C: &str = "الله";
const D: &str = "الرحمن";
const E: &str = "الرحيم";

/// The [A, B, C, D, B, C, E] training document.
fn training_doc() -> String {
    [A, B, C, D, B, C, E].join(" ")
}

/// A model trained once on the standard document.
fn trained_model() -> NextWordModel {
    let mut model = NextWordModel::new();
    model.train(&training_doc());
    model
}

fn suggestion(token: &str, count: u32) -> Suggestion {
    Suggestion {
        token: token.to_string(),
        count,
    }
}

// ==================== Tokenizer Tests ====================

#[test]
fn test_tokenizer_basic() {
    let tokenizer = Tokenizer::core();
    let tokens = tokenizer.tokenize("بسم الله الرحمن الرحيم");
    assert_eq!(tokens, vec![B, C, D, E]);
}

#[test]
fn test_tokenizer_separators() {
    let tokenizer = Tokenizer::core();
    // Digits, Latin script, and ASCII punctuation all act as separators
    // and never appear in the output.
    let tokens = tokenizer.tokenize("1. بسم abc الله, (الرحمن)!");
    assert_eq!(tokens, vec![B, C, D]);
}

#[test]
fn test_tokenizer_keeps_in_range_arabic_punctuation() {
    let tokenizer = Tokenizer::core();
    // The Arabic comma U+060C lies inside the core range, so it is a
    // token character and stays attached to its word.
    let tokens = tokenizer.tokenize("الله، نور");
    assert_eq!(tokens, vec!["الله،", "نور"]);
}

#[test]
fn test_tokenizer_empty_string() {
    let tokenizer = Tokenizer::core();
    assert!(tokenizer.tokenize("").is_empty());
}

#[test]
fn test_tokenizer_no_qualifying_characters() {
    let tokenizer = Tokenizer::core();
    assert!(tokenizer.tokenize("only latin words 123 !?").is_empty());
}

#[test]
fn test_tokenizer_repeatable() {
    let tokenizer = Tokenizer::core();
    let input = "قل هو الله أحد، الله الصمد";
    let expected = tokenizer.tokenize(input);
    for _ in 0..100 {
        assert_eq!(tokenizer.tokenize(input), expected);
    }
}

#[test]
fn test_core_and_ranking_ranges_differ() {
    // U+06DD (end-of-ayah sign) lies outside the core range but inside
    // the ranking range, so the two tokenizers split differently.
    let text = "نور\u{06DD}شمس";
    assert_eq!(Tokenizer::core().tokenize(text), vec!["نور", "شمس"]);
    assert_eq!(Tokenizer::ranking().tokenize(text), vec!["نور\u{06DD}شمس"]);
}

#[test]
fn test_term_frequencies() {
    let tokenizer = Tokenizer::core();
    let freqs = tokenizer.term_frequencies("الله نور الله");
    assert_eq!(freqs.get("الله"), Some(&2));
    assert_eq!(freqs.get("نور"), Some(&1));
    assert_eq!(freqs.len(), 2);
}

// ==================== Error Tests ====================

#[test]
fn test_untrained_model_always_fails() {
    let model = NextWordModel::new();
    let doc = training_doc();
    for prompt in ["", C, doc.as_str()] {
        for limit in [1, 3, 100] {
            let err = model.suggest(prompt, limit).unwrap_err();
            assert!(
                matches!(err, KalimatError::ModelNotTrained),
                "prompt {prompt:?} limit {limit} should fail untrained, got {err}"
            );
        }
    }
}

#[test]
fn test_zero_limit_rejected() {
    let model = trained_model();
    let err = model.suggest(C, 0).unwrap_err();
    assert!(matches!(err, KalimatError::InvalidArgument(_)));
}

#[test]
fn test_short_documents_train_nothing() {
    let mut model = NextWordModel::new();
    model.train("");
    model.train("الله");
    model.train("no arabic here");
    assert!(!model.is_trained());
    assert!(matches!(
        model.suggest(C, 3).unwrap_err(),
        KalimatError::ModelNotTrained
    ));
}

// ==================== Unigram Tests ====================

#[test]
fn test_empty_prompt_yields_nothing() {
    let model = trained_model();
    assert!(model.suggest("", 3).unwrap().is_empty());
    assert!(model.suggest("latin only", 3).unwrap().is_empty());
}

#[test]
fn test_unigram_lookup() {
    let model = trained_model();
    assert_eq!(model.suggest(A, 2).unwrap(), vec![suggestion(B, 1)]);
    assert_eq!(model.suggest(B, 2).unwrap(), vec![suggestion(C, 2)]);
}

#[test]
fn test_unigram_unknown_token() {
    let model = trained_model();
    assert!(model.suggest("قمر", 3).unwrap().is_empty());
}

#[test]
fn test_unigram_tie_break_is_first_seen() {
    // For "قلم": نور seen first (count 1), then شمس (count 2), then
    // ماء (count 1). Ranking is by count, ties in first-seen order.
    let mut model = NextWordModel::new();
    model.train("قلم نور قلم شمس قلم شمس قلم ماء");
    assert_eq!(
        model.suggest("قلم", 3).unwrap(),
        vec![suggestion("شمس", 2), suggestion("نور", 1), suggestion("ماء", 1)]
    );
}

// ==================== Bigram / Trigram Backoff Tests ====================

#[test]
fn test_bigram_lookup() {
    let model = trained_model();
    let prompt = [B, C].join(" ");
    assert_eq!(
        model.suggest(&prompt, 2).unwrap(),
        vec![suggestion(D, 1), suggestion(E, 1)]
    );
}

#[test]
fn test_bigram_backoff_appends_without_dedup() {
    let model = trained_model();
    let prompt = [B, C].join(" ");
    // Bigram (B, C) yields [D, E]; the remaining 3 slots back off to the
    // unigram level on C, which yields [D, E] again. No deduplication
    // across levels.
    assert_eq!(
        model.suggest(&prompt, 5).unwrap(),
        vec![
            suggestion(D, 1),
            suggestion(E, 1),
            suggestion(D, 1),
            suggestion(E, 1),
        ]
    );
}

#[test]
fn test_trigram_backoff_uses_last_two_tokens() {
    let model = trained_model();
    let prompt = [A, B, C].join(" ");
    // Trigram (A, B, C) yields only [D]; the remaining 2 slots back off
    // to the bigram path over (B, C).
    assert_eq!(
        model.suggest(&prompt, 3).unwrap(),
        vec![suggestion(D, 1), suggestion(D, 1), suggestion(E, 1)]
    );
}

#[test]
fn test_long_prompt_uses_last_three_tokens() {
    let model = trained_model();
    let long = [C, D, B, C].join(" ");
    let tail = [D, B, C].join(" ");
    for limit in 1..=5 {
        assert_eq!(
            model.suggest(&long, limit).unwrap(),
            model.suggest(&tail, limit).unwrap(),
            "limit {limit}: a >3-token prompt must match its last-3 tail"
        );
    }
}

#[test]
fn test_backoff_fill_law() {
    let model = trained_model();
    let prompt = [B, C].join(" ");
    // The full chain for (B, C) holds 2 bigram entries plus 2 unigram
    // entries for C: 4 results total, duplicates included.
    for limit in 1..=8 {
        let got = model.suggest(&prompt, limit).unwrap().len();
        assert_eq!(got, limit.min(4), "limit {limit}");
    }
}

// ==================== Training Semantics Tests ====================

#[test]
fn test_training_is_additive() {
    let mut model = trained_model();
    model.train(&training_doc());
    assert_eq!(model.suggest(B, 2).unwrap(), vec![suggestion(C, 4)]);
    let prompt = [B, C].join(" ");
    assert_eq!(
        model.suggest(&prompt, 2).unwrap(),
        vec![suggestion(D, 2), suggestion(E, 2)]
    );
}

#[test]
fn test_arities_are_isolated() {
    let mut model = NextWordModel::new();
    model.train("بسم الله نور");
    model.train("نور الله باب");
    // The unigram context "الله" now has two continuations, but the
    // bigram context (بسم, الله) still has exactly one: its statistics
    // were not polluted by the unigram level.
    assert_eq!(
        model.suggest(C, 5).unwrap(),
        vec![suggestion("نور", 1), suggestion("باب", 1)]
    );
    assert_eq!(
        model.suggest("بسم الله", 1).unwrap(),
        vec![suggestion("نور", 1)]
    );
}

// ==================== Merge Tests ====================

#[test]
fn test_merge_sums_counts() {
    let mut left = NextWordModel::new();
    left.train("بسم الله نور");

    let mut right = NextWordModel::new();
    right.train("بسم الله باب");
    right.train("بسم الله باب");

    left.merge(&right);
    assert_eq!(
        left.suggest("بسم الله", 2).unwrap(),
        vec![suggestion("باب", 2), suggestion("نور", 1)]
    );
    // Unigram level merged too.
    assert_eq!(left.suggest(B, 1).unwrap(), vec![suggestion(C, 3)]);
}

#[test]
fn test_merge_of_empty_models_stays_untrained() {
    let mut left = NextWordModel::new();
    let right = NextWordModel::new();
    left.merge(&right);
    assert!(matches!(
        left.suggest(C, 1).unwrap_err(),
        KalimatError::ModelNotTrained
    ));
}

#[test]
fn test_merge_matches_sequential_training() {
    let docs = ["بسم الله الرحمن الرحيم", "الحمد لله رب العالمين"];

    let mut sequential = NextWordModel::new();
    for doc in &docs {
        sequential.train(doc);
    }

    let mut merged = NextWordModel::new();
    for doc in &docs {
        let mut part = NextWordModel::new();
        part.train(doc);
        merged.merge(&part);
    }

    assert_eq!(sequential.context_count(), merged.context_count());
    for prompt in ["بسم", "بسم الله", "بسم الله الرحمن"] {
        assert_eq!(
            sequential.suggest(prompt, 5).unwrap(),
            merged.suggest(prompt, 5).unwrap(),
            "prompt {prompt:?}"
        );
    }
}
