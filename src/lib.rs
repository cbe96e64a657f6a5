//! kalimat — next-word suggestion and document ranking for Arabic text.
//!
//! The predictive core is an n-gram model: training records which token
//! followed each 1-, 2-, and 3-token context, and queries tally those
//! continuations, backing off to shorter contexts when the exact context
//! has too few candidates. Alongside it, two independent document rankers
//! (BM25 and TF-IDF with cosine similarity) score whole documents against
//! a query, and a corpus module fetches a verse dataset over HTTP.
//!
//! The suggestion model and the rankers use separately configured
//! tokenizers and share no state.

pub mod corpus;
pub mod model;
pub mod rank;
pub mod tokenizer;
pub mod types;

pub use model::NextWordModel;
pub use rank::{Bm25Ranker, TfidfRanker};
pub use tokenizer::Tokenizer;
pub use types::{DocScore, KalimatError, KalimatResult, Suggestion};
