//! Review sentiment tagging.
//!
//! The core is a deterministic keyword scorer ([`score`]). An optional IBM
//! Watson NLU provider can be selected at startup through [`Analyzer`], which
//! falls back to the keyword scorer whenever the provider fails.

pub mod analyzer;
pub mod error;
pub mod nlu;
pub mod provider;
pub mod scorer;
pub mod types;

pub use analyzer::Analyzer;
pub use dealer_core::SentimentLabel;
pub use error::SentimentError;
pub use nlu::{NluClient, NluConfig};
pub use provider::{KeywordScorer, SentimentProvider};
pub use scorer::score;
pub use types::SentimentResult;
