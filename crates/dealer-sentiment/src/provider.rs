//! Pluggable sentiment strategies.

use async_trait::async_trait;

use crate::error::SentimentError;
use crate::scorer::score;
use crate::types::SentimentResult;

/// A source of sentiment results for review text.
///
/// Every provider returns the same [`SentimentResult`] shape; they differ only
/// in how the label and score are decided.
#[async_trait]
pub trait SentimentProvider: Send + Sync {
    /// Short identifier used in logs.
    fn name(&self) -> &'static str;

    /// Analyze one piece of text.
    ///
    /// # Errors
    ///
    /// Network-backed providers return [`SentimentError`] when the remote
    /// service is unreachable or answers with something unusable.
    async fn analyze(&self, text: &str) -> Result<SentimentResult, SentimentError>;
}

/// The deterministic keyword scorer as a provider. Never fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordScorer;

#[async_trait]
impl SentimentProvider for KeywordScorer {
    fn name(&self) -> &'static str {
        "keyword"
    }

    async fn analyze(&self, text: &str) -> Result<SentimentResult, SentimentError> {
        Ok(score(text))
    }
}
