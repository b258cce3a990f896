use serde::{Deserialize, Serialize};

use dealer_core::SentimentLabel;

/// Outcome of scoring one piece of review text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentResult {
    #[serde(rename = "sentiment")]
    pub label: SentimentLabel,
    /// Signed strength in `[-1.0, 1.0]`. Exactly `0.0` when neutral.
    pub score: f64,
    /// Echo of the scored input.
    pub text: String,
    pub positive_signals: usize,
    pub negative_signals: usize,
}

impl SentimentResult {
    /// A neutral result with no signals.
    #[must_use]
    pub fn neutral(text: &str) -> Self {
        Self {
            label: SentimentLabel::Neutral,
            score: 0.0,
            text: text.to_string(),
            positive_signals: 0,
            negative_signals: 0,
        }
    }
}
