//! Keyword scorer for dealership review sentiment.

use dealer_core::SentimentLabel;

use crate::types::SentimentResult;

/// Words that signal a satisfied customer. Lowercase; disjoint from
/// [`NEGATIVE_KEYWORDS`].
pub(crate) const POSITIVE_KEYWORDS: &[&str] = &[
    "great",
    "excellent",
    "amazing",
    "fantastic",
    "wonderful",
    "good",
    "best",
    "love",
    "perfect",
    "outstanding",
    "superb",
    "awesome",
    "happy",
    "satisfied",
    "recommend",
    "helpful",
    "friendly",
    "clean",
    "fast",
    "efficient",
    "professional",
    "knowledgeable",
    "honest",
    "transparent",
    "fair",
    "exceptional",
    "brilliant",
    "smooth",
];

/// Words that signal a dissatisfied customer. Lowercase.
pub(crate) const NEGATIVE_KEYWORDS: &[&str] = &[
    "bad",
    "terrible",
    "horrible",
    "awful",
    "worst",
    "hate",
    "poor",
    "disappointing",
    "unhappy",
    "rude",
    "dirty",
    "slow",
    "overpriced",
    "broken",
    "failed",
    "never",
    "waste",
    "problem",
    "issue",
    "dishonest",
    "unprofessional",
    "scam",
    "fraud",
    "angry",
    "frustrated",
];

/// Count how many keywords of each polarity occur in `text`.
///
/// Matching is a case-insensitive substring test with no word boundaries, so
/// "unfair" still counts as "fair". Each keyword counts at most once.
#[must_use]
pub fn signal_counts(text: &str) -> (usize, usize) {
    let lower = text.to_lowercase();
    let positive = POSITIVE_KEYWORDS
        .iter()
        .filter(|kw| lower.contains(**kw))
        .count();
    let negative = NEGATIVE_KEYWORDS
        .iter()
        .filter(|kw| lower.contains(**kw))
        .count();
    (positive, negative)
}

/// Score review text by keyword polarity.
///
/// Blank input is neutral without any matching. Otherwise the winning
/// polarity's share of all matched keywords becomes the score magnitude,
/// signed by polarity. Ties (including no matches) are neutral with score
/// `0.0`.
#[must_use]
pub fn score(text: &str) -> SentimentResult {
    if text.trim().is_empty() {
        return SentimentResult::neutral(text);
    }

    let (positive, negative) = signal_counts(text);
    #[allow(clippy::cast_precision_loss)]
    let total = positive.saturating_add(negative).max(1) as f64;

    #[allow(clippy::cast_precision_loss)]
    let (label, score) = match positive.cmp(&negative) {
        std::cmp::Ordering::Greater => (
            SentimentLabel::Positive,
            (positive as f64 / total).min(1.0),
        ),
        std::cmp::Ordering::Less => (
            SentimentLabel::Negative,
            -(negative as f64 / total).min(1.0),
        ),
        std::cmp::Ordering::Equal => (SentimentLabel::Neutral, 0.0),
    };

    SentimentResult {
        label,
        score,
        text: text.to_string(),
        positive_signals: positive,
        negative_signals: negative,
    }
}
