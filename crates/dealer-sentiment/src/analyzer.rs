//! Provider selection and fallback.

use std::sync::Arc;

use dealer_core::DealerReview;

use crate::nlu::{NluClient, NluConfig};
use crate::provider::{KeywordScorer, SentimentProvider};
use crate::scorer::score;
use crate::types::SentimentResult;

/// Sentiment entry point for callers.
///
/// Holds the provider chosen once at startup. Any provider failure is logged
/// and replaced by the keyword scorer's result, so [`Analyzer::analyze`]
/// always produces a result.
#[derive(Clone)]
pub struct Analyzer {
    provider: Arc<dyn SentimentProvider>,
}

impl std::fmt::Debug for Analyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Analyzer")
            .field("provider", &self.provider.name())
            .finish()
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::keyword_only()
    }
}

impl Analyzer {
    /// Select a provider from explicit NLU settings.
    ///
    /// Uses Watson NLU when settings are given and the HTTP client builds;
    /// otherwise the keyword scorer.
    #[must_use]
    pub fn from_config(nlu: Option<&NluConfig>) -> Self {
        let Some(nlu) = nlu else {
            tracing::info!("NLU not configured; using keyword sentiment scorer");
            return Self::keyword_only();
        };

        match NluClient::new(nlu) {
            Ok(client) => {
                tracing::info!(url = %nlu.service_url, "using Watson NLU sentiment provider");
                Self::with_provider(Arc::new(client))
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to build NLU client; using keyword sentiment scorer");
                Self::keyword_only()
            }
        }
    }

    #[must_use]
    pub fn keyword_only() -> Self {
        Self::with_provider(Arc::new(KeywordScorer))
    }

    #[must_use]
    pub fn with_provider(provider: Arc<dyn SentimentProvider>) -> Self {
        Self { provider }
    }

    #[must_use]
    pub fn provider_name(&self) -> &'static str {
        self.provider.name()
    }

    /// Analyze text with the selected provider, falling back to the keyword
    /// scorer on failure. Blank text is neutral and never reaches the provider.
    pub async fn analyze(&self, text: &str) -> SentimentResult {
        if text.trim().is_empty() {
            return score(text);
        }

        match self.provider.analyze(text).await {
            Ok(result) => result,
            Err(e) => {
                tracing::warn!(
                    provider = self.provider.name(),
                    error = %e,
                    "sentiment provider failed; falling back to keyword scorer"
                );
                score(text)
            }
        }
    }

    /// Attach a sentiment label to every review, in place.
    pub async fn tag_reviews(&self, reviews: &mut [DealerReview]) {
        for review in reviews.iter_mut() {
            let result = self.analyze(&review.review).await;
            review.sentiment = Some(result.label);
        }
        tracing::debug!(count = reviews.len(), "tagged reviews");
    }
}
