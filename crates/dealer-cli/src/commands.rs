//! Command handlers. Each returns the JSON text to print.

use std::path::Path;

use anyhow::Context;
use dealer_core::{AppConfig, DealerReview};
use dealer_sentiment::{Analyzer, NluConfig};

/// Choose the analyzer for this invocation.
///
/// `--keyword-only` never looks at the NLU settings, so a half-configured
/// environment only matters when NLU could actually be used.
///
/// # Errors
///
/// Returns an error if exactly one of the NLU key and URL is set and
/// `keyword_only` is `false`.
pub(crate) fn build_analyzer(config: &AppConfig, keyword_only: bool) -> anyhow::Result<Analyzer> {
    if keyword_only {
        return Ok(Analyzer::keyword_only());
    }
    let nlu = NluConfig::from_app_config(config)?;
    Ok(Analyzer::from_config(nlu.as_ref()))
}

/// Score one text and render the result as pretty JSON.
///
/// # Errors
///
/// Returns an error only if serialization fails.
pub(crate) async fn score_text(analyzer: &Analyzer, text: &str) -> anyhow::Result<String> {
    let result = analyzer.analyze(text).await;
    Ok(serde_json::to_string_pretty(&result)?)
}

/// Read a JSON array of reviews from `path`, label each one, and render the
/// tagged array as pretty JSON.
///
/// Records that do not parse as a review are logged and left out of the
/// output; the rest are still tagged.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not a JSON array.
pub(crate) async fn tag_file(analyzer: &Analyzer, path: &Path) -> anyhow::Result<String> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("failed to read {}", path.display()))?;
    let records: Vec<serde_json::Value> = serde_json::from_str(&raw)
        .with_context(|| format!("{} is not a JSON array", path.display()))?;

    let total = records.len();
    let mut reviews = parse_reviews(records);
    let skipped = total - reviews.len();

    analyzer.tag_reviews(&mut reviews).await;
    tracing::info!(
        count = reviews.len(),
        skipped,
        provider = analyzer.provider_name(),
        "tagged reviews"
    );

    Ok(serde_json::to_string_pretty(&reviews)?)
}

/// Deserialize each record on its own, skipping the ones that fail.
fn parse_reviews(records: Vec<serde_json::Value>) -> Vec<DealerReview> {
    records
        .into_iter()
        .enumerate()
        .filter_map(|(index, record)| match serde_json::from_value(record) {
            Ok(review) => Some(review),
            Err(e) => {
                tracing::warn!(index, error = %e, "skipping unparseable review record");
                None
            }
        })
        .collect()
}
