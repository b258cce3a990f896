use axum::{
    body::Bytes,
    extract::{Query, State},
    Extension, Json,
};
use dealer_sentiment::SentimentResult;
use serde::Deserialize;

use crate::middleware::RequestId;

use super::AppState;

#[derive(Debug, Default, Deserialize)]
pub(super) struct AnalyzeParams {
    #[serde(default)]
    pub text: Option<String>,
}

pub(super) async fn analyze_query(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(params): Query<AnalyzeParams>,
) -> Json<SentimentResult> {
    let text = params.text.unwrap_or_default();
    Json(run(&state, &req_id, &text).await)
}

/// Accepts `{"text": "..."}`. A missing, empty, or unparseable body is
/// treated as empty text rather than rejected.
pub(super) async fn analyze_body(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    body: Bytes,
) -> Json<SentimentResult> {
    let params = parse_body(&body);
    let text = params.text.unwrap_or_default();
    Json(run(&state, &req_id, &text).await)
}

fn parse_body(body: &[u8]) -> AnalyzeParams {
    if body.is_empty() {
        return AnalyzeParams::default();
    }
    serde_json::from_slice(body).unwrap_or_else(|e| {
        tracing::debug!(error = %e, "ignoring unparseable analyze body");
        AnalyzeParams::default()
    })
}

async fn run(state: &AppState, req_id: &RequestId, text: &str) -> SentimentResult {
    let result = state.analyzer.analyze(text).await;
    tracing::debug!(
        request_id = %req_id.0,
        provider = state.analyzer.provider_name(),
        label = %result.label,
        score = result.score,
        "analyzed review text"
    );
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_body_reads_text_field() {
        let params = parse_body(br#"{"text": "great"}"#);
        assert_eq!(params.text.as_deref(), Some("great"));
    }

    #[test]
    fn parse_body_tolerates_garbage() {
        assert!(parse_body(b"{not json").text.is_none());
        assert!(parse_body(b"").text.is_none());
        assert!(parse_body(br#"{"other": 1}"#).text.is_none());
    }
}
