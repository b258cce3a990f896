//! IBM Watson Natural Language Understanding provider.
//!
//! Sends the review text to the NLU `/v1/analyze` endpoint with only the
//! document-level sentiment feature enabled, and maps the returned label and
//! score onto a [`SentimentResult`].

use std::time::Duration;

use async_trait::async_trait;
use dealer_core::{AppConfig, ConfigError, SentimentLabel};
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::error::SentimentError;
use crate::provider::SentimentProvider;
use crate::scorer::signal_counts;
use crate::types::SentimentResult;

const USER_AGENT: &str = "dealer-reviews/0.1 (sentiment)";

/// Connection settings for the Watson NLU service.
#[derive(Clone)]
pub struct NluConfig {
    pub api_key: String,
    pub service_url: String,
    pub version: String,
    pub timeout_secs: u64,
}

impl NluConfig {
    /// Extract NLU settings from the application config.
    ///
    /// Returns `Ok(None)` when neither the API key nor the service URL is set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingEnvVar`] when only one of the two is set.
    pub fn from_app_config(config: &AppConfig) -> Result<Option<Self>, ConfigError> {
        let (api_key, service_url) = match (&config.nlu_api_key, &config.nlu_url) {
            (None, None) => return Ok(None),
            (Some(_), None) => return Err(ConfigError::MissingEnvVar("IBM_NLU_URL".to_string())),
            (None, Some(_)) => return Err(ConfigError::MissingEnvVar("IBM_API_KEY".to_string())),
            (Some(key), Some(url)) => (key.clone(), url.clone()),
        };
        Ok(Some(Self {
            api_key,
            service_url,
            version: config.nlu_version.clone(),
            timeout_secs: config.nlu_timeout_secs,
        }))
    }
}

impl std::fmt::Debug for NluConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NluConfig")
            .field("api_key", &"[redacted]")
            .field("service_url", &self.service_url)
            .field("version", &self.version)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

#[derive(Serialize)]
struct AnalyzeRequest<'a> {
    text: &'a str,
    features: Features,
}

#[derive(Serialize)]
struct Features {
    sentiment: SentimentOptions,
}

#[derive(Serialize)]
struct SentimentOptions {}

#[derive(Deserialize)]
struct AnalyzeResponse {
    sentiment: SentimentBlock,
}

#[derive(Deserialize)]
struct SentimentBlock {
    document: DocumentSentiment,
}

#[derive(Deserialize)]
struct DocumentSentiment {
    label: String,
    #[serde(default)]
    score: f64,
}

/// HTTP client for the Watson NLU analyze endpoint.
pub struct NluClient {
    client: Client,
    api_key: String,
    analyze_url: String,
    version: String,
}

impl NluClient {
    /// Build a client from explicit settings.
    ///
    /// # Errors
    ///
    /// Returns [`SentimentError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(config: &NluConfig) -> Result<Self, SentimentError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(config.timeout_secs.min(10)))
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            client,
            api_key: config.api_key.clone(),
            analyze_url: format!("{}/v1/analyze", config.service_url.trim_end_matches('/')),
            version: config.version.clone(),
        })
    }
}

#[async_trait]
impl SentimentProvider for NluClient {
    fn name(&self) -> &'static str {
        "watson-nlu"
    }

    async fn analyze(&self, text: &str) -> Result<SentimentResult, SentimentError> {
        let request = AnalyzeRequest {
            text,
            features: Features {
                sentiment: SentimentOptions {},
            },
        };

        let response = self
            .client
            .post(&self.analyze_url)
            .query(&[("version", self.version.as_str())])
            .basic_auth("apikey", Some(&self.api_key))
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(SentimentError::Nlu(format!(
                "NLU returned status {}",
                response.status()
            )));
        }

        let body: AnalyzeResponse = response
            .json()
            .await
            .map_err(|e| SentimentError::Nlu(format!("NLU response parse error: {e}")))?;

        let document = body.sentiment.document;
        let label = document
            .label
            .parse::<SentimentLabel>()
            .map_err(SentimentError::Nlu)?;
        let score = normalize_score(label, document.score)?;
        let (positive_signals, negative_signals) = signal_counts(text);

        tracing::debug!(label = %label, score, "NLU sentiment");

        Ok(SentimentResult {
            label,
            score,
            text: text.to_string(),
            positive_signals,
            negative_signals,
        })
    }
}

/// Clamp the NLU score into `[-1.0, 1.0]` and make it agree with the label.
///
/// Neutral always maps to `0.0`. A polar label whose score is zero, NaN, or of
/// the opposite sign is rejected.
fn normalize_score(label: SentimentLabel, raw: f64) -> Result<f64, SentimentError> {
    if label == SentimentLabel::Neutral {
        return Ok(0.0);
    }
    if raw.is_nan() {
        return Err(SentimentError::Nlu("NLU returned a NaN score".to_string()));
    }

    let score = raw.clamp(-1.0, 1.0);
    let agrees = match label {
        SentimentLabel::Positive => score > 0.0,
        SentimentLabel::Negative => score < 0.0,
        SentimentLabel::Neutral => true,
    };
    if agrees {
        Ok(score)
    } else {
        Err(SentimentError::Nlu(format!(
            "NLU label {label} disagrees with score {raw}"
        )))
    }
}
