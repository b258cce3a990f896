use thiserror::Error;

/// Errors raised by network-backed sentiment providers.
///
/// The keyword scorer never produces these; [`crate::Analyzer`] catches them
/// and substitutes the keyword result.
#[derive(Debug, Error)]
pub enum SentimentError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("NLU error: {0}")]
    Nlu(String),
}
