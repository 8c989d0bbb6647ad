//! Error taxonomy for the analysis call.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("ANTHROPIC_API_KEY is not set")]
    MissingApiKey,

    #[error("Authentication with the analysis service failed")]
    Auth,

    #[error("Analysis service rate limit exceeded")]
    RateLimited,

    #[error("Network error calling analysis service: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Analysis service error {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Analysis response did not match the expected schema: {0}")]
    InvalidResponse(String),
}
