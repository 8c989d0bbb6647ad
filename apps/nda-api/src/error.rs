//! Error types for the NDA API server.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use doc_extract::ExtractError;
use nda_analysis::AnalysisError;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error(transparent)]
    Extraction(#[from] ExtractError),

    #[error(transparent)]
    Analysis(#[from] AnalysisError),
}

/// Error response body
#[derive(Serialize)]
struct ErrorResponse {
    success: bool,
    error: String,
    code: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            ApiError::InvalidRequest(_) => (StatusCode::BAD_REQUEST, "INVALID_REQUEST"),
            ApiError::Extraction(e) => match e {
                ExtractError::UnsupportedType(_) => {
                    (StatusCode::UNSUPPORTED_MEDIA_TYPE, "UNSUPPORTED_TYPE")
                }
                ExtractError::InvalidText | ExtractError::InvalidDocument(_) => {
                    (StatusCode::BAD_REQUEST, "INVALID_DOCUMENT")
                }
                ExtractError::PasswordProtected => {
                    (StatusCode::UNPROCESSABLE_ENTITY, "PASSWORD_PROTECTED")
                }
                ExtractError::ScannedNeedsOcr => {
                    (StatusCode::UNPROCESSABLE_ENTITY, "SCANNED_NEEDS_OCR")
                }
                ExtractError::Extraction(_) => {
                    (StatusCode::UNPROCESSABLE_ENTITY, "EXTRACTION_FAILED")
                }
            },
            ApiError::Analysis(e) => match e {
                AnalysisError::RateLimited => (StatusCode::TOO_MANY_REQUESTS, "RATE_LIMITED"),
                AnalysisError::Auth | AnalysisError::MissingApiKey => {
                    (StatusCode::SERVICE_UNAVAILABLE, "ANALYSIS_AUTH")
                }
                AnalysisError::Network(_) => (StatusCode::BAD_GATEWAY, "ANALYSIS_NETWORK"),
                AnalysisError::Api { .. } | AnalysisError::InvalidResponse(_) => {
                    (StatusCode::BAD_GATEWAY, "ANALYSIS_FAILED")
                }
            },
        };

        let message = self.to_string();
        if status.is_server_error() {
            tracing::error!("{}: {}", code, message);
        } else {
            tracing::warn!("{}: {}", code, message);
        }

        let body = ErrorResponse {
            success: false,
            error: message,
            code: code.to_string(),
        };

        (status, Json(body)).into_response()
    }
}
