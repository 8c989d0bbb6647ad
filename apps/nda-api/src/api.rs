//! API handlers for the NDA review server.

use axum::{extract::State, http::HeaderMap, Json};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use nda_types::{AnalysisResult, ChangeSummary, Finding};
use redline_core::{download_filename, redline_document, strip_markers, ArtifactKind};

use crate::error::ApiError;
use crate::state::AppState;

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
}

/// Handler: GET /health
pub async fn handle_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        service: "nda-api",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Extraction request body
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractRequest {
    /// Original file name, for logging only
    #[serde(default)]
    pub file_name: Option<String>,

    /// Base64-encoded file payload
    pub data_base64: String,

    /// Declared MIME type of the payload
    pub mime_type: String,
}

/// Extraction response
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractResponse {
    pub success: bool,
    pub text: String,
    pub character_count: usize,
}

/// Handler: POST /api/extract
pub async fn handle_extract(
    State(state): State<AppState>,
    Json(req): Json<ExtractRequest>,
) -> Result<Json<ExtractResponse>, ApiError> {
    info!(
        "Extract request: file={}, mime={}",
        req.file_name.as_deref().unwrap_or("<unnamed>"),
        req.mime_type
    );

    let bytes = BASE64
        .decode(&req.data_base64)
        .map_err(|e| ApiError::InvalidRequest(format!("Invalid base64 payload: {}", e)))?;

    let text = state.extractor.extract(&bytes, &req.mime_type)?;
    let character_count = text.chars().count();

    Ok(Json(ExtractResponse {
        success: true,
        text,
        character_count,
    }))
}

/// Analysis request body
#[derive(Deserialize)]
pub struct AnalyzeRequest {
    /// Full document text to analyze
    pub text: String,
}

/// Analysis response
#[derive(Serialize)]
pub struct AnalyzeResponse {
    pub success: bool,
    pub analysis: AnalysisResult,
}

/// Handler: POST /api/analyze
pub async fn handle_analyze(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(req): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, ApiError> {
    if req.text.trim().is_empty() {
        return Err(ApiError::InvalidRequest(
            "Document text must not be empty".to_string(),
        ));
    }

    let user = state.identity.current_user(bearer_token(&headers)).await;
    info!(
        "Analyze request: {} chars, user={}",
        req.text.len(),
        user.as_ref().map(|u| u.id.as_str()).unwrap_or("anonymous")
    );

    let analysis = state.analyzer.analyze(&req.text).await?;
    debug!(
        "Analysis complete: riskScore={}, {} clauses",
        analysis.risk_score,
        analysis.clauses.len()
    );

    Ok(Json(AnalyzeResponse {
        success: true,
        analysis,
    }))
}

/// Redline request body
#[derive(Deserialize)]
pub struct RedlineRequest {
    /// Original document text
    pub text: String,

    /// Findings from a prior analysis run, in analysis order
    pub clauses: Vec<Finding>,
}

/// Redline response
#[derive(Serialize)]
pub struct RedlineResponse {
    pub success: bool,
    pub redline: String,
    pub clean: String,
    pub summary: ChangeSummary,
}

/// Handler: POST /api/redline
///
/// Derivation and rendering are recomputed in full on every call; nothing
/// is cached or persisted.
pub async fn handle_redline(
    State(_state): State<AppState>,
    Json(req): Json<RedlineRequest>,
) -> Result<Json<RedlineResponse>, ApiError> {
    if req.text.trim().is_empty() {
        return Err(ApiError::InvalidRequest(
            "Document text must not be empty".to_string(),
        ));
    }

    info!("Redline request: {} findings", req.clauses.len());
    let result = redline_document(&req.text, &req.clauses);

    Ok(Json(RedlineResponse {
        success: true,
        redline: result.redline,
        clean: result.clean,
        summary: result.summary,
    }))
}

/// Export request body
#[derive(Deserialize)]
pub struct ExportRequest {
    /// "redline" or "clean"
    pub artifact: String,

    /// The artifact content to export
    pub content: String,
}

/// Export response
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportResponse {
    pub success: bool,
    /// Copy/paste-safe plain text (annotation markers stripped for redline)
    pub content: String,
    pub file_name: String,
}

/// Handler: POST /api/export
pub async fn handle_export(
    Json(req): Json<ExportRequest>,
) -> Result<Json<ExportResponse>, ApiError> {
    let kind = parse_artifact_kind(&req.artifact)?;
    let content = match kind {
        ArtifactKind::Redline => strip_markers(&req.content),
        ArtifactKind::Clean => req.content,
    };

    Ok(Json(ExportResponse {
        success: true,
        content,
        file_name: download_filename(kind),
    }))
}

fn parse_artifact_kind(artifact: &str) -> Result<ArtifactKind, ApiError> {
    match artifact.to_lowercase().as_str() {
        "redline" => Ok(ArtifactKind::Redline),
        "clean" => Ok(ArtifactKind::Clean),
        other => Err(ApiError::InvalidRequest(format!(
            "Unknown artifact '{}'. Must be 'redline' or 'clean'",
            other
        ))),
    }
}

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(axum::http::header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}
