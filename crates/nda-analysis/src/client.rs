//! Anthropic-backed implementation of the `Analyzer` trait.

use std::env;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::{debug, info};

use nda_types::AnalysisResult;

use crate::error::AnalysisError;
use crate::prompt::{analysis_request, SYSTEM_PROMPT};
use crate::schema::{analysis_tool, ANALYSIS_TOOL_NAME};
use crate::Analyzer;

const API_URL: &str = "https://api.anthropic.com/v1/messages";
const API_VERSION: &str = "2023-06-01";
const DEFAULT_MODEL: &str = "claude-sonnet-4-5";
const MAX_TOKENS: u32 = 8192;
const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

/// Single-request analysis client. No retries and no cancellation; a
/// failure is surfaced to the caller and the user re-triggers the action.
pub struct ClaudeAnalyzer {
    client: Client,
    api_key: String,
    model: String,
}

impl ClaudeAnalyzer {
    pub fn new(api_key: String) -> Result<Self, AnalysisError> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            client,
            api_key,
            model: DEFAULT_MODEL.to_string(),
        })
    }

    /// Build from `ANTHROPIC_API_KEY`, with `NDA_ANALYSIS_MODEL` as an
    /// optional model override.
    pub fn from_env() -> Result<Self, AnalysisError> {
        let api_key = env::var("ANTHROPIC_API_KEY").map_err(|_| AnalysisError::MissingApiKey)?;
        let mut analyzer = Self::new(api_key)?;
        if let Ok(model) = env::var("NDA_ANALYSIS_MODEL") {
            analyzer.model = model;
        }
        Ok(analyzer)
    }

    fn request_body(&self, document_text: &str) -> Value {
        json!({
            "model": self.model,
            "max_tokens": MAX_TOKENS,
            "system": SYSTEM_PROMPT,
            "messages": [{
                "role": "user",
                "content": analysis_request(document_text)
            }],
            "tools": [analysis_tool()],
            "tool_choice": { "type": "tool", "name": ANALYSIS_TOOL_NAME }
        })
    }
}

#[async_trait]
impl Analyzer for ClaudeAnalyzer {
    async fn analyze(&self, document_text: &str) -> Result<AnalysisResult, AnalysisError> {
        info!(
            "Requesting NDA analysis: model={}, {} chars",
            self.model,
            document_text.len()
        );

        let response = self
            .client
            .post(API_URL)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", API_VERSION)
            .json(&self.request_body(document_text))
            .send()
            .await?;

        match response.status().as_u16() {
            200 => {
                let message: MessageResponse = response.json().await?;
                parse_analysis(message)
            }
            401 | 403 => Err(AnalysisError::Auth),
            429 => Err(AnalysisError::RateLimited),
            status => {
                let message = response.text().await.unwrap_or_default();
                Err(AnalysisError::Api { status, message })
            }
        }
    }
}

/// Pull the forced tool call out of the response and deserialize its input.
fn parse_analysis(message: MessageResponse) -> Result<AnalysisResult, AnalysisError> {
    debug!("Response contained {} content blocks", message.content.len());

    let input = message
        .content
        .into_iter()
        .find_map(|block| match block {
            ContentBlock::ToolUse { name, input } if name == ANALYSIS_TOOL_NAME => Some(input),
            _ => None,
        })
        .ok_or_else(|| {
            AnalysisError::InvalidResponse("no tool_use block in response".to_string())
        })?;

    serde_json::from_value(input).map_err(|e| AnalysisError::InvalidResponse(e.to_string()))
}

#[derive(Debug, Deserialize)]
struct MessageResponse {
    content: Vec<ContentBlock>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum ContentBlock {
    Text {
        #[allow(dead_code)]
        text: String,
    },
    ToolUse {
        name: String,
        input: Value,
    },
}
