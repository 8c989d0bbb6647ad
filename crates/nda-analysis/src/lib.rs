//! Hosted AI analysis boundary.
//!
//! The analysis itself is opaque: document text goes out with the fixed
//! playbook prompt and a JSON response schema, a structured
//! [`nda_types::AnalysisResult`] comes back. Everything here is plumbing
//! for that single call plus the identity passthrough.

pub mod client;
pub mod error;
pub mod identity;
pub mod prompt;
pub mod schema;

use async_trait::async_trait;
use nda_types::AnalysisResult;

pub use client::ClaudeAnalyzer;
pub use error::AnalysisError;
pub use identity::{AnonymousIdentity, IdentityProvider};

/// Swappable analysis collaborator: document text in, findings out.
#[async_trait]
pub trait Analyzer: Send + Sync {
    async fn analyze(&self, document_text: &str) -> Result<AnalysisResult, AnalysisError>;
}
