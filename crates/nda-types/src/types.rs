//! Shared data model for NDA analysis and redline generation.
//!
//! `Finding` and `AnalysisResult` mirror the JSON contract of the hosted
//! AI call (camelCase on the wire). `Change` and friends are derived
//! locally and never leave the process except through the API layer.

use serde::{Deserialize, Serialize};

/// What the reviewer should do with a flagged clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecommendedAction {
    Remove,
    Amend,
    Add,
}

/// Risk level assigned to a single finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    High,
    Medium,
    Low,
}

/// Overall recommendation for the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Recommendation {
    #[serde(rename = "Sign as-is")]
    SignAsIs,
    #[serde(rename = "Sign with amendments")]
    SignWithAmendments,
    #[serde(rename = "Do not sign")]
    DoNotSign,
}

/// One clause-level issue reported by the analysis call.
///
/// Field presence follows the action: `Remove` carries `current_language`,
/// `Add` carries `suggested_language`, `Amend` carries both. Nothing here is
/// validated locally; the redline generator degrades missing text to a no-op.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Finding {
    pub id: String,
    pub name: String,
    pub issue: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_language: Option<String>,
    pub recommended_action: RecommendedAction,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggested_language: Option<String>,
    pub why_it_matters: String,
    pub risk_level: RiskLevel,
}

/// Aggregate response from the analysis call. Opaque to the redline core
/// except for `clauses`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub recommendation: Recommendation,
    /// 1 (benign) through 10 (do not sign).
    pub risk_score: u8,
    pub key_concerns: Vec<String>,
    pub clauses: Vec<Finding>,
    pub email_template: String,
}

/// Kind of document mutation derived from a finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeType {
    Deletion,
    Replacement,
    Addition,
}

impl ChangeType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeType::Deletion => "deletion",
            ChangeType::Replacement => "replacement",
            ChangeType::Addition => "addition",
        }
    }
}

/// One document mutation, derived from a `Finding`.
///
/// `ordinal` is the finding's position in the input list. It is a sort and
/// tie-break key only, never a character offset into the document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Change {
    pub change_type: ChangeType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_text: Option<String>,
    pub source_name: String,
    pub ordinal: usize,
    pub reason: String,
}

/// Tally of changes by type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeSummary {
    pub deletions: usize,
    pub replacements: usize,
    pub additions: usize,
}

impl ChangeSummary {
    pub fn total(&self) -> usize {
        self.deletions + self.replacements + self.additions
    }
}

/// The two derived documents plus the tally.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RedlineResult {
    /// Annotated artifact: original struck through, replacements inserted.
    pub redline: String,
    /// Fully-amended artifact with no annotation markers.
    pub clean: String,
    pub summary: ChangeSummary,
}

/// Authenticated user, as reported by the hosted identity provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: Option<String>,
}
