pub mod types;

pub use types::{
    AnalysisResult, Change, ChangeSummary, ChangeType, Finding, Recommendation, RecommendedAction,
    RedlineResult, RiskLevel, User,
};
