//! JSON response contract for the analysis call.
//!
//! The schema is handed to the model as a forced tool so the response is
//! structured JSON rather than prose. Field names and enum values must stay
//! in lockstep with the serde renames on `nda_types`.

use serde_json::{json, Value};

pub const ANALYSIS_TOOL_NAME: &str = "record_analysis";

/// Tool definition whose input schema is the `AnalysisResult` wire format.
pub fn analysis_tool() -> Value {
    json!({
        "name": ANALYSIS_TOOL_NAME,
        "description": "Record the structured results of an NDA review.",
        "input_schema": {
            "type": "object",
            "properties": {
                "recommendation": {
                    "type": "string",
                    "enum": ["Sign as-is", "Sign with amendments", "Do not sign"]
                },
                "riskScore": {
                    "type": "integer",
                    "minimum": 1,
                    "maximum": 10
                },
                "keyConcerns": {
                    "type": "array",
                    "items": { "type": "string" }
                },
                "clauses": {
                    "type": "array",
                    "items": {
                        "type": "object",
                        "properties": {
                            "id": { "type": "string" },
                            "name": { "type": "string" },
                            "issue": { "type": "string" },
                            "currentLanguage": {
                                "type": "string",
                                "description": "Verbatim excerpt from the document, required for Remove and Amend"
                            },
                            "recommendedAction": {
                                "type": "string",
                                "enum": ["Remove", "Amend", "Add"]
                            },
                            "suggestedLanguage": {
                                "type": "string",
                                "description": "Replacement or new language, required for Amend and Add"
                            },
                            "whyItMatters": { "type": "string" },
                            "riskLevel": {
                                "type": "string",
                                "enum": ["High", "Medium", "Low"]
                            }
                        },
                        "required": ["id", "name", "issue", "recommendedAction", "whyItMatters", "riskLevel"]
                    }
                },
                "emailTemplate": { "type": "string" }
            },
            "required": ["recommendation", "riskScore", "keyConcerns", "clauses", "emailTemplate"]
        }
    })
}
