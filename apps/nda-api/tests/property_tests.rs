//! Property-based tests for nda-api request/response models.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use proptest::prelude::*;

use nda_types::{AnalysisResult, Finding};

fn action_strategy() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just("Remove"), Just("Amend"), Just("Add")]
}

fn risk_strategy() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just("High"), Just("Medium"), Just("Low")]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // ============================================================
    // Wire-format tests
    // ============================================================

    #[test]
    fn findings_deserialize_for_any_enum_combination(
        action in action_strategy(),
        risk in risk_strategy(),
        name in "[A-Za-z ]{1,40}",
    ) {
        let json = format!(
            r#"{{
                "id": "f-1",
                "name": "{name}",
                "issue": "issue",
                "currentLanguage": "some language",
                "recommendedAction": "{action}",
                "suggestedLanguage": "other language",
                "whyItMatters": "matters",
                "riskLevel": "{risk}"
            }}"#
        );
        let finding: Finding = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(finding.name, name);
    }

    #[test]
    fn finding_roundtrips_through_json(
        action in action_strategy(),
        risk in risk_strategy(),
        current in proptest::option::of("[a-z ]{1,60}"),
        suggested in proptest::option::of("[a-z ]{1,60}"),
    ) {
        let json = serde_json::json!({
            "id": "f-1",
            "name": "Clause",
            "issue": "issue",
            "currentLanguage": current,
            "recommendedAction": action,
            "suggestedLanguage": suggested,
            "whyItMatters": "matters",
            "riskLevel": risk,
        });
        let finding: Finding = serde_json::from_value(json).unwrap();
        let reserialized = serde_json::to_value(&finding).unwrap();
        let back: Finding = serde_json::from_value(reserialized).unwrap();
        prop_assert_eq!(back.current_language, finding.current_language);
        prop_assert_eq!(back.suggested_language, finding.suggested_language);
    }

    #[test]
    fn risk_scores_in_contract_range_deserialize(score in 1u8..=10) {
        let json = serde_json::json!({
            "recommendation": "Sign with amendments",
            "riskScore": score,
            "keyConcerns": [],
            "clauses": [],
            "emailTemplate": ""
        });
        let result: AnalysisResult = serde_json::from_value(json).unwrap();
        prop_assert!(result.risk_score >= 1 && result.risk_score <= 10);
    }

    // ============================================================
    // Upload payload tests
    // ============================================================

    #[test]
    fn base64_payload_roundtrip(data in proptest::collection::vec(any::<u8>(), 0..500)) {
        let encoded = BASE64.encode(&data);
        let decoded = BASE64.decode(&encoded).unwrap();
        prop_assert_eq!(data, decoded);
    }

    #[test]
    fn supported_mime_types_are_well_formed(
        mime in prop_oneof![
            Just("text/plain"),
            Just("text/markdown"),
            Just("application/pdf"),
        ]
    ) {
        prop_assert!(mime.contains('/'));
        prop_assert!(!mime.chars().any(char::is_whitespace));
    }

    // ============================================================
    // Export tests
    // ============================================================

    #[test]
    fn artifact_kinds_map_to_txt_filenames(
        kind in prop_oneof![Just("redline"), Just("clean")]
    ) {
        let filename = format!("nda-{}.txt", kind);
        prop_assert!(filename.ends_with(".txt"));
        prop_assert!(filename.starts_with("nda-"));
    }

    #[test]
    fn stripped_redline_contains_no_marker_tags(body in "[a-zA-Z ._,]{0,200}") {
        let redline = format!(
            "{}<del data-reason=\"r\">gone</del><ins data-reason=\"replacement: r\">kept</ins>",
            body
        );
        let stripped = redline_core::strip_markers(&redline);
        prop_assert!(!stripped.contains("<del"));
        prop_assert!(!stripped.contains("<ins"));
        prop_assert!(!stripped.contains("</del>"));
        prop_assert!(!stripped.contains("</ins>"));
        prop_assert!(stripped.ends_with("kept"));
    }
}
