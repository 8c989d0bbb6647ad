//! Mapping findings to typed change records.

use nda_types::{Change, ChangeType, Finding, RecommendedAction};

/// Derive one `Change` per finding, preserving input order.
///
/// The mapping is stable and one-to-one: Remove becomes a deletion, Amend a
/// replacement, Add an addition. A finding missing its expected text fields
/// is still emitted with `None` in the gaps so downstream consumers can
/// report on it; the renderer treats those gaps as no-ops.
pub fn derive_changes(findings: &[Finding]) -> Vec<Change> {
    findings
        .iter()
        .enumerate()
        .map(|(ordinal, finding)| {
            let change_type = match finding.recommended_action {
                RecommendedAction::Remove => ChangeType::Deletion,
                RecommendedAction::Amend => ChangeType::Replacement,
                RecommendedAction::Add => ChangeType::Addition,
            };
            // Additions ignore any stray current_language on the finding.
            let original_text = match change_type {
                ChangeType::Addition => None,
                _ => finding.current_language.clone(),
            };
            Change {
                change_type,
                original_text,
                new_text: finding.suggested_language.clone(),
                source_name: finding.name.clone(),
                ordinal,
                reason: finding.issue.clone(),
            }
        })
        .collect()
}
