//! Rendering the redline and clean artifacts from a change list.

use nda_types::{Change, ChangeSummary, ChangeType, RedlineResult};
use regex::{NoExpand, Regex, RegexBuilder};

/// Render both artifacts and the summary tally from the original text.
///
/// Changes are applied sorted by ordinal descending, so the earlier-listed
/// finding is substituted last and wins when two excerpts overlap. Matching
/// is escaped-literal and case-insensitive, and replaces every occurrence
/// in the working text. An excerpt with no occurrence is a silent no-op.
pub fn generate_redline(original: &str, changes: &[Change]) -> RedlineResult {
    let mut ordered: Vec<&Change> = changes.iter().collect();
    ordered.sort_by(|a, b| b.ordinal.cmp(&a.ordinal));

    let mut redline = original.to_string();
    let mut clean = original.to_string();

    for change in ordered {
        match change.change_type {
            ChangeType::Deletion => {
                let Some(matcher) = literal_matcher(change.original_text.as_deref()) else {
                    continue;
                };
                let marker = deletion_marker(&change.reason);
                redline = matcher
                    .replace_all(&redline, |caps: &regex::Captures| {
                        format!("{}{}</del>", marker, &caps[0])
                    })
                    .into_owned();
                clean = matcher.replace_all(&clean, NoExpand("")).into_owned();
            }
            ChangeType::Replacement => {
                let Some(matcher) = literal_matcher(change.original_text.as_deref()) else {
                    continue;
                };
                let Some(new_text) = change.new_text.as_deref() else {
                    continue;
                };
                let marker = deletion_marker(&change.reason);
                let insertion = format!(
                    "<ins data-reason=\"replacement: {}\">{}</ins>",
                    escape_attr(&change.reason),
                    new_text
                );
                redline = matcher
                    .replace_all(&redline, |caps: &regex::Captures| {
                        format!("{}{}</del>{}", marker, &caps[0], insertion)
                    })
                    .into_owned();
                clean = matcher.replace_all(&clean, NoExpand(new_text)).into_owned();
            }
            ChangeType::Addition => {
                let Some(new_text) = change.new_text.as_deref() else {
                    continue;
                };
                redline.push_str(&format!(
                    "\n\n<ins data-reason=\"addition: {}\">{}</ins>",
                    escape_attr(&change.reason),
                    new_text
                ));
                clean.push_str("\n\n");
                clean.push_str(new_text);
            }
        }
    }

    RedlineResult {
        redline,
        clean,
        summary: summarize(changes),
    }
}

/// Count changes per type. Order-independent.
pub fn summarize(changes: &[Change]) -> ChangeSummary {
    let mut summary = ChangeSummary::default();
    for change in changes {
        match change.change_type {
            ChangeType::Deletion => summary.deletions += 1,
            ChangeType::Replacement => summary.replacements += 1,
            ChangeType::Addition => summary.additions += 1,
        }
    }
    summary
}

/// Case-insensitive matcher for a literal excerpt. `None` when the excerpt
/// is absent or empty, which downgrades the change to a no-op.
fn literal_matcher(excerpt: Option<&str>) -> Option<Regex> {
    let excerpt = excerpt?;
    if excerpt.is_empty() {
        return None;
    }
    RegexBuilder::new(&regex::escape(excerpt))
        .case_insensitive(true)
        .build()
        .ok()
}

fn deletion_marker(reason: &str) -> String {
    format!("<del data-reason=\"{}\">", escape_attr(reason))
}

/// Escape a reason for use inside a double-quoted attribute. Keeps the
/// marker syntax regular so the export stripper can rely on `[^>]*`.
fn escape_attr(reason: &str) -> String {
    reason
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn change(
        change_type: ChangeType,
        original: Option<&str>,
        new: Option<&str>,
        ordinal: usize,
    ) -> Change {
        Change {
            change_type,
            original_text: original.map(str::to_string),
            new_text: new.map(str::to_string),
            source_name: "Clause".to_string(),
            ordinal,
            reason: "overbroad".to_string(),
        }
    }

    #[test]
    fn deletion_strikes_and_removes() {
        let changes = vec![change(
            ChangeType::Deletion,
            Some("shall not compete"),
            None,
            0,
        )];
        let result = generate_redline("Recipient shall not compete with Discloser.", &changes);

        assert_eq!(result.clean, "Recipient  with Discloser.");
        assert!(result
            .redline
            .contains("<del data-reason=\"overbroad\">shall not compete</del>"));
        assert_eq!(result.summary.deletions, 1);
    }

    #[test]
    fn replacement_inserts_adjacent_to_deletion() {
        let changes = vec![change(
            ChangeType::Replacement,
            Some("is perpetual"),
            Some("is 5 years"),
            0,
        )];
        let result = generate_redline("The term is perpetual.", &changes);

        assert_eq!(result.clean, "The term is 5 years.");
        assert!(result.redline.contains(
            "<del data-reason=\"overbroad\">is perpetual</del>\
             <ins data-reason=\"replacement: overbroad\">is 5 years</ins>"
        ));
    }

    #[test]
    fn addition_appends_to_both_artifacts() {
        let changes = vec![change(
            ChangeType::Addition,
            None,
            Some("Residuals clause text."),
            0,
        )];
        let result = generate_redline("Original body.", &changes);

        assert!(result.clean.starts_with("Original body."));
        assert!(result.clean.ends_with("Residuals clause text."));
        assert!(result
            .redline
            .ends_with("<ins data-reason=\"addition: overbroad\">Residuals clause text.</ins>"));
        assert_eq!(result.summary.additions, 1);
    }

    #[test]
    fn unmatched_excerpt_is_a_silent_no_op() {
        let changes = vec![change(
            ChangeType::Replacement,
            Some("no such language"),
            Some("anything"),
            0,
        )];
        let result = generate_redline("The term is perpetual.", &changes);

        assert_eq!(result.clean, "The term is perpetual.");
        assert_eq!(result.redline, "The term is perpetual.");
        // Still tallied: the finding exists even though it produced no edit.
        assert_eq!(result.summary.replacements, 1);
    }

    #[test]
    fn matching_is_case_insensitive_and_keeps_document_casing() {
        let changes = vec![change(
            ChangeType::Deletion,
            Some("confidential information"),
            None,
            0,
        )];
        let result = generate_redline("All Confidential Information is covered.", &changes);

        assert_eq!(result.clean, "All  is covered.");
        assert!(result.redline.contains(">Confidential Information</del>"));
    }

    #[test]
    fn regex_metacharacters_in_excerpt_match_literally() {
        let changes = vec![change(
            ChangeType::Replacement,
            Some("a period of five (5) years"),
            Some("a period of two (2) years"),
            0,
        )];
        let result = generate_redline("Survives for a period of five (5) years.", &changes);

        assert_eq!(result.clean, "Survives for a period of two (2) years.");
    }

    #[test]
    fn dollar_signs_in_replacement_are_literal() {
        let changes = vec![change(
            ChangeType::Replacement,
            Some("liquidated damages"),
            Some("damages capped at $100"),
            0,
        )];
        let result = generate_redline("Pays liquidated damages on breach.", &changes);

        assert_eq!(result.clean, "Pays damages capped at $100 on breach.");
    }

    #[test]
    fn all_occurrences_are_replaced() {
        let changes = vec![change(
            ChangeType::Deletion,
            Some("forever"),
            None,
            0,
        )];
        let result = generate_redline("Bound forever, and forever again.", &changes);

        assert!(!result.clean.contains("forever"));
        assert_eq!(result.redline.matches("</del>").count(), 2);
    }

    #[test]
    fn changes_apply_in_descending_ordinal_order() {
        let changes = vec![
            change(
                ChangeType::Replacement,
                Some("perpetual"),
                Some("5-year"),
                0,
            ),
            change(
                ChangeType::Replacement,
                Some("perpetual term"),
                Some("limited term"),
                1,
            ),
        ];
        let result = generate_redline("A perpetual term applies.", &changes);

        // Ordinal 1 runs first ("perpetual term" -> "limited term"), leaving
        // nothing for ordinal 0 to match in the clean text.
        assert_eq!(result.clean, "A limited term applies.");
    }

    #[test]
    fn replacement_missing_new_text_is_a_no_op() {
        let changes = vec![change(ChangeType::Replacement, Some("perpetual"), None, 0)];
        let result = generate_redline("A perpetual term.", &changes);
        assert_eq!(result.clean, "A perpetual term.");
        assert_eq!(result.redline, "A perpetual term.");
    }

    #[test]
    fn reason_is_attribute_escaped_in_markers() {
        let mut c = change(ChangeType::Deletion, Some("perpetual"), None, 0);
        c.reason = "term \"never\" ends & binds <everyone>".to_string();
        let result = generate_redline("A perpetual term.", &[c]);

        assert!(result.redline.contains(
            "data-reason=\"term &quot;never&quot; ends &amp; binds &lt;everyone&gt;\""
        ));
    }

    #[test]
    fn summary_counts_each_type() {
        let changes = vec![
            change(ChangeType::Replacement, Some("a"), Some("b"), 0),
            change(ChangeType::Replacement, Some("c"), Some("d"), 1),
            change(ChangeType::Deletion, Some("e"), None, 2),
            change(ChangeType::Addition, None, Some("f"), 3),
        ];
        let summary = summarize(&changes);
        assert_eq!(summary.replacements, 2);
        assert_eq!(summary.deletions, 1);
        assert_eq!(summary.additions, 1);
    }
}
