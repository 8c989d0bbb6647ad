//! Redline generation for NDA findings.
//!
//! Given the original document text and the clause-level findings from an
//! analysis run, this crate derives typed change records and renders two
//! documents: an annotated redline (deleted language struck through,
//! replacement language inserted) and a clean fully-amended version, plus a
//! tally of changes by type.
//!
//! Findings are located in the document by exact-text anchor matching:
//! literal, case-insensitive substring search with all regex metacharacters
//! escaped. There is no clause or section awareness; a short excerpt can
//! match elsewhere in the document, and an excerpt that does not occur at
//! all produces no edit. This is a documented limitation, not an error.

pub mod derive;
pub mod export;
pub mod render;

pub use derive::derive_changes;
pub use export::{download_filename, strip_markers, ArtifactKind};
pub use render::generate_redline;

use nda_types::{Finding, RedlineResult};

/// Derive changes from `findings` and render both artifacts in one call.
pub fn redline_document(original: &str, findings: &[Finding]) -> RedlineResult {
    let changes = derive_changes(findings);
    generate_redline(original, &changes)
}
