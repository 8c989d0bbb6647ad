//! Copy/export views over the rendered artifacts.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // `(?s)` so struck language spanning lines is still dropped whole.
    static ref DEL_SPAN: Regex = Regex::new(r"(?s)<del\b[^>]*>.*?</del>").unwrap();
    static ref INS_TAG: Regex = Regex::new(r"</?ins\b[^>]*>").unwrap();
}

/// Which derived document an export refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    Redline,
    Clean,
}

impl ArtifactKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ArtifactKind::Redline => "redline",
            ArtifactKind::Clean => "clean",
        }
    }
}

/// Strip annotation markers from a redline artifact, producing copy-safe
/// plain text: deletion spans are dropped along with the struck language,
/// insertion spans are unwrapped. For a batch with no additions this equals
/// the clean artifact.
pub fn strip_markers(redline: &str) -> String {
    let without_deletions = DEL_SPAN.replace_all(redline, "");
    INS_TAG.replace_all(&without_deletions, "").into_owned()
}

/// File name for a downloadable plain-text export of the given artifact.
pub fn download_filename(kind: ArtifactKind) -> String {
    format!("nda-{}.txt", kind.as_str())
}
