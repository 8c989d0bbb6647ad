//! Shared application state.

use std::sync::Arc;

use doc_extract::TextExtractor;
use nda_analysis::{Analyzer, IdentityProvider};

/// Collaborators behind the three external boundaries, each swappable for
/// a stub in tests.
#[derive(Clone)]
pub struct AppState {
    pub analyzer: Arc<dyn Analyzer>,
    pub extractor: Arc<dyn TextExtractor>,
    pub identity: Arc<dyn IdentityProvider>,
}

impl AppState {
    pub fn new(
        analyzer: Arc<dyn Analyzer>,
        extractor: Arc<dyn TextExtractor>,
        identity: Arc<dyn IdentityProvider>,
    ) -> Self {
        Self {
            analyzer,
            extractor,
            identity,
        }
    }
}
