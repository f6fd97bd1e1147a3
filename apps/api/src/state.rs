use std::sync::Arc;

use crate::analysis::analyzer::ResumeAnalyzer;
use crate::store::ResumeStore;

/// Shared application state injected into all route handlers via Axum extractors.
/// Both collaborators are built once at startup; handlers never construct
/// their own model clients or database access.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable record storage. Production wires `PgResumeStore`.
    pub store: Arc<dyn ResumeStore>,
    pub analyzer: ResumeAnalyzer,
}
