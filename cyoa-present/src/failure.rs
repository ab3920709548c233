use serde::Serialize;

use cyoa_api::TransportError;

/// A non-fatal, user-visible error for one section of the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FailureView {
    pub context: &'static str,
    pub message: String,
}

impl FailureView {
    pub fn stats(_err: &TransportError) -> Self {
        Self { context: "stats", message: "Could not load statistics.".to_string() }
    }

    pub fn catalog(_err: &TransportError) -> Self {
        Self { context: "catalog", message: "Could not load the game list.".to_string() }
    }

    pub fn search(err: &TransportError) -> Self {
        Self { context: "search", message: format!("Search failed: {err}") }
    }
}
