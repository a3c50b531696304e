//! Shared application state.

use std::sync::Arc;

use cvtrack_core::storage::ResumeRepository;

/// Shared application state, cloned for each invocation.
///
/// Holds the repository handle established at process start. This is the
/// only state shared across invocations and it is never mutated.
#[derive(Clone)]
pub struct AppState {
    pub resumes: Arc<dyn ResumeRepository>,
}

impl AppState {
    pub fn new(resumes: Arc<dyn ResumeRepository>) -> Self {
        Self { resumes }
    }
}
