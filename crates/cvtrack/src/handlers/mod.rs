//! Request routing and the three resume operations.

mod error;
mod resumes;

pub use error::RouteError;

use crate::{
    event::{GatewayEvent, GatewayResponse},
    state::AppState,
};

/// Routes one gateway event to its operation and returns the response.
///
/// Paths and methods are matched exactly: no patterns, no trailing-slash
/// normalization. Anything unmatched is a 404.
pub async fn handle(state: &AppState, event: GatewayEvent) -> GatewayResponse {
    // Log the raw incoming event before routing.
    match serde_json::to_string(&event) {
        Ok(raw) => tracing::info!(event = %raw, "received event"),
        Err(err) => tracing::warn!(%err, "received event that failed to re-serialize"),
    }

    match (event.path.as_str(), event.http_method.as_str()) {
        ("/resume/list", "GET") => resumes::list(state)
            .await
            .unwrap_or_else(|err| err.into_response("Error Fetching Resumes")),
        ("/resume", "POST") => resumes::create(state, event.body.as_deref())
            .await
            .unwrap_or_else(|err| err.into_response("Error adding resume")),
        ("/resume/person", "GET") => {
            // The email parameter is checked before dispatch; an absent or
            // empty value never reaches the storage layer.
            let result = match event.query_param("email") {
                Some(email) => resumes::fetch_by_email(state, email).await,
                None => Err(RouteError::MissingParameter("email")),
            };
            result.unwrap_or_else(|err| err.into_response("Error Fetching Resume"))
        }
        _ => RouteError::RouteNotFound.into_response("Error routing request"),
    }
}
