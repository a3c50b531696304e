use cvtrack_core::storage::RepositoryError;
use thiserror::Error;

use crate::event::GatewayResponse;

/// Errors surfaced by the route handlers.
///
/// Client input errors, not-found conditions and backend failures are
/// distinguished here and mapped to status codes at the boundary. A
/// missing create field maps to 404, not 400; callers depend on that
/// status, so changing it would alter observable behavior.
#[derive(Debug, Error)]
pub enum RouteError {
    #[error("missing required field {0}")]
    MissingField(&'static str),
    #[error("missing parameter {0}")]
    MissingParameter(&'static str),
    #[error("no route matches the request")]
    RouteNotFound,
    #[error("resume not found")]
    ResumeNotFound,
    #[error("request body is missing")]
    MissingBody,
    #[error("invalid request body: {0}")]
    BadBody(String),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl RouteError {
    /// Maps the error to a gateway response.
    ///
    /// `context` prefixes the message for backend/unexpected failures,
    /// which all collapse to 500 with the stringified error embedded.
    /// The missing-field message is plain text; everything else is a
    /// JSON-encoded string.
    pub fn into_response(self, context: &str) -> GatewayResponse {
        match self {
            Self::MissingField(field) => {
                GatewayResponse::new(404, format!("Missing required Field, {field}"))
            }
            Self::MissingParameter(name) => GatewayResponse::json(
                400,
                &format!("Bad Request: Missing parameter \"{name}\""),
            ),
            Self::RouteNotFound => GatewayResponse::json(404, &"Not Found"),
            Self::ResumeNotFound => GatewayResponse::json(404, &"Resume not found"),
            err => GatewayResponse::json(500, &format!("{context}: {err}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_field_is_plain_text_404() {
        let response = RouteError::MissingField("CV_used").into_response("Error adding resume");
        assert_eq!(response.status_code, 404);
        assert_eq!(response.body, "Missing required Field, CV_used");
    }

    #[test]
    fn test_missing_parameter_is_400() {
        let response =
            RouteError::MissingParameter("email").into_response("Error Fetching Resume");
        assert_eq!(response.status_code, 400);
        assert_eq!(response.body, "\"Bad Request: Missing parameter \\\"email\\\"\"");
    }

    #[test]
    fn test_backend_errors_collapse_to_500_with_context() {
        let err = RouteError::from(RepositoryError::QueryFailed("Table not found".into()));
        let response = err.into_response("Error Fetching Resumes");
        assert_eq!(response.status_code, 500);
        assert_eq!(
            response.body,
            "\"Error Fetching Resumes: Query failed: Table not found\""
        );
    }
}
