//! Gateway event and response types.
//!
//! The invoking gateway delivers an HTTP-shaped JSON event and expects a
//! `{statusCode, body}` object back. These are the only two wire types of
//! the system.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Inbound HTTP-shaped event from the invoking gateway.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GatewayEvent {
    #[serde(default)]
    pub path: String,
    #[serde(default, rename = "httpMethod")]
    pub http_method: String,
    #[serde(default, rename = "queryStringParameters")]
    pub query_string_parameters: Option<HashMap<String, String>>,
    #[serde(default)]
    pub body: Option<String>,
}

impl GatewayEvent {
    /// Returns the query parameter `name` if present and non-empty.
    pub fn query_param(&self, name: &str) -> Option<&str> {
        self.query_string_parameters
            .as_ref()
            .and_then(|params| params.get(name))
            .map(String::as_str)
            .filter(|value| !value.is_empty())
    }
}

/// Outbound response: status code plus a string body, JSON-encoded when it
/// represents structured data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GatewayResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub body: String,
}

impl GatewayResponse {
    /// Response with a raw (plain-text) body.
    pub fn new(status_code: u16, body: impl Into<String>) -> Self {
        Self {
            status_code,
            body: body.into(),
        }
    }

    /// Response with a JSON-encoded body.
    pub fn json<T: Serialize>(status_code: u16, value: &T) -> Self {
        match serde_json::to_string(value) {
            Ok(body) => Self { status_code, body },
            // Unreachable for the types serialized here, but the broad
            // error-to-500 contract applies to serialization too.
            Err(err) => Self {
                status_code: 500,
                body: format!("Error encoding response: {err}"),
            },
        }
    }
}
