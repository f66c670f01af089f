//! HTTP-shaped handler result in the API Gateway proxy integration format.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::chat::{ChatFailure, ChatReply};

pub const ALLOW_ORIGIN: &str = "*";
pub const ALLOW_HEADERS: &str =
    "Content-Type,X-Amz-Date,Authorization,X-Api-Key,X-Amz-Security-Token";
pub const ALLOW_METHODS: &str = "OPTIONS,POST";

/// Last-resort body if a reply cannot be serialized.
const SERIALIZATION_FAILURE_BODY: &str =
    r#"{"success":false,"error":"failed to serialize response body"}"#;

/// The only externally visible artifact of an invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HandlerResult {
    pub status_code: u16,
    pub headers: BTreeMap<String, String>,
    pub body: String,
}

impl HandlerResult {
    pub fn success(reply: &ChatReply) -> Self {
        Self::json(200, reply)
    }

    /// A 500 carrying `message` in the error envelope.
    pub fn failure(message: impl Into<String>) -> Self {
        Self::json(500, &ChatFailure::new(message))
    }

    fn json<T: Serialize>(status_code: u16, value: &T) -> Self {
        let body = serde_json::to_string(value)
            .unwrap_or_else(|_| SERIALIZATION_FAILURE_BODY.to_string());
        Self {
            status_code,
            headers: response_headers(),
            body,
        }
    }
}

/// Headers attached to every response, success or failure, so the browser
/// can always read the body.
pub fn response_headers() -> BTreeMap<String, String> {
    [
        ("Content-Type", "application/json"),
        ("Access-Control-Allow-Origin", ALLOW_ORIGIN),
        ("Access-Control-Allow-Headers", ALLOW_HEADERS),
        ("Access-Control-Allow-Methods", ALLOW_METHODS),
    ]
    .into_iter()
    .map(|(name, value)| (name.to_string(), value.to_string()))
    .collect()
}
