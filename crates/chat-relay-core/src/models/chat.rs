use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::models::conversation::ConversationMessage;

/// Body of an inbound chat request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    pub message: String,
    #[serde(default)]
    pub conversation_history: Vec<ConversationMessage>,
}

impl ChatRequest {
    /// Parse the raw request body.
    ///
    /// Fails when the body is absent, is not JSON, or has no `message`.
    pub fn from_body(body: Option<&str>) -> Result<Self, CoreError> {
        let body = body.ok_or_else(|| CoreError::MissingField("body".to_string()))?;
        Ok(serde_json::from_str(body)?)
    }
}

/// Successful reply body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatReply {
    pub success: bool,
    pub response: String,
    pub conversation_history: Vec<ConversationMessage>,
}

impl ChatReply {
    pub fn new(response: String, conversation_history: Vec<ConversationMessage>) -> Self {
        Self {
            success: true,
            response,
            conversation_history,
        }
    }
}

/// Failure body. Every failure kind collapses into this one shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatFailure {
    pub success: bool,
    pub error: String,
}

impl ChatFailure {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
        }
    }
}
