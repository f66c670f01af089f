//! Bedrock messages wire format (Amazon Nova `InvokeModel` schema).
//!
//! Requests carry role-tagged text content blocks plus a fixed inference
//! configuration. Responses are decoded leniently: every level of the
//! `output.message.content` path is optional so a malformed reply surfaces
//! as a [`BedrockError`] instead of a decode failure.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use chat_relay_core::models::conversation::{ConversationMessage, Role};

use crate::error::BedrockError;

pub const MAX_TOKENS: u32 = 512;
pub const TEMPERATURE: f64 = 0.7;
pub const TOP_P: f64 = 0.9;

// ── Request ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InferenceRequest {
    pub messages: Vec<WireMessage>,
    pub inference_config: InferenceConfig,
}

impl InferenceRequest {
    /// Translate a conversation into the wire format.
    ///
    /// Messages whose role the model does not accept are left out of the
    /// payload; the conversation itself is not modified.
    pub fn from_conversation(conversation: &[ConversationMessage]) -> Self {
        Self {
            messages: conversation.iter().filter_map(WireMessage::from_message).collect(),
            inference_config: InferenceConfig::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WireMessage {
    pub role: WireRole,
    pub content: Vec<ContentBlock>,
}

impl WireMessage {
    fn from_message(message: &ConversationMessage) -> Option<Self> {
        let role = match message.role {
            Role::User => WireRole::User,
            Role::Assistant => WireRole::Assistant,
            Role::Other(_) => return None,
        };
        Some(Self {
            role,
            content: vec![ContentBlock {
                text: message.content.clone(),
            }],
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WireRole {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentBlock {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InferenceConfig {
    pub max_tokens: u32,
    pub stop_sequences: Vec<String>,
    pub temperature: f64,
    pub top_p: f64,
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            max_tokens: MAX_TOKENS,
            stop_sequences: Vec::new(),
            temperature: TEMPERATURE,
            top_p: TOP_P,
        }
    }
}

// ── Response ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InferenceResponse {
    #[serde(default)]
    pub output: Option<Output>,
    /// Present on error-shaped bodies, e.g. `{"message": "..."}`.
    /// `Some(Value::Null)` when the key is there with a null value.
    #[serde(default, deserialize_with = "present")]
    pub message: Option<Value>,
    #[serde(default)]
    pub stop_reason: Option<String>,
    #[serde(default)]
    pub usage: Option<Usage>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Output {
    #[serde(default)]
    pub message: Option<OutputMessage>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OutputMessage {
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub content: Option<Vec<ResponseBlock>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResponseBlock {
    #[serde(default)]
    pub text: Option<String>,
}

/// Token accounting reported by the model.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Usage {
    #[serde(default)]
    pub input_tokens: u64,
    #[serde(default)]
    pub output_tokens: u64,
    #[serde(default)]
    pub total_tokens: Option<u64>,
}

impl Usage {
    pub fn total(&self) -> u64 {
        self.total_tokens
            .unwrap_or(self.input_tokens + self.output_tokens)
    }
}

impl InferenceResponse {
    /// Text of the first content block of the output message.
    ///
    /// Only the first block is used, even when the model returns several.
    pub fn reply_text(&self) -> Result<&str, BedrockError> {
        let first = self
            .output
            .as_ref()
            .and_then(|o| o.message.as_ref())
            .and_then(|m| m.content.as_deref())
            .and_then(|blocks| blocks.first());

        match first {
            Some(block) => block.text.as_deref().ok_or_else(|| {
                BedrockError::ResponseParse("first content block has no text".to_string())
            }),
            None => match &self.message {
                Some(Value::String(message)) => Err(BedrockError::ErrorMessage(message.clone())),
                Some(other) => Err(BedrockError::ErrorMessage(other.to_string())),
                None => Err(BedrockError::NoContent),
            },
        }
    }
}

/// Deserialize a field that is known to be present, keeping JSON `null` as
/// `Some(Value::Null)` instead of collapsing it to `None`.
fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}
