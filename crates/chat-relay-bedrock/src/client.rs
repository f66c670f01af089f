use reqwest::StatusCode;
use reqwest::header::CONTENT_TYPE;
use serde_json::Value;
use tracing::{info, warn};

use crate::error::BedrockError;
use crate::wire::{InferenceRequest, InferenceResponse};

/// HTTP client for the Bedrock runtime `InvokeModel` API.
///
/// Cheap to clone; the underlying connection pool is shared. One request per
/// call, no retries and no timeout beyond the transport defaults.
#[derive(Debug, Clone)]
pub struct BedrockClient {
    http: reqwest::Client,
    bearer_token: Option<String>,
}

impl BedrockClient {
    /// Build a client. `bearer_token` is a Bedrock API key sent as
    /// `Authorization: Bearer <token>` when present.
    pub fn new(bearer_token: Option<String>) -> Result<Self, BedrockError> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| BedrockError::Config(e.to_string()))?;
        Ok(Self { http, bearer_token })
    }

    /// POST `request` to `invoke_url` and decode the reply.
    ///
    /// A decoded reply may still lack content; see
    /// [`InferenceResponse::reply_text`].
    pub async fn invoke(
        &self,
        invoke_url: &str,
        request: &InferenceRequest,
    ) -> Result<InferenceResponse, BedrockError> {
        let payload = serde_json::to_string(request)?;

        info!(invoke_url, payload = %payload, "calling Bedrock invoke API");

        let mut builder = self
            .http
            .post(invoke_url)
            .header(CONTENT_TYPE, "application/json")
            .body(payload);
        if let Some(token) = &self.bearer_token {
            builder = builder.bearer_auth(token);
        }

        let response = builder.send().await.map_err(|e| {
            warn!(error = %e, "transport error calling Bedrock");
            BedrockError::Transport(e.to_string())
        })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| BedrockError::Unexpected(e.to_string()))?;

        if !status.is_success() {
            warn!(status = status.as_u16(), body = %body, "HTTP error calling Bedrock");
            return Err(BedrockError::Http {
                status: status.as_u16(),
                message: error_message(status, &body),
            });
        }

        let parsed: InferenceResponse =
            serde_json::from_str(&body).map_err(|e| BedrockError::Unexpected(e.to_string()))?;

        info!(
            response = %body,
            stop_reason = parsed.stop_reason.as_deref().unwrap_or(""),
            input_tokens = parsed.usage.map(|u| u.input_tokens),
            output_tokens = parsed.usage.map(|u| u.output_tokens),
            total_tokens = parsed.usage.map(|u| u.total()),
            "Bedrock response"
        );

        Ok(parsed)
    }
}

/// Best-effort human-readable message from an error body.
///
/// Tries `message`, then `Error.Message`, then the status line.
fn error_message(status: StatusCode, body: &str) -> String {
    let status_line = || {
        format!(
            "HTTP Error {}: {}",
            status.as_u16(),
            status.canonical_reason().unwrap_or("Unknown")
        )
    };

    let Ok(value) = serde_json::from_str::<Value>(body) else {
        return status_line();
    };

    value
        .get("message")
        .or_else(|| value.get("Error").and_then(|e| e.get("Message")))
        .map(json_text)
        .unwrap_or_else(status_line)
}

fn json_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
