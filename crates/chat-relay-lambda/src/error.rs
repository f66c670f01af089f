use std::fmt;

use thiserror::Error;

use chat_relay_bedrock::error::BedrockError;
use chat_relay_core::error::CoreError;
use chat_relay_core::response::HandlerResult;

/// Everything that can fail inside one relay invocation.
///
/// Callers only ever see the message: every kind becomes a 500.
#[derive(Debug, Error)]
pub enum RelayError {
    #[error("malformed request: {0}")]
    MalformedRequest(#[from] CoreError),

    #[error(transparent)]
    Provider(#[from] BedrockError),
}

/// Coarse failure classification, used in logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    MalformedRequest,
    ProviderHttp,
    ProviderTransport,
    ProviderContent,
    Unexpected,
}

impl RelayError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            RelayError::MalformedRequest(_) => ErrorKind::MalformedRequest,
            RelayError::Provider(e) => match e {
                BedrockError::Http { .. } => ErrorKind::ProviderHttp,
                BedrockError::Transport(_) => ErrorKind::ProviderTransport,
                BedrockError::ErrorMessage(_)
                | BedrockError::NoContent
                | BedrockError::ResponseParse(_) => ErrorKind::ProviderContent,
                BedrockError::Unexpected(_)
                | BedrockError::Serialization(_)
                | BedrockError::Config(_) => ErrorKind::Unexpected,
            },
        }
    }
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::MalformedRequest => "malformed_request",
            ErrorKind::ProviderHttp => "provider_http",
            ErrorKind::ProviderTransport => "provider_transport",
            ErrorKind::ProviderContent => "provider_content",
            ErrorKind::Unexpected => "unexpected",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<RelayError> for HandlerResult {
    fn from(e: RelayError) -> Self {
        HandlerResult::failure(e.to_string())
    }
}
