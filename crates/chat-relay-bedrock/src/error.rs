use thiserror::Error;

#[derive(Debug, Error)]
pub enum BedrockError {
    /// The endpoint answered with a non-2xx status.
    #[error("Bedrock API HTTP Error {status}: {message}")]
    Http { status: u16, message: String },

    /// The request never got an HTTP response (DNS, connect, TLS, reset).
    #[error("Bedrock API URL Error: {0}")]
    Transport(String),

    /// A 2xx body without content but with a top-level `message`.
    #[error("Bedrock response indicates error: {0}")]
    ErrorMessage(String),

    #[error("No valid response content from the model")]
    NoContent,

    #[error("response parsing failed: {0}")]
    ResponseParse(String),

    #[error("Unexpected error calling Bedrock API: {0}")]
    Unexpected(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("HTTP client config error: {0}")]
    Config(String),
}
