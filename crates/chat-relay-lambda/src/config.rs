use std::env;
use std::fmt;

/// Model used when `MODEL_ID` is unset.
pub const DEFAULT_MODEL_ID: &str = "us.amazon.nova-lite-v1:0";

/// Process-wide relay configuration, read once at cold start.
#[derive(Clone)]
pub struct RelayConfig {
    /// Bedrock model or inference profile ID (`MODEL_ID`).
    pub model_id: String,
    /// Replaces the regional runtime host, e.g. a local mock
    /// (`BEDROCK_ENDPOINT_URL`).
    pub endpoint_url: Option<String>,
    /// Bedrock API key (`AWS_BEARER_TOKEN_BEDROCK`).
    pub bearer_token: Option<String>,
}

impl RelayConfig {
    pub fn new(model_id: impl Into<String>) -> Self {
        Self {
            model_id: model_id.into(),
            endpoint_url: None,
            bearer_token: None,
        }
    }

    pub fn with_endpoint_url(mut self, endpoint_url: impl Into<String>) -> Self {
        self.endpoint_url = Some(endpoint_url.into());
        self
    }

    pub fn with_bearer_token(mut self, bearer_token: impl Into<String>) -> Self {
        self.bearer_token = Some(bearer_token.into());
        self
    }

    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary variable source. Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            model_id: get("MODEL_ID").unwrap_or_else(|| DEFAULT_MODEL_ID.to_string()),
            endpoint_url: get("BEDROCK_ENDPOINT_URL"),
            bearer_token: get("AWS_BEARER_TOKEN_BEDROCK"),
        }
    }
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self::new(DEFAULT_MODEL_ID)
    }
}

impl fmt::Debug for RelayConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RelayConfig")
            .field("model_id", &self.model_id)
            .field("endpoint_url", &self.endpoint_url)
            .field("bearer_token", &self.bearer_token.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}
