//! The subset of the API Gateway proxy event the relay reads.

use serde::{Deserialize, Serialize};

/// One inbound invocation: the raw body plus optional authorizer claims.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvocationEvent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_context: Option<EventRequestContext>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRequestContext {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authorizer: Option<Authorizer>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Authorizer {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub claims: Option<AuthorizerClaims>,
}

/// Claims from an already-verified Cognito token. Used for logging only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorizerClaims {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(
        default,
        rename = "cognito:username",
        skip_serializing_if = "Option::is_none"
    )]
    pub username: Option<String>,
}

impl AuthorizerClaims {
    /// Email if non-empty, else the Cognito username.
    pub fn identity(&self) -> Option<&str> {
        self.email
            .as_deref()
            .filter(|e| !e.is_empty())
            .or(self.username.as_deref().filter(|u| !u.is_empty()))
    }
}

impl InvocationEvent {
    pub fn new(body: impl Into<String>) -> Self {
        Self {
            body: Some(body.into()),
            request_context: None,
        }
    }

    pub fn with_claims(mut self, claims: AuthorizerClaims) -> Self {
        self.request_context = Some(EventRequestContext {
            authorizer: Some(Authorizer {
                claims: Some(claims),
            }),
        });
        self
    }

    pub fn claims(&self) -> Option<&AuthorizerClaims> {
        self.request_context
            .as_ref()?
            .authorizer
            .as_ref()?
            .claims
            .as_ref()
    }
}
