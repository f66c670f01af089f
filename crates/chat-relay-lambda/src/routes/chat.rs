use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderName, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Extension;
use lambda_http::Context;
use lambda_http::request::RequestContext;

use chat_relay_core::error::CoreError;
use chat_relay_core::response::HandlerResult;

use crate::error::RelayError;
use crate::event::InvocationEvent;
use crate::handler::ChatRelay;
use crate::middleware::auth::claims_from_request_context;
use crate::state::AppState;

/// Relay a chat turn.
///
/// A body that is not UTF-8 is rejected as malformed. Outside Lambda (no
/// invocation context) the function ARN is empty and the default region
/// applies.
pub async fn chat(
    State(state): State<AppState>,
    lambda_ctx: Option<Extension<Context>>,
    request_ctx: Option<Extension<RequestContext>>,
    body: Bytes,
) -> Response {
    let body = match String::from_utf8(body.to_vec()) {
        Ok(body) => body,
        Err(e) => return into_response(ChatRelay::reject(RelayError::from(CoreError::from(e)))),
    };

    let mut event = InvocationEvent::new(body);
    if let Some(claims) = request_ctx
        .as_ref()
        .and_then(|Extension(ctx)| claims_from_request_context(ctx))
    {
        event = event.with_claims(claims);
    }

    let function_arn = lambda_ctx
        .as_ref()
        .map(|Extension(ctx)| ctx.invoked_function_arn.as_str())
        .unwrap_or_default();

    let result = state.relay.handle(event, function_arn).await;
    into_response(result)
}

/// Turn a handler result into an HTTP response, headers and body verbatim.
pub fn into_response(result: HandlerResult) -> Response {
    let status =
        StatusCode::from_u16(result.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    let mut response = (status, result.body).into_response();

    for (name, value) in &result.headers {
        match (
            HeaderName::from_bytes(name.as_bytes()),
            HeaderValue::from_str(value),
        ) {
            (Ok(name), Ok(value)) => {
                response.headers_mut().insert(name, value);
            }
            _ => tracing::warn!(header = %name, "dropping invalid response header"),
        }
    }

    response
}
