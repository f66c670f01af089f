use lambda_http::request::RequestContext;

use crate::event::AuthorizerClaims;

/// Read identity claims placed on the request by an API Gateway authorizer.
///
/// The token was already verified upstream; nothing here is enforced.
/// REST APIs (v1) expose Cognito user pool claims under
/// `authorizer.claims`, HTTP APIs (v2) under `authorizer.jwt.claims`.
pub fn claims_from_request_context(ctx: &RequestContext) -> Option<AuthorizerClaims> {
    match ctx {
        RequestContext::ApiGatewayV1(ctx) => ctx
            .authorizer
            .fields
            .get("claims")
            .and_then(|claims| serde_json::from_value(claims.clone()).ok()),
        RequestContext::ApiGatewayV2(ctx) => {
            let jwt = ctx.authorizer.as_ref()?.jwt.as_ref()?;
            Some(AuthorizerClaims {
                email: jwt.claims.get("email").cloned(),
                username: jwt
                    .claims
                    .get("cognito:username")
                    .or_else(|| jwt.claims.get("username"))
                    .cloned(),
            })
        }
        _ => None,
    }
}
