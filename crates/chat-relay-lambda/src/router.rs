use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderName, Method};
use axum::middleware as axum_mw;
use axum::routing::post;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};

use crate::middleware;
use crate::routes;
use crate::state::AppState;

/// Build the relay router.
///
/// The relay sits behind a single API Gateway resource whose path varies
/// by deployment, so any POST path reaches the chat route. The access log
/// is the outermost layer and also sees CORS preflights.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::OPTIONS, Method::POST])
        .allow_headers([
            CONTENT_TYPE,
            HeaderName::from_static("x-amz-date"),
            AUTHORIZATION,
            HeaderName::from_static("x-api-key"),
            HeaderName::from_static("x-amz-security-token"),
        ]);

    Router::new()
        .route("/", post(routes::chat::chat))
        .route("/{*path}", post(routes::chat::chat))
        .layer(cors)
        .layer(axum_mw::from_fn(middleware::audit::access_log))
        .with_state(state)
}
