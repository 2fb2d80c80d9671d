//! HTTP Request Handlers
//!
//! This module contains all HTTP request handlers organized by domain.

pub mod health;
pub mod profiles;
pub mod submissions;
pub mod verification;

use axum::{middleware, routing::post, Router};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    limit::RequestBodyLimitLayer,
    trace::TraceLayer,
};

use crate::{
    constants::{API_PREFIX, MAX_REQUEST_BODY_BYTES},
    middleware::logging_middleware,
    state::AppState,
};

/// Create all API routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .merge(verification::routes())
        .route("/sync", post(profiles::sync))
        .nest("/hackerrank", profiles::routes())
        .nest("/submissions", submissions::routes())
}

/// Build the application with its middleware stack
pub fn app(state: AppState) -> Router {
    Router::new()
        .nest(API_PREFIX, routes())
        .layer(RequestBodyLimitLayer::new(MAX_REQUEST_BODY_BYTES))
        .layer(middleware::from_fn(logging_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
