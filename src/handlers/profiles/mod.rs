//! HackerRank profile handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{routing::post, Router};

use crate::state::AppState;

/// Profile routes, mounted under `/hackerrank`
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/sync", post(handler::sync))
        .route("/verify", post(handler::verify_profile))
}
