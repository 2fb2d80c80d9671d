//! Submission link verification handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{routing::post, Router};

use crate::state::AppState;

/// Verification routes
pub fn routes() -> Router<AppState> {
    Router::new().route("/verify-submission", post(handler::verify_submission))
}
