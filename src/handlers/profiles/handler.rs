//! Profile handler implementations

use axum::{extract::State, Json};
use chrono::Utc;

use crate::{
    error::{AppError, AppResult},
    services::ProfileService,
    state::AppState,
    utils::non_blank,
};

use super::{
    request::UsernameRequest,
    response::{SyncResponse, VerifyProfileResponse},
};

/// Fetch a student's recent HackerRank activity
pub async fn sync(
    State(state): State<AppState>,
    Json(payload): Json<UsernameRequest>,
) -> AppResult<Json<SyncResponse>> {
    let username = required_username(&payload)?;

    let submissions =
        ProfileService::sync_recent_challenges(state.feed(), &state.config().hackerrank, username)
            .await?;

    Ok(Json(SyncResponse {
        success: true,
        last_synced: Utc::now(),
        submissions,
    }))
}

/// Confirm a HackerRank username refers to a public profile
pub async fn verify_profile(
    State(state): State<AppState>,
    Json(payload): Json<UsernameRequest>,
) -> AppResult<Json<VerifyProfileResponse>> {
    let username = required_username(&payload)?;

    ProfileService::verify_profile(state.feed(), username).await?;

    Ok(Json(VerifyProfileResponse {
        verified: true,
        username: username.to_string(),
    }))
}

fn required_username(payload: &UsernameRequest) -> AppResult<&str> {
    non_blank(payload.username.as_deref())
        .ok_or_else(|| AppError::Validation("Username is required".to_string()))
}
