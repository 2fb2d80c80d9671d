//! Submission handler implementations

use axum::{extract::State, http::StatusCode, Json};
use validator::Validate;

use crate::{error::AppResult, services::SubmissionService, state::AppState};

use super::{
    request::CreateSubmissionRequest,
    response::{CreateSubmissionResponse, SubmissionResponse},
};

/// Verify a submission link and record the outcome for the student
pub async fn create_submission(
    State(state): State<AppState>,
    Json(payload): Json<CreateSubmissionRequest>,
) -> AppResult<(StatusCode, Json<CreateSubmissionResponse>)> {
    payload.validate()?;

    let outcome = SubmissionService::submit(
        state.store(),
        state.feed(),
        &state.config().hackerrank,
        payload,
    )
    .await?;

    let status = if outcome.submission.is_some() {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };

    Ok((
        status,
        Json(CreateSubmissionResponse {
            success: outcome.decision.accepted(),
            verification: outcome.decision.into(),
            submission: outcome.submission.map(SubmissionResponse::from),
        }),
    ))
}
