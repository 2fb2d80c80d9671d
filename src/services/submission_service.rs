//! Submission service
//!
//! Records verification outcomes. A student has at most one submission per
//! problem, overwritten on resubmission, and a submission link (compared by
//! its normalized hash) can back only one submission across all students.

use chrono::Utc;
use uuid::Uuid;

use crate::{
    config::HackerRankConfig,
    db::LabStore,
    error::{AppError, AppResult},
    hackerrank::ActivityFeed,
    handlers::submissions::request::CreateSubmissionRequest,
    models::{Decision, Submission, SubmissionDraft},
    utils::submission_url_hash,
};

use super::verification_service::{VerificationRequest, VerificationService};

/// Submission fields supplied by the student
#[derive(Debug, Clone)]
pub struct SubmissionPayload {
    pub user_id: Uuid,
    pub problem_id: Uuid,
    pub lab_id: Uuid,
    pub submission_url: String,
    pub code: Option<String>,
    pub proof_file_id: Option<String>,
}

/// Result of a verify-and-record attempt
#[derive(Debug, Clone)]
pub struct SubmitOutcome {
    pub decision: Decision,
    /// `None` when the decision was a rejection
    pub submission: Option<Submission>,
}

/// Submission service for business logic
pub struct SubmissionService;

impl SubmissionService {
    /// Verify a submission link for a student's problem and record the outcome
    pub async fn submit(
        store: &dyn LabStore,
        feed: &dyn ActivityFeed,
        config: &HackerRankConfig,
        payload: CreateSubmissionRequest,
    ) -> AppResult<SubmitOutcome> {
        let problem = store
            .find_problem(&payload.problem_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Problem not found".to_string()))?;

        let student = store
            .find_student(&payload.user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Student not found".to_string()))?;

        let decision = VerificationService::verify(
            feed,
            config,
            VerificationRequest {
                submission_url: &payload.submission_url,
                problem_url: Some(&problem.external_url),
                external_username: student.username(),
            },
        )
        .await?;

        if !decision.accepted() {
            return Ok(SubmitOutcome {
                decision,
                submission: None,
            });
        }

        let submission = Self::record(
            store,
            &decision,
            SubmissionPayload {
                user_id: payload.user_id,
                problem_id: problem.id,
                lab_id: problem.lab_id,
                submission_url: payload.submission_url,
                code: payload.code,
                proof_file_id: payload.proof_file_id,
            },
        )
        .await?;

        Ok(SubmitOutcome {
            decision,
            submission: Some(submission),
        })
    }

    /// Persist an accepted decision, updating the student's existing
    /// submission for the problem if there is one
    pub async fn record(
        store: &dyn LabStore,
        decision: &Decision,
        payload: SubmissionPayload,
    ) -> AppResult<Submission> {
        let status = decision
            .submission_status()
            .ok_or_else(|| AppError::SubmissionRejected(decision.reason.clone()))?;

        let submission_url = payload.submission_url.trim().to_string();
        let draft = SubmissionDraft {
            user_id: payload.user_id,
            problem_id: payload.problem_id,
            lab_id: payload.lab_id,
            submission_url_hash: submission_url_hash(&submission_url),
            submission_url,
            status,
            code: payload.code,
            proof_file_id: payload.proof_file_id,
            verification_method: decision.method,
            verified_at: decision.verified().then(Utc::now),
        };

        let existing = store
            .find_submission(&draft.user_id, &draft.problem_id)
            .await?;

        let result = match &existing {
            Some(existing) => store.update_submission(&existing.id, &draft).await,
            None => store.insert_submission(&draft).await,
        };

        match &result {
            Ok(submission) => tracing::info!(
                submission_id = %submission.id,
                user_id = %draft.user_id,
                problem_id = %draft.problem_id,
                status = %status,
                updated = existing.is_some(),
                "Submission recorded"
            ),
            Err(AppError::DuplicateSubmissionUrl) => tracing::warn!(
                user_id = %draft.user_id,
                problem_id = %draft.problem_id,
                url_hash = %draft.submission_url_hash,
                "Submission URL already claimed by another submission"
            ),
            Err(_) => {}
        }

        result
    }
}
