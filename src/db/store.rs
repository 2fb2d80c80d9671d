//! Persistence seam for the submission flow
//!
//! Services depend on [`LabStore`] rather than on a pool directly, so the
//! verification and recording logic can run against an in-memory store in
//! tests.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use super::{
    repositories::{ProblemRepository, StudentRepository, SubmissionRepository},
    connection::ping as ping_pool,
};
use crate::{
    error::AppResult,
    models::{Problem, StudentProfile, Submission, SubmissionDraft},
};

/// Storage operations needed to verify and record submissions
///
/// Implementations must reject a write whose `submission_url_hash` belongs
/// to a different submission with `AppError::DuplicateSubmissionUrl`.
#[async_trait]
pub trait LabStore: Send + Sync {
    async fn find_problem(&self, id: &Uuid) -> AppResult<Option<Problem>>;

    async fn find_student(&self, user_id: &Uuid) -> AppResult<Option<StudentProfile>>;

    async fn find_submission(&self, user_id: &Uuid, problem_id: &Uuid) -> AppResult<Option<Submission>>;

    async fn insert_submission(&self, draft: &SubmissionDraft) -> AppResult<Submission>;

    async fn update_submission(&self, id: &Uuid, draft: &SubmissionDraft) -> AppResult<Submission>;

    /// Round-trip to the backing store
    async fn ping(&self) -> AppResult<()>;
}

/// PostgreSQL-backed [`LabStore`]
#[derive(Clone)]
pub struct PgLabStore {
    pool: PgPool,
}

impl PgLabStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LabStore for PgLabStore {
    async fn find_problem(&self, id: &Uuid) -> AppResult<Option<Problem>> {
        ProblemRepository::find_by_id(&self.pool, id).await
    }

    async fn find_student(&self, user_id: &Uuid) -> AppResult<Option<StudentProfile>> {
        StudentRepository::find_profile(&self.pool, user_id).await
    }

    async fn find_submission(&self, user_id: &Uuid, problem_id: &Uuid) -> AppResult<Option<Submission>> {
        SubmissionRepository::find_by_user_and_problem(&self.pool, user_id, problem_id).await
    }

    async fn insert_submission(&self, draft: &SubmissionDraft) -> AppResult<Submission> {
        SubmissionRepository::create(&self.pool, draft).await
    }

    async fn update_submission(&self, id: &Uuid, draft: &SubmissionDraft) -> AppResult<Submission> {
        SubmissionRepository::update(&self.pool, id, draft).await
    }

    async fn ping(&self) -> AppResult<()> {
        ping_pool(&self.pool).await?;
        Ok(())
    }
}
