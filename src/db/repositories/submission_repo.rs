//! Submission repository

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::{Submission, SubmissionDraft},
};

/// Repository for submission database operations
pub struct SubmissionRepository;

impl SubmissionRepository {
    /// Create a new submission
    ///
    /// Fails with `DuplicateSubmissionUrl` when another submission already
    /// holds the same URL hash.
    pub async fn create(pool: &PgPool, draft: &SubmissionDraft) -> AppResult<Submission> {
        let submission = sqlx::query_as::<_, Submission>(
            r#"
            INSERT INTO submissions (
                user_id, problem_id, lab_id, submission_url, submission_url_hash,
                status, code, proof_file_id, verification_method, verified_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING *
            "#,
        )
        .bind(draft.user_id)
        .bind(draft.problem_id)
        .bind(draft.lab_id)
        .bind(&draft.submission_url)
        .bind(&draft.submission_url_hash)
        .bind(draft.status.as_str())
        .bind(&draft.code)
        .bind(&draft.proof_file_id)
        .bind(draft.verification_method.map(|m| m.as_str()))
        .bind(draft.verified_at)
        .fetch_one(pool)
        .await?;

        Ok(submission)
    }

    /// Find the submission a user made for a problem
    pub async fn find_by_user_and_problem(
        pool: &PgPool,
        user_id: &Uuid,
        problem_id: &Uuid,
    ) -> AppResult<Option<Submission>> {
        let submission = sqlx::query_as::<_, Submission>(
            r#"SELECT * FROM submissions WHERE user_id = $1 AND problem_id = $2 LIMIT 1"#,
        )
        .bind(user_id)
        .bind(problem_id)
        .fetch_optional(pool)
        .await?;

        Ok(submission)
    }

    /// Overwrite an existing submission in place
    pub async fn update(pool: &PgPool, id: &Uuid, draft: &SubmissionDraft) -> AppResult<Submission> {
        let submission = sqlx::query_as::<_, Submission>(
            r#"
            UPDATE submissions
            SET
                lab_id = $2,
                submission_url = $3,
                submission_url_hash = $4,
                status = $5,
                code = $6,
                proof_file_id = $7,
                verification_method = $8,
                verified_at = $9,
                submitted_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(draft.lab_id)
        .bind(&draft.submission_url)
        .bind(&draft.submission_url_hash)
        .bind(draft.status.as_str())
        .bind(&draft.code)
        .bind(&draft.proof_file_id)
        .bind(draft.verification_method.map(|m| m.as_str()))
        .bind(draft.verified_at)
        .fetch_one(pool)
        .await?;

        Ok(submission)
    }
}
