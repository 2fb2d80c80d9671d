//! Student profile repository

use sqlx::PgPool;
use uuid::Uuid;

use crate::{error::AppResult, models::StudentProfile};

/// Repository for reading the profile fields of user records
pub struct StudentRepository;

impl StudentRepository {
    /// Find the student profile for a user
    pub async fn find_profile(pool: &PgPool, user_id: &Uuid) -> AppResult<Option<StudentProfile>> {
        let profile = sqlx::query_as::<_, StudentProfile>(
            r#"SELECT id AS user_id, external_username FROM users WHERE id = $1"#,
        )
        .bind(user_id)
        .fetch_optional(pool)
        .await?;

        Ok(profile)
    }
}
