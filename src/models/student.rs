//! Student profile model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::utils::non_blank;

/// The slice of a user record that drives profile cross-checks
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct StudentProfile {
    pub user_id: Uuid,
    pub external_username: Option<String>,
}

impl StudentProfile {
    /// HackerRank username on file, if any
    pub fn username(&self) -> Option<&str> {
        non_blank(self.external_username.as_deref())
    }
}
