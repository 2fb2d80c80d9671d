//! Problem model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Problem database model
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Problem {
    pub id: Uuid,
    pub lab_id: Uuid,
    pub title: String,
    /// Reference URL on HackerRank; its slug is the problem's identity
    pub external_url: String,
    pub difficulty: String,
    pub points: i32,
    pub created_at: DateTime<Utc>,
}
