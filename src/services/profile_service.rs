//! HackerRank profile service
//!
//! Pass-through operations on a student's public HackerRank profile. Unlike
//! verification, these surface feed failures to the caller.

use serde_json::Value;

use crate::{
    config::HackerRankConfig,
    error::{AppError, AppResult},
    hackerrank::{ActivityFeed, FeedError, ResponseVersion},
    utils::validate_external_username,
};

/// Profile service for business logic
pub struct ProfileService;

impl ProfileService {
    /// Raw recent-challenge entries for a username
    pub async fn sync_recent_challenges(
        feed: &dyn ActivityFeed,
        config: &HackerRankConfig,
        username: &str,
    ) -> AppResult<Vec<Value>> {
        validate_external_username(username).map_err(|e| AppError::Validation(e.to_string()))?;

        let entries = feed
            .recent_challenges(username, config.recent_limit, ResponseVersion::V2)
            .await
            .map_err(|e| Self::unavailable(username, e, "Failed to sync submissions"))?;

        tracing::info!(username, count = entries.len(), "Synced HackerRank activity");
        Ok(entries)
    }

    /// Confirm that a public profile exists for a username
    pub async fn verify_profile(feed: &dyn ActivityFeed, username: &str) -> AppResult<()> {
        validate_external_username(username).map_err(|e| AppError::Validation(e.to_string()))?;

        let exists = feed
            .profile_exists(username)
            .await
            .map_err(|e| Self::unavailable(username, e, "Failed to verify HackerRank profile"))?;

        if exists {
            Ok(())
        } else {
            Err(AppError::NotFound("HackerRank user not found".to_string()))
        }
    }

    fn unavailable(username: &str, err: FeedError, message: &str) -> AppError {
        tracing::error!(username, error = %err, "{}", message);
        AppError::ExternalUnavailable(message.to_string())
    }
}
