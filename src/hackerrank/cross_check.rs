//! Profile cross-check
//!
//! Looks for the expected challenge in a user's recent public activity.
//! The check is advisory: failures degrade to [`ProfileCheck::Unavailable`]
//! and never reach the caller as errors. Any matching entry counts, whether
//! or not HackerRank recorded it as an accepted solution.

use serde_json::Value;

use super::client::{ActivityFeed, RecentChallenge, ResponseVersion};
use crate::utils::validate_external_username;

/// Result of a profile cross-check
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileCheck {
    /// The slug appears in recent activity
    Confirmed(RecentChallenge),
    /// The feed answered but the slug is absent
    NotFound,
    /// The username on file can never match a HackerRank profile
    InvalidUsername,
    /// The feed could not be read
    Unavailable,
}

impl ProfileCheck {
    pub fn is_verified(&self) -> bool {
        matches!(self, Self::Confirmed(_))
    }
}

/// Check whether `expected_slug` appears in the last `limit` activity entries
pub async fn cross_check(
    feed: &dyn ActivityFeed,
    username: &str,
    expected_slug: &str,
    limit: u32,
) -> ProfileCheck {
    if let Err(reason) = validate_external_username(username) {
        tracing::info!(username, reason, "Skipping profile check for invalid username");
        return ProfileCheck::InvalidUsername;
    }

    let entries = match feed
        .recent_challenges(username, limit, ResponseVersion::Legacy)
        .await
    {
        Ok(entries) => entries,
        Err(e) => {
            tracing::warn!(username, slug = expected_slug, error = %e, "Profile verification failed");
            return ProfileCheck::Unavailable;
        }
    };

    match find_challenge(entries, expected_slug) {
        Some(entry) => {
            tracing::info!(username, slug = expected_slug, "Challenge found in recent activity");
            ProfileCheck::Confirmed(entry)
        }
        None => {
            tracing::debug!(username, slug = expected_slug, "Challenge not in recent activity");
            ProfileCheck::NotFound
        }
    }
}

/// First feed entry naming `slug`; entries of unexpected shape are skipped
pub fn find_challenge(entries: Vec<Value>, slug: &str) -> Option<RecentChallenge> {
    entries
        .into_iter()
        .filter_map(|entry| serde_json::from_value::<RecentChallenge>(entry).ok())
        .find(|challenge| challenge.matches_slug(slug))
}
