//! HackerRank REST client

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde_json::Value;
use url::Url;

use crate::{config::HackerRankConfig, utils::validate_external_username};

/// Errors talking to HackerRank
#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    #[error("Invalid HackerRank username: {0}")]
    InvalidUsername(&'static str),

    #[error("Invalid HackerRank base URL: {0}")]
    InvalidBaseUrl(String),

    #[error("Request to HackerRank failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("HackerRank responded with status {0}")]
    Status(u16),
}

/// Shape requested from the recent challenges endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseVersion {
    /// Entries carry `ch_slug` and `url`; used for verification
    Legacy,
    /// `response_version=v2`; passed through untouched by sync
    V2,
}

/// Source of a user's public recent-challenge activity
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ActivityFeed: Send + Sync {
    /// Raw entries of the user's recent challenge activity, at most `limit`
    async fn recent_challenges(
        &self,
        username: &str,
        limit: u32,
        version: ResponseVersion,
    ) -> Result<Vec<Value>, FeedError>;

    /// Whether a public profile page exists for `username`
    async fn profile_exists(&self, username: &str) -> Result<bool, FeedError>;
}

/// One entry of the recent challenges feed
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RecentChallenge {
    pub ch_slug: Option<String>,
    pub url: Option<String>,
    pub name: Option<String>,
}

impl RecentChallenge {
    pub fn matches_slug(&self, slug: &str) -> bool {
        self.ch_slug.as_deref() == Some(slug)
            || self.url.as_deref() == Some(format!("/challenges/{slug}").as_str())
    }
}

#[derive(Debug, Deserialize)]
struct RecentChallengesEnvelope {
    models: Option<Vec<Value>>,
}

/// reqwest-backed [`ActivityFeed`]
#[derive(Debug, Clone)]
pub struct HackerRankClient {
    client: Client,
    base_url: Url,
}

impl HackerRankClient {
    pub fn new(config: &HackerRankConfig) -> Result<Self, FeedError> {
        let base_url = Url::parse(&config.base_url)
            .map_err(|e| FeedError::InvalidBaseUrl(e.to_string()))?;
        if base_url.cannot_be_a_base() {
            return Err(FeedError::InvalidBaseUrl(config.base_url.clone()));
        }

        let client = Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;

        Ok(Self { client, base_url })
    }

    /// `{base}/rest/hackers/{username}/recent_challenges?limit=N`
    pub fn recent_challenges_url(
        &self,
        username: &str,
        limit: u32,
        version: ResponseVersion,
    ) -> Result<Url, FeedError> {
        validate_external_username(username).map_err(FeedError::InvalidUsername)?;

        let mut url = self.endpoint(&["rest", "hackers", username, "recent_challenges"]);
        url.query_pairs_mut().append_pair("limit", &limit.to_string());
        if version == ResponseVersion::V2 {
            url.query_pairs_mut().append_pair("response_version", "v2");
        }

        Ok(url)
    }

    /// `{base}/{username}`
    pub fn profile_url(&self, username: &str) -> Result<Url, FeedError> {
        validate_external_username(username).map_err(FeedError::InvalidUsername)?;
        Ok(self.endpoint(&[username]))
    }

    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        // cannot-be-a-base URLs are rejected in `new`
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }
}

#[async_trait]
impl ActivityFeed for HackerRankClient {
    async fn recent_challenges(
        &self,
        username: &str,
        limit: u32,
        version: ResponseVersion,
    ) -> Result<Vec<Value>, FeedError> {
        let url = self.recent_challenges_url(username, limit, version)?;
        tracing::debug!(%url, "Fetching HackerRank recent challenges");

        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            tracing::warn!(
                username,
                status = status.as_u16(),
                "HackerRank activity feed returned an error status"
            );
            return Err(FeedError::Status(status.as_u16()));
        }

        let envelope: RecentChallengesEnvelope = response.json().await?;
        Ok(envelope.models.unwrap_or_default())
    }

    async fn profile_exists(&self, username: &str) -> Result<bool, FeedError> {
        let url = self.profile_url(username)?;
        let response = self.client.head(url).send().await?;

        match response.status() {
            status if status.is_success() => Ok(true),
            StatusCode::NOT_FOUND => Ok(false),
            status => Err(FeedError::Status(status.as_u16())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use axum::{
        extract::{Path, Query},
        http::StatusCode as AxumStatus,
        routing::get,
        Json, Router,
    };
    use serde_json::json;
    use std::collections::HashMap;

    fn client_for(base_url: &str) -> HackerRankClient {
        HackerRankClient::new(&HackerRankConfig {
            base_url: base_url.to_string(),
            ..HackerRankConfig::default()
        })
        .unwrap()
    }

    /// Serve a fake HackerRank on an ephemeral port
    async fn spawn_fake_hackerrank() -> String {
        async fn recent(
            Path(username): Path<String>,
            Query(params): Query<HashMap<String, String>>,
        ) -> Result<Json<Value>, AxumStatus> {
            match username.as_str() {
                "alice" => Ok(Json(json!({
                    "models": [
                        { "ch_slug": "two-sum", "url": "/challenges/two-sum", "name": "Two Sum" },
                        { "ch_slug": "limit", "name": params.get("limit").cloned().unwrap_or_default() },
                        { "ch_slug": "version", "name": params.get("response_version").cloned().unwrap_or_default() }
                    ]
                }))),
                "quiet" => Ok(Json(json!({ "models": null }))),
                _ => Err(AxumStatus::SERVICE_UNAVAILABLE),
            }
        }

        async fn profile(Path(username): Path<String>) -> AxumStatus {
            if username == "alice" {
                AxumStatus::OK
            } else {
                AxumStatus::NOT_FOUND
            }
        }

        let app = Router::new()
            .route("/rest/hackers/{username}/recent_challenges", get(recent))
            .route("/{username}", get(profile));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        format!("http://{addr}")
    }

    #[test]
    fn test_recent_challenges_url() {
        let client = client_for("https://www.hackerrank.com");

        let url = client
            .recent_challenges_url("alice", 20, ResponseVersion::Legacy)
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://www.hackerrank.com/rest/hackers/alice/recent_challenges?limit=20"
        );

        let url = client.recent_challenges_url("alice", 20, ResponseVersion::V2).unwrap();
        assert_eq!(
            url.as_str(),
            "https://www.hackerrank.com/rest/hackers/alice/recent_challenges?limit=20&response_version=v2"
        );
    }

    #[test]
    fn test_urls_reject_unsafe_usernames() {
        let client = client_for("https://www.hackerrank.com/");

        assert!(matches!(
            client.recent_challenges_url("../admin", 20, ResponseVersion::Legacy),
            Err(FeedError::InvalidUsername(_))
        ));
        assert!(matches!(client.profile_url("a?b=c"), Err(FeedError::InvalidUsername(_))));
        assert_eq!(
            client.profile_url("alice").unwrap().as_str(),
            "https://www.hackerrank.com/alice"
        );
    }

    #[test]
    fn test_new_rejects_non_base_url() {
        let config = HackerRankConfig {
            base_url: "mailto:ops@hackerrank.com".to_string(),
            ..HackerRankConfig::default()
        };
        assert!(matches!(
            HackerRankClient::new(&config),
            Err(FeedError::InvalidBaseUrl(_))
        ));
    }

    #[test]
    fn test_recent_challenge_matches_slug_or_url() {
        let by_slug = RecentChallenge {
            ch_slug: Some("two-sum".into()),
            url: None,
            name: None,
        };
        let by_url = RecentChallenge {
            ch_slug: None,
            url: Some("/challenges/two-sum".into()),
            name: None,
        };

        assert!(by_slug.matches_slug("two-sum"));
        assert!(by_url.matches_slug("two-sum"));
        assert!(!by_slug.matches_slug("three-sum"));
        assert!(!by_url.matches_slug("two"));
    }

    #[tokio::test]
    async fn test_recent_challenges_against_fake_server() {
        let client = client_for(&spawn_fake_hackerrank().await);

        let entries = client
            .recent_challenges("alice", 20, ResponseVersion::Legacy)
            .await
            .unwrap();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0]["ch_slug"], "two-sum");
        assert_eq!(entries[1]["name"], "20");
        assert_eq!(entries[2]["name"], "");

        let entries = client
            .recent_challenges("alice", 5, ResponseVersion::V2)
            .await
            .unwrap();
        assert_eq!(entries[1]["name"], "5");
        assert_eq!(entries[2]["name"], "v2");
    }

    #[tokio::test]
    async fn test_recent_challenges_null_models_is_empty() {
        let client = client_for(&spawn_fake_hackerrank().await);

        let entries = client
            .recent_challenges("quiet", 20, ResponseVersion::Legacy)
            .await
            .unwrap();
        assert!(entries.is_empty());
    }

    #[tokio::test]
    async fn test_recent_challenges_error_status() {
        let client = client_for(&spawn_fake_hackerrank().await);

        let err = client
            .recent_challenges("bob_the_builder", 20, ResponseVersion::Legacy)
            .await
            .unwrap_err();
        assert!(matches!(err, FeedError::Status(503)));
    }

    #[tokio::test]
    async fn test_profile_exists() {
        let client = client_for(&spawn_fake_hackerrank().await);

        assert!(client.profile_exists("alice").await.unwrap());
        assert!(!client.profile_exists("ghost_user").await.unwrap());
    }
}
