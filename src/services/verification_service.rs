//! Verification decision engine
//!
//! Decides whether a pasted HackerRank link counts as a solve of a problem.
//! Checks run in a fixed order and the first terminal result wins:
//!
//! 1. the submission URL must be an http(s) URL on the HackerRank domain
//! 2. the problem's reference URL must yield a challenge slug
//! 3. a submission slug that differs from the problem slug is rejected
//! 4. a username on file whose recent activity shows the slug is solved
//! 5. anything else is pending manual review

use url::Url;

use crate::{
    config::HackerRankConfig,
    hackerrank::{cross_check, ActivityFeed, ProfileCheck},
    models::Decision,
    utils::{extract_challenge_slug, is_allowed_host, non_blank},
};

/// Fatal verification failures; no decision can be produced
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VerificationError {
    #[error("{0}")]
    InvalidUrl(String),

    #[error("Could not determine problem slug")]
    UnknownProblem,
}

/// Inputs of one verification attempt
#[derive(Debug, Clone, Copy)]
pub struct VerificationRequest<'a> {
    pub submission_url: &'a str,
    pub problem_url: Option<&'a str>,
    pub external_username: Option<&'a str>,
}

/// Verification service for business logic
pub struct VerificationService;

impl VerificationService {
    /// Run the verification pipeline for one submission link
    pub async fn verify(
        feed: &dyn ActivityFeed,
        config: &HackerRankConfig,
        request: VerificationRequest<'_>,
    ) -> Result<Decision, VerificationError> {
        let submission_url = request.submission_url.trim();
        Self::validate_submission_url(submission_url, &config.allowed_domain)?;

        let submitted_slug = extract_challenge_slug(submission_url);
        let expected_slug = request
            .problem_url
            .and_then(extract_challenge_slug)
            .ok_or(VerificationError::UnknownProblem)?;

        if let Some(submitted) = submitted_slug.as_deref() {
            if submitted != expected_slug {
                tracing::info!(
                    expected = %expected_slug,
                    submitted,
                    "Submission URL is for a different problem"
                );
                return Ok(Decision::rejected(&expected_slug, submitted));
            }
        }

        let profile = match non_blank(request.external_username) {
            Some(username) => {
                Some(cross_check(feed, username, &expected_slug, config.recent_limit).await)
            }
            None => None,
        };

        if profile.as_ref().is_some_and(ProfileCheck::is_verified) {
            return Ok(Decision::solved(expected_slug));
        }

        let reason = match (&submitted_slug, &profile) {
            (None, _) => {
                "Submission URL does not name a challenge. Pending manual review."
            }
            (Some(_), None) => {
                "Submission recorded but NOT verified. Add your HackerRank username to enable automatic verification. Pending manual review."
            }
            (Some(_), Some(ProfileCheck::InvalidUsername)) => {
                "Your HackerRank username on file is not valid. Update it to enable automatic verification. Pending manual review."
            }
            (Some(_), Some(ProfileCheck::Unavailable)) => {
                "HackerRank activity could not be checked right now. Submission recorded but NOT verified. Pending manual review."
            }
            (Some(_), Some(_)) => {
                "Challenge not found in your recent HackerRank activity. Submission recorded but NOT verified. Pending manual review."
            }
        };

        tracing::debug!(slug = %expected_slug, "Submission pending manual review");
        Ok(Decision::pending(submitted_slug, reason))
    }

    /// Structural check of a submission link
    pub fn validate_submission_url(raw: &str, allowed_domain: &str) -> Result<Url, VerificationError> {
        let url = Url::parse(raw.trim())
            .map_err(|_| VerificationError::InvalidUrl("Invalid URL format".to_string()))?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(VerificationError::InvalidUrl(
                "URL must start with http:// or https://".to_string(),
            ));
        }

        if !is_allowed_host(&url, allowed_domain) {
            return Err(VerificationError::InvalidUrl(format!(
                "URL must be from {allowed_domain}"
            )));
        }

        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use serde_json::json;

    use crate::{
        hackerrank::{FeedError, MockActivityFeed},
        models::{DecisionStatus, VerificationMethod},
    };

    const SUBMISSION: &str = "https://www.hackerrank.com/challenges/two-sum/submissions/555";
    const PROBLEM: &str = "https://www.hackerrank.com/challenges/two-sum/problem";

    fn request<'a>(
        submission_url: &'a str,
        problem_url: Option<&'a str>,
        external_username: Option<&'a str>,
    ) -> VerificationRequest<'a> {
        VerificationRequest {
            submission_url,
            problem_url,
            external_username,
        }
    }

    /// A feed that fails the test if it is consulted
    fn untouched_feed() -> MockActivityFeed {
        let mut feed = MockActivityFeed::new();
        feed.expect_recent_challenges().never();
        feed
    }

    fn feed_with(slugs: &'static [&'static str]) -> MockActivityFeed {
        let mut feed = MockActivityFeed::new();
        feed.expect_recent_challenges().times(1).returning(move |_, _, _| {
            Ok(slugs.iter().map(|slug| json!({ "ch_slug": slug })).collect())
        });
        feed
    }

    #[tokio::test]
    async fn test_end_to_end_pending_without_username() {
        let decision = VerificationService::verify(
            &untouched_feed(),
            &HackerRankConfig::default(),
            request(SUBMISSION, Some(PROBLEM), None),
        )
        .await
        .unwrap();

        assert_eq!(decision.status, DecisionStatus::Pending);
        assert!(!decision.verified());
        assert!(decision.accepted());
        assert_eq!(decision.matched_slug.as_deref(), Some("two-sum"));
        assert_eq!(decision.method, Some(VerificationMethod::UrlSlugFormat));
    }

    #[tokio::test]
    async fn test_blank_username_counts_as_missing() {
        let decision = VerificationService::verify(
            &untouched_feed(),
            &HackerRankConfig::default(),
            request(SUBMISSION, Some(PROBLEM), Some("   ")),
        )
        .await
        .unwrap();

        assert_eq!(decision.status, DecisionStatus::Pending);
    }

    #[tokio::test]
    async fn test_slug_mismatch_rejected_without_consulting_profile() {
        let decision = VerificationService::verify(
            &untouched_feed(),
            &HackerRankConfig::default(),
            request(
                SUBMISSION,
                Some("https://www.hackerrank.com/challenges/three-sum/problem"),
                Some("alice"),
            ),
        )
        .await
        .unwrap();

        assert_eq!(decision.status, DecisionStatus::Rejected);
        assert!(!decision.accepted());
        assert!(decision.reason.contains("three-sum"));
    }

    #[tokio::test]
    async fn test_profile_match_is_solved() {
        let decision = VerificationService::verify(
            &feed_with(&["fizzbuzz", "two-sum"]),
            &HackerRankConfig::default(),
            request(SUBMISSION, Some(PROBLEM), Some("alice")),
        )
        .await
        .unwrap();

        assert_eq!(decision.status, DecisionStatus::Solved);
        assert!(decision.verified());
        assert_eq!(decision.matched_slug.as_deref(), Some("two-sum"));
        assert_eq!(decision.method, Some(VerificationMethod::Profile));
    }

    #[tokio::test]
    async fn test_profile_without_match_is_pending() {
        let decision = VerificationService::verify(
            &feed_with(&["fizzbuzz"]),
            &HackerRankConfig::default(),
            request(SUBMISSION, Some(PROBLEM), Some("alice")),
        )
        .await
        .unwrap();

        assert_eq!(decision.status, DecisionStatus::Pending);
        assert!(decision.reason.contains("not found in your recent"));
    }

    #[tokio::test]
    async fn test_feed_outage_degrades_to_pending() {
        let mut feed = MockActivityFeed::new();
        feed.expect_recent_challenges()
            .times(1)
            .returning(|_, _, _| Err(FeedError::Status(503)));

        let decision = VerificationService::verify(
            &feed,
            &HackerRankConfig::default(),
            request(SUBMISSION, Some(PROBLEM), Some("alice")),
        )
        .await
        .unwrap();

        assert_eq!(decision.status, DecisionStatus::Pending);
        assert!(decision.reason.contains("could not be checked"));
    }

    #[tokio::test]
    async fn test_malformed_username_gets_its_own_reason() {
        let decision = VerificationService::verify(
            &untouched_feed(),
            &HackerRankConfig::default(),
            request(SUBMISSION, Some(PROBLEM), Some("alice smith")),
        )
        .await
        .unwrap();

        assert_eq!(decision.status, DecisionStatus::Pending);
        assert!(decision.reason.contains("username on file is not valid"));
        assert!(!decision.reason.contains("could not be checked"));
    }

    #[tokio::test]
    async fn test_submission_without_slug_can_still_be_confirmed() {
        let decision = VerificationService::verify(
            &feed_with(&["two-sum"]),
            &HackerRankConfig::default(),
            request("https://www.hackerrank.com/profile/alice", Some(PROBLEM), Some("alice")),
        )
        .await
        .unwrap();

        assert_eq!(decision.status, DecisionStatus::Solved);
    }

    #[tokio::test]
    async fn test_submission_without_slug_is_pending() {
        let decision = VerificationService::verify(
            &untouched_feed(),
            &HackerRankConfig::default(),
            request("https://www.hackerrank.com/profile/alice", Some(PROBLEM), None),
        )
        .await
        .unwrap();

        assert_eq!(decision.status, DecisionStatus::Pending);
        assert_eq!(decision.matched_slug, None);
    }

    #[tokio::test]
    async fn test_slug_comparison_ignores_case() {
        let decision = VerificationService::verify(
            &untouched_feed(),
            &HackerRankConfig::default(),
            request(
                "https://www.hackerrank.com/challenges/Two-Sum/submissions/555",
                Some(PROBLEM),
                None,
            ),
        )
        .await
        .unwrap();

        assert_eq!(decision.status, DecisionStatus::Pending);
    }

    #[tokio::test]
    async fn test_invalid_urls() {
        let config = HackerRankConfig::default();

        for bad in [
            "not a url",
            "ftp://www.hackerrank.com/challenges/two-sum/submissions/555",
            "https://leetcode.com/problems/two-sum/submissions/555",
            "https://evilhackerrank.com/challenges/two-sum/submissions/555",
        ] {
            let err = VerificationService::verify(
                &untouched_feed(),
                &config,
                request(bad, Some(PROBLEM), Some("alice")),
            )
            .await
            .unwrap_err();

            assert!(matches!(err, VerificationError::InvalidUrl(_)), "accepted {bad}");
        }
    }

    #[tokio::test]
    async fn test_invalid_url_checked_before_problem() {
        let err = VerificationService::verify(
            &untouched_feed(),
            &HackerRankConfig::default(),
            request("not a url", None, None),
        )
        .await
        .unwrap_err();

        assert_eq!(err, VerificationError::InvalidUrl("Invalid URL format".to_string()));
    }

    #[tokio::test]
    async fn test_unknown_problem_is_fatal() {
        for problem_url in [None, Some("https://www.hackerrank.com/dashboard"), Some("")] {
            let err = VerificationService::verify(
                &untouched_feed(),
                &HackerRankConfig::default(),
                request(SUBMISSION, problem_url, Some("alice")),
            )
            .await
            .unwrap_err();

            assert_eq!(err, VerificationError::UnknownProblem);
        }
    }

    #[test]
    fn test_validate_submission_url_honours_configured_domain() {
        assert!(VerificationService::validate_submission_url(
            "https://staging.example.org/challenges/a",
            "example.org"
        )
        .is_ok());
        assert!(VerificationService::validate_submission_url(SUBMISSION, "example.org").is_err());
    }
}
