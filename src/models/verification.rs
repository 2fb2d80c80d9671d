//! Verification decision model

use serde::{Deserialize, Serialize};

use super::SubmissionStatus;

/// Terminal status of one verification attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DecisionStatus {
    /// Confirmed against the student's public activity
    Solved,
    /// Well-formed and matching, awaiting manual review
    Pending,
    /// Submission link belongs to a different challenge
    Rejected,
}

impl DecisionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Solved => "solved",
            Self::Pending => "pending",
            Self::Rejected => "rejected",
        }
    }
}

/// How a decision was reached
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerificationMethod {
    Profile,
    UrlSlugFormat,
}

impl VerificationMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Profile => "profile",
            Self::UrlSlugFormat => "url_slug_format",
        }
    }
}

/// Outcome of the verification pipeline
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Decision {
    pub status: DecisionStatus,
    pub reason: String,
    pub matched_slug: Option<String>,
    pub method: Option<VerificationMethod>,
}

impl Decision {
    pub fn solved(slug: String) -> Self {
        Self {
            status: DecisionStatus::Solved,
            reason: "Verified against HackerRank profile activity".to_string(),
            matched_slug: Some(slug),
            method: Some(VerificationMethod::Profile),
        }
    }

    pub fn pending(slug: Option<String>, reason: impl Into<String>) -> Self {
        Self {
            status: DecisionStatus::Pending,
            reason: reason.into(),
            matched_slug: slug,
            method: Some(VerificationMethod::UrlSlugFormat),
        }
    }

    pub fn rejected(expected: &str, submitted: &str) -> Self {
        Self {
            status: DecisionStatus::Rejected,
            reason: format!(
                "Submission URL is for problem \"{submitted}\", but this assignment is for \"{expected}\""
            ),
            matched_slug: None,
            method: None,
        }
    }

    /// Whether the attempt may be recorded (solved or pending)
    pub fn accepted(&self) -> bool {
        !matches!(self.status, DecisionStatus::Rejected)
    }

    /// Whether the solve was confirmed rather than merely well-formed
    pub fn verified(&self) -> bool {
        matches!(self.status, DecisionStatus::Solved)
    }

    /// Stored status for an accepted decision
    pub fn submission_status(&self) -> Option<SubmissionStatus> {
        match self.status {
            DecisionStatus::Solved => Some(SubmissionStatus::Solved),
            DecisionStatus::Pending => Some(SubmissionStatus::Pending),
            DecisionStatus::Rejected => None,
        }
    }
}
