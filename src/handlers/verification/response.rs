//! Verification response DTOs

use serde::Serialize;

use crate::models::{Decision, DecisionStatus, VerificationMethod};

/// Outcome of verifying a submission link
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationResponse {
    pub success: bool,
    pub verified: bool,
    pub status: DecisionStatus,
    pub reason: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matched_slug: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<VerificationMethod>,
}

impl From<Decision> for VerificationResponse {
    fn from(decision: Decision) -> Self {
        Self {
            success: true,
            verified: decision.verified(),
            status: decision.status,
            reason: decision.reason,
            matched_slug: decision.matched_slug,
            method: decision.method,
        }
    }
}
