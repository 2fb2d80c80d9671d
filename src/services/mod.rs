//! Business logic services

pub mod profile_service;
pub mod submission_service;
pub mod verification_service;

pub use profile_service::ProfileService;
pub use submission_service::{SubmissionPayload, SubmissionService, SubmitOutcome};
pub use verification_service::{VerificationError, VerificationRequest, VerificationService};
