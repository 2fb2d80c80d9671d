//! LabSync - HackerRank Submission Verification
//!
//! This library provides the submission-verification core of the LabSync
//! lab-management platform. Students paste the link of a HackerRank
//! submission for a lab problem; LabSync decides whether the link really
//! belongs to that problem and, where possible, confirms the solve against
//! the student's public HackerRank activity.
//!
//! # Features
//!
//! - Challenge slug extraction and URL normalization
//! - Profile cross-checking against recent HackerRank activity
//! - A verification decision engine (solved, pending, rejected)
//! - One submission per student and problem, with reused links detected
//!   through a hash of the normalized URL
//!
//! # Architecture
//!
//! The application follows a layered architecture:
//! - **Handlers**: HTTP request handlers (thin layer)
//! - **Services**: Business logic
//! - **Repositories**: Database access
//! - **Models**: Domain models and DTOs

pub mod config;
pub mod constants;
pub mod db;
pub mod error;
pub mod hackerrank;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;
pub mod state;
pub mod utils;

#[cfg(test)]
pub mod test_utils;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, AppResult};
pub use state::AppState;
