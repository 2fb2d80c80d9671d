//! Domain models
//!
//! This module contains all domain models used throughout the application.

pub mod problem;
pub mod student;
pub mod submission;
pub mod verification;

pub use problem::*;
pub use student::*;
pub use submission::*;
pub use verification::*;
