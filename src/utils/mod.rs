//! Utility functions

pub mod crypto;
pub mod urls;
pub mod validation;

pub use crypto::{hash_string, submission_url_hash};
pub use urls::{extract_challenge_slug, is_allowed_host, normalize_url};
pub use validation::{non_blank, validate_external_username};
