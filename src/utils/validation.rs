//! Input validation utilities

use std::sync::LazyLock;

use regex::Regex;

use crate::constants::{MAX_EXTERNAL_USERNAME_LENGTH, MIN_EXTERNAL_USERNAME_LENGTH};

static EXTERNAL_USERNAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"^[A-Za-z0-9_]{{{},{}}}$",
        MIN_EXTERNAL_USERNAME_LENGTH, MAX_EXTERNAL_USERNAME_LENGTH
    ))
    .expect("external username pattern is valid")
});

/// Validate a HackerRank username before it is placed in an outbound URL
pub fn validate_external_username(username: &str) -> Result<(), &'static str> {
    if username.len() < MIN_EXTERNAL_USERNAME_LENGTH {
        return Err("HackerRank username must be at least 3 characters");
    }
    if username.len() > MAX_EXTERNAL_USERNAME_LENGTH {
        return Err("HackerRank username must be at most 30 characters");
    }
    if !EXTERNAL_USERNAME.is_match(username) {
        return Err("HackerRank username can only contain letters, numbers, and underscores");
    }
    Ok(())
}

/// Trim an optional string, treating blank input as absent
pub fn non_blank(input: Option<&str>) -> Option<&str> {
    input.map(str::trim).filter(|s| !s.is_empty())
}
