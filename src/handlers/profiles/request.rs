//! Profile request DTOs

use serde::Deserialize;

/// Body of profile lookups; the username is checked in the handler so a
/// missing value gets a specific message
#[derive(Debug, Deserialize)]
pub struct UsernameRequest {
    pub username: Option<String>,
}
