//! HackerRank integration
//!
//! HackerRank publishes no supported API for submission data. Everything
//! here talks to the undocumented REST endpoints behind the public site,
//! which are rate-limited and may change shape without notice.

pub mod client;
pub mod cross_check;

pub use client::{ActivityFeed, FeedError, HackerRankClient, RecentChallenge, ResponseVersion};
pub use cross_check::{cross_check, find_challenge, ProfileCheck};

#[cfg(test)]
pub use client::MockActivityFeed;
