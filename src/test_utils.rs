//! Test utilities
//!
//! An in-memory [`LabStore`] that enforces the same uniqueness rules as the
//! PostgreSQL schema, so services and handlers can be tested without a
//! database, plus helpers to build the application around it.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::Router;
use chrono::Utc;
use uuid::Uuid;

use crate::{
    config::{Config, DatabaseConfig, HackerRankConfig, ServerConfig},
    db::LabStore,
    error::{AppError, AppResult},
    hackerrank::ActivityFeed,
    handlers,
    models::{Problem, StudentProfile, Submission, SubmissionDraft},
    state::AppState,
};

/// Configuration with defaults and an unused database URL
pub fn test_config() -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            rust_log: "labsync=debug".to_string(),
        },
        database: DatabaseConfig {
            url: "postgres://localhost/labsync_test".to_string(),
            max_connections: 1,
        },
        hackerrank: HackerRankConfig::default(),
    }
}

/// The full application over an in-memory store and the given feed
pub fn test_app(store: InMemoryLabStore, feed: impl ActivityFeed + 'static) -> Router {
    handlers::app(AppState::new(Arc::new(store), Arc::new(feed), test_config()))
}

#[derive(Default)]
struct Tables {
    problems: Vec<Problem>,
    students: Vec<StudentProfile>,
    submissions: Vec<Submission>,
}

/// In-memory store shared between clones
#[derive(Clone, Default)]
pub struct InMemoryLabStore {
    tables: Arc<Mutex<Tables>>,
}

impl InMemoryLabStore {
    /// Add a problem in a fresh lab
    pub fn add_problem(&self, external_url: &str) -> Problem {
        let problem = Problem {
            id: Uuid::new_v4(),
            lab_id: Uuid::new_v4(),
            title: "Two Sum".to_string(),
            external_url: external_url.to_string(),
            difficulty: "easy".to_string(),
            points: 10,
            created_at: Utc::now(),
        };
        self.tables.lock().unwrap().problems.push(problem.clone());
        problem
    }

    /// Add a student and return their user id
    pub fn add_student(&self, external_username: Option<&str>) -> Uuid {
        let user_id = Uuid::new_v4();
        self.tables.lock().unwrap().students.push(StudentProfile {
            user_id,
            external_username: external_username.map(str::to_string),
        });
        user_id
    }

    pub fn submission_count(&self) -> usize {
        self.tables.lock().unwrap().submissions.len()
    }
}

impl Tables {
    fn hash_claimed_by_other(&self, hash: &str, id: Option<Uuid>) -> bool {
        self.submissions
            .iter()
            .any(|s| s.submission_url_hash == hash && Some(s.id) != id)
    }
}

#[async_trait]
impl LabStore for InMemoryLabStore {
    async fn find_problem(&self, id: &Uuid) -> AppResult<Option<Problem>> {
        let tables = self.tables.lock().unwrap();
        Ok(tables.problems.iter().find(|p| p.id == *id).cloned())
    }

    async fn find_student(&self, user_id: &Uuid) -> AppResult<Option<StudentProfile>> {
        let tables = self.tables.lock().unwrap();
        Ok(tables.students.iter().find(|s| s.user_id == *user_id).cloned())
    }

    async fn find_submission(&self, user_id: &Uuid, problem_id: &Uuid) -> AppResult<Option<Submission>> {
        let tables = self.tables.lock().unwrap();
        Ok(tables
            .submissions
            .iter()
            .find(|s| s.user_id == *user_id && s.problem_id == *problem_id)
            .cloned())
    }

    async fn insert_submission(&self, draft: &SubmissionDraft) -> AppResult<Submission> {
        let mut tables = self.tables.lock().unwrap();

        if tables.hash_claimed_by_other(&draft.submission_url_hash, None) {
            return Err(AppError::DuplicateSubmissionUrl);
        }
        if tables
            .submissions
            .iter()
            .any(|s| s.user_id == draft.user_id && s.problem_id == draft.problem_id)
        {
            return Err(AppError::AlreadyExists("Resource already exists".to_string()));
        }

        let submission = Submission {
            id: Uuid::new_v4(),
            user_id: draft.user_id,
            problem_id: draft.problem_id,
            lab_id: draft.lab_id,
            submission_url: draft.submission_url.clone(),
            submission_url_hash: draft.submission_url_hash.clone(),
            status: draft.status.as_str().to_string(),
            code: draft.code.clone(),
            proof_file_id: draft.proof_file_id.clone(),
            verification_method: draft.verification_method.map(|m| m.as_str().to_string()),
            submitted_at: Utc::now(),
            verified_at: draft.verified_at,
        };
        tables.submissions.push(submission.clone());

        Ok(submission)
    }

    async fn update_submission(&self, id: &Uuid, draft: &SubmissionDraft) -> AppResult<Submission> {
        let mut tables = self.tables.lock().unwrap();

        if tables.hash_claimed_by_other(&draft.submission_url_hash, Some(*id)) {
            return Err(AppError::DuplicateSubmissionUrl);
        }

        let submission = tables
            .submissions
            .iter_mut()
            .find(|s| s.id == *id)
            .ok_or_else(|| AppError::NotFound("Resource not found".to_string()))?;

        submission.lab_id = draft.lab_id;
        submission.submission_url = draft.submission_url.clone();
        submission.submission_url_hash = draft.submission_url_hash.clone();
        submission.status = draft.status.as_str().to_string();
        submission.code = draft.code.clone();
        submission.proof_file_id = draft.proof_file_id.clone();
        submission.verification_method = draft.verification_method.map(|m| m.as_str().to_string());
        submission.verified_at = draft.verified_at;
        submission.submitted_at = Utc::now();

        Ok(submission.clone())
    }

    async fn ping(&self) -> AppResult<()> {
        Ok(())
    }
}
