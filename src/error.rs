//! Application error types and HTTP response mapping.
//!
//! `AppError` keeps one variant per failure kind so logs and tests can tell
//! them apart. The HTTP contract is flatter: every analysis failure is a
//! 500 with the same `{"error": "Failed to analyze repo"}` body, and a
//! failed backend check is a 500 with its own message. A partial tree is
//! never sent alongside an error.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

pub const ANALYZE_FAILURE_MESSAGE: &str = "Failed to analyze repo";
pub const GENERATION_CHECK_FAILURE_MESSAGE: &str = "Failed to connect to text generation backend";

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Repository not found: {0}")]
    RepoNotFound(String),

    #[error("Failed to list directory '{path}': {reason}")]
    DirectoryList { path: String, reason: String },

    #[error("Failed to fetch file '{path}': {reason}")]
    Fetch { path: String, reason: String },

    #[error("Summary generation failed: {0}")]
    SummaryGeneration(String),

    #[error("Malformed repository URL: {0}")]
    MalformedUrl(String),

    #[error("Text generation backend unavailable: {0}")]
    GenerationUnavailable(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Stable label for the failure kind, used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            AppError::RepoNotFound(_) => "repo_not_found",
            AppError::DirectoryList { .. } => "directory_list",
            AppError::Fetch { .. } => "fetch",
            AppError::SummaryGeneration(_) => "summary_generation",
            AppError::MalformedUrl(_) => "malformed_url",
            AppError::GenerationUnavailable(_) => "generation_unavailable",
            AppError::Config(_) => "config",
            AppError::Internal(_) => "internal",
        }
    }
}

// A body without a usable `repoUrl` is a malformed URL like any other.
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::MalformedUrl(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!(kind = self.kind(), "{}", self);

        let (status, error_message) = match &self {
            AppError::GenerationUnavailable(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                GENERATION_CHECK_FAILURE_MESSAGE,
            ),
            _ => (StatusCode::INTERNAL_SERVER_ERROR, ANALYZE_FAILURE_MESSAGE),
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
