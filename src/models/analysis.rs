//! Request/response DTOs for the analysis endpoints.
//!
//! - `AnalyzeRequest`: Body of POST /api/v1/analyze
//! - `AnalyzeResponse`: Fetched tree plus the generated blog post
//! - `GenerationCheck`: Result of GET /api/v1/generation/check

use serde::{Deserialize, Serialize};

use super::TreeNode;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeRequest {
    pub repo_url: String,
    /// Set to false to fetch the tree without calling the text generator.
    #[serde(default = "default_true")]
    pub summarize: bool,
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeResponse {
    pub files: Vec<TreeNode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blog_post: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationCheck {
    pub backend: String,
    pub generated_text: String,
}
