//! Blog-post generation from a fetched repository tree.
//!
//! The tree is flattened into one text document and handed to a
//! `TextGenerator` backend. OpenAI chat completions and Hugging Face text
//! generation are interchangeable behind that trait; `Config` picks one at
//! startup.

pub mod huggingface;
pub mod openai;

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::error::{AppError, Result};
use crate::models::{GenerationCheck, TreeNode};

pub use huggingface::HuggingFaceGenerator;
pub use openai::OpenAiGenerator;

pub const BLOG_POST_INSTRUCTION: &str = "Based on the following GitHub repository structure and file contents, \
write a blog post about the project, focus on being reflective about learning and the project. \
Keep it less than 250 words for now";

const CHECK_INSTRUCTION: &str = "complete the input up to 10 words";
const CHECK_INPUT: &str = "hey my name is.....";

const GENERATION_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
const GENERATION_REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

/// A remote text-generation capability.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generates text for `input` following `instruction`.
    async fn generate(&self, instruction: &str, input: &str) -> Result<String>;

    fn backend_name(&self) -> &str;
}

pub(crate) fn build_generation_http_client() -> Result<Client> {
    Client::builder()
        .connect_timeout(GENERATION_CONNECT_TIMEOUT)
        .timeout(GENERATION_REQUEST_TIMEOUT)
        .build()
        .map_err(|e| AppError::Config(format!("Failed to create HTTP client: {}", e)))
}

#[derive(Clone)]
pub struct SummaryGenerator {
    backend: Arc<dyn TextGenerator>,
}

impl SummaryGenerator {
    pub fn new(backend: Arc<dyn TextGenerator>) -> Self {
        Self { backend }
    }

    pub fn backend_name(&self) -> &str {
        self.backend.backend_name()
    }

    /// Serializes `nodes` depth-first into the document sent to the backend.
    ///
    /// Files become `File: <path>\n\nContent:\n<content>\n\n` blocks and
    /// directories `Directory: <path>\n` lines, joined with newlines.
    pub fn flatten(nodes: &[TreeNode]) -> String {
        TreeNode::walk(nodes)
            .map(|node| match node {
                TreeNode::File { path, content, .. } => {
                    format!("File: {}\n\nContent:\n{}\n\n", path, content)
                }
                TreeNode::Directory { path, .. } => format!("Directory: {}\n", path),
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub async fn summarize(&self, document: &str) -> Result<String> {
        self.backend
            .generate(BLOG_POST_INSTRUCTION, document)
            .await
            .map_err(|e| match e {
                AppError::SummaryGeneration(_) => e,
                other => AppError::SummaryGeneration(other.to_string()),
            })
    }

    pub async fn summarize_tree(&self, nodes: &[TreeNode]) -> Result<String> {
        let document = Self::flatten(nodes);
        tracing::debug!(
            backend = self.backend_name(),
            document_bytes = document.len(),
            "requesting blog post"
        );
        self.summarize(&document).await
    }

    /// Round-trips a tiny prompt to confirm the backend is reachable.
    pub async fn check(&self) -> Result<GenerationCheck> {
        let generated_text = self
            .backend
            .generate(CHECK_INSTRUCTION, CHECK_INPUT)
            .await
            .map_err(|e| AppError::GenerationUnavailable(e.to_string()))?;

        Ok(GenerationCheck {
            backend: self.backend_name().to_string(),
            generated_text,
        })
    }
}
