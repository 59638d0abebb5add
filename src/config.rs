//! Process-wide configuration.
//!
//! Every setting can be given as a flag or an environment variable. A
//! `.env` file is loaded first (see `main`). Values are read once at startup
//! and never change afterwards.

use std::sync::Arc;

use clap::{Parser, ValueEnum};

use crate::error::{AppError, Result};
use crate::github::{GitHubClient, TreeWalker};
use crate::summary::{HuggingFaceGenerator, OpenAiGenerator, SummaryGenerator, TextGenerator};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum GenerationBackend {
    Openai,
    Huggingface,
}

/// Repo Reflect - turn a GitHub repository into a short reflective blog post
#[derive(Parser, Debug, Clone)]
#[command(name = "repo-reflect")]
#[command(about = "Fetch a GitHub repository tree and generate a blog post about it", long_about = None)]
pub struct Config {
    /// Address to bind the server to
    #[arg(long, env = "BIND_ADDRESS", default_value = "127.0.0.1")]
    pub host: String,

    /// Port to run the server on
    #[arg(short, long, env = "PORT", default_value = "5000")]
    pub port: u16,

    /// Token presented to the GitHub API
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub github_token: String,

    /// Base URL of the GitHub REST API
    #[arg(long, env = "GITHUB_API_URL", default_value = "https://api.github.com")]
    pub github_api_url: String,

    /// Sibling entries expanded at once while walking a repository (1 = sequential)
    #[arg(long, env = "FETCH_CONCURRENCY", default_value = "1",
          value_parser = clap::value_parser!(u16).range(1..))]
    pub fetch_concurrency: u16,

    /// Text generation backend used for blog posts
    #[arg(long, value_enum, env = "GENERATION_BACKEND", default_value = "openai")]
    pub backend: GenerationBackend,

    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
    pub openai_api_key: Option<String>,

    #[arg(long, env = "OPENAI_MODEL", default_value = "gpt-4o-mini")]
    pub openai_model: String,

    #[arg(long, env = "OPENAI_BASE_URL", default_value = "https://api.openai.com/v1")]
    pub openai_base_url: String,

    #[arg(long, env = "HUGGINGFACE_API_KEY", hide_env_values = true)]
    pub huggingface_api_key: Option<String>,

    #[arg(long, env = "HUGGINGFACE_MODEL", default_value = "mistralai/Mistral-7B-Instruct-v0.2")]
    pub huggingface_model: String,

    #[arg(long, env = "HUGGINGFACE_BASE_URL", default_value = "https://api-inference.huggingface.co/models")]
    pub huggingface_base_url: String,
}

impl Config {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn tree_walker(&self) -> Result<TreeWalker> {
        let client = GitHubClient::new(&self.github_api_url, &self.github_token)?;
        Ok(TreeWalker::new(client, usize::from(self.fetch_concurrency)))
    }

    /// Builds the selected backend, failing if its API key is missing.
    pub fn text_generator(&self) -> Result<Arc<dyn TextGenerator>> {
        let backend: Arc<dyn TextGenerator> = match self.backend {
            GenerationBackend::Openai => {
                let api_key = require_key(&self.openai_api_key, "OPENAI_API_KEY")?;
                Arc::new(OpenAiGenerator::new(
                    &self.openai_model,
                    api_key,
                    &self.openai_base_url,
                )?)
            }
            GenerationBackend::Huggingface => {
                let api_key = require_key(&self.huggingface_api_key, "HUGGINGFACE_API_KEY")?;
                Arc::new(HuggingFaceGenerator::new(
                    &self.huggingface_model,
                    api_key,
                    &self.huggingface_base_url,
                )?)
            }
        };
        Ok(backend)
    }

    pub fn summary_generator(&self) -> Result<SummaryGenerator> {
        Ok(SummaryGenerator::new(self.text_generator()?))
    }
}

fn require_key<'a>(key: &'a Option<String>, var: &str) -> Result<&'a str> {
    key.as_deref()
        .filter(|k| !k.trim().is_empty())
        .ok_or_else(|| AppError::Config(format!("{} is required for the selected backend", var)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Config {
        let mut argv = vec!["repo-reflect", "--github-token", "ghp_test"];
        argv.extend_from_slice(args);
        Config::try_parse_from(argv).unwrap()
    }

    #[test]
    fn defaults_follow_the_original_server() {
        let config = parse(&["--openai-api-key", "sk"]);
        assert_eq!(config.bind_address(), "127.0.0.1:5000");
        assert_eq!(config.backend, GenerationBackend::Openai);
        assert_eq!(config.openai_model, "gpt-4o-mini");
        assert_eq!(config.fetch_concurrency, 1);
    }

    #[test]
    fn selects_backend_by_name() {
        let config = parse(&["--backend", "huggingface", "--huggingface-api-key", "hf"]);
        let generator = config.text_generator().unwrap();
        assert_eq!(generator.backend_name(), "huggingface");

        let config = parse(&["--openai-api-key", "sk"]);
        assert_eq!(config.summary_generator().unwrap().backend_name(), "openai");
    }

    #[test]
    fn missing_key_for_selected_backend_is_config_error() {
        let config = parse(&["--backend", "huggingface", "--openai-api-key", "sk"]);
        let err = config.text_generator().err().unwrap();
        assert_eq!(err.kind(), "config");
        assert!(err.to_string().contains("HUGGINGFACE_API_KEY"));
    }

    #[test]
    fn zero_concurrency_is_rejected() {
        let result = Config::try_parse_from([
            "repo-reflect",
            "--github-token",
            "t",
            "--fetch-concurrency",
            "0",
        ]);
        assert!(result.is_err());
    }
}
