use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};
use crate::summary::{build_generation_http_client, TextGenerator};

const MAX_NEW_TOKENS: u32 = 400;

/// Hugging Face Inference API text-generation backend.
///
/// Plain completion has no system role, so the instruction is prepended to
/// the input.
pub struct HuggingFaceGenerator {
    client: Client,
    model: String,
    api_key: String,
    base_url: String,
}

#[derive(Serialize)]
struct GenerationRequest {
    inputs: String,
    parameters: GenerationParameters,
}

#[derive(Serialize)]
struct GenerationParameters {
    max_new_tokens: u32,
    return_full_text: bool,
}

#[derive(Deserialize)]
struct GeneratedText {
    generated_text: String,
}

impl HuggingFaceGenerator {
    pub fn new(model: impl Into<String>, api_key: impl Into<String>, base_url: impl Into<String>) -> Result<Self> {
        Ok(Self {
            client: build_generation_http_client()?,
            model: model.into(),
            api_key: api_key.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl TextGenerator for HuggingFaceGenerator {
    async fn generate(&self, instruction: &str, input: &str) -> Result<String> {
        let request = GenerationRequest {
            inputs: format!("{}\n\n{}", instruction, input),
            parameters: GenerationParameters {
                max_new_tokens: MAX_NEW_TOKENS,
                return_full_text: false,
            },
        };

        let url = format!("{}/{}", self.base_url, self.model);
        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| AppError::SummaryGeneration(format!("Hugging Face request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(AppError::SummaryGeneration(format!(
                "Hugging Face returned {}: {}",
                status, error_text
            )));
        }

        let generations: Vec<GeneratedText> = response.json().await.map_err(|e| {
            AppError::SummaryGeneration(format!("Failed to parse Hugging Face response: {}", e))
        })?;

        generations
            .into_iter()
            .next()
            .map(|g| g.generated_text)
            .ok_or_else(|| AppError::SummaryGeneration("Hugging Face returned no generations".to_string()))
    }

    fn backend_name(&self) -> &str {
        "huggingface"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;
    use serde_json::json;

    #[tokio::test]
    async fn prepends_instruction_and_returns_generated_text_verbatim() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/models/mistralai/Mistral-7B-Instruct-v0.2")
            .match_header("authorization", "Bearer hf-test")
            .match_body(Matcher::PartialJson(json!({
                "inputs": "be brief\n\nDirectory: docs\n",
                "parameters": { "return_full_text": false }
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"[{"generated_text": "  A tiny project.\n"}]"#)
            .create_async()
            .await;

        let generator = HuggingFaceGenerator::new(
            "mistralai/Mistral-7B-Instruct-v0.2",
            "hf-test",
            format!("{}/models", server.url()),
        )
        .unwrap();
        let text = generator.generate("be brief", "Directory: docs\n").await.unwrap();

        assert_eq!(text, "  A tiny project.\n");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn loading_model_is_summary_generation_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/gpt2")
            .with_status(503)
            .with_body(r#"{"error": "Model gpt2 is currently loading"}"#)
            .create_async()
            .await;

        let generator = HuggingFaceGenerator::new("gpt2", "hf-test", server.url()).unwrap();
        let err = generator.generate("i", "x").await.unwrap_err();

        assert_eq!(err.kind(), "summary_generation");
        assert!(err.to_string().contains("loading"));
    }

    #[tokio::test]
    async fn unexpected_body_is_summary_generation_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/gpt2")
            .with_status(200)
            .with_body(r#"{"error": "oops"}"#)
            .create_async()
            .await;

        let generator = HuggingFaceGenerator::new("gpt2", "hf-test", server.url()).unwrap();
        let err = generator.generate("i", "x").await.unwrap_err();
        assert_eq!(err.kind(), "summary_generation");
    }
}
