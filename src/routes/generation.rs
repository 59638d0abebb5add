use axum::{extract::State, routing::get, Json, Router};

use crate::error::Result;
use crate::models::GenerationCheck;
use crate::routes::SharedState;

pub fn routes(state: SharedState) -> Router {
    Router::new()
        .route("/api/v1/generation/check", get(check_generation))
        .with_state(state)
}

async fn check_generation(State(state): State<SharedState>) -> Result<Json<GenerationCheck>> {
    let check = state.summarizer.check().await?;
    Ok(Json(check))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::github::{GitHubClient, TreeWalker};
    use crate::routes::{create_router, AppState};
    use crate::summary::tests::RecordingGenerator;
    use crate::summary::SummaryGenerator;

    async fn get_check(backend: RecordingGenerator) -> (StatusCode, Value) {
        let client = GitHubClient::new("http://127.0.0.1:9", "unused").unwrap();
        let app = create_router(Arc::new(AppState {
            walker: TreeWalker::new(client, 1),
            summarizer: SummaryGenerator::new(Arc::new(backend)),
        }));

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/v1/generation/check")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn reports_generated_text() {
        let (status, body) = get_check(RecordingGenerator::replying("Ferris the crab.")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({ "backend": "recording", "generatedText": "Ferris the crab." })
        );
    }

    #[tokio::test]
    async fn backend_failure_is_reported_uniformly() {
        let (status, body) = get_check(RecordingGenerator::failing("401 Unauthorized")).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body,
            json!({ "error": "Failed to connect to text generation backend" })
        );
    }
}
