use axum::{
    extract::{rejection::JsonRejection, State},
    routing::post,
    Json, Router,
};

use crate::error::Result;
use crate::github::parse_repo_url;
use crate::models::{AnalyzeRequest, AnalyzeResponse, TreeNode};
use crate::routes::SharedState;

pub fn routes(state: SharedState) -> Router {
    Router::new()
        .route("/api/v1/analyze", post(analyze_repo))
        .with_state(state)
}

async fn analyze_repo(
    State(state): State<SharedState>,
    payload: std::result::Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Result<Json<AnalyzeResponse>> {
    let Json(request) = payload?;
    let repo = parse_repo_url(&request.repo_url)?;
    tracing::info!(repo = %repo, "analyzing repository");

    let files = state.walker.list_and_expand(&repo, "").await?;
    tracing::info!(
        repo = %repo,
        nodes = TreeNode::walk(&files).count(),
        files = TreeNode::walk(&files).filter(|node| node.is_file()).count(),
        "fetched repository tree"
    );

    let blog_post = if request.summarize {
        let post = state.summarizer.summarize_tree(&files).await?;
        tracing::info!(repo = %repo, backend = state.summarizer.backend_name(), "generated blog post");
        Some(post)
    } else {
        None
    };

    Ok(Json(AnalyzeResponse { files, blog_post }))
}
