//! Repo Reflect - fetch a GitHub repository and write a blog post about it
//!
//! # Usage
//! ```bash
//! GITHUB_TOKEN=... OPENAI_API_KEY=... repo-reflect
//! repo-reflect --backend huggingface --port 8080
//! ```

mod config;
mod error;
mod github;
mod models;
mod routes;
mod summary;

use std::sync::Arc;

use axum::Router;
use clap::Parser;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use config::Config;
use routes::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Missing .env is fine; real environment variables still apply.
    dotenv::dotenv().ok();
    let config = Config::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let state = AppState {
        walker: config.tree_walker()?,
        summarizer: config.summary_generator()?,
    };
    let backend_name = state.summarizer.backend_name().to_string();
    tracing::info!(
        backend = %backend_name,
        github_api = %config.github_api_url,
        fetch_concurrency = config.fetch_concurrency,
        "configuration loaded"
    );

    // The frontend is served from another origin.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .merge(routes::create_router(Arc::new(state)))
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    let addr = config.bind_address();
    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(l) => l,
        Err(e) => {
            eprintln!("✗ Failed to bind to {}: {}", addr, e);
            eprintln!("  Try a different port with --port <PORT>");
            std::process::exit(1);
        }
    };

    println!();
    println!("  Repo Reflect");
    println!("  Server:  http://{}", addr);
    println!("  Backend: {}", backend_name);
    println!();
    println!("  Press Ctrl+C to stop");
    println!();

    let shutdown = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
        println!("\n  Shutting down...");
    };

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;

    Ok(())
}
