//! HTTP wrapper around the analysis engine.
//!
//! A thin integration shape for publishing pipelines that prefer a service
//! boundary over linking the core crate: `POST /analyze` takes
//! `{title, content, keyword}` and returns the JSON-serialized analysis
//! result. The engine itself is synchronous, so each request runs on the
//! blocking pool.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use tracing::{debug, warn};

use copygate_core::{ContentAnalysisResult, ContentAnalyzer, MemoryCorpus, Thresholds};

/// Shared state for request handlers.
#[derive(Clone)]
pub struct AppState {
    corpus: Arc<MemoryCorpus>,
    thresholds: Thresholds,
    max_input_bytes: Option<usize>,
}

impl AppState {
    /// Bundle the corpus and engine settings for the router.
    pub fn new(corpus: MemoryCorpus, thresholds: Thresholds, max_input_bytes: Option<usize>) -> Self {
        Self {
            corpus: Arc::new(corpus),
            thresholds,
            max_input_bytes,
        }
    }
}

/// Analysis request body.
#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    /// Article title.
    pub title: String,
    /// Article body (markup allowed).
    pub content: String,
    /// Primary keyword.
    pub keyword: String,
}

/// Build the API router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/analyze", post(analyze_handler))
        .with_state(state)
}

async fn health_handler() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

async fn analyze_handler(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<ContentAnalysisResult>, StatusCode> {
    if let Some(max) = state.max_input_bytes
        && request.content.len() > max
    {
        warn!(size = request.content.len(), max, "rejecting oversized analyze request");
        return Err(StatusCode::PAYLOAD_TOO_LARGE);
    }

    debug!(title = %request.title, content_len = request.content.len(), "analyze request");

    // The engine is synchronous; keep it off the async workers.
    let result = tokio::task::spawn_blocking(move || {
        let analyzer = ContentAnalyzer::new(state.corpus.as_ref(), state.thresholds.clone());
        analyzer.analyze(&request.title, &request.content, &request.keyword)
    })
    .await
    .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

    Ok(Json(result))
}
