//! Route handlers: `/api/fetch-website`.
//!
//! The endpoint mirrors the resolver's two-tier contract: missing or
//! malformed input is the only way to get a non-200 response. Unreachable
//! targets still produce a 200 carrying fallback metadata, so the consuming
//! UI always has something to render.

use std::sync::Arc;

use axum::Router;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Json;
use serde::{Deserialize, Serialize};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::state::AppState;

/// Build the application router.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/fetch-website", get(fetch_website))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Query parameters for `GET /api/fetch-website`.
#[derive(Debug, Deserialize)]
pub struct FetchWebsiteParams {
    url: Option<String>,
}

/// Error body for input-tier failures.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    error: String,
}

async fn fetch_website(
    State(state): State<Arc<AppState>>,
    Query(params): Query<FetchWebsiteParams>,
) -> Response {
    let Some(url) = params.url else {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorBody {
                error: "URL is required".to_string(),
            }),
        )
            .into_response();
    };

    match state.resolver.resolve(&url).await {
        Ok(metadata) => {
            info!("Resolved {} -> {}", url, metadata.title);
            Json(metadata).into_response()
        }
        Err(err) => (
            StatusCode::BAD_REQUEST,
            Json(ErrorBody {
                error: err.to_string(),
            }),
        )
            .into_response(),
    }
}
