use crate::error::CollectionError;
use crate::service::SharedCollectionService;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use tower_http::trace::TraceLayer;
use tracing::error;

pub fn create_router(service: SharedCollectionService) -> Router {
    Router::new()
        .route("/album", get(random_album))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(service)
}

fn collection_error_to_response(err: CollectionError) -> Response {
    error!("Failed to pick an album: {err}");
    let body = serde_json::json!({ "error": err.to_string() });
    (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
}

/// Sync with Discogs, then return one random album from the snapshot
async fn random_album(State(service): State<SharedCollectionService>) -> Response {
    match service.random_album().await {
        Ok(pick) => Json(pick).into_response(),
        Err(err) => collection_error_to_response(err),
    }
}

async fn health() -> &'static str {
    "ok"
}
