//! HTTP API Module
//!
//! Wires the ingest and query handlers into an Axum `Router`.
//!
//! - **`POST /api/files`**: Multipart CSV upload, body capped at `MAX_UPLOAD_BYTES`.
//! - **`GET /api/users`**: Full listing, or substring search with `?q=`.
//!
//! The `DatasetStore` is injected as an `Extension`, so each router (and each test) owns
//! an isolated dataset.

pub mod protocol;


use crate::ingest::handlers::handle_upload;
use crate::query::handlers::handle_list_users;
use crate::store::memory::DatasetStore;
use axum::extract::{DefaultBodyLimit, MatchedPath};
use axum::http::Request;
use axum::routing::{get, post};
use axum::{Extension, Router};
use protocol::{ENDPOINT_FILES, ENDPOINT_USERS, MAX_UPLOAD_BYTES};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub fn router(store: Arc<DatasetStore>) -> Router {
    Router::new()
        .route(
            ENDPOINT_FILES,
            post(handle_upload).layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES)),
        )
        .route(ENDPOINT_USERS, get(handle_list_users))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &Request<_>| {
                let matched_path = request
                    .extensions()
                    .get::<MatchedPath>()
                    .map(MatchedPath::as_str);

                tracing::info_span!(
                    "http_request",
                    method = ?request.method(),
                    matched_path,
                )
            }),
        )
        .layer(Extension(store))
}
