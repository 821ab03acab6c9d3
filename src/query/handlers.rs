use super::engine::filter_records;
use super::types::SearchParams;
use crate::api::protocol::{DataResponse, MessageResponse};
use crate::ingest::types::INTERNAL_ERROR_MESSAGE;
use crate::store::memory::DatasetStore;
use axum::extract::Query;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::{Extension, Json};
use std::sync::Arc;

pub const NO_DATA_MESSAGE: &str = "There is not data, upload a CSV file first";

/// Query pairs are read as a plain list so repeated or unexpected keys never reject the request.
pub async fn handle_list_users(
    query: Option<Query<Vec<(String, String)>>>,
    Extension(store): Extension<Arc<DatasetStore>>,
) -> Response {
    let params = query
        .map(|Query(pairs)| SearchParams::from_pairs(pairs))
        .unwrap_or_default();
    let term = params.term();

    // Scan and encode under one lock acquisition; the guard drops before the body is written.
    let encoded = store
        .with_dataset(|dataset| {
            if dataset.is_empty() {
                return Ok(None);
            }

            let data = match term {
                Some(q) => filter_records(dataset.records(), q),
                None => dataset.records().iter().collect(),
            };
            tracing::debug!(
                "Users query q={:?}: {} of {} records",
                term,
                data.len(),
                dataset.len()
            );

            serde_json::to_vec(&DataResponse { data }).map(Some)
        })
        .await;

    match encoded {
        Ok(Some(body)) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "application/json")],
            body,
        )
            .into_response(),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(MessageResponse::new(NO_DATA_MESSAGE)),
        )
            .into_response(),
        Err(e) => {
            tracing::error!("Failed to encode users response: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(MessageResponse::new(INTERNAL_ERROR_MESSAGE)),
            )
                .into_response()
        }
    }
}
