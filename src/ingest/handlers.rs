use super::parser::parse_dataset;
use super::types::{IngestError, UPLOAD_SUCCESS_MESSAGE};
use crate::api::protocol::MessageResponse;
use crate::store::memory::DatasetStore;
use axum::body::Bytes;
use axum::extract::Multipart;
use axum::extract::multipart::MultipartRejection;
use axum::http::StatusCode;
use axum::{Extension, Json};
use std::sync::Arc;

const FILE_FIELD: &str = "file";
const CSV_CONTENT_TYPE: &str = "text/csv";

pub async fn handle_upload(
    Extension(store): Extension<Arc<DatasetStore>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> (StatusCode, Json<MessageResponse>) {
    match ingest_upload(&store, multipart).await {
        Ok(count) => {
            tracing::info!("Dataset replaced with {} records", count);
            (
                StatusCode::OK,
                Json(MessageResponse::new(UPLOAD_SUCCESS_MESSAGE)),
            )
        }
        Err(e) => {
            if e.is_internal() {
                tracing::error!("Upload failed: {}", e);
            } else {
                tracing::warn!("Upload rejected: {}", e);
            }
            (e.status(), Json(MessageResponse::new(e.client_message())))
        }
    }
}

/// Reads, parses and installs an upload. Returns the number of records now served.
///
/// The store is only touched once the whole file has parsed; every early return leaves
/// the current dataset as it was.
async fn ingest_upload(
    store: &DatasetStore,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<usize, IngestError> {
    let multipart = multipart.map_err(|rejection| {
        tracing::debug!("Request is not a multipart form: {}", rejection);
        IngestError::MissingFile
    })?;

    let contents = read_csv_field(multipart).await?;
    let dataset = tokio::task::spawn_blocking(move || parse_dataset(&contents)).await??;
    let count = dataset.len();

    store.replace(dataset).await;
    Ok(count)
}

/// Finds the `file` part, checks its declared type and buffers its contents.
async fn read_csv_field(mut multipart: Multipart) -> Result<Bytes, IngestError> {
    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => return Err(IngestError::MissingFile),
            Err(e) => return Err(IngestError::from_multipart(e, false)),
        };

        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        if field.content_type() != Some(CSV_CONTENT_TYPE) {
            tracing::debug!("File part declared {:?}", field.content_type());
            return Err(IngestError::NotCsv);
        }

        return field
            .bytes()
            .await
            .map_err(|e| IngestError::from_multipart(e, true));
    }
}
