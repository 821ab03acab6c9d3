//! HTTP API Protocol
//!
//! Route paths and the JSON envelopes returned by the handlers.

use crate::store::types::Record;
use serde::Serialize;

// --- API Endpoints ---

/// Multipart CSV upload.
pub const ENDPOINT_FILES: &str = "/api/files";
/// Listing and substring search over the uploaded rows.
pub const ENDPOINT_USERS: &str = "/api/users";

/// Largest request body accepted by the upload route (10 MiB).
pub const MAX_UPLOAD_BYTES: usize = 10_485_760;

// --- Data Transfer Objects ---

/// `{"message": "..."}`, used for every non-data response.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// `{"data": [...]}`, borrowing the records straight from the store.
#[derive(Debug, Serialize)]
pub struct DataResponse<'a> {
    pub data: Vec<&'a Record>,
}
