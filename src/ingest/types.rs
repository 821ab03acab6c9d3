//! Ingestion Error Types
//!
//! Every way an upload can end short of replacing the dataset. Each variant knows the
//! status code and the message the client receives; internal details stay in the logs.

use axum::extract::multipart::MultipartError;
use axum::http::StatusCode;
use thiserror::Error;

pub const UPLOAD_SUCCESS_MESSAGE: &str = "File uploaded successfully";
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

#[derive(Debug, Error)]
pub enum IngestError {
    /// No `file` part, or the body ended before one was found.
    #[error("A file must be provided")]
    MissingFile,

    /// The `file` part did not declare `text/csv`.
    #[error("The file type must be CSV")]
    NotCsv,

    /// The file has no header row.
    #[error("The file must not be empty")]
    EmptyFile,

    /// The file has a header but no data rows.
    #[error("Send a file with records")]
    NoRecords,

    /// The body exceeded the configured upload ceiling.
    #[error("Upload rejected by body limit: {0}")]
    TooLarge(String),

    /// A row could not be parsed (field count, quoting, encoding).
    #[error("Malformed CSV: {0}")]
    Malformed(#[from] csv::Error),

    /// The blocking parse task panicked or was cancelled.
    #[error("Parse task failed: {0}")]
    Worker(#[from] tokio::task::JoinError),

    /// The multipart stream failed while the file was being read.
    #[error("Failed to read uploaded file: {0}")]
    Transport(#[source] MultipartError),
}

impl IngestError {
    /// Classifies a multipart failure.
    ///
    /// `reading_file` tells whether the `file` part had already been located; before that,
    /// a broken or truncated body simply means no file was provided.
    pub fn from_multipart(err: MultipartError, reading_file: bool) -> Self {
        if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
            Self::TooLarge(err.body_text())
        } else if reading_file {
            Self::Transport(err)
        } else {
            Self::MissingFile
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::MissingFile | Self::NotCsv | Self::EmptyFile | Self::NoRecords => {
                StatusCode::BAD_REQUEST
            }
            Self::TooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            Self::Malformed(_) | Self::Worker(_) | Self::Transport(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// The text sent back in the `message` field.
    pub fn client_message(&self) -> String {
        match self {
            Self::TooLarge(message) => message.clone(),
            Self::Malformed(_) | Self::Worker(_) | Self::Transport(_) => {
                INTERNAL_ERROR_MESSAGE.to_string()
            }
            other => other.to_string(),
        }
    }

    pub fn is_internal(&self) -> bool {
        self.status().is_server_error()
    }
}
