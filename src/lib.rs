//! CSV Search Service Library
//!
//! Core modules of a small HTTP service that loads a CSV upload into memory and searches it.
//! The binary (`main.rs`) only parses configuration, sets up logging and serves `api::router`.
//!
//! ## Modules
//! - **`store`**: The mutex-guarded holder of the current dataset (`DatasetStore`) and the
//!   `Record`/`Dataset` model.
//! - **`ingest`**: The upload pipeline. Validates the multipart part, parses the CSV and
//!   replaces the dataset in one step.
//! - **`query`**: Listing and case-insensitive substring search over the dataset.
//! - **`api`**: Route table, body limit, request tracing and response envelopes.
//! - **`config`**: Command-line and environment configuration.

pub mod api;
pub mod config;
pub mod ingest;
pub mod query;
pub mod store;
