//! Query Service Module
//!
//! Serves the uploaded rows, either whole or narrowed by a search term.
//!
//! ## Responsibilities
//! - **Matching**: Case-insensitive substring test of the term against every value of a record.
//! - **Filtering**: Keeps matching records once each, in upload order.
//! - **API**: The `GET /api/users` handler, which scans and encodes under the store lock.
//!
//! ## Submodules
//! - **`engine`**: Pure matching/filtering over a slice of records.
//! - **`handlers`**: HTTP request handler for the Axum web server.
//! - **`types`**: Query-string parameters.

pub mod engine;
pub mod handlers;
pub mod types;
