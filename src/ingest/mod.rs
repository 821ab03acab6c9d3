//! Ingestion Service Module
//!
//! Turns an uploaded CSV file into the service's dataset.
//!
//! ## Workflow
//! 1. **Receive**: Pulls the `file` part out of the multipart body and checks its content type.
//! 2. **Parse**: Reads the header and every data row with the `csv` reader. Any malformed row
//!    aborts the upload.
//! 3. **Replace**: Hands the finished `Dataset` to the store in a single swap, so a failed
//!    upload never touches the rows already being served.

pub mod handlers;
pub mod parser;
pub mod types;
