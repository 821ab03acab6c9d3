//! Dataset Store Module
//!
//! Holds the single in-memory table built from the most recent CSV upload.
//!
//! ## Core Concepts
//! - **Record**: One CSV data row, exposed as an ordered column -> value mapping.
//! - **Dataset**: All records of one upload, sharing a single header.
//! - **DatasetStore**: The mutex-guarded owner of the current `Dataset`. Uploads replace the
//!   whole dataset in one step; queries read it under the same lock.

pub mod memory;
pub mod types;

#[cfg(test)]
mod tests;
