//! HTTP dispatcher for the n8n analysis workflow.
//!
//! Posts submitted tickets to the configured webhook and hands the decoded
//! JSON back untouched. Shape validation is deliberately left to the
//! reconciler; this crate only distinguishes transport success from failure.

pub mod client;
pub mod error;

pub use client::N8nClient;
pub use error::N8nError;
