//! Core triage logic for the support-ticket analysis relay.
//!
//! Classifies the loosely-structured JSON returned by the n8n analysis
//! workflow, correlates batch results with the submitted message, folds
//! outcomes into the persisted CSV history, and derives the presentation
//! attributes (tone, emoji, color) for the latest result.

pub mod classify;
pub mod config;
pub mod error;
pub mod history;
pub mod presentation;
pub mod reconcile;
pub mod types;

pub use classify::{classify, Payload, DEFAULT_BYPASS_REASON};
pub use config::{load_config, ConfigError, TriageConfig};
pub use error::CoreError;
pub use history::{CsvHistoryStore, HistoryStore};
pub use presentation::Tone;
pub use reconcile::{reconcile, BYPASS_REPLY, FAILURE_REPLY};
pub use types::{DisplaySummary, HistoryEntry, Outcome, ResultRecord, Source, Ticket, TriageResponse};
