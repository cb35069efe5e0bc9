//! Ticket reconciliation: classify the payload, correlate a batch element
//! with the submitted message, fold every element into durable history, and
//! select the record to display.

use chrono::Local;
use serde_json::Value;

use crate::classify::{classify, Payload, DEFAULT_BYPASS_REASON};
use crate::error::CoreError;
use crate::history::HistoryStore;
use crate::types::{DisplaySummary, Outcome, ResultRecord, Ticket, TriageResponse};

/// Reply text returned whenever the workflow bypassed analysis.
pub const BYPASS_REPLY: &str = "Manual review required.";

/// Reply text returned when dispatch or reconciliation fails outright.
pub const FAILURE_REPLY: &str = "Failed to connect to n8n.";

/// Number of leading message characters used for batch correlation.
const FINGERPRINT_LEN: usize = 20;

/// Reconciles a raw workflow payload against the submitted ticket.
///
/// Bypassed payloads leave history untouched. Batch payloads append one
/// history row per element (newest first) and persist the merged table
/// before returning; the displayed record is the last element whose
/// `summary`/`Review` text contains the message fingerprint, falling back
/// to the last element of the batch when nothing matches.
///
/// # Errors
///
/// Returns [`CoreError`] only if persisting the merged history fails; no
/// partial write happens in that case.
pub fn reconcile(
    ticket: &Ticket,
    raw: Value,
    store: &dyn HistoryStore,
) -> Result<TriageResponse, CoreError> {
    let items = match classify(raw) {
        Payload::Bypassed { reason } => {
            tracing::info!(source = %ticket.source, reason = %reason, "analysis bypassed by workflow");
            return Ok(TriageResponse {
                outcome: Outcome::Bypassed { reason },
                reply: BYPASS_REPLY.to_string(),
                history: store.load(),
            });
        }
        Payload::Batch(items) => items,
    };

    let fallback_source = ticket.source.to_string();
    let records: Vec<ResultRecord> = items
        .iter()
        .map(|item| ResultRecord::from_raw(item, &fallback_source))
        .collect();

    let Some(last) = records.last() else {
        // classify never emits an empty batch; treat as a bypass if it does.
        return Ok(TriageResponse {
            outcome: Outcome::Bypassed {
                reason: DEFAULT_BYPASS_REASON.to_string(),
            },
            reply: BYPASS_REPLY.to_string(),
            history: store.load(),
        });
    };

    // Last match wins; kept for compatibility with the upstream workflow's
    // batched responses (first-match may have been the intended semantic).
    let fingerprint = fingerprint(&ticket.message);
    let target = records
        .iter()
        .rev()
        .find(|record| record.match_text.to_lowercase().contains(&fingerprint));

    let timestamp = Local::now().format("%Y-%m-%d %H:%M").to_string();
    let mut merged: Vec<_> = records
        .iter()
        .map(|record| record.to_history_entry(&timestamp))
        .collect();
    let prior = store.load();
    let prior_len = prior.len();
    merged.extend(prior);
    store.save(&merged)?;

    tracing::info!(
        batch = records.len(),
        matched = target.is_some(),
        history = merged.len(),
        prior = prior_len,
        "batch reconciled"
    );

    let selected = target.unwrap_or(last);
    Ok(TriageResponse {
        outcome: Outcome::Analyzed(DisplaySummary::from_record(selected)),
        reply: selected.suggested_response.clone(),
        history: merged,
    })
}

/// First 20 characters of the message, lower-cased, for best-effort
/// correlation against the batch's `summary`/`Review` text.
fn fingerprint(message: &str) -> String {
    message
        .chars()
        .take(FINGERPRINT_LEN)
        .collect::<String>()
        .to_lowercase()
}
