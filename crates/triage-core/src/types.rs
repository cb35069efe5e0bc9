//! Data model for the triage pipeline.
//!
//! The n8n workflow answers with loosely-typed JSON, so [`ResultRecord`]
//! normalizes each raw element with explicit defaults instead of failing on
//! missing or oddly-typed fields. [`HistoryEntry`] is the persisted CSV row.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::presentation::Tone;

/// Maximum persisted reply length before the `"..."` suffix is applied.
const REPLY_TRUNCATE_AT: usize = 50;

/// Channel a ticket arrived on. The fixed set the intake form offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Source {
    Twitter,
    Email,
    GoogleReviews,
}

impl std::fmt::Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Source::Twitter => write!(f, "Twitter"),
            Source::Email => write!(f, "Email"),
            Source::GoogleReviews => write!(f, "Google Reviews"),
        }
    }
}

/// A submitted (source, message) pair awaiting analysis. Immutable once built.
#[derive(Debug, Clone)]
pub struct Ticket {
    pub source: Source,
    pub message: String,
}

impl Ticket {
    #[must_use]
    pub fn new(source: Source, message: impl Into<String>) -> Self {
        Self {
            source,
            message: message.into(),
        }
    }
}

/// One analysis result normalized out of a raw batch element.
///
/// Every field has a documented default so a sparse or malformed element
/// still yields a usable record rather than an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultRecord {
    pub sentiment_label: String,
    pub sentiment_score: String,
    pub suggested_response: String,
    pub source: String,
    /// Concatenated `summary` + `Review` text, used only for fingerprint
    /// matching. Empty when neither field is present.
    pub match_text: String,
}

/// Reads a field as display text: strings verbatim, other non-null values
/// as their compact JSON rendering, null/absent as `None`.
fn text_field(item: &Value, key: &str) -> Option<String> {
    match item.get(key) {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s.clone()),
        Some(other) => Some(other.to_string()),
    }
}

impl ResultRecord {
    /// Normalizes one raw batch element, substituting defaults for missing
    /// fields. `fallback_source` is the submitted ticket's source label.
    #[must_use]
    pub fn from_raw(item: &Value, fallback_source: &str) -> Self {
        let match_text = format!(
            "{}{}",
            text_field(item, "summary").unwrap_or_default(),
            text_field(item, "Review").unwrap_or_default()
        );

        Self {
            sentiment_label: text_field(item, "sentiment_label")
                .unwrap_or_else(|| "Unknown".to_string()),
            sentiment_score: text_field(item, "sentiment_score")
                .unwrap_or_else(|| "0".to_string()),
            suggested_response: text_field(item, "suggested_response")
                .unwrap_or_else(|| "No response generated.".to_string()),
            source: text_field(item, "source").unwrap_or_else(|| fallback_source.to_string()),
            match_text,
        }
    }

    /// Builds the persisted row for this record. The reply is cut at 50
    /// characters with a `"..."` suffix; shorter replies are kept whole.
    #[must_use]
    pub fn to_history_entry(&self, timestamp: &str) -> HistoryEntry {
        HistoryEntry {
            timestamp: timestamp.to_string(),
            source: self.source.clone(),
            sentiment: self.sentiment_label.clone(),
            score: self.sentiment_score.clone(),
            reply: truncate_reply(&self.suggested_response),
        }
    }
}

fn truncate_reply(reply: &str) -> String {
    if reply.chars().count() > REPLY_TRUNCATE_AT {
        let head: String = reply.chars().take(REPLY_TRUNCATE_AT).collect();
        format!("{head}...")
    } else {
        reply.to_string()
    }
}

/// One durable row of the append-only processing history.
///
/// Serde renames match the CSV header exactly: `Timestamp, Source,
/// Sentiment, Score, Reply`, newest rows first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    #[serde(rename = "Timestamp")]
    pub timestamp: String,
    #[serde(rename = "Source")]
    pub source: String,
    #[serde(rename = "Sentiment")]
    pub sentiment: String,
    #[serde(rename = "Score")]
    pub score: String,
    #[serde(rename = "Reply")]
    pub reply: String,
}

/// Display-ready view of the selected record, derived fresh per invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplaySummary {
    pub source: String,
    pub sentiment_label: String,
    pub sentiment_score: String,
    pub tone: Tone,
}

impl DisplaySummary {
    #[must_use]
    pub fn from_record(record: &ResultRecord) -> Self {
        Self {
            source: record.source.clone(),
            sentiment_label: record.sentiment_label.clone(),
            sentiment_score: record.sentiment_score.clone(),
            tone: Tone::from_label(&record.sentiment_label),
        }
    }
}

/// What a single analysis run produced for the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The workflow produced a result; show its summary.
    Analyzed(DisplaySummary),
    /// The workflow explicitly declined to analyze (its false branch).
    Bypassed { reason: String },
    /// Transport or reconciliation failed outright.
    Failed { error: String },
}

/// The three-part result every analysis path returns: an outcome, the
/// drafted reply text, and the current history table.
#[derive(Debug, Clone)]
pub struct TriageResponse {
    pub outcome: Outcome,
    pub reply: String,
    pub history: Vec<HistoryEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn from_raw_complete_element_copies_fields() {
        let item = json!({
            "sentiment_label": "Positive",
            "sentiment_score": "2",
            "suggested_response": "Glad you loved it!",
            "source": "Email",
            "summary": "fast shipping praise"
        });
        let record = ResultRecord::from_raw(&item, "Twitter");

        assert_eq!(record.sentiment_label, "Positive");
        assert_eq!(record.sentiment_score, "2");
        assert_eq!(record.suggested_response, "Glad you loved it!");
        assert_eq!(record.source, "Email");
        assert_eq!(record.match_text, "fast shipping praise");
    }

    #[test]
    fn from_raw_missing_fields_take_defaults() {
        let record = ResultRecord::from_raw(&json!({}), "Email");

        assert_eq!(record.sentiment_label, "Unknown");
        assert_eq!(record.sentiment_score, "0");
        assert_eq!(record.suggested_response, "No response generated.");
        assert_eq!(record.source, "Email");
        assert_eq!(record.match_text, "");
    }

    #[test]
    fn from_raw_non_object_element_is_all_defaults() {
        let record = ResultRecord::from_raw(&json!("garbage"), "Twitter");
        assert_eq!(record.sentiment_label, "Unknown");
        assert_eq!(record.source, "Twitter");
    }

    #[test]
    fn from_raw_numeric_score_renders_as_text() {
        let record = ResultRecord::from_raw(&json!({ "sentiment_score": 7 }), "Email");
        assert_eq!(record.sentiment_score, "7");
    }

    #[test]
    fn from_raw_null_field_is_treated_as_missing() {
        let record = ResultRecord::from_raw(&json!({ "sentiment_label": null }), "Email");
        assert_eq!(record.sentiment_label, "Unknown");
    }

    #[test]
    fn match_text_concatenates_summary_and_review() {
        let item = json!({ "summary": "abc", "Review": "def" });
        let record = ResultRecord::from_raw(&item, "Email");
        assert_eq!(record.match_text, "abcdef");
    }

    #[test]
    fn short_reply_is_persisted_whole() {
        let mut record = ResultRecord::from_raw(&json!({}), "Email");
        record.suggested_response = "short".to_string();

        let entry = record.to_history_entry("2026-01-01 10:00");
        assert_eq!(entry.reply, "short");
    }

    #[test]
    fn long_reply_is_truncated_with_ellipsis() {
        let mut record = ResultRecord::from_raw(&json!({}), "Email");
        record.suggested_response = "x".repeat(80);

        let entry = record.to_history_entry("2026-01-01 10:00");
        assert_eq!(entry.reply.chars().count(), 53);
        assert!(entry.reply.ends_with("..."));
        assert!(entry.reply.starts_with(&"x".repeat(50)));
    }

    #[test]
    fn reply_of_exactly_fifty_chars_is_not_truncated() {
        let mut record = ResultRecord::from_raw(&json!({}), "Email");
        record.suggested_response = "y".repeat(50);

        let entry = record.to_history_entry("2026-01-01 10:00");
        assert_eq!(entry.reply, "y".repeat(50));
    }

    #[test]
    fn truncation_counts_characters_not_bytes() {
        let mut record = ResultRecord::from_raw(&json!({}), "Email");
        record.suggested_response = "é".repeat(60);

        let entry = record.to_history_entry("2026-01-01 10:00");
        assert_eq!(entry.reply.chars().count(), 53);
    }

    #[test]
    fn source_labels_match_intake_channels() {
        assert_eq!(Source::Twitter.to_string(), "Twitter");
        assert_eq!(Source::Email.to_string(), "Email");
        assert_eq!(Source::GoogleReviews.to_string(), "Google Reviews");
    }
}
