//! Shape classification for the workflow's raw JSON payload.
//!
//! The n8n workflow answers in one of three shapes: a single result object,
//! an array of result objects, or a `{"error": ...}` object when its false
//! branch ran. Classification is checked in order, first match wins, and
//! happens before any field-level normalization.

use serde_json::Value;

/// Reason reported when the workflow bypassed analysis without saying why.
pub const DEFAULT_BYPASS_REASON: &str = "Criteria not met or manual review required.";

/// The classified payload: either an explicit bypass or a batch of one or
/// more raw result elements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Payload {
    Bypassed { reason: String },
    Batch(Vec<Value>),
}

/// Classifies a raw payload.
///
/// Null, an empty array, an empty object, or an object carrying an `error`
/// key are all bypasses. Anything else is a batch: an array is used in
/// order, any other value is wrapped as a single element.
#[must_use]
pub fn classify(raw: Value) -> Payload {
    match raw {
        Value::Null => Payload::Bypassed {
            reason: DEFAULT_BYPASS_REASON.to_string(),
        },
        Value::Object(map) => {
            if let Some(err) = map.get("error") {
                Payload::Bypassed {
                    reason: error_reason(err),
                }
            } else if map.is_empty() {
                Payload::Bypassed {
                    reason: DEFAULT_BYPASS_REASON.to_string(),
                }
            } else {
                Payload::Batch(vec![Value::Object(map)])
            }
        }
        Value::Array(items) => {
            if items.is_empty() {
                Payload::Bypassed {
                    reason: DEFAULT_BYPASS_REASON.to_string(),
                }
            } else {
                Payload::Batch(items)
            }
        }
        other => Payload::Batch(vec![other]),
    }
}

/// Renders the `error` value as a reason string: strings verbatim, anything
/// else as compact JSON, null as the default reason.
fn error_reason(err: &Value) -> String {
    match err {
        Value::Null => DEFAULT_BYPASS_REASON.to_string(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn null_payload_is_bypassed_with_default_reason() {
        let payload = classify(Value::Null);
        assert_eq!(
            payload,
            Payload::Bypassed {
                reason: DEFAULT_BYPASS_REASON.to_string()
            }
        );
    }

    #[test]
    fn empty_array_is_bypassed_with_default_reason() {
        let payload = classify(json!([]));
        assert_eq!(
            payload,
            Payload::Bypassed {
                reason: DEFAULT_BYPASS_REASON.to_string()
            }
        );
    }

    #[test]
    fn empty_object_is_bypassed_with_default_reason() {
        let payload = classify(json!({}));
        assert_eq!(
            payload,
            Payload::Bypassed {
                reason: DEFAULT_BYPASS_REASON.to_string()
            }
        );
    }

    #[test]
    fn error_object_carries_its_reason() {
        let payload = classify(json!({ "error": "Not urgent" }));
        assert_eq!(
            payload,
            Payload::Bypassed {
                reason: "Not urgent".to_string()
            }
        );
    }

    #[test]
    fn error_key_wins_even_with_other_fields_present() {
        let payload = classify(json!({ "error": "skip", "sentiment_label": "Positive" }));
        assert!(matches!(payload, Payload::Bypassed { reason } if reason == "skip"));
    }

    #[test]
    fn non_string_error_value_renders_as_json() {
        let payload = classify(json!({ "error": { "code": 7 } }));
        assert!(matches!(payload, Payload::Bypassed { reason } if reason == r#"{"code":7}"#));
    }

    #[test]
    fn single_object_becomes_one_element_batch() {
        let payload = classify(json!({ "sentiment_label": "Positive" }));
        match payload {
            Payload::Batch(items) => assert_eq!(items.len(), 1),
            Payload::Bypassed { .. } => panic!("expected batch"),
        }
    }

    #[test]
    fn array_is_used_in_order() {
        let payload = classify(json!([{ "a": 1 }, { "b": 2 }, { "c": 3 }]));
        match payload {
            Payload::Batch(items) => {
                assert_eq!(items.len(), 3);
                assert_eq!(items[0], json!({ "a": 1 }));
                assert_eq!(items[2], json!({ "c": 3 }));
            }
            Payload::Bypassed { .. } => panic!("expected batch"),
        }
    }

    #[test]
    fn scalar_payload_is_wrapped_as_single_element_batch() {
        let payload = classify(json!("unexpected"));
        assert!(matches!(payload, Payload::Batch(items) if items.len() == 1));
    }
}
