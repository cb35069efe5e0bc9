use std::path::PathBuf;

use thiserror::Error;

/// Configuration errors for env-var loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required env var: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for env var {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

/// Runtime configuration for the triage pipeline.
#[derive(Debug, Clone)]
pub struct TriageConfig {
    /// n8n webhook endpoint the dispatcher posts tickets to.
    pub webhook_url: String,
    /// Path of the CSV history file.
    pub history_path: PathBuf,
    /// Per-request timeout for the webhook call.
    pub request_timeout_secs: u64,
}

/// Load configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if `TRIAGE_WEBHOOK_URL` is missing or a value is invalid.
pub fn load_config() -> Result<TriageConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_config_from_env()
}

/// Load configuration from environment variables already in the process.
///
/// Unlike [`load_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if `TRIAGE_WEBHOOK_URL` is missing or a value is invalid.
pub fn load_config_from_env() -> Result<TriageConfig, ConfigError> {
    build_config(|key| std::env::var(key))
}

/// Build configuration using the provided env-var lookup function.
///
/// The parsing/validation logic is decoupled from the actual environment so
/// it can be tested with a pure `HashMap` lookup, no `set_var` needed.
fn build_config<F>(lookup: F) -> Result<TriageConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let require = |var: &str| -> Result<String, ConfigError> {
        lookup(var).map_err(|_| ConfigError::MissingEnvVar(var.to_string()))
    };

    let or_default =
        |var: &str, default: &str| -> String { lookup(var).unwrap_or_else(|_| default.to_string()) };

    let webhook_url = require("TRIAGE_WEBHOOK_URL")?;
    let history_path = PathBuf::from(or_default("TRIAGE_HISTORY_PATH", "triage_history.csv"));

    let raw_timeout = or_default("TRIAGE_REQUEST_TIMEOUT_SECS", "30");
    let request_timeout_secs =
        raw_timeout
            .parse::<u64>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: "TRIAGE_REQUEST_TIMEOUT_SECS".to_string(),
                reason: e.to_string(),
            })?;

    Ok(TriageConfig {
        webhook_url,
        history_path,
        request_timeout_secs,
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Result<String, std::env::VarError> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key: &str| map.get(key).cloned().ok_or(std::env::VarError::NotPresent)
    }

    #[test]
    fn webhook_url_is_required() {
        let err = build_config(lookup_from(&[])).expect_err("should fail without webhook url");
        assert!(matches!(err, ConfigError::MissingEnvVar(var) if var == "TRIAGE_WEBHOOK_URL"));
    }

    #[test]
    fn defaults_apply_when_optional_vars_absent() {
        let config = build_config(lookup_from(&[(
            "TRIAGE_WEBHOOK_URL",
            "https://n8n.example/webhook/abc",
        )]))
        .expect("config should build");

        assert_eq!(config.webhook_url, "https://n8n.example/webhook/abc");
        assert_eq!(config.history_path, PathBuf::from("triage_history.csv"));
        assert_eq!(config.request_timeout_secs, 30);
    }

    #[test]
    fn explicit_values_override_defaults() {
        let config = build_config(lookup_from(&[
            ("TRIAGE_WEBHOOK_URL", "https://n8n.example/webhook/abc"),
            ("TRIAGE_HISTORY_PATH", "/var/lib/triage/history.csv"),
            ("TRIAGE_REQUEST_TIMEOUT_SECS", "5"),
        ]))
        .expect("config should build");

        assert_eq!(
            config.history_path,
            PathBuf::from("/var/lib/triage/history.csv")
        );
        assert_eq!(config.request_timeout_secs, 5);
    }

    #[test]
    fn non_numeric_timeout_is_rejected() {
        let err = build_config(lookup_from(&[
            ("TRIAGE_WEBHOOK_URL", "https://n8n.example/webhook/abc"),
            ("TRIAGE_REQUEST_TIMEOUT_SECS", "soon"),
        ]))
        .expect_err("should reject non-numeric timeout");

        assert!(
            matches!(err, ConfigError::InvalidEnvVar { var, .. } if var == "TRIAGE_REQUEST_TIMEOUT_SECS")
        );
    }
}
