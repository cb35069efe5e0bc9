use thiserror::Error;

/// Errors returned by the n8n webhook dispatcher.
#[derive(Debug, Error)]
pub enum N8nError {
    /// Network or TLS failure, or a non-2xx HTTP status from the webhook.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The webhook URL could not be parsed.
    #[error("invalid webhook URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    /// The response body was not valid JSON.
    #[error("JSON decode error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },
}
