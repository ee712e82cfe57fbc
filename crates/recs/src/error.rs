use thiserror::Error;

#[derive(Debug, Error)]
pub enum RecsError {
    #[error("recommendation endpoint is not configured")]
    Unconfigured,

    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("recommendation API error (status {status_code}): {message}")]
    Api { status_code: u16, message: String },

    #[error("failed to decode recommendation response at {path}: {source}")]
    Json {
        path: String,
        source: serde_json::Error,
    },
}
