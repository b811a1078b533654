use thiserror::Error;

/// Failure of a single evaluation strategy. Never surfaced past the fallback.
#[derive(Debug, Error)]
pub enum EvaluationError {
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("remote evaluation returned status {status}: {body}")]
    Api { status: u16, body: String },

    #[error("remote evaluation returned invalid response: {0}")]
    InvalidResponse(String),
}
