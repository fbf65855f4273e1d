use thiserror::Error;

/// Failure while talking to or reading a review source. None of these are
/// fatal to ingestion; the coordinator degrades to the remaining sources.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{source_name} returned HTTP {status}")]
    Status { source_name: String, status: u16 },

    #[error("{source_name} returned a malformed payload: {reason}")]
    MalformedPayload { source_name: String, reason: String },

    #[error("failed to read seed data: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse seed data: {0}")]
    Parse(#[from] serde_json::Error),
}
