use thiserror::Error;

#[derive(Debug, Error)]
pub enum MatchError {
    /// Input validation: callers must ask for at least one result.
    #[error("top_k must be at least 1 (got {0})")]
    InvalidTopK(usize),

    /// A single candidate record the batch loop skips with a warning.
    #[error("malformed candidate record '{filename}': {reason}")]
    MalformedCandidate { filename: String, reason: String },

    #[error("failed to serialize match results: {0}")]
    Export(#[from] serde_json::Error),
}
