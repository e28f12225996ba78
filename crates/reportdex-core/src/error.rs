use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum IndexError {
    #[error("cannot read report directory {path}: {reason}")]
    SourceUnavailable { path: PathBuf, reason: String },

    #[error("failed to write manifest to {path}: {reason}")]
    Write { path: PathBuf, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
