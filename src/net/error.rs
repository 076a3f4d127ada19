#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Failure to load a JSON data file.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("request for {path} failed: {message}")]
    Transport { path: String, message: String },
    #[error("failed to load {path}: HTTP {status}")]
    Status { path: String, status: u16 },
    #[error("malformed JSON in {path}: {message}")]
    Parse { path: String, message: String },
    #[error("cannot fetch {path} outside the browser")]
    Unavailable { path: String },
}

impl FetchError {
    pub fn path(&self) -> &str {
        match self {
            Self::Transport { path, .. }
            | Self::Status { path, .. }
            | Self::Parse { path, .. }
            | Self::Unavailable { path } => path,
        }
    }
}
