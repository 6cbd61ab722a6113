use std::path::PathBuf;

use thiserror::Error;

/// Failure of a single text backend on a single file. Never leaves the
/// source adapter: callers get placeholder text instead.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("io error reading {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{backend} failed: {message}")]
    Backend { backend: &'static str, message: String },

    #[error("{backend} produced no usable text ({chars} chars)")]
    TooShort { backend: &'static str, chars: usize },

    #[error("no text backend configured")]
    Unavailable,
}

#[derive(Debug, Error)]
pub enum CacheError {
    #[error("cannot read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed JSON in {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
