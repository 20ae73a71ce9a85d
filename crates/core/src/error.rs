use thiserror::Error;

/// Top-level error type shared by every `segbar` crate.
///
/// Only the fallible edges use it (loading configuration from disk).
/// Progress and layout operations clamp instead of failing.
#[derive(Debug, Error)]
pub enum SegbarError {
    #[error("config error: {0}")]
    Config(String),

    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

pub type Result<T, E = SegbarError> = std::result::Result<T, E>;
