use std::path::PathBuf;

/// brokenneedle error types
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Needle is empty or has no literal segment
    #[error("invalid needle {needle:?}: {reason}")]
    InvalidNeedle { needle: String, reason: String },

    /// Same needle string supplied twice
    #[error("duplicate needle: {needle:?}")]
    DuplicateNeedle { needle: String },

    /// Haystack is absent or unreadable as text
    #[error("invalid haystack: {reason}")]
    InvalidHaystack { reason: String },

    /// Configuration file not found or invalid
    #[error("config error: {message}")]
    Config {
        message: String,
        path: Option<PathBuf>,
    },

    /// Invalid command-line arguments
    #[error("argument error: {0}")]
    Argument(String),

    /// File I/O error
    #[error("io error: {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Internal error (bug)
    #[error("internal error: {0}")]
    Internal(String),
}

/// Result type using brokenneedle Error
pub type Result<T> = std::result::Result<T, Error>;

/// Process exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// At least one needle matched
    Success = 0,
    /// The run succeeded but no needle matched
    NoMatch = 1,
    /// Needle, haystack, configuration or argument error
    InputError = 2,
    /// Internal error
    InternalError = 3,
}

impl From<&Error> for ExitCode {
    fn from(err: &Error) -> Self {
        match err {
            Error::InvalidNeedle { .. }
            | Error::DuplicateNeedle { .. }
            | Error::InvalidHaystack { .. }
            | Error::Config { .. }
            | Error::Argument(_) => ExitCode::InputError,
            Error::Io { .. } => ExitCode::InputError,
            Error::Internal(_) => ExitCode::InternalError,
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
