use std::fmt;

/// Result type for soundbrowser-types operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the types layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Grid dimensions outside the supported range
    InvalidLayout(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidLayout(msg) => write!(f, "Invalid grid layout: {}", msg),
        }
    }
}

impl std::error::Error for Error {}
