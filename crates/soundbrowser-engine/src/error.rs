use std::fmt;

/// Result type for soundbrowser-engine operations
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
    /// A single affordance could not be built; the page carries on without it
    AffordanceConstruction {
        key: String,
        source: soundbrowser_core::Error,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::AffordanceConstruction { key, source } => {
                write!(f, "Failed to build affordance for '{}': {}", key, source)
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::AffordanceConstruction { source, .. } => Some(source),
        }
    }
}
