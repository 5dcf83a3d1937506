use crate::icon::IconId;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The estimated icon does not exist in the host registry
    UnknownIcon { key: String, icon: IconId },
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::UnknownIcon { key, icon } => {
                write!(f, "Icon '{}' estimated for '{}' is not registered", icon, key)
            }
        }
    }
}

impl std::error::Error for Error {}
