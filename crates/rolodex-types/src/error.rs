use std::fmt;

/// Result type for rolodex-types operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the types layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A required contact field was empty after trimming
    EmptyField(&'static str),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::EmptyField(field) => write!(f, "{} must not be empty", field),
        }
    }
}

impl std::error::Error for Error {}
