use std::fmt;

/// Result type for rolodex-client operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the client layer
#[derive(Debug)]
pub enum Error {
    /// Transport-level failure (connection refused, DNS, etc.)
    Http(reqwest::Error),

    /// The server answered but reported failure; carries the server's
    /// `error` text verbatim, or the operation's default message
    Api(String),

    /// The list response matched neither the envelope nor the bare-array
    /// fallback
    UnexpectedShape(String),

    /// The base URL could not be parsed or extended with a path segment
    BaseUrl(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Http(err) => write!(f, "HTTP error: {}", err),
            Error::Api(msg) => write!(f, "{}", msg),
            Error::UnexpectedShape(msg) => write!(f, "Unexpected response format: {}", msg),
            Error::BaseUrl(msg) => write!(f, "Invalid API base URL: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Http(err) => Some(err),
            Error::Api(_) | Error::UnexpectedShape(_) | Error::BaseUrl(_) => None,
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Http(err)
    }
}
