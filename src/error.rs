//! Crate-level error types

use crate::broadcast::ClosedError;
use crate::registry::RegistryError;

/// Error type for relay operations
#[derive(Debug)]
pub enum Error {
    /// I/O failure (signal handlers, sockets)
    Io(std::io::Error),
    /// HTTP server failed to start
    Http(warp::Error),
    /// Registry operation failed
    Registry(RegistryError),
    /// Publish into a closed queue
    Closed(ClosedError),
    /// Bind address could not be parsed
    InvalidAddress(String),
}

/// Result alias using the crate error
pub type Result<T> = std::result::Result<T, Error>;

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O error: {}", e),
            Error::Http(e) => write!(f, "HTTP server error: {}", e),
            Error::Registry(e) => write!(f, "Registry error: {}", e),
            Error::Closed(e) => write!(f, "{}", e),
            Error::InvalidAddress(addr) => write!(
                f,
                "Invalid bind address: '{}'. Expected format: IP:PORT or IP or 'localhost'",
                addr
            ),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            Error::Http(e) => Some(e),
            Error::Registry(e) => Some(e),
            Error::Closed(e) => Some(e),
            Error::InvalidAddress(_) => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Io(e)
    }
}

impl From<warp::Error> for Error {
    fn from(e: warp::Error) -> Self {
        Error::Http(e)
    }
}

impl From<RegistryError> for Error {
    fn from(e: RegistryError) -> Self {
        Error::Registry(e)
    }
}

impl From<ClosedError> for Error {
    fn from(e: ClosedError) -> Self {
        Error::Closed(e)
    }
}
