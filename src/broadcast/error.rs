//! Broadcast queue error types

/// Error returned when publishing into a closed queue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClosedError;

impl std::fmt::Display for ClosedError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Publishing to a closed queue")
    }
}

impl std::error::Error for ClosedError {}

/// Error returned by a non-blocking read
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TryReadError {
    /// Nothing has been published past the reader's position yet
    Empty,
}

impl std::fmt::Display for TryReadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TryReadError::Empty => write!(f, "No value available yet"),
        }
    }
}

impl std::error::Error for TryReadError {}
