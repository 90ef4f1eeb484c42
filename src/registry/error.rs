//! Registry error types

use crate::broadcast::ClosedError;

use super::channel::ChannelName;

/// Error type for registry operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// Channel name failed validation
    InvalidName(String),
    /// Channel queue has been closed
    ChannelClosed(ChannelName),
}

impl std::fmt::Display for RegistryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RegistryError::InvalidName(name) => write!(f, "Invalid channel name: {:?}", name),
            RegistryError::ChannelClosed(name) => write!(f, "Channel closed: {}", name),
        }
    }
}

impl std::error::Error for RegistryError {}

impl RegistryError {
    pub(super) fn closed(name: &ChannelName, _: ClosedError) -> Self {
        RegistryError::ChannelClosed(name.clone())
    }
}
