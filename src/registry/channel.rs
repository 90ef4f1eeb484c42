//! Channel names
//!
//! A channel (room) is identified by a plain name. Names are validated once,
//! at the boundary, so the registry and the queues behind it never see a
//! malformed one.

use super::error::RegistryError;

/// Validated channel name
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ChannelName(String);

impl ChannelName {
    /// Validate `name` as a channel name
    ///
    /// A name must be non-empty, must not contain `/` and must be at most
    /// `max_len` bytes long.
    pub fn parse(name: &str, max_len: usize) -> Result<Self, RegistryError> {
        if name.is_empty() || name.contains('/') || name.len() > max_len {
            return Err(RegistryError::InvalidName(name.to_string()));
        }
        Ok(Self(name.to_string()))
    }

    /// Name as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ChannelName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ChannelName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
