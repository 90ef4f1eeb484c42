//! Registry configuration

/// Default upper bound on channel name length, in bytes
pub const DEFAULT_MAX_NAME_LEN: usize = 256;

/// Configuration for the channel registry
#[derive(Debug, Clone)]
pub struct RegistryConfig {
    /// Longest accepted channel name, in bytes
    pub max_name_len: usize,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            max_name_len: DEFAULT_MAX_NAME_LEN,
        }
    }
}

impl RegistryConfig {
    /// Set the longest accepted channel name
    pub fn max_name_len(mut self, len: usize) -> Self {
        self.max_name_len = len;
        self
    }
}
