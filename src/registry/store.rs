//! Channel registry implementation
//!
//! Maps channel names to their broadcast queues. Channels are created on
//! first use, by either a publisher or a subscriber, and live for the rest of
//! the process.

use std::collections::HashMap;
use std::sync::Arc;

use bytes::Bytes;
use tokio::sync::RwLock;

use crate::broadcast::{Queue, Reader};

use super::channel::ChannelName;
use super::config::RegistryConfig;
use super::entry::{ChannelEntry, ChannelStats};
use super::error::RegistryError;

/// Central registry for all channels
///
/// Thread-safe via `RwLock`. Lookups of existing channels only take the read
/// lock; the write lock is taken once per channel, to create it.
#[derive(Debug)]
pub struct ChannelRegistry {
    /// Map of channel name to channel entry
    channels: RwLock<HashMap<ChannelName, ChannelEntry>>,

    /// Configuration
    config: RegistryConfig,
}

impl ChannelRegistry {
    /// Create a new registry with default configuration
    pub fn new() -> Self {
        Self::with_config(RegistryConfig::default())
    }

    /// Create a new registry with custom configuration
    pub fn with_config(config: RegistryConfig) -> Self {
        Self {
            channels: RwLock::new(HashMap::new()),
            config,
        }
    }

    /// Get the registry configuration
    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// Validate a channel name against this registry's limits
    pub fn channel_name(&self, name: &str) -> Result<ChannelName, RegistryError> {
        ChannelName::parse(name, self.config.max_name_len)
    }

    /// Get the queue for `name`, creating the channel if it does not exist
    pub async fn get_or_create(&self, name: &ChannelName) -> Arc<Queue<Bytes>> {
        if let Some(entry) = self.channels.read().await.get(name) {
            return Arc::clone(entry.queue());
        }

        let mut channels = self.channels.write().await;
        let entry = channels.entry(name.clone()).or_insert_with(|| {
            tracing::info!(room = %name, "Channel created");
            ChannelEntry::new()
        });
        Arc::clone(entry.queue())
    }

    /// Publish a message to a channel, creating the channel if needed
    pub async fn publish(&self, name: &ChannelName, message: Bytes) -> Result<(), RegistryError> {
        let len = message.len();
        let queue = self.get_or_create(name).await;
        queue
            .publish(message)
            .map_err(|e| RegistryError::closed(name, e))?;

        tracing::debug!(room = %name, bytes = len, "Message published");
        Ok(())
    }

    /// Subscribe to a channel, creating the channel if needed
    ///
    /// The reader sees only messages published after this call.
    pub async fn subscribe(&self, name: &ChannelName) -> Reader<Bytes> {
        if let Some(entry) = self.channels.read().await.get(name) {
            return entry.subscribe();
        }

        let queue = self.get_or_create(name).await;
        queue.subscribe()
    }

    /// Close a channel's queue
    ///
    /// Subscribers drain what was already published and then see end of
    /// stream; further publishes fail. Returns `false` if the channel does not
    /// exist.
    pub async fn close(&self, name: &ChannelName) -> bool {
        match self.channels.read().await.get(name) {
            Some(entry) => {
                entry.queue().close();
                tracing::info!(room = %name, "Channel closed");
                true
            }
            None => false,
        }
    }

    /// Check if a channel exists
    pub async fn channel_exists(&self, name: &ChannelName) -> bool {
        self.channels.read().await.contains_key(name)
    }

    /// Get channel statistics
    pub async fn channel_stats(&self, name: &ChannelName) -> Option<ChannelStats> {
        self.channels.read().await.get(name).map(ChannelEntry::stats)
    }

    /// Get total number of channels
    pub async fn channel_count(&self) -> usize {
        self.channels.read().await.len()
    }
}

impl Default for ChannelRegistry {
    fn default() -> Self {
        Self::new()
    }
}
