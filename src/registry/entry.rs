//! Channel entry and statistics types

use std::sync::Arc;
use std::time::{Duration, Instant};

use bytes::Bytes;

use crate::broadcast::{Queue, Reader};

/// Entry for a single channel in the registry
#[derive(Debug)]
pub struct ChannelEntry {
    /// Broadcast queue carrying the channel's messages
    queue: Arc<Queue<Bytes>>,

    /// When the channel was created
    pub created_at: Instant,
}

impl ChannelEntry {
    pub(super) fn new() -> Self {
        Self {
            queue: Arc::new(Queue::new()),
            created_at: Instant::now(),
        }
    }

    /// Shared handle to the channel's queue
    pub fn queue(&self) -> &Arc<Queue<Bytes>> {
        &self.queue
    }

    pub(super) fn subscribe(&self) -> Reader<Bytes> {
        self.queue.subscribe()
    }

    pub(super) fn stats(&self) -> ChannelStats {
        let queue = self.queue.stats();
        ChannelStats {
            published: queue.published,
            closed: queue.closed,
            age: self.created_at.elapsed(),
        }
    }
}

/// Statistics for a channel
#[derive(Debug, Clone)]
pub struct ChannelStats {
    /// Messages published to the channel
    pub published: u64,
    /// Whether the channel's queue has been closed
    pub closed: bool,
    /// Time since the channel was created
    pub age: Duration,
}
