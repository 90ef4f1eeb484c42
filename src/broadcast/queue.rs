//! Producer side of the broadcast queue

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use super::error::ClosedError;
use super::node::Node;
use super::reader::Reader;

/// Unbounded broadcast queue
///
/// Every [`Reader`] obtained from [`Queue::subscribe`] sees every value
/// published after it subscribed, in publish order. Publishing never waits
/// on readers.
#[derive(Debug)]
pub struct Queue<T> {
    inner: Mutex<Inner<T>>,
}

#[derive(Debug)]
struct Inner<T> {
    /// Open node the next publish fills, or the terminal node once closed
    tail: Arc<Node<T>>,
    closed: bool,
    published: u64,
}

/// Snapshot of a queue's counters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueueStats {
    /// Number of values published so far
    pub published: u64,
    /// Whether the queue has been closed
    pub closed: bool,
}

impl<T> Queue<T> {
    /// Create an empty, open queue
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner {
                tail: Node::open(),
                closed: false,
                published: 0,
            }),
        }
    }

    // The lock never spans an await or user code, so a poisoned lock still
    // guards consistent state.
    fn lock(&self) -> MutexGuard<'_, Inner<T>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Create a reader positioned after everything published so far
    ///
    /// Subscribing to a closed queue is allowed; the reader reports end of
    /// stream on its first read.
    pub fn subscribe(&self) -> Reader<T> {
        let inner = self.lock();
        Reader::new(Arc::clone(&inner.tail))
    }

    /// Append `value` and wake every reader waiting at the tail
    pub fn publish(&self, value: T) -> Result<(), ClosedError> {
        let mut inner = self.lock();
        if inner.closed {
            return Err(ClosedError);
        }

        let next = inner.tail.fill(value);
        inner.tail = next;
        inner.published += 1;
        Ok(())
    }

    /// Close the queue
    ///
    /// Readers drain what was published before the close and then see end of
    /// stream. Closing twice is a no-op.
    pub fn close(&self) {
        let mut inner = self.lock();
        if inner.closed {
            return;
        }

        inner.tail.mark_terminal();
        inner.closed = true;
    }

    /// Whether [`Queue::close`] has been called
    pub fn is_closed(&self) -> bool {
        self.lock().closed
    }

    /// Number of values published so far
    pub fn published(&self) -> u64 {
        self.lock().published
    }

    /// Counters for this queue
    pub fn stats(&self) -> QueueStats {
        let inner = self.lock();
        QueueStats {
            published: inner.published,
            closed: inner.closed,
        }
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}
