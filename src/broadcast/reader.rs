//! Consumer side of the broadcast queue

use std::future::Future;
use std::sync::Arc;

use futures_util::stream::{self, Stream};

use super::error::TryReadError;
use super::node::{Node, Slot};

/// Independent cursor into a [`Queue`](super::Queue)
///
/// A reader holds no reference to the queue itself, only to the next node it
/// will consume. Nodes from the cursor onward stay alive as long as the reader
/// does, so a reader that stops reading retains everything published after
/// its position.
#[derive(Debug)]
pub struct Reader<T> {
    cursor: Arc<Node<T>>,
}

impl<T> Reader<T> {
    pub(crate) fn new(cursor: Arc<Node<T>>) -> Self {
        Self { cursor }
    }

    /// Future that resolves once a value or end of stream is available
    ///
    /// Consumes nothing and does not move the cursor, so it can be raced
    /// against other events and dropped at any point. A following
    /// [`Reader::read`] then completes without waiting.
    pub fn wait(&self) -> impl Future<Output = ()> + 'static
    where
        T: 'static,
    {
        let node = Arc::clone(&self.cursor);
        async move {
            node.wait_signal().await;
        }
    }

    /// Whether a [`Reader::read`] would complete without waiting
    pub fn is_ready(&self) -> bool {
        self.cursor.is_resolved()
    }
}

impl<T: Clone> Reader<T> {
    /// Read the next value, waiting if nothing has been published yet
    ///
    /// Returns `None` once the queue is closed and every earlier value has
    /// been read; further calls keep returning `None` immediately.
    /// Dropping the returned future before it completes leaves the reader
    /// unchanged.
    pub async fn read(&mut self) -> Option<T> {
        let (value, next) = match self.cursor.wait_signal().await {
            Slot::Filled { value, next } => (value.clone(), Arc::clone(next)),
            Slot::Terminal => return None,
        };
        self.cursor = next;
        Some(value)
    }

    /// Read the next value without waiting
    ///
    /// `Ok(None)` means end of stream, `Err(TryReadError::Empty)` means
    /// nothing is available yet.
    pub fn try_read(&mut self) -> Result<Option<T>, TryReadError> {
        let (value, next) = match self.cursor.peek() {
            Some(Slot::Filled { value, next }) => (value.clone(), Arc::clone(next)),
            Some(Slot::Terminal) => return Ok(None),
            None => return Err(TryReadError::Empty),
        };
        self.cursor = next;
        Ok(Some(value))
    }

    /// Turn the reader into a stream that ends with the queue
    pub fn into_stream(self) -> impl Stream<Item = T>
    where
        T: 'static,
    {
        stream::unfold(self, |mut reader| async move {
            let value = reader.read().await?;
            Some((value, reader))
        })
    }
}

impl<T> Clone for Reader<T> {
    /// Fork the reader; both copies continue from the same position
    fn clone(&self) -> Self {
        Self {
            cursor: Arc::clone(&self.cursor),
        }
    }
}
