//! Unbounded broadcast queue
//!
//! A [`Queue`] is a growing chain of nodes. Publishing fills the open tail
//! node, links a fresh open node behind it and raises the filled node's
//! [`Signal`], releasing every [`Reader`] parked on it at once. Each reader
//! then clones the value and steps its own cursor forward, independently of
//! every other reader.
//!
//! ```text
//!   Reader A          Reader B               Queue.tail
//!      │                 │                       │
//!      ▼                 ▼                       ▼
//!  [Filled 1] ──► [Filled 2] ──► [Filled 3] ──► [Open]
//! ```
//!
//! Nodes are reference counted. A node is freed once every reader has moved
//! past it and the queue no longer holds it as tail. There is no
//! backpressure: a reader that stops reading keeps the whole chain from its
//! position onward alive.
//!
//! Closing marks the tail terminal instead of filling it. The terminal node
//! stays the queue's tail, so readers that subscribe after the close see end
//! of stream right away.

pub mod error;
mod node;
pub mod queue;
pub mod reader;
pub mod signal;

pub use error::{ClosedError, TryReadError};
pub use queue::{Queue, QueueStats};
pub use reader::Reader;
pub use signal::Signal;
