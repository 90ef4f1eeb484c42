//! Channel registry
//!
//! The registry maps channel (room) names to broadcast queues and routes
//! messages from publishers to streaming subscribers.
//!
//! # Architecture
//!
//! ```text
//!                        Arc<ChannelRegistry>
//!                   ┌────────────────────────────┐
//!                   │ channels: HashMap<Name,    │
//!                   │   ChannelEntry {           │
//!                   │     queue: Arc<Queue>,     │
//!                   │   }                        │
//!                   │ >                          │
//!                   └─────────────┬──────────────┘
//!                                 │
//!         ┌───────────────────────┼───────────────────────┐
//!         │                       │                       │
//!         ▼                       ▼                       ▼
//!    [Publisher]             [Subscriber]            [Subscriber]
//!    POST /s/                reader.read()           reader.read()
//!         │                       │                       │
//!         └──► registry.publish() ──► SSE event ──────► client
//! ```
//!
//! # Zero-Copy Design
//!
//! Messages are stored as `bytes::Bytes`. Every reader clones the value out
//! of the shared node, which only bumps a reference count.

pub mod channel;
pub mod config;
pub mod entry;
pub mod error;
pub mod store;

pub use channel::ChannelName;
pub use config::RegistryConfig;
pub use entry::{ChannelEntry, ChannelStats};
pub use error::RegistryError;
pub use store::ChannelRegistry;
