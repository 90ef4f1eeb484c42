//! Notification relay built on an unbounded broadcast queue
//!
//! Each named channel (room) is backed by a [`broadcast::Queue`]. Every
//! subscriber gets its own [`broadcast::Reader`] and receives every message
//! published after it joined, in publish order, while publishers never wait
//! on slow subscribers.
//!
//! ```no_run
//! use fanout_relay::{RelayServer, ServerConfig};
//!
//! #[tokio::main]
//! async fn main() -> fanout_relay::Result<()> {
//!     let server = RelayServer::new(ServerConfig::default());
//!     server.run_until(async {
//!         let _ = tokio::signal::ctrl_c().await;
//!     }).await
//! }
//! ```

pub mod broadcast;
pub mod error;
pub mod registry;
pub mod server;

pub use broadcast::{ClosedError, Queue, Reader};
pub use error::{Error, Result};
pub use registry::{ChannelName, ChannelRegistry, RegistryConfig};
pub use server::{RelayServer, ServerConfig};
