//! HTTP relay server
//!
//! Thin glue between HTTP clients and the channel registry: publishers post
//! JSON messages, subscribers hold a server-sent events stream open per room.

pub mod config;
pub mod handlers;
pub mod listener;
pub mod routes;
pub mod shutdown;

pub use config::{parse_bind_addr, ServerConfig};
pub use listener::RelayServer;
pub use shutdown::{Shutdown, ShutdownSignal};
