//! HTTP surface for the player roster.
//!
//! # Architecture
//!
//! ```text
//! roster (binary)
//!   ├─→ config     (environment → ServerConfig)
//!   ├─→ logging    (tracing subscriber: stderr + optional file)
//!   ├─→ bootstrap  (StoreConfig → PlayerService over a repository)
//!   └─→ http       (axum router → PlayerService)
//! ```
//!
//! The binary is the composition root; everything it assembles is exposed
//! here so integration tests can drive the router without a socket.

pub mod bootstrap;
pub mod config;
pub mod http;
pub mod logging;

pub use bootstrap::build_service;
pub use config::{LoggingConfig, ServerConfig, StoreConfig, StoreKind};
pub use http::router;
