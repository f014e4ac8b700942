//! Player persistence and business operations.
//!
//! This crate wires the pure `roster-core` domain to a store and exposes the
//! operations the HTTP surface calls. Consumers construct a [`PlayerService`]
//! over any [`PlayerRepository`] and invoke it once per request.
//!
//! Modules are organized by responsibility:
//! - [`service`] hosts the player operations (list, count, create, read, update, delete)
//! - [`api`] exposes the error type surfaced to callers
//! - [`repository`] provides the store contract and its in-memory and file implementations
pub mod api;
pub mod repository;
pub mod service;

pub use api::{Result, ServiceError};
pub use repository::{
    FilePlayerRepository, InMemoryPlayerRepo, PlayerRepository, PlayerTable, RepositoryError,
};
pub use service::PlayerService;
