//! In-memory repository implementation for tests and local runs.

mod players;

pub use players::InMemoryPlayerRepo;
