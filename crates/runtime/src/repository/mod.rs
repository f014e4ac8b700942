//! Repository layer for player records.
//!
//! Repositories own the persisted players and evaluate listing predicates:
//! - [`InMemoryPlayerRepo`] keeps everything in process memory
//! - [`FilePlayerRepository`] adds a JSON snapshot written after every change
//!
//! Both share [`PlayerTable`], so filtering, ordering and paging behave the same.

mod error;
mod file;
mod memory;
mod table;
mod traits;

pub use error::{RepositoryError, Result};
pub use file::FilePlayerRepository;
pub use memory::InMemoryPlayerRepo;
pub use table::PlayerTable;
pub use traits::PlayerRepository;
