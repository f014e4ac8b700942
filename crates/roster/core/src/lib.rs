//! Player domain shared by the roster runtime and server.
//!
//! `roster-core` defines the canonical player record, the closed race and
//! profession sets, the filter predicates and sort orders used for listing,
//! and the pure progression formulas. Nothing here performs I/O; stores and
//! the HTTP surface depend on the types re-exported below.
pub mod error;
pub mod player;
pub mod progression;
pub mod query;
pub mod validate;

pub use error::{Field, ValidationError};
pub use player::{NewPlayer, Player, PlayerId, PlayerPatch, Profession, Race};
pub use progression::{current_level, until_next_level};
pub use query::{
    Criterion, DEFAULT_PAGE_NUMBER, DEFAULT_PAGE_SIZE, PageRequest, PageSizeError, PlayerFilter,
    PlayerOrder, PlayerPredicate,
};
