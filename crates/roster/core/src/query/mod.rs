//! Listing primitives: filter predicates, sort orders, and page requests.

mod filter;
mod order;
mod page;

pub use filter::{Criterion, PlayerFilter, PlayerPredicate};
pub use order::PlayerOrder;
pub use page::{DEFAULT_PAGE_NUMBER, DEFAULT_PAGE_SIZE, PageRequest, PageSizeError};
