//! Public runtime API surface.
//!
//! Gathers the error types exposed to consumers so the service and store
//! modules can stay focused on their own concerns.

pub mod errors;

pub use errors::{Result, ServiceError};
