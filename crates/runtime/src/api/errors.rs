//! Unified error type surfaced by the player service.
//!
//! Wraps validation failures from `roster-core` and store failures so the
//! HTTP surface can map every outcome to a status code in one place.
use roster_core::{PageSizeError, ValidationError};
use thiserror::Error;

pub use crate::repository::RepositoryError;

pub type Result<T> = std::result::Result<T, ServiceError>;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("player id must be positive, got {0}")]
    NonPositiveId(i64),

    #[error(transparent)]
    InvalidPage(#[from] PageSizeError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("player {0} not found")]
    NotFound(i64),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl ServiceError {
    /// Malformed caller input detected before touching the store.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::NonPositiveId(_) | Self::InvalidPage(_))
    }

    /// Required field absent from a creation payload.
    pub fn is_missing_field(&self) -> bool {
        matches!(self, Self::Validation(ValidationError::MissingField(_)))
    }

    /// Field present but outside its length, range or date bounds.
    pub fn is_invalid_format(&self) -> bool {
        matches!(self, Self::Validation(ValidationError::InvalidFormat { .. }))
    }

    /// Caller-caused failures; everything else is a store fault.
    pub fn is_client_error(&self) -> bool {
        !matches!(self, Self::Repository(_))
    }
}
