//! Validation errors raised while building or merging player records.
//!
//! Two kinds exist and they are checked in a fixed order: required-ness first
//! (creation only), then field format (creation and update).

use thiserror::Error;

/// Caller-supplied player field, named as it appears on the wire.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[strum(serialize_all = "camelCase")]
pub enum Field {
    Name,
    Title,
    Race,
    Profession,
    Birthday,
    Experience,
}

/// Rejection of a player payload or merged record.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A field required at creation time was absent.
    #[error("missing required field `{0}`")]
    MissingField(Field),

    /// A field is present but violates its length, range, or date bounds.
    #[error("invalid `{field}`: {reason}")]
    InvalidFormat { field: Field, reason: &'static str },
}

impl ValidationError {
    pub const fn invalid(field: Field, reason: &'static str) -> Self {
        Self::InvalidFormat { field, reason }
    }

    /// Field the error refers to.
    pub const fn field(&self) -> Field {
        match self {
            Self::MissingField(field) => *field,
            Self::InvalidFormat { field, .. } => *field,
        }
    }
}
