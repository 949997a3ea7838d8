//! Validation outcome type.

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use super::DomainError;

/// Outcome of checking a record: valid, or invalid with a reason.
///
/// Validators return this rather than an error so callers can show the
/// reason and carry on rendering whatever is still usable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validation {
    Valid,
    Invalid { reason: String },
}

impl Validation {
    /// Build an invalid outcome.
    pub fn invalid(reason: impl Into<String>) -> Self {
        Validation::Invalid {
            reason: reason.into(),
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, Validation::Valid)
    }

    /// Returns the reason if invalid.
    pub fn reason(&self) -> Option<&str> {
        match self {
            Validation::Valid => None,
            Validation::Invalid { reason } => Some(reason),
        }
    }

    /// Convert into a `Result`, mapping an invalid outcome to
    /// [`DomainError::DataInvalid`] with the same reason.
    pub fn into_result(self) -> Result<(), DomainError> {
        match self {
            Validation::Valid => Ok(()),
            Validation::Invalid { reason } => Err(DomainError::DataInvalid(reason)),
        }
    }
}

/// Serializes as `{"isValid": true}` or `{"isValid": false, "reason": "..."}`.
impl Serialize for Validation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Validation::Valid => {
                let mut s = serializer.serialize_struct("Validation", 1)?;
                s.serialize_field("isValid", &true)?;
                s.end()
            }
            Validation::Invalid { reason } => {
                let mut s = serializer.serialize_struct("Validation", 2)?;
                s.serialize_field("isValid", &false)?;
                s.serialize_field("reason", reason)?;
                s.end()
            }
        }
    }
}
