//! Domain error types.
//!
//! These errors are raised when the comparator or planner is called on data
//! that fails validation, or when a caller passes a malformed time. The
//! validators themselves report through [`Validation`](super::Validation)
//! instead.

/// Domain-level errors for data validation and caller input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// Fare or timetable data is malformed
    #[error("invalid data: {0}")]
    DataInvalid(String),

    /// A caller-supplied value is not in the expected format
    #[error("{field} must be HH:mm format (got {value:?})")]
    InputFormatInvalid { field: &'static str, value: String },
}

impl DomainError {
    /// Returns the human-readable reason, without the error kind prefix.
    pub fn reason(&self) -> String {
        match self {
            DomainError::DataInvalid(reason) => reason.clone(),
            DomainError::InputFormatInvalid { .. } => self.to_string(),
        }
    }
}
