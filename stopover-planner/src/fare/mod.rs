//! Fare checks and the direct-versus-stopover comparison.
//!
//! The validator reports problems as a [`Validation`](crate::domain::Validation)
//! so callers can display them; the comparator re-validates and fails with
//! [`DomainError::DataInvalid`](crate::domain::DomainError) because it may be
//! called on its own.

mod compare;
mod validate;

pub use compare::{Cheaper, ComparisonResult, compare_fare};
pub use validate::validate_fare_master;
