//! Foundation module - Shared domain primitives.
//!
//! Contains value objects and error types that form the vocabulary of the
//! clinical scoring domain.

mod errors;
mod risk_percent;
mod stability_index;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use risk_percent::RiskPercent;
pub use stability_index::StabilityIndex;
