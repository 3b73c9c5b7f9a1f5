//! Patient module - Input record and clinical bounds.

mod bounds;
mod vector;

pub use bounds::{bounds_for, FieldBounds, FIELD_BOUNDS};
pub use vector::PatientVector;
