//! Error types for gravity resolution.

use crate::registry::FieldId;
use core::fmt;

/// Errors that can occur when managing gravity fields.
///
/// Resolution itself never fails: malformed configuration is clamped at
/// construction time and degenerate geometry evaluates to zero force.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GravityError {
    /// The field handle does not refer to a registered field.
    UnknownField { id: FieldId },
}

impl fmt::Display for GravityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GravityError::UnknownField { id } => {
                write!(f, "field {:?} is not registered", id)
            }
        }
    }
}
