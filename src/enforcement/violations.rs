//! Violations reported when enforcing a status update.

use crate::core::ShipmentStatus;
use thiserror::Error;

/// Reasons a proposed status update cannot be applied.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UpdateViolation {
    #[error("Invalid status transition from '{from}' to '{to}', status must advance one step")]
    InvalidTransition {
        from: ShipmentStatus,
        to: ShipmentStatus,
    },

    #[error("Status '{status}' has already been used and cannot be set again.")]
    StatusAlreadyUsed { status: ShipmentStatus },

    #[error("Field '{field}' is required for status '{status}'")]
    MissingRequiredField {
        status: ShipmentStatus,
        field: String,
    },

    #[error("Custom check failed: {message}")]
    CustomCheckFailed { message: String },
}
