//! Core shipment lifecycle types.
//!
//! This module contains the pure vocabulary of the engine:
//! - The `ShipmentStatus` enum, its linear flow and normalization
//! - Immutable shipping event history
//!
//! All logic in this module is pure apart from the warn-level log emitted
//! when an unknown status string is normalized.

mod history;
mod status;

pub use history::{ShippingEvent, ShippingHistory};
pub use status::{
    normalize_status, ParseStatusError, ShipmentStatus, LINEAR_FLOW, SPECIAL_STATUSES,
};
