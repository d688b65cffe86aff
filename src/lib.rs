//! Shipflow: a pure functional shipment status-flow engine
//!
//! Shipflow models the lifecycle of a purchase-order shipment as a small,
//! stateless state machine. Callers hand in the current status and the
//! shipment's event history and get back derived answers: which statuses
//! may come next, which form fields to collect, which fields are already
//! final, and how far along the shipment is.
//!
//! # Core Concepts
//!
//! - **Status**: closed `ShipmentStatus` enum with a canonical linear flow
//!   and an always-reachable `Exception`
//! - **Flow**: single-step forward transitions, history-aware candidates,
//!   progress percentages
//! - **Fields**: per-status required/optional fields, transit-mode layering,
//!   read-only derivation for data captured earlier
//! - **Enforcement**: accumulate every violation of a proposed update
//!
//! Engine queries never fail. Unknown status strings degrade to `Pending`
//! with a warning logged through `tracing`.
//!
//! # Example
//!
//! ```rust
//! use shipflow::core::ShippingEvent;
//! use shipflow::flow::{available_statuses, status_progress};
//! use shipflow::{normalize_status, ShipmentStatus};
//!
//! let current = normalize_status("shipped");
//! assert_eq!(current, ShipmentStatus::InTransit);
//!
//! let events = vec![
//!     ShippingEvent::new("pending"),
//!     ShippingEvent::new("picked_up"),
//!     ShippingEvent::new("shipped"),
//! ];
//!
//! assert_eq!(
//!     available_statuses(current, &events),
//!     vec![ShipmentStatus::OutForDelivery, ShipmentStatus::Exception]
//! );
//! assert_eq!(status_progress(current), 29);
//! ```

pub mod core;
pub mod enforcement;
pub mod fields;
pub mod flow;

// Re-export commonly used types
pub use self::core::{normalize_status, ShipmentStatus, ShippingEvent, ShippingHistory};
pub use fields::{StatusFieldConfig, TransitType};
