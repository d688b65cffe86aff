//! Validation-based enforcement for status updates.
//!
//! Before a status update is persisted the caller can run it through
//! [`UpdateRules`], which uses Stillwater's `Validation` type to report
//! every problem at once: an invalid transition, a status already recorded
//! in the history, and each missing required field.
//!
//! # Example
//!
//! ```rust
//! use shipflow::core::ShippingEvent;
//! use shipflow::enforcement::{StatusUpdate, UpdateRulesBuilder, UpdateViolation};
//! use shipflow::fields::ShippingInfo;
//! use shipflow::ShipmentStatus;
//! use stillwater::validation::Validation;
//!
//! let rules = UpdateRulesBuilder::new().check_reuse(true).build();
//!
//! let events = vec![ShippingEvent::new("pending")];
//! let update = StatusUpdate::new(ShipmentStatus::Pending, ShipmentStatus::Delivered);
//!
//! match rules.enforce(&update, &events, &ShippingInfo::new()) {
//!     Validation::Failure(errors) => {
//!         assert!(errors
//!             .iter()
//!             .any(|e| matches!(e, UpdateViolation::InvalidTransition { .. })));
//!     }
//!     Validation::Success(_) => unreachable!(),
//! }
//! ```

pub mod builder;
pub mod context;
pub mod rules;
pub mod violations;

// Re-export commonly used types
pub use builder::UpdateRulesBuilder;
pub use context::{StatusUpdate, UpdateContext};
pub use rules::{UpdateCheck, UpdateRules};
pub use violations::UpdateViolation;
