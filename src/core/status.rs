//! Shipment status vocabulary.
//!
//! Defines the closed set of shipment statuses, the canonical linear flow,
//! the legacy alias table and the fail-soft normalization used at every
//! boundary where status strings enter the engine.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Lifecycle status of a shipment.
///
/// Eight statuses form the ordered linear flow; `Exception` sits outside it
/// and is reachable from anywhere.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShipmentStatus {
    #[default]
    Pending,
    PickedUp,
    InTransit,
    OutForDelivery,
    Delivered,
    Arrived,
    ReadyForInventory,
    Received,
    Exception,
}

/// The canonical progress ordering. Position in this array drives next-status,
/// progress and skip detection.
pub const LINEAR_FLOW: [ShipmentStatus; 8] = [
    ShipmentStatus::Pending,
    ShipmentStatus::PickedUp,
    ShipmentStatus::InTransit,
    ShipmentStatus::OutForDelivery,
    ShipmentStatus::Delivered,
    ShipmentStatus::Arrived,
    ShipmentStatus::ReadyForInventory,
    ShipmentStatus::Received,
];

/// Statuses that are reachable regardless of position.
pub const SPECIAL_STATUSES: [ShipmentStatus; 1] = [ShipmentStatus::Exception];

/// Legacy labels still found in stored shipments.
const STATUS_ALIASES: &[(&str, ShipmentStatus)] = &[("shipped", ShipmentStatus::InTransit)];

/// Error returned by the strict [`FromStr`] parse.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Unknown shipment status '{value}'")]
pub struct ParseStatusError {
    pub value: String,
}

impl ShipmentStatus {
    /// Every status, linear flow first.
    pub const ALL: [ShipmentStatus; 9] = [
        Self::Pending,
        Self::PickedUp,
        Self::InTransit,
        Self::OutForDelivery,
        Self::Delivered,
        Self::Arrived,
        Self::ReadyForInventory,
        Self::Received,
        Self::Exception,
    ];

    /// Canonical snake_case wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::PickedUp => "picked_up",
            Self::InTransit => "in_transit",
            Self::OutForDelivery => "out_for_delivery",
            Self::Delivered => "delivered",
            Self::Arrived => "arrived",
            Self::ReadyForInventory => "ready_for_inventory",
            Self::Received => "received",
            Self::Exception => "exception",
        }
    }

    /// Index in [`LINEAR_FLOW`], or `None` for special statuses.
    pub fn position(&self) -> Option<usize> {
        LINEAR_FLOW.iter().position(|s| s == self)
    }

    pub fn is_linear(&self) -> bool {
        self.position().is_some()
    }

    pub fn is_special(&self) -> bool {
        SPECIAL_STATUSES.contains(self)
    }

    /// The immediate successor in the linear flow.
    pub fn successor(&self) -> Option<ShipmentStatus> {
        self.position().and_then(|i| LINEAR_FLOW.get(i + 1).copied())
    }

    /// Resolve a status string through the alias table and the canonical
    /// names, without any fallback.
    ///
    /// Matching is case-insensitive and treats spaces and hyphens as
    /// underscores, so `"In Transit"` and `"in-transit"` both resolve.
    ///
    /// ```rust
    /// use shipflow::ShipmentStatus;
    ///
    /// assert_eq!(ShipmentStatus::resolve("shipped"), Some(ShipmentStatus::InTransit));
    /// assert_eq!(
///     ShipmentStatus::resolve("Out For Delivery"),
///     Some(ShipmentStatus::OutForDelivery)
/// );
    /// assert_eq!(ShipmentStatus::resolve("lost"), None);
    /// ```
    pub fn resolve(input: &str) -> Option<ShipmentStatus> {
        let key = input.trim().to_lowercase().replace([' ', '-'], "_");

        STATUS_ALIASES
            .iter()
            .find(|(alias, _)| *alias == key)
            .map(|(_, status)| *status)
            .or_else(|| Self::ALL.iter().copied().find(|s| s.as_str() == key))
    }

    /// Normalize any status string, falling back to `Pending`.
    ///
    /// Never fails. Unknown input is logged at warn level.
    ///
    /// ```rust
    /// use shipflow::ShipmentStatus;
    ///
    /// assert_eq!(ShipmentStatus::normalize("SHIPPED"), ShipmentStatus::InTransit);
    /// assert_eq!(ShipmentStatus::normalize("xyz123"), ShipmentStatus::Pending);
    /// ```
    pub fn normalize(input: &str) -> ShipmentStatus {
        Self::resolve(input).unwrap_or_else(|| {
            tracing::warn!(status = %input, "Unknown shipping status, falling back to pending");
            ShipmentStatus::Pending
        })
    }

    /// Human readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::PickedUp => "Picked Up",
            Self::InTransit => "In Transit",
            Self::OutForDelivery => "Out for Delivery",
            Self::Delivered => "Delivered",
            Self::Arrived => "Arrived",
            Self::ReadyForInventory => "Ready for Inventory",
            Self::Received => "Received",
            Self::Exception => "Exception",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Pending => "Shipment created, awaiting carrier pickup",
            Self::PickedUp => "Carrier has collected the shipment",
            Self::InTransit => "Shipment is moving between origin and destination",
            Self::OutForDelivery => "Shipment is on its final leg",
            Self::Delivered => "Carrier reports the shipment delivered",
            Self::Arrived => "Shipment arrived and ready for product validation",
            Self::ReadyForInventory => "Products validated, ready for stock intake",
            Self::Received => "Shipment received into inventory",
            Self::Exception => "Delivery exception reported",
        }
    }

    /// Icon name rendered next to the status.
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Pending => "Clock",
            Self::PickedUp => "Package",
            Self::InTransit => "Truck",
            Self::OutForDelivery => "MapPin",
            Self::Delivered => "CheckCircle",
            Self::Arrived => "Building",
            Self::ReadyForInventory => "PackageCheck",
            Self::Received => "CheckCircle",
            Self::Exception => "AlertTriangle",
        }
    }

    /// Colour tone of the status badge.
    pub fn tone(&self) -> &'static str {
        match self {
            Self::Pending => "yellow",
            Self::PickedUp => "blue",
            Self::InTransit => "purple",
            Self::OutForDelivery => "orange",
            Self::Delivered | Self::Received => "green",
            Self::Arrived => "indigo",
            Self::ReadyForInventory => "cyan",
            Self::Exception => "red",
        }
    }
}

impl fmt::Display for ShipmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Strict parse: only canonical wire names are accepted.
impl FromStr for ShipmentStatus {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| ParseStatusError {
                value: s.to_string(),
            })
    }
}

/// Normalize a status string. See [`ShipmentStatus::normalize`].
pub fn normalize_status(input: &str) -> ShipmentStatus {
    ShipmentStatus::normalize(input)
}
