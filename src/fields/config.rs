//! Per-status field policy.

use crate::core::ShipmentStatus;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Sub-mode of the `InTransit` status.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransitType {
    Sea,
    Air,
    Ground,
}

impl TransitType {
    pub const ALL: [TransitType; 3] = [Self::Sea, Self::Air, Self::Ground];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sea => "sea",
            Self::Air => "air",
            Self::Ground => "ground",
        }
    }
}

impl fmt::Display for TransitType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Unknown transit type '{value}', expected sea, air or ground")]
pub struct ParseTransitTypeError {
    pub value: String,
}

impl FromStr for TransitType {
    type Err = ParseTransitTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sea" => Ok(Self::Sea),
            "air" => Ok(Self::Air),
            "ground" => Ok(Self::Ground),
            _ => Err(ParseTransitTypeError {
                value: s.to_string(),
            }),
        }
    }
}

/// Fields collected when a shipment enters a status.
///
/// A field never appears in both `required` and `optional`.
/// `transit_specific` lists the subset of fields contributed by the
/// transit type; it is empty outside `InTransit`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct StatusFieldConfig {
    pub required: Vec<&'static str>,
    pub optional: Vec<&'static str>,
    pub transit_specific: Vec<&'static str>,
    pub description: &'static str,
}

impl StatusFieldConfig {
    fn base(
        required: &[&'static str],
        optional: &[&'static str],
        description: &'static str,
    ) -> Self {
        Self {
            required: required.to_vec(),
            optional: optional.to_vec(),
            transit_specific: Vec::new(),
            description,
        }
    }

    /// Config returned for status names the engine does not recognise.
    pub fn fallback() -> Self {
        Self::base(&["location"], &["notes"], "Status update")
    }

    pub fn is_required(&self, field: &str) -> bool {
        self.required.iter().any(|f| *f == field)
    }

    pub fn is_optional(&self, field: &str) -> bool {
        self.optional.iter().any(|f| *f == field)
    }

    /// Required fields first, then optional ones.
    pub fn all_fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.required.iter().chain(self.optional.iter()).copied()
    }

    fn layer(mut self, layer: TransitLayer) -> Self {
        self.required.extend_from_slice(layer.required);
        self.optional.extend_from_slice(layer.optional);
        self.transit_specific = layer
            .required
            .iter()
            .chain(layer.optional.iter())
            .copied()
            .collect();
        self
    }
}

struct TransitLayer {
    required: &'static [&'static str],
    optional: &'static [&'static str],
}

const SEA_LAYER: TransitLayer = TransitLayer {
    required: &["containerNumber", "billOfLading"],
    optional: &[],
};

const AIR_LAYER: TransitLayer = TransitLayer {
    required: &["selectedAgentId", "cargoType"],
    optional: &[
        "itemDescription",
        "quantity",
        "receiptNumber",
        "extraTransportCost",
        "unitPrice",
        "totalCost",
    ],
};

const GROUND_LAYER: TransitLayer = TransitLayer {
    required: &["departureTerminal", "arrivalTerminal"],
    optional: &["routeNumber"],
};

fn transit_layer(transit_type: TransitType) -> TransitLayer {
    match transit_type {
        TransitType::Sea => SEA_LAYER,
        TransitType::Air => AIR_LAYER,
        TransitType::Ground => GROUND_LAYER,
    }
}

/// Static field policy of a status.
///
/// ```rust
/// use shipflow::fields::status_fields;
/// use shipflow::ShipmentStatus;
///
/// let config = status_fields(ShipmentStatus::Received);
/// assert_eq!(config.required, vec!["location", "recipientName", "recipientPhone"]);
/// ```
pub fn status_fields(status: ShipmentStatus) -> StatusFieldConfig {
    use ShipmentStatus::*;

    match status {
        Pending => StatusFieldConfig::base(
            &[],
            &["notes", "estimatedDelivery"],
            "Shipment created, awaiting carrier pickup",
        ),
        PickedUp => StatusFieldConfig::base(
            &["location", "carrier", "trackingNumber"],
            &["notes", "estimatedDelivery"],
            "Record the carrier and tracking number at pickup",
        ),
        InTransit => StatusFieldConfig::base(
            &["location"],
            &["notes", "estimatedDelivery", "packageCount", "totalCbm"],
            "Record transit details for the chosen transport mode",
        ),
        OutForDelivery => StatusFieldConfig::base(
            &["location"],
            &["notes", "estimatedDelivery"],
            "Shipment dispatched on its final leg",
        ),
        Delivered => StatusFieldConfig::base(
            &["location"],
            &["notes"],
            "Carrier confirms delivery",
        ),
        Arrived => StatusFieldConfig::base(
            &["location"],
            &["notes", "arrivalCondition"],
            "Record the condition of the shipment on arrival",
        ),
        ReadyForInventory => StatusFieldConfig::base(
            &["location"],
            &["notes", "validatedBy"],
            "Products validated and ready for stock intake",
        ),
        Received => StatusFieldConfig::base(
            &["location", "recipientName", "recipientPhone"],
            &["notes"],
            "Record who received the shipment into inventory",
        ),
        Exception => StatusFieldConfig::base(
            &["location", "exceptionType", "exceptionDescription"],
            &["notes", "expectedResolution"],
            "Describe the delivery exception",
        ),
    }
}

/// Field policy of a status, with transit fields layered on for `InTransit`.
///
/// Every other status ignores `transit_type`.
///
/// ```rust
/// use shipflow::fields::{status_fields_with_transit_type, TransitType};
/// use shipflow::ShipmentStatus;
///
/// let sea = status_fields_with_transit_type(ShipmentStatus::InTransit, Some(TransitType::Sea));
/// assert!(sea.is_required("containerNumber"));
/// assert!(!sea.all_fields().any(|f| f == "selectedAgentId"));
/// ```
pub fn status_fields_with_transit_type(
    status: ShipmentStatus,
    transit_type: Option<TransitType>,
) -> StatusFieldConfig {
    let config = status_fields(status);
    match (status, transit_type) {
        (ShipmentStatus::InTransit, Some(transit_type)) => {
            config.layer(transit_layer(transit_type))
        }
        _ => config,
    }
}

/// Field policy looked up by status name.
///
/// Names are normalized through the alias table. Unrecognised names get
/// [`StatusFieldConfig::fallback`] and a warning.
pub fn status_fields_for_name(status: &str) -> StatusFieldConfig {
    match ShipmentStatus::resolve(status) {
        Some(status) => status_fields(status),
        None => {
            tracing::warn!(status = %status, "No field config for status, using default");
            StatusFieldConfig::fallback()
        }
    }
}
