//! Read-only derivation for previously collected fields.
//!
//! Logistics data is captured once, at the status that introduces it. In
//! any later status a filled value is shown read-only.

use super::config::{status_fields_with_transit_type, TransitType};
use crate::core::ShipmentStatus;
use serde_json::{Map, Value};

/// Stored shipping record keyed by snake_case column name.
pub type ShippingInfo = Map<String, Value>;

/// Form field name to storage column.
const FIELD_COLUMNS: &[(&str, &str)] = &[
    ("carrier", "carrier_name"),
    ("trackingNumber", "tracking_number"),
    ("estimatedDelivery", "estimated_delivery"),
    ("containerNumber", "container_number"),
    ("billOfLading", "bill_of_lading"),
    ("selectedAgentId", "shipping_agent_id"),
    ("cargoType", "cargo_type"),
    ("itemDescription", "item_description"),
    ("quantity", "quantity"),
    ("receiptNumber", "receipt_number"),
    ("extraTransportCost", "extra_transport_cost"),
    ("unitPrice", "unit_price"),
    ("totalCost", "total_cost"),
    ("departureTerminal", "departure_terminal"),
    ("arrivalTerminal", "arrival_terminal"),
    ("routeNumber", "route_number"),
    ("packageCount", "package_count"),
    ("totalCbm", "total_cbm"),
    ("arrivalCondition", "arrival_condition"),
    ("validatedBy", "validated_by"),
    ("recipientName", "recipient_name"),
    ("recipientPhone", "recipient_phone"),
    ("exceptionType", "exception_type"),
    ("exceptionDescription", "exception_description"),
    ("expectedResolution", "expected_resolution"),
];

/// Status at which each field is first collected.
///
/// `location` and `notes` are recorded with every event and are absent.
const FIELD_INTRODUCTIONS: &[(&str, ShipmentStatus)] = &[
    ("estimatedDelivery", ShipmentStatus::Pending),
    ("carrier", ShipmentStatus::PickedUp),
    ("trackingNumber", ShipmentStatus::PickedUp),
    ("containerNumber", ShipmentStatus::InTransit),
    ("billOfLading", ShipmentStatus::InTransit),
    ("selectedAgentId", ShipmentStatus::InTransit),
    ("cargoType", ShipmentStatus::InTransit),
    ("itemDescription", ShipmentStatus::InTransit),
    ("quantity", ShipmentStatus::InTransit),
    ("receiptNumber", ShipmentStatus::InTransit),
    ("extraTransportCost", ShipmentStatus::InTransit),
    ("unitPrice", ShipmentStatus::InTransit),
    ("totalCost", ShipmentStatus::InTransit),
    ("departureTerminal", ShipmentStatus::InTransit),
    ("arrivalTerminal", ShipmentStatus::InTransit),
    ("routeNumber", ShipmentStatus::InTransit),
    ("packageCount", ShipmentStatus::InTransit),
    ("totalCbm", ShipmentStatus::InTransit),
    ("arrivalCondition", ShipmentStatus::Arrived),
    ("validatedBy", ShipmentStatus::ReadyForInventory),
    ("recipientName", ShipmentStatus::Received),
    ("recipientPhone", ShipmentStatus::Received),
    ("exceptionType", ShipmentStatus::Exception),
    ("exceptionDescription", ShipmentStatus::Exception),
    ("expectedResolution", ShipmentStatus::Exception),
];

pub fn field_introduction_status(field: &str) -> Option<ShipmentStatus> {
    FIELD_INTRODUCTIONS
        .iter()
        .find(|(name, _)| *name == field)
        .map(|(_, status)| *status)
}

/// Storage column for a form field, or the field name itself when unmapped.
///
/// ```rust
/// use shipflow::fields::field_column;
///
/// assert_eq!(field_column("containerNumber"), "container_number");
/// assert_eq!(field_column("location"), "location");
/// ```
pub fn field_column(field: &str) -> &str {
    FIELD_COLUMNS
        .iter()
        .find(|(name, _)| *name == field)
        .map_or(field, |(_, column)| *column)
}

/// Form field for a storage column, or the column itself when unmapped.
pub fn column_field(column: &str) -> &str {
    FIELD_COLUMNS
        .iter()
        .find(|(_, col)| *col == column)
        .map_or(column, |(field, _)| *field)
}

/// Whether a stored value counts as filled in.
///
/// Null, blank strings and empty collections are empty; numbers and
/// booleans always count as filled.
pub(crate) fn is_filled(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::String(s) => !s.trim().is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
        Value::Bool(_) | Value::Number(_) => true,
    }
}

/// Value previously stored for `field`, looked up by its mapped column.
///
/// Returns `None` when the column is missing or empty.
pub fn previously_filled_data<'a>(info: &'a ShippingInfo, field: &str) -> Option<&'a Value> {
    info.get(field_column(field)).filter(|value| is_filled(value))
}

/// Whether `field` should be presented read-only at `current`.
///
/// A field is read-only when it already holds a value and the shipment
/// is past (or away from) the status that introduced it. Fields without
/// an introduction status are collected per event and stay editable.
///
/// ```rust
/// use serde_json::json;
/// use shipflow::fields::{is_field_read_only, ShippingInfo};
/// use shipflow::ShipmentStatus;
///
/// let info: ShippingInfo = json!({ "container_number": "ABC123" })
///     .as_object()
///     .cloned()
///     .unwrap();
///
/// assert!(is_field_read_only(&info, "containerNumber", ShipmentStatus::Arrived));
/// assert!(!is_field_read_only(&info, "containerNumber", ShipmentStatus::InTransit));
/// ```
pub fn is_field_read_only(info: &ShippingInfo, field: &str, current: ShipmentStatus) -> bool {
    let Some(introduced_at) = field_introduction_status(field) else {
        return false;
    };
    previously_filled_data(info, field).is_some() && introduced_at != current
}

/// Every field of the current status' form that is read-only.
pub fn read_only_fields(
    info: &ShippingInfo,
    current: ShipmentStatus,
    transit_type: Option<TransitType>,
) -> Vec<&'static str> {
    status_fields_with_transit_type(current, transit_type)
        .all_fields()
        .filter(|field| is_field_read_only(info, field, current))
        .collect()
}
