//! The update under enforcement and the context checks receive.

use crate::core::{ShipmentStatus, ShippingEvent};
use crate::fields::{ShippingInfo, TransitType};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A proposed status change together with the form data submitted with it.
///
/// `fields` is keyed by form field name (`containerNumber`, not
/// `container_number`).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StatusUpdate {
    pub from: ShipmentStatus,
    pub to: ShipmentStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transit_type: Option<TransitType>,
    #[serde(default)]
    pub fields: Map<String, Value>,
}

impl StatusUpdate {
    pub fn new(from: ShipmentStatus, to: ShipmentStatus) -> Self {
        Self {
            from,
            to,
            transit_type: None,
            fields: Map::new(),
        }
    }

    pub fn with_transit_type(mut self, transit_type: TransitType) -> Self {
        self.transit_type = Some(transit_type);
        self
    }

    pub fn with_field(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(field.into(), value.into());
        self
    }
}

/// Context provided to enforcement checks
#[derive(Clone, Copy, Debug)]
pub struct UpdateContext<'a> {
    pub update: &'a StatusUpdate,
    pub events: &'a [ShippingEvent],
    pub info: &'a ShippingInfo,
}
