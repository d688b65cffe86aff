//! Field requirement policy and read-only derivation.
//!
//! For each status the engine knows which form fields must be collected,
//! which are optional, and (for `InTransit`) which depend on the transport
//! mode. Values already captured at an earlier status become read-only.

mod config;
mod readonly;

pub use config::{
    status_fields, status_fields_for_name, status_fields_with_transit_type, ParseTransitTypeError,
    StatusFieldConfig, TransitType,
};
pub(crate) use readonly::is_filled;
pub use readonly::{
    column_field, field_column, field_introduction_status, is_field_read_only,
    previously_filled_data, read_only_fields, ShippingInfo,
};
