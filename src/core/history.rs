//! Shipment event history.
//!
//! Provides immutable tracking of shipping events over time, following
//! functional programming principles. The engine only ever reads events.

use super::status::ShipmentStatus;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use uuid::Uuid;

/// Record of a single shipping event.
///
/// `status` is kept as the raw string supplied by the persistence layer;
/// it may hold legacy labels or unknown values.
///
/// # Example
///
/// ```rust
/// use shipflow::core::{ShipmentStatus, ShippingEvent};
///
/// let event = ShippingEvent::new("shipped").at("Mombasa port");
///
/// assert_eq!(event.resolved_status(), Some(ShipmentStatus::InTransit));
/// assert_eq!(event.location.as_deref(), Some("Mombasa port"));
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ShippingEvent {
    /// Unique event identifier
    pub id: Uuid,
    /// Status string as stored
    pub status: String,
    /// When the event occurred
    pub timestamp: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl ShippingEvent {
    /// Create an event stamped with the current time.
    pub fn new(status: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            status: status.into(),
            timestamp: Utc::now(),
            location: None,
            notes: None,
        }
    }

    /// Create an event for a canonical status.
    pub fn for_status(status: ShipmentStatus) -> Self {
        Self::new(status.as_str())
    }

    pub fn at(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// The event's status resolved through the alias table, or `None` when
    /// the stored string is not a recognised status.
    pub fn resolved_status(&self) -> Option<ShipmentStatus> {
        ShipmentStatus::resolve(&self.status)
    }
}

/// Ordered history of shipping events for one shipment.
///
/// History is immutable - the `record` method returns a new history
/// with the event added.
///
/// # Example
///
/// ```rust
/// use shipflow::core::{ShipmentStatus, ShippingEvent, ShippingHistory};
///
/// let history = ShippingHistory::new()
///     .record(ShippingEvent::for_status(ShipmentStatus::Pending))
///     .record(ShippingEvent::for_status(ShipmentStatus::PickedUp));
///
/// assert_eq!(history.events().len(), 2);
/// assert_eq!(history.current_status(), Some(ShipmentStatus::PickedUp));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ShippingHistory {
    events: Vec<ShippingEvent>,
}

impl ShippingHistory {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Record an event, returning a new history.
    ///
    /// The existing history is left untouched.
    pub fn record(&self, event: ShippingEvent) -> Self {
        let mut events = self.events.clone();
        events.push(event);
        Self { events }
    }

    /// Get all events in recorded order.
    pub fn events(&self) -> &[ShippingEvent] {
        &self.events
    }

    pub fn latest(&self) -> Option<&ShippingEvent> {
        self.events.last()
    }

    /// Status of the most recent event, normalized.
    ///
    /// Returns `None` for an empty history.
    pub fn current_status(&self) -> Option<ShipmentStatus> {
        self.latest().map(|event| ShipmentStatus::normalize(&event.status))
    }

    /// Recognised statuses in recorded order, unknown strings skipped.
    pub fn get_path(&self) -> Vec<ShipmentStatus> {
        self.events
            .iter()
            .filter_map(ShippingEvent::resolved_status)
            .collect()
    }

    /// Elapsed time between the first and last event.
    ///
    /// Returns `None` if there are no events, or if the events are
    /// recorded out of chronological order.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.events.first(), self.events.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }
}

impl From<Vec<ShippingEvent>> for ShippingHistory {
    fn from(events: Vec<ShippingEvent>) -> Self {
        Self { events }
    }
}

impl AsRef<[ShippingEvent]> for ShippingHistory {
    fn as_ref(&self) -> &[ShippingEvent] {
        &self.events
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_history_is_empty() {
        let history = ShippingHistory::new();
        assert!(history.events().is_empty());
        assert!(history.get_path().is_empty());
        assert!(history.duration().is_none());
        assert!(history.current_status().is_none());
    }

    #[test]
    fn record_is_immutable() {
        let history = ShippingHistory::new();
        let new_history = history.record(ShippingEvent::new("pending"));

        assert_eq!(history.events().len(), 0);
        assert_eq!(new_history.events().len(), 1);
    }

    #[test]
    fn get_path_skips_unknown_statuses() {
        let history = ShippingHistory::from(vec![
            ShippingEvent::new("pending"),
            ShippingEvent::new("teleported"),
            ShippingEvent::new("shipped"),
        ]);

        assert_eq!(
            history.get_path(),
            vec![ShipmentStatus::Pending, ShipmentStatus::InTransit]
        );
    }

    #[test]
    fn current_status_normalizes_latest_event() {
        let history = ShippingHistory::new()
            .record(ShippingEvent::new("pending"))
            .record(ShippingEvent::new("Shipped"));

        assert_eq!(history.current_status(), Some(ShipmentStatus::InTransit));
    }

    #[test]
    fn duration_spans_first_to_last_event() {
        let start = Utc::now();
        let history = ShippingHistory::new()
            .record(ShippingEvent::new("pending").with_timestamp(start))
            .record(
                ShippingEvent::new("picked_up").with_timestamp(start + chrono::Duration::hours(2)),
            );

        assert_eq!(history.duration(), Some(Duration::from_secs(2 * 60 * 60)));
    }

    #[test]
    fn single_event_has_duration_zero() {
        let history = ShippingHistory::new().record(ShippingEvent::new("pending"));
        assert_eq!(history.duration(), Some(Duration::from_secs(0)));
    }

    #[test]
    fn event_builders_set_fields() {
        let event = ShippingEvent::for_status(ShipmentStatus::Arrived)
            .at("Nairobi warehouse")
            .with_notes("two cartons dented");

        assert_eq!(event.status, "arrived");
        assert_eq!(event.location.as_deref(), Some("Nairobi warehouse"));
        assert_eq!(event.notes.as_deref(), Some("two cartons dented"));
    }

    #[test]
    fn event_deserializes_without_optional_fields() {
        let json = r#"{
            "id": "6f1c2a3e-9b7d-4c1e-8a55-0c2f6d4e9a10",
            "status": "in_transit",
            "timestamp": "2025-08-30T10:00:00Z"
        }"#;

        let event: ShippingEvent = serde_json::from_str(json).unwrap();
        assert_eq!(event.resolved_status(), Some(ShipmentStatus::InTransit));
        assert!(event.location.is_none());
    }

    #[test]
    fn history_serializes_correctly() {
        let history = ShippingHistory::new().record(ShippingEvent::new("pending").at("Dar"));

        let json = serde_json::to_string(&history).unwrap();
        let deserialized: ShippingHistory = serde_json::from_str(&json).unwrap();

        assert_eq!(history, deserialized);
    }
}
