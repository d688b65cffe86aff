//! Transition rules of the shipment lifecycle.

use crate::core::{ShipmentStatus, ShippingEvent, LINEAR_FLOW, SPECIAL_STATUSES};

/// Check whether a shipment may move from `from` to `to`.
///
/// - anything may move to `Exception`
/// - `Exception` may re-enter the linear flow at any status
/// - a linear status may only move to its immediate successor
///
/// ```rust
/// use shipflow::flow::is_valid_status_transition;
/// use shipflow::ShipmentStatus::*;
///
/// assert!(is_valid_status_transition(Pending, PickedUp));
/// assert!(!is_valid_status_transition(Pending, InTransit));
/// assert!(is_valid_status_transition(Delivered, Exception));
/// assert!(is_valid_status_transition(Exception, Arrived));
/// ```
pub fn is_valid_status_transition(from: ShipmentStatus, to: ShipmentStatus) -> bool {
    if to.is_special() {
        return true;
    }
    if from.is_special() {
        return to.is_linear();
    }
    next_valid_statuses(from).contains(&to)
}

/// Statuses a shipment may move to next.
///
/// For a linear status: its successor (if any) followed by `Exception`.
/// For a status outside the linear flow the whole linear flow is offered.
pub fn next_valid_statuses(current: ShipmentStatus) -> Vec<ShipmentStatus> {
    if !current.is_linear() {
        return LINEAR_FLOW.to_vec();
    }

    let mut next: Vec<ShipmentStatus> = current.successor().into_iter().collect();
    next.extend(SPECIAL_STATUSES);
    next
}

/// Distinct recognised statuses present in the history, in first-seen order.
///
/// Legacy aliases count as their canonical status; unrecognised strings
/// are ignored.
pub fn used_statuses(events: &[ShippingEvent]) -> Vec<ShipmentStatus> {
    let mut used = Vec::new();
    for status in events.iter().filter_map(ShippingEvent::resolved_status) {
        if !used.contains(&status) {
            used.push(status);
        }
    }
    used
}

pub fn has_status_been_used(status: ShipmentStatus, events: &[ShippingEvent]) -> bool {
    events
        .iter()
        .any(|event| event.resolved_status() == Some(status))
}

/// Next valid statuses minus the ones already recorded.
///
/// This is the candidate set to present when picking the next transition.
///
/// ```rust
/// use shipflow::core::ShippingEvent;
/// use shipflow::flow::available_statuses;
/// use shipflow::ShipmentStatus;
///
/// let events = vec![ShippingEvent::new("pending"), ShippingEvent::new("picked_up")];
///
/// assert_eq!(
///     available_statuses(ShipmentStatus::PickedUp, &events),
///     vec![ShipmentStatus::InTransit, ShipmentStatus::Exception]
/// );
/// ```
pub fn available_statuses(
    current: ShipmentStatus,
    events: &[ShippingEvent],
) -> Vec<ShipmentStatus> {
    let used = used_statuses(events);
    next_valid_statuses(current)
        .into_iter()
        .filter(|status| !used.contains(status))
        .collect()
}

/// Whether `status` lies behind `current` in the linear flow yet never
/// appears in the history.
pub fn is_status_skipped(
    status: ShipmentStatus,
    current: ShipmentStatus,
    events: &[ShippingEvent],
) -> bool {
    match (status.position(), current.position()) {
        (Some(status_pos), Some(current_pos)) if status_pos < current_pos => {
            !has_status_been_used(status, events)
        }
        _ => false,
    }
}
