//! Progress metrics derived from a status' position in the linear flow.

use crate::core::{ShipmentStatus, LINEAR_FLOW};
use serde::{Deserialize, Serialize};

/// Percentage of the linear flow completed at `status`.
///
/// `Pending` is 0 and `Received` is 100. Statuses outside the linear flow
/// report 0: an exception neither advances nor regresses progress.
///
/// ```rust
/// use shipflow::flow::status_progress;
/// use shipflow::ShipmentStatus;
///
/// assert_eq!(status_progress(ShipmentStatus::Pending), 0);
/// assert_eq!(status_progress(ShipmentStatus::InTransit), 29);
/// assert_eq!(status_progress(ShipmentStatus::Received), 100);
/// assert_eq!(status_progress(ShipmentStatus::Exception), 0);
/// ```
pub fn status_progress(status: ShipmentStatus) -> u8 {
    let Some(position) = status.position() else {
        return 0;
    };
    let last = (LINEAR_FLOW.len() - 1) as f64;
    (position as f64 / last * 100.0).round() as u8
}

/// How a step of the progress indicator relates to the current status.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepState {
    Complete,
    Current,
    Upcoming,
}

/// Classify `step` against the shipment's `current` status.
pub fn step_state(current: ShipmentStatus, step: ShipmentStatus) -> StepState {
    if current == step {
        StepState::Current
    } else if status_progress(current) > status_progress(step) {
        StepState::Complete
    } else {
        StepState::Upcoming
    }
}
