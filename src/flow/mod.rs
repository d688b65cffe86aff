//! Shipment status flow.
//!
//! Pure functions over the linear flow:
//!
//! - **Transitions**: which moves are valid and which statuses come next
//! - **History filtering**: statuses already used and the remaining candidates
//! - **Progress**: percentage complete and step indicator state
//!
//! None of these functions fail. A status outside the linear flow is an
//! expected input (it is how `Exception` is represented) and maps to the
//! documented defaults.

mod progress;
mod transition;

pub use progress::{status_progress, step_state, StepState};
pub use transition::{
    available_statuses, has_status_been_used, is_status_skipped, is_valid_status_transition,
    next_valid_statuses, used_statuses,
};
