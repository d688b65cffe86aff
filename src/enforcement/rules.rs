//! Enforcement rules for status updates using Validation.

use crate::core::{ShipmentStatus, ShippingEvent};
use crate::enforcement::builder::UpdateRulesBuilder;
use crate::enforcement::context::{StatusUpdate, UpdateContext};
use crate::enforcement::violations::UpdateViolation;
use crate::fields::{
    field_introduction_status, is_filled, previously_filled_data, status_fields_with_transit_type,
    ShippingInfo,
};
use crate::flow::{has_status_been_used, is_valid_status_transition};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Type alias for validation check functions
pub type UpdateCheck = Box<
    dyn Fn(&UpdateContext<'_>) -> Validation<(), NonEmptyVec<UpdateViolation>> + Send + Sync,
>;

/// Enforcement rules for status updates.
/// Uses Validation to accumulate ALL violations.
pub struct UpdateRules {
    pub(crate) check_reuse: bool,
    pub(crate) check_required_fields: bool,
    pub(crate) required_checks: Vec<UpdateCheck>,
}

impl Default for UpdateRules {
    fn default() -> Self {
        UpdateRulesBuilder::new().build()
    }
}

impl UpdateRules {
    /// Enforce all rules, accumulating ALL violations.
    ///
    /// `events` is the shipment's history and `info` its stored record; a
    /// required field captured at an earlier status is satisfied by the
    /// stored value.
    ///
    /// ```rust
    /// use shipflow::core::ShippingEvent;
    /// use shipflow::enforcement::{StatusUpdate, UpdateRules};
    /// use shipflow::fields::ShippingInfo;
    /// use shipflow::ShipmentStatus;
    ///
    /// let events = vec![ShippingEvent::new("pending")];
    /// let update = StatusUpdate::new(ShipmentStatus::Pending, ShipmentStatus::PickedUp)
    ///     .with_field("location", "Guangzhou")
    ///     .with_field("carrier", "DHL")
    ///     .with_field("trackingNumber", "TRK-001");
    ///
    /// let result = UpdateRules::default().enforce(&update, &events, &ShippingInfo::new());
    /// assert!(result.is_success());
    /// ```
    pub fn enforce(
        &self,
        update: &StatusUpdate,
        events: &[ShippingEvent],
        info: &ShippingInfo,
    ) -> Validation<(), NonEmptyVec<UpdateViolation>> {
        let context = UpdateContext {
            update,
            events,
            info,
        };
        let mut checks: Vec<Validation<(), NonEmptyVec<UpdateViolation>>> = Vec::new();

        checks.push(if is_valid_status_transition(update.from, update.to) {
            Validation::success(())
        } else {
            Validation::fail(UpdateViolation::InvalidTransition {
                from: update.from,
                to: update.to,
            })
        });

        // Exception may be raised repeatedly
        if self.check_reuse && update.to != ShipmentStatus::Exception {
            checks.push(if has_status_been_used(update.to, events) {
                Validation::fail(UpdateViolation::StatusAlreadyUsed { status: update.to })
            } else {
                Validation::success(())
            });
        }

        if self.check_required_fields {
            checks.extend(missing_required_fields(&context));
        }

        for check_fn in &self.required_checks {
            checks.push(check_fn(&context));
        }

        let result = Validation::all_vec(checks).map(|_| ());
        if result.is_failure() {
            tracing::debug!(
                from = %update.from,
                to = %update.to,
                "Status update rejected"
            );
        }
        result
    }
}

fn missing_required_fields(
    context: &UpdateContext<'_>,
) -> Vec<Validation<(), NonEmptyVec<UpdateViolation>>> {
    let update = context.update;
    status_fields_with_transit_type(update.to, update.transit_type)
        .required
        .into_iter()
        .filter(|field| !is_supplied(context, field))
        .map(|field| {
            Validation::fail(UpdateViolation::MissingRequiredField {
                status: update.to,
                field: field.to_string(),
            })
        })
        .collect()
}

/// Submitted with the update, or captured earlier for fields that are only
/// collected once. Per-event fields such as `location` must be resubmitted.
fn is_supplied(context: &UpdateContext<'_>, field: &str) -> bool {
    let submitted = context.update.fields.get(field).is_some_and(is_filled);
    let stored = field_introduction_status(field).is_some()
        && previously_filled_data(context.info, field).is_some();
    submitted || stored
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::TransitType;
    use serde_json::json;
    use ShipmentStatus::*;

    fn events(statuses: &[&str]) -> Vec<ShippingEvent> {
        statuses.iter().map(|s| ShippingEvent::new(*s)).collect()
    }

    fn info(value: serde_json::Value) -> ShippingInfo {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn enforcement_accumulates_all_violations() {
        let rules = UpdateRules::default();
        let history = events(&["pending", "picked_up", "in_transit"]);
        let update = StatusUpdate::new(PickedUp, InTransit);

        let result = rules.enforce(&update, &history, &ShippingInfo::new());

        match result {
            Validation::Failure(errors) => {
                assert_eq!(errors.len(), 2);

                let has_reuse = errors
                    .iter()
                    .any(|e| matches!(e, UpdateViolation::StatusAlreadyUsed { .. }));
                let has_missing = errors.iter().any(|e| {
                    matches!(
                        e,
                        UpdateViolation::MissingRequiredField { field, .. } if field == "location"
                    )
                });

                assert!(has_reuse);
                assert!(has_missing);
            }
            Validation::Success(_) => panic!("Expected failures, got success"),
        }
    }

    #[test]
    fn skipping_ahead_is_rejected() {
        let rules = UpdateRules::default();
        let update = StatusUpdate::new(Pending, InTransit).with_field("location", "Dubai");

        let result = rules.enforce(&update, &events(&["pending"]), &ShippingInfo::new());

        match result {
            Validation::Failure(errors) => {
                assert!(errors.iter().any(|e| *e
                    == UpdateViolation::InvalidTransition {
                        from: Pending,
                        to: InTransit
                    }));
            }
            Validation::Success(_) => panic!("Expected failures, got success"),
        }
    }

    #[test]
    fn transit_fields_are_required_for_chosen_mode() {
        let rules = UpdateRules::default();
        let update = StatusUpdate::new(PickedUp, InTransit)
            .with_transit_type(TransitType::Sea)
            .with_field("location", "Shanghai")
            .with_field("containerNumber", "MSCU1234567");

        let history = events(&["pending", "picked_up"]);
        let result = rules.enforce(&update, &history, &ShippingInfo::new());

        match result {
            Validation::Failure(errors) => {
                assert_eq!(errors.len(), 1);
                assert!(errors.iter().any(|e| matches!(
                    e,
                    UpdateViolation::MissingRequiredField { field, .. } if field == "billOfLading"
                )));
            }
            Validation::Success(_) => panic!("Expected failures, got success"),
        }
    }

    #[test]
    fn stored_values_satisfy_fields_collected_once() {
        let rules = UpdateRules::default();
        let record = info(json!({
            "recipient_name": "Amina",
            "recipient_phone": "+255700000000",
            "location": "Warehouse A",
        }));
        let history = events(&["pending", "ready_for_inventory"]);

        let with_location = StatusUpdate::new(ReadyForInventory, Received)
            .with_field("location", "Warehouse A");
        assert!(rules.enforce(&with_location, &history, &record).is_success());

        let without_location = StatusUpdate::new(ReadyForInventory, Received);
        let result = rules.enforce(&without_location, &history, &record);
        assert!(result.is_failure());
    }

    #[test]
    fn exception_can_be_raised_again() {
        let rules = UpdateRules::default();
        let history = events(&["pending", "exception", "pending"]);
        let update = StatusUpdate::new(Pending, Exception)
            .with_field("location", "Nairobi")
            .with_field("exceptionType", "damaged")
            .with_field("exceptionDescription", "Crate crushed in handling");

        assert!(rules.enforce(&update, &history, &ShippingInfo::new()).is_success());
    }

    #[test]
    fn blank_values_do_not_satisfy_requirements() {
        let rules = UpdateRules::default();
        let update = StatusUpdate::new(Pending, PickedUp)
            .with_field("location", "  ")
            .with_field("carrier", "DHL")
            .with_field("trackingNumber", "TRK-9");

        let result = rules.enforce(&update, &events(&["pending"]), &ShippingInfo::new());
        assert!(result.is_failure());
    }

    #[test]
    fn disabled_checks_are_skipped() {
        let rules = UpdateRulesBuilder::new()
            .check_reuse(false)
            .check_required_fields(false)
            .build();
        let update = StatusUpdate::new(Pending, PickedUp);

        let history = events(&["pending", "picked_up"]);
        let result = rules.enforce(&update, &history, &ShippingInfo::new());
        assert!(result.is_success());
    }

    #[test]
    fn custom_predicate_check_works() {
        let rules = UpdateRulesBuilder::new()
            .check_required_fields(false)
            .require_pred(
                |ctx| ctx.update.to != Received || ctx.events.len() >= 3,
                "Shipment history too short to receive".to_string(),
            )
            .build();
        let update = StatusUpdate::new(ReadyForInventory, Received);

        let result = rules.enforce(&update, &events(&["pending"]), &ShippingInfo::new());

        match result {
            Validation::Failure(errors) => {
                assert!(errors
                    .iter()
                    .any(|e| matches!(e, UpdateViolation::CustomCheckFailed { .. })));
            }
            Validation::Success(_) => panic!("Expected failures, got success"),
        }
    }

    #[test]
    fn custom_validation_check_works() {
        let rules = UpdateRulesBuilder::new()
            .require(|ctx: &UpdateContext<'_>| {
                if ctx.update.fields.contains_key("notes") {
                    Validation::success(())
                } else {
                    Validation::fail(UpdateViolation::CustomCheckFailed {
                        message: "Notes are mandatory".to_string(),
                    })
                }
            })
            .build();
        let update = StatusUpdate::new(Pending, PickedUp)
            .with_field("location", "Guangzhou")
            .with_field("carrier", "DHL")
            .with_field("trackingNumber", "TRK-001");

        let result = rules.enforce(&update, &events(&["pending"]), &ShippingInfo::new());
        assert!(result.is_failure());

        let with_notes = update.with_field("notes", "two pallets");
        let result = rules.enforce(&with_notes, &events(&["pending"]), &ShippingInfo::new());
        assert!(result.is_success());
    }
}
