//! Builder API for creating update enforcement rules.

use crate::enforcement::context::UpdateContext;
use crate::enforcement::rules::{UpdateCheck, UpdateRules};
use crate::enforcement::violations::UpdateViolation;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Builder for creating update rules.
///
/// Transition validity is always checked. Reuse and required-field checks
/// are on by default.
pub struct UpdateRulesBuilder {
    check_reuse: bool,
    check_required_fields: bool,
    required_checks: Vec<UpdateCheck>,
}

impl UpdateRulesBuilder {
    pub fn new() -> Self {
        Self {
            check_reuse: true,
            check_required_fields: true,
            required_checks: Vec::new(),
        }
    }

    /// Reject statuses already present in the history (`exception` excepted)
    pub fn check_reuse(mut self, enabled: bool) -> Self {
        self.check_reuse = enabled;
        self
    }

    /// Reject updates missing a required field of the target status
    pub fn check_required_fields(mut self, enabled: bool) -> Self {
        self.check_required_fields = enabled;
        self
    }

    /// Add a custom validation check
    pub fn require<F>(mut self, check: F) -> Self
    where
        F: Fn(&UpdateContext<'_>) -> Validation<(), NonEmptyVec<UpdateViolation>>
            + Send
            + Sync
            + 'static,
    {
        self.required_checks.push(Box::new(check));
        self
    }

    /// Add a simple predicate check with error message
    pub fn require_pred<F>(mut self, predicate: F, error_msg: String) -> Self
    where
        F: Fn(&UpdateContext<'_>) -> bool + Send + Sync + 'static,
    {
        let check = move |ctx: &UpdateContext<'_>| {
            if predicate(ctx) {
                Validation::success(())
            } else {
                Validation::fail(UpdateViolation::CustomCheckFailed {
                    message: error_msg.clone(),
                })
            }
        };
        self.required_checks.push(Box::new(check));
        self
    }

    /// Build the update rules
    pub fn build(self) -> UpdateRules {
        UpdateRules {
            check_reuse: self.check_reuse,
            check_required_fields: self.check_required_fields,
            required_checks: self.required_checks,
        }
    }
}

impl Default for UpdateRulesBuilder {
    fn default() -> Self {
        Self::new()
    }
}
