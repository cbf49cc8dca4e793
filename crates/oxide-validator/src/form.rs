//! Form-level orchestration of field checks.

use tracing::{debug, info, warn};

use crate::error::{FormError, Result, ValidationErrors};
use crate::field::{Field, FieldSource};
use crate::render::{Effect, Greeting, Region, Renderer, Speed, Transition};
use crate::validation::Rule;
use crate::validator::{FormSurface, InputValidator};

/// Result of checking one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationOutcome {
    field: String,
    message: Option<String>,
}

impl ValidationOutcome {
    /// A passing outcome.
    pub fn valid(field: &Field) -> Self {
        Self {
            field: field.id().to_string(),
            message: None,
        }
    }

    /// A failing outcome carrying the reported message.
    pub fn invalid(field: &Field, message: impl Into<String>) -> Self {
        Self {
            field: field.id().to_string(),
            message: Some(message.into()),
        }
    }

    /// Returns the field identifier.
    pub fn field(&self) -> &str {
        &self.field
    }

    /// Returns whether the field passed.
    pub fn is_valid(&self) -> bool {
        self.message.is_none()
    }

    /// Returns the failure message, if any.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

/// Outcome of one submission attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormResult {
    outcomes: Vec<ValidationOutcome>,
}

impl FormResult {
    /// Wraps per-field outcomes, in pipeline order.
    pub fn new(outcomes: Vec<ValidationOutcome>) -> Self {
        Self { outcomes }
    }

    /// Returns whether every field passed.
    pub fn is_valid(&self) -> bool {
        self.outcomes.iter().all(ValidationOutcome::is_valid)
    }

    /// Returns all outcomes.
    pub fn outcomes(&self) -> &[ValidationOutcome] {
        &self.outcomes
    }

    /// Returns the outcome of one field.
    pub fn outcome(&self, field: &str) -> Option<&ValidationOutcome> {
        self.outcomes.iter().find(|o| o.field == field)
    }

    /// Collects the failure messages.
    pub fn errors(&self) -> ValidationErrors {
        let mut errors = ValidationErrors::new();
        for outcome in &self.outcomes {
            if let Some(message) = outcome.message() {
                errors.add(outcome.field(), message);
            }
        }
        errors
    }
}

/// A field together with its validation chain.
#[derive(Debug, Clone)]
pub struct FieldCheck {
    /// The checked field.
    pub field: Field,
    /// Rules run in order; the first failure ends the chain.
    pub rules: Vec<Rule>,
}

impl FieldCheck {
    /// Creates a check with no rules.
    pub fn new(field: Field) -> Self {
        Self {
            field,
            rules: Vec::new(),
        }
    }

    /// Appends a rule.
    #[must_use]
    pub fn rule(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }
}

/// Where the controller stands between submissions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitState {
    /// Waiting for a submit; failed attempts return here.
    Idle,
    /// The success view is shown. Terminal.
    Completed,
}

/// Drives the submit lifecycle of one form.
#[derive(Debug, Clone)]
pub struct FormController {
    validator: InputValidator,
    checks: Vec<FieldCheck>,
    greeting_field: Field,
    state: SubmitState,
}

impl FormController {
    /// Creates a controller greeting the user with `greeting_field`'s value.
    pub fn new(validator: InputValidator, greeting_field: Field) -> Self {
        Self {
            validator,
            checks: Vec::new(),
            greeting_field,
            state: SubmitState::Idle,
        }
    }

    /// Appends a field check. Checks run in the order they are added.
    #[must_use]
    pub fn check(mut self, check: FieldCheck) -> Self {
        self.checks.push(check);
        self
    }

    /// Returns the field checks.
    pub fn checks(&self) -> &[FieldCheck] {
        &self.checks
    }

    /// Returns the current state.
    pub fn state(&self) -> SubmitState {
        self.state
    }

    /// Clears indicators and messages on every field.
    pub fn reset(&self, renderer: &mut dyn Renderer) {
        for check in &self.checks {
            self.validator.clear(renderer, &check.field);
        }
    }

    /// Handles one submit.
    ///
    /// Every field is checked, even after an earlier one failed, so all
    /// errors show at once. On success the form is swapped for the greeting
    /// and the controller completes.
    pub fn submit(
        &mut self,
        values: &dyn FieldSource,
        renderer: &mut dyn Renderer,
    ) -> Result<FormResult> {
        if self.state == SubmitState::Completed {
            warn!("submit ignored: form already completed");
            return Err(FormError::AlreadyCompleted);
        }

        self.reset(renderer);

        let mut surface = FormSurface::new(values, renderer);
        let outcomes = self
            .checks
            .iter()
            .map(|check| {
                self.validator
                    .check(&mut surface, &check.field, &check.rules)
            })
            .collect();
        let result = FormResult::new(outcomes);

        if result.is_valid() {
            let name = self.validator.get_value(&surface, &self.greeting_field);
            info!(fields = self.checks.len(), "form accepted");
            show_success(surface.renderer(), &Greeting::new(name));
            self.state = SubmitState::Completed;
        } else {
            let errors = result.errors();
            info!(failed = errors.len(), "form rejected");
            debug!(%errors, "validation errors");
        }

        Ok(result)
    }
}

fn show_success(renderer: &mut dyn Renderer, greeting: &Greeting) {
    renderer.hide(Region::Container);
    renderer.hide(Region::Form);
    renderer.set_success_message(greeting);
    renderer.show(Region::Container);
    renderer.effect(Effect::Reveal {
        region: Region::Container,
        transition: Transition::Blind,
        speed: Speed::Slow,
    });
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::render::DisplayState;
    use crate::validation::LengthBounds;

    fn controller() -> FormController {
        let name = Field::new("name", "Name");
        let nick = Field::new("nick", "Nick");
        FormController::new(InputValidator::default(), name.clone())
            .check(
                FieldCheck::new(name)
                    .rule(Rule::Filled)
                    .rule(Rule::Length(LengthBounds::new(2, 5).unwrap())),
            )
            .check(FieldCheck::new(nick).rule(Rule::Filled))
    }

    fn values(name: &str, nick: &str) -> HashMap<String, String> {
        HashMap::from([
            ("name".to_string(), name.to_string()),
            ("nick".to_string(), nick.to_string()),
        ])
    }

    #[test]
    fn test_all_fields_checked_after_failure() {
        let mut form = controller();
        let mut state = DisplayState::new();

        let result = form.submit(&values("", ""), &mut state).unwrap();

        assert!(!result.is_valid());
        assert_eq!(result.errors().len(), 2);
        assert_eq!(state.message("name"), "Name is not filled");
        assert_eq!(state.message("nick"), "Nick is not filled");
        assert_eq!(form.state(), SubmitState::Idle);
    }

    #[test]
    fn test_success_transition() {
        let mut form = controller();
        let mut state = DisplayState::new();

        let result = form.submit(&values("  Al ", "al"), &mut state).unwrap();

        assert!(result.is_valid());
        assert_eq!(form.state(), SubmitState::Completed);
        assert!(!state.is_visible(Region::Form));
        assert!(state.is_visible(Region::Container));
        assert_eq!(state.greeting(), Some(&Greeting::new("Al")));
        assert_eq!(
            state.effects().last(),
            Some(&Effect::Reveal {
                region: Region::Container,
                transition: Transition::Blind,
                speed: Speed::Slow,
            })
        );
    }

    #[test]
    fn test_completed_rejects_resubmit() {
        let mut form = controller();
        let mut state = DisplayState::new();
        form.submit(&values("Al", "al"), &mut state).unwrap();
        let before = state.clone();

        let err = form.submit(&values("", ""), &mut state).unwrap_err();

        assert!(matches!(err, FormError::AlreadyCompleted));
        assert_eq!(state, before);
    }

    #[test]
    fn test_resubmit_clears_stale_state() {
        let mut form = controller();
        let mut state = DisplayState::new();

        form.submit(&values("Al", ""), &mut state).unwrap();
        assert!(state.has_indicator("name", "success"));
        assert!(state.has_indicator("nick", "error"));

        let result = form.submit(&values("", "al"), &mut state).unwrap();
        assert!(!result.is_valid());
        assert!(!state.has_indicator("name", "success"));
        assert!(state.has_indicator("name", "error"));
        assert!(!state.has_indicator("nick", "error"));
        assert!(state.has_indicator("nick", "success"));
        assert_eq!(state.message("nick"), "");
    }

    #[test]
    fn test_reset_is_idempotent() {
        let mut form = controller();
        let mut state = DisplayState::new();
        form.submit(&values("A", ""), &mut state).unwrap();

        form.reset(&mut state);
        let once = state.clone();
        form.reset(&mut state);

        assert_eq!(state, once);
        assert!(state.is_clean());
    }

    #[test]
    fn test_result_lookup() {
        let result = FormResult::new(vec![
            ValidationOutcome::valid(&Field::new("name", "Name")),
            ValidationOutcome::invalid(&Field::new("nick", "Nick"), "Nick is not filled"),
        ]);

        assert!(!result.is_valid());
        assert!(result.outcome("name").unwrap().is_valid());
        assert_eq!(
            result.outcome("nick").and_then(ValidationOutcome::message),
            Some("Nick is not filled")
        );
        assert!(result.outcome("missing").is_none());
    }
}
