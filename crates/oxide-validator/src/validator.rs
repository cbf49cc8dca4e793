//! Rule evaluation with reporting.

use tracing::debug;

use crate::field::{Field, FieldSource};
use crate::form::ValidationOutcome;
use crate::render::{Effect, Indicators, Renderer};
use crate::validation::{self, LengthBounds, Pattern, Rule, Violation};

/// How long the error shake lasts.
const SHAKE_MS: u64 = 500;

/// Value store and renderer for one validation pass.
pub struct FormSurface<'a> {
    values: &'a dyn FieldSource,
    renderer: &'a mut dyn Renderer,
}

impl<'a> FormSurface<'a> {
    /// Pairs a value store with the renderer that displays results.
    pub fn new(values: &'a dyn FieldSource, renderer: &'a mut dyn Renderer) -> Self {
        Self { values, renderer }
    }

    /// Returns the renderer.
    pub fn renderer(&mut self) -> &mut dyn Renderer {
        &mut *self.renderer
    }
}

impl std::fmt::Debug for FormSurface<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormSurface").finish_non_exhaustive()
    }
}

/// Checks field values and reports each result to the renderer.
///
/// Every `is_*` check returns `true` on success. On failure it reports one
/// message on the checked field and returns `false`; it never reports
/// success by itself, that is left to the caller once a whole chain passes.
#[derive(Debug, Clone, Default)]
pub struct InputValidator {
    indicators: Indicators,
}

impl InputValidator {
    /// Creates a validator using the given indicator tags.
    pub fn new(indicators: Indicators) -> Self {
        Self { indicators }
    }

    /// Returns the indicator tags.
    pub fn indicators(&self) -> &Indicators {
        &self.indicators
    }

    /// Returns the trimmed current value of a field.
    pub fn get_value(&self, surface: &FormSurface<'_>, field: &Field) -> String {
        surface.values.raw_value(field).trim().to_string()
    }

    /// Returns the trimmed label of a field.
    pub fn get_label<'f>(&self, field: &'f Field) -> &'f str {
        field.label().trim()
    }

    /// Checks that the field is not blank.
    pub fn is_filled(&self, surface: &mut FormSurface<'_>, field: &Field) -> bool {
        self.evaluate(surface, field, &Rule::Filled).is_ok()
    }

    /// Checks that the field length lies in `min..=max`.
    pub fn is_valid_length(
        &self,
        surface: &mut FormSurface<'_>,
        field: &Field,
        min: usize,
        max: usize,
    ) -> bool {
        self.evaluate(surface, field, &Rule::Length(LengthBounds { min, max }))
            .is_ok()
    }

    /// Checks that the field matches `pattern` in full.
    pub fn is_pattern_match(
        &self,
        surface: &mut FormSurface<'_>,
        field: &Field,
        pattern: &Pattern,
    ) -> bool {
        self.evaluate(surface, field, &Rule::Pattern(pattern.clone()))
            .is_ok()
    }

    /// Checks that `second` holds the same value as `first`.
    ///
    /// A mismatch is reported on `second`, using the label of `first`.
    pub fn is_match(&self, surface: &mut FormSurface<'_>, first: &Field, second: &Field) -> bool {
        self.evaluate(surface, second, &Rule::Matches(first.clone()))
            .is_ok()
    }

    /// Marks a field invalid and shows `message` under it.
    pub fn report_error(&self, surface: &mut FormSurface<'_>, field: &Field, message: &str) {
        let renderer = surface.renderer();
        renderer.add_indicator(field, &self.indicators.error);
        renderer.effect(Effect::Shake {
            field: field.id().to_string(),
            duration_ms: SHAKE_MS,
        });
        renderer.set_message(field, message);
    }

    /// Marks a field valid. The message is left as is.
    pub fn report_success(&self, surface: &mut FormSurface<'_>, field: &Field) {
        surface
            .renderer()
            .add_indicator(field, &self.indicators.success);
    }

    /// Drops both indicators from a field and blanks its message.
    pub fn clear(&self, renderer: &mut dyn Renderer, field: &Field) {
        renderer.remove_indicator(field, &self.indicators.error);
        renderer.remove_indicator(field, &self.indicators.success);
        renderer.set_message(field, "");
    }

    /// Runs `rules` in order on one field.
    ///
    /// Stops at the first failing rule, so the field shows exactly one
    /// message. Reports success when every rule passes.
    pub fn check(
        &self,
        surface: &mut FormSurface<'_>,
        field: &Field,
        rules: &[Rule],
    ) -> ValidationOutcome {
        for rule in rules {
            if let Err(message) = self.evaluate(surface, field, rule) {
                return ValidationOutcome::invalid(field, message);
            }
        }
        self.report_success(surface, field);
        ValidationOutcome::valid(field)
    }

    fn evaluate(
        &self,
        surface: &mut FormSurface<'_>,
        field: &Field,
        rule: &Rule,
    ) -> Result<(), String> {
        let value = surface.values.raw_value(field);
        let (result, label) = match rule {
            Rule::Filled => (validation::filled(&value), self.get_label(field)),
            Rule::Length(bounds) => (
                validation::length(&value, bounds.min, bounds.max),
                self.get_label(field),
            ),
            Rule::Pattern(pattern) => (
                validation::pattern(&value, pattern),
                self.get_label(field),
            ),
            Rule::Matches(other) => {
                let other_value = surface.values.raw_value(other);
                (
                    validation::matches(&other_value, &value),
                    self.get_label(other),
                )
            }
        };

        result.map_err(|violation: Violation| {
            let message = violation.message(label);
            debug!(field = field.id(), ?violation, "rule failed");
            self.report_error(surface, field, &message);
            message
        })
    }
}
