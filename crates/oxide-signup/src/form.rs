//! The signup form: username, email, password and its confirmation.

use oxide_validator::{
    Field, FieldCheck, FieldSource, FormController, FormResult, InputValidator, Pattern,
    Renderer, Result, Rule, SubmitState,
};

use crate::config::SignupConfig;

/// Identifier of the username input.
pub const USERNAME: &str = "username";
/// Identifier of the email input.
pub const EMAIL: &str = "email";
/// Identifier of the password input.
pub const PASSWORD: &str = "password";
/// Identifier of the password confirmation input.
pub const PASSWORD_CONFIRM: &str = "password-confirm";

/// Signup form wired to its validation pipeline.
///
/// Checks run in this order, each stopping at its own first failure:
/// - username: filled, then length
/// - email: filled, then email shape
/// - password: filled, then length
/// - confirmation: filled, then length, then equal to the password
#[derive(Debug, Clone)]
pub struct SignupForm {
    controller: FormController,
    username: Field,
    email: Field,
    password: Field,
    password_confirm: Field,
}

impl SignupForm {
    /// Builds the form from its configuration.
    pub fn new(config: &SignupConfig) -> Result<Self> {
        config.username_length.check()?;
        config.password_length.check()?;
        let email_pattern = Pattern::new(&config.email_pattern)?;

        let labels = &config.labels;
        let username = Field::new(USERNAME, &labels.username);
        let email = Field::new(EMAIL, &labels.email);
        let password = Field::new(PASSWORD, &labels.password);
        let password_confirm = Field::new(PASSWORD_CONFIRM, &labels.password_confirm);

        let validator = InputValidator::new(config.indicators.clone());
        let controller = FormController::new(validator, username.clone())
            .check(
                FieldCheck::new(username.clone())
                    .rule(Rule::Filled)
                    .rule(Rule::Length(config.username_length)),
            )
            .check(
                FieldCheck::new(email.clone())
                    .rule(Rule::Filled)
                    .rule(Rule::Pattern(email_pattern)),
            )
            .check(
                FieldCheck::new(password.clone())
                    .rule(Rule::Filled)
                    .rule(Rule::Length(config.password_length)),
            )
            .check(
                FieldCheck::new(password_confirm.clone())
                    .rule(Rule::Filled)
                    .rule(Rule::Length(config.password_length))
                    .rule(Rule::Matches(password.clone())),
            );

        Ok(Self {
            controller,
            username,
            email,
            password,
            password_confirm,
        })
    }

    /// Validates the current values and, if all pass, shows the greeting.
    pub fn submit(
        &mut self,
        values: &dyn FieldSource,
        renderer: &mut dyn Renderer,
    ) -> Result<FormResult> {
        self.controller.submit(values, renderer)
    }

    /// Clears every indicator and message.
    pub fn reset(&self, renderer: &mut dyn Renderer) {
        self.controller.reset(renderer);
    }

    /// Returns the lifecycle state.
    pub fn state(&self) -> SubmitState {
        self.controller.state()
    }

    pub fn username(&self) -> &Field {
        &self.username
    }

    pub fn email(&self) -> &Field {
        &self.email
    }

    pub fn password(&self) -> &Field {
        &self.password
    }

    pub fn password_confirm(&self) -> &Field {
        &self.password_confirm
    }

    /// Returns the fields in display order.
    pub fn fields(&self) -> [&Field; 4] {
        [
            &self.username,
            &self.email,
            &self.password,
            &self.password_confirm,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pipeline_shape() {
        let form = SignupForm::new(&SignupConfig::default()).unwrap();
        let checks = form.controller.checks();

        let ids: Vec<_> = checks.iter().map(|c| c.field.id()).collect();
        assert_eq!(ids, [USERNAME, EMAIL, PASSWORD, PASSWORD_CONFIRM]);

        let rule_counts: Vec<_> = checks.iter().map(|c| c.rules.len()).collect();
        assert_eq!(rule_counts, [2, 2, 2, 3]);
        assert!(matches!(
            checks[3].rules.last(),
            Some(Rule::Matches(field)) if field.id() == PASSWORD
        ));
    }

    #[test]
    fn test_labels_from_config() {
        let mut config = SignupConfig::default();
        config.labels.username = " Login ".to_string();

        let form = SignupForm::new(&config).unwrap();
        assert_eq!(form.username().label(), "Login");
        assert_eq!(form.password_confirm().label(), "Confirm Password");
    }

    #[test]
    fn test_rejects_invalid_config() {
        let mut config = SignupConfig::default();
        config.email_pattern = "[".to_string();
        assert!(SignupForm::new(&config).is_err());
    }
}
