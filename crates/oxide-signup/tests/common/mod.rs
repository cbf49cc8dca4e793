#![allow(dead_code)]

use std::collections::HashMap;

use oxide_signup::{SignupConfig, SignupForm, EMAIL, PASSWORD, PASSWORD_CONFIRM, USERNAME};
use oxide_validator::{DisplayState, FormResult};

pub fn values(
    username: &str,
    email: &str,
    password: &str,
    password_confirm: &str,
) -> HashMap<String, String> {
    HashMap::from([
        (USERNAME.to_string(), username.to_string()),
        (EMAIL.to_string(), email.to_string()),
        (PASSWORD.to_string(), password.to_string()),
        (PASSWORD_CONFIRM.to_string(), password_confirm.to_string()),
    ])
}

/// Submits `values` once to a default signup form.
pub fn submit(values: HashMap<String, String>) -> (SignupForm, FormResult, DisplayState) {
    let mut form = SignupForm::new(&SignupConfig::default())
        .unwrap_or_else(|e| panic!("Failed to build form: {e}"));
    let mut display = DisplayState::new();
    let result = form
        .submit(&values, &mut display)
        .unwrap_or_else(|e| panic!("Submit failed: {e}"));
    (form, result, display)
}
