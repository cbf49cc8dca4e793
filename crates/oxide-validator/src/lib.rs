//! # oxide-validator
//!
//! Field validation rules and form orchestration for HTML-style forms.
//!
//! This crate provides:
//! - Field handles with injected labels, read from any [`FieldSource`]
//! - Pure validation rules (presence, length, pattern, equality)
//! - [`InputValidator`], which evaluates rules and reports each result to
//!   a [`Renderer`]
//! - [`FormController`], which runs every field check on submit and swaps
//!   the form for a greeting once all of them pass
//!
//! ## Quick Start
//!
//! ```rust
//! use std::collections::HashMap;
//!
//! use oxide_validator::{
//!     DisplayState, Field, FieldCheck, FormController, InputValidator,
//!     LengthBounds, Rule,
//! };
//!
//! let username = Field::new("username", "Username");
//! let mut form = FormController::new(InputValidator::default(), username.clone())
//!     .check(
//!         FieldCheck::new(username)
//!             .rule(Rule::Filled)
//!             .rule(Rule::Length(LengthBounds::new(2, 15)?)),
//!     );
//!
//! let values = HashMap::from([("username".to_string(), "A".to_string())]);
//! let mut display = DisplayState::new();
//! let result = form.submit(&values, &mut display)?;
//!
//! assert!(!result.is_valid());
//! assert_eq!(
//!     display.message("username"),
//!     "Username must be at least 2 characters",
//! );
//! # Ok::<(), oxide_validator::FormError>(())
//! ```
//!
//! ## Rules
//!
//! ```rust
//! use oxide_validator::validation::{self, Pattern, Violation};
//!
//! let email = Pattern::email()?;
//! assert!(validation::pattern("user@[192.168.0.1]", &email).is_ok());
//! assert_eq!(validation::filled("   "), Err(Violation::NotFilled));
//! # Ok::<(), oxide_validator::FormError>(())
//! ```

mod error;
mod field;
mod form;
pub mod render;
pub mod validation;
mod validator;

pub use error::{FormError, Result, ValidationErrors};
pub use field::{Field, FieldSource};
pub use form::{FieldCheck, FormController, FormResult, SubmitState, ValidationOutcome};
pub use render::{DisplayState, Effect, Greeting, Indicators, Region, Renderer};
pub use validation::{LengthBounds, Pattern, Rule, Violation, EMAIL_PATTERN};
pub use validator::{FormSurface, InputValidator};
