//! # oxide-signup
//!
//! The signup form built on `oxide-validator`: four fields, their rules,
//! a JSON configuration and HTML snapshots of the page.
//!
//! ## Quick Start
//!
//! ```rust
//! use std::collections::HashMap;
//!
//! use oxide_signup::{SignupConfig, SignupForm};
//! use oxide_validator::DisplayState;
//!
//! let mut form = SignupForm::new(&SignupConfig::default())?;
//! let values = HashMap::from([
//!     ("username".to_string(), "Al".to_string()),
//!     ("email".to_string(), "al@x.co".to_string()),
//!     ("password".to_string(), "secret1".to_string()),
//!     ("password-confirm".to_string(), "secret1".to_string()),
//! ]);
//!
//! let mut display = DisplayState::new();
//! let result = form.submit(&values, &mut display)?;
//!
//! assert!(result.is_valid());
//! assert_eq!(display.greeting().map(|g| g.heading()), Some("Hi Al".to_string()));
//! # Ok::<(), oxide_validator::FormError>(())
//! ```

pub mod config;
mod form;
pub mod html;

pub use config::{ConfigError, Labels, SignupConfig};
pub use form::{SignupForm, EMAIL, PASSWORD, PASSWORD_CONFIRM, USERNAME};
