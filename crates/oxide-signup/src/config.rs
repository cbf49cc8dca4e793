//! Signup form configuration.
//!
//! Every key is optional; missing keys fall back to the defaults of the
//! stock signup form.
//!
//! ```json
//! {
//!   "username_length": { "min": 2, "max": 15 },
//!   "password_length": { "min": 6, "max": 20 },
//!   "indicators": { "error": "error", "success": "success" },
//!   "labels": { "password_confirm": "Repeat Password" }
//! }
//! ```

use std::path::{Path, PathBuf};

use oxide_validator::{FormError, Indicators, LengthBounds, Pattern, EMAIL_PATTERN};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read config {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid JSON for this schema.
    #[error("failed to parse config: {0}")]
    Json(#[from] serde_json::Error),

    /// The values are inconsistent.
    #[error(transparent)]
    Form(#[from] FormError),
}

/// Result type alias for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Labels shown next to each input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Labels {
    pub username: String,
    pub email: String,
    pub password: String,
    pub password_confirm: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            username: "Username".to_string(),
            email: "Email".to_string(),
            password: "Password".to_string(),
            password_confirm: "Confirm Password".to_string(),
        }
    }
}

/// Rules and presentation tags of the signup form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SignupConfig {
    /// Allowed username length.
    pub username_length: LengthBounds,
    /// Allowed password length, shared by the confirmation field.
    pub password_length: LengthBounds,
    /// Email shape, matched against the whole value.
    pub email_pattern: String,
    /// Failure and success tags.
    pub indicators: Indicators,
    /// Input labels.
    pub labels: Labels,
}

impl Default for SignupConfig {
    fn default() -> Self {
        Self {
            username_length: LengthBounds { min: 2, max: 15 },
            password_length: LengthBounds { min: 6, max: 20 },
            email_pattern: EMAIL_PATTERN.to_string(),
            indicators: Indicators::default(),
            labels: Labels::default(),
        }
    }
}

impl SignupConfig {
    /// Parses and validates a JSON document.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Checks the bounds and compiles the email pattern.
    pub fn validate(&self) -> std::result::Result<(), FormError> {
        self.username_length.check()?;
        self.password_length.check()?;
        Pattern::new(&self.email_pattern)?;
        Ok(())
    }
}
