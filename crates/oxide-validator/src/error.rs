//! Error types for the validation engine.

use thiserror::Error;

/// Engine configuration and lifecycle errors.
///
/// A field failing its rules is never a `FormError`: that is reported
/// through the renderer and collected into [`ValidationErrors`].
#[derive(Debug, Error)]
pub enum FormError {
    /// A pattern failed to compile.
    #[error("invalid pattern {pattern:?}: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// Length bounds with `min > max`.
    #[error("invalid length bounds: min {min} is greater than max {max}")]
    InvalidBounds { min: usize, max: usize },

    /// The form already reached its success view.
    #[error("form was already submitted successfully")]
    AlreadyCompleted,
}

/// Failure messages of one submission attempt, in pipeline order.
///
/// Holds at most one message per field: the first failing rule of a field
/// stops that field's chain.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    /// `(field id, message)` pairs.
    pub errors: Vec<(String, String)>,
}

impl ValidationErrors {
    /// Creates a new empty ValidationErrors.
    pub fn new() -> Self {
        Self { errors: Vec::new() }
    }

    /// Sets the error for a field, replacing any earlier one.
    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        let message = message.into();
        match self.errors.iter_mut().find(|(name, _)| name == field) {
            Some((_, existing)) => *existing = message,
            None => self.errors.push((field.to_string(), message)),
        }
    }

    /// Returns whether there are any errors.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns the number of fields with errors.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns the error for a specific field.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, message)| message.as_str())
    }

    /// Iterates over `(field, message)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.errors
            .iter()
            .map(|(field, message)| (field.as_str(), message.as_str()))
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (field, message) in self.iter() {
            writeln!(f, "{field}: {message}")?;
        }
        Ok(())
    }
}

/// Result type alias for engine operations.
pub type Result<T> = std::result::Result<T, FormError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_overwrites_same_field() {
        let mut errors = ValidationErrors::new();
        errors.add("email", "Email is not filled");
        errors.add("email", "Email is not valid");
        errors.add("username", "Username is not filled");

        assert_eq!(errors.len(), 2);
        assert_eq!(errors.get("email"), Some("Email is not valid"));
        assert_eq!(errors.get("password"), None);
    }

    #[test]
    fn test_display_keeps_order() {
        let mut errors = ValidationErrors::new();
        errors.add("username", "Username is not filled");
        errors.add("email", "Email is not valid");

        assert_eq!(
            errors.to_string(),
            "username: Username is not filled\nemail: Email is not valid\n"
        );
    }

    #[test]
    fn test_invalid_bounds_message() {
        let err = FormError::InvalidBounds { min: 5, max: 2 };
        assert_eq!(
            err.to_string(),
            "invalid length bounds: min 5 is greater than max 2"
        );
    }
}
