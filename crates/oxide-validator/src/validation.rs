//! Validation rules.
//!
//! Every rule is a pure check over trimmed strings. Reporting the result
//! is left to [`InputValidator`](crate::InputValidator).

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{FormError, Result};
use crate::field::Field;

/// Email shape: a dot-separated or quoted local part, then either a
/// bracketed dotted quad or a hostname ending in a label of 2+ letters.
pub const EMAIL_PATTERN: &str = r#"^(([^<>()\[\]\\.,;:\s@"]+(\.[^<>()\[\]\\.,;:\s@"]+)*)|(".+"))@((\[[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\])|(([a-zA-Z\-0-9]+\.)+[a-zA-Z]{2,}))$"#;

/// A regular expression that must match the whole value.
#[derive(Debug, Clone)]
pub struct Pattern {
    source: String,
    regex: Regex,
}

impl Pattern {
    /// Compiles `source`, anchored at both ends.
    pub fn new(source: &str) -> Result<Self> {
        let regex =
            Regex::new(&format!("^(?:{source})$")).map_err(|e| FormError::InvalidPattern {
                pattern: source.to_string(),
                source: e,
            })?;
        Ok(Self {
            source: source.to_string(),
            regex,
        })
    }

    /// Compiles [`EMAIL_PATTERN`].
    pub fn email() -> Result<Self> {
        Self::new(EMAIL_PATTERN)
    }

    /// Returns the pattern as written, without the added anchors.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Returns whether `value` matches in full.
    pub fn is_match(&self, value: &str) -> bool {
        self.regex.is_match(value)
    }
}

/// Inclusive length range, counted in characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LengthBounds {
    pub min: usize,
    pub max: usize,
}

impl LengthBounds {
    /// Creates bounds, rejecting `min > max`.
    pub fn new(min: usize, max: usize) -> Result<Self> {
        let bounds = Self { min, max };
        bounds.check()?;
        Ok(bounds)
    }

    /// Re-checks bounds that bypassed [`LengthBounds::new`], e.g. deserialized ones.
    pub fn check(&self) -> Result<()> {
        if self.min > self.max {
            return Err(FormError::InvalidBounds {
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }

    /// Returns whether `len` lies inside the bounds.
    pub fn contains(&self, len: usize) -> bool {
        (self.min..=self.max).contains(&len)
    }
}

/// One step of a field's validation chain.
#[derive(Debug, Clone)]
pub enum Rule {
    /// The value must not be blank.
    Filled,
    /// The value length must lie within the bounds.
    Length(LengthBounds),
    /// The value must match the pattern in full.
    Pattern(Pattern),
    /// The value must equal the value of another field.
    Matches(Field),
}

/// Why a rule rejected a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Violation {
    NotFilled,
    TooShort { min: usize },
    TooLong { max: usize },
    NotValid,
    Mismatch,
}

impl Violation {
    /// Renders the user-facing message.
    ///
    /// For [`Violation::Mismatch`] the label is the one of the field being
    /// matched against, not the field the message is shown on.
    pub fn message(&self, label: &str) -> String {
        match self {
            Self::NotFilled => format!("{label} is not filled"),
            Self::TooShort { min } => format!("{label} must be at least {min} characters"),
            Self::TooLong { max } => format!("{label} must be less than {max} characters"),
            Self::NotValid => format!("{label} is not valid"),
            Self::Mismatch => format!("{label}s don't match"),
        }
    }
}

/// Checks that the trimmed value is not empty.
pub fn filled(value: &str) -> std::result::Result<(), Violation> {
    if value.trim().is_empty() {
        Err(Violation::NotFilled)
    } else {
        Ok(())
    }
}

/// Checks the trimmed value length against inclusive bounds.
pub fn length(value: &str, min: usize, max: usize) -> std::result::Result<(), Violation> {
    let len = value.trim().chars().count();
    if len < min {
        Err(Violation::TooShort { min })
    } else if len > max {
        Err(Violation::TooLong { max })
    } else {
        Ok(())
    }
}

/// Checks that the trimmed value matches `pattern` in full.
pub fn pattern(value: &str, pattern: &Pattern) -> std::result::Result<(), Violation> {
    if pattern.is_match(value.trim()) {
        Ok(())
    } else {
        Err(Violation::NotValid)
    }
}

/// Checks that both trimmed values are identical.
pub fn matches(first: &str, second: &str) -> std::result::Result<(), Violation> {
    if first.trim() == second.trim() {
        Ok(())
    } else {
        Err(Violation::Mismatch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filled_rejects_whitespace() {
        for blank in ["", " ", "   ", "\t", "\n \t ", "\u{a0}"] {
            assert_eq!(filled(blank), Err(Violation::NotFilled), "{blank:?}");
        }
        assert!(filled(" a ").is_ok());
    }

    #[test]
    fn test_length_bounds_are_inclusive() {
        assert!(length("ab", 2, 15).is_ok());
        assert!(length("abcdefghijklmno", 2, 15).is_ok());
        assert_eq!(length("a", 2, 15), Err(Violation::TooShort { min: 2 }));
        assert_eq!(
            length("abcdefghijklmnop", 2, 15),
            Err(Violation::TooLong { max: 15 })
        );
    }

    #[test]
    fn test_length_uses_trimmed_value() {
        assert_eq!(length("  a  ", 2, 15), Err(Violation::TooShort { min: 2 }));
        assert!(length("  ab  ", 2, 2).is_ok());
    }

    #[test]
    fn test_length_counts_characters() {
        assert!(length("éé", 2, 2).is_ok());
    }

    #[test]
    fn test_email_pattern_accepts() {
        let email = Pattern::email().unwrap();
        for value in [
            "user@example.com",
            "a.b@sub.example.co",
            "user@[192.168.0.1]",
            "\"john doe\"@example.org",
        ] {
            assert!(pattern(value, &email).is_ok(), "{value}");
        }
    }

    #[test]
    fn test_email_pattern_rejects() {
        let email = Pattern::email().unwrap();
        for value in [
            "user@",
            "@example.com",
            "user example.com",
            "user@example",
            "user@example.c",
            "a..b@example.com",
        ] {
            assert_eq!(pattern(value, &email), Err(Violation::NotValid), "{value}");
        }
    }

    #[test]
    fn test_pattern_is_anchored() {
        let digits = Pattern::new(r"\d{4}").unwrap();
        assert!(digits.is_match("2024"));
        assert!(!digits.is_match("x2024"));
        assert!(!digits.is_match("20245"));
        assert_eq!(digits.as_str(), r"\d{4}");
    }

    #[test]
    fn test_invalid_pattern() {
        let err = Pattern::new("(unclosed").unwrap_err();
        assert!(matches!(err, FormError::InvalidPattern { .. }));
    }

    #[test]
    fn test_matches_is_exact() {
        assert!(matches("secret1", " secret1 ").is_ok());
        assert_eq!(matches("secret1", "Secret1"), Err(Violation::Mismatch));
        assert_eq!(matches("secret1", "secret2"), Err(Violation::Mismatch));
    }

    #[test]
    fn test_length_bounds_new() {
        assert!(LengthBounds::new(2, 15).is_ok());
        assert!(LengthBounds::new(3, 3).unwrap().contains(3));
        assert!(matches!(
            LengthBounds::new(6, 5),
            Err(FormError::InvalidBounds { min: 6, max: 5 })
        ));
    }

    #[test]
    fn test_violation_messages() {
        assert_eq!(
            Violation::NotFilled.message("Username"),
            "Username is not filled"
        );
        assert_eq!(
            Violation::TooShort { min: 6 }.message("Password"),
            "Password must be at least 6 characters"
        );
        assert_eq!(
            Violation::TooLong { max: 15 }.message("Username"),
            "Username must be less than 15 characters"
        );
        assert_eq!(Violation::NotValid.message("Email"), "Email is not valid");
        assert_eq!(
            Violation::Mismatch.message("Password"),
            "Passwords don't match"
        );
    }
}
