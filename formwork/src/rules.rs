//! Field validation rules and the pure predicates behind them.

use std::sync::{Arc, LazyLock};

use regex::Regex;

use crate::error::SpecError;

/// Minimum digit count for a value to pass [`is_valid_phone`].
pub const MIN_PHONE_DIGITS: usize = 10;

/// Pattern behind [`is_valid_email`]: a single `@` between non-whitespace
/// parts, with at least one dot after the `@`.
pub const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(EMAIL_PATTERN).expect("Invalid email pattern"));

/// Check whether a value is shaped like an email address.
///
/// This is a UX-level check, not an RFC 5322 parse: it only requires a
/// local part, one `@`, and a domain containing a dot, with no whitespace
/// anywhere. The empty string never matches.
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

/// Check whether a value contains at least ten digits.
///
/// All non-digit characters are ignored, so `555-123-4567` and
/// `(555) 123 4567` are equivalent to their bare digit strings. No
/// country-code logic.
pub fn is_valid_phone(value: &str) -> bool {
    digit_count(value) >= MIN_PHONE_DIGITS
}

/// Check whether a value has at least `min` characters once leading and
/// trailing whitespace is trimmed.
pub fn is_valid_min_length(value: &str, min: usize) -> bool {
    value.trim().chars().count() >= min
}

/// Count the ASCII digits in a value.
pub fn digit_count(value: &str) -> usize {
    value.chars().filter(|c| c.is_ascii_digit()).count()
}

/// Type alias for shared rule predicates.
type Predicate = Arc<dyn Fn(&str) -> bool + Send + Sync>;

/// A pure predicate over a raw field value, paired with the message shown
/// when it fails.
///
/// Rules are total over any string input, including the empty string, and
/// are cheap to clone.
///
/// # Example
///
/// ```
/// use formwork::rules::Rule;
///
/// let rule = Rule::min_length(2, "Please enter your full name");
/// assert!(rule.check("Al"));
/// assert!(!rule.check(" A "));
/// ```
#[derive(Clone)]
pub struct Rule {
    predicate: Predicate,
    message: String,
}

impl Rule {
    /// Create a rule from a custom predicate.
    pub fn new<F>(predicate: F, message: impl Into<String>) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        Self {
            predicate: Arc::new(predicate),
            message: message.into(),
        }
    }

    /// Require the value to be non-empty after trimming.
    pub fn required(message: impl Into<String>) -> Self {
        Self::new(|value| !value.trim().is_empty(), message)
    }

    /// Require minimum length (in characters) after trimming.
    pub fn min_length(min: usize, message: impl Into<String>) -> Self {
        Self::new(move |value| is_valid_min_length(value, min), message)
    }

    /// Require maximum length (in characters), untrimmed.
    pub fn max_length(max: usize, message: impl Into<String>) -> Self {
        Self::new(move |value| value.chars().count() <= max, message)
    }

    /// Require an email-shaped value. Empty input fails.
    pub fn email(message: impl Into<String>) -> Self {
        Self::new(|value| is_valid_email(value), message)
    }

    /// Require at least ten digits among the characters.
    pub fn phone(message: impl Into<String>) -> Self {
        Self::new(|value| is_valid_phone(value), message)
    }

    /// Require the value to match a regex pattern.
    pub fn pattern(pattern: &str, message: impl Into<String>) -> Result<Self, SpecError> {
        let re = Regex::new(pattern).map_err(|source| SpecError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })?;
        Ok(Self::new(move |value| re.is_match(value), message))
    }

    /// Run the predicate against a raw value.
    pub fn check(&self, value: &str) -> bool {
        (self.predicate)(value)
    }

    /// The message reported when the predicate fails.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule")
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}
