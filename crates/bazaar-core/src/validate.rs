//! Explicit validator functions with per-field violation reporting.
//!
//! Validation is composed from plain functions over plain data rather than
//! derive-macro annotations. A pass collects every violated constraint so the
//! caller can report all of them at once, the way a 422 response enumerates
//! failing fields.

use serde::Serialize;

/// A single violated constraint: the offending field and the reason.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    /// The field that failed validation.
    pub field: String,
    /// Human-readable description of the violated constraint.
    pub message: String,
}

impl Violation {
    /// Creates a new violation.
    #[must_use]
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// A validation failure enumerating every violated constraint.
#[derive(Debug, Clone)]
pub struct ValidationError {
    /// All violations found during the pass.
    pub violations: Vec<Violation>,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.summary())
    }
}

impl std::error::Error for ValidationError {}

impl ValidationError {
    /// Creates a validation error from a non-empty list of violations.
    #[must_use]
    pub fn new(violations: Vec<Violation>) -> Self {
        Self { violations }
    }

    /// Joins all violations into a single line.
    #[must_use]
    pub fn summary(&self) -> String {
        self.violations
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; ")
    }
}

/// Accumulates violations across a validation pass.
///
/// Every `check_*` method records a violation on failure and keeps going, so
/// a single pass reports all failing fields rather than stopping at the
/// first.
#[derive(Debug, Default)]
pub struct Validator {
    violations: Vec<Violation>,
}

impl Validator {
    /// Creates an empty validator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a violation if `ok` is false.
    pub fn check(&mut self, ok: bool, field: &str, message: impl Into<String>) {
        if !ok {
            self.violations.push(Violation::new(field, message));
        }
    }

    /// Requires `value >= min` (inclusive).
    pub fn check_min(&mut self, field: &str, value: f64, min: f64) {
        self.check(
            value >= min,
            field,
            format!("must be greater than or equal to {min}"),
        );
    }

    /// Requires `min <= value <= max` (both inclusive).
    pub fn check_range(&mut self, field: &str, value: f64, min: f64, max: f64) {
        self.check(
            (min..=max).contains(&value),
            field,
            format!("must be between {min} and {max}"),
        );
    }

    /// Requires `value.chars().count() <= max` (lengths are maximums).
    pub fn check_max_len(&mut self, field: &str, value: &str, max: usize) {
        self.check(
            value.chars().count() <= max,
            field,
            format!("must be at most {max} characters"),
        );
    }

    /// Requires `value` to not contain `needle` as a substring.
    pub fn check_forbidden_substring(&mut self, field: &str, value: &str, needle: &str) {
        self.check(
            !value.contains(needle),
            field,
            format!("must not contain {needle:?}"),
        );
    }

    /// Requires two fields to hold equal values.
    pub fn check_fields_match(&mut self, field: &str, a: &str, b: &str, message: &str) {
        self.check(a == b, field, message);
    }

    /// Requires a well-formed http(s) URL: scheme plus a non-empty host.
    pub fn check_url(&mut self, field: &str, value: &str) {
        self.check(is_http_url(value), field, "must be a valid http(s) URL");
    }

    /// Finishes the pass, returning `Err` if any violation was recorded.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] carrying every recorded violation.
    pub fn finish(self) -> Result<(), ValidationError> {
        if self.violations.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::new(self.violations))
        }
    }
}

/// Returns `true` if `value` looks like a well-formed http(s) URL.
fn is_http_url(value: &str) -> bool {
    let rest = if let Some(rest) = value.strip_prefix("https://") {
        rest
    } else if let Some(rest) = value.strip_prefix("http://") {
        rest
    } else {
        return false;
    };

    let host = rest.split('/').next().unwrap_or("");
    !host.is_empty() && !host.contains(char::is_whitespace)
}
