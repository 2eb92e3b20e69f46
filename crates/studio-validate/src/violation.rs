//! # Violations
//!
//! The data returned to the editing surface when rules fail. A violation
//! is always scoped to the field that failed; there is no parent-level
//! aggregation and nothing is thrown.

use std::fmt;

use serde::{Deserialize, Serialize};

use studio_schema::Severity;

/// A single rule violation at one field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Violation {
    /// Path to the violating field, e.g. `socialLinks[2].url`.
    pub field: String,
    /// Human-readable message shown at the field.
    pub message: String,
    /// Whether this violation blocks publishing.
    pub severity: Severity,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let marker = match self.severity {
            Severity::Error => "error",
            Severity::Warning => "warning",
        };
        write!(f, "  {} [{marker}]: {}", self.field, self.message)
    }
}

/// The result of validating one document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValidationOutcome {
    violations: Vec<Violation>,
}

impl ValidationOutcome {
    /// An outcome with no violations.
    pub fn pass() -> Self {
        Self::default()
    }

    /// Record a violation.
    pub fn push(&mut self, violation: Violation) {
        self.violations.push(violation);
    }

    /// Whether the document can be published (no error-severity violations).
    pub fn is_publishable(&self) -> bool {
        !self
            .violations
            .iter()
            .any(|v| v.severity == Severity::Error)
    }

    /// Whether nothing at all was flagged.
    pub fn is_clean(&self) -> bool {
        self.violations.is_empty()
    }

    /// All violations, in field evaluation order.
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// Error-severity violations only.
    pub fn errors(&self) -> impl Iterator<Item = &Violation> {
        self.violations
            .iter()
            .filter(|v| v.severity == Severity::Error)
    }

    /// Warning-severity violations only.
    pub fn warnings(&self) -> impl Iterator<Item = &Violation> {
        self.violations
            .iter()
            .filter(|v| v.severity == Severity::Warning)
    }

    /// The messages flagged at one field.
    pub fn messages_at(&self, field: &str) -> Vec<&str> {
        self.violations
            .iter()
            .filter(|v| v.field == field)
            .map(|v| v.message.as_str())
            .collect()
    }

    /// Consumes self and returns the inner list.
    pub fn into_inner(self) -> Vec<Violation> {
        self.violations
    }
}

impl fmt::Display for ValidationOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, v) in self.violations.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{v}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn violation(field: &str, severity: Severity) -> Violation {
        Violation {
            field: field.to_string(),
            message: "message".to_string(),
            severity,
        }
    }

    #[test]
    fn test_publishable_with_warnings_only() {
        let mut outcome = ValidationOutcome::pass();
        outcome.push(violation("description", Severity::Warning));
        assert!(outcome.is_publishable());
        assert!(!outcome.is_clean());
        assert_eq!(outcome.warnings().count(), 1);
        assert_eq!(outcome.errors().count(), 0);
    }

    #[test]
    fn test_error_blocks_publish() {
        let mut outcome = ValidationOutcome::pass();
        outcome.push(violation("name", Severity::Error));
        assert!(!outcome.is_publishable());
    }

    #[test]
    fn test_messages_at() {
        let mut outcome = ValidationOutcome::pass();
        outcome.push(Violation {
            field: "url".into(),
            message: "A valid URL is required".into(),
            severity: Severity::Error,
        });
        outcome.push(Violation {
            field: "url".into(),
            message: "Please enter a valid instagram URL".into(),
            severity: Severity::Error,
        });
        assert_eq!(
            outcome.messages_at("url"),
            vec!["A valid URL is required", "Please enter a valid instagram URL"]
        );
        assert!(outcome.messages_at("name").is_empty());
    }

    #[test]
    fn test_display_format() {
        let mut outcome = ValidationOutcome::pass();
        outcome.push(Violation {
            field: "socialLinks[2].url".into(),
            message: "Please enter a valid instagram URL".into(),
            severity: Severity::Error,
        });
        let display = outcome.to_string();
        assert!(display.contains("socialLinks[2].url"));
        assert!(display.contains("[error]"));
    }
}
