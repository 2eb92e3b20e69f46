//! # Identifier Newtypes
//!
//! Newtype wrappers for the machine names used across schema definitions.
//! These prevent accidental identifier confusion: you cannot pass a
//! `FieldName` where a `TypeName` is expected, and you cannot build either
//! from a string that the studio runtime would reject.
//!
//! ## Invariant
//!
//! Machine names start with an ASCII letter and contain only ASCII
//! alphanumerics. This matches the camelCase names the editing surface
//! uses as object keys (`socialLinks`, `customPlatform`, ...), and keeps
//! field paths like `socialLinks[2].url` unambiguous to parse.

use serde::{Deserialize, Serialize};

use crate::error::StudioError;

/// The machine name of a content type.
///
/// Stable across schema versions; reference-valued fields elsewhere use
/// it as a foreign-key target.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TypeName(String);

/// The machine name of a field, unique within its owning type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FieldName(String);

/// An opaque reference to another document.
///
/// Documents are stored by the external runtime; a reference is just the
/// target's identifier string. Two refs denote the same document exactly
/// when they compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DocRef(pub String);

fn check_machine_name(kind: &str, s: &str) -> Result<(), StudioError> {
    let mut chars = s.chars();
    let valid = match chars.next() {
        Some(first) => first.is_ascii_alphabetic() && chars.all(|c| c.is_ascii_alphanumeric()),
        None => false,
    };
    if valid {
        Ok(())
    } else {
        Err(StudioError::Schema(format!(
            "invalid {kind} machine name: {s:?} (must be ASCII alphanumeric, starting with a letter)"
        )))
    }
}

impl TypeName {
    /// Create a validated type name.
    ///
    /// # Errors
    ///
    /// Returns [`StudioError::Schema`] if the name is empty, starts with a
    /// non-letter, or contains characters outside ASCII alphanumerics.
    pub fn new(s: impl Into<String>) -> Result<Self, StudioError> {
        let s = s.into();
        check_machine_name("type", &s)?;
        Ok(Self(s))
    }

    /// The name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FieldName {
    /// Create a validated field name.
    ///
    /// # Errors
    ///
    /// Returns [`StudioError::Schema`] under the same conditions as
    /// [`TypeName::new`].
    pub fn new(s: impl Into<String>) -> Result<Self, StudioError> {
        let s = s.into();
        check_machine_name("field", &s)?;
        Ok(Self(s))
    }

    /// The name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl DocRef {
    /// The referenced identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// Ordering and hashing agree with the inner string, so maps keyed by
// `TypeName` can be probed with `&str`.
impl std::borrow::Borrow<str> for TypeName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TypeName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::fmt::Display for FieldName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::fmt::Display for DocRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ref:{}", self.0)
    }
}
