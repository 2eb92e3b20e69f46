//! # Validation Rule Data
//!
//! Declarative rule instances attached to fields. A [`Rule`] describes a
//! constraint and the message shown when it is violated; evaluation lives
//! in the validator crate. Rules are data so the registry can check at
//! load time that every sibling they name exists and every pattern they
//! carry compiles.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use studio_core::ident::FieldName;

use crate::error::SchemaError;

// ─── Severity ────────────────────────────────────────────────────────

/// How a violated rule affects the document.
///
/// Errors block publishing; warnings are advisory and never block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Blocks publish/save of the owning document.
    Error,
    /// Advisory only.
    Warning,
}

// ─── Pattern tables ──────────────────────────────────────────────────

/// Per-selector URL pattern sources.
///
/// Maps selector tags to regular-expression sources. A tag missing from
/// the table is unrestricted: the catch-all tags (`other`) rely on this,
/// and the same fallback applies to any future tag added to a dropdown
/// before its pattern lands.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PatternTable {
    entries: BTreeMap<String, String>,
    /// Filled on first successful [`compile`](Self::compile); registry
    /// verification warms it, so validation never compiles.
    #[serde(skip)]
    compiled: OnceLock<CompiledPatterns>,
}

impl PartialEq for PatternTable {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl PatternTable {
    /// An empty table (every tag unrestricted).
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a pattern source for a tag, replacing any previous entry.
    pub fn with(mut self, tag: impl Into<String>, pattern: impl Into<String>) -> Self {
        self.entries.insert(tag.into(), pattern.into());
        self.compiled = OnceLock::new();
        self
    }

    /// The pattern source for a tag, if one is declared.
    pub fn get(&self, tag: &str) -> Option<&str> {
        self.entries.get(tag).map(|s| s.as_str())
    }

    /// Iterate over `(tag, pattern source)` entries in tag order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(t, p)| (t.as_str(), p.as_str()))
    }

    /// Compile every entry, caching the result.
    ///
    /// The first successful call compiles; later calls return the cached
    /// table, so per-document rule evaluation never recompiles.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::InvalidPattern`] for the first entry whose
    /// source is not a valid regular expression. `type_name` is only used
    /// to attribute the error.
    pub fn compile(&self, type_name: &str) -> Result<&CompiledPatterns, SchemaError> {
        if let Some(compiled) = self.compiled.get() {
            return Ok(compiled);
        }
        let mut map = BTreeMap::new();
        for (tag, source) in &self.entries {
            let re = Regex::new(source).map_err(|e| SchemaError::InvalidPattern {
                type_name: type_name.to_string(),
                tag: tag.clone(),
                reason: e.to_string(),
            })?;
            map.insert(tag.clone(), re);
        }
        Ok(self.compiled.get_or_init(|| CompiledPatterns { map }))
    }
}

/// A compiled pattern table, ready for matching.
#[derive(Debug, Clone)]
pub struct CompiledPatterns {
    map: BTreeMap<String, Regex>,
}

impl CompiledPatterns {
    /// Whether `candidate` satisfies the pattern for `tag`.
    ///
    /// Returns `None` when the tag has no entry, which callers must treat
    /// as "unrestricted, passes".
    pub fn matches(&self, tag: &str, candidate: &str) -> Option<bool> {
        self.map.get(tag).map(|re| re.is_match(candidate))
    }

    /// Whether the table has an entry for `tag`.
    pub fn has(&self, tag: &str) -> bool {
        self.map.contains_key(tag)
    }
}

// ─── Rules ───────────────────────────────────────────────────────────

/// A single validation rule instance attached to a field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rule {
    /// The constraint to evaluate.
    pub kind: RuleKind,
    /// Whether a violation blocks publishing.
    pub severity: Severity,
    /// The message shown at the field when the rule is violated.
    ///
    /// Optional for rule kinds that can phrase their own message (the
    /// per-selector URL rule interpolates the tag name).
    pub message: Option<String>,
}

impl Rule {
    /// An error-severity rule with a fixed message.
    pub fn error(kind: RuleKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            severity: Severity::Error,
            message: Some(message.into()),
        }
    }

    /// A warning-severity rule with a fixed message.
    pub fn warning(kind: RuleKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            severity: Severity::Warning,
            message: Some(message.into()),
        }
    }

    /// An error-severity rule that phrases its own message.
    pub fn auto(kind: RuleKind) -> Self {
        Self {
            kind,
            severity: Severity::Error,
            message: None,
        }
    }
}

/// The constraint kinds the content types use.
///
/// This set is closed on purpose: it is the inventory of rule shapes the
/// studio's schemas actually declare, not a general rule engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RuleKind {
    /// The field must carry a usable value.
    Required,

    /// Required only while the sibling selector holds one of the tags.
    /// Outside that subset the field is not evaluated at all.
    RequiredIfSiblingIn {
        /// The discriminant field.
        field: FieldName,
        /// The tag subset that makes this field required.
        tags: Vec<String>,
    },

    /// The value must be an absolute `http(s)` URL.
    AbsoluteUrl,

    /// The URL must match the pattern declared for the sibling selector's
    /// current tag. Tags without a table entry are unrestricted.
    UrlBySelector {
        /// The discriminant field.
        selector: FieldName,
        /// Per-tag pattern sources.
        patterns: PatternTable,
    },

    /// Lowercase letters, digits, and single hyphens only.
    SlugFormat,

    /// At most this many characters.
    MaxLength(usize),

    /// A reference here must not also appear in the sibling array field.
    ExcludedFromSiblingArray {
        /// The sibling array of references.
        array: FieldName,
    },

    /// An array here must not contain the sibling reference field's target.
    ExcludesSiblingRef {
        /// The sibling single-reference field.
        reference: FieldName,
    },

    /// A finite amount, strictly positive, at most two decimal places.
    /// Required unless the sibling boolean flag is true; when the flag is
    /// true the field is not evaluated at all.
    PositiveAmountUnless {
        /// The sibling boolean that waives the requirement.
        flag: FieldName,
        /// Message when the amount is missing while the flag is false.
        missing_message: String,
    },

    /// The field must stay empty while a document field holds a tag.
    ForbiddenWhenDocumentEquals {
        /// The document-level discriminant.
        field: FieldName,
        /// The tag that forbids this field.
        value: String,
    },
}

impl RuleKind {
    /// The sibling field names this rule reads, for load-time checks.
    pub fn sibling_fields(&self) -> Vec<&FieldName> {
        match self {
            Self::RequiredIfSiblingIn { field, .. } => vec![field],
            Self::UrlBySelector { selector, .. } => vec![selector],
            Self::ExcludedFromSiblingArray { array } => vec![array],
            Self::ExcludesSiblingRef { reference } => vec![reference],
            Self::PositiveAmountUnless { flag, .. } => vec![flag],
            _ => Vec::new(),
        }
    }

    /// The selector this rule discriminates on, if any.
    pub fn selector(&self) -> Option<&FieldName> {
        match self {
            Self::RequiredIfSiblingIn { field, .. } => Some(field),
            Self::UrlBySelector { selector, .. } => Some(selector),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_table_compile_and_match() {
        let table = PatternTable::new()
            .with("instagram", r"^https?://(www\.)?instagram\.com/.+")
            .with("website", r"^https?://.+");
        let compiled = table.compile("socialLinks").unwrap();

        assert_eq!(
            compiled.matches("instagram", "https://instagram.com/love.hangover"),
            Some(true)
        );
        assert_eq!(
            compiled.matches("instagram", "https://facebook.com/love.hangover"),
            Some(false)
        );
        // No entry: unrestricted.
        assert_eq!(compiled.matches("other", "https://anything.example"), None);
        assert!(!compiled.has("other"));
    }

    #[test]
    fn test_compile_caches_the_table() {
        let table = PatternTable::new().with("website", r"^https?://.+");
        let first = table.compile("socialLinks").unwrap();
        let second = table.compile("socialLinks").unwrap();
        assert!(std::ptr::eq(first, second));
    }

    #[test]
    fn test_pattern_table_bad_source() {
        let table = PatternTable::new().with("website", "https://(unclosed");
        let err = table.compile("socialLinks").unwrap_err();
        assert!(matches!(err, SchemaError::InvalidPattern { .. }));
    }

    #[test]
    fn test_rule_constructors() {
        let r = Rule::error(RuleKind::Required, "Please select a platform");
        assert_eq!(r.severity, Severity::Error);
        assert_eq!(r.message.as_deref(), Some("Please select a platform"));

        let w = Rule::warning(RuleKind::MaxLength(500), "too long");
        assert_eq!(w.severity, Severity::Warning);

        let a = Rule::auto(RuleKind::AbsoluteUrl);
        assert!(a.message.is_none());
    }

    #[test]
    fn test_sibling_fields() {
        let flag = FieldName::new("isFree").unwrap();
        let kind = RuleKind::PositiveAmountUnless {
            flag,
            missing_message: "required".into(),
        };
        let names: Vec<&str> = kind.sibling_fields().iter().map(|f| f.as_str()).collect();
        assert_eq!(names, vec!["isFree"]);
        assert!(kind.selector().is_none());
    }
}
