//! # Visibility Conditions
//!
//! Declarative replacements for the `hidden`/`readOnly` closures the old
//! schema files captured sibling state with. A [`Condition`] is plain
//! data describing when a field is visible (or read-only); the editing
//! surface evaluates it against the current record on every change.
//!
//! The variant set is deliberately closed. It covers exactly the shapes
//! the content types use; this is not a general predicate language.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use studio_core::ident::FieldName;
use studio_core::value;

/// A predicate over a field's own value, its siblings, and the document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Condition {
    /// Always true.
    Always,
    /// True when the sibling selector holds one of the listed tags.
    SiblingIn {
        /// The discriminant field in the same record.
        field: FieldName,
        /// The tag subset that satisfies the condition.
        tags: Vec<String>,
    },
    /// True when the sibling field carries a usable value.
    SiblingProvided {
        /// The sibling field to probe.
        field: FieldName,
    },
    /// True when a document-level field carries a usable value.
    DocumentProvided {
        /// The document field to probe.
        field: FieldName,
    },
    /// True when a document-level field holds the given tag.
    DocumentEquals {
        /// The document field to compare.
        field: FieldName,
        /// The tag value that satisfies the condition.
        value: String,
    },
    /// True when the field itself has no usable value yet.
    SelfNotProvided,
    /// True when every inner condition is true.
    All(Vec<Condition>),
}

impl Condition {
    /// Evaluate against the current editing context.
    ///
    /// `own` is the field's current value (if any), `parent` the record
    /// the field lives in, `document` the root document. For top-level
    /// fields, `parent` and `document` are the same value.
    pub fn evaluate(&self, own: Option<&Value>, parent: &Value, document: &Value) -> bool {
        match self {
            Self::Always => true,
            Self::SiblingIn { field, tags } => match value::str_field(parent, field.as_str()) {
                Some(tag) => tags.iter().any(|t| t == tag),
                None => false,
            },
            Self::SiblingProvided { field } => value::is_provided(parent, field.as_str()),
            Self::DocumentProvided { field } => value::is_provided(document, field.as_str()),
            Self::DocumentEquals { field, value: v } => {
                value::str_field(document, field.as_str()) == Some(v.as_str())
            }
            Self::SelfNotProvided => match own {
                None | Some(Value::Null) => true,
                Some(Value::String(s)) => s.trim().is_empty(),
                Some(_) => false,
            },
            Self::All(inner) => inner.iter().all(|c| c.evaluate(own, parent, document)),
        }
    }

    /// The sibling field names this condition reads, for load-time checks.
    pub fn sibling_fields(&self) -> Vec<&FieldName> {
        match self {
            Self::SiblingIn { field, .. } | Self::SiblingProvided { field } => vec![field],
            Self::All(inner) => inner.iter().flat_map(|c| c.sibling_fields()).collect(),
            _ => Vec::new(),
        }
    }
}
