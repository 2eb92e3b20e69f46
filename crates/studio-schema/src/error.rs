//! # Schema Errors — Misconfiguration Class
//!
//! Every variant here is a schema-authoring defect. These are raised by
//! builders and by [`crate::registry::SchemaRegistry::verify`]; they never
//! occur while validating editor input.

use thiserror::Error;

use studio_core::StudioError;

/// Error in a schema declaration.
#[derive(Error, Debug)]
pub enum SchemaError {
    /// Two types registered under the same name.
    #[error("duplicate type: '{0}'")]
    DuplicateType(String),

    /// Two fields with the same machine name in one type or inline object.
    #[error("type '{type_name}': duplicate field '{field}'")]
    DuplicateField {
        /// The owning type.
        type_name: String,
        /// The repeated field name.
        field: String,
    },

    /// An identifier failed machine-name validation.
    #[error("invalid identifier: {0}")]
    Identifier(String),

    /// A reference field targets a type that is not registered.
    #[error("type '{type_name}': field '{field}' references unregistered type '{target}'")]
    UnknownReferenceTarget {
        /// The owning type.
        type_name: String,
        /// The reference-valued field.
        field: String,
        /// The missing target type name.
        target: String,
    },

    /// A rule or condition names a sibling field that does not exist.
    #[error("type '{type_name}': '{field}' depends on unknown sibling '{sibling}'")]
    UnknownSibling {
        /// The owning type.
        type_name: String,
        /// The field carrying the rule or condition.
        field: String,
        /// The missing sibling field name.
        sibling: String,
    },

    /// A rule names a selector field that is not a select-option field.
    #[error("type '{type_name}': '{field}' uses '{selector}' as a selector, but it has no option list")]
    NotASelector {
        /// The owning type.
        type_name: String,
        /// The field carrying the rule.
        field: String,
        /// The non-selector field named as discriminant.
        selector: String,
    },

    /// A pattern table entry does not compile as a regular expression.
    #[error("type '{type_name}': pattern for tag '{tag}' does not compile: {reason}")]
    InvalidPattern {
        /// The owning type.
        type_name: String,
        /// The selector tag the pattern belongs to.
        tag: String,
        /// The regex compile error.
        reason: String,
    },

    /// A pattern table entry is keyed by a tag the selector does not offer.
    #[error("type '{type_name}': pattern table tag '{tag}' is not an option of selector '{selector}'")]
    TagOutsideSelector {
        /// The owning type.
        type_name: String,
        /// The stray tag.
        tag: String,
        /// The selector whose option list was checked.
        selector: String,
    },

    /// A field is assigned to a group the type does not declare.
    #[error("type '{type_name}': field '{field}' assigned to unknown group '{group}'")]
    UnknownGroup {
        /// The owning type.
        type_name: String,
        /// The field with the stray group tag.
        field: String,
        /// The undeclared group name.
        group: String,
    },

    /// A preview selection names a field that does not exist.
    #[error("type '{type_name}': preview selects unknown field '{path}'")]
    UnknownPreviewField {
        /// The owning type.
        type_name: String,
        /// The unresolvable selection path.
        path: String,
    },

    /// A preview derivation names a selection alias that was not declared.
    #[error("type '{type_name}': preview derivation uses undeclared alias '{alias}'")]
    UnknownPreviewAlias {
        /// The owning type.
        type_name: String,
        /// The missing alias.
        alias: String,
    },
}

impl From<StudioError> for SchemaError {
    fn from(e: StudioError) -> Self {
        SchemaError::Identifier(e.to_string())
    }
}
