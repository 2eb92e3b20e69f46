//! # Validation Engine
//!
//! Walks a document against its type definition and collects violations.
//! Evaluation is pure: the same definition and document always produce
//! the same outcome, and nothing is mutated but the outcome under
//! construction.
//!
//! ## Evaluation order
//!
//! Fields are visited in declaration order. A field whose visibility
//! condition is false is skipped entirely, rules included; this is what
//! keeps a dependent field from failing required rules while its
//! selector has it hidden. Each violated rule contributes exactly one
//! message at the field's path.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use studio_core::{value, StudioError};
use studio_schema::{
    ArrayMember, FieldDef, FieldKind, Rule, RuleKind, SchemaRegistry, TypeDef,
};

use crate::violation::{ValidationOutcome, Violation};

static ABSOLUTE_URL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^https?://.+").expect("static pattern compiles"));

static SLUG_FORMAT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").expect("static pattern compiles"));

/// Validates documents against the types of one registry.
///
/// Construct once per registry; `validate` can then be called freely.
/// The registry should have passed [`SchemaRegistry::verify`]: the
/// engine tolerates misconfiguration it encounters anyway (it logs and
/// skips), but verification is what makes that path unreachable.
#[derive(Debug)]
pub struct DocumentValidator<'a> {
    registry: &'a SchemaRegistry,
}

impl<'a> DocumentValidator<'a> {
    /// A validator over the given registry.
    pub fn new(registry: &'a SchemaRegistry) -> Self {
        Self { registry }
    }

    /// Validate a document against a registered type.
    ///
    /// # Errors
    ///
    /// Returns [`StudioError::Schema`] when `type_name` is not
    /// registered. Rule violations are not errors; they are the outcome.
    pub fn validate(
        &self,
        type_name: &str,
        document: &Value,
    ) -> Result<ValidationOutcome, StudioError> {
        let def = self.registry.get(type_name).ok_or_else(|| {
            StudioError::Schema(format!("unknown type: {type_name:?}"))
        })?;
        Ok(self.validate_type(def, document))
    }

    /// Validate a document against a type definition.
    pub fn validate_type(&self, def: &TypeDef, document: &Value) -> ValidationOutcome {
        let mut outcome = ValidationOutcome::pass();
        self.validate_scope(&def.fields, document, document, "", &mut outcome);
        outcome
    }

    fn validate_scope(
        &self,
        fields: &[FieldDef],
        parent: &Value,
        document: &Value,
        prefix: &str,
        outcome: &mut ValidationOutcome,
    ) {
        for field in fields {
            let own = parent.get(field.name.as_str());
            if !field.visible_when.evaluate(own, parent, document) {
                // Hidden fields are not evaluated.
                continue;
            }
            let path = join_path(prefix, field.name.as_str());

            for rule in &field.rules {
                eval_rule(field, rule, own, parent, document, &path, outcome);
            }

            match &field.kind {
                FieldKind::Image { fields, .. } => {
                    if let Some(nested) = own {
                        self.validate_scope(fields, nested, document, &path, outcome);
                    }
                }
                FieldKind::ObjectOf { type_name } => {
                    if let (Some(nested), Some(obj_def)) =
                        (own, self.registry.get(type_name.as_str()))
                    {
                        self.validate_scope(&obj_def.fields, nested, document, &path, outcome);
                    }
                }
                FieldKind::Array { of } => {
                    if let Some(items) = own.and_then(Value::as_array) {
                        for (index, item) in items.iter().enumerate() {
                            let item_path = format!("{path}[{index}]");
                            self.validate_member(of, item, document, &item_path, outcome);
                        }
                    }
                }
                _ => {}
            }
        }
    }

    fn validate_member(
        &self,
        members: &[ArrayMember],
        item: &Value,
        document: &Value,
        path: &str,
        outcome: &mut ValidationOutcome,
    ) {
        for member in members {
            match member {
                ArrayMember::Object(obj) if item.is_object() => {
                    self.validate_scope(&obj.fields, item, document, path, outcome);
                }
                ArrayMember::Named { type_name } => {
                    if let Some(obj_def) = self.registry.get(type_name.as_str()) {
                        if item.is_object() {
                            self.validate_scope(&obj_def.fields, item, document, path, outcome);
                        }
                    }
                }
                _ => {}
            }
        }
    }
}

/// Whether a field currently carries a usable value, honouring the
/// field's kind (slug objects count by their `current`, references by
/// their `_ref`).
fn field_provided(field: &FieldDef, parent: &Value) -> bool {
    let name = field.name.as_str();
    match &field.kind {
        FieldKind::Slug { .. } => slug_current(parent.get(name)).is_some(),
        FieldKind::Reference { .. } => value::ref_field(parent, name).is_some(),
        _ => value::is_provided(parent, name),
    }
}

/// The effective slug text: a plain string, or the `current` key of a
/// slug object. Blank either way means no slug yet.
fn slug_current(own: Option<&Value>) -> Option<&str> {
    let own = own?;
    let text = match own {
        Value::String(s) => s.as_str(),
        other => other.get("current")?.as_str()?,
    };
    if text.trim().is_empty() {
        None
    } else {
        Some(text)
    }
}

/// Whether an amount has at most two decimal places.
fn two_decimals(v: f64) -> bool {
    let scaled = v * 100.0;
    (scaled - scaled.round()).abs() < 1e-6
}

fn eval_rule(
    field: &FieldDef,
    rule: &Rule,
    own: Option<&Value>,
    parent: &Value,
    document: &Value,
    path: &str,
    outcome: &mut ValidationOutcome,
) {
    let name = field.name.as_str();
    let mut fail = |message: String| {
        outcome.push(Violation {
            field: path.to_string(),
            message,
            severity: rule.severity,
        });
    };
    let fixed = |default: &str| -> String {
        rule.message.clone().unwrap_or_else(|| default.to_string())
    };

    match &rule.kind {
        RuleKind::Required => {
            if !field_provided(field, parent) {
                fail(fixed("Required"));
            }
        }

        RuleKind::RequiredIfSiblingIn { field: selector, tags } => {
            if let Some(tag) = value::str_field(parent, selector.as_str()) {
                if tags.iter().any(|t| t == tag) && !field_provided(field, parent) {
                    fail(fixed("Required"));
                }
            }
        }

        RuleKind::AbsoluteUrl => {
            if let Some(url) = value::str_field(parent, name) {
                if !ABSOLUTE_URL.is_match(url) {
                    fail(fixed("Must be a valid URL"));
                }
            }
        }

        RuleKind::UrlBySelector { selector, patterns } => {
            let (Some(url), Some(tag)) = (
                value::str_field(parent, name),
                value::str_field(parent, selector.as_str()),
            ) else {
                return;
            };
            let compiled = match patterns.compile(name) {
                Ok(compiled) => compiled,
                Err(e) => {
                    // Verified registries cannot reach this; tolerate an
                    // unverified one without inventing a violation.
                    tracing::warn!(field = path, error = %e, "pattern table did not compile");
                    return;
                }
            };
            // A tag with no entry is unrestricted.
            if compiled.matches(tag, url) == Some(false) {
                let message = rule
                    .message
                    .clone()
                    .unwrap_or_else(|| format!("Please enter a valid {tag} URL"));
                fail(message);
            }
        }

        RuleKind::SlugFormat => {
            if let Some(current) = slug_current(own) {
                if !SLUG_FORMAT.is_match(current) {
                    fail(fixed(
                        "Slug can only contain lowercase letters, numbers, and hyphens",
                    ));
                }
            }
        }

        RuleKind::MaxLength(limit) => {
            if let Some(text) = value::str_field(parent, name) {
                if text.chars().count() > *limit {
                    fail(fixed("Too long"));
                }
            }
        }

        RuleKind::ExcludedFromSiblingArray { array } => {
            let (Some(own_ref), Some(items)) = (
                own.and_then(value::as_ref),
                value::array_field(parent, array.as_str()),
            ) else {
                return;
            };
            if items.iter().filter_map(value::as_ref).any(|r| r == own_ref) {
                fail(fixed("Already referenced by a sibling field"));
            }
        }

        RuleKind::ExcludesSiblingRef { reference } => {
            let (Some(items), Some(target)) = (
                own.and_then(Value::as_array),
                value::ref_field(parent, reference.as_str()),
            ) else {
                return;
            };
            if items.iter().filter_map(value::as_ref).any(|r| r == target) {
                fail(fixed("Contains a reference a sibling field already holds"));
            }
        }

        RuleKind::PositiveAmountUnless { flag, missing_message } => {
            if value::bool_field(parent, flag.as_str()) == Some(true) {
                // Flag waives the field entirely.
                return;
            }
            if !value::is_provided(parent, name) {
                fail(missing_message.clone());
                return;
            }
            let valid = value::num_field(parent, name)
                .is_some_and(|v| v.is_finite() && v > 0.0 && two_decimals(v));
            if !valid {
                fail(fixed("Must be a positive number"));
            }
        }

        RuleKind::ForbiddenWhenDocumentEquals { field: doc_field, value: tag } => {
            if value::is_provided(parent, name)
                && value::str_field(document, doc_field.as_str()) == Some(tag)
            {
                fail(fixed("Not allowed for this document"));
            }
        }
    }
}

fn join_path(prefix: &str, name: &str) -> String {
    if prefix.is_empty() {
        name.to_string()
    } else {
        format!("{prefix}.{name}")
    }
}
