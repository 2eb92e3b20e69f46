//! # Schema Builders
//!
//! Fluent assembly for [`TypeDef`]s and their fields. Builders defer all
//! identifier validation to `build()`, so content declarations read as
//! one chained expression and fail with a structured [`SchemaError`]
//! rather than mid-chain.

use serde_json::Value;

use studio_core::ident::{FieldName, TypeName};

use crate::condition::Condition;
use crate::error::SchemaError;
use crate::field::{ArrayMember, FieldDef, FieldKind, ObjectDef, SelectEntry, SelectLayout};
use crate::preview::{Icon, PreviewSpec};
use crate::rule::{Rule, RuleKind};
use crate::types::{DisplayKind, GroupDef, TypeDef};

// ─── Field builder ───────────────────────────────────────────────────

/// A field kind whose type and field names are still raw strings.
///
/// Resolution happens in `build()` so chains stay infallible.
#[derive(Debug, Clone)]
enum PendingKind {
    Ready(FieldKind),
    Slug {
        source: Option<String>,
        max_length: Option<usize>,
    },
    Reference {
        to: Vec<String>,
    },
    ObjectOf {
        type_name: String,
    },
}

impl PendingKind {
    fn resolve(self) -> Result<FieldKind, SchemaError> {
        match self {
            Self::Ready(kind) => Ok(kind),
            Self::Slug { source, max_length } => Ok(FieldKind::Slug {
                source: source.map(FieldName::new).transpose()?,
                max_length,
            }),
            Self::Reference { to } => Ok(FieldKind::Reference {
                to: to
                    .into_iter()
                    .map(TypeName::new)
                    .collect::<Result<Vec<_>, _>>()?,
            }),
            Self::ObjectOf { type_name } => Ok(FieldKind::ObjectOf {
                type_name: TypeName::new(type_name)?,
            }),
        }
    }
}

/// Builder for one field declaration.
#[derive(Debug, Clone)]
pub struct Field {
    name: String,
    title: Option<String>,
    description: Option<String>,
    kind: PendingKind,
    groups: Vec<String>,
    visible_when: Condition,
    read_only_when: Option<Condition>,
    rules: Vec<Rule>,
    default: Option<Value>,
}

impl Field {
    fn new(name: &str, kind: FieldKind) -> Self {
        Self::pending(name, PendingKind::Ready(kind))
    }

    fn pending(name: &str, kind: PendingKind) -> Self {
        Self {
            name: name.to_string(),
            title: None,
            description: None,
            kind,
            groups: Vec::new(),
            visible_when: Condition::Always,
            read_only_when: None,
            rules: Vec::new(),
            default: None,
        }
    }

    /// A plain string field.
    pub fn string(name: &str) -> Self {
        Self::new(name, FieldKind::string())
    }

    /// A select-valued string field with a closed tag set.
    pub fn select(name: &str, list: Vec<SelectEntry>, layout: SelectLayout) -> Self {
        Self::new(name, FieldKind::select(list, layout))
    }

    /// A multi-line text field.
    pub fn text(name: &str, rows: Option<u32>) -> Self {
        Self::new(name, FieldKind::Text { rows })
    }

    /// A URL field.
    pub fn url(name: &str) -> Self {
        Self::new(name, FieldKind::Url)
    }

    /// A slug field derived from a source field.
    pub fn slug(name: &str, source: Option<&str>, max_length: Option<usize>) -> Self {
        Self::pending(
            name,
            PendingKind::Slug {
                source: source.map(str::to_string),
                max_length,
            },
        )
    }

    /// A date-time field.
    pub fn datetime(name: &str) -> Self {
        Self::new(name, FieldKind::Datetime)
    }

    /// A boolean field.
    pub fn boolean(name: &str) -> Self {
        Self::new(name, FieldKind::Boolean)
    }

    /// A numeric field.
    pub fn number(name: &str) -> Self {
        Self::new(name, FieldKind::Number)
    }

    /// An image field.
    pub fn image(name: &str, hotspot: bool) -> Self {
        Self::new(
            name,
            FieldKind::Image {
                hotspot,
                fields: Vec::new(),
            },
        )
    }

    /// An image field with nested fields (alt text and similar).
    pub fn image_with_fields(name: &str, hotspot: bool, fields: Vec<FieldDef>) -> Self {
        Self::new(name, FieldKind::Image { hotspot, fields })
    }

    /// An array field.
    pub fn array(name: &str, of: Vec<ArrayMember>) -> Self {
        Self::new(name, FieldKind::Array { of })
    }

    /// A reference field targeting the named types.
    pub fn reference(name: &str, to: &[&str]) -> Self {
        Self::pending(
            name,
            PendingKind::Reference {
                to: to.iter().map(|t| t.to_string()).collect(),
            },
        )
    }

    /// A field holding a registered object type by value.
    pub fn object_of(name: &str, type_name: &str) -> Self {
        Self::pending(
            name,
            PendingKind::ObjectOf {
                type_name: type_name.to_string(),
            },
        )
    }

    /// Set the display title.
    pub fn title(mut self, title: &str) -> Self {
        self.title = Some(title.to_string());
        self
    }

    /// Set the editor-facing description.
    pub fn description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    /// Assign to one UI group.
    pub fn group(mut self, group: &str) -> Self {
        self.groups.push(group.to_string());
        self
    }

    /// Assign to several UI groups.
    pub fn in_groups(mut self, groups: &[&str]) -> Self {
        self.groups.extend(groups.iter().map(|g| g.to_string()));
        self
    }

    /// Show this field only while the condition holds.
    pub fn visible_when(mut self, condition: Condition) -> Self {
        self.visible_when = condition;
        self
    }

    /// Make this field read-only while the condition holds.
    pub fn read_only_when(mut self, condition: Condition) -> Self {
        self.read_only_when = Some(condition);
        self
    }

    /// Attach a rule.
    pub fn rule(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Shorthand for a required rule with an error message.
    pub fn required(self, message: &str) -> Self {
        self.rule(Rule::error(RuleKind::Required, message))
    }

    /// Set the initial value for new records.
    pub fn default_value(mut self, value: Value) -> Self {
        self.default = Some(value);
        self
    }

    /// Finish the field.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::Identifier`] if the machine name is invalid.
    pub fn build(self) -> Result<FieldDef, SchemaError> {
        let name = FieldName::new(self.name)?;
        Ok(FieldDef {
            name,
            title: self.title,
            description: self.description,
            kind: self.kind.resolve()?,
            groups: self.groups,
            visible_when: self.visible_when,
            read_only_when: self.read_only_when,
            rules: self.rules,
            default: self.default,
        })
    }
}

// ─── Inline object builder ───────────────────────────────────────────

/// Builder for an inline object sub-schema (array-of-object members).
#[derive(Debug, Default)]
pub struct ObjectBuilder {
    fields: Vec<Field>,
    preview: Option<PreviewSpec>,
}

impl ObjectBuilder {
    /// Start an empty inline object.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a field.
    pub fn field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    /// Set the member preview rule.
    pub fn preview(mut self, preview: PreviewSpec) -> Self {
        self.preview = Some(preview);
        self
    }

    /// Finish the object.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::DuplicateField`] for repeated machine names
    /// and propagates field build errors.
    pub fn build(self) -> Result<ObjectDef, SchemaError> {
        let fields = build_fields("inline object", self.fields)?;
        Ok(ObjectDef {
            fields,
            preview: self.preview,
        })
    }
}

// ─── Type builder ────────────────────────────────────────────────────

/// Builder for a complete content type.
#[derive(Debug)]
pub struct TypeBuilder {
    name: String,
    title: String,
    kind: DisplayKind,
    icon: Option<Icon>,
    groups: Vec<GroupDef>,
    fields: Vec<Field>,
    preview: Option<PreviewSpec>,
}

impl TypeBuilder {
    fn new(name: &str, title: &str, kind: DisplayKind) -> Self {
        Self {
            name: name.to_string(),
            title: title.to_string(),
            kind,
            icon: None,
            groups: Vec::new(),
            fields: Vec::new(),
            preview: None,
        }
    }

    /// A standalone document type.
    pub fn document(name: &str, title: &str) -> Self {
        Self::new(name, title, DisplayKind::Document)
    }

    /// An embeddable object type.
    pub fn object(name: &str, title: &str) -> Self {
        Self::new(name, title, DisplayKind::Object)
    }

    /// A reusable object shared across workspaces.
    pub fn shared_object(name: &str, title: &str) -> Self {
        Self::new(name, title, DisplayKind::SharedObject)
    }

    /// Set the list-view icon.
    pub fn icon(mut self, icon: Icon) -> Self {
        self.icon = Some(icon);
        self
    }

    /// Declare a UI group.
    pub fn group(mut self, group: GroupDef) -> Self {
        self.groups.push(group);
        self
    }

    /// Append a field.
    pub fn field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    /// Set the preview rule.
    pub fn preview(mut self, preview: PreviewSpec) -> Self {
        self.preview = Some(preview);
        self
    }

    /// Finish the type.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError`] for invalid machine names, duplicate
    /// fields, or fields assigned to undeclared groups. Cross-type
    /// checks (reference targets) happen later in registry verification.
    pub fn build(self) -> Result<TypeDef, SchemaError> {
        let name = TypeName::new(self.name)?;
        let fields = build_fields(name.as_str(), self.fields)?;

        for field in &fields {
            for group in &field.groups {
                if !self.groups.iter().any(|g| &g.name == group) {
                    return Err(SchemaError::UnknownGroup {
                        type_name: name.as_str().to_string(),
                        field: field.name.as_str().to_string(),
                        group: group.clone(),
                    });
                }
            }
        }

        Ok(TypeDef {
            name,
            title: self.title,
            kind: self.kind,
            icon: self.icon,
            groups: self.groups,
            fields,
            preview: self.preview,
        })
    }
}

/// Build a field list, rejecting duplicate machine names.
fn build_fields(owner: &str, fields: Vec<Field>) -> Result<Vec<FieldDef>, SchemaError> {
    let mut built = Vec::with_capacity(fields.len());
    let mut seen = std::collections::BTreeSet::new();
    for field in fields {
        let def = field.build()?;
        if !seen.insert(def.name.clone()) {
            return Err(SchemaError::DuplicateField {
                type_name: owner.to_string(),
                field: def.name.as_str().to_string(),
            });
        }
        built.push(def);
    }
    Ok(built)
}
