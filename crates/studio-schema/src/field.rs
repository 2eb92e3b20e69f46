//! # Field Definitions
//!
//! The typed shape of a field: machine name, kind, grouping, visibility,
//! and attached rules. Array-of-object fields carry an inline
//! [`ObjectDef`] sub-schema with its own fields and preview, exactly like
//! the nested social-link and pronoun blocks.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use studio_core::ident::{FieldName, TypeName};

use crate::condition::Condition;
use crate::preview::PreviewSpec;
use crate::rule::Rule;

/// Dropdown/radio options for a select-valued string field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectOptions {
    /// The closed tag set, in display order.
    pub list: Vec<SelectEntry>,
    /// How the editing surface lays the options out.
    pub layout: SelectLayout,
}

impl SelectOptions {
    /// Whether `value` is one of the declared tags.
    pub fn contains(&self, value: &str) -> bool {
        self.list.iter().any(|e| e.value == value)
    }

    /// The display title for a tag, if declared.
    pub fn title_of(&self, value: &str) -> Option<&str> {
        self.list
            .iter()
            .find(|e| e.value == value)
            .map(|e| e.title.as_str())
    }
}

/// One selectable tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectEntry {
    /// Display title shown in the dropdown.
    pub title: String,
    /// The stored tag value.
    pub value: String,
}

impl SelectEntry {
    /// A tag whose display title differs from its stored value.
    pub fn new(title: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            value: value.into(),
        }
    }
}

/// Option layout in the editing surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectLayout {
    /// Dropdown list.
    Dropdown,
    /// Radio buttons.
    Radio,
}

/// An inline object sub-schema for array-of-object members.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectDef {
    /// The object's fields, in declaration order.
    pub fields: Vec<FieldDef>,
    /// Preview rule for list display of each member.
    pub preview: Option<PreviewSpec>,
}

/// A member kind for array fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ArrayMember {
    /// Inline object members with their own sub-schema.
    Object(ObjectDef),
    /// References into a set of registered document types.
    Reference {
        /// Permitted target types.
        to: Vec<TypeName>,
    },
    /// Members of a named, registered object type (shared objects).
    Named {
        /// The registered object type.
        type_name: TypeName,
    },
    /// Rich-text blocks. Opaque to validation.
    Block,
    /// Plain string members.
    String,
}

/// The primitive or composite kind of a field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FieldKind {
    /// Single-line string, optionally restricted to a closed tag set.
    String {
        /// Present for selector fields.
        options: Option<SelectOptions>,
    },
    /// Multi-line text.
    Text {
        /// Editor row hint.
        rows: Option<u32>,
    },
    /// An absolute URL.
    Url,
    /// URL-safe identifier derived from another field.
    Slug {
        /// Field the editing surface offers to derive the slug from.
        source: Option<FieldName>,
        /// Maximum generated length.
        max_length: Option<usize>,
    },
    /// Date and time.
    Datetime,
    /// True/false.
    Boolean,
    /// Numeric value.
    Number,
    /// Uploaded image, optionally with hotspot cropping and caption fields.
    Image {
        /// Whether hotspot cropping is enabled.
        hotspot: bool,
        /// Nested fields (alt text and similar).
        fields: Vec<FieldDef>,
    },
    /// Ordered list of members.
    Array {
        /// Permitted member kinds.
        of: Vec<ArrayMember>,
    },
    /// Reference to one document out of a set of types.
    Reference {
        /// Permitted target types.
        to: Vec<TypeName>,
    },
    /// A named, registered object type used by value.
    ObjectOf {
        /// The registered object type.
        type_name: TypeName,
    },
}

impl FieldKind {
    /// A plain string field.
    pub fn string() -> Self {
        Self::String { options: None }
    }

    /// A select-valued string field with a closed tag set.
    pub fn select(list: Vec<SelectEntry>, layout: SelectLayout) -> Self {
        Self::String {
            options: Some(SelectOptions { list, layout }),
        }
    }

    /// The select options, when this is a selector field.
    pub fn options(&self) -> Option<&SelectOptions> {
        match self {
            Self::String { options } => options.as_ref(),
            _ => None,
        }
    }
}

/// A field declaration inside a type or inline object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDef {
    /// Machine name, unique within the owning type or object.
    pub name: FieldName,
    /// Display title. Defaults to the machine name in the editing surface.
    pub title: Option<String>,
    /// Editor-facing help text.
    pub description: Option<String>,
    /// The field's kind.
    pub kind: FieldKind,
    /// UI group tags this field appears under.
    pub groups: Vec<String>,
    /// The field is shown only while this condition holds.
    pub visible_when: Condition,
    /// The field is read-only while this condition holds.
    pub read_only_when: Option<Condition>,
    /// Validation rules, evaluated in order.
    pub rules: Vec<Rule>,
    /// Initial value for new records.
    pub default: Option<Value>,
}

impl FieldDef {
    /// Whether this field is a selector (select-valued string).
    pub fn is_selector(&self) -> bool {
        self.kind.options().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_options_lookup() {
        let kind = FieldKind::select(
            vec![
                SelectEntry::new("Website", "website"),
                SelectEntry::new("Twitter/X", "twitter"),
            ],
            SelectLayout::Dropdown,
        );
        let opts = kind.options().unwrap();
        assert!(opts.contains("twitter"));
        assert!(!opts.contains("myspace"));
        assert_eq!(opts.title_of("twitter"), Some("Twitter/X"));
        assert_eq!(opts.title_of("myspace"), None);
    }

    #[test]
    fn test_plain_string_has_no_options() {
        assert!(FieldKind::string().options().is_none());
        assert!(FieldKind::Url.options().is_none());
    }
}
