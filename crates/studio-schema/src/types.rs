//! # Type Definitions
//!
//! The top-level declaration for one content type: display kind, editor
//! groups, ordered fields, and the preview rule the list view applies.

use serde::{Deserialize, Serialize};

use studio_core::ident::TypeName;

use crate::field::FieldDef;
use crate::preview::{Icon, PreviewSpec};

/// How a type is exposed to editors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DisplayKind {
    /// A standalone document with its own lifecycle.
    Document,
    /// An embeddable object that only exists inside a parent document.
    Object,
    /// A reusable object shared across workspaces by name.
    SharedObject,
}

/// A named UI group fields can be assigned to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupDef {
    /// Machine name referenced by field `groups` tags.
    pub name: String,
    /// Display title in the editing surface.
    pub title: String,
    /// Symbolic icon on the group tab.
    pub icon: Option<Icon>,
    /// Whether this group opens by default.
    pub default: bool,
}

impl GroupDef {
    /// A non-default group without an icon.
    pub fn new(name: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            title: title.into(),
            icon: None,
            default: false,
        }
    }

    /// Set the tab icon.
    pub fn icon(mut self, icon: Icon) -> Self {
        self.icon = Some(icon);
        self
    }

    /// Mark this group as the default tab.
    pub fn default_tab(mut self) -> Self {
        self.default = true;
        self
    }
}

/// A complete content type declaration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeDef {
    /// Unique machine name, stable across schema versions.
    pub name: TypeName,
    /// Display title.
    pub title: String,
    /// Document, embeddable object, or shared object.
    pub kind: DisplayKind,
    /// Symbolic icon for list views.
    pub icon: Option<Icon>,
    /// Declared UI groups.
    pub groups: Vec<GroupDef>,
    /// Ordered field declarations.
    pub fields: Vec<FieldDef>,
    /// Preview rule for list display.
    pub preview: Option<PreviewSpec>,
}

impl TypeDef {
    /// Look up a field by machine name.
    pub fn field(&self, name: &str) -> Option<&FieldDef> {
        self.fields.iter().find(|f| f.name.as_str() == name)
    }

    /// Whether the type declares a group with this name.
    pub fn has_group(&self, name: &str) -> bool {
        self.groups.iter().any(|g| g.name == name)
    }
}
