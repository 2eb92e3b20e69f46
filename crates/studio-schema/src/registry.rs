//! # Schema Registry
//!
//! Holds the verified set of type definitions for one workspace (or the
//! whole studio) and performs the load-time checks that make
//! misconfiguration a schema-authoring error instead of a runtime
//! condition: reference targets must be registered, rules and conditions
//! may only name siblings that exist, selectors must actually be select
//! fields, pattern tables must compile and stay inside their selector's
//! tag set, and preview selections must resolve.

use std::collections::BTreeMap;

use studio_core::ident::{FieldName, TypeName};

use crate::condition::Condition;
use crate::error::SchemaError;
use crate::field::{ArrayMember, FieldDef, FieldKind};
use crate::preview::PreviewSpec;
use crate::rule::RuleKind;
use crate::types::TypeDef;

/// A named collection of type definitions.
#[derive(Debug, Default)]
pub struct SchemaRegistry {
    types: BTreeMap<TypeName, TypeDef>,
}

impl SchemaRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a type.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::DuplicateType`] if the name is taken.
    pub fn insert(&mut self, def: TypeDef) -> Result<(), SchemaError> {
        if self.types.contains_key(&def.name) {
            return Err(SchemaError::DuplicateType(def.name.as_str().to_string()));
        }
        self.types.insert(def.name.clone(), def);
        Ok(())
    }

    /// Look up a type by machine name.
    pub fn get(&self, name: &str) -> Option<&TypeDef> {
        self.types.get(name)
    }

    /// All registered type names, sorted.
    pub fn type_names(&self) -> Vec<&str> {
        self.types.keys().map(|k| k.as_str()).collect()
    }

    /// Iterate over all registered types in name order.
    pub fn types(&self) -> impl Iterator<Item = &TypeDef> {
        self.types.values()
    }

    /// Number of registered types.
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Verify the whole registry.
    ///
    /// Walks every type, every inline object, and every preview. Returns
    /// the first defect found. A registry that passes `verify` cannot
    /// produce a misconfiguration condition later: validation and preview
    /// derivation only consume what was checked here.
    pub fn verify(&self) -> Result<(), SchemaError> {
        for def in self.types.values() {
            self.verify_type(def)?;
            tracing::debug!(type_name = def.name.as_str(), "schema type verified");
        }
        tracing::info!(types = self.types.len(), "schema registry verified");
        Ok(())
    }

    fn verify_type(&self, def: &TypeDef) -> Result<(), SchemaError> {
        self.verify_scope(def, &def.fields, &def.fields)?;
        if let Some(preview) = &def.preview {
            verify_preview(def.name.as_str(), preview, &def.fields)?;
        }
        Ok(())
    }

    /// Verify one field scope (the top level of a type, or an inline
    /// object). `root` is always the type's top-level field list, used to
    /// resolve document-level conditions.
    fn verify_scope(
        &self,
        def: &TypeDef,
        scope: &[FieldDef],
        root: &[FieldDef],
    ) -> Result<(), SchemaError> {
        let mut seen = std::collections::BTreeSet::new();
        for field in scope {
            if !seen.insert(&field.name) {
                return Err(SchemaError::DuplicateField {
                    type_name: def.name.as_str().to_string(),
                    field: field.name.as_str().to_string(),
                });
            }
        }

        for field in scope {
            self.verify_field(def, field, scope, root)?;
        }
        Ok(())
    }

    fn verify_field(
        &self,
        def: &TypeDef,
        field: &FieldDef,
        scope: &[FieldDef],
        root: &[FieldDef],
    ) -> Result<(), SchemaError> {
        let type_name = def.name.as_str();

        // Conditions may only name fields that exist.
        check_condition(type_name, field, &field.visible_when, scope, root)?;
        if let Some(cond) = &field.read_only_when {
            check_condition(type_name, field, cond, scope, root)?;
        }

        // Rule sibling references and selector shape.
        for rule in &field.rules {
            for sibling in rule.kind.sibling_fields() {
                require_sibling(type_name, field, sibling, scope)?;
            }
            if let Some(selector) = rule.kind.selector() {
                let sel_field = find_field(scope, selector).ok_or_else(|| {
                    SchemaError::UnknownSibling {
                        type_name: type_name.to_string(),
                        field: field.name.as_str().to_string(),
                        sibling: selector.as_str().to_string(),
                    }
                })?;
                let options = sel_field.kind.options().ok_or_else(|| {
                    SchemaError::NotASelector {
                        type_name: type_name.to_string(),
                        field: field.name.as_str().to_string(),
                        selector: selector.as_str().to_string(),
                    }
                })?;
                if let RuleKind::UrlBySelector { patterns, .. } = &rule.kind {
                    patterns.compile(type_name)?;
                    for (tag, _) in patterns.entries() {
                        if !options.contains(tag) {
                            return Err(SchemaError::TagOutsideSelector {
                                type_name: type_name.to_string(),
                                tag: tag.to_string(),
                                selector: selector.as_str().to_string(),
                            });
                        }
                    }
                }
            }
        }

        // Kind-specific checks, recursing into nested scopes.
        match &field.kind {
            FieldKind::Reference { to } => {
                self.require_targets(type_name, field, to)?;
            }
            FieldKind::ObjectOf { type_name: target } => {
                self.require_targets(type_name, field, std::slice::from_ref(target))?;
            }
            FieldKind::Slug { source: Some(source), .. } => {
                require_sibling(type_name, field, source, scope)?;
            }
            FieldKind::Image { fields, .. } => {
                // Image objects carry a platform-populated `asset` key, so
                // nested conditions may probe it without declaring it.
                let mut scope_fields = fields.clone();
                if !fields.iter().any(|f| f.name.as_str() == "asset") {
                    scope_fields.push(implicit_field("asset")?);
                }
                self.verify_scope(def, &scope_fields, root)?;
            }
            FieldKind::Array { of } => {
                for member in of {
                    match member {
                        ArrayMember::Object(obj) => {
                            self.verify_scope(def, &obj.fields, root)?;
                            if let Some(preview) = &obj.preview {
                                verify_preview(type_name, preview, &obj.fields)?;
                            }
                        }
                        ArrayMember::Reference { to } => {
                            self.require_targets(type_name, field, to)?;
                        }
                        ArrayMember::Named { type_name: target } => {
                            self.require_targets(type_name, field, std::slice::from_ref(target))?;
                        }
                        ArrayMember::Block | ArrayMember::String => {}
                    }
                }
            }
            _ => {}
        }

        Ok(())
    }

    fn require_targets(
        &self,
        type_name: &str,
        field: &FieldDef,
        targets: &[TypeName],
    ) -> Result<(), SchemaError> {
        for target in targets {
            if !self.types.contains_key(target) {
                return Err(SchemaError::UnknownReferenceTarget {
                    type_name: type_name.to_string(),
                    field: field.name.as_str().to_string(),
                    target: target.as_str().to_string(),
                });
            }
        }
        Ok(())
    }
}

/// A synthetic declaration for a platform-populated key.
fn implicit_field(name: &str) -> Result<FieldDef, SchemaError> {
    Ok(FieldDef {
        name: FieldName::new(name)?,
        title: None,
        description: None,
        kind: FieldKind::string(),
        groups: Vec::new(),
        visible_when: Condition::Always,
        read_only_when: None,
        rules: Vec::new(),
        default: None,
    })
}

fn find_field<'a>(scope: &'a [FieldDef], name: &FieldName) -> Option<&'a FieldDef> {
    scope.iter().find(|f| &f.name == name)
}

fn require_sibling(
    type_name: &str,
    field: &FieldDef,
    sibling: &FieldName,
    scope: &[FieldDef],
) -> Result<(), SchemaError> {
    if find_field(scope, sibling).is_some() {
        Ok(())
    } else {
        Err(SchemaError::UnknownSibling {
            type_name: type_name.to_string(),
            field: field.name.as_str().to_string(),
            sibling: sibling.as_str().to_string(),
        })
    }
}

fn check_condition(
    type_name: &str,
    field: &FieldDef,
    condition: &Condition,
    scope: &[FieldDef],
    root: &[FieldDef],
) -> Result<(), SchemaError> {
    for sibling in condition.sibling_fields() {
        require_sibling(type_name, field, sibling, scope)?;
    }
    // Document-level probes resolve against the type's top-level fields.
    match condition {
        Condition::DocumentProvided { field: doc_field }
        | Condition::DocumentEquals { field: doc_field, .. } => {
            require_sibling(type_name, field, doc_field, root)
        }
        Condition::All(inner) => {
            for cond in inner {
                check_condition(type_name, field, cond, scope, root)?;
            }
            Ok(())
        }
        _ => Ok(()),
    }
}

fn verify_preview(
    type_name: &str,
    preview: &PreviewSpec,
    scope: &[FieldDef],
) -> Result<(), SchemaError> {
    for path in preview.select.values() {
        let head = path.split('.').next().unwrap_or(path);
        if !scope.iter().any(|f| f.name.as_str() == head) {
            return Err(SchemaError::UnknownPreviewField {
                type_name: type_name.to_string(),
                path: path.clone(),
            });
        }
    }
    for alias in preview.derive.aliases() {
        if !preview.select.contains_key(alias) {
            return Err(SchemaError::UnknownPreviewAlias {
                type_name: type_name.to_string(),
                alias: alias.to_string(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::{Field, TypeBuilder};
    use crate::field::{SelectEntry, SelectLayout};
    use crate::preview::PreviewSpec;
    use crate::rule::{PatternTable, Rule, RuleKind};

    fn platform_select() -> Field {
        Field::select(
            "platform",
            vec![
                SelectEntry::new("Website", "website"),
                SelectEntry::new("Instagram", "instagram"),
                SelectEntry::new("Other", "other"),
            ],
            SelectLayout::Dropdown,
        )
    }

    fn registry_with(defs: Vec<TypeDef>) -> SchemaRegistry {
        let mut reg = SchemaRegistry::new();
        for def in defs {
            reg.insert(def).unwrap();
        }
        reg
    }

    #[test]
    fn test_duplicate_type_rejected() {
        let a = TypeBuilder::document("venue", "Venue").build().unwrap();
        let b = TypeBuilder::document("venue", "Venue").build().unwrap();
        let mut reg = SchemaRegistry::new();
        reg.insert(a).unwrap();
        assert!(matches!(
            reg.insert(b).unwrap_err(),
            SchemaError::DuplicateType(_)
        ));
    }

    #[test]
    fn test_verify_accepts_consistent_registry() {
        let venue = TypeBuilder::document("venue", "Venue")
            .field(Field::string("name").required("A venue name is required"))
            .preview(PreviewSpec::select_fields("name", None, None))
            .build()
            .unwrap();
        let event = TypeBuilder::document("event", "Event")
            .field(Field::string("name"))
            .field(Field::reference("venue", &["venue"]))
            .build()
            .unwrap();
        let reg = registry_with(vec![venue, event]);
        reg.verify().unwrap();
    }

    #[test]
    fn test_unregistered_reference_target() {
        let event = TypeBuilder::document("event", "Event")
            .field(Field::reference("venue", &["venue"]))
            .build()
            .unwrap();
        let reg = registry_with(vec![event]);
        assert!(matches!(
            reg.verify().unwrap_err(),
            SchemaError::UnknownReferenceTarget { .. }
        ));
    }

    #[test]
    fn test_rule_naming_unknown_sibling() {
        let t = TypeBuilder::object("socialLink", "Social Link")
            .field(Field::string("name").rule(Rule::error(
                RuleKind::RequiredIfSiblingIn {
                    field: FieldName::new("platform").unwrap(),
                    tags: vec!["website".into()],
                },
                "Please enter a name for this website",
            )))
            .build()
            .unwrap();
        let reg = registry_with(vec![t]);
        assert!(matches!(
            reg.verify().unwrap_err(),
            SchemaError::UnknownSibling { .. }
        ));
    }

    #[test]
    fn test_selector_must_have_options() {
        let t = TypeBuilder::object("socialLink", "Social Link")
            .field(Field::string("platform")) // no option list
            .field(Field::url("url").rule(Rule::auto(RuleKind::UrlBySelector {
                selector: FieldName::new("platform").unwrap(),
                patterns: PatternTable::new(),
            })))
            .build()
            .unwrap();
        let reg = registry_with(vec![t]);
        assert!(matches!(
            reg.verify().unwrap_err(),
            SchemaError::NotASelector { .. }
        ));
    }

    #[test]
    fn test_pattern_tag_outside_selector() {
        let t = TypeBuilder::object("socialLink", "Social Link")
            .field(platform_select())
            .field(Field::url("url").rule(Rule::auto(RuleKind::UrlBySelector {
                selector: FieldName::new("platform").unwrap(),
                patterns: PatternTable::new().with("myspace", "^https?://.+"),
            })))
            .build()
            .unwrap();
        let reg = registry_with(vec![t]);
        assert!(matches!(
            reg.verify().unwrap_err(),
            SchemaError::TagOutsideSelector { .. }
        ));
    }

    #[test]
    fn test_bad_pattern_rejected() {
        let t = TypeBuilder::object("socialLink", "Social Link")
            .field(platform_select())
            .field(Field::url("url").rule(Rule::auto(RuleKind::UrlBySelector {
                selector: FieldName::new("platform").unwrap(),
                patterns: PatternTable::new().with("instagram", "(unclosed"),
            })))
            .build()
            .unwrap();
        let reg = registry_with(vec![t]);
        assert!(matches!(
            reg.verify().unwrap_err(),
            SchemaError::InvalidPattern { .. }
        ));
    }

    #[test]
    fn test_preview_unknown_field() {
        let t = TypeBuilder::document("venue", "Venue")
            .field(Field::string("name"))
            .preview(PreviewSpec::select_fields("title", None, None))
            .build()
            .unwrap();
        let reg = registry_with(vec![t]);
        assert!(matches!(
            reg.verify().unwrap_err(),
            SchemaError::UnknownPreviewField { .. }
        ));
    }

    #[test]
    fn test_preview_dotted_path_resolves_head() {
        let t = TypeBuilder::document("venue", "Venue")
            .field(Field::string("name"))
            .field(Field::array("media", vec![]))
            .preview(PreviewSpec::select_fields("name", Some("media.0"), None))
            .build()
            .unwrap();
        let reg = registry_with(vec![t]);
        reg.verify().unwrap();
    }

    #[test]
    fn test_image_nested_condition_may_probe_asset() {
        let alt = Field::string("alt")
            .visible_when(Condition::SiblingProvided {
                field: FieldName::new("asset").unwrap(),
            })
            .build()
            .unwrap();
        let t = TypeBuilder::document("member", "Member")
            .field(Field::image_with_fields("image", true, vec![alt]))
            .build()
            .unwrap();
        let reg = registry_with(vec![t]);
        reg.verify().unwrap();
    }

    #[test]
    fn test_lookup_and_names() {
        let venue = TypeBuilder::document("venue", "Venue").build().unwrap();
        let artist = TypeBuilder::document("artist", "Artist").build().unwrap();
        let reg = registry_with(vec![venue, artist]);
        assert_eq!(reg.len(), 2);
        assert_eq!(reg.type_names(), vec!["artist", "venue"]);
        assert!(reg.get("venue").is_some());
        assert!(reg.get("member").is_none());
    }
}
