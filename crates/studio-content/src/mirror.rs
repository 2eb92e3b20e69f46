//! # Mirror Workspace
//!
//! The smallest workspace: a bare profile document, kept as its own
//! configuration so it can grow independently.

use studio_schema::{Field, Icon, PreviewSpec, SchemaError, TypeBuilder, TypeDef};

/// The `profile` document.
pub fn profile_type() -> Result<TypeDef, SchemaError> {
    TypeBuilder::document("profile", "Profile")
        .icon(Icon::UserRound)
        .field(Field::string("name").required("A name is required"))
        .preview(PreviewSpec::select_fields(
            "name",
            None,
            Some(Icon::UserRound),
        ))
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use studio_schema::SchemaRegistry;

    #[test]
    fn test_workspace_verifies() {
        let mut reg = SchemaRegistry::new();
        reg.insert(profile_type().unwrap()).unwrap();
        reg.verify().unwrap();
    }
}
