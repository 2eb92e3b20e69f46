//! # Consent Press Workspace
//!
//! The publication's own profile document, built on the shared social
//! links object and the pronoun block.

use studio_core::TypeName;
use studio_schema::{
    ArrayMember, Field, Icon, PreviewSpec, SchemaError, TypeBuilder, TypeDef,
};

use crate::shared::pronouns_field;

/// The `profile` document.
pub fn profile_type() -> Result<TypeDef, SchemaError> {
    TypeBuilder::document("profile", "Profile")
        .icon(Icon::UserRound)
        .field(Field::string("name").required("A name is required"))
        .field(Field::text("bio", Some(3)).title("Bio"))
        .field(pronouns_field()?)
        .field(
            Field::array(
                "socialLinks",
                vec![ArrayMember::Named {
                    type_name: TypeName::new("socialLinks")?,
                }],
            )
            .title("Social Links"),
        )
        .preview(PreviewSpec::select_fields(
            "name",
            None,
            Some(Icon::UserRound),
        ))
        .build()
}
