//! # Filoso Workspace
//!
//! The link-in-bio workspace: individual links with style settings, and
//! the groups they are organized under.

use studio_schema::{
    ArrayMember, Field, GroupDef, Icon, PreviewSpec, Rule, RuleKind, SchemaError, TypeBuilder,
    TypeDef,
};

/// The `link` document.
pub fn link_type() -> Result<TypeDef, SchemaError> {
    TypeBuilder::document("link", "Link")
        .icon(Icon::Link)
        .group(GroupDef::new("link", "Link").icon(Icon::Link))
        .group(GroupDef::new("style", "Style Settings").icon(Icon::Palette))
        .field(
            Field::string("title")
                .title("Title")
                .description("Title displayed on profile")
                .group("link")
                .required("A title is required"),
        )
        .field(
            Field::url("url")
                .title("URL")
                .description("Valid URL for this link")
                .group("link")
                .required("A URL is required")
                .rule(Rule::error(RuleKind::AbsoluteUrl, "Must be a valid URL")),
        )
        .field(
            Field::text("description", Some(2))
                .title("Description")
                .description("Short description for this link")
                .group("link")
                .required("A description is required"),
        )
        .field(
            Field::array("linkTags", vec![ArrayMember::String])
                .title("Link Tags")
                .description("Tags for this link"),
        )
        .field(
            Field::string("backgroundColor")
                .title("Background Color")
                .description("Select custom background color")
                .group("style"),
        )
        .field(
            Field::image("backgroundImage", false)
                .title("Background Image")
                .description("Add a background image for this link")
                .group("style"),
        )
        .preview(PreviewSpec::select_fields(
            "title",
            Some("url"),
            Some(Icon::Link),
        ))
        .build()
}

/// The `linkGroup` document.
pub fn link_group_type() -> Result<TypeDef, SchemaError> {
    TypeBuilder::document("linkGroup", "Link Group")
        .icon(Icon::Tags)
        .field(
            Field::string("groupName")
                .title("Group Name")
                .description("Group name")
                .required("A group name is required"),
        )
        .field(
            Field::text("description", Some(3)).title("Group Description"),
        )
        .field(
            Field::slug("slug", Some("groupName"), Some(96))
                .title("Slug")
                .description("Unique URL where the group will be displayed")
                .required("A slug is required")
                .rule(Rule::error(
                    RuleKind::SlugFormat,
                    "Slug can only contain lowercase letters, numbers, and hyphens",
                )),
        )
        .preview(PreviewSpec::select_fields(
            "groupName",
            Some("description"),
            Some(Icon::Tags),
        ))
        .build()
}
