//! # Shared Objects
//!
//! The social-link and pronoun declarations every workspace reuses. Each
//! used to exist as several diverging copies; they are declared once here
//! and parameterized by platform subset and pattern table.

use std::collections::BTreeMap;

use studio_core::{FieldName, Platform, PronounKind};
use studio_schema::{
    ArrayMember, Condition, Field, Icon, ObjectBuilder, ObjectDef, PatternTable, PreviewDerive,
    PreviewSpec, Rule, RuleKind, SchemaError, SelectEntry, SelectLayout, TypeBuilder, TypeDef,
};
use studio_validate::{profile_url_patterns, social_url_patterns};

/// The platform subset the inline social-link arrays offer.
///
/// The shared object offers the full set; venue, artist, and member
/// dropdowns stay on this smaller one.
pub const PROFILE_PLATFORMS: &[Platform] = &[
    Platform::Website,
    Platform::Instagram,
    Platform::Twitter,
    Platform::TikTok,
    Platform::Facebook,
    Platform::YouTube,
    Platform::Other,
];

/// The shared `socialLinks` object: the full platform set, the wide
/// pattern table, and the Twitter/X display override in its preview.
pub fn social_links_type() -> Result<TypeDef, SchemaError> {
    let mut builder = TypeBuilder::shared_object("socialLinks", "Social Links").icon(Icon::Link);
    for field in social_link_fields(Platform::all(), social_url_patterns())? {
        builder = builder.field(field);
    }
    builder
        .preview(social_link_preview(twitter_override()))
        .build()
}

/// An inline `socialLinks` array field for the documents that embed
/// their own copy with the reduced platform set.
pub fn social_links_field() -> Result<Field, SchemaError> {
    let mut builder = ObjectBuilder::new();
    for field in social_link_fields(PROFILE_PLATFORMS, profile_url_patterns())? {
        builder = builder.field(field);
    }
    let object = builder
        .preview(social_link_preview(BTreeMap::new()))
        .build()?;
    Ok(Field::array("socialLinks", vec![ArrayMember::Object(object)])
        .title("Social Links")
        .description("Add links to social media profiles and websites"))
}

/// The four social-link fields, parameterized by platform subset and
/// pattern table.
fn social_link_fields(
    platforms: &[Platform],
    patterns: PatternTable,
) -> Result<Vec<Field>, SchemaError> {
    let platform = FieldName::new("platform")?;
    let open_ended: Vec<String> = vec![
        Platform::Website.as_str().to_string(),
        Platform::Other.as_str().to_string(),
    ];

    Ok(vec![
        Field::select(
            "platform",
            platforms
                .iter()
                .map(|p| SelectEntry::new(p.title(), p.as_str()))
                .collect(),
            SelectLayout::Dropdown,
        )
        .title("Platform")
        .required("Please select a platform"),
        Field::url("url")
            .title("URL")
            .description("Full URL to the social media profile or website")
            .required("A valid URL is required")
            .rule(Rule::auto(RuleKind::UrlBySelector {
                selector: platform.clone(),
                patterns,
            })),
        Field::string("name")
            .title("Website Name")
            .description("Name of the website (required for Website and Other platforms)")
            .visible_when(Condition::SiblingIn {
                field: platform.clone(),
                tags: open_ended.clone(),
            })
            .rule(Rule::error(
                RuleKind::RequiredIfSiblingIn {
                    field: platform.clone(),
                    tags: open_ended,
                },
                "Please enter a name for this website",
            )),
        Field::string("customPlatform")
            .title("Custom Platform Name")
            .description("Enter the name of the platform if you selected \"Other\"")
            .visible_when(Condition::SiblingIn {
                field: platform.clone(),
                tags: vec![Platform::Other.as_str().to_string()],
            })
            .rule(Rule::error(
                RuleKind::RequiredIfSiblingIn {
                    field: platform,
                    tags: vec![Platform::Other.as_str().to_string()],
                },
                "Please enter the platform name",
            )),
    ])
}

fn social_link_preview(title_overrides: BTreeMap<String, String>) -> PreviewSpec {
    let mut select = BTreeMap::new();
    select.insert("platform".to_string(), "platform".to_string());
    select.insert("name".to_string(), "name".to_string());
    select.insert("url".to_string(), "url".to_string());
    PreviewSpec {
        select,
        derive: PreviewDerive::SocialLink {
            platform: "platform".to_string(),
            name: "name".to_string(),
            url: "url".to_string(),
            title_overrides,
        },
        icon: Some(Icon::Link),
    }
}

fn twitter_override() -> BTreeMap<String, String> {
    let mut overrides = BTreeMap::new();
    overrides.insert(
        Platform::Twitter.as_str().to_string(),
        Platform::Twitter.title().to_string(),
    );
    overrides
}

/// A `pronouns` array field with the pronoun block sub-schema.
pub fn pronouns_field() -> Result<Field, SchemaError> {
    Ok(
        Field::array("pronouns", vec![ArrayMember::Object(pronoun_object()?)])
            .title("Pronouns"),
    )
}

/// The pronoun block: a closed tag selector plus a free-text field that
/// only the `custom` tag shows and requires.
pub fn pronoun_object() -> Result<ObjectDef, SchemaError> {
    let kind = FieldName::new("type")?;
    let custom_tag = vec![PronounKind::Custom.as_str().to_string()];

    let mut select = BTreeMap::new();
    select.insert("kind".to_string(), "type".to_string());
    select.insert("custom".to_string(), "custom".to_string());

    ObjectBuilder::new()
        .field(
            Field::select(
                "type",
                PronounKind::all()
                    .iter()
                    .map(|k| SelectEntry::new(k.title(), k.as_str()))
                    .collect(),
                SelectLayout::Dropdown,
            )
            .title("Type")
            .required("Please select a pronoun type"),
        )
        .field(
            Field::string("custom")
                .title("Custom Pronouns")
                .description("Enter custom pronouns")
                .visible_when(Condition::SiblingIn {
                    field: kind.clone(),
                    tags: custom_tag.clone(),
                })
                .rule(Rule::error(
                    RuleKind::RequiredIfSiblingIn {
                        field: kind,
                        tags: custom_tag,
                    },
                    "Please enter custom pronouns",
                )),
        )
        .preview(PreviewSpec {
            select,
            derive: PreviewDerive::Pronoun {
                kind: "kind".to_string(),
                custom: "custom".to_string(),
            },
            icon: Some(Icon::CircleSmall),
        })
        .build()
}
