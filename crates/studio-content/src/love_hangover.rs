//! # Love Hangover Workspace
//!
//! The event-production workspace: artists, events, venues, and the
//! collective's own members. This is where the cross-field rules
//! concentrate: virtual events exclude venues, the headline artist and
//! the artist list exclude each other, and the cover charge is gated by
//! the free-entry flag.

use serde_json::json;
use studio_core::{FieldName, TypeName};
use studio_schema::{
    ArrayMember, Condition, Field, GroupDef, Icon, PreviewDerive, PreviewSpec, Rule, RuleKind,
    SchemaError, SelectEntry, SelectLayout, TypeBuilder, TypeDef,
};

use crate::shared::{pronouns_field, social_links_field};

const SLUG_REQUIRED: &str = "Required to generate a page on the website";

/// The `artist` document.
pub fn artist_type() -> Result<TypeDef, SchemaError> {
    TypeBuilder::document("artist", "Artist")
        .icon(Icon::UserRound)
        .group(GroupDef::new("editorial", "Editorial").default_tab())
        .group(GroupDef::new("details", "Details"))
        .group(GroupDef::new("metadata", "Metadata"))
        .field(
            Field::string("name")
                .group("editorial")
                .required("Name is required"),
        )
        .field(
            Field::slug("slug", Some("name"), None)
                .description("How this artist will be referenced on the website")
                .group("metadata")
                .visible_when(Condition::DocumentProvided {
                    field: FieldName::new("name")?,
                })
                .required(SLUG_REQUIRED)
                .rule(Rule::error(
                    RuleKind::SlugFormat,
                    "Slug can only contain lowercase letters, numbers, and hyphens",
                )),
        )
        .field(
            Field::image("profilePicture", false)
                .title("Artist Portrait")
                .description("Upload a portrait photo of the artist")
                .group("editorial"),
        )
        .field(
            Field::text("bio", None)
                .title("Artist Bio")
                .description("Add a bio for the artist")
                .group("editorial"),
        )
        .field(pronouns_field()?.group("details"))
        .field(social_links_field()?.group("details"))
        .preview(PreviewSpec::select_fields(
            "name",
            None,
            Some(Icon::UserRound),
        ))
        .build()
}

/// The `event` document.
pub fn event_type() -> Result<TypeDef, SchemaError> {
    let event_type_field = FieldName::new("eventType")?;
    let virtual_tag = "virtual".to_string();

    let mut select = std::collections::BTreeMap::new();
    select.insert("name".to_string(), "name".to_string());
    select.insert("date".to_string(), "date".to_string());
    select.insert("detail".to_string(), "eventType".to_string());

    TypeBuilder::document("event", "Event")
        .icon(Icon::Disc)
        .group(GroupDef::new("details", "Details"))
        .group(GroupDef::new("editorial", "Editorial"))
        .field(Field::string("name").in_groups(&["details", "editorial"]))
        .field(
            Field::slug("slug", Some("name"), None)
                .group("details")
                .visible_when(Condition::DocumentProvided {
                    field: FieldName::new("name")?,
                })
                .required(SLUG_REQUIRED)
                .rule(Rule::error(
                    RuleKind::SlugFormat,
                    "Slug can only contain lowercase letters, numbers, and hyphens",
                )),
        )
        .field(
            Field::select(
                "eventType",
                vec![
                    SelectEntry::new("in-person", "in-person"),
                    SelectEntry::new("virtual", "virtual"),
                ],
                SelectLayout::Radio,
            )
            .group("details"),
        )
        .field(Field::datetime("date").group("details"))
        .field(Field::number("doorsOpen").group("details"))
        .field(
            Field::reference("venue", &["venue"])
                .group("details")
                .read_only_when(Condition::All(vec![
                    Condition::SelfNotProvided,
                    Condition::DocumentEquals {
                        field: event_type_field.clone(),
                        value: virtual_tag.clone(),
                    },
                ]))
                .rule(Rule::error(
                    RuleKind::ForbiddenWhenDocumentEquals {
                        field: event_type_field,
                        value: virtual_tag,
                    },
                    "Only in-person events can have a venue",
                )),
        )
        .field(
            Field::reference("headline", &["artist"])
                .group("details")
                .rule(Rule::error(
                    RuleKind::ExcludedFromSiblingArray {
                        array: FieldName::new("artists")?,
                    },
                    "The headline artist cannot also appear in the artists list",
                )),
        )
        .field(
            Field::array(
                "artists",
                vec![ArrayMember::Reference {
                    to: vec![TypeName::new("artist")?],
                }],
            )
            .group("details")
            .rule(Rule::error(
                RuleKind::ExcludesSiblingRef {
                    reference: FieldName::new("headline")?,
                },
                "The artists list cannot include the headline artist",
            )),
        )
        .field(
            Field::boolean("isFree")
                .title("Free Entry")
                .group("details")
                .default_value(json!(false)),
        )
        .field(
            Field::number("coverCharge")
                .group("details")
                .rule(Rule::error(
                    RuleKind::PositiveAmountUnless {
                        flag: FieldName::new("isFree")?,
                        missing_message: "A cover charge is required for paid events".to_string(),
                    },
                    "Cover charge must be a positive number",
                )),
        )
        .field(Field::image("image", false).in_groups(&["details", "editorial"]))
        .field(
            Field::array("details", vec![ArrayMember::Block])
                .in_groups(&["details", "editorial"]),
        )
        .field(
            Field::url("tickets")
                .group("details")
                .rule(Rule::error(RuleKind::AbsoluteUrl, "Must be a valid URL")),
        )
        .preview(PreviewSpec {
            select,
            derive: PreviewDerive::EventDate {
                name: "name".to_string(),
                date: "date".to_string(),
                detail: Some("detail".to_string()),
            },
            icon: Some(Icon::Disc),
        })
        .build()
}

/// The `venue` document.
pub fn venue_type() -> Result<TypeDef, SchemaError> {
    TypeBuilder::document("venue", "Venue")
        .icon(Icon::MapPin)
        .field(Field::string("name").required("A venue name is required"))
        .field(
            Field::text("description", Some(2))
                .description(
                    "A brief description of the venue, its atmosphere, and any notable features",
                )
                .rule(Rule::warning(
                    RuleKind::MaxLength(500),
                    "Description should be concise, under 500 characters",
                )),
        )
        .field(
            Field::string("address")
                .description("The street address of the venue")
                .required("An address is required"),
        )
        .field(
            Field::string("city")
                .description("The city where the venue is located")
                .required("A city is required"),
        )
        .field(
            Field::string("zipcode")
                .description("The zipcode of the venue")
                .required("A zipcode is required"),
        )
        .field(
            Field::slug("slug", Some("name"), Some(96))
                .title("Slug")
                .description("The unique identifier for the venue")
                .required("A slug is required")
                .rule(Rule::error(
                    RuleKind::SlugFormat,
                    "Slug can only contain lowercase letters, numbers, and hyphens",
                )),
        )
        .field(social_links_field()?)
        .preview(PreviewSpec::select_fields(
            "name",
            Some("city"),
            Some(Icon::MapPin),
        ))
        .build()
}

/// The `member` document for the collective's own people.
pub fn member_type() -> Result<TypeDef, SchemaError> {
    let alt = Field::string("alt")
        .title("Alternative text")
        .description("Important for SEO and accessibility")
        .visible_when(Condition::SiblingProvided {
            field: FieldName::new("asset")?,
        })
        .required("Alt text is required")
        .build()?;

    TypeBuilder::document("member", "Member")
        .icon(Icon::ScanEye)
        .field(Field::string("name").title("Name").required("Name is required"))
        .field(
            Field::text("bio", Some(3))
                .title("Member Bio")
                .required("A bio is required"),
        )
        .field(pronouns_field()?)
        .field(
            Field::image_with_fields("image", true, vec![alt])
                .title("Profile Image")
                .description("Upload a profile image for this team member"),
        )
        .field(
            Field::url("website")
                .title("Website")
                .rule(Rule::error(RuleKind::AbsoluteUrl, "Must be a valid URL")),
        )
        .field(Field::string("contactEmail").title("Contact Email"))
        .preview(PreviewSpec::select_fields(
            "name",
            None,
            Some(Icon::ScanEye),
        ))
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use studio_schema::SchemaRegistry;

    fn registry() -> SchemaRegistry {
        let mut reg = SchemaRegistry::new();
        reg.insert(member_type().unwrap()).unwrap();
        reg.insert(event_type().unwrap()).unwrap();
        reg.insert(artist_type().unwrap()).unwrap();
        reg.insert(venue_type().unwrap()).unwrap();
        reg
    }

    #[test]
    fn test_workspace_verifies() {
        registry().verify().unwrap();
    }

    #[test]
    fn test_event_cross_field_rules_present() {
        let event = event_type().unwrap();
        assert_eq!(event.field("headline").unwrap().rules.len(), 1);
        assert_eq!(event.field("artists").unwrap().rules.len(), 1);
        assert!(event
            .field("venue")
            .unwrap()
            .read_only_when
            .is_some());
    }

    #[test]
    fn test_slug_hidden_until_name_provided() {
        let artist = artist_type().unwrap();
        let slug = artist.field("slug").unwrap();
        assert!(matches!(
            slug.visible_when,
            Condition::DocumentProvided { .. }
        ));
    }

    #[test]
    fn test_is_free_defaults_off() {
        let event = event_type().unwrap();
        assert_eq!(event.field("isFree").unwrap().default, Some(json!(false)));
    }
}
