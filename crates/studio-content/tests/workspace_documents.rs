//! Whole-document validation and preview over the real workspace
//! declarations, as the editing surface would drive them.

use serde_json::json;
use studio_content::workspace_types;
use studio_core::StudioWorkspace;
use studio_preview::derive_preview;
use studio_validate::DocumentValidator;

#[test]
fn valid_event_publishes() {
    let registry = workspace_types(StudioWorkspace::LoveHangover).unwrap();
    let validator = DocumentValidator::new(&registry);
    let doc = json!({
        "name": "Love Hangover IV",
        "slug": {"current": "love-hangover-iv"},
        "eventType": "in-person",
        "date": "2026-09-12T21:00:00+00:00",
        "venue": {"_ref": "venue-basement"},
        "headline": {"_ref": "artist-42"},
        "artists": [{"_ref": "artist-7"}, {"_ref": "artist-9"}],
        "isFree": false,
        "coverCharge": 15,
        "tickets": "https://tickets.example/love-hangover-iv"
    });
    let outcome = validator.validate("event", &doc).unwrap();
    assert!(outcome.is_publishable(), "unexpected: {outcome}");
}

#[test]
fn event_rule_violations_surface_per_field() {
    let registry = workspace_types(StudioWorkspace::LoveHangover).unwrap();
    let validator = DocumentValidator::new(&registry);
    let doc = json!({
        "name": "Stream Night",
        "slug": {"current": "Stream Night"},
        "eventType": "virtual",
        "venue": {"_ref": "venue-basement"},
        "headline": {"_ref": "artist-42"},
        "artists": [{"_ref": "artist-42"}],
        "isFree": false
    });
    let outcome = validator.validate("event", &doc).unwrap();
    assert_eq!(
        outcome.messages_at("slug"),
        vec!["Slug can only contain lowercase letters, numbers, and hyphens"]
    );
    assert_eq!(
        outcome.messages_at("venue"),
        vec!["Only in-person events can have a venue"]
    );
    assert_eq!(
        outcome.messages_at("headline"),
        vec!["The headline artist cannot also appear in the artists list"]
    );
    assert_eq!(
        outcome.messages_at("artists"),
        vec!["The artists list cannot include the headline artist"]
    );
    assert_eq!(
        outcome.messages_at("coverCharge"),
        vec!["A cover charge is required for paid events"]
    );
}

#[test]
fn artist_social_links_validate_inline() {
    let registry = workspace_types(StudioWorkspace::LoveHangover).unwrap();
    let validator = DocumentValidator::new(&registry);
    let doc = json!({
        "name": "DJ Haram",
        "slug": {"current": "dj-haram"},
        "socialLinks": [
            {"platform": "instagram", "url": "https://instagram.com/djharam"},
            {"platform": "twitter", "url": "https://x.com/djharam"},
            {"platform": "website", "url": "https://djharam.example"}
        ]
    });
    let outcome = validator.validate("artist", &doc).unwrap();
    // The inline table accepts twitter.com only.
    assert_eq!(
        outcome.messages_at("socialLinks[1].url"),
        vec!["Please enter a valid twitter URL"]
    );
    assert_eq!(
        outcome.messages_at("socialLinks[2].name"),
        vec!["Please enter a name for this website"]
    );
    assert!(outcome.messages_at("socialLinks[0].url").is_empty());
}

#[test]
fn shared_social_links_accept_the_wider_set() {
    let registry = workspace_types(StudioWorkspace::ConsentPress).unwrap();
    let validator = DocumentValidator::new(&registry);
    let doc = json!({
        "name": "Consent Press",
        "socialLinks": [
            {"platform": "twitter", "url": "https://x.com/consentpress"},
            {"platform": "linkedin", "url": "https://linkedin.com/company/consentpress"},
            {"platform": "spotify", "url": "https://open.spotify.com/show/abc"}
        ]
    });
    let outcome = validator.validate("profile", &doc).unwrap();
    assert!(outcome.is_clean(), "unexpected: {outcome}");
}

#[test]
fn member_pronouns_and_image_alt() {
    let registry = workspace_types(StudioWorkspace::LoveHangover).unwrap();
    let validator = DocumentValidator::new(&registry);
    let doc = json!({
        "name": "Ari",
        "bio": "Runs the door.",
        "pronouns": [
            {"type": "custom", "custom": ""},
            {"type": "they-them"}
        ],
        "image": {"asset": {"_ref": "image-abc"}, "alt": ""}
    });
    let outcome = validator.validate("member", &doc).unwrap();
    assert_eq!(
        outcome.messages_at("pronouns[0].custom"),
        vec!["Please enter custom pronouns"]
    );
    assert_eq!(outcome.messages_at("image.alt"), vec!["Alt text is required"]);
    assert!(outcome.messages_at("pronouns[1].custom").is_empty());
}

#[test]
fn event_preview_composes_subtitle() {
    let registry = workspace_types(StudioWorkspace::LoveHangover).unwrap();
    let event = registry.get("event").unwrap();
    let preview = event.preview.as_ref().unwrap();
    let doc = json!({
        "name": "Love Hangover IV",
        "date": "2026-09-12T21:00:00+00:00",
        "eventType": "in-person"
    });
    let rendered = derive_preview(preview, &doc);
    assert_eq!(rendered.title, "Love Hangover IV");
    assert_eq!(
        rendered.subtitle.as_deref(),
        Some("Sep 12th | 9pm | in-person")
    );
}

#[test]
fn link_document_requires_its_basics() {
    let registry = workspace_types(StudioWorkspace::Filoso).unwrap();
    let validator = DocumentValidator::new(&registry);
    let outcome = validator.validate("link", &json!({})).unwrap();
    assert_eq!(outcome.messages_at("title"), vec!["A title is required"]);
    assert_eq!(outcome.messages_at("url"), vec!["A URL is required"]);
    assert_eq!(
        outcome.messages_at("description"),
        vec!["A description is required"]
    );
}
