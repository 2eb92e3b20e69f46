//! # URL Pattern Tables
//!
//! The per-platform URL patterns the social-link objects validate
//! against. Two tables exist: the full table used by the shared social
//! links object, and the smaller table used by the inline social-link
//! arrays on venue, artist, and member documents (whose dropdowns offer
//! fewer platforms and accept only `twitter.com` for Twitter).
//!
//! A tag missing from a table is unrestricted. `linkedin` is in the full
//! dropdown but has no pattern entry; it rides that fallback.

use studio_schema::PatternTable;

/// The full pattern table for the shared social links object.
///
/// `other` carries the catch-all absolute-URL pattern; `twitter` accepts
/// both `twitter.com` and `x.com`.
pub fn social_url_patterns() -> PatternTable {
    PatternTable::new()
        .with("website", r"^https?://.+")
        .with("instagram", r"^https?://(www\.)?instagram\.com/.+")
        .with("twitter", r"^https?://(www\.)?(twitter\.com|x\.com)/.+")
        .with("tiktok", r"^https?://(www\.)?tiktok\.com/.+")
        .with("facebook", r"^https?://(www\.)?facebook\.com/.+")
        .with("youtube", r"^https?://(www\.)?youtube\.com/.+")
        .with("github", r"^https?://(www\.)?github\.com/.+")
        .with("bluesky", r"^https?://(www\.)?bsky\.app/.+")
        .with("soundcloud", r"^https?://(www\.)?soundcloud\.com/.+")
        .with("mixcloud", r"^https?://(www\.)?mixcloud\.com/.+")
        .with("spotify", r"^https?://(open\.)?spotify\.com/.+")
        .with("other", r"^https?://.+")
}

/// The reduced pattern table for inline social-link arrays.
pub fn profile_url_patterns() -> PatternTable {
    PatternTable::new()
        .with("website", r"^https?://.+")
        .with("instagram", r"^https?://(www\.)?instagram\.com/.+")
        .with("twitter", r"^https?://(www\.)?twitter\.com/.+")
        .with("tiktok", r"^https?://(www\.)?tiktok\.com/.+")
        .with("facebook", r"^https?://(www\.)?facebook\.com/.+")
        .with("youtube", r"^https?://(www\.)?youtube\.com/.+")
        .with("other", r"^https?://.+")
}
