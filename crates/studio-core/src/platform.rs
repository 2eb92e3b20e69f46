//! # Social Platform Tags
//!
//! The closed set of social-link platforms. This is the discriminant for
//! the social-link sub-record: the platform value decides which dependent
//! fields are relevant and which URL pattern applies.
//!
//! One definition for the whole toolkit. Workspaces that expose a smaller
//! platform dropdown select a subset of these tags in their schema
//! declarations; they do not define their own.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::StudioError;

/// A social-link platform tag.
///
/// `Website` and `Other` are the open-ended tags: both require an editor
/// supplied display name, and `Other` additionally requires a custom
/// platform name. Every other tag points at one known service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// A personal or organization website.
    Website,
    /// LinkedIn profile or page.
    LinkedIn,
    /// Instagram profile.
    Instagram,
    /// Facebook profile or page.
    Facebook,
    /// Twitter/X profile.
    Twitter,
    /// TikTok profile.
    TikTok,
    /// YouTube channel.
    YouTube,
    /// GitHub user or organization.
    GitHub,
    /// Bluesky profile.
    Bluesky,
    /// Soundcloud artist page.
    Soundcloud,
    /// Mixcloud artist page.
    Mixcloud,
    /// Spotify artist or show page.
    Spotify,
    /// Any platform not in this list.
    Other,
}

/// Total number of platform tags. Used for compile-time assertions.
pub const PLATFORM_COUNT: usize = 13;

impl Platform {
    /// All platform tags in dropdown order.
    pub fn all() -> &'static [Platform] {
        &[
            Self::Website,
            Self::LinkedIn,
            Self::Instagram,
            Self::Facebook,
            Self::Twitter,
            Self::TikTok,
            Self::YouTube,
            Self::GitHub,
            Self::Bluesky,
            Self::Soundcloud,
            Self::Mixcloud,
            Self::Spotify,
            Self::Other,
        ]
    }

    /// The lowercase tag value stored in documents.
    ///
    /// This must match the serde serialization format.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Website => "website",
            Self::LinkedIn => "linkedin",
            Self::Instagram => "instagram",
            Self::Facebook => "facebook",
            Self::Twitter => "twitter",
            Self::TikTok => "tiktok",
            Self::YouTube => "youtube",
            Self::GitHub => "github",
            Self::Bluesky => "bluesky",
            Self::Soundcloud => "soundcloud",
            Self::Mixcloud => "mixcloud",
            Self::Spotify => "spotify",
            Self::Other => "other",
        }
    }

    /// The dropdown display title for this tag.
    ///
    /// Twitter is the one tag whose display title is not derivable from
    /// the tag value: it renders as "Twitter/X".
    pub fn title(&self) -> &'static str {
        match self {
            Self::Website => "Website",
            Self::LinkedIn => "LinkedIn",
            Self::Instagram => "Instagram",
            Self::Facebook => "Facebook",
            Self::Twitter => "Twitter/X",
            Self::TikTok => "TikTok",
            Self::YouTube => "YouTube",
            Self::GitHub => "GitHub",
            Self::Bluesky => "Bluesky",
            Self::Soundcloud => "Soundcloud",
            Self::Mixcloud => "Mixcloud",
            Self::Spotify => "Spotify",
            Self::Other => "Other",
        }
    }

    /// Whether this tag requires the editor-supplied display name.
    pub fn needs_display_name(&self) -> bool {
        matches!(self, Self::Website | Self::Other)
    }

    /// Whether this is the catch-all tag that bypasses pattern checking.
    pub fn is_catch_all(&self) -> bool {
        matches!(self, Self::Other)
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = StudioError;

    /// Parse a platform from its lowercase tag value.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "website" => Ok(Self::Website),
            "linkedin" => Ok(Self::LinkedIn),
            "instagram" => Ok(Self::Instagram),
            "facebook" => Ok(Self::Facebook),
            "twitter" => Ok(Self::Twitter),
            "tiktok" => Ok(Self::TikTok),
            "youtube" => Ok(Self::YouTube),
            "github" => Ok(Self::GitHub),
            "bluesky" => Ok(Self::Bluesky),
            "soundcloud" => Ok(Self::Soundcloud),
            "mixcloud" => Ok(Self::Mixcloud),
            "spotify" => Ok(Self::Spotify),
            "other" => Ok(Self::Other),
            other => Err(StudioError::Schema(format!(
                "unknown platform tag: {other:?}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_platforms_count() {
        assert_eq!(Platform::all().len(), PLATFORM_COUNT);
    }

    #[test]
    fn test_all_platforms_unique() {
        let mut seen = std::collections::HashSet::new();
        for p in Platform::all() {
            assert!(seen.insert(p), "Duplicate platform: {p}");
        }
    }

    #[test]
    fn test_as_str_roundtrip() {
        for p in Platform::all() {
            let parsed: Platform = p.as_str().parse().unwrap();
            assert_eq!(*p, parsed);
        }
    }

    #[test]
    fn test_serde_format_matches_as_str() {
        for p in Platform::all() {
            let json = serde_json::to_string(p).unwrap();
            assert_eq!(json, format!("\"{}\"", p.as_str()));
        }
    }

    #[test]
    fn test_from_str_invalid() {
        assert!("myspace".parse::<Platform>().is_err());
        assert!("Twitter".parse::<Platform>().is_err()); // case-sensitive
    }

    #[test]
    fn test_twitter_title_override() {
        assert_eq!(Platform::Twitter.title(), "Twitter/X");
        assert_eq!(Platform::Twitter.as_str(), "twitter");
    }

    #[test]
    fn test_display_name_subset() {
        assert!(Platform::Website.needs_display_name());
        assert!(Platform::Other.needs_display_name());
        assert!(!Platform::Instagram.needs_display_name());
        assert!(!Platform::Twitter.needs_display_name());
    }

    #[test]
    fn test_catch_all() {
        assert!(Platform::Other.is_catch_all());
        assert!(!Platform::Website.is_catch_all());
    }
}
