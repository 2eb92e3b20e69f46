//! # Typed Social Links
//!
//! A parsed social-link record. The raw document shape is a flat object
//! whose relevant fields depend on the platform tag; this enum makes the
//! three shapes explicit so downstream code cannot read a display name
//! off a record whose tag does not carry one.

use serde_json::Value;
use thiserror::Error;

use studio_core::{value, Platform};

/// Why a social-link record could not be parsed.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SocialLinkParseError {
    /// No platform tag was selected.
    #[error("Please select a platform")]
    MissingPlatform,

    /// The platform tag is not in the known set.
    #[error("unknown platform tag: {0:?}")]
    UnknownPlatform(String),

    /// No URL was entered.
    #[error("A valid URL is required")]
    MissingUrl,

    /// The open-ended tags require a display name.
    #[error("Please enter a name for this website")]
    MissingName,

    /// The `other` tag requires the platform's own name too.
    #[error("Please enter the platform name")]
    MissingPlatformName,
}

/// A social link whose shape matches its platform tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SocialLink {
    /// A link to a known platform. The display title comes from the tag.
    Known {
        /// The platform tag.
        platform: Platform,
        /// The profile URL.
        url: String,
    },

    /// A personal or organization website with an editor-supplied name.
    Website {
        /// Display name shown in list previews.
        name: String,
        /// The site URL.
        url: String,
    },

    /// A platform outside the known set.
    Other {
        /// What the platform is called.
        platform_name: String,
        /// Display name shown in list previews.
        name: String,
        /// The profile URL.
        url: String,
    },
}

impl SocialLink {
    /// Parse a raw social-link record.
    ///
    /// # Errors
    ///
    /// Returns the first [`SocialLinkParseError`] the record violates,
    /// mirroring the field order the editing surface shows: platform,
    /// then URL, then the dependent names.
    pub fn parse(record: &Value) -> Result<Self, SocialLinkParseError> {
        let tag = value::str_field(record, "platform")
            .ok_or(SocialLinkParseError::MissingPlatform)?;
        let platform: Platform = tag
            .parse()
            .map_err(|_| SocialLinkParseError::UnknownPlatform(tag.to_string()))?;

        let url = value::str_field(record, "url")
            .ok_or(SocialLinkParseError::MissingUrl)?
            .to_string();

        match platform {
            Platform::Website => {
                let name = value::str_field(record, "name")
                    .ok_or(SocialLinkParseError::MissingName)?
                    .to_string();
                Ok(Self::Website { name, url })
            }
            Platform::Other => {
                let name = value::str_field(record, "name")
                    .ok_or(SocialLinkParseError::MissingName)?
                    .to_string();
                let platform_name = value::str_field(record, "customPlatform")
                    .ok_or(SocialLinkParseError::MissingPlatformName)?
                    .to_string();
                Ok(Self::Other {
                    platform_name,
                    name,
                    url,
                })
            }
            platform => Ok(Self::Known { platform, url }),
        }
    }

    /// The title a list preview shows for this link.
    ///
    /// Known platforms use the tag's display title; the open-ended tags
    /// use the editor-supplied name.
    pub fn display_title(&self) -> &str {
        match self {
            Self::Known { platform, .. } => platform.title(),
            Self::Website { name, .. } | Self::Other { name, .. } => name,
        }
    }

    /// The URL this link points at.
    pub fn url(&self) -> &str {
        match self {
            Self::Known { url, .. } | Self::Website { url, .. } | Self::Other { url, .. } => url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_known_platform() {
        let record = json!({
            "platform": "instagram",
            "url": "https://instagram.com/love.hangover"
        });
        let link = SocialLink::parse(&record).unwrap();
        assert_eq!(
            link,
            SocialLink::Known {
                platform: Platform::Instagram,
                url: "https://instagram.com/love.hangover".into()
            }
        );
        assert_eq!(link.display_title(), "Instagram");
    }

    #[test]
    fn test_twitter_displays_as_twitter_x() {
        let record = json!({
            "platform": "twitter",
            "url": "https://twitter.com/lovehangover"
        });
        let link = SocialLink::parse(&record).unwrap();
        assert_eq!(link.display_title(), "Twitter/X");
    }

    #[test]
    fn test_website_carries_its_name() {
        let record = json!({
            "platform": "website",
            "url": "https://djharam.example",
            "name": "Official site"
        });
        let link = SocialLink::parse(&record).unwrap();
        assert_eq!(link.display_title(), "Official site");
        assert_eq!(link.url(), "https://djharam.example");
    }

    #[test]
    fn test_website_without_name_fails() {
        let record = json!({
            "platform": "website",
            "url": "https://djharam.example",
            "name": "   "
        });
        assert_eq!(
            SocialLink::parse(&record),
            Err(SocialLinkParseError::MissingName)
        );
    }

    #[test]
    fn test_other_requires_both_names() {
        let record = json!({
            "platform": "other",
            "url": "https://linktr.ee/djharam",
            "name": "Linktree"
        });
        assert_eq!(
            SocialLink::parse(&record),
            Err(SocialLinkParseError::MissingPlatformName)
        );

        let complete = json!({
            "platform": "other",
            "url": "https://linktr.ee/djharam",
            "name": "Linktree",
            "customPlatform": "Linktree"
        });
        let link = SocialLink::parse(&complete).unwrap();
        assert_eq!(link.display_title(), "Linktree");
    }

    #[test]
    fn test_missing_platform_and_url() {
        assert_eq!(
            SocialLink::parse(&json!({})),
            Err(SocialLinkParseError::MissingPlatform)
        );
        assert_eq!(
            SocialLink::parse(&json!({"platform": "github"})),
            Err(SocialLinkParseError::MissingUrl)
        );
    }

    #[test]
    fn test_unknown_platform_tag() {
        let record = json!({"platform": "myspace", "url": "https://myspace.com/x"});
        assert_eq!(
            SocialLink::parse(&record),
            Err(SocialLinkParseError::UnknownPlatform("myspace".into()))
        );
    }
}
