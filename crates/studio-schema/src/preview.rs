//! # Preview Specifications
//!
//! Declares what an editorial list row shows for a record: which fields
//! are read (the select map) and how the `{title, subtitle, media}`
//! triple is derived from them. Derivation itself is implemented in the
//! preview crate; this module is only the declaration shape.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A symbolic icon reference, resolved by the editing surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    /// Generic link glyph.
    Link,
    /// Map pin (venues).
    MapPin,
    /// Record disc (events).
    Disc,
    /// Person outline (artists).
    UserRound,
    /// Small filled circle (pronoun blocks).
    CircleSmall,
    /// Eye in a scan frame (members).
    ScanEye,
    /// Tag stack (link groups).
    Tags,
    /// Palette (style settings).
    Palette,
}

impl Icon {
    /// The kebab-case symbolic name the editing surface resolves.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Link => "link",
            Self::MapPin => "map-pin",
            Self::Disc => "disc",
            Self::UserRound => "user-round",
            Self::CircleSmall => "circle-small",
            Self::ScanEye => "scan-eye",
            Self::Tags => "tags",
            Self::Palette => "palette",
        }
    }
}

impl std::fmt::Display for Icon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How the preview triple is derived from the selected fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PreviewDerive {
    /// Title and subtitle read straight from selection aliases, with the
    /// literal `"Untitled"` fallback when the title field is empty.
    Select {
        /// Alias holding the title.
        title: String,
        /// Alias holding the subtitle, if any.
        subtitle: Option<String>,
    },

    /// Social-link derivation: the auxiliary name for the open-ended
    /// tags, otherwise the selector's display form, title-cased, with
    /// per-tag display overrides (`twitter` renders as `"Twitter/X"`
    /// when the override table carries it).
    SocialLink {
        /// Alias holding the selector tag.
        platform: String,
        /// Alias holding the editor-supplied display name.
        name: String,
        /// Alias holding the URL (becomes the subtitle).
        url: String,
        /// Tag-to-display overrides applied before generic title-casing.
        title_overrides: BTreeMap<String, String>,
    },

    /// Pronoun derivation: fixed display per tag, the free text for the
    /// custom tag, and the literal `"Unspecified"` fallback.
    Pronoun {
        /// Alias holding the pronoun tag.
        kind: String,
        /// Alias holding the free-text pronouns.
        custom: String,
    },

    /// Event derivation: name as title, and a subtitle composed from the
    /// optional date (ordinal day-of-month), the lower-cased 12-hour
    /// time, and a detail tag, joined with `" | "`, skipping absentees.
    EventDate {
        /// Alias holding the event name.
        name: String,
        /// Alias holding the date-time value.
        date: String,
        /// Alias holding an extra detail tag, if any.
        detail: Option<String>,
    },
}

impl PreviewDerive {
    /// The selection aliases this derivation reads, for load-time checks.
    pub fn aliases(&self) -> Vec<&str> {
        match self {
            Self::Select { title, subtitle } => {
                let mut v = vec![title.as_str()];
                v.extend(subtitle.as_deref());
                v
            }
            Self::SocialLink {
                platform, name, url, ..
            } => vec![platform, name, url],
            Self::Pronoun { kind, custom } => vec![kind, custom],
            Self::EventDate { name, date, detail } => {
                let mut v = vec![name.as_str(), date.as_str()];
                v.extend(detail.as_deref());
                v
            }
        }
    }
}

/// A complete preview declaration for a type or inline object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreviewSpec {
    /// Alias-to-field-path selection. Paths are dotted and may index
    /// arrays (`media.0`); only selected paths are read at render time.
    pub select: BTreeMap<String, String>,
    /// The derivation applied to the selected values.
    pub derive: PreviewDerive,
    /// Symbolic icon shown alongside the derived title.
    pub icon: Option<Icon>,
}

impl PreviewSpec {
    /// A plain field-mapped preview.
    pub fn select_fields(
        title_path: impl Into<String>,
        subtitle_path: Option<&str>,
        icon: Option<Icon>,
    ) -> Self {
        let mut select = BTreeMap::new();
        select.insert("title".to_string(), title_path.into());
        if let Some(p) = subtitle_path {
            select.insert("subtitle".to_string(), p.to_string());
        }
        Self {
            select,
            derive: PreviewDerive::Select {
                title: "title".to_string(),
                subtitle: subtitle_path.map(|_| "subtitle".to_string()),
            },
            icon,
        }
    }
}
