//! # Publication Workspaces
//!
//! The four publication workspaces served by the studio. One enum, one
//! definition; every `match` on `StudioWorkspace` must be exhaustive, so
//! adding a workspace forces every consumer to handle it at compile time.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::StudioError;

/// A publication workspace.
///
/// Workspaces share schema infrastructure but differ in which content
/// types they expose to editors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StudioWorkspace {
    /// Consent Press: editorial profiles.
    ConsentPress,
    /// Filoso: link-in-bio pages (links and link groups).
    Filoso,
    /// Love Hangover: events, artists, venues, and collective members.
    LoveHangover,
    /// Mirror: minimal profile pages.
    Mirror,
}

/// Total number of workspaces. Used for compile-time assertions.
pub const WORKSPACE_COUNT: usize = 4;

impl StudioWorkspace {
    /// All workspaces in canonical order.
    pub fn all() -> &'static [StudioWorkspace] {
        &[
            Self::ConsentPress,
            Self::Filoso,
            Self::LoveHangover,
            Self::Mirror,
        ]
    }

    /// The kebab-case identifier for this workspace.
    ///
    /// This must match the serde serialization format.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ConsentPress => "consent-press",
            Self::Filoso => "filoso",
            Self::LoveHangover => "love-hangover",
            Self::Mirror => "mirror",
        }
    }

    /// The human-readable studio title for this workspace.
    pub fn title(&self) -> &'static str {
        match self {
            Self::ConsentPress => "Consent Press",
            Self::Filoso => "Filoso",
            Self::LoveHangover => "Love Hangover",
            Self::Mirror => "Mirror",
        }
    }
}

impl std::fmt::Display for StudioWorkspace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StudioWorkspace {
    type Err = StudioError;

    /// Parse a workspace from its kebab-case identifier.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "consent-press" => Ok(Self::ConsentPress),
            "filoso" => Ok(Self::Filoso),
            "love-hangover" => Ok(Self::LoveHangover),
            "mirror" => Ok(Self::Mirror),
            other => Err(StudioError::Schema(format!(
                "unknown workspace: {other:?}"
            ))),
        }
    }
}
