//! # Pronoun Tags
//!
//! The closed set of pronoun block discriminants. `Custom` is the
//! open-ended tag: it requires free-text pronouns and every other tag
//! forbids them.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::StudioError;

/// A pronoun block discriminant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PronounKind {
    /// He/Him.
    #[serde(rename = "he-him")]
    HeHim,
    /// She/Her.
    #[serde(rename = "she-her")]
    SheHer,
    /// They/Them.
    #[serde(rename = "they-them")]
    TheyThem,
    /// Editor-supplied pronouns.
    #[serde(rename = "custom")]
    Custom,
}

/// Total number of pronoun tags. Used for compile-time assertions.
pub const PRONOUN_KIND_COUNT: usize = 4;

impl PronounKind {
    /// All pronoun tags in dropdown order.
    pub fn all() -> &'static [PronounKind] {
        &[Self::HeHim, Self::SheHer, Self::TheyThem, Self::Custom]
    }

    /// The kebab-case tag value stored in documents.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::HeHim => "he-him",
            Self::SheHer => "she-her",
            Self::TheyThem => "they-them",
            Self::Custom => "custom",
        }
    }

    /// The dropdown display title for this tag.
    pub fn title(&self) -> &'static str {
        match self {
            Self::HeHim => "He/Him",
            Self::SheHer => "She/Her",
            Self::TheyThem => "They/Them",
            Self::Custom => "Custom",
        }
    }

    /// Whether this tag requires the free-text pronoun field.
    pub fn needs_custom_text(&self) -> bool {
        matches!(self, Self::Custom)
    }
}

impl std::fmt::Display for PronounKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PronounKind {
    type Err = StudioError;

    /// Parse a pronoun tag from its kebab-case value.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "he-him" => Ok(Self::HeHim),
            "she-her" => Ok(Self::SheHer),
            "they-them" => Ok(Self::TheyThem),
            "custom" => Ok(Self::Custom),
            other => Err(StudioError::Schema(format!(
                "unknown pronoun tag: {other:?}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_kinds_count() {
        assert_eq!(PronounKind::all().len(), PRONOUN_KIND_COUNT);
    }

    #[test]
    fn test_as_str_roundtrip() {
        for k in PronounKind::all() {
            let parsed: PronounKind = k.as_str().parse().unwrap();
            assert_eq!(*k, parsed);
        }
    }

    #[test]
    fn test_serde_format_matches_as_str() {
        for k in PronounKind::all() {
            let json = serde_json::to_string(k).unwrap();
            assert_eq!(json, format!("\"{}\"", k.as_str()));
        }
    }

    #[test]
    fn test_titles() {
        assert_eq!(PronounKind::HeHim.title(), "He/Him");
        assert_eq!(PronounKind::TheyThem.title(), "They/Them");
    }

    #[test]
    fn test_custom_text_requirement() {
        assert!(PronounKind::Custom.needs_custom_text());
        assert!(!PronounKind::SheHer.needs_custom_text());
    }
}
