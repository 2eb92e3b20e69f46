//! # Typed Pronoun Blocks
//!
//! A parsed pronoun record. The raw shape is `{type, custom}` where
//! `custom` is only meaningful (and required) when the tag is `custom`.

use serde_json::Value;
use thiserror::Error;

use studio_core::{value, PronounKind};

/// Why a pronoun record could not be parsed.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PronounParseError {
    /// The tag is not in the known set.
    #[error("unknown pronoun tag: {0:?}")]
    UnknownKind(String),

    /// The `custom` tag requires free-text pronouns.
    #[error("Please enter custom pronouns")]
    MissingCustomText,
}

/// A pronoun block whose shape matches its tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Pronoun {
    /// He/Him.
    HeHim,
    /// She/Her.
    SheHer,
    /// They/Them.
    TheyThem,
    /// Editor-supplied pronouns.
    Custom(String),
}

impl Pronoun {
    /// Parse a raw pronoun record.
    ///
    /// An absent or blank tag parses to `None`: the block is optional and
    /// previews render the unspecified fallback for it.
    ///
    /// # Errors
    ///
    /// Returns [`PronounParseError`] for an unknown tag, or for the
    /// `custom` tag without its free text.
    pub fn parse(record: &Value) -> Result<Option<Self>, PronounParseError> {
        let Some(tag) = value::str_field(record, "type") else {
            return Ok(None);
        };
        let kind: PronounKind = tag
            .parse()
            .map_err(|_| PronounParseError::UnknownKind(tag.to_string()))?;

        let pronoun = match kind {
            PronounKind::HeHim => Self::HeHim,
            PronounKind::SheHer => Self::SheHer,
            PronounKind::TheyThem => Self::TheyThem,
            PronounKind::Custom => {
                let text = value::str_field(record, "custom")
                    .ok_or(PronounParseError::MissingCustomText)?;
                Self::Custom(text.to_string())
            }
        };
        Ok(Some(pronoun))
    }

    /// The display form a list preview shows.
    pub fn display(&self) -> &str {
        match self {
            Self::HeHim => PronounKind::HeHim.title(),
            Self::SheHer => PronounKind::SheHer.title(),
            Self::TheyThem => PronounKind::TheyThem.title(),
            Self::Custom(text) => text,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_fixed_tags() {
        let record = json!({"type": "they-them"});
        assert_eq!(Pronoun::parse(&record), Ok(Some(Pronoun::TheyThem)));
        assert_eq!(Pronoun::TheyThem.display(), "They/Them");
    }

    #[test]
    fn test_parse_custom_with_text() {
        let record = json!({"type": "custom", "custom": "ze/zir"});
        let pronoun = Pronoun::parse(&record).unwrap().unwrap();
        assert_eq!(pronoun, Pronoun::Custom("ze/zir".into()));
        assert_eq!(pronoun.display(), "ze/zir");
    }

    #[test]
    fn test_custom_without_text_fails() {
        let record = json!({"type": "custom", "custom": ""});
        assert_eq!(
            Pronoun::parse(&record),
            Err(PronounParseError::MissingCustomText)
        );
    }

    #[test]
    fn test_absent_tag_is_unspecified() {
        assert_eq!(Pronoun::parse(&json!({})), Ok(None));
        assert_eq!(Pronoun::parse(&json!({"type": "  "})), Ok(None));
    }

    #[test]
    fn test_unknown_tag() {
        let record = json!({"type": "xe-xem"});
        assert_eq!(
            Pronoun::parse(&record),
            Err(PronounParseError::UnknownKind("xe-xem".into()))
        );
    }

    #[test]
    fn test_custom_text_on_fixed_tag_is_ignored() {
        let record = json!({"type": "she-her", "custom": "stale text"});
        assert_eq!(Pronoun::parse(&record), Ok(Some(Pronoun::SheHer)));
    }
}
