//! # Preview Derivation
//!
//! Resolves a [`PreviewSpec`]'s selection paths against a document and
//! renders the `{title, subtitle, icon}` triple shown in editorial
//! lists. Derivation is total: missing or malformed values fall back to
//! the literal placeholders rather than failing, because a half-entered
//! record still needs a list row.

use chrono::{DateTime, Datelike, FixedOffset, Timelike};
use serde::Serialize;
use serde_json::Value;

use studio_schema::{Icon, PreviewDerive, PreviewSpec};

use crate::format::{ordinal_day, title_case, twelve_hour};

/// Title shown when a record has no usable title value.
pub const UNTITLED: &str = "Untitled";

/// Title shown when a pronoun block carries no tag.
pub const UNSPECIFIED: &str = "Unspecified";

/// The rendered list-row triple.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PreviewValue {
    /// Primary display line. Never empty.
    pub title: String,
    /// Secondary display line, when the derivation produces one.
    pub subtitle: Option<String>,
    /// Symbolic icon from the preview declaration.
    pub icon: Option<Icon>,
}

/// Render the preview triple for one record.
pub fn derive_preview(spec: &PreviewSpec, record: &Value) -> PreviewValue {
    let (title, subtitle) = match &spec.derive {
        PreviewDerive::Select { title, subtitle } => {
            let title_text = selected_str(spec, record, title)
                .unwrap_or(UNTITLED)
                .to_string();
            let subtitle_text = subtitle
                .as_deref()
                .and_then(|alias| selected_str(spec, record, alias))
                .map(str::to_string);
            (title_text, subtitle_text)
        }

        PreviewDerive::SocialLink {
            platform,
            name,
            url,
            title_overrides,
        } => {
            let title_text = match selected_str(spec, record, platform) {
                Some(tag) if tag == "website" || tag == "other" => {
                    selected_str(spec, record, name)
                        .unwrap_or(UNTITLED)
                        .to_string()
                }
                Some(tag) => title_overrides
                    .get(tag)
                    .cloned()
                    .unwrap_or_else(|| title_case(tag)),
                None => UNTITLED.to_string(),
            };
            let subtitle_text = selected_str(spec, record, url).map(str::to_string);
            (title_text, subtitle_text)
        }

        PreviewDerive::Pronoun { kind, custom } => {
            let title_text = match selected_str(spec, record, kind) {
                Some("custom") => selected_str(spec, record, custom)
                    .unwrap_or("Custom")
                    .to_string(),
                Some(tag) => tag
                    .parse::<studio_core::PronounKind>()
                    .map(|k| k.title().to_string())
                    .unwrap_or_else(|_| title_case(tag)),
                None => UNSPECIFIED.to_string(),
            };
            (title_text, None)
        }

        PreviewDerive::EventDate { name, date, detail } => {
            let title_text = selected_str(spec, record, name)
                .unwrap_or(UNTITLED)
                .to_string();
            let mut parts = Vec::new();
            if let Some(when) = selected_str(spec, record, date).and_then(parse_datetime) {
                parts.push(format!(
                    "{} {}",
                    when.format("%b"),
                    ordinal_day(when.day())
                ));
                parts.push(twelve_hour(when.hour(), when.minute()));
            }
            if let Some(tag) = detail
                .as_deref()
                .and_then(|alias| selected_str(spec, record, alias))
            {
                parts.push(tag.to_string());
            }
            let subtitle_text = if parts.is_empty() {
                None
            } else {
                Some(parts.join(" | "))
            };
            (title_text, subtitle_text)
        }
    };

    PreviewValue {
        title,
        subtitle,
        icon: spec.icon,
    }
}

/// The value an alias selects, when the alias and its path both resolve.
fn selected<'a>(spec: &PreviewSpec, record: &'a Value, alias: &str) -> Option<&'a Value> {
    let path = spec.select.get(alias)?;
    select_path(record, path)
}

/// The string an alias selects, treating blank as absent.
fn selected_str<'a>(spec: &PreviewSpec, record: &'a Value, alias: &str) -> Option<&'a str> {
    match selected(spec, record, alias)?.as_str() {
        Some(s) if !s.trim().is_empty() => Some(s),
        _ => None,
    }
}

/// Resolve a dotted selection path against a record.
///
/// Numeric segments index into arrays, so `media.0` reads the first
/// member of the `media` array.
fn select_path<'a>(record: &'a Value, path: &str) -> Option<&'a Value> {
    let mut current = record;
    for segment in path.split('.') {
        current = match segment.parse::<usize>() {
            Ok(index) => current.get(index)?,
            Err(_) => current.get(segment)?,
        };
    }
    Some(current)
}

fn parse_datetime(s: &str) -> Option<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(s).ok()
}
