//! # studio-preview — List Preview Derivation
//!
//! Renders the `{title, subtitle, icon}` triple editorial lists show for
//! a record, from the preview declaration its type carries. The social
//! link, pronoun, and event display forms all live here, so a record's
//! list row and its validation read the same tag sets.
//!
//! ## Contract
//!
//! - Derivation is total. Missing, blank, or malformed values render the
//!   literal fallbacks (`"Untitled"`, `"Unspecified"`) instead of failing.
//! - Only selected paths are read. A derivation cannot reach into fields
//!   its declaration does not name.

pub mod format;
pub mod preview;

pub use format::{ordinal_day, title_case, twelve_hour};
pub use preview::{derive_preview, PreviewValue, UNSPECIFIED, UNTITLED};
