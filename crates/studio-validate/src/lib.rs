//! # studio-validate — Conditional Field Validation
//!
//! Evaluates a document against a verified type definition and returns
//! field-scoped violations. This is the engine behind the editing
//! surface's inline messages: pure, synchronous, re-run on every change.
//!
//! ## Contract
//!
//! - Validation failures are **data**, never errors. The only `Err` this
//!   crate produces is asking for a type the registry does not hold.
//! - Hidden fields are not evaluated: a dependent field whose selector
//!   puts it outside its declared subset contributes nothing.
//! - Absent and empty-string values are "not provided": they fail
//!   required rules and pass optional ones.
//! - A selector tag with no pattern-table entry is unrestricted. The
//!   catch-all tags rely on this; so does any tag added to a dropdown
//!   before its pattern lands.

pub mod engine;
pub mod patterns;
pub mod pronouns;
pub mod social;
pub mod violation;

pub use engine::DocumentValidator;
pub use patterns::{profile_url_patterns, social_url_patterns};
pub use pronouns::{Pronoun, PronounParseError};
pub use social::{SocialLink, SocialLinkParseError};
pub use violation::{ValidationOutcome, Violation};
