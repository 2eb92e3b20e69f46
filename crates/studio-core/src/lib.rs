//! # studio-core — Foundational Types for the Studio Schema Toolkit
//!
//! This crate is the bedrock of the studio workspace. It defines the
//! vocabulary every other crate speaks: validated identifier newtypes,
//! the closed set of publication workspaces, the platform and pronoun
//! tag sets that drive conditional validation, and the accessors used
//! to read editor-supplied document values.
//!
//! ## Key Design Principles
//!
//! 1. **Newtype wrappers for machine names.** `TypeName`, `FieldName`,
//!    `DocRef` are validated newtypes. No bare strings for identifiers
//!    that the registry treats as foreign keys.
//!
//! 2. **Closed tag sets as enums.** `Platform` and `PronounKind` are the
//!    single definitions of their tag sets. Exhaustive `match` everywhere;
//!    adding a platform forces every consumer to handle it.
//!
//! 3. **"Not provided" is one policy.** An absent field and an empty or
//!    whitespace-only string are the same thing to every rule. The
//!    accessors in [`value`] are the only way rules read documents.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `studio-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All public types derive `Debug` and `Clone`, and implement
//!   `Serialize`/`Deserialize` where they cross a document boundary.

pub mod error;
pub mod ident;
pub mod platform;
pub mod pronoun;
pub mod value;
pub mod workspace;

// Re-export primary types for ergonomic imports.
pub use error::StudioError;
pub use ident::{DocRef, FieldName, TypeName};
pub use platform::{Platform, PLATFORM_COUNT};
pub use pronoun::{PronounKind, PRONOUN_KIND_COUNT};
pub use workspace::{StudioWorkspace, WORKSPACE_COUNT};
