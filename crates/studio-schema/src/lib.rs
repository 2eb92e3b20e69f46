//! # studio-schema — Typed Schema Model
//!
//! The schema declarations the studio consumes, re-architected as
//! strongly-typed configuration: every content type is a [`TypeDef`]
//! assembled through builders, and everything that used to be a runtime
//! closure (conditional `hidden`, `required`-if, per-selector URL
//! patterns) is declarative data that can be inspected, serialized, and
//! verified when the schema set is loaded.
//!
//! ## Two failure classes
//!
//! Schema *misconfiguration* (a pattern that does not compile, a rule
//! naming a sibling that does not exist, a reference to an unregistered
//! type) is a programmer error: [`SchemaRegistry::verify`] rejects it at
//! load time and nothing downstream has to recover from it. Editor input
//! that violates a rule is not an error at all; it is data produced by
//! the validator crate.
//!
//! ## Crate Policy
//!
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - Definitions are data: nothing in this crate reads documents.

pub mod builder;
pub mod condition;
pub mod error;
pub mod field;
pub mod preview;
pub mod registry;
pub mod rule;
pub mod types;

pub use builder::{Field, ObjectBuilder, TypeBuilder};
pub use condition::Condition;
pub use error::SchemaError;
pub use field::{ArrayMember, FieldDef, FieldKind, ObjectDef, SelectEntry, SelectLayout, SelectOptions};
pub use preview::{Icon, PreviewDerive, PreviewSpec};
pub use registry::SchemaRegistry;
pub use rule::{CompiledPatterns, PatternTable, Rule, RuleKind, Severity};
pub use types::{DisplayKind, GroupDef, TypeDef};
