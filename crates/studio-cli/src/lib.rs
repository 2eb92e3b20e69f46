//! # studio-cli — Studio Schema Command-Line Interface
//!
//! The operator surface for the schema toolkit: verify a workspace's
//! registry, list its types, validate a document file against a type,
//! and render the preview triple a document would show in a list.
//!
//! ## Subcommands
//!
//! - `check` — build and verify a workspace registry
//! - `types` — list a workspace's content types
//! - `validate` — validate a JSON or YAML document against a type
//! - `preview` — render a document's preview triple
//!
//! ## Crate Policy
//!
//! - CLI construction (argument parsing) is separated from business logic.
//! - Handler functions delegate to domain crates — no schema or rule
//!   logic lives here.

pub mod check;
pub mod input;
pub mod preview;
pub mod types;
pub mod validate;
