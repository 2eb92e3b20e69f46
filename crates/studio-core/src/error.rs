//! # Error Types — Structured Error Hierarchy
//!
//! Defines the error types used throughout the studio toolkit. All errors
//! use `thiserror` for derive-based `Display` and `Error` implementations.
//!
//! ## Design
//!
//! Only two failure classes exist in this domain:
//!
//! - **Misconfiguration**: a schema author declared something inconsistent
//!   (a duplicate field, a reference to a type that does not exist, a
//!   pattern that does not compile). These surface as `Err` values at
//!   schema build or registry verification time and never at editing time.
//! - **Validation failure**: an editor-supplied value violates a declared
//!   rule. These are *data* (violation lists returned to the caller for
//!   display), never `Err` values, and are defined in `studio-validate`.

use thiserror::Error;

/// Top-level error type for the studio toolkit.
///
/// Every variant here is a misconfiguration: a bad identifier, an
/// unknown tag, a type the registry does not hold. Editing-time rule
/// violations never pass through this type.
#[derive(Error, Debug)]
pub enum StudioError {
    /// A schema declaration or lookup is internally inconsistent.
    #[error("schema error: {0}")]
    Schema(String),
}
