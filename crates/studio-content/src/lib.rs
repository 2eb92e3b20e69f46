//! # studio-content — Workspace Content Definitions
//!
//! The content types for the four publication workspaces, declared once
//! through the schema builders instead of the old copy-and-diverge
//! files. The recurring sub-objects (social links, pronoun blocks) live
//! in [`shared`] and are parameterized per workspace; each workspace
//! module assembles its own documents from them.
//!
//! [`workspace_types`] is the entry point: it builds and verifies the
//! registry for one workspace, so a registry obtained from this crate
//! can never carry a misconfiguration.

pub mod consent_press;
pub mod filoso;
pub mod love_hangover;
pub mod mirror;
pub mod shared;

use studio_core::StudioWorkspace;
use studio_schema::{SchemaError, SchemaRegistry};

/// Build and verify the schema registry for one workspace.
///
/// # Errors
///
/// Returns [`SchemaError`] when a declaration is misconfigured. Every
/// declaration in this crate is covered by tests, so an error here means
/// a schema change broke a load-time invariant.
pub fn workspace_types(workspace: StudioWorkspace) -> Result<SchemaRegistry, SchemaError> {
    let mut registry = SchemaRegistry::new();
    match workspace {
        StudioWorkspace::ConsentPress => {
            registry.insert(shared::social_links_type()?)?;
            registry.insert(consent_press::profile_type()?)?;
        }
        StudioWorkspace::Filoso => {
            registry.insert(filoso::link_type()?)?;
            registry.insert(filoso::link_group_type()?)?;
        }
        StudioWorkspace::LoveHangover => {
            registry.insert(love_hangover::member_type()?)?;
            registry.insert(love_hangover::event_type()?)?;
            registry.insert(love_hangover::artist_type()?)?;
            registry.insert(love_hangover::venue_type()?)?;
        }
        StudioWorkspace::Mirror => {
            registry.insert(mirror::profile_type()?)?;
        }
    }
    registry.verify()?;
    Ok(registry)
}
