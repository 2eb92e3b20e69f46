//! # Preview Subcommand
//!
//! Renders the list-row triple a document would show, using the preview
//! declaration of its type.

use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use studio_core::StudioWorkspace;
use studio_preview::derive_preview;

use crate::input::load_document;

/// Arguments for the preview subcommand.
#[derive(Args, Debug)]
pub struct PreviewArgs {
    /// Workspace whose registry to resolve the type in.
    #[arg(long)]
    pub workspace: StudioWorkspace,

    /// Type name of the document.
    #[arg(long = "type")]
    pub type_name: String,

    /// Path to the document (JSON, or YAML by extension).
    pub document: PathBuf,
}

/// Run the preview subcommand.
pub fn run(args: PreviewArgs) -> anyhow::Result<()> {
    let registry = studio_content::workspace_types(args.workspace)?;
    let def = registry
        .get(&args.type_name)
        .with_context(|| format!("unknown type: {}", args.type_name))?;
    let spec = def
        .preview
        .as_ref()
        .with_context(|| format!("type {} declares no preview", args.type_name))?;

    let document = load_document(&args.document)?;
    let rendered = derive_preview(spec, &document);

    println!("title:    {}", rendered.title);
    if let Some(subtitle) = &rendered.subtitle {
        println!("subtitle: {subtitle}");
    }
    if let Some(icon) = rendered.icon {
        println!("icon:     {icon}");
    }
    Ok(())
}
