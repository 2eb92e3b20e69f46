//! # Check Subcommand
//!
//! Builds a workspace's registry and runs load-time verification. This
//! is the schema-authoring gate: CI runs it for every workspace so a
//! misconfigured declaration never reaches the editing surface.

use clap::Args;
use studio_core::StudioWorkspace;

/// Arguments for the check subcommand.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Workspace to check. Omit to check every workspace.
    #[arg(long)]
    pub workspace: Option<StudioWorkspace>,
}

/// Run the check subcommand.
pub fn run(args: CheckArgs) -> anyhow::Result<()> {
    let workspaces: Vec<StudioWorkspace> = match args.workspace {
        Some(workspace) => vec![workspace],
        None => StudioWorkspace::all().to_vec(),
    };

    for workspace in workspaces {
        let registry = studio_content::workspace_types(workspace)?;
        println!(
            "{}: {} types verified",
            workspace.title(),
            registry.len()
        );
    }
    Ok(())
}
