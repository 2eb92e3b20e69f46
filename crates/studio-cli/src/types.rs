//! # Types Subcommand
//!
//! Lists the content types a workspace declares.

use clap::Args;
use studio_core::StudioWorkspace;

/// Arguments for the types subcommand.
#[derive(Args, Debug)]
pub struct TypesArgs {
    /// Workspace whose types to list.
    #[arg(long)]
    pub workspace: StudioWorkspace,

    /// Also list each type's fields.
    #[arg(long)]
    pub fields: bool,
}

/// Run the types subcommand.
pub fn run(args: TypesArgs) -> anyhow::Result<()> {
    let registry = studio_content::workspace_types(args.workspace)?;
    for def in registry.types() {
        println!("{} ({:?})", def.name, def.kind);
        if args.fields {
            for field in &def.fields {
                println!("  {}: {:?}", field.name, field.kind);
            }
        }
    }
    Ok(())
}
