//! # Validate Subcommand
//!
//! Validates a document file against a named type, printing each
//! violation at the field where the editing surface would show it.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Args;
use studio_core::StudioWorkspace;
use studio_validate::DocumentValidator;

use crate::input::load_document;

/// Arguments for the validate subcommand.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Workspace whose registry to validate against.
    #[arg(long)]
    pub workspace: StudioWorkspace,

    /// Type name of the document.
    #[arg(long = "type")]
    pub type_name: String,

    /// Path to the document (JSON, or YAML by extension).
    pub document: PathBuf,
}

/// Run the validate subcommand.
///
/// Exits nonzero when the document carries error-severity violations;
/// warnings alone do not block.
pub fn run(args: ValidateArgs) -> anyhow::Result<ExitCode> {
    let registry = studio_content::workspace_types(args.workspace)?;
    let document = load_document(&args.document)?;
    let validator = DocumentValidator::new(&registry);
    let outcome = validator.validate(&args.type_name, &document)?;

    if outcome.is_clean() {
        println!("ok: {} is valid", args.document.display());
        return Ok(ExitCode::SUCCESS);
    }

    for violation in outcome.violations() {
        println!("{violation}");
    }
    if outcome.is_publishable() {
        println!("publishable with warnings");
        Ok(ExitCode::SUCCESS)
    } else {
        println!(
            "{} error(s) block publishing",
            outcome.errors().count()
        );
        Ok(ExitCode::FAILURE)
    }
}
