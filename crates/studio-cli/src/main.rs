//! # studio CLI Entry Point
//!
//! Assembles subcommands and dispatches to handler modules.

use std::process::ExitCode;

use clap::Parser;

/// Studio schema toolkit CLI.
///
/// Verifies workspace schema registries, lists content types, validates
/// documents against their type declarations, and renders list previews.
#[derive(Parser, Debug)]
#[command(name = "studio", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Build and verify workspace registries.
    Check(studio_cli::check::CheckArgs),
    /// List a workspace's content types.
    Types(studio_cli::types::TypesArgs),
    /// Validate a document against a type.
    Validate(studio_cli::validate::ValidateArgs),
    /// Render a document's preview triple.
    Preview(studio_cli::preview::PreviewArgs),
}

fn main() -> anyhow::Result<ExitCode> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Check(args) => {
            studio_cli::check::run(args)?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Types(args) => {
            studio_cli::types::run(args)?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Validate(args) => studio_cli::validate::run(args),
        Commands::Preview(args) => {
            studio_cli::preview::run(args)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}
