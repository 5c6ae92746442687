//! docsite CLI - documentation site tooling.
//!
//! Provides commands for:
//! - `build`: Expand dependency directives across the docs tree
//! - `check`: Validate every directive without writing output
//! - `snippet`: Print a single dependency snippet
//! - `modules`: List the modules snippets can reference

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{BuildArgs, CheckArgs, SnippetArgs};
use output::Output;

/// docsite - documentation site tooling.
#[derive(Parser)]
#[command(name = "docsite", version, about)]
struct Cli {
    /// Enable info-level logging (overrides `RUST_LOG`).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Expand directives and write the docs tree for the site renderer.
    Build(BuildArgs),
    /// Validate every directive without writing output.
    Check(CheckArgs),
    /// Print a single dependency snippet.
    Snippet(SnippetArgs),
    /// List the modules snippets can reference.
    Modules,
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Build(args) => args.execute(&output),
        Commands::Check(args) => args.execute(&output),
        Commands::Snippet(args) => args.execute(&output),
        Commands::Modules => {
            commands::modules::execute(&output);
            Ok(())
        }
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
