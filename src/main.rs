//! CLI entry point and command handlers for fieldcheck.

mod cmd;

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use std::io;
use std::path::PathBuf;

use cmd::validate::ValidateOptions;
use fieldcheck::config::OutputFormat;

#[derive(Parser)]
#[command(name = "fieldcheck")]
#[command(version)]
#[command(about = "Validate fixed-shape records", long_about = None)]
struct Cli {
    /// Suppress passing records and warnings
    #[arg(long, short, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate records from JSON or YAML files
    ///
    /// Each file holds one record object or a list of records. Exits with
    /// status 1 when any record has violations.
    Validate {
        /// Record files to validate
        #[arg(required = true, value_name = "FILE")]
        files: Vec<PathBuf>,
        /// Output format (text or json); overrides config
        #[arg(long)]
        format: Option<OutputFormat>,
        /// Cross-check every record against the schema baseline
        #[arg(long)]
        compare: bool,
    },
    /// Print the JSON Schema used by the baseline validator
    Schema,
    /// Generate shell completion script
    Completion {
        /// Shell to generate completions for (bash, zsh, fish, powershell)
        #[arg(value_enum)]
        shell: Shell,
    },
    /// Show version information
    Version {
        /// Show build details
        #[arg(long, short)]
        verbose: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.quiet {
        std::env::set_var("FIELDCHECK_QUIET", "1");
    }

    match cli.command {
        Commands::Validate {
            files,
            format,
            compare,
        } => {
            let clean = cmd::validate::cmd_validate(&files, ValidateOptions { format, compare })?;
            if !clean {
                std::process::exit(1);
            }
            Ok(())
        }
        Commands::Schema => cmd::schema::cmd_schema(),
        Commands::Completion { shell } => cmd_completion(shell),
        Commands::Version { verbose } => cmd_version(verbose),
    }
}

fn cmd_completion(shell: Shell) -> Result<()> {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, "fieldcheck", &mut io::stdout());
    Ok(())
}

fn cmd_version(verbose: bool) -> Result<()> {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    println!("fieldcheck {}", VERSION);

    if verbose {
        const GIT_SHA: &str = env!("GIT_SHA");
        const BUILD_DATE: &str = env!("BUILD_DATE");
        println!("commit: {}", GIT_SHA);
        println!("built: {}", BUILD_DATE);
    }

    Ok(())
}
