//! gradver - Gradle dependency update checker CLI tool
//!
//! Scans a Gradle project for dependency declarations, looks up published
//! versions on Maven Central and reports which pins can move. Release
//! candidates are held back when the current version is a stable release.

use clap::Parser;
use gradver::cli::CliArgs;
use gradver::error::{ConfigError, ManifestError};
use gradver::orchestrator::Orchestrator;
use gradver::output::{create_formatter, OutputConfig};
use std::io::{self, Write};
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    let args = CliArgs::parse();

    match run(args).await {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Main application logic
async fn run(args: CliArgs) -> anyhow::Result<ExitCode> {
    if args.verbose {
        eprintln!("gradver v{}", env!("CARGO_PKG_VERSION"));
        eprintln!("Target: {}", args.path.display());
    }

    if !args.path.is_dir() {
        return Err(ConfigError::InvalidPath {
            path: args.path.clone(),
            message: "not a directory".to_string(),
        }
        .into());
    }

    let orchestrator = Orchestrator::new(args.clone())?;
    let outcome = orchestrator.run().await;

    if outcome.report.files_processed() == 0 && !outcome.has_errors() {
        return Err(ManifestError::not_found(&args.path).into());
    }

    let output_config = OutputConfig::from_cli(args.json, args.verbose, args.quiet);
    let formatter = create_formatter(output_config);

    let mut stdout = io::stdout().lock();
    formatter.format(&outcome, &mut stdout)?;
    stdout.flush()?;

    if args.verbose && outcome.has_errors() {
        eprintln!();
        eprintln!("Errors encountered:");
        for error in &outcome.errors {
            eprintln!("  - {}", error);
        }
    }

    // Exit 0 on a clean run, 2 when some lookups or parses failed
    if outcome.has_errors() {
        Ok(ExitCode::from(2))
    } else {
        Ok(ExitCode::SUCCESS)
    }
}
