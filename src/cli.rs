//! CLI argument parsing module for gradver

use crate::error::ConfigError;
use clap::{ArgAction, Parser};
use std::path::PathBuf;
use std::time::Duration;

/// Parse duration string in format: Nd (days), Nw (weeks), Nm (months)
fn parse_duration(s: &str) -> Result<Duration, ConfigError> {
    let s = s.trim();

    let (num_str, unit) = if let Some(n) = s.strip_suffix('d') {
        (n, 'd')
    } else if let Some(n) = s.strip_suffix('w') {
        (n, 'w')
    } else if let Some(n) = s.strip_suffix('m') {
        (n, 'm')
    } else {
        return Err(ConfigError::invalid_duration(s));
    };

    let num: u64 = num_str
        .parse()
        .map_err(|_| ConfigError::invalid_duration(s))?;

    let seconds = match unit {
        'd' => num * 24 * 60 * 60,
        'w' => num * 7 * 24 * 60 * 60,
        'm' => num * 30 * 24 * 60 * 60, // months as 30 days
        _ => unreachable!(),
    };

    Ok(Duration::from_secs(seconds))
}

/// Gradle dependency update checker
#[derive(Parser, Debug, Clone)]
#[command(
    name = "gradver",
    version,
    about = "Checks Gradle dependencies for newer versions on Maven Central, \
             holding back release candidates when the current pin is stable"
)]
pub struct CliArgs {
    /// Gradle project directory (default: current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Exclude specific coordinates or artifact names (can be specified
    /// multiple times)
    #[arg(long, action = ArgAction::Append)]
    pub exclude: Vec<String>,

    /// Check only specific coordinates or artifact names (can be specified
    /// multiple times)
    #[arg(long, action = ArgAction::Append)]
    pub only: Vec<String>,

    /// Suggest pre-release versions even when the current version is stable
    #[arg(long)]
    pub pre: bool,

    /// Only suggest versions released at least this long ago (e.g., 2w, 10d, 1m)
    #[arg(long, value_parser = parse_duration)]
    pub age: Option<Duration>,

    /// HTTP timeout per registry request, in seconds
    #[arg(long, default_value_t = 30)]
    pub timeout: u64,

    /// Output results in JSON format
    #[arg(long)]
    pub json: bool,

    /// Enable verbose output (includes skipped dependencies)
    #[arg(long)]
    pub verbose: bool,

    /// Enable quiet mode: print available updates only
    #[arg(short, long)]
    pub quiet: bool,
}
