//! Text output formatter for human-readable display
//!
//! This module provides:
//! - Per-file listing of available updates with change-type labels
//! - A section for candidates held back by the stability policy
//! - Skipped dependency display in verbose mode
//! - Summary with counts

use crate::domain::CheckResult;
use crate::orchestrator::CheckOutcome;
use crate::output::{OutputFormatter, Verbosity};
use colored::Colorize;
use std::io::Write;

/// Magnitude of a version change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionChangeType {
    /// First component changed (breaking)
    Major,
    /// Second component changed
    Minor,
    /// Anything smaller
    Patch,
    /// Unparseable
    Unknown,
}

impl VersionChangeType {
    /// Determine the change type between two version strings
    pub fn from_versions(old: &str, new: &str) -> Self {
        let parse = |v: &str| -> Option<(u64, u64)> {
            let v = v.strip_prefix('v').unwrap_or(v);
            let mut parts = v.split(['.', '-']);
            let major = parts.next()?.parse().ok()?;
            let minor = parts.next().and_then(|p| p.parse().ok()).unwrap_or(0);
            Some((major, minor))
        };

        match (parse(old), parse(new)) {
            (Some((old_major, old_minor)), Some((new_major, new_minor))) => {
                if new_major != old_major {
                    VersionChangeType::Major
                } else if new_minor != old_minor {
                    VersionChangeType::Minor
                } else {
                    VersionChangeType::Patch
                }
            }
            _ => VersionChangeType::Unknown,
        }
    }

    /// Plain label
    pub fn label(&self) -> &'static str {
        match self {
            VersionChangeType::Major => "major",
            VersionChangeType::Minor => "minor",
            VersionChangeType::Patch => "patch",
            VersionChangeType::Unknown => "?",
        }
    }

    fn colored_label(&self) -> String {
        match self {
            VersionChangeType::Major => "major".red().bold().to_string(),
            VersionChangeType::Minor => "minor".yellow().to_string(),
            VersionChangeType::Patch => "patch".green().to_string(),
            VersionChangeType::Unknown => "?".dimmed().to_string(),
        }
    }
}

/// Text formatter for human-readable output
pub struct TextFormatter {
    verbosity: Verbosity,
    color: bool,
}

impl TextFormatter {
    /// Create a new text formatter
    pub fn new(verbosity: Verbosity, color: bool) -> Self {
        Self { verbosity, color }
    }

    fn change_label(&self, old: &str, new: &str) -> String {
        let change = VersionChangeType::from_versions(old, new);
        if self.color {
            change.colored_label()
        } else {
            change.label().to_string()
        }
    }

    fn arrow(&self) -> String {
        if self.color {
            "->".cyan().to_string()
        } else {
            "->".to_string()
        }
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, outcome: &CheckOutcome, writer: &mut dyn Write) -> std::io::Result<()> {
        let report = &outcome.report;

        for manifest in &report.manifests {
            let has_content = manifest.has_updates()
                || manifest.rejected_count() > 0
                || (self.verbosity == Verbosity::Verbose && !manifest.results.is_empty());
            if !has_content {
                continue;
            }

            if self.verbosity != Verbosity::Quiet {
                let header = manifest.path.display().to_string();
                if self.color {
                    writeln!(writer, "{}", header.bold())?;
                } else {
                    writeln!(writer, "{}", header)?;
                }
            }

            for result in manifest.updates() {
                if let CheckResult::UpdateAvailable {
                    dependency, latest, ..
                } = result
                {
                    writeln!(
                        writer,
                        "  {} {} {} {} ({})",
                        dependency.coordinate(),
                        dependency.version,
                        self.arrow(),
                        latest,
                        self.change_label(&dependency.version, latest),
                    )?;
                }
            }

            if self.verbosity != Verbosity::Quiet {
                for result in manifest.rejections() {
                    if let CheckResult::RejectedOnly {
                        dependency,
                        candidate,
                        reason,
                    } = result
                    {
                        let line = format!(
                            "  {} {} held back from {} ({})",
                            dependency.coordinate(),
                            dependency.version,
                            candidate,
                            reason,
                        );
                        if self.color {
                            writeln!(writer, "{}", line.dimmed())?;
                        } else {
                            writeln!(writer, "{}", line)?;
                        }
                    }
                }
            }

            if self.verbosity == Verbosity::Verbose {
                for result in manifest.skips() {
                    if let CheckResult::Skip { dependency, reason } = result {
                        writeln!(
                            writer,
                            "  {} skipped: {}",
                            dependency.coordinate(),
                            reason
                        )?;
                    }
                }
            }

            if self.verbosity != Verbosity::Quiet {
                writeln!(writer)?;
            }
        }

        if self.verbosity != Verbosity::Quiet {
            let summary = format!(
                "{} dependencies checked: {} updates available, {} held back, {} up to date, {} skipped",
                report.total_dependencies(),
                report.total_updates(),
                report.total_rejected(),
                report.total_up_to_date(),
                report.total_skips(),
            );
            if self.color && report.has_updates() {
                writeln!(writer, "{}", summary.yellow())?;
            } else {
                writeln!(writer, "{}", summary)?;
            }

            if !outcome.errors.is_empty() {
                let line = format!("{} lookup errors", outcome.errors.len());
                if self.color {
                    writeln!(writer, "{}", line.red())?;
                } else {
                    writeln!(writer, "{}", line)?;
                }
            }
        }

        Ok(())
    }
}
