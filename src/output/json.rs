//! JSON output formatter for machine processing

use crate::domain::{CheckResult, ManifestCheckResult, SkipReason};
use crate::orchestrator::CheckOutcome;
use crate::output::{OutputFormatter, Verbosity};
use serde::Serialize;
use std::io::Write;

/// JSON formatter for machine-readable output
pub struct JsonFormatter {
    /// Verbosity level affects detail in output
    verbosity: Verbosity,
}

impl JsonFormatter {
    /// Create a new JSON formatter
    pub fn new(verbosity: Verbosity) -> Self {
        Self { verbosity }
    }
}

#[derive(Serialize)]
struct JsonOutput {
    summary: JsonSummary,
    manifests: Vec<JsonManifest>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    errors: Vec<String>,
}

#[derive(Serialize)]
struct JsonSummary {
    dependencies: usize,
    updates: usize,
    held_back: usize,
    up_to_date: usize,
    skipped: usize,
}

#[derive(Serialize)]
struct JsonManifest {
    path: String,
    updates: Vec<JsonUpdate>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    held_back: Vec<JsonHeldBack>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    skips: Vec<JsonSkip>,
}

#[derive(Serialize)]
struct JsonUpdate {
    coordinate: String,
    from: String,
    to: String,
    test_scope: bool,
}

#[derive(Serialize)]
struct JsonHeldBack {
    coordinate: String,
    current: String,
    candidate: String,
    reason: String,
}

#[derive(Serialize)]
struct JsonSkip {
    coordinate: String,
    version: String,
    reason: String,
}

impl JsonFormatter {
    fn skip_reason_to_string(reason: &SkipReason) -> String {
        match reason {
            SkipReason::Excluded => "excluded".to_string(),
            SkipReason::NotInOnlyList => "not_in_only_list".to_string(),
            SkipReason::UnresolvedVersion => "unresolved_version".to_string(),
            SkipReason::FetchFailed(msg) => format!("fetch_failed: {}", msg),
            SkipReason::NoVersionsFound => "no_versions_found".to_string(),
        }
    }

    fn manifest_to_json(&self, manifest: &ManifestCheckResult) -> JsonManifest {
        let updates = manifest
            .updates()
            .filter_map(|result| {
                if let CheckResult::UpdateAvailable {
                    dependency, latest, ..
                } = result
                {
                    Some(JsonUpdate {
                        coordinate: dependency.coordinate(),
                        from: dependency.version.clone(),
                        to: latest.clone(),
                        test_scope: dependency.is_test_scope(),
                    })
                } else {
                    None
                }
            })
            .collect();

        let held_back = manifest
            .rejections()
            .filter_map(|result| {
                if let CheckResult::RejectedOnly {
                    dependency,
                    candidate,
                    reason,
                } = result
                {
                    Some(JsonHeldBack {
                        coordinate: dependency.coordinate(),
                        current: dependency.version.clone(),
                        candidate: candidate.clone(),
                        reason: reason.clone(),
                    })
                } else {
                    None
                }
            })
            .collect();

        let skips = if self.verbosity == Verbosity::Verbose {
            manifest
                .skips()
                .filter_map(|result| {
                    if let CheckResult::Skip { dependency, reason } = result {
                        Some(JsonSkip {
                            coordinate: dependency.coordinate(),
                            version: dependency.version.clone(),
                            reason: Self::skip_reason_to_string(reason),
                        })
                    } else {
                        None
                    }
                })
                .collect()
        } else {
            Vec::new()
        };

        JsonManifest {
            path: manifest.path.display().to_string(),
            updates,
            held_back,
            skips,
        }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, outcome: &CheckOutcome, writer: &mut dyn Write) -> std::io::Result<()> {
        let report = &outcome.report;

        let output = JsonOutput {
            summary: JsonSummary {
                dependencies: report.total_dependencies(),
                updates: report.total_updates(),
                held_back: report.total_rejected(),
                up_to_date: report.total_up_to_date(),
                skipped: report.total_skips(),
            },
            manifests: report
                .manifests
                .iter()
                .map(|m| self.manifest_to_json(m))
                .collect(),
            errors: outcome.errors.clone(),
        };

        let json = serde_json::to_string_pretty(&output)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;
        writeln!(writer, "{}", json)
    }
}
