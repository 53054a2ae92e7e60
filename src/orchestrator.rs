//! Orchestrator coordinating the check workflow
//!
//! This module provides:
//! - Workflow coordination: detect → parse → fetch → judge → report
//! - Registry queries with a concurrency cap
//! - Filter application from CLI args
//! - Error handling with partial continuation

use crate::check::{CheckFilter, UpdateCheck, VersionInfo};
use crate::cli::CliArgs;
use crate::domain::{CheckReport, CheckResult, ManifestCheckResult, SkipReason};
use crate::error::{AppError, RegistryError};
use crate::manifest::{detect_manifests, parse_manifest};
use crate::progress::Progress;
use crate::registry::{HttpClient, MavenCentralAdapter, VersionSource};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Semaphore;

/// Concurrency limit for registry requests. The Maven Central search API
/// throttles aggressive clients, so keep this modest.
const DEFAULT_CONCURRENCY: usize = 4;

/// Result of running the check workflow
pub struct CheckOutcome {
    /// Per-file check results
    pub report: CheckReport,
    /// Errors encountered during processing (parse failures, lookup failures)
    pub errors: Vec<String>,
}

impl CheckOutcome {
    /// Returns true if any dependency lookup or parse step failed
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Orchestrator for coordinating the check workflow
pub struct Orchestrator {
    /// CLI arguments for configuration
    args: CliArgs,
    /// Version source to query, normally Maven Central
    source: Arc<dyn VersionSource>,
    /// Semaphore bounding concurrent registry requests
    semaphore: Arc<Semaphore>,
}

impl Orchestrator {
    /// Create a new orchestrator querying Maven Central
    pub fn new(args: CliArgs) -> Result<Self, AppError> {
        let client = HttpClient::with_timeout(Duration::from_secs(args.timeout))?;
        let source = Arc::new(MavenCentralAdapter::new(client));
        Ok(Self::with_source(args, source))
    }

    /// Create an orchestrator with a custom version source (for testing)
    pub fn with_source(args: CliArgs, source: Arc<dyn VersionSource>) -> Self {
        Self {
            args,
            source,
            semaphore: Arc::new(Semaphore::new(DEFAULT_CONCURRENCY)),
        }
    }

    /// Run the check workflow
    pub async fn run(&self) -> CheckOutcome {
        let show_progress = !self.args.quiet && !self.args.json;
        self.run_with_progress(show_progress).await
    }

    /// Run the check workflow with optional progress display
    pub async fn run_with_progress(&self, show_progress: bool) -> CheckOutcome {
        let mut progress = Progress::new(show_progress);
        let mut report = CheckReport::new();
        let mut errors = Vec::new();

        // Step 1: Detect Gradle build files
        progress.spinner("Detecting build files...");
        let manifests = detect_manifests(&self.args.path);
        progress.finish();

        if manifests.is_empty() {
            return CheckOutcome { report, errors };
        }

        let judge = UpdateCheck::new(self.build_filter());

        // Step 2: Parse build files and collect declared dependencies
        progress.spinner("Parsing build files...");
        let mut parsed = Vec::new();
        for info in &manifests {
            match parse_manifest(info) {
                Ok(dependencies) => parsed.push((info, dependencies)),
                Err(e) => {
                    errors.push(format!(
                        "failed to parse {} {}: {}",
                        info.kind.label(),
                        info.path.display(),
                        e
                    ));
                }
            }
        }
        progress.finish();

        let total_deps: usize = parsed.iter().map(|(_, deps)| deps.len()).sum();

        // Step 3: Fetch published versions and judge each dependency
        progress.start(total_deps as u64, "Checking dependencies");

        for (info, dependencies) in parsed {
            let mut manifest_result = ManifestCheckResult::new(&info.path);

            for dep in dependencies {
                progress.set_message(&format!("Checking {}", dep.coordinate()));

                // Skip before hitting the network where possible
                if let Some(reason) = judge.should_skip(&dep) {
                    manifest_result.add_result(CheckResult::skip(dep, reason));
                    progress.inc();
                    continue;
                }

                let versions = match self.fetch_versions(&dep.coordinate()).await {
                    Ok(v) => v,
                    Err(e) => {
                        errors.push(format!("failed to fetch {}: {}", dep.coordinate(), e));
                        manifest_result.add_result(CheckResult::skip(
                            dep,
                            SkipReason::FetchFailed(e.to_string()),
                        ));
                        progress.inc();
                        continue;
                    }
                };

                manifest_result.add_result(judge.judge(&dep, &versions));
                progress.inc();
            }

            report.add_manifest(manifest_result);
        }
        progress.finish();

        CheckOutcome { report, errors }
    }

    /// Build a CheckFilter from CLI arguments
    fn build_filter(&self) -> CheckFilter {
        let mut filter = CheckFilter::new();

        if !self.args.exclude.is_empty() {
            filter = filter.with_exclude(self.args.exclude.clone());
        }
        if !self.args.only.is_empty() {
            filter = filter.with_only(self.args.only.clone());
        }
        if self.args.pre {
            filter = filter.with_allow_unstable(true);
        }
        if let Some(age) = self.args.age {
            filter = filter.with_min_age(age);
        }

        filter
    }

    /// Fetch versions for a coordinate with concurrency control
    async fn fetch_versions(&self, coordinate: &str) -> Result<Vec<VersionInfo>, RegistryError> {
        let _permit = self
            .semaphore
            .acquire()
            .await
            .map_err(|e| {
                RegistryError::network_error(coordinate, self.source.registry_name(), e.to_string())
            })?;

        self.source.fetch_versions(coordinate).await
    }
}
