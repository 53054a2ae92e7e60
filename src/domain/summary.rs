//! Report structures aggregating check results
//!
//! Results are grouped per build file so the report can point at the file
//! that declares each outdated dependency.

use super::CheckResult;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Check results for a single build file or version catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManifestCheckResult {
    /// Path to the build file
    pub path: PathBuf,
    /// Individual dependency check results
    pub results: Vec<CheckResult>,
}

impl ManifestCheckResult {
    /// Creates an empty result set for a build file
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            results: Vec::new(),
        }
    }

    /// Adds a check result
    pub fn add_result(&mut self, result: CheckResult) {
        self.results.push(result);
    }

    pub fn update_count(&self) -> usize {
        self.results.iter().filter(|r| r.is_update()).count()
    }

    pub fn rejected_count(&self) -> usize {
        self.results.iter().filter(|r| r.is_rejected()).count()
    }

    pub fn skip_count(&self) -> usize {
        self.results.iter().filter(|r| r.is_skip()).count()
    }

    pub fn up_to_date_count(&self) -> usize {
        self.results.iter().filter(|r| r.is_up_to_date()).count()
    }

    /// Returns all results with an acceptable newer version
    pub fn updates(&self) -> impl Iterator<Item = &CheckResult> {
        self.results.iter().filter(|r| r.is_update())
    }

    /// Returns all results where the stability policy rejected every
    /// newer candidate
    pub fn rejections(&self) -> impl Iterator<Item = &CheckResult> {
        self.results.iter().filter(|r| r.is_rejected())
    }

    /// Returns all skipped results
    pub fn skips(&self) -> impl Iterator<Item = &CheckResult> {
        self.results.iter().filter(|r| r.is_skip())
    }

    /// Returns true if any dependency has an acceptable newer version
    pub fn has_updates(&self) -> bool {
        self.update_count() > 0
    }
}

/// Overall report across all build files of a project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckReport {
    /// Results for each build file processed
    pub manifests: Vec<ManifestCheckResult>,
}

impl CheckReport {
    /// Creates an empty report
    pub fn new() -> Self {
        Self {
            manifests: Vec::new(),
        }
    }

    /// Adds a per-file result set
    pub fn add_manifest(&mut self, manifest: ManifestCheckResult) {
        self.manifests.push(manifest);
    }

    pub fn files_processed(&self) -> usize {
        self.manifests.len()
    }

    pub fn total_updates(&self) -> usize {
        self.manifests.iter().map(|m| m.update_count()).sum()
    }

    pub fn total_rejected(&self) -> usize {
        self.manifests.iter().map(|m| m.rejected_count()).sum()
    }

    pub fn total_skips(&self) -> usize {
        self.manifests.iter().map(|m| m.skip_count()).sum()
    }

    pub fn total_up_to_date(&self) -> usize {
        self.manifests.iter().map(|m| m.up_to_date_count()).sum()
    }

    pub fn total_dependencies(&self) -> usize {
        self.manifests.iter().map(|m| m.results.len()).sum()
    }

    /// Returns true if any dependency has an acceptable newer version
    pub fn has_updates(&self) -> bool {
        self.total_updates() > 0
    }
}

impl Default for CheckReport {
    fn default() -> Self {
        Self::new()
    }
}
