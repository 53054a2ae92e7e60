//! Update check logic for declared dependencies
//!
//! This module provides:
//! - Check filter configuration from CLI args
//! - Version info from the registry with release date
//! - The judge that turns a dependency plus its published versions into a
//!   check outcome, applying the stability ratchet per candidate

mod filter;
mod version_info;

pub use filter::CheckFilter;
pub use version_info::{compare_versions, VersionInfo};

use crate::domain::{CheckResult, GradleDependency, SkipReason};
use crate::stability::{should_reject, REJECTION_REASON};
use chrono::{DateTime, Utc};
use std::cmp::Ordering;

/// Judge that decides the check outcome for each dependency
pub struct UpdateCheck {
    /// Filter configuration
    filter: CheckFilter,
    /// Current time for age calculations
    now: DateTime<Utc>,
}

impl UpdateCheck {
    /// Create a new judge with the given filter
    pub fn new(filter: CheckFilter) -> Self {
        Self {
            filter,
            now: Utc::now(),
        }
    }

    /// Create a judge with a fixed current time (for testing)
    pub fn with_time(filter: CheckFilter, now: DateTime<Utc>) -> Self {
        Self { filter, now }
    }

    /// Check if a dependency should be looked up at all.
    /// Returns Some(SkipReason) if it should be skipped.
    pub fn should_skip(&self, dependency: &GradleDependency) -> Option<SkipReason> {
        if !self.filter.should_process(&dependency.coordinate()) {
            if !self.filter.only.is_empty() {
                return Some(SkipReason::NotInOnlyList);
            }
            return Some(SkipReason::Excluded);
        }

        if !dependency.has_version() {
            return Some(SkipReason::UnresolvedVersion);
        }

        None
    }

    /// Judge a dependency given the versions published for it.
    ///
    /// The stability ratchet runs per candidate, so a dependency with both a
    /// newer RC and a newer stable release reports the stable one. Only when
    /// every newer candidate is rejected does the dependency surface in the
    /// rejected section.
    pub fn judge(
        &self,
        dependency: &GradleDependency,
        available_versions: &[VersionInfo],
    ) -> CheckResult {
        if let Some(reason) = self.should_skip(dependency) {
            return CheckResult::skip(dependency.clone(), reason);
        }

        if available_versions.is_empty() {
            return CheckResult::skip(dependency.clone(), SkipReason::NoVersionsFound);
        }

        let current = dependency.version.as_str();

        // Candidates strictly newer than the current pin
        let newer: Vec<&VersionInfo> = available_versions
            .iter()
            .filter(|v| compare_versions(current, &v.version) == Ordering::Less)
            .collect();

        if newer.is_empty() {
            return CheckResult::up_to_date(dependency.clone());
        }

        // Stability ratchet, per candidate
        let (accepted, rejected): (Vec<&VersionInfo>, Vec<&VersionInfo>) =
            newer.into_iter().partition(|v| {
                self.filter.allow_unstable || !should_reject(current, &v.version)
            });

        // Age filter applies only to what we would actually suggest
        let eligible: Vec<&VersionInfo> = if let Some(min_age) = self.filter.min_age {
            match chrono::Duration::from_std(min_age) {
                Ok(min_age) => {
                    let cutoff = self.now - min_age;
                    accepted
                        .into_iter()
                        .filter(|v| v.released_at <= cutoff)
                        .collect()
                }
                Err(_) => accepted,
            }
        } else {
            accepted
        };

        if let Some(latest) = eligible.iter().max() {
            return CheckResult::update_available(
                dependency.clone(),
                &latest.version,
                Some(latest.released_at),
            );
        }

        if let Some(newest_rejected) = rejected.iter().max() {
            return CheckResult::rejected_only(
                dependency.clone(),
                &newest_rejected.version,
                REJECTION_REASON,
            );
        }

        // Newer versions exist but all were filtered by age
        CheckResult::up_to_date(dependency.clone())
    }
}
