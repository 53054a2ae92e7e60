//! Per-dependency check outcome types

use super::GradleDependency;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Reason why a dependency was not checked against the registry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// Excluded via --exclude flag
    Excluded,
    /// Not in the --only list
    NotInOnlyList,
    /// The declaration carries no resolvable version
    UnresolvedVersion,
    /// Registry lookup failed
    FetchFailed(String),
    /// Registry returned no versions at all
    NoVersionsFound,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::Excluded => write!(f, "excluded by --exclude"),
            SkipReason::NotInOnlyList => write!(f, "not in --only list"),
            SkipReason::UnresolvedVersion => write!(f, "version could not be resolved"),
            SkipReason::FetchFailed(msg) => write!(f, "fetch failed: {}", msg),
            SkipReason::NoVersionsFound => write!(f, "no versions found"),
        }
    }
}

/// Outcome of checking a single dependency against the registry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CheckResult {
    /// Current version is the newest acceptable one
    UpToDate {
        /// The dependency that was checked
        dependency: GradleDependency,
    },
    /// A newer acceptable version exists
    UpdateAvailable {
        /// The dependency that was checked
        dependency: GradleDependency,
        /// The newest acceptable version
        latest: String,
        /// Release date of that version, when the registry reports one
        #[serde(skip_serializing_if = "Option::is_none")]
        released_at: Option<DateTime<Utc>>,
    },
    /// Newer versions exist but every one of them was rejected by the
    /// stability policy
    RejectedOnly {
        /// The dependency that was checked
        dependency: GradleDependency,
        /// The newest rejected candidate
        candidate: String,
        /// Why the candidate was rejected
        reason: String,
    },
    /// Dependency was not checked
    Skip {
        /// The dependency that was skipped
        dependency: GradleDependency,
        /// The reason for skipping
        reason: SkipReason,
    },
}

impl CheckResult {
    pub fn up_to_date(dependency: GradleDependency) -> Self {
        CheckResult::UpToDate { dependency }
    }

    pub fn update_available(
        dependency: GradleDependency,
        latest: impl Into<String>,
        released_at: Option<DateTime<Utc>>,
    ) -> Self {
        CheckResult::UpdateAvailable {
            dependency,
            latest: latest.into(),
            released_at,
        }
    }

    pub fn rejected_only(
        dependency: GradleDependency,
        candidate: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        CheckResult::RejectedOnly {
            dependency,
            candidate: candidate.into(),
            reason: reason.into(),
        }
    }

    pub fn skip(dependency: GradleDependency, reason: SkipReason) -> Self {
        CheckResult::Skip { dependency, reason }
    }

    /// Returns true if a newer acceptable version was found
    pub fn is_update(&self) -> bool {
        matches!(self, CheckResult::UpdateAvailable { .. })
    }

    /// Returns true if the dependency is current
    pub fn is_up_to_date(&self) -> bool {
        matches!(self, CheckResult::UpToDate { .. })
    }

    /// Returns true if all newer candidates were rejected
    pub fn is_rejected(&self) -> bool {
        matches!(self, CheckResult::RejectedOnly { .. })
    }

    /// Returns true if the dependency was skipped
    pub fn is_skip(&self) -> bool {
        matches!(self, CheckResult::Skip { .. })
    }

    /// Returns the dependency this result refers to
    pub fn dependency(&self) -> &GradleDependency {
        match self {
            CheckResult::UpToDate { dependency }
            | CheckResult::UpdateAvailable { dependency, .. }
            | CheckResult::RejectedOnly { dependency, .. }
            | CheckResult::Skip { dependency, .. } => dependency,
        }
    }
}
