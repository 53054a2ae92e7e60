//! Version stability classification and the upgrade rejection policy
//!
//! A candidate upgrade is only worth surfacing if it does not silently move
//! a stable pin onto a pre-release. Classification mirrors the convention
//! used across the Maven ecosystem: RELEASE/FINAL/GA markers are always
//! stable, plain numeric versions are stable, and anything else (RC, beta,
//! alpha, milestone, SNAPSHOT) is not.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Keyword substrings that mark a version as stable regardless of structure
const STABLE_KEYWORDS: [&str; 3] = ["RELEASE", "FINAL", "GA"];

// Plain version shape: digits, comma, period, lowercase v, hyphen, with an
// optional trailing "-r" revision suffix. Full-string match only.
static STABLE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9,.v-]+(-r)?$").unwrap());

/// Verdict for a single version string
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StabilityVerdict {
    /// Plain release or explicitly marked as one
    Stable,
    /// Pre-release marker detected (RC, beta, milestone, snapshot, ...)
    Unstable,
}

impl StabilityVerdict {
    /// Returns true for `Stable`
    pub fn is_stable(self) -> bool {
        matches!(self, StabilityVerdict::Stable)
    }
}

/// Classify a version string as stable or unstable.
///
/// Total over all inputs: every string, including the empty string, gets a
/// deterministic verdict. The keyword check is case-insensitive; the shape
/// check runs against the original string, so an uppercase `V` prefix fails
/// it.
pub fn classify(version: &str) -> StabilityVerdict {
    let upper = version.to_uppercase();
    let has_keyword = STABLE_KEYWORDS.iter().any(|k| upper.contains(k));

    if has_keyword || STABLE_PATTERN.is_match(version) {
        StabilityVerdict::Stable
    } else {
        StabilityVerdict::Unstable
    }
}

/// Decide whether a candidate upgrade should be rejected.
///
/// Rejects only the stable-to-unstable direction: once a dependency is
/// pinned to a stable version, pre-release candidates are filtered out of
/// the report. An already-unstable pin may move to anything.
pub fn should_reject(current: &str, candidate: &str) -> bool {
    !classify(candidate).is_stable() && classify(current).is_stable()
}

/// Rejection reason attached to candidates the ratchet filters out
pub const REJECTION_REASON: &str = "release candidate";
