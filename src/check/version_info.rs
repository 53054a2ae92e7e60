//! Version information from the registry
//!
//! Maven versions are not semver, so comparison is lenient: numeric parts
//! compared piecewise, with stability breaking ties so a pre-release ranks
//! below the release it precedes.

use crate::stability::classify;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single published version of an artifact
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionInfo {
    /// The version string (e.g., "9.12.0", "5.3.23.RELEASE")
    pub version: String,
    /// When this version was published
    pub released_at: DateTime<Utc>,
}

impl VersionInfo {
    /// Create a new VersionInfo
    pub fn new(version: impl Into<String>, released_at: DateTime<Utc>) -> Self {
        Self {
            version: version.into(),
            released_at,
        }
    }

    /// Create a VersionInfo stamped with the current time
    pub fn now(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            released_at: Utc::now(),
        }
    }
}

impl Ord for VersionInfo {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        compare_versions(&self.version, &other.version)
            .then_with(|| self.version.cmp(&other.version))
            .then_with(|| self.released_at.cmp(&other.released_at))
    }
}

impl PartialOrd for VersionInfo {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Compare two version strings by their numeric components.
///
/// Splits on `.` and `-`, drops anything that does not parse as a number
/// (so "5.3.23.RELEASE" compares as 5.3.23), and treats a longer version as
/// greater when all common parts are equal. A leading lowercase `v` is
/// stripped first.
///
/// When the numeric components are identical, stability breaks the tie: a
/// pre-release ranks below the release it precedes ("2.0.0-RC1" < "2.0.0"),
/// while two versions of the same stability class ("5.3.23.RELEASE" and
/// "5.3.23") compare equal.
pub fn compare_versions(a: &str, b: &str) -> std::cmp::Ordering {
    let parse_parts = |s: &str| -> Vec<u64> {
        let s = s.strip_prefix('v').unwrap_or(s);
        s.split(['.', '-']).filter_map(|p| p.parse().ok()).collect()
    };

    let parts_a = parse_parts(a);
    let parts_b = parse_parts(b);

    for (pa, pb) in parts_a.iter().zip(parts_b.iter()) {
        match pa.cmp(pb) {
            std::cmp::Ordering::Equal => continue,
            other => return other,
        }
    }

    parts_a
        .len()
        .cmp(&parts_b.len())
        .then_with(|| classify(a).is_stable().cmp(&classify(b).is_stable()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::cmp::Ordering;

    #[test]
    fn test_version_info_new() {
        let date = Utc.with_ymd_and_hms(2024, 1, 15, 10, 0, 0).unwrap();
        let info = VersionInfo::new("9.12.0", date);
        assert_eq!(info.version, "9.12.0");
        assert_eq!(info.released_at, date);
    }

    #[test]
    fn test_basic_ordering() {
        assert_eq!(compare_versions("1.0.0", "1.0.0"), Ordering::Equal);
        assert_eq!(compare_versions("1.0.0", "2.0.0"), Ordering::Less);
        assert_eq!(compare_versions("2.0.0", "1.0.0"), Ordering::Greater);
    }

    #[test]
    fn test_multi_digit_components() {
        // Numeric comparison, not lexicographic
        assert_eq!(compare_versions("1.9.0", "1.10.0"), Ordering::Less);
        assert_eq!(compare_versions("10.0.0", "9.0.0"), Ordering::Greater);
    }

    #[test]
    fn test_release_suffix_is_ignored() {
        assert_eq!(
            compare_versions("5.3.23.RELEASE", "5.3.23"),
            Ordering::Equal
        );
        assert_eq!(
            compare_versions("5.3.23.RELEASE", "5.3.24"),
            Ordering::Less
        );
    }

    #[test]
    fn test_v_prefix_is_stripped() {
        assert_eq!(compare_versions("v1.0.0", "1.0.0"), Ordering::Equal);
        assert_eq!(compare_versions("v1.0.0", "v2.0.0"), Ordering::Less);
    }

    #[test]
    fn test_longer_version_is_greater() {
        assert_eq!(compare_versions("1.0", "1.0.0"), Ordering::Less);
    }

    #[test]
    fn test_prerelease_ranks_below_its_release() {
        assert_eq!(compare_versions("2.0.0-RC1", "2.0.0"), Ordering::Less);
        assert_eq!(compare_versions("2.0.0", "2.0.0-RC1"), Ordering::Greater);
        assert_eq!(compare_versions("1.0.0-SNAPSHOT", "1.0.0"), Ordering::Less);
    }

    #[test]
    fn test_same_stability_class_compares_equal() {
        assert_eq!(compare_versions("2.0.0-RC1", "2.0.0-RC2"), Ordering::Equal);
        assert_eq!(
            compare_versions("5.3.23.RELEASE", "5.3.23"),
            Ordering::Equal
        );
    }

    #[test]
    fn test_ord_is_consistent_with_eq() {
        let date = Utc.with_ymd_and_hms(2024, 1, 15, 10, 0, 0).unwrap();
        let release = VersionInfo::new("2.0.0", date);
        let candidate = VersionInfo::new("2.0.0-RC1", date);

        assert_ne!(release, candidate);
        assert_ne!(release.cmp(&candidate), Ordering::Equal);
        assert_eq!(release.cmp(&release.clone()), Ordering::Equal);

        // Equal numeric parts and stability still order deterministically
        let rc1 = VersionInfo::new("2.0.0-RC1", date);
        let rc2 = VersionInfo::new("2.0.0-RC2", date);
        assert_eq!(rc1.cmp(&rc2), Ordering::Less);
    }

    #[test]
    fn test_sorting_version_infos() {
        let mut versions = vec![
            VersionInfo::now("2.0.0"),
            VersionInfo::now("1.0.0"),
            VersionInfo::now("1.10.0"),
            VersionInfo::now("1.9.0"),
        ];
        versions.sort();
        let order: Vec<&str> = versions.iter().map(|v| v.version.as_str()).collect();
        assert_eq!(order, vec!["1.0.0", "1.9.0", "1.10.0", "2.0.0"]);
    }

    #[test]
    fn test_max_version() {
        let versions = vec![
            VersionInfo::now("8.5.13"),
            VersionInfo::now("8.5.9"),
            VersionInfo::now("8.4.4"),
        ];
        assert_eq!(versions.iter().max().unwrap().version, "8.5.13");
    }

    #[test]
    fn test_serde_version_info() {
        let date = Utc.with_ymd_and_hms(2024, 1, 15, 10, 0, 0).unwrap();
        let info = VersionInfo::new("9.12.0", date);
        let json = serde_json::to_string(&info).unwrap();
        let parsed: VersionInfo = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, info);
    }
}
