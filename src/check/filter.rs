//! Check filter configuration
//!
//! Encapsulates the options that decide which dependencies get checked and
//! which candidate versions are eligible.

use std::time::Duration;

/// Filter configuration for the update check
#[derive(Debug, Clone, Default)]
pub struct CheckFilter {
    /// Coordinates to exclude from the check
    pub exclude: Vec<String>,
    /// If non-empty, only check these coordinates
    pub only: Vec<String>,
    /// Accept unstable candidates even when the current version is stable
    pub allow_unstable: bool,
    /// Minimum age for candidate versions
    pub min_age: Option<Duration>,
}

impl CheckFilter {
    /// Create a filter that checks everything
    pub fn new() -> Self {
        Self::default()
    }

    /// Set coordinates to exclude
    pub fn with_exclude(mut self, exclude: Vec<String>) -> Self {
        self.exclude = exclude;
        self
    }

    /// Set the only-list
    pub fn with_only(mut self, only: Vec<String>) -> Self {
        self.only = only;
        self
    }

    /// Disable the stability ratchet
    pub fn with_allow_unstable(mut self, allow: bool) -> Self {
        self.allow_unstable = allow;
        self
    }

    /// Set the minimum candidate age
    pub fn with_min_age(mut self, age: Duration) -> Self {
        self.min_age = Some(age);
        self
    }

    /// Check if a coordinate should be processed. Matches against the full
    /// "group:artifact" coordinate or the bare artifact name.
    pub fn should_process(&self, coordinate: &str) -> bool {
        let artifact = coordinate.rsplit(':').next().unwrap_or(coordinate);

        if !self.only.is_empty() {
            return self.only.iter().any(|p| p == coordinate || p == artifact);
        }
        !self.exclude.iter().any(|p| p == coordinate || p == artifact)
    }
}
