//! Declared dependency structures

use serde::{Deserialize, Serialize};
use std::fmt;

/// Configurations whose dependencies only affect the test classpath
const TEST_CONFIGURATIONS: [&str; 6] = [
    "testImplementation",
    "testCompileOnly",
    "testRuntimeOnly",
    "testAnnotationProcessor",
    "testApi",
    "androidTestImplementation",
];

/// A dependency declared in a Gradle build file or version catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradleDependency {
    /// Maven group ID (e.g., "org.apache.wicket")
    pub group: String,
    /// Maven artifact ID (e.g., "wicket-core")
    pub artifact: String,
    /// Resolved current version; empty when the declaration carries none
    pub version: String,
    /// Gradle configuration this was declared under (implementation, api, ...)
    pub configuration: String,
    /// Name of the script variable or catalog version key, if the version
    /// was declared indirectly
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version_ref: Option<String>,
}

impl GradleDependency {
    /// Creates a new dependency declaration
    pub fn new(
        group: impl Into<String>,
        artifact: impl Into<String>,
        version: impl Into<String>,
        configuration: impl Into<String>,
    ) -> Self {
        Self {
            group: group.into(),
            artifact: artifact.into(),
            version: version.into(),
            configuration: configuration.into(),
            version_ref: None,
        }
    }

    /// Sets the version reference name (builder pattern)
    pub fn with_version_ref(mut self, reference: impl Into<String>) -> Self {
        self.version_ref = Some(reference.into());
        self
    }

    /// Returns the Maven coordinate "group:artifact"
    pub fn coordinate(&self) -> String {
        format!("{}:{}", self.group, self.artifact)
    }

    /// Returns true for test-only configurations
    pub fn is_test_scope(&self) -> bool {
        TEST_CONFIGURATIONS.contains(&self.configuration.as_str())
    }

    /// Returns true when no current version could be resolved
    pub fn has_version(&self) -> bool {
        !self.version.is_empty()
    }
}

impl fmt::Display for GradleDependency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let scope = if self.is_test_scope() { " (test)" } else { "" };
        write!(f, "{}:{}{}", self.coordinate(), self.version, scope)
    }
}
