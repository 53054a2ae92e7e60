//! Application error types using thiserror
//!
//! Error hierarchy:
//! - ManifestError: Gradle build file / version catalog parsing issues
//! - RegistryError: Maven Central communication issues
//! - ConfigError: CLI configuration issues

use std::path::PathBuf;
use thiserror::Error;

/// Application-level error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Build file related errors
    #[error(transparent)]
    Manifest(#[from] ManifestError),

    /// Registry related errors
    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// Configuration related errors
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Errors related to Gradle build file operations
#[derive(Error, Debug)]
pub enum ManifestError {
    /// No Gradle build file found in the project directory
    #[error("no Gradle build file found in {path}")]
    NotFound { path: PathBuf },

    /// Failed to read a build file
    #[error("failed to read {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Version catalog TOML parsing error
    #[error("failed to parse version catalog {path}: {message}")]
    CatalogParseError { path: PathBuf, message: String },
}

/// Errors related to Maven Central communication
#[derive(Error, Debug)]
pub enum RegistryError {
    /// Artifact not found in the registry
    #[error("artifact '{artifact}' not found in {registry}")]
    ArtifactNotFound { artifact: String, registry: String },

    /// Malformed coordinate passed to the registry adapter
    #[error("invalid coordinate '{coordinate}': {reason}")]
    InvalidCoordinate { coordinate: String, reason: String },

    /// Network request failed
    #[error("failed to fetch '{artifact}' from {registry}: {message}")]
    NetworkError {
        artifact: String,
        registry: String,
        message: String,
    },

    /// Rate limit exceeded
    #[error("rate limit exceeded for {registry}")]
    RateLimitExceeded { registry: String },

    /// Invalid response from registry
    #[error("invalid response from {registry} for '{artifact}': {message}")]
    InvalidResponse {
        artifact: String,
        registry: String,
        message: String,
    },

    /// Timeout
    #[error("timeout while fetching '{artifact}' from {registry}")]
    Timeout { artifact: String, registry: String },
}

/// Errors related to configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Invalid duration format
    #[error("invalid duration format '{value}': expected format like '2w', '10d', '1m'")]
    InvalidDuration { value: String },

    /// Target path does not exist or is not a directory
    #[error("invalid project path '{path}': {message}")]
    InvalidPath { path: PathBuf, message: String },
}

impl ManifestError {
    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        ManifestError::NotFound { path: path.into() }
    }

    pub fn read_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ManifestError::ReadError {
            path: path.into(),
            source,
        }
    }

    pub fn catalog_parse_error(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        ManifestError::CatalogParseError {
            path: path.into(),
            message: message.into(),
        }
    }

}

impl RegistryError {
    pub fn artifact_not_found(artifact: impl Into<String>, registry: impl Into<String>) -> Self {
        RegistryError::ArtifactNotFound {
            artifact: artifact.into(),
            registry: registry.into(),
        }
    }

    pub fn network_error(
        artifact: impl Into<String>,
        registry: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        RegistryError::NetworkError {
            artifact: artifact.into(),
            registry: registry.into(),
            message: message.into(),
        }
    }

    pub fn timeout(artifact: impl Into<String>, registry: impl Into<String>) -> Self {
        RegistryError::Timeout {
            artifact: artifact.into(),
            registry: registry.into(),
        }
    }
}

impl ConfigError {
    pub fn invalid_duration(value: impl Into<String>) -> Self {
        ConfigError::InvalidDuration {
            value: value.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manifest_error_not_found() {
        let err = ManifestError::not_found("/project");
        let msg = format!("{}", err);
        assert!(msg.contains("no Gradle build file found"));
        assert!(msg.contains("/project"));
    }

    #[test]
    fn test_manifest_error_catalog_parse() {
        let err = ManifestError::catalog_parse_error("gradle/libs.versions.toml", "bad key");
        let msg = format!("{}", err);
        assert!(msg.contains("failed to parse version catalog"));
        assert!(msg.contains("bad key"));
    }

    #[test]
    fn test_registry_error_artifact_not_found() {
        let err = RegistryError::artifact_not_found("it.unimi.dsi:fastutil", "Maven Central");
        let msg = format!("{}", err);
        assert!(msg.contains("'it.unimi.dsi:fastutil' not found"));
        assert!(msg.contains("Maven Central"));
    }

    #[test]
    fn test_registry_error_network() {
        let err = RegistryError::network_error("org.agrona:agrona", "Maven Central", "HTTP 500");
        let msg = format!("{}", err);
        assert!(msg.contains("failed to fetch"));
        assert!(msg.contains("HTTP 500"));
    }

    #[test]
    fn test_registry_error_timeout() {
        let err = RegistryError::timeout("junit:junit", "Maven Central");
        let msg = format!("{}", err);
        assert!(msg.contains("timeout"));
        assert!(msg.contains("junit:junit"));
    }

    #[test]
    fn test_config_error_invalid_duration() {
        let err = ConfigError::InvalidDuration {
            value: "abc".to_string(),
        };
        let msg = format!("{}", err);
        assert!(msg.contains("invalid duration format"));
        assert!(msg.contains("abc"));
    }

    #[test]
    fn test_app_error_from_manifest_error() {
        let app_err: AppError = ManifestError::not_found("/p").into();
        assert!(format!("{}", app_err).contains("no Gradle build file found"));
    }

    #[test]
    fn test_app_error_from_registry_error() {
        let app_err: AppError = RegistryError::artifact_not_found("g:a", "Maven Central").into();
        assert!(format!("{}", app_err).contains("not found"));
    }
}
