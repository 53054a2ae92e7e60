//! Gradle build file detection and parsing
//!
//! This module provides functionality to:
//! - Detect build.gradle, build.gradle.kts and gradle/libs.versions.toml
//! - Parse dependency declarations from the Groovy and Kotlin DSLs
//! - Parse version catalogs, including version.ref indirection

mod build_script;
mod detector;
mod version_catalog;

pub use build_script::BuildScriptParser;
pub use detector::{detect_manifests, ManifestInfo, ManifestKind};
pub use version_catalog::VersionCatalogParser;

use crate::domain::GradleDependency;
use crate::error::ManifestError;
use std::path::Path;

/// Parse dependencies from a detected manifest file
pub fn parse_manifest(info: &ManifestInfo) -> Result<Vec<GradleDependency>, ManifestError> {
    let content = read_manifest(&info.path)?;
    match info.kind {
        ManifestKind::BuildScript => Ok(BuildScriptParser.parse(&content)),
        ManifestKind::VersionCatalog => VersionCatalogParser.parse(&content, &info.path),
    }
}

fn read_manifest(path: &Path) -> Result<String, ManifestError> {
    std::fs::read_to_string(path).map_err(|e| ManifestError::read_error(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_parse_manifest_build_script() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("build.gradle");
        fs::write(
            &path,
            "dependencies {\n    implementation 'org.agrona:agrona:1.21.1'\n}\n",
        )
        .unwrap();

        let info = ManifestInfo::new(&path, ManifestKind::BuildScript);
        let deps = parse_manifest(&info).unwrap();
        assert_eq!(deps.len(), 1);
        assert_eq!(deps[0].coordinate(), "org.agrona:agrona");
    }

    #[test]
    fn test_parse_manifest_version_catalog() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("libs.versions.toml");
        fs::write(
            &path,
            "[libraries]\nfastutil = \"it.unimi.dsi:fastutil:8.5.13\"\n",
        )
        .unwrap();

        let info = ManifestInfo::new(&path, ManifestKind::VersionCatalog);
        let deps = parse_manifest(&info).unwrap();
        assert_eq!(deps.len(), 1);
        assert_eq!(deps[0].version, "8.5.13");
    }

    #[test]
    fn test_parse_manifest_missing_file() {
        let info = ManifestInfo::new("/nonexistent/build.gradle", ManifestKind::BuildScript);
        let result = parse_manifest(&info);
        assert!(matches!(result, Err(ManifestError::ReadError { .. })));
    }
}
