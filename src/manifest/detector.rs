//! Build file detection
//!
//! Looks for the files a Gradle project declares versions in:
//! - build.gradle (Groovy DSL)
//! - build.gradle.kts (Kotlin DSL)
//! - gradle/libs.versions.toml (version catalog)

use std::path::{Path, PathBuf};

/// Kind of Gradle manifest file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManifestKind {
    /// build.gradle or build.gradle.kts
    BuildScript,
    /// gradle/libs.versions.toml
    VersionCatalog,
}

impl ManifestKind {
    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            ManifestKind::BuildScript => "build script",
            ManifestKind::VersionCatalog => "version catalog",
        }
    }
}

/// Information about a detected manifest file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestInfo {
    /// Path to the manifest file
    pub path: PathBuf,
    /// What kind of file this is
    pub kind: ManifestKind,
}

impl ManifestInfo {
    /// Create a new ManifestInfo
    pub fn new(path: impl Into<PathBuf>, kind: ManifestKind) -> Self {
        Self {
            path: path.into(),
            kind,
        }
    }
}

/// Detect Gradle manifest files in the given project directory
pub fn detect_manifests(dir: &Path) -> Vec<ManifestInfo> {
    let mut manifests = Vec::new();

    for name in ["build.gradle", "build.gradle.kts"] {
        let path = dir.join(name);
        if path.exists() {
            manifests.push(ManifestInfo::new(path, ManifestKind::BuildScript));
        }
    }

    let catalog = dir.join("gradle").join("libs.versions.toml");
    if catalog.exists() {
        manifests.push(ManifestInfo::new(catalog, ManifestKind::VersionCatalog));
    }

    manifests
}
