//! Version catalog parser for gradle/libs.versions.toml
//!
//! Handles:
//! - [versions] table with plain strings and rich constraints
//! - [libraries] entries in "group:artifact:version" string form
//! - [libraries] entries with module/group/name and version or version.ref
//!
//! [plugins] and [bundles] declare no Maven coordinates of their own and are
//! ignored.

use crate::domain::GradleDependency;
use crate::error::ManifestError;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

/// Parser for Gradle version catalogs
pub struct VersionCatalogParser;

/// Configuration label attached to catalog entries; a catalog carries no
/// configuration information of its own
const CATALOG_CONFIGURATION: &str = "libraries";

#[derive(Debug, Deserialize)]
struct Catalog {
    #[serde(default)]
    versions: BTreeMap<String, VersionEntry>,
    #[serde(default)]
    libraries: BTreeMap<String, LibraryEntry>,
}

/// A [versions] entry: either "1.2.3" or a rich constraint table
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum VersionEntry {
    Literal(String),
    Rich {
        require: Option<String>,
        strictly: Option<String>,
        prefer: Option<String>,
    },
}

impl VersionEntry {
    fn resolve(&self) -> Option<&str> {
        match self {
            VersionEntry::Literal(v) => Some(v),
            VersionEntry::Rich {
                require,
                strictly,
                prefer,
            } => strictly
                .as_deref()
                .or(require.as_deref())
                .or(prefer.as_deref()),
        }
    }
}

/// A [libraries] entry
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum LibraryEntry {
    /// "group:artifact:version"
    Compact(String),
    /// { module = "g:a", version = ... } or { group, name, version = ... }
    Detailed {
        module: Option<String>,
        group: Option<String>,
        name: Option<String>,
        version: Option<VersionField>,
    },
}

/// The version slot of a detailed library entry
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum VersionField {
    Literal(String),
    Reference {
        #[serde(rename = "ref")]
        reference: String,
    },
    Rich {
        require: Option<String>,
        strictly: Option<String>,
        prefer: Option<String>,
    },
}

impl VersionCatalogParser {
    /// Parse all library declarations out of a version catalog.
    ///
    /// A `version.ref` pointing at a missing [versions] key yields a
    /// dependency with an empty version rather than an error, so one broken
    /// entry does not hide the rest of the catalog.
    pub fn parse(
        &self,
        content: &str,
        path: &Path,
    ) -> Result<Vec<GradleDependency>, ManifestError> {
        let catalog: Catalog = toml::from_str(content)
            .map_err(|e| ManifestError::catalog_parse_error(path, e.to_string()))?;

        let mut dependencies = Vec::new();

        for entry in catalog.libraries.values() {
            if let Some(dep) = self.library_to_dependency(entry, &catalog.versions) {
                dependencies.push(dep);
            }
        }

        Ok(dependencies)
    }

    fn library_to_dependency(
        &self,
        entry: &LibraryEntry,
        versions: &BTreeMap<String, VersionEntry>,
    ) -> Option<GradleDependency> {
        match entry {
            LibraryEntry::Compact(spec) => {
                let mut parts = spec.splitn(3, ':');
                let group = parts.next()?;
                let artifact = parts.next()?;
                let version = parts.next().unwrap_or("");
                Some(GradleDependency::new(
                    group,
                    artifact,
                    version,
                    CATALOG_CONFIGURATION,
                ))
            }
            LibraryEntry::Detailed {
                module,
                group,
                name,
                version,
            } => {
                let (group, artifact) = if let Some(module) = module {
                    let (g, a) = module.split_once(':')?;
                    (g.to_string(), a.to_string())
                } else {
                    (group.clone()?, name.clone()?)
                };

                let (resolved, reference) = match version {
                    Some(VersionField::Literal(v)) => (v.clone(), None),
                    Some(VersionField::Reference { reference }) => {
                        let resolved = versions
                            .get(reference)
                            .and_then(|v| v.resolve())
                            .unwrap_or_default()
                            .to_string();
                        (resolved, Some(reference.clone()))
                    }
                    Some(VersionField::Rich {
                        require,
                        strictly,
                        prefer,
                    }) => {
                        let v = strictly
                            .as_deref()
                            .or(require.as_deref())
                            .or(prefer.as_deref())
                            .unwrap_or_default();
                        (v.to_string(), None)
                    }
                    None => (String::new(), None),
                };

                let dep =
                    GradleDependency::new(group, artifact, resolved, CATALOG_CONFIGURATION);
                Some(match reference {
                    Some(name) => dep.with_version_ref(name),
                    None => dep,
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn parse(content: &str) -> Vec<GradleDependency> {
        VersionCatalogParser
            .parse(content, &PathBuf::from("gradle/libs.versions.toml"))
            .unwrap()
    }

    #[test]
    fn test_compact_string_form() {
        let deps = parse("[libraries]\nfastutil = \"it.unimi.dsi:fastutil:8.5.13\"\n");
        assert_eq!(deps.len(), 1);
        assert_eq!(deps[0].coordinate(), "it.unimi.dsi:fastutil");
        assert_eq!(deps[0].version, "8.5.13");
    }

    #[test]
    fn test_module_with_literal_version() {
        let content = r#"
[libraries]
agrona = { module = "org.agrona:agrona", version = "1.21.1" }
"#;
        let deps = parse(content);
        assert_eq!(deps.len(), 1);
        assert_eq!(deps[0].coordinate(), "org.agrona:agrona");
        assert_eq!(deps[0].version, "1.21.1");
    }

    #[test]
    fn test_group_name_form() {
        let content = r#"
[libraries]
junit = { group = "org.junit.jupiter", name = "junit-jupiter", version = "5.10.0" }
"#;
        let deps = parse(content);
        assert_eq!(deps.len(), 1);
        assert_eq!(deps[0].coordinate(), "org.junit.jupiter:junit-jupiter");
    }

    #[test]
    fn test_version_ref_resolution() {
        let content = r#"
[versions]
junit = "5.10.0"

[libraries]
junit-api = { module = "org.junit.jupiter:junit-jupiter-api", version.ref = "junit" }
"#;
        let deps = parse(content);
        assert_eq!(deps.len(), 1);
        assert_eq!(deps[0].version, "5.10.0");
        assert_eq!(deps[0].version_ref.as_deref(), Some("junit"));
    }

    #[test]
    fn test_dangling_version_ref_yields_empty_version() {
        let content = r#"
[libraries]
junit-api = { module = "org.junit.jupiter:junit-jupiter-api", version.ref = "missing" }
"#;
        let deps = parse(content);
        assert_eq!(deps.len(), 1);
        assert!(!deps[0].has_version());
        assert_eq!(deps[0].version_ref.as_deref(), Some("missing"));
    }

    #[test]
    fn test_rich_version_prefers_strictly() {
        let content = r#"
[libraries]
guava = { module = "com.google.guava:guava", version = { strictly = "33.0.0-jre", prefer = "32.0.0-jre" } }
"#;
        let deps = parse(content);
        assert_eq!(deps[0].version, "33.0.0-jre");
    }

    #[test]
    fn test_rich_versions_entry_resolution() {
        let content = r#"
[versions]
checkstyle = { require = "10.12.4" }

[libraries]
checkstyle = { module = "com.puppycrawl.tools:checkstyle", version.ref = "checkstyle" }
"#;
        let deps = parse(content);
        assert_eq!(deps[0].version, "10.12.4");
    }

    #[test]
    fn test_plugins_section_is_ignored() {
        let content = r#"
[versions]
versions-plugin = "0.51.0"

[plugins]
versions = { id = "com.github.ben-manes.versions", version.ref = "versions-plugin" }

[libraries]
fastutil = "it.unimi.dsi:fastutil:8.5.13"
"#;
        let deps = parse(content);
        assert_eq!(deps.len(), 1);
        assert_eq!(deps[0].artifact, "fastutil");
    }

    #[test]
    fn test_empty_catalog() {
        assert!(parse("").is_empty());
        assert!(parse("[versions]\n[libraries]\n").is_empty());
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        let result =
            VersionCatalogParser.parse("[libraries\n", &PathBuf::from("libs.versions.toml"));
        assert!(matches!(
            result,
            Err(ManifestError::CatalogParseError { .. })
        ));
    }

    #[test]
    fn test_catalog_entries_are_not_test_scope() {
        let deps = parse("[libraries]\nagrona = \"org.agrona:agrona:1.21.1\"\n");
        assert!(!deps[0].is_test_scope());
    }
}
