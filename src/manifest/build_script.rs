//! Dependency extraction from build.gradle and build.gradle.kts
//!
//! Handles:
//! - String notation: implementation 'group:name:version'
//! - Map notation: implementation group: 'x', name: 'y', version: 'z'
//! - def/val variables and ext blocks
//! - $var / ${var} interpolation in version positions
//!
//! Declarations through catalog accessors (libs.foo) carry no version in the
//! script and are covered by the version catalog parser instead.

use crate::domain::GradleDependency;
use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;

/// Parser for Gradle build scripts, Groovy or Kotlin DSL
pub struct BuildScriptParser;

// def name = '1.2.3' (Groovy) or val name = "1.2.3" (Kotlin)
static VAR_DEF: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^\s*(?:def|val)\s+(\w+)\s*=\s*['"]([^'"]+)['"]"#).unwrap()
});

// name = '1.2.3' inside an ext { } block
static EXT_VAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"^\s*(\w+)\s*=\s*['"]([^'"]+)['"]"#).unwrap());

static EXT_BLOCK_START: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\s*ext\s*\{").unwrap());

// implementation 'group:name:version' / implementation("group:name:version")
static DEP_STRING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^\s*(\w+)\s*[\(\s]*['"]([^:'"]+):([^:'"]+):([^'"]+)['"]"#).unwrap()
});

// implementation "group:name:$version" / "...:${version}"
static DEP_STRING_VAR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^\s*(\w+)\s*[\(\s]*"([^:"]+):([^:"]+):\$\{?(\w+)\}?""#).unwrap()
});

// implementation group: 'x', name: 'y', version: 'z' (version may be a bare
// variable reference)
static DEP_MAP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"^\s*(\w+)\s*[\(\s]+group:\s*['"]([^'"]+)['"]\s*,\s*name:\s*['"]([^'"]+)['"]\s*,\s*version:\s*['"]?([^'",\)\s]+)['"]?"#,
    )
    .unwrap()
});

impl BuildScriptParser {
    /// Parse all dependency declarations out of a build script.
    ///
    /// Total over any input: lines that do not look like declarations are
    /// ignored, and unresolvable variable references yield a dependency with
    /// an empty version (reported as skipped downstream).
    pub fn parse(&self, content: &str) -> Vec<GradleDependency> {
        let variables = self.extract_variables(content);
        let mut dependencies = Vec::new();

        for line in content.lines() {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with("//") {
                continue;
            }

            if let Some(dep) = self.parse_map_notation(line, &variables) {
                dependencies.push(dep);
                continue;
            }
            if let Some(dep) = self.parse_string_notation(line, &variables) {
                dependencies.push(dep);
            }
        }

        dependencies
    }

    /// Collect def/val and ext-block variable definitions
    fn extract_variables(&self, content: &str) -> HashMap<String, String> {
        let mut variables = HashMap::new();
        let mut in_ext_block = false;
        let mut brace_depth = 0usize;

        for line in content.lines() {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with("//") {
                continue;
            }

            if EXT_BLOCK_START.is_match(trimmed) {
                in_ext_block = !trimmed.contains('}');
                brace_depth = usize::from(in_ext_block);
                continue;
            }

            if in_ext_block {
                brace_depth += trimmed.matches('{').count();
                brace_depth = brace_depth.saturating_sub(trimmed.matches('}').count());
                if brace_depth == 0 {
                    in_ext_block = false;
                }

                if let Some(caps) = EXT_VAR.captures(line) {
                    variables.insert(caps[1].to_string(), caps[2].to_string());
                    continue;
                }
            }

            if let Some(caps) = VAR_DEF.captures(line) {
                variables.insert(caps[1].to_string(), caps[2].to_string());
            }
        }

        variables
    }

    fn parse_map_notation(
        &self,
        line: &str,
        variables: &HashMap<String, String>,
    ) -> Option<GradleDependency> {
        let caps = DEP_MAP.captures(line)?;

        let configuration = &caps[1];
        let group = &caps[2];
        let artifact = &caps[3];
        let version_raw = &caps[4];

        let (version, reference) = self.resolve_version(version_raw, variables);

        let dep = GradleDependency::new(group, artifact, version, configuration);
        Some(match reference {
            Some(name) => dep.with_version_ref(name),
            None => dep,
        })
    }

    fn parse_string_notation(
        &self,
        line: &str,
        variables: &HashMap<String, String>,
    ) -> Option<GradleDependency> {
        if let Some(caps) = DEP_STRING_VAR.captures(line) {
            let var_name = &caps[4];
            let version = variables.get(var_name).cloned().unwrap_or_default();
            return Some(
                GradleDependency::new(&caps[2], &caps[3], version, &caps[1])
                    .with_version_ref(var_name),
            );
        }

        let caps = DEP_STRING.captures(line)?;
        Some(GradleDependency::new(&caps[2], &caps[3], &caps[4], &caps[1]))
    }

    /// Resolve the version slot of a map-notation declaration, which may be
    /// a literal, `$var`, `${var}` or a bare unquoted variable name
    fn resolve_version(
        &self,
        raw: &str,
        variables: &HashMap<String, String>,
    ) -> (String, Option<String>) {
        let trimmed = raw.trim();

        let var_name = if let Some(inner) =
            trimmed.strip_prefix("${").and_then(|s| s.strip_suffix('}'))
        {
            Some(inner)
        } else if let Some(stripped) = trimmed.strip_prefix('$') {
            Some(stripped)
        } else if !trimmed.starts_with('\'')
            && !trimmed.starts_with('"')
            && !trimmed
                .chars()
                .next()
                .map(|c| c.is_ascii_digit())
                .unwrap_or(false)
        {
            Some(trimmed)
        } else {
            None
        };

        if let Some(name) = var_name {
            let value = variables.get(name).cloned().unwrap_or_default();
            return (value, Some(name.to_string()));
        }

        let version = trimmed
            .trim_start_matches(['\'', '"'])
            .trim_end_matches(['\'', '"']);
        (version.to_string(), None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(content: &str) -> Vec<GradleDependency> {
        BuildScriptParser.parse(content)
    }

    #[test]
    fn test_string_notation_single_quotes() {
        let deps = parse("dependencies {\n    implementation 'org.agrona:agrona:1.21.1'\n}");
        assert_eq!(deps.len(), 1);
        assert_eq!(deps[0].coordinate(), "org.agrona:agrona");
        assert_eq!(deps[0].version, "1.21.1");
        assert_eq!(deps[0].configuration, "implementation");
    }

    #[test]
    fn test_string_notation_kotlin_dsl() {
        let deps =
            parse("dependencies {\n    implementation(\"it.unimi.dsi:fastutil:8.5.13\")\n}");
        assert_eq!(deps.len(), 1);
        assert_eq!(deps[0].coordinate(), "it.unimi.dsi:fastutil");
        assert_eq!(deps[0].version, "8.5.13");
    }

    #[test]
    fn test_map_notation() {
        let deps = parse(
            "dependencies {\n    implementation group: 'org.apache.wicket', name: 'wicket-core', version: '9.12.0'\n}",
        );
        assert_eq!(deps.len(), 1);
        assert_eq!(deps[0].coordinate(), "org.apache.wicket:wicket-core");
        assert_eq!(deps[0].version, "9.12.0");
    }

    #[test]
    fn test_map_notation_with_parens() {
        let deps = parse(
            "implementation(group: 'org.apache.wicket', name: 'wicket-core', version: '9.12.0')",
        );
        assert_eq!(deps.len(), 1);
    }

    #[test]
    fn test_test_configuration_is_test_scope() {
        let deps = parse("dependencies {\n    testImplementation 'junit:junit:4.13.2'\n}");
        assert_eq!(deps.len(), 1);
        assert!(deps[0].is_test_scope());
    }

    #[test]
    fn test_groovy_def_variable() {
        let content = r#"
def wicketVersion = '9.12.0'

dependencies {
    implementation group: 'org.apache.wicket', name: 'wicket-core', version: wicketVersion
}
"#;
        let deps = parse(content);
        assert_eq!(deps.len(), 1);
        assert_eq!(deps[0].version, "9.12.0");
        assert_eq!(deps[0].version_ref.as_deref(), Some("wicketVersion"));
    }

    #[test]
    fn test_kotlin_val_variable() {
        let content = r#"
val agronaVersion = "1.21.1"

dependencies {
    testImplementation("org.agrona:agrona:$agronaVersion")
}
"#;
        let deps = parse(content);
        assert_eq!(deps.len(), 1);
        assert_eq!(deps[0].version, "1.21.1");
        assert_eq!(deps[0].version_ref.as_deref(), Some("agronaVersion"));
    }

    #[test]
    fn test_ext_block_variable() {
        let content = r#"
ext {
    springVersion = '5.3.23'
}

dependencies {
    implementation group: 'org.springframework', name: 'spring-core', version: springVersion
}
"#;
        let deps = parse(content);
        assert_eq!(deps.len(), 1);
        assert_eq!(deps[0].version, "5.3.23");
    }

    #[test]
    fn test_interpolation_with_braces() {
        let content = r#"
def junitVersion = '5.10.0'

dependencies {
    testImplementation "org.junit.jupiter:junit-jupiter:${junitVersion}"
}
"#;
        let deps = parse(content);
        assert_eq!(deps.len(), 1);
        assert_eq!(deps[0].version, "5.10.0");
    }

    #[test]
    fn test_unresolved_variable_yields_empty_version() {
        let deps =
            parse("implementation \"org.apache.wicket:wicket-core:$missingVersion\"");
        assert_eq!(deps.len(), 1);
        assert!(!deps[0].has_version());
        assert_eq!(deps[0].version_ref.as_deref(), Some("missingVersion"));
    }

    #[test]
    fn test_plugin_ids_are_not_dependencies() {
        let content = r#"
plugins {
    id 'java'
    id 'checkstyle'
}
"#;
        assert!(parse(content).is_empty());
    }

    #[test]
    fn test_catalog_accessors_are_ignored() {
        let content = r#"
dependencies {
    implementation(libs.fastutil)
    testImplementation(libs.agrona)
}
"#;
        assert!(parse(content).is_empty());
    }

    #[test]
    fn test_comments_are_skipped() {
        let content = "// implementation 'commented:out:1.0.0'\n";
        assert!(parse(content).is_empty());
    }

    #[test]
    fn test_empty_input() {
        assert!(parse("").is_empty());
    }

    #[test]
    fn test_realistic_kotlin_build_script() {
        let content = r#"
plugins {
    id("java")
    id("checkstyle")
}

val jmhVersion = "1.37"

dependencies {
    implementation("it.unimi.dsi:fastutil:8.5.13")

    testImplementation("org.agrona:agrona:1.21.1")
    testImplementation("org.junit.jupiter:junit-jupiter:5.10.0")
    testAnnotationProcessor("org.openjdk.jmh:jmh-generator-annprocess:$jmhVersion")
    testImplementation("org.openjdk.jmh:jmh-core:${jmhVersion}")
}
"#;
        let deps = parse(content);
        assert_eq!(deps.len(), 5);

        let jmh_core = deps.iter().find(|d| d.artifact == "jmh-core").unwrap();
        assert_eq!(jmh_core.version, "1.37");
        assert!(jmh_core.is_test_scope());

        let fastutil = deps.iter().find(|d| d.artifact == "fastutil").unwrap();
        assert!(!fastutil.is_test_scope());
    }
}
