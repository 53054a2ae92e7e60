//! Maven Central Search API adapter
//!
//! Fetches artifact version information from Maven Central.
//! API endpoint: https://search.maven.org/solrsearch/select
//!
//! Query format: q=g:{groupId}+AND+a:{artifactId}&core=gav&rows=200&wt=json

use crate::check::VersionInfo;
use crate::error::RegistryError;
use crate::registry::{HttpClient, VersionSource};
use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use serde::Deserialize;

/// Maven Central Search API base URL
const MAVEN_CENTRAL_API_URL: &str = "https://search.maven.org/solrsearch/select";

/// Registry display name
const REGISTRY_NAME: &str = "Maven Central";

/// Maximum number of versions to fetch per artifact
const MAX_VERSIONS: u32 = 200;

/// Maven Central adapter
pub struct MavenCentralAdapter {
    client: HttpClient,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    response: ResponseBody,
}

#[derive(Debug, Deserialize)]
struct ResponseBody {
    docs: Vec<VersionDoc>,
}

/// One GAV document from the search core
#[derive(Debug, Deserialize)]
struct VersionDoc {
    /// Version string
    v: String,
    /// Publication timestamp in milliseconds since epoch
    timestamp: i64,
}

impl MavenCentralAdapter {
    /// Create a new Maven Central adapter
    pub fn new(client: HttpClient) -> Self {
        Self { client }
    }

    /// Build the search URL for a "group:artifact" coordinate
    fn build_url(&self, coordinate: &str) -> Result<String, RegistryError> {
        let parts: Vec<&str> = coordinate.split(':').collect();
        if parts.len() != 2 || parts.iter().any(|p| p.is_empty()) {
            return Err(RegistryError::InvalidCoordinate {
                coordinate: coordinate.to_string(),
                reason: "expected format 'groupId:artifactId'".to_string(),
            });
        }
        let (group, artifact) = (parts[0], parts[1]);
        Ok(format!(
            "{}?q=g:{}+AND+a:{}&core=gav&rows={}&wt=json",
            MAVEN_CENTRAL_API_URL, group, artifact, MAX_VERSIONS
        ))
    }

    fn timestamp_to_datetime(timestamp_ms: i64) -> Option<DateTime<Utc>> {
        Utc.timestamp_millis_opt(timestamp_ms).single()
    }
}

#[async_trait]
impl VersionSource for MavenCentralAdapter {
    fn registry_name(&self) -> &'static str {
        REGISTRY_NAME
    }

    async fn fetch_versions(&self, coordinate: &str) -> Result<Vec<VersionInfo>, RegistryError> {
        let url = self.build_url(coordinate)?;
        let response: SearchResponse = self
            .client
            .get_json(&url, coordinate, REGISTRY_NAME)
            .await?;

        let mut versions: Vec<VersionInfo> = response
            .response
            .docs
            .into_iter()
            .filter_map(|doc| {
                Self::timestamp_to_datetime(doc.timestamp)
                    .map(|released_at| VersionInfo::new(doc.v, released_at))
            })
            .collect();

        versions.sort();

        Ok(versions)
    }
}
