//! Registry adapters for fetching published version information
//!
//! This module provides:
//! - HTTP client shared foundation with retry logic
//! - Maven Central Search API adapter

mod client;
mod maven_central;

pub use client::HttpClient;
pub use maven_central::MavenCentralAdapter;

use crate::check::VersionInfo;
use crate::error::RegistryError;
use async_trait::async_trait;

/// Source of published versions for a Maven coordinate.
///
/// Seam for tests and alternative repositories; production code uses
/// [`MavenCentralAdapter`].
#[async_trait]
pub trait VersionSource: Send + Sync {
    /// Name of the backing registry
    fn registry_name(&self) -> &'static str;

    /// Fetch all published versions for "group:artifact"
    async fn fetch_versions(&self, coordinate: &str) -> Result<Vec<VersionInfo>, RegistryError>;
}
