//! gradver - Gradle dependency update checker library
//!
//! This library provides the core functionality for checking Gradle
//! dependencies against Maven Central:
//! - Build script parsing (build.gradle, build.gradle.kts)
//! - Version catalog parsing (gradle/libs.versions.toml)
//! - Version stability classification and the update ratchet
//! - Maven Central version lookup

pub mod check;
pub mod cli;
pub mod domain;
pub mod error;
pub mod manifest;
pub mod orchestrator;
pub mod output;
pub mod progress;
pub mod registry;
pub mod stability;
