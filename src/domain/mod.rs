//! Core domain models for gradver
//!
//! This module contains the fundamental types used throughout the application:
//! - Maven coordinates as declared in Gradle build files
//! - Per-dependency check outcomes
//! - Report structures aggregating results per build file

mod check_result;
mod dependency;
mod summary;

pub use check_result::{CheckResult, SkipReason};
pub use dependency::GradleDependency;
pub use summary::{CheckReport, ManifestCheckResult};
