//! Core data types for jarship.
//!
//! This crate defines what a publishable JVM library project looks like:
//! its properties, the resolved and validated configuration, the
//! snapshot/release classification of versions, compiler and Javadoc options,
//! the set of JAR artifacts to produce, and the publication metadata that
//! travels with them.
//!
//! This crate is intentionally free of network I/O and child processes.

/// Conventional suffix of snapshot versions.
pub const SNAPSHOT_SUFFIX: &str = "-SNAPSHOT";

pub mod artifact;
pub mod compile;
pub mod config;
pub mod properties;
pub mod publication;
pub mod settings;
pub mod version;
