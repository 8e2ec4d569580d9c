//! # configure-workflow-java
//!
//! Version extraction for the Java application released by configure-workflow.
//!
//! Scans a generated `Version_Snapshot.java` source line by line for the
//! `return NNNNNNN;` version literal and the `final int beta = N;` constant,
//! and derives the `major.minor.fix` triple used for snapshot POM versions.

pub mod error;
pub mod version_parser;

pub use error::{ExtractionError, VersionField};
pub use version_parser::{
    DEFAULT_JAVA_FILE_PATH, JavaVersion, JavaVersionParser, parse_java_version,
};
