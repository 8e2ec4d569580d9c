//! Errors raised while extracting a version from a Java source file.

use std::{fmt::Display, path::PathBuf};

use thiserror::Error;

/// The numeric fields looked up in a version source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionField {
    /// The `return NNNNNNN;` literal
    Version,
    /// The `final int beta = N;` constant
    Beta,
    /// The trailing patch digits of the version literal
    Fix,
}

impl Display for VersionField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::Version => "version",
                Self::Beta => "beta",
                Self::Fix => "fix",
            }
        )
    }
}

#[derive(Error, Debug)]
pub enum ExtractionError {
    #[error("Failed to read version file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("No {field} literal found while extracting version and beta")]
    MissingField { field: VersionField },

    #[error("Invalid {field} number: '{value}'")]
    InvalidNumber { field: VersionField, value: String },
}

pub type Result<T> = std::result::Result<T, ExtractionError>;
