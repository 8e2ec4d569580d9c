use std::{
    fmt::Display,
    path::{Path, PathBuf},
    sync::LazyLock,
};

use regex::Regex;
use serde::Serialize;
use tracing::debug;

use crate::error::{ExtractionError, Result, VersionField};

/// Location of the generated version source, relative to the repository root.
pub const DEFAULT_JAVA_FILE_PATH: &str = "src/net/sourceforge/plantuml/version/Version_Snapshot.java";

// ASCII digits only: `\d` would also accept other Unicode decimal digits.
static VERSION_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"return ([0-9]{6,7});").expect("hardcoded regex must compile")
});

static BETA_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"final int beta = ([0-9]+);").expect("hardcoded regex must compile")
});

/// Version triple derived from a `Version_Snapshot.java` source file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JavaVersion {
    pub major: String,
    pub minor: String,
    pub fix: String,
    pub dotted: String,
}

impl JavaVersion {
    /// Maven snapshot version, e.g. `1.2023.6beta1-SNAPSHOT`
    #[must_use]
    pub fn snapshot_version(&self) -> String {
        format!("{}.{}.{}-SNAPSHOT", self.major, self.minor, self.fix)
    }
}

impl Display for JavaVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.dotted)
    }
}

/// Reads a Java version source file and extracts its [`JavaVersion`].
#[derive(Debug, Clone)]
pub struct JavaVersionParser {
    java_file_path: PathBuf,
}

impl Default for JavaVersionParser {
    fn default() -> Self {
        Self::new(DEFAULT_JAVA_FILE_PATH)
    }
}

impl JavaVersionParser {
    pub fn new(java_file_path: impl Into<PathBuf>) -> Self {
        Self {
            java_file_path: java_file_path.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.java_file_path
    }

    /// # Errors
    /// Returns error if the file cannot be read, or if it lacks the version
    /// or beta literal.
    pub fn parse(&self) -> Result<JavaVersion> {
        let content =
            std::fs::read_to_string(&self.java_file_path).map_err(|source| ExtractionError::Read {
                path: self.java_file_path.clone(),
                source,
            })?;
        let version = parse_java_version(&content)?;
        debug!(
            path = %self.java_file_path.display(),
            version = %version,
            "extracted java version"
        );
        Ok(version)
    }
}

/// Extract a [`JavaVersion`] from the contents of a version source file.
///
/// Lines are scanned top to bottom and the last match of each pattern wins.
/// Both the version literal and the beta constant must be present; a beta of
/// zero means the version is not a beta.
///
/// # Errors
/// Returns error if either literal is missing or a number does not fit in 64 bits.
pub fn parse_java_version(content: &str) -> Result<JavaVersion> {
    let (version, beta) = content
        .lines()
        .fold((None, None), |(version, beta), line| {
            (
                capture(&VERSION_PATTERN, line).or(version),
                capture(&BETA_PATTERN, line).or(beta),
            )
        });

    let version = version.ok_or(ExtractionError::MissingField {
        field: VersionField::Version,
    })?;
    let beta = beta.ok_or(ExtractionError::MissingField {
        field: VersionField::Beta,
    })?;
    let beta = parse_number(beta, VersionField::Beta)?;

    // version is 6 or 7 ASCII digits, so these offsets are char boundaries
    let major = &version[..1];
    let minor = &version[1..5];
    let mut fix = version[5..].to_string();
    if beta > 0 {
        let next = parse_number(&fix, VersionField::Fix)?
            .checked_add(1)
            .ok_or_else(|| ExtractionError::InvalidNumber {
                field: VersionField::Fix,
                value: fix.clone(),
            })?;
        fix = format!("{next}beta{beta}");
    }

    Ok(JavaVersion {
        dotted: format!("{major}.{minor}.{fix}"),
        major: major.to_string(),
        minor: minor.to_string(),
        fix,
    })
}

fn capture<'a>(pattern: &Regex, line: &'a str) -> Option<&'a str> {
    pattern
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

fn parse_number(value: &str, field: VersionField) -> Result<u64> {
    value
        .parse::<u64>()
        .map_err(|_| ExtractionError::InvalidNumber {
            field,
            value: value.to_string(),
        })
}
