use serde::{Deserialize, Serialize};

/// Loaded from `.github/configure-workflow.json`, controls who may release and where the snapshot
/// version is read from.
///
/// Every field has a default, so an empty object (or no file at all) gives the stock behaviour.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Actors allowed to release from a tag. The repository owner is always allowed as well,
    /// so forked repositories can release themselves when testing the workflow.
    #[serde(default = "default_maintainers")]
    pub release_actors: Vec<String>,

    /// Actors whose pushes to `snapshot_ref` publish a snapshot
    #[serde(default = "default_maintainers")]
    pub snapshot_actors: Vec<String>,

    /// Branch ref that publishes snapshots (default: "refs/heads/master")
    #[serde(default = "default_snapshot_ref")]
    pub snapshot_ref: String,

    /// Prefix a tag must carry to be released; stripped to form the POM version
    #[serde(default = "default_tag_prefix")]
    pub tag_prefix: String,

    /// Java source holding the snapshot version, relative to the repository root
    #[serde(default = "default_version_file")]
    pub version_file: String,
}

fn default_maintainers() -> Vec<String> {
    vec!["arnaudroques".to_string()]
}

fn default_snapshot_ref() -> String {
    "refs/heads/master".to_string()
}

fn default_tag_prefix() -> String {
    "v".to_string()
}

fn default_version_file() -> String {
    "src/net/sourceforge/plantuml/version/Version_Snapshot.java".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            release_actors: default_maintainers(),
            snapshot_actors: default_maintainers(),
            snapshot_ref: default_snapshot_ref(),
            tag_prefix: default_tag_prefix(),
            version_file: default_version_file(),
        }
    }
}
