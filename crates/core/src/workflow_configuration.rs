use anyhow::Result;
use serde::Serialize;
use tracing::{debug, info};

use crate::{config::Config, environment::Environment, event_kind::EventKind};

/// Outputs of the configure step, consumed by later steps of the workflow.
#[derive(Debug, Serialize, Clone, Default, PartialEq, Eq)]
pub struct WorkflowConfiguration {
    pub do_release: bool,
    pub do_snapshot_release: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pom_version: Option<String>,
}

impl WorkflowConfiguration {
    /// Output name/value pairs in the order they are written to the workflow.
    pub fn outputs(&self) -> Vec<(&'static str, String)> {
        let mut outputs = vec![
            ("do_release", self.do_release.to_string()),
            ("do_snapshot_release", self.do_snapshot_release.to_string()),
        ];
        if let Some(pom_version) = &self.pom_version {
            outputs.push(("pom_version", pom_version.clone()));
        }
        outputs
    }
}

/// Decide whether this run releases a tag, publishes a snapshot, or neither.
///
/// `snapshot_version` is only called for a snapshot release and must return the
/// full `-SNAPSHOT` POM version.
///
/// # Errors
/// Returns error if `snapshot_version` fails.
pub fn decide<F>(
    env: &Environment,
    config: &Config,
    snapshot_version: F,
) -> Result<WorkflowConfiguration>
where
    F: FnOnce() -> Result<String>,
{
    let event = env.event();
    if is_release(env, &event, config) {
        let pom_version = strip_tag_prefix(&env.git_ref, &config.tag_prefix).to_string();
        info!(git_ref = %env.git_ref, %pom_version, "release");
        return Ok(WorkflowConfiguration {
            do_release: true,
            do_snapshot_release: false,
            pom_version: Some(pom_version),
        });
    }

    if event.is_snapshot_trigger()
        && env.git_ref == config.snapshot_ref
        && config.snapshot_actors.contains(&env.actor)
    {
        let pom_version = snapshot_version()?;
        info!(%pom_version, "snapshot release");
        return Ok(WorkflowConfiguration {
            do_release: false,
            do_snapshot_release: true,
            pom_version: Some(pom_version),
        });
    }

    debug!(%event, actor = %env.actor, git_ref = %env.git_ref, "no release");
    Ok(WorkflowConfiguration::default())
}

/// Strip a single leading `prefix` from a tag name, e.g. `v1.2023.4` -> `1.2023.4`
pub fn strip_tag_prefix<'a>(tag: &'a str, prefix: &str) -> &'a str {
    tag.strip_prefix(prefix).unwrap_or(tag)
}

fn is_release(env: &Environment, event: &EventKind, config: &Config) -> bool {
    *event == EventKind::Create
        && env.ref_type == "tag"
        && env.git_ref.starts_with(config.tag_prefix.as_str())
        && (config.release_actors.contains(&env.actor) || env.actor == env.repository_owner)
}
