use std::path::Path;

use anyhow::{Context, Result};
use configure_workflow_core::Config;
use tokio::fs::read_to_string;
use tracing::debug;

/// Configuration file, relative to the repository root
pub const CONFIG_FILE: &str = ".github/configure-workflow.json";

/// Load the workflow configuration.
///
/// An explicit `config_path` must exist. Without one, `CONFIG_FILE` under
/// `current_dir` is read when present and defaults are used otherwise.
///
/// # Errors
/// Returns error if an explicit file is missing, or a file cannot be read or parsed.
pub async fn get_workflow_config(current_dir: &Path, config_path: Option<&Path>) -> Result<Config> {
    let path = match config_path {
        Some(path) => current_dir.join(path),
        None => {
            let path = current_dir.join(CONFIG_FILE);
            if !path.exists() {
                debug!(path = %path.display(), "no config file, using defaults");
                return Ok(Config::default());
            }
            path
        }
    };
    let content = read_to_string(&path)
        .await
        .with_context(|| format!("Failed to read config file {}", path.display()))?;
    let config: Config = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config file {}", path.display()))?;
    debug!(path = %path.display(), ?config, "loaded config");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_get_workflow_config_defaults_without_file() {
        let temp_dir = TempDir::new().unwrap();
        let config = get_workflow_config(temp_dir.path(), None).await.unwrap();
        assert_eq!(config, Config::default());
    }

    #[tokio::test]
    async fn test_get_workflow_config_reads_default_file() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir_all(temp_dir.path().join(".github")).unwrap();
        fs::write(
            temp_dir.path().join(CONFIG_FILE),
            r#"{"snapshotRef": "refs/heads/main"}"#,
        )
        .unwrap();

        let config = get_workflow_config(temp_dir.path(), None).await.unwrap();
        assert_eq!(config.snapshot_ref, "refs/heads/main");
        assert_eq!(config.tag_prefix, "v");
    }

    #[tokio::test]
    async fn test_get_workflow_config_explicit_path() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join("release.json"),
            r#"{"releaseActors": ["alice"]}"#,
        )
        .unwrap();

        let config = get_workflow_config(temp_dir.path(), Some(Path::new("release.json")))
            .await
            .unwrap();
        assert_eq!(config.release_actors, vec!["alice"]);
    }

    #[tokio::test]
    async fn test_get_workflow_config_explicit_path_missing() {
        let temp_dir = TempDir::new().unwrap();
        let result = get_workflow_config(temp_dir.path(), Some(Path::new("missing.json"))).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_get_workflow_config_invalid_json() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir_all(temp_dir.path().join(".github")).unwrap();
        fs::write(temp_dir.path().join(CONFIG_FILE), "{ not json").unwrap();

        let err = get_workflow_config(temp_dir.path(), None).await.unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }
}
