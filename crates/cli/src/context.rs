use anyhow::Result;
use configure_workflow_core::Config;
use configure_workflow_utils::get_workflow_config;
use std::path::{Path, PathBuf};

pub struct CommandContext {
    pub current_dir: PathBuf,
    pub config: Config,
}

impl CommandContext {
    /// # Errors
    /// Returns error if the current directory is unavailable or the configuration cannot be loaded.
    pub async fn new(config_path: Option<&Path>) -> Result<Self> {
        let current_dir = std::env::current_dir()?;
        let config = get_workflow_config(&current_dir, config_path).await?;
        Ok(Self {
            current_dir,
            config,
        })
    }

    /// Configured version source, resolved against the current directory
    pub fn version_file(&self) -> PathBuf {
        self.current_dir.join(&self.config.version_file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_file_is_relative_to_current_dir() {
        let context = CommandContext {
            current_dir: PathBuf::from("/repo"),
            config: Config::default(),
        };
        assert_eq!(
            context.version_file(),
            PathBuf::from("/repo/src/net/sourceforge/plantuml/version/Version_Snapshot.java")
        );
    }
}
