use crate::error::PublishError;
use std::path::{Path, PathBuf};
use tokio::process::Command;

/// Commits the export and pushes it to the repository's default remote
#[derive(Debug, Clone)]
pub struct GitPublisher {
    repo_dir: PathBuf,
    message: String,
}

impl GitPublisher {
    pub fn new(repo_dir: impl Into<PathBuf>) -> Self {
        Self {
            repo_dir: repo_dir.into(),
            message: "Add updated product data CSV".to_string(),
        }
    }

    pub fn with_message(mut self, message: &str) -> Self {
        self.message = message.to_string();
        self
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Runs `git add`, `git commit` and `git push`, stopping at the first failure
    pub async fn publish(&self, artifact: &Path) -> Result<(), PublishError> {
        let artifact = artifact.to_string_lossy();
        self.git(&["add", artifact.as_ref()]).await?;
        self.git(&["commit", "-m", &self.message]).await?;
        self.git(&["push"]).await?;

        ::log::info!("{} successfully pushed", artifact);
        Ok(())
    }

    async fn git(&self, args: &[&str]) -> Result<(), PublishError> {
        let command = args.join(" ");
        ::log::debug!("Running git {} in {}", command, self.repo_dir.display());

        let status = Command::new("git")
            .args(args)
            .current_dir(&self.repo_dir)
            .status()
            .await
            .map_err(|source| PublishError::Spawn {
                command: command.clone(),
                source,
            })?;

        if status.success() {
            Ok(())
        } else {
            Err(PublishError::Failed {
                command,
                status: status.to_string(),
            })
        }
    }
}
