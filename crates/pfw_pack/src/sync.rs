//! Keeps the local PackFramework checkout current.

use crate::command::{CommandFailure, CommandRunner, ToolCommand, GIT};
use crate::layout::PackLayout;
use camino::Utf8PathBuf;

/// Upstream PackFramework repository.
pub const FRAMEWORK_REPO_URL: &str = "https://github.com/Den4enko/PackFramework";

/// Result of a [`RepoSyncer::sync`] call. Failures are carried, never raised.
#[derive(Debug)]
pub enum SyncOutcome {
    /// An existing checkout was pulled.
    Updated,
    /// No checkout existed and a fresh clone was made.
    Cloned,
    UpdateFailed(CommandFailure),
    CloneFailed(CommandFailure),
}

impl SyncOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, SyncOutcome::Updated | SyncOutcome::Cloned)
    }
}

/// Clones the framework repository if absent, pulls it otherwise.
#[derive(Debug, Clone)]
pub struct RepoSyncer {
    root: Utf8PathBuf,
    framework_dir: Utf8PathBuf,
    remote_url: String,
}

impl RepoSyncer {
    pub fn new(layout: &PackLayout) -> Self {
        Self {
            root: layout.root().to_path_buf(),
            framework_dir: layout.framework_root(),
            remote_url: FRAMEWORK_REPO_URL.to_string(),
        }
    }

    pub fn with_remote(mut self, url: impl Into<String>) -> Self {
        self.remote_url = url.into();
        self
    }

    /// Run exactly one of `git pull origin` or `git clone`.
    ///
    /// A stale or missing framework must not block the build, so failures are
    /// logged and returned as part of the outcome.
    pub fn sync(&self, runner: &mut dyn CommandRunner) -> SyncOutcome {
        if self.framework_dir.as_std_path().exists() {
            tracing::info!("Updating PackFramework at {}", self.framework_dir);
            let command = ToolCommand::new(GIT, &["pull", "origin"], &self.framework_dir);
            match runner.run(&command) {
                Ok(()) => SyncOutcome::Updated,
                Err(e) => {
                    tracing::warn!("Failed to update PackFramework: {}", e);
                    SyncOutcome::UpdateFailed(e)
                }
            }
        } else {
            tracing::info!("Cloning PackFramework from {}", self.remote_url);
            let target = self.framework_dir.file_name().unwrap_or("framework");
            let command = ToolCommand::new(
                GIT,
                &["clone", self.remote_url.as_str(), target],
                &self.root,
            );
            match runner.run(&command) {
                Ok(()) => SyncOutcome::Cloned,
                Err(e) => {
                    tracing::warn!("Failed to clone PackFramework: {}", e);
                    SyncOutcome::CloneFailed(e)
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::testing::RecordingRunner;
    use camino::Utf8Path;
    use tempfile::tempdir;

    #[test]
    fn test_clones_when_missing() {
        let dir = tempdir().unwrap();
        let layout = PackLayout::new(Utf8Path::from_path(dir.path()).unwrap());
        let mut runner = RecordingRunner::default();

        let outcome = RepoSyncer::new(&layout).sync(&mut runner);

        assert!(matches!(outcome, SyncOutcome::Cloned));
        assert_eq!(runner.calls.len(), 1);
        assert_eq!(
            runner.calls[0].args,
            vec!["clone", FRAMEWORK_REPO_URL, "framework"]
        );
        assert_eq!(runner.calls[0].cwd, layout.root().to_path_buf());
    }

    #[test]
    fn test_pulls_when_present() {
        let dir = tempdir().unwrap();
        let layout = PackLayout::new(Utf8Path::from_path(dir.path()).unwrap());
        std::fs::create_dir_all(layout.framework_root().as_std_path()).unwrap();
        let mut runner = RecordingRunner::default();

        let outcome = RepoSyncer::new(&layout).sync(&mut runner);

        assert!(matches!(outcome, SyncOutcome::Updated));
        assert_eq!(runner.calls.len(), 1);
        assert_eq!(runner.calls[0].args, vec!["pull", "origin"]);
        assert_eq!(runner.calls[0].cwd, layout.framework_root());
    }

    #[test]
    fn test_failures_are_swallowed() {
        let dir = tempdir().unwrap();
        let layout = PackLayout::new(Utf8Path::from_path(dir.path()).unwrap());
        let mut runner = RecordingRunner::failing(&[GIT]);

        let outcome = RepoSyncer::new(&layout)
            .with_remote("https://example.invalid/PackFramework")
            .sync(&mut runner);

        assert!(matches!(outcome, SyncOutcome::CloneFailed(_)));
        assert!(!outcome.is_success());
        assert_eq!(
            runner.calls[0].args[1],
            "https://example.invalid/PackFramework"
        );
    }
}
