//! External tool invocation.
//!
//! The pipeline shells out to two tools: `git` (framework sync) and `packwiz`
//! (pack refresh). Both go through the [`CommandRunner`] trait so the pipeline
//! can be exercised without either tool installed.

use camino::{Utf8Path, Utf8PathBuf};
use std::fmt;
use thiserror::Error;

pub const GIT: &str = "git";
pub const PACKWIZ: &str = "packwiz";

/// A single external command: program, arguments and working directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolCommand {
    pub program: String,
    pub args: Vec<String>,
    pub cwd: Utf8PathBuf,
}

impl ToolCommand {
    pub fn new(program: &str, args: &[&str], cwd: &Utf8Path) -> Self {
        Self {
            program: program.to_string(),
            args: args.iter().map(|a| a.to_string()).collect(),
            cwd: cwd.to_path_buf(),
        }
    }
}

impl fmt::Display for ToolCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// Why an external command did not succeed.
#[derive(Error, Debug)]
pub enum CommandFailure {
    /// The process could not be started (tool missing, cwd missing, ...).
    #[error("failed to start: {0}")]
    Spawn(#[from] std::io::Error),

    /// The process ran and exited with a non-zero status.
    #[error("exited with status {0}")]
    Exit(i32),

    /// The process was terminated without an exit code.
    #[error("terminated by signal")]
    Terminated,
}

/// Runs external commands to completion, reporting success via exit status.
pub trait CommandRunner {
    fn run(&mut self, command: &ToolCommand) -> Result<(), CommandFailure>;
}

/// Runs commands as child processes with inherited stdio.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&mut self, command: &ToolCommand) -> Result<(), CommandFailure> {
        tracing::debug!("Running `{}` in {}", command, command.cwd);
        let status = std::process::Command::new(&command.program)
            .args(&command.args)
            .current_dir(command.cwd.as_std_path())
            .status()?;

        match status.code() {
            _ if status.success() => Ok(()),
            Some(code) => Err(CommandFailure::Exit(code)),
            None => Err(CommandFailure::Terminated),
        }
    }
}

/// Returns the required tools (`git`, `packwiz`) that cannot be found on `PATH`.
pub fn missing_tools() -> Vec<&'static str> {
    [GIT, PACKWIZ]
        .into_iter()
        .filter(|tool| which::which(tool).is_err())
        .collect()
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;

    /// Records every command and fails the ones whose program is listed in `failing`.
    #[derive(Debug, Default)]
    pub struct RecordingRunner {
        pub calls: Vec<ToolCommand>,
        pub failing: Vec<&'static str>,
    }

    impl RecordingRunner {
        pub fn failing(programs: &[&'static str]) -> Self {
            Self {
                calls: Vec::new(),
                failing: programs.to_vec(),
            }
        }
    }

    impl CommandRunner for RecordingRunner {
        fn run(&mut self, command: &ToolCommand) -> Result<(), CommandFailure> {
            self.calls.push(command.clone());
            if self.failing.contains(&command.program.as_str()) {
                Err(CommandFailure::Exit(1))
            } else {
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let cmd = ToolCommand::new(PACKWIZ, &["refresh", "--build"], Utf8Path::new("/tmp"));
        assert_eq!(cmd.to_string(), "packwiz refresh --build");
    }

    #[test]
    fn test_failure_messages() {
        assert_eq!(CommandFailure::Exit(2).to_string(), "exited with status 2");
        assert_eq!(
            CommandFailure::Terminated.to_string(),
            "terminated by signal"
        );
    }

    #[test]
    fn test_spawn_failure_for_unknown_program() {
        let dir = tempfile::tempdir().unwrap();
        let cwd = Utf8Path::from_path(dir.path()).unwrap();
        let cmd = ToolCommand::new("pfw-definitely-not-a-real-tool", &[], cwd);

        let result = SystemRunner.run(&cmd);
        assert!(matches!(result, Err(CommandFailure::Spawn(_))));
    }
}
