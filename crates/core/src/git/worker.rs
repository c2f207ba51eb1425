// Typed execution of the external `git` binary.
//
// Every invocation runs through the `CommandExecutor` seam and comes back as
// a `CommandResult` carrying the exit status and captured stdout/stderr.
// Callers pattern-match on results; a non-zero exit surfaces as
// `GitError::CommandFailed` with the failing command line and stderr text.

use std::path::{Path, PathBuf};
use std::process::Command;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GitError {
    #[error("{} is not a git work tree", path.display())]
    NotAWorkTree { path: PathBuf },

    #[error("failed to run `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("`{command}` failed with code {code:?}: {}", stderr.trim())]
    CommandFailed { command: String, code: Option<i32>, stderr: String },
}

/// Exit status and captured output of one child process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    pub success: bool,
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

/// Seam for running child processes. Production uses `ProcessCommandExecutor`;
/// unit tests inject a scripted mock.
pub trait CommandExecutor: Send + Sync {
    fn execute(
        &self,
        program: &str,
        args: &[String],
        cwd: &Path,
    ) -> Result<CommandResult, std::io::Error>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessCommandExecutor;

impl CommandExecutor for ProcessCommandExecutor {
    fn execute(
        &self,
        program: &str,
        args: &[String],
        cwd: &Path,
    ) -> Result<CommandResult, std::io::Error> {
        let output = Command::new(program).args(args).current_dir(cwd).output()?;
        Ok(CommandResult {
            success: output.status.success(),
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

/// Git operations against a single repository path.
#[derive(Debug, Clone)]
pub struct GitWorker<E = ProcessCommandExecutor> {
    repo_path: PathBuf,
    pub(crate) executor: E,
}

impl GitWorker<ProcessCommandExecutor> {
    pub fn new(repo_path: impl Into<PathBuf>) -> Self {
        Self { repo_path: repo_path.into(), executor: ProcessCommandExecutor }
    }
}

impl<E: CommandExecutor> GitWorker<E> {
    pub fn with_executor(repo_path: impl Into<PathBuf>, executor: E) -> Self {
        Self { repo_path: repo_path.into(), executor }
    }

    pub fn repo_path(&self) -> &Path {
        &self.repo_path
    }

    /// Precondition check: the target directory must be a git work tree.
    ///
    /// Wraps `git rev-parse --git-dir`; a clean non-zero exit is reported as
    /// `NotAWorkTree` so callers can distinguish "wrong directory" from a
    /// broken git installation.
    pub fn ensure_work_tree(&self) -> Result<(), GitError> {
        match self.run(&["rev-parse", "--git-dir"]) {
            Ok(_) => Ok(()),
            Err(GitError::CommandFailed { .. }) => {
                Err(GitError::NotAWorkTree { path: self.repo_path.clone() })
            }
            Err(other) => Err(other),
        }
    }

    /// Committer date of the most recent commit as `YYYY-MM-DD`.
    ///
    /// Returns `None` for an empty history or a failed query; the caller
    /// treats both as "no commit recorded yet".
    pub fn last_commit_date(&self) -> Option<String> {
        self.run(&["log", "-1", "--format=%cd", "--date=short"])
            .ok()
            .map(|result| result.stdout.trim().to_string())
            .filter(|date| !date.is_empty())
    }

    /// Stage every working-tree change (`git add .`).
    pub fn add_all(&self) -> Result<CommandResult, GitError> {
        self.run(&["add", "."])
    }

    pub fn commit(&self, message: &str) -> Result<CommandResult, GitError> {
        self.run(&["commit", "-m", message])
    }

    pub fn push(&self) -> Result<CommandResult, GitError> {
        self.run(&["push"])
    }

    /// A `git config` value, or `None` when the key is unset.
    pub fn config_value(&self, key: &str) -> Option<String> {
        self.run(&["config", key])
            .ok()
            .map(|result| result.stdout.trim().to_string())
            .filter(|value| !value.is_empty())
    }

    /// Names of the configured remotes; empty when there are none.
    pub fn remote_names(&self) -> Vec<String> {
        self.run(&["remote"])
            .map(|result| result.stdout.lines().map(str::to_string).collect())
            .unwrap_or_default()
    }

    /// The installed git version string (e.g. `git version 2.43.0`).
    pub fn version(&self) -> Result<String, GitError> {
        self.run(&["--version"]).map(|result| result.stdout.trim().to_string())
    }

    fn run(&self, args: &[&str]) -> Result<CommandResult, GitError> {
        let args: Vec<String> = args.iter().map(|arg| arg.to_string()).collect();
        let command = format!("git {}", args.join(" "));

        let result = self.executor.execute("git", &args, &self.repo_path).map_err(|source| {
            GitError::Spawn { command: command.clone(), source }
        })?;

        if result.success {
            return Ok(result);
        }

        // Some git commands write their diagnostics to stdout.
        let stderr =
            if result.stderr.trim().is_empty() { result.stdout } else { result.stderr };

        Err(GitError::CommandFailed { command, code: result.code, stderr })
    }
}
