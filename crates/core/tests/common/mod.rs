//! TestRepo helper for integration tests.
//!
//! Provides a temporary git repository (and optionally a bare remote) for
//! exercising the bot end to end. Both are cleaned up on drop.

use std::path::PathBuf;
use std::process::Command;

use tempfile::TempDir;

pub struct TestRepo {
    dir: TempDir,
}

impl TestRepo {
    /// Create a new git repository in a temporary directory with a local
    /// commit identity configured.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp directory");
        let repo = Self { dir };
        repo.git(&["init", "-q"]);
        repo.git(&["config", "user.name", "Cadence Test"]);
        repo.git(&["config", "user.email", "cadence@example.com"]);
        repo
    }

    /// Create a new repository with `origin` pointing at a bare remote.
    ///
    /// `push.default current` lets a plain `git push` work without an
    /// upstream being set first.
    pub fn with_remote(remote: &BareRemote) -> Self {
        let repo = Self::new();
        repo.git(&["remote", "add", "origin", &remote.url()]);
        repo.git(&["config", "push.default", "current"]);
        repo
    }

    pub fn path(&self) -> PathBuf {
        self.dir.path().to_path_buf()
    }

    /// Execute a git command in this repository.
    ///
    /// # Panics
    ///
    /// Panics if the command fails to execute or exits non-zero.
    pub fn git(&self, args: &[&str]) -> String {
        let output = Command::new("git")
            .args(args)
            .current_dir(self.dir.path())
            .output()
            .expect("failed to execute git");

        if !output.status.success() {
            panic!(
                "git {:?} failed with code {:?}:\n{}",
                args,
                output.status.code(),
                String::from_utf8_lossy(&output.stderr)
            );
        }

        String::from_utf8_lossy(&output.stdout).into_owned()
    }

    /// Write a file in the repository, creating parent directories.
    pub fn write_file(&self, name: &str, content: &str) {
        let path = self.path().join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("failed to create parent directories");
        }
        std::fs::write(&path, content).expect("failed to write file");
    }

    /// Read a file from the repository; empty string if it does not exist.
    pub fn read_file(&self, name: &str) -> String {
        std::fs::read_to_string(self.path().join(name)).unwrap_or_default()
    }

    /// Number of commits on HEAD; 0 for an empty history.
    pub fn commit_count(&self) -> usize {
        let output = Command::new("git")
            .args(["rev-list", "--count", "HEAD"])
            .current_dir(self.dir.path())
            .output()
            .expect("failed to execute git rev-list");

        if !output.status.success() {
            return 0;
        }
        String::from_utf8_lossy(&output.stdout).trim().parse().unwrap_or(0)
    }

    /// Subject line of the most recent commit.
    pub fn last_message(&self) -> String {
        self.git(&["log", "-1", "--format=%s"]).trim().to_string()
    }
}

impl Default for TestRepo {
    fn default() -> Self {
        Self::new()
    }
}

/// A bare git repository standing in for a remote server.
pub struct BareRemote {
    dir: TempDir,
}

impl BareRemote {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp directory");
        let output = Command::new("git")
            .args(["init", "-q", "--bare"])
            .current_dir(dir.path())
            .output()
            .expect("failed to execute git init --bare");
        assert!(
            output.status.success(),
            "git init --bare failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        Self { dir }
    }

    pub fn url(&self) -> String {
        self.dir.path().to_string_lossy().into_owned()
    }

    /// Number of commits reachable in the remote.
    pub fn commit_count(&self) -> usize {
        let output = Command::new("git")
            .args(["rev-list", "--count", "--all"])
            .current_dir(self.dir.path())
            .output()
            .expect("failed to execute git rev-list");

        if !output.status.success() {
            return 0;
        }
        String::from_utf8_lossy(&output.stdout).trim().parse().unwrap_or(0)
    }
}

impl Default for BareRemote {
    fn default() -> Self {
        Self::new()
    }
}
