// `cadence doctor` — environment diagnostics.
//
// Checks everything a scheduled run depends on: a git binary, a work tree,
// a commit identity, and a push destination.

use std::io::IsTerminal;
use std::path::PathBuf;

use clap::Args;

use cadence_core::config::BotConfig;
use cadence_core::git::{CommandExecutor, GitWorker};

const ANSI_GREEN: &str = "\x1b[32m";
const ANSI_YELLOW: &str = "\x1b[33m";
const ANSI_RED: &str = "\x1b[31m";
const ANSI_RESET: &str = "\x1b[0m";

#[derive(Debug, Args)]
pub struct DoctorArgs {
    /// Repository to operate on.
    #[arg(long, default_value = ".")]
    pub repo: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CheckStatus {
    Pass,
    Warning,
    Fail,
}

#[derive(Debug, Clone)]
struct DoctorCheck {
    name: &'static str,
    status: CheckStatus,
    detail: String,
    hint: Option<String>,
}

impl DoctorCheck {
    fn pass(name: &'static str, detail: impl Into<String>) -> Self {
        Self { name, status: CheckStatus::Pass, detail: detail.into(), hint: None }
    }

    fn warning(name: &'static str, detail: impl Into<String>, hint: impl Into<String>) -> Self {
        Self { name, status: CheckStatus::Warning, detail: detail.into(), hint: Some(hint.into()) }
    }

    fn fail(name: &'static str, detail: impl Into<String>, hint: impl Into<String>) -> Self {
        Self { name, status: CheckStatus::Fail, detail: detail.into(), hint: Some(hint.into()) }
    }
}

pub fn run(args: DoctorArgs) -> anyhow::Result<()> {
    let git = GitWorker::new(&args.repo);
    let config = BotConfig::load(&args.repo);
    let checks = run_checks(&git, &config, args.repo.join(BotConfig::FILE_NAME).exists());

    let is_tty = std::io::stdout().is_terminal();
    for check in &checks {
        println!("{}", render_check(check, is_tty));
    }

    if checks.iter().any(|check| check.status == CheckStatus::Fail) {
        anyhow::bail!("environment check failed");
    }
    Ok(())
}

fn run_checks<E: CommandExecutor>(
    git: &GitWorker<E>,
    config: &BotConfig,
    config_file_present: bool,
) -> Vec<DoctorCheck> {
    let mut checks = Vec::new();

    match git.version() {
        Ok(version) => checks.push(DoctorCheck::pass("git binary", version)),
        Err(error) => {
            checks.push(DoctorCheck::fail(
                "git binary",
                error.to_string(),
                "install git and make sure it is on PATH",
            ));
            // Nothing else is checkable without git.
            return checks;
        }
    }

    match git.ensure_work_tree() {
        Ok(()) => checks.push(DoctorCheck::pass(
            "work tree",
            git.repo_path().display().to_string(),
        )),
        Err(error) => {
            checks.push(DoctorCheck::fail(
                "work tree",
                error.to_string(),
                "run cadence from a git repository or pass --repo",
            ));
            return checks;
        }
    }

    match (git.config_value("user.name"), git.config_value("user.email")) {
        (Some(name), Some(email)) => {
            checks.push(DoctorCheck::pass("commit identity", format!("{name} <{email}>")));
        }
        _ => checks.push(DoctorCheck::warning(
            "commit identity",
            "user.name or user.email is not set",
            "git config --global user.name / user.email",
        )),
    }

    let remotes = git.remote_names();
    if remotes.iter().any(|name| *name == config.remote) {
        checks.push(DoctorCheck::pass("remote", config.remote.clone()));
    } else if config.push {
        checks.push(DoctorCheck::warning(
            "remote",
            format!("remote `{}` is not configured", config.remote),
            "pushes will fail until a remote is added (or set push = false)",
        ));
    } else {
        checks.push(DoctorCheck::pass("remote", "push disabled"));
    }

    if config_file_present {
        checks.push(DoctorCheck::pass("config", BotConfig::FILE_NAME));
    } else {
        checks.push(DoctorCheck::pass("config", "using built-in defaults"));
    }

    checks
}

fn render_check(check: &DoctorCheck, is_tty: bool) -> String {
    let (label, color) = match check.status {
        CheckStatus::Pass => ("ok", ANSI_GREEN),
        CheckStatus::Warning => ("warn", ANSI_YELLOW),
        CheckStatus::Fail => ("fail", ANSI_RED),
    };

    let status = if is_tty {
        format!("{color}{label:>4}{ANSI_RESET}")
    } else {
        format!("{label:>4}")
    };

    match &check.hint {
        Some(hint) => format!("{status}  {}: {} ({hint})", check.name, check.detail),
        None => format!("{status}  {}: {}", check.name, check.detail),
    }
}
