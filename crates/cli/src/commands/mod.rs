// CLI subcommand dispatch.

use std::path::Path;

use anyhow::Context;
use clap::Subcommand;

use cadence_core::config::BotConfig;

pub mod doctor;
pub mod run;
pub mod watch;

#[derive(Subcommand)]
pub enum Command {
    /// Attempt one synthetic commit now, then exit
    Run(run::RunArgs),
    /// Run forever, committing on the configured schedule
    Watch(watch::WatchArgs),
    /// Check the environment the bot needs (git, identity, remote)
    Doctor(doctor::DoctorArgs),
}

pub fn run(cmd: Command) -> anyhow::Result<()> {
    match cmd {
        Command::Run(args) => run::run(args),
        Command::Watch(args) => watch::run(args),
        Command::Doctor(args) => doctor::run(args),
    }
}

/// Resolve the effective config: an explicit `--config` path must load, a
/// missing or broken default file silently falls back to defaults.
pub(crate) fn load_config(repo: &Path, explicit: Option<&Path>) -> anyhow::Result<BotConfig> {
    match explicit {
        Some(path) => BotConfig::load_from(path)
            .with_context(|| format!("failed to load config from {}", path.display())),
        None => Ok(BotConfig::load(repo)),
    }
}
