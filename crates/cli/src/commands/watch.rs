// `cadence watch` — poll the schedule once per minute until interrupted.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use chrono::Local;
use clap::Args;
use tokio::time::MissedTickBehavior;
use tracing::{error, info};

use cadence_core::config::BotConfig;
use cadence_core::context::GeneratorContext;
use cadence_core::driver;
use cadence_core::git::GitWorker;
use cadence_core::schedule::ScheduleQueue;

use crate::logging;

const POLL_INTERVAL: Duration = Duration::from_secs(60);

#[derive(Debug, Args)]
pub struct WatchArgs {
    /// Repository to operate on.
    #[arg(long, default_value = ".")]
    pub repo: PathBuf,

    /// Config file path (defaults to `<repo>/.cadence.toml`).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

pub fn run(args: WatchArgs) -> anyhow::Result<()> {
    let config = super::load_config(&args.repo, args.config.as_deref())?;
    logging::init(config.log_file.as_deref())?;

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("tokio runtime should build")?;
    runtime.block_on(watch_loop(args.repo, config))
}

async fn watch_loop(repo: PathBuf, config: BotConfig) -> anyhow::Result<()> {
    let mut queue = ScheduleQueue::new(config.triggers(), Local::now().naive_local());
    info!(triggers = queue.len(), "schedule registered");

    let git = GitWorker::new(&repo);
    let mut ctx = super::run::generator_context(config.seed);

    // One unconditional run at startup validates the setup before the first
    // scheduled firing.
    info!("running initial attempt");
    attempt(&git, &mut ctx, config.push);

    let mut poll = tokio::time::interval(POLL_INTERVAL);
    poll.set_missed_tick_behavior(MissedTickBehavior::Skip);
    poll.tick().await; // the first tick completes immediately

    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                info!("interrupt received; stopping scheduler");
                return Ok(());
            }
            _ = poll.tick() => {
                let now = Local::now().naive_local();
                for trigger in queue.due_at(now) {
                    info!(at = %trigger.at, "schedule trigger fired");
                    attempt(&git, &mut ctx, config.push);
                }
            }
        }
    }
}

/// One contained run: failures are logged, never propagated, so the loop
/// always reaches its next poll.
fn attempt(git: &GitWorker, ctx: &mut GeneratorContext, push: bool) {
    match driver::run_once(git, ctx, push) {
        Ok(outcome) => super::run::report(&outcome),
        Err(err) => error!(%err, "run failed"),
    }
}
