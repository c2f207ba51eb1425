// `cadence run` — attempt one synthetic commit now.

use std::path::PathBuf;

use clap::Args;
use tracing::info;

use cadence_core::context::GeneratorContext;
use cadence_core::driver::{self, RunOutcome};
use cadence_core::git::GitWorker;

use crate::logging;

#[derive(Debug, Args)]
pub struct RunArgs {
    /// Repository to operate on.
    #[arg(long, default_value = ".")]
    pub repo: PathBuf,

    /// Config file path (defaults to `<repo>/.cadence.toml`).
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Skip the push step even when the config enables it.
    #[arg(long)]
    pub no_push: bool,

    /// Seed the generators for a reproducible run.
    #[arg(long)]
    pub seed: Option<u64>,
}

pub fn run(args: RunArgs) -> anyhow::Result<()> {
    let config = super::load_config(&args.repo, args.config.as_deref())?;
    logging::init(config.log_file.as_deref())?;

    let git = GitWorker::new(&args.repo);
    let mut ctx = generator_context(args.seed.or(config.seed));
    let push = config.push && !args.no_push;

    let outcome = driver::run_once(&git, &mut ctx, push)?;
    report(&outcome);
    Ok(())
}

pub(crate) fn generator_context(seed: Option<u64>) -> GeneratorContext {
    match seed {
        Some(seed) => GeneratorContext::seeded(seed),
        None => GeneratorContext::from_entropy(),
    }
}

pub(crate) fn report(outcome: &RunOutcome) {
    match outcome {
        RunOutcome::Committed { message } => info!(%message, "committed"),
        RunOutcome::AlreadyCommittedToday => info!("skipped: already committed today"),
        RunOutcome::NothingToDo => info!("skipped: nothing to commit"),
    }
}
