// Commit driver: one full bot run against a repository.
//
// Pipeline: work-tree precondition → daily idempotence guard → content
// generation → stage-all → message generation → commit → optional push.
// A push failure is logged but never rolls back the local commit; staged
// state from a failed step is left in place for manual inspection.

use chrono::{Local, NaiveDate};
use tracing::{debug, warn};

use crate::content;
use crate::context::GeneratorContext;
use crate::git::{CommandExecutor, GitError, GitWorker};
use crate::message;

/// What a single run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    Committed { message: String },
    AlreadyCommittedToday,
    NothingToDo,
}

/// Whether the most recent commit was recorded on `today`.
///
/// An empty history, a failed log query, or an unparseable date all answer
/// `false`: the guard biases toward action so a transient error cannot leave
/// the bot silently dormant.
pub fn already_committed_today<E: CommandExecutor>(git: &GitWorker<E>, today: NaiveDate) -> bool {
    let Some(raw) = git.last_commit_date() else {
        return false;
    };
    match NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d") {
        Ok(date) => date == today,
        Err(error) => {
            debug!(%raw, %error, "could not parse last commit date; proceeding");
            false
        }
    }
}

/// Run the bot once against `git`'s repository, using the local calendar
/// date for the idempotence check.
pub fn run_once<E: CommandExecutor>(
    git: &GitWorker<E>,
    ctx: &mut GeneratorContext,
    push: bool,
) -> Result<RunOutcome, GitError> {
    run_once_at(git, ctx, Local::now().date_naive(), push)
}

/// Like [`run_once`] but with an explicit `today`, so tests control the
/// calendar.
pub fn run_once_at<E: CommandExecutor>(
    git: &GitWorker<E>,
    ctx: &mut GeneratorContext,
    today: NaiveDate,
    push: bool,
) -> Result<RunOutcome, GitError> {
    git.ensure_work_tree()?;

    if already_committed_today(git, today) {
        return Ok(RunOutcome::AlreadyCommittedToday);
    }

    if !content::apply_changes(ctx, git.repo_path()) {
        return Ok(RunOutcome::NothingToDo);
    }

    git.add_all()?;
    let message = message::generate(ctx);
    git.commit(&message)?;
    debug!(%message, "recorded synthetic commit");

    if push {
        // The commit above is durable either way; a failed push is only
        // worth a warning.
        if let Err(error) = git.push() {
            warn!(%error, "push failed; local commit kept");
        }
    }

    Ok(RunOutcome::Committed { message })
}
