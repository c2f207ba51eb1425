// cadence CLI entry point.

use clap::Parser;

mod commands;
mod logging;

#[derive(Parser)]
#[command(name = "cadence", about = "Scheduled synthetic-commit bot for git repositories")]
struct Cli {
    #[command(subcommand)]
    command: commands::Command,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    commands::run(cli.command)
}
