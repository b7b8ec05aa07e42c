use anyhow::Result;
use clap::Parser;

mod cli;
mod collect_cmd;
mod inspect_cmd;

use cli::{Cli, Command};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Collect(args) => collect_cmd::run_collect(args),
        Command::Inspect(args) => inspect_cmd::run_inspect(args),
    }
}
