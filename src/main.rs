mod cli;
mod command;
mod config;
mod error;
mod fsops;
mod logger;
mod path;
mod prompt;
mod state;

use anyhow::Result;
use clap::Parser;
use std::io;

use crate::cli::Cli;
use crate::command::Context;
use crate::config::Config;
use crate::prompt::StdinConfirm;
use crate::state::StateStore;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::from_cli(&cli)?;

    if let Err(e) = logger::init(&config.log_file) {
        eprintln!("minish: logging disabled: {:#}", e);
    }

    let store = StateStore::new(&config.state_file);
    tracing::debug!(
        verb = cli.command.name(),
        state_file = %store.path().display(),
        "starting"
    );

    let mut stdout = io::stdout();
    let mut confirm = StdinConfirm;
    let mut ctx = Context::new(&store, &mut stdout, &mut confirm);

    command::dispatch(cli.command, &mut ctx)
}
