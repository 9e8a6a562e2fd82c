//! memo - colored sticky notes held in memory for one session

pub mod cli;
pub mod domain;
pub mod store;

use anyhow::Result;
use clap::Parser;
use std::io::{self, IsTerminal};

use cli::{
    Cli, Command,
    config::Config,
    handlers::handle_completions,
    logging,
    session::{Session, SessionSettings},
};

/// Main entry point for the CLI application.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;
    logging::init(cli.verbose, config.log.as_deref())?;

    match &cli.command {
        Some(Command::Completions(args)) => handle_completions(args),
        None => {
            let stdin = io::stdin();
            let settings = SessionSettings::resolve(&cli, &config, stdin.is_terminal());
            let mut session = Session::new(stdin.lock(), io::stdout().lock(), settings);
            session.run()
        }
    }
}
