use std::io;

use anyhow::Result;
use clap::Parser;

use tictactoe_engine::{
    session::{Mode, Session},
    terminal,
};

/// Command line arguments
#[derive(Debug, Parser)]
#[command(name = "tictactoe", version, about)]
struct Args {
    /// Input/output format
    #[arg(short, long, value_enum, default_value_t = Mode::Text)]
    mode: Mode,
}

fn main() -> Result<()> {
    // Initialize logger
    env_logger::init();

    // Parse command line arguments
    let args = Args::parse();
    log::debug!("Command line arguments: {args:?}");

    let mut session = Session::new(args.mode);
    session.run(io::stdin().lock(), io::stdout().lock())?;

    log::debug!(
        "Final game state:\n{}",
        terminal::render(&session.game().snapshot())
    );
    Ok(())
}
