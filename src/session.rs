use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use clap::ValueEnum;

use crate::{
    protocol::{Command, ProtocolError, Reply},
    terminal,
    tictactoe::Game,
};

const MSG_BUF_SIZE: usize = 1024;

/// How commands are read and replies written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Mode {
    /// Human readable board, cell indices typed on the terminal
    #[default]
    Text,
    /// One JSON command per input line, one JSON reply per output line
    Json,
}

/// Front end driving a single game, one command at a time
#[derive(Debug)]
pub struct Session {
    game: Game,
    mode: Mode,
}

impl Session {
    pub fn new(mode: Mode) -> Self {
        Self {
            game: Game::new(),
            mode,
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Forwards a command to the game.
    /// Returns `None` when the session should end.
    pub fn handle(&mut self, command: Command) -> Option<Reply> {
        match command {
            Command::PlayMove { index } => Some(match self.game.play_move(index) {
                Ok(snapshot) => Reply::Snapshot { snapshot },
                Err(error) => Reply::Rejected { index, error },
            }),
            Command::Reset => Some(Reply::Snapshot {
                snapshot: self.game.reset(),
            }),
            Command::Quit => None,
        }
    }

    fn parse(&self, bytes: &[u8]) -> Result<Command, ProtocolError> {
        let line = std::str::from_utf8(bytes)?;
        match self.mode {
            Mode::Text => Command::from_text(line),
            Mode::Json => Command::from_json(line),
        }
    }

    fn write_reply<W: Write>(&self, writer: &mut W, reply: &Reply) -> Result<()> {
        match self.mode {
            Mode::Json => writeln!(writer, "{}", reply.to_json()?),
            Mode::Text => match reply {
                Reply::Snapshot { snapshot } => writeln!(writer, "{}", terminal::render(snapshot)),
                Reply::Rejected { index, error } => {
                    writeln!(writer, "{}", terminal::render_rejection(*index, error))
                }
                Reply::Invalid { reason } => writeln!(writer, "{reason}"),
            },
        }
        .context("Failed to write reply")?;
        writer.flush().context("Failed to flush output")
    }

    /// Runs the session until a quit command or the end of the input.
    ///
    /// The current snapshot is written first so the front end can draw the
    /// board before any command is sent.
    pub fn run<R: BufRead, W: Write>(&mut self, mut reader: R, mut writer: W) -> Result<()> {
        log::info!("Starting session in {:?} mode", self.mode);
        self.write_reply(
            &mut writer,
            &Reply::Snapshot {
                snapshot: self.game.snapshot(),
            },
        )?;

        let mut buffer = Vec::with_capacity(MSG_BUF_SIZE);
        loop {
            buffer.clear();
            // Decoded per line: invalid UTF-8 is a protocol error, not an I/O error
            let n = reader
                .read_until(b'\n', &mut buffer)
                .context("Failed to read command")?;
            if n == 0 {
                break;
            }
            let line = buffer.trim_ascii();
            if line.is_empty() {
                continue;
            }

            let reply = match self.parse(line) {
                Ok(command) => {
                    log::debug!("Received command: {command:?}");
                    match self.handle(command) {
                        Some(reply) => reply,
                        None => {
                            log::info!("Quit requested");
                            return Ok(());
                        }
                    }
                }
                Err(e) => {
                    log::warn!("Invalid input {:?}: {e}", String::from_utf8_lossy(line));
                    Reply::Invalid {
                        reason: e.to_string(),
                    }
                }
            };
            self.write_reply(&mut writer, &reply)?;
        }

        log::info!("End of input, closing session");
        Ok(())
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Mode::default())
    }
}
