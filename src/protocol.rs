use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::tictactoe::{MoveError, Snapshot};

/// Front end -> Game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "type")]
pub enum Command {
    /// Mark a cell for the player whose turn it is
    PlayMove { index: usize },
    /// Start a new game
    Reset,
    /// End the session
    Quit,
}

/// Game -> Front end
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "type")]
pub enum Reply {
    /// State after an accepted command
    Snapshot { snapshot: Snapshot },
    /// Move refused by the game, state unchanged
    Rejected { index: usize, error: MoveError },
    /// Input that could not be understood
    Invalid { reason: String },
}

#[derive(Debug, Error)]
pub enum ProtocolError {
    #[error("Unknown command {0:?}")]
    UnknownCommand(String),
    #[error("Failed to decode command: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Command is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::str::Utf8Error),
}

impl Command {
    /// Parses a command typed on the terminal.
    ///
    /// Cell indices are plain ASCII digits, no sign allowed.
    pub fn from_text(line: &str) -> Result<Self, ProtocolError> {
        let input = line.trim().to_lowercase();
        // Range is checked by the game itself
        if !input.is_empty() && input.bytes().all(|b| b.is_ascii_digit()) {
            if let Ok(index) = input.parse::<usize>() {
                return Ok(Command::PlayMove { index });
            }
        }
        match input.as_str() {
            "r" | "reset" | "replay" => Ok(Command::Reset),
            "q" | "quit" | "exit" => Ok(Command::Quit),
            _ => Err(ProtocolError::UnknownCommand(line.trim().to_string())),
        }
    }

    pub fn from_json(line: &str) -> Result<Self, ProtocolError> {
        Ok(serde_json::from_str(line)?)
    }
}

impl Reply {
    pub fn to_json(&self) -> Result<String, ProtocolError> {
        Ok(serde_json::to_string(self)?)
    }
}
