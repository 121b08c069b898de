//! Tic-Tac-Toe
//! Game state engine: turn order, move validation and board evaluation

use std::fmt::Display;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Board representation and evaluation
pub mod board;

pub use board::{Board, CELL_COUNT, Cell, LINES, Line, Outcome, evaluate};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    #[serde(rename = "o")]
    Nought,
    #[serde(rename = "x")]
    Cross,
}

impl Player {
    pub fn opposite(&self) -> Self {
        match self {
            Player::Nought => Player::Cross,
            Player::Cross => Player::Nought,
        }
    }
}

impl Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::Nought => write!(f, "O"),
            Player::Cross => write!(f, "X"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameStatus {
    Playing,
    XWin,
    OWin,
    Draw,
}

impl GameStatus {
    /// Status of a game won by `player`
    pub fn won_by(player: Player) -> Self {
        match player {
            Player::Cross => GameStatus::XWin,
            Player::Nought => GameStatus::OWin,
        }
    }

    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameStatus::Playing)
    }

    pub fn winner(&self) -> Option<Player> {
        match self {
            GameStatus::XWin => Some(Player::Cross),
            GameStatus::OWin => Some(Player::Nought),
            _ => None,
        }
    }
}

/// Reasons for a move to be rejected.
/// A rejected move leaves the game untouched.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoveError {
    #[error("Cell {0} is outside of the board")]
    OutOfBounds(usize),
    #[error("Cell {0} is already occupied")]
    OccupiedCell(usize),
    #[error("Game is already finished")]
    GameFinished,
}

/// Observable state of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub board: Board,
    pub turn: Player,
    pub status: GameStatus,
    /// Only present when the game has been won
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub win_line: Option<Line>,
}

#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    turn: Player,
    status: GameStatus,
    win_line: Option<Line>,
}

impl Game {
    pub fn new() -> Self {
        Self {
            // Empty board
            board: Board::new(),
            // Cross starts
            turn: Player::Cross,
            status: GameStatus::Playing,
            win_line: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Player allowed to make the next move.
    /// Once the game is won this stays on the winner.
    pub fn turn(&self) -> Player {
        self.turn
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn win_line(&self) -> Option<Line> {
        self.win_line
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            board: self.board,
            turn: self.turn,
            status: self.status,
            win_line: self.win_line,
        }
    }

    /// Indices of the cells that can be played, none once the game is over
    pub fn available_moves(&self) -> Vec<usize> {
        if self.status.is_terminal() {
            return Vec::new();
        }
        self.board.empty_cells().collect()
    }

    /// Marks the cell at `index` for the current player and updates the game status.
    pub fn play_move(&mut self, index: usize) -> Result<Snapshot, MoveError> {
        if self.status.is_terminal() {
            log::warn!("Rejected move on cell {index}: game is finished ({:?})", self.status);
            return Err(MoveError::GameFinished);
        }
        // Check bounds
        let cell = self.board.get(index).ok_or_else(|| {
            log::warn!("Rejected move on cell {index}: outside of the board");
            MoveError::OutOfBounds(index)
        })?;
        // Check occupancy
        if cell.is_some() {
            log::warn!("Rejected move on cell {index}: already occupied");
            return Err(MoveError::OccupiedCell(index));
        }

        // Make the move
        self.board.mark(index, self.turn);
        log::debug!("Player {} marked cell {index}", self.turn);

        // Update game status
        let outcome = evaluate(&self.board);
        self.status = outcome.status();
        self.win_line = outcome.win_line();
        match outcome {
            Outcome::Playing => self.turn = self.turn.opposite(),
            Outcome::Victory { player, line } => {
                log::info!("Player {player} wins with line {line:?}")
            }
            Outcome::Draw => log::info!("Game ended in a draw"),
        }

        Ok(self.snapshot())
    }

    /// Restores the initial state, whatever the current one is
    pub fn reset(&mut self) -> Snapshot {
        log::info!("Resetting game");
        *self = Self::new();
        self.snapshot()
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
