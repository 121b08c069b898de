//! Tic-Tac-Toe game engine
//!

/// Game state engine
pub mod tictactoe;

/// Commands and replies exchanged with front ends
pub mod protocol;

/// Terminal front end
pub mod terminal;

/// Line based game session
pub mod session;
