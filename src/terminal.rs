//! Terminal rendering of game snapshots

use itertools::Itertools;

use crate::tictactoe::{GameStatus, MoveError, Snapshot};

/// Hint shown once the game is over
pub const REPLAY_HINT: &str = "Type \"r\" to play again or \"q\" to quit.";

/// Text describing the status, as shown below the board
pub fn status_line(snapshot: &Snapshot) -> String {
    match snapshot.status {
        GameStatus::Playing => format!("{} to play", snapshot.turn),
        GameStatus::XWin => "X wins!".to_string(),
        GameStatus::OWin => "O wins!".to_string(),
        GameStatus::Draw => "Draw!".to_string(),
    }
}

/// Renders the board, the status and the replay hint when the game is over.
///
/// Empty cells show their index, cells of the winning line are bracketed:
/// ```text
/// [X][X][X]
///  O  O  5
///  6  7  8
/// ```
pub fn render(snapshot: &Snapshot) -> String {
    let is_win_cell = |index: usize| {
        snapshot
            .win_line
            .is_some_and(|line| line.contains(&index))
    };

    let mut out = snapshot
        .board
        .cells()
        .chunks(3)
        .enumerate()
        .map(|(row, cells)| {
            cells.iter().enumerate().map(|(col, cell)| {
                let index = row * 3 + col;
                let symbol = match cell {
                    Some(player) => player.to_string(),
                    None => index.to_string(),
                };
                if is_win_cell(index) {
                    format!("[{symbol}]")
                } else {
                    format!(" {symbol} ")
                }
            })
            .join("")
        })
        .join("\n");

    out.push('\n');
    out.push_str(&status_line(snapshot));
    if snapshot.status.is_terminal() {
        out.push('\n');
        out.push_str(REPLAY_HINT);
    }
    out
}

/// One line explaining why a move was refused
pub fn render_rejection(index: usize, error: &MoveError) -> String {
    match error {
        MoveError::OutOfBounds(_) => format!("No cell {index}, pick one of 0-8."),
        MoveError::OccupiedCell(_) => format!("Cell {index} is already taken."),
        MoveError::GameFinished => format!("The game is over. {REPLAY_HINT}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tictactoe::Game;

    #[test]
    fn initial_board() {
        assert_eq!(
            render(&Game::new().snapshot()),
            " 0  1  2 \n 3  4  5 \n 6  7  8 \nX to play"
        );
    }

    #[test]
    fn win_line_is_highlighted() {
        let mut game = Game::new();
        for index in [0, 3, 1, 4, 2] {
            game.play_move(index).unwrap();
        }
        assert_eq!(
            render(&game.snapshot()),
            format!("[X][X][X]\n O  O  5 \n 6  7  8 \nX wins!\n{REPLAY_HINT}")
        );
    }

    #[test]
    fn rejection_messages() {
        assert_eq!(
            render_rejection(9, &MoveError::OutOfBounds(9)),
            "No cell 9, pick one of 0-8."
        );
        assert_eq!(
            render_rejection(4, &MoveError::OccupiedCell(4)),
            "Cell 4 is already taken."
        );
    }
}
