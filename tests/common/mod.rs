#![allow(dead_code)]

use tictactoe_engine::tictactoe::{Game, Snapshot};

/// Game after playing all `moves`, panics on a rejected move
pub fn game_after(moves: &[usize]) -> Game {
    let mut game = Game::new();
    for &index in moves {
        game.play_move(index)
            .unwrap_or_else(|e| panic!("Move {index} rejected: {e}"));
    }
    game
}

pub fn initial_snapshot() -> Snapshot {
    Game::new().snapshot()
}
