use serde::{Deserialize, Serialize};

use super::{GameStatus, Player};

/// Number of cells on the board
pub const CELL_COUNT: usize = 9;

/// Board cell
/// `None`: Empty cell
/// `Some(player)`: Cell marked by `player`
pub type Cell = Option<Player>;

/// Indices of three aligned cells
pub type Line = [usize; 3];

/// Winning lines, in scan order
#[rustfmt::skip]
pub const LINES: [Line; 8] = [
    // Rows
    [0, 1, 2], [3, 4, 5], [6, 7, 8],
    // Columns
    [0, 3, 6], [1, 4, 7], [2, 5, 8],
    // Diagonals
    [0, 4, 8], [2, 4, 6],
];

/// Tic-Tac-Toe board, cells stored in row-major order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board([Cell; CELL_COUNT]);

impl Board {
    /// New empty board
    pub const fn new() -> Self {
        Self([None; CELL_COUNT])
    }

    /// Cell at `index`, `None` if the index is outside of the board
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.0.get(index).copied()
    }

    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.0
    }

    pub fn is_full(&self) -> bool {
        self.0.iter().all(Option::is_some)
    }

    /// Iterate over the indices of the empty cells
    pub fn empty_cells(&self) -> impl Iterator<Item = usize> + '_ {
        self.0
            .iter()
            .enumerate()
            .filter_map(|(index, cell)| cell.is_none().then_some(index))
    }

    /// Marks the cell at `index`. Caller checks bounds and occupancy.
    pub(super) fn mark(&mut self, index: usize, player: Player) {
        self.0[index] = Some(player);
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl From<[Cell; CELL_COUNT]> for Board {
    fn from(cells: [Cell; CELL_COUNT]) -> Self {
        Self(cells)
    }
}

pub fn all_equal<T: Copy + PartialEq>(arr: &[T]) -> Option<T> {
    let mut it = arr.iter();
    let eq = it.next()?;
    if it.all(|x| x == eq) { Some(*eq) } else { None }
}

/// Result of a board evaluation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// No line completed and at least one empty cell
    Playing,
    /// `player` completed `line`
    Victory { player: Player, line: Line },
    /// Board full without any completed line
    Draw,
}

impl Outcome {
    pub fn status(&self) -> GameStatus {
        match self {
            Outcome::Playing => GameStatus::Playing,
            Outcome::Victory { player, .. } => GameStatus::won_by(*player),
            Outcome::Draw => GameStatus::Draw,
        }
    }

    pub fn win_line(&self) -> Option<Line> {
        match self {
            Outcome::Victory { line, .. } => Some(*line),
            _ => None,
        }
    }
}

/// Evaluates the board.
///
/// Lines are scanned in the order of [`LINES`] and the first complete one is
/// reported, so boards that could not arise from legal play still get a
/// deterministic answer. A draw is only declared once every cell is marked.
pub fn evaluate(board: &Board) -> Outcome {
    for line in LINES {
        if let Some(Some(player)) = all_equal(&line.map(|index| board.0[index])) {
            return Outcome::Victory { player, line };
        }
    }

    if board.is_full() {
        Outcome::Draw
    } else {
        Outcome::Playing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const X: Cell = Some(Player::Cross);
    const O: Cell = Some(Player::Nought);
    const E: Cell = None;

    #[test]
    fn empty_board_is_playing() {
        assert_eq!(evaluate(&Board::new()), Outcome::Playing);
    }

    #[test]
    fn every_line_is_detected() {
        for line in LINES {
            let mut cells = [E; CELL_COUNT];
            for index in line {
                cells[index] = O;
            }
            assert_eq!(
                evaluate(&Board::from(cells)),
                Outcome::Victory {
                    player: Player::Nought,
                    line
                }
            );
        }
    }

    #[test]
    fn mixed_line_is_not_a_win() {
        let board = Board::from([X, X, O, E, E, E, E, E, E]);
        assert_eq!(evaluate(&board), Outcome::Playing);
    }

    #[test]
    fn full_board_without_line_is_draw() {
        #[rustfmt::skip]
        let board = Board::from([
            X, O, X,
            O, O, X,
            X, X, O,
        ]);
        assert_eq!(evaluate(&board), Outcome::Draw);
        assert_eq!(evaluate(&board).win_line(), None);
    }

    #[test]
    fn win_on_full_board_beats_draw() {
        #[rustfmt::skip]
        let board = Board::from([
            X, O, X,
            O, X, O,
            O, X, X,
        ]);
        assert_eq!(
            evaluate(&board),
            Outcome::Victory {
                player: Player::Cross,
                line: [0, 4, 8]
            }
        );
    }

    #[test]
    fn first_line_in_scan_order_wins() {
        // Both players own a full row, which legal play cannot produce
        #[rustfmt::skip]
        let board = Board::from([
            E, E, E,
            O, O, O,
            X, X, X,
        ]);
        assert_eq!(
            evaluate(&board),
            Outcome::Victory {
                player: Player::Nought,
                line: [3, 4, 5]
            }
        );
    }

    #[test]
    fn outcome_maps_to_status() {
        let outcome = Outcome::Victory {
            player: Player::Cross,
            line: [2, 4, 6],
        };
        assert_eq!(outcome.status(), GameStatus::XWin);
        assert_eq!(outcome.win_line(), Some([2, 4, 6]));
        assert_eq!(Outcome::Draw.status(), GameStatus::Draw);
        assert_eq!(Outcome::Playing.status(), GameStatus::Playing);
    }

    #[test]
    fn empty_cells_are_listed_in_order() {
        let board = Board::from([X, E, O, E, X, E, E, O, E]);
        assert_eq!(board.empty_cells().collect::<Vec<_>>(), vec![1, 3, 5, 6, 8]);
        assert!(!board.is_full());
        assert_eq!(board.get(9), None);
        assert_eq!(board.get(0), Some(X));
    }
}
