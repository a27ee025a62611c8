//! Win detection: four in a row in any of four directions, or a filled 2×2 square.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use strum::{EnumIter, IntoEnumIterator};
use tracing::instrument;

use crate::board::Board;
use crate::types::{Square, Symbol};

/// Cells in a winning run or square.
pub const RUN_LENGTH: usize = 4;

/// Step direction of a line scan, in scan order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
pub enum Direction {
    /// Along a row.
    Right,
    /// Down a column.
    Down,
    /// Down and to the right.
    DownRight,
    /// Down and to the left.
    DownLeft,
}

impl Direction {
    /// Flat-index delta of one step on a grid of side `grid_size`.
    pub fn delta(self, grid_size: usize) -> usize {
        match self {
            Direction::Right => 1,
            Direction::Down => grid_size,
            Direction::DownRight => grid_size + 1,
            Direction::DownLeft => grid_size - 1,
        }
    }
}

/// Which rule produced a win.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WinKind {
    /// Four consecutive cells in a direction.
    Line(Direction),
    /// A filled 2×2 block.
    Square,
}

/// The cells of the first winning pattern found for a symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Getters)]
pub struct WinningLine {
    /// Rule that matched.
    kind: WinKind,
    /// Matched cell indices, in walk order.
    cells: [usize; RUN_LENGTH],
}

impl WinningLine {
    /// True if `index` is part of the pattern.
    pub fn contains(&self, index: usize) -> bool {
        self.cells.contains(&index)
    }
}

/// Checks whether `symbol` has a line of four or a 2×2 square on `board`.
///
/// Agrees with [`locate_winning_cells`] by construction.
#[instrument(level = "trace", skip(board))]
pub fn has_won(board: &Board, symbol: Symbol) -> bool {
    locate_winning_cells(board, symbol).is_some()
}

/// Finds the first winning pattern for `symbol`, for highlighting.
///
/// Lines are scanned first, by ascending start cell and then in
/// [`Direction`] order; squares after that, by ascending top-left corner.
#[instrument(level = "trace", skip(board))]
pub fn locate_winning_cells(board: &Board, symbol: Symbol) -> Option<WinningLine> {
    find_line(board, symbol).or_else(|| find_square(board, symbol))
}

fn find_line(board: &Board, symbol: Symbol) -> Option<WinningLine> {
    let target = Square::Occupied(symbol);

    for start in 0..board.len() {
        if board.get(start) != target {
            continue;
        }

        for direction in Direction::iter() {
            let delta = direction.delta(board.grid_size());
            let mut cells = [start; RUN_LENGTH];
            let mut count = 1;
            let mut prev = start;
            let mut pos = start + delta;

            // A column jump of more than one means the walk wrapped onto another row.
            while pos < board.len()
                && board.get(pos) == target
                && board.col_of(pos).abs_diff(board.col_of(prev)) <= 1
            {
                cells[count] = pos;
                count += 1;
                if count == RUN_LENGTH {
                    return Some(WinningLine {
                        kind: WinKind::Line(direction),
                        cells,
                    });
                }
                prev = pos;
                pos += delta;
            }
        }
    }

    None
}

fn find_square(board: &Board, symbol: Symbol) -> Option<WinningLine> {
    let target = Square::Occupied(symbol);
    let size = board.grid_size();

    for row in 0..size - 1 {
        for col in 0..size - 1 {
            let corner = board.index(row, col);
            let cells = [corner, corner + 1, corner + size, corner + size + 1];
            if cells.iter().all(|&idx| board.get(idx) == target) {
                return Some(WinningLine {
                    kind: WinKind::Square,
                    cells,
                });
            }
        }
    }

    None
}
