//! Square grid storage and index arithmetic.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::{Square, Symbol};

/// An N×N board stored in row-major order.
///
/// Cell `(row, col)` lives at index `row * grid_size + col`. Indexing past the
/// end of the board is a caller bug and panics.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    grid_size: usize,
    squares: Vec<Square>,
}

impl Board {
    /// Creates an empty board with `grid_size` rows and columns.
    ///
    /// # Panics
    ///
    /// Panics if `grid_size < 2`; smaller grids have no valid step directions.
    pub fn new(grid_size: usize) -> Self {
        assert!(grid_size >= 2, "grid size must be at least 2, got {grid_size}");
        Self {
            grid_size,
            squares: vec![Square::Empty; grid_size * grid_size],
        }
    }

    /// Side length of the grid.
    pub fn grid_size(&self) -> usize {
        self.grid_size
    }

    /// Number of cells (`grid_size²`).
    pub fn len(&self) -> usize {
        self.squares.len()
    }

    /// Always false; boards have at least four cells.
    pub fn is_empty(&self) -> bool {
        self.squares.is_empty()
    }

    /// Flat index of `(row, col)`.
    pub fn index(&self, row: usize, col: usize) -> usize {
        debug_assert!(row < self.grid_size && col < self.grid_size);
        row * self.grid_size + col
    }

    /// Row of a flat index.
    pub fn row_of(&self, index: usize) -> usize {
        index / self.grid_size
    }

    /// Column of a flat index.
    pub fn col_of(&self, index: usize) -> usize {
        index % self.grid_size
    }

    /// Gets the square at `index`.
    pub fn get(&self, index: usize) -> Square {
        self.squares[index]
    }

    /// Places `symbol` at `index`. The cell is expected to be empty.
    pub fn set(&mut self, index: usize, symbol: Symbol) {
        self.squares[index] = Square::Occupied(symbol);
    }

    /// Empties the cell at `index`.
    pub fn clear(&mut self, index: usize) {
        self.squares[index] = Square::Empty;
    }

    /// Checks if the square at `index` is empty.
    pub fn is_vacant(&self, index: usize) -> bool {
        self.squares[index] == Square::Empty
    }

    /// True iff no empty square remains.
    pub fn is_full(&self) -> bool {
        self.squares.iter().all(|s| *s != Square::Empty)
    }

    /// Indices of all empty squares, ascending.
    pub fn empty_indices(&self) -> Vec<usize> {
        self.squares
            .iter()
            .enumerate()
            .filter(|(_, s)| **s == Square::Empty)
            .map(|(idx, _)| idx)
            .collect()
    }

    /// Number of squares holding `symbol`.
    pub fn count(&self, symbol: Symbol) -> usize {
        self.squares
            .iter()
            .filter(|s| **s == Square::Occupied(symbol))
            .count()
    }

    /// All squares in row-major order.
    pub fn squares(&self) -> &[Square] {
        &self.squares
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.squares.chunks(self.grid_size) {
            let line = row
                .iter()
                .map(|square| match square {
                    Square::Empty => ".".to_string(),
                    Square::Occupied(symbol) => symbol.to_string(),
                })
                .collect::<Vec<_>>()
                .join(" ");
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
