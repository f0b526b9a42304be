//! Board storage and move application.

use crate::rules;
use crate::types::{Cell, PlayerId};
use serde::{Deserialize, Serialize};

/// Ways a move can be rejected.
///
/// Both cases are recoverable: the board is untouched and the same player
/// may try again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The target lies outside the grid.
    #[display("move is outside the board")]
    OutOfBounds,
    /// The target cell already holds a mark.
    #[display("position is already filled")]
    PositionFilled,
}

impl std::error::Error for MoveError {}

/// Ways a serialized board can fail to describe a real grid.
///
/// Raised only on deserialization; [`Board::new`] always builds a
/// well-formed grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum BoardShapeError {
    /// The declared size is zero.
    #[display("board size must be at least 1")]
    ZeroSize,
    /// The declared size squared does not fit a cell index.
    #[display("board size {_0} is too large to index")]
    Oversized(usize),
    /// The cell buffer length does not match the declared size.
    #[display("a size {size} board takes {expected} cells, found {found}")]
    CellCountMismatch {
        /// Declared side length.
        size: usize,
        /// Cell count a board of that size holds.
        expected: usize,
        /// Cell count the payload carried.
        found: usize,
    },
}

impl std::error::Error for BoardShapeError {}

/// Square grid of cells, stored row-major.
///
/// Deserialization is validated: a payload whose cell buffer does not hold
/// exactly `size * size` entries is rejected with a [`BoardShapeError`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawBoard")]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
}

/// Field-for-field mirror of [`Board`] that skips shape checks.
#[derive(Deserialize)]
struct RawBoard {
    size: usize,
    cells: Vec<Cell>,
}

impl TryFrom<RawBoard> for Board {
    type Error = BoardShapeError;

    fn try_from(raw: RawBoard) -> Result<Self, Self::Error> {
        if raw.size == 0 {
            return Err(BoardShapeError::ZeroSize);
        }
        let expected = raw
            .size
            .checked_mul(raw.size)
            .ok_or(BoardShapeError::Oversized(raw.size))?;
        if raw.cells.len() != expected {
            return Err(BoardShapeError::CellCountMismatch {
                size: raw.size,
                expected,
                found: raw.cells.len(),
            });
        }
        Ok(Self {
            size: raw.size,
            cells: raw.cells,
        })
    }
}

impl Default for Board {
    /// The classic 3x3 grid.
    fn default() -> Self {
        Self::new(3)
    }
}

impl Board {
    /// Builds an empty `size` by `size` board.
    ///
    /// `size` must be at least 1.
    pub fn new(size: usize) -> Self {
        assert!(size >= 1, "board size must be at least 1");
        Self {
            size,
            cells: vec![Cell::Empty; size * size],
        }
    }

    /// Length of one side.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Smallest valid linear move index.
    pub fn min_move(&self) -> usize {
        0
    }

    /// Largest valid linear move index.
    pub fn max_move(&self) -> usize {
        self.size * self.size - 1
    }

    /// The cell at `(row, col)`, or `None` outside the grid.
    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        (row < self.size && col < self.size).then(|| self.cells[row * self.size + col])
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// The rows of the grid, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.size)
    }

    pub(crate) fn at(&self, row: usize, col: usize) -> Cell {
        debug_assert!(row < self.size && col < self.size);
        self.cells[row * self.size + col]
    }

    /// Applies `player`'s move given as a linear index.
    ///
    /// The index maps to coordinates as `row = mv / size` and
    /// `col = mv % size`; valid indices run from [`Self::min_move`] through
    /// [`Self::max_move`]. Negative indices are out of bounds rather than
    /// unrepresentable, since move sources hand over whatever integer the
    /// player typed.
    #[tracing::instrument(skip(self))]
    pub fn play(&mut self, player: PlayerId, mv: i64) -> Result<(), MoveError> {
        let mv = usize::try_from(mv).map_err(|_| MoveError::OutOfBounds)?;
        self.play_at(player, mv / self.size, mv % self.size)
    }

    /// Applies `player`'s move at `(row, col)`.
    ///
    /// Bounds are checked before occupancy; on any error no cell changes.
    #[tracing::instrument(skip(self))]
    pub fn play_at(&mut self, player: PlayerId, row: usize, col: usize) -> Result<(), MoveError> {
        if row >= self.size || col >= self.size {
            return Err(MoveError::OutOfBounds);
        }
        let index = row * self.size + col;
        if !self.cells[index].is_empty() {
            return Err(MoveError::PositionFilled);
        }
        self.cells[index] = Cell::Taken(player);
        Ok(())
    }

    /// The player holding a complete line, if any.
    pub fn winner(&self) -> Option<PlayerId> {
        rules::check_winner(self)
    }

    /// True when every cell is taken.
    pub fn is_full(&self) -> bool {
        rules::is_full(self)
    }
}
