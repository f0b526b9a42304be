//! Full-board and draw detection.

use crate::board::Board;
use crate::rules::win;
use tracing::instrument;

/// True when every cell holds a mark.
#[instrument]
pub fn is_full(board: &Board) -> bool {
    board.cells().iter().all(|cell| !cell.is_empty())
}

/// True when the board is full and no line is complete.
///
/// Callers that also award wins must check the winner first: a board can
/// fill up on the winning move.
#[instrument]
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && win::check_winner(board).is_none()
}
