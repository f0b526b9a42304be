//! Line scanning for a completed row, column, or diagonal.

use crate::board::Board;
use crate::types::PlayerId;
use strum::IntoEnumIterator;
use tracing::instrument;

/// The families of lines a win can occur on, in scan order.
///
/// Iteration order is the scan priority: every row top to bottom, then
/// every column left to right, then the two diagonals. Only boards with
/// several complete lines can observe the order, which alternating play
/// never produces, but the contract is fixed here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::EnumIter)]
pub enum LineKind {
    /// Horizontal lines, top to bottom.
    Row,
    /// Vertical lines, left to right.
    Column,
    /// The main diagonal, then the anti-diagonal.
    Diagonal,
}

impl LineKind {
    /// Cell coordinates of every line of this kind on a `size` by `size`
    /// board, in scan order.
    pub fn lines(self, size: usize) -> Vec<Vec<(usize, usize)>> {
        match self {
            LineKind::Row => (0..size)
                .map(|row| (0..size).map(|col| (row, col)).collect())
                .collect(),
            LineKind::Column => (0..size)
                .map(|col| (0..size).map(|row| (row, col)).collect())
                .collect(),
            LineKind::Diagonal => vec![
                (0..size).map(|i| (i, i)).collect(),
                (0..size).map(|i| (i, size - 1 - i)).collect(),
            ],
        }
    }
}

/// The player holding every cell of `line`, if the line is complete.
///
/// An empty first cell disqualifies the line outright, so untouched lines
/// never produce a winner.
fn line_winner(board: &Board, line: &[(usize, usize)]) -> Option<PlayerId> {
    let first = board.at(line[0].0, line[0].1);
    let player = first.player()?;
    line.iter()
        .all(|&(row, col)| board.at(row, col) == first)
        .then_some(player)
}

/// Scans every line for a winner, first complete line deciding.
#[instrument]
pub fn check_winner(board: &Board) -> Option<PlayerId> {
    LineKind::iter()
        .flat_map(|kind| kind.lines(board.size()))
        .find_map(|line| line_winner(board, &line))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(id: u8) -> PlayerId {
        PlayerId::new(id).unwrap()
    }

    fn board_from(moves: &[(u8, i64)]) -> Board {
        let mut board = Board::default();
        for &(player, mv) in moves {
            board.play(p(player), mv).unwrap();
        }
        board
    }

    #[test]
    fn test_empty_board_has_no_winner() {
        assert_eq!(check_winner(&Board::default()), None);
    }

    #[test]
    fn test_top_row_win() {
        let board = board_from(&[(1, 0), (2, 3), (1, 1), (2, 4), (1, 2)]);
        assert_eq!(check_winner(&board), Some(p(1)));
    }

    #[test]
    fn test_middle_row_win_with_other_rows_empty() {
        let board = board_from(&[(1, 3), (1, 4), (1, 5)]);
        assert_eq!(check_winner(&board), Some(p(1)));
    }

    #[test]
    fn test_first_column_win() {
        let board = board_from(&[(2, 0), (2, 3), (2, 6)]);
        assert_eq!(check_winner(&board), Some(p(2)));
    }

    #[test]
    fn test_last_column_win() {
        let board = board_from(&[(1, 2), (1, 5), (1, 8)]);
        assert_eq!(check_winner(&board), Some(p(1)));
    }

    #[test]
    fn test_main_diagonal_win() {
        let board = board_from(&[(1, 0), (1, 4), (1, 8)]);
        assert_eq!(check_winner(&board), Some(p(1)));
    }

    #[test]
    fn test_anti_diagonal_win() {
        let board = board_from(&[(2, 2), (2, 4), (2, 6)]);
        assert_eq!(check_winner(&board), Some(p(2)));
    }

    #[test]
    fn test_incomplete_line_is_not_a_win() {
        let board = board_from(&[(1, 0), (1, 1), (2, 2)]);
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_full_board_without_line_has_no_winner() {
        let board = board_from(&[
            (1, 8),
            (2, 5),
            (1, 7),
            (2, 6),
            (1, 2),
            (2, 0),
            (1, 3),
            (2, 4),
            (1, 1),
        ]);
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_topmost_row_wins_scan_ties() {
        let board = board_from(&[(2, 3), (2, 4), (2, 5), (1, 0), (1, 1), (1, 2)]);
        assert_eq!(check_winner(&board), Some(p(1)));
    }

    #[test]
    fn test_main_diagonal_outranks_anti_diagonal() {
        // On even sizes the two diagonals share no cell, so both can be
        // complete at once.
        let mut board = Board::new(4);
        for i in 0..4 {
            board.play_at(p(1), i, i).unwrap();
            board.play_at(p(2), i, 3 - i).unwrap();
        }
        assert_eq!(check_winner(&board), Some(p(1)));
    }

    #[test]
    fn test_diagonal_lines_cover_both_corners() {
        let lines = LineKind::Diagonal.lines(3);
        assert_eq!(
            lines,
            vec![
                vec![(0, 0), (1, 1), (2, 2)],
                vec![(0, 2), (1, 1), (2, 0)],
            ]
        );
    }

    #[test]
    fn test_rows_scan_before_columns_before_diagonals() {
        let kinds: Vec<LineKind> = LineKind::iter().collect();
        assert_eq!(kinds, vec![LineKind::Row, LineKind::Column, LineKind::Diagonal]);
    }

    #[test]
    fn test_larger_board_needs_the_full_line() {
        let mut board = Board::new(4);
        for col in 0..3 {
            board.play_at(p(1), 0, col).unwrap();
        }
        assert_eq!(check_winner(&board), None);
        board.play_at(p(1), 0, 3).unwrap();
        assert_eq!(check_winner(&board), Some(p(1)));
    }
}
