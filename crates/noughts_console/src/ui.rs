//! Text renderer for the board grid and game messages.

use crate::symbols::Symbols;
use noughts_core::{Board, PlayerId, Presenter};
use std::io::Write;

/// Message shown for every rejected move, shared with the prompt loop in
/// [`ConsoleInput`](crate::ConsoleInput).
pub(crate) const INVALID_MOVE_MSG: &str = "Invalid move, try again.";

/// Renders the game onto any writer as plain text.
///
/// Cells are joined with a column separator and rows are divided by a rule
/// line sized to the rendered row width.
#[derive(Debug)]
pub struct ConsolePresenter<W> {
    out: W,
    symbols: Symbols,
    column_separator: String,
    row_rule: char,
}

impl<W: Write> ConsolePresenter<W> {
    /// Builds a presenter with the classic separators, `" | "` between
    /// columns and `'-'` for the rule rows.
    pub fn new(out: W, symbols: Symbols) -> Self {
        Self::with_separators(out, symbols, " | ", '-')
    }

    /// Builds a presenter with custom column and row separators.
    pub fn with_separators(
        out: W,
        symbols: Symbols,
        column_separator: &str,
        row_rule: char,
    ) -> Self {
        Self {
            out,
            symbols,
            column_separator: column_separator.to_string(),
            row_rule,
        }
    }

    fn write_board(&mut self, board: &Board) -> std::io::Result<()> {
        let sep_width = self.column_separator.chars().count();
        let rule_width = board.size() * (sep_width + 1) - sep_width;
        let rule = self.row_rule.to_string().repeat(rule_width);
        for (index, row) in board.rows().enumerate() {
            let cells: Vec<String> = row
                .iter()
                .map(|&cell| self.symbols.glyph(cell).to_string())
                .collect();
            writeln!(self.out, "{}", cells.join(&self.column_separator))?;
            if index + 1 < board.size() {
                writeln!(self.out, "{rule}")?;
            }
        }
        writeln!(self.out)?;
        self.out.flush()
    }
}

// The Presenter contract has no error channel, so a failed write leaves
// the session to finish quietly.
impl<W: Write> Presenter for ConsolePresenter<W> {
    fn render_board(&mut self, board: &Board) {
        let _ = self.write_board(board);
    }

    fn announce_winner(&mut self, winner: PlayerId) {
        let glyph = self.symbols.player_glyph(winner);
        let _ = writeln!(self.out, "Player {glyph} wins!");
    }

    fn announce_tie(&mut self) {
        let _ = writeln!(self.out, "It's a tie!");
    }

    fn report_out_of_bounds(&mut self) {
        let _ = writeln!(self.out, "{INVALID_MOVE_MSG}");
    }

    fn report_position_filled(&mut self) {
        let _ = writeln!(self.out, "{INVALID_MOVE_MSG}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use noughts_core::PlayerId;

    fn p(id: u8) -> PlayerId {
        PlayerId::new(id).unwrap()
    }

    fn rendered<F>(draw: F) -> String
    where
        F: FnOnce(&mut ConsolePresenter<&mut Vec<u8>>),
    {
        let mut out = Vec::new();
        {
            let mut presenter = ConsolePresenter::new(&mut out, Symbols::default());
            draw(&mut presenter);
        }
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_grid_layout_matches_classic_format() {
        let mut board = Board::default();
        for (turn, mv) in [8, 5, 7, 6, 2, 0, 3, 4, 1].into_iter().enumerate() {
            board.play(p(if turn % 2 == 0 { 1 } else { 2 }), mv).unwrap();
        }
        let text = rendered(|presenter| presenter.render_board(&board));
        assert_eq!(
            text,
            "O | X | X\n---------\nX | O | O\n---------\nO | X | X\n\n"
        );
    }

    #[test]
    fn test_empty_board_renders_blank_cells() {
        let text = rendered(|presenter| presenter.render_board(&Board::default()));
        assert_eq!(text, "  |   |  \n---------\n  |   |  \n---------\n  |   |  \n\n");
    }

    #[test]
    fn test_larger_board_scales_rule_width() {
        let text = rendered(|presenter| presenter.render_board(&Board::new(4)));
        let first_rule = text.lines().nth(1).unwrap();
        assert_eq!(first_rule, "-".repeat(13));
    }

    #[test]
    fn test_custom_separators() {
        let mut out = Vec::new();
        {
            let mut presenter =
                ConsolePresenter::with_separators(&mut out, Symbols::default(), "|", '=');
            presenter.render_board(&Board::default());
        }
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with(" | | \n=====\n"));
    }

    #[test]
    fn test_announcements_use_glyphs_and_classic_wording() {
        let text = rendered(|presenter| {
            presenter.announce_winner(p(1));
            presenter.announce_winner(p(2));
            presenter.announce_tie();
            presenter.report_out_of_bounds();
            presenter.report_position_filled();
        });
        assert_eq!(
            text,
            "Player X wins!\nPlayer O wins!\nIt's a tie!\n\
             Invalid move, try again.\nInvalid move, try again.\n"
        );
    }
}
