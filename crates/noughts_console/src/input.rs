//! Interactive move acquisition from a line-based reader.

use crate::symbols::Symbols;
use crate::ui::INVALID_MOVE_MSG;
use noughts_core::{MoveSource, PlayerId};
use std::io::{BufRead, Write};
use tracing::debug;

/// Prompts for and parses moves, one line per attempt.
///
/// Anything that is not an integer is reported and re-prompted here; range
/// and occupancy checks belong to the board, which drives its own retry
/// through the session. End of input ends the game.
#[derive(Debug)]
pub struct ConsoleInput<R, W> {
    input: R,
    prompt_out: W,
    symbols: Symbols,
}

impl<R: BufRead, W: Write> ConsoleInput<R, W> {
    /// Builds a source reading lines from `input` and prompting on
    /// `prompt_out`.
    pub fn new(input: R, prompt_out: W, symbols: Symbols) -> Self {
        Self {
            input,
            prompt_out,
            symbols,
        }
    }

    fn read_line(&mut self) -> Option<String> {
        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(line),
        }
    }
}

impl<R: BufRead, W: Write> MoveSource for ConsoleInput<R, W> {
    fn next_move(&mut self, player: PlayerId, min_move: usize, max_move: usize) -> Option<i64> {
        let glyph = self.symbols.player_glyph(player);
        loop {
            let _ = write!(
                self.prompt_out,
                "Next move for player {glyph} ({min_move}-{max_move}): "
            );
            let _ = self.prompt_out.flush();
            let line = self.read_line()?;
            match line.trim().parse::<i64>() {
                Ok(mv) => return Some(mv),
                Err(_) => {
                    debug!(input = line.trim(), "discarding non-integer input");
                    let _ = writeln!(self.prompt_out, "{INVALID_MOVE_MSG}");
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn p(id: u8) -> PlayerId {
        PlayerId::new(id).unwrap()
    }

    fn source_over(script: &str) -> ConsoleInput<Cursor<String>, Vec<u8>> {
        ConsoleInput::new(Cursor::new(script.to_string()), Vec::new(), Symbols::default())
    }

    #[test]
    fn test_integer_line_becomes_a_move() {
        let mut source = source_over("4\n");
        assert_eq!(source.next_move(p(1), 0, 8), Some(4));
    }

    #[test]
    fn test_surrounding_whitespace_is_ignored() {
        let mut source = source_over("  7  \n");
        assert_eq!(source.next_move(p(1), 0, 8), Some(7));
    }

    #[test]
    fn test_negative_integers_pass_through() {
        // Range policing is the board's job.
        let mut source = source_over("-3\n");
        assert_eq!(source.next_move(p(1), 0, 8), Some(-3));
    }

    #[test]
    fn test_non_integer_lines_are_reported_and_skipped() {
        let mut source = source_over("five\n\n5\n");
        assert_eq!(source.next_move(p(1), 0, 8), Some(5));
        let prompts = String::from_utf8(source.prompt_out).unwrap();
        assert_eq!(prompts.matches(INVALID_MOVE_MSG).count(), 2);
    }

    #[test]
    fn test_end_of_input_yields_none() {
        let mut source = source_over("");
        assert_eq!(source.next_move(p(1), 0, 8), None);
    }

    #[test]
    fn test_prompt_names_player_and_range() {
        let mut source = source_over("0\n");
        source.next_move(p(2), 0, 15).unwrap();
        let prompts = String::from_utf8(source.prompt_out).unwrap();
        assert_eq!(prompts, "Next move for player O (0-15): ");
    }
}
