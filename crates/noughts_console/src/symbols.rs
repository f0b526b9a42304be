//! Player glyph table for console display.

use noughts_core::{Cell, PlayerId};
use serde::{Deserialize, Serialize};

/// Maps cells to display glyphs: one for the empty cell, one per player
/// in turn order.
///
/// The table is presentation-only. The engine never sees glyphs, and the
/// player count of a game is simply the roster length.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Symbols {
    empty: char,
    players: Vec<char>,
}

impl Default for Symbols {
    /// Space for empty cells, `X` and `O` for the players.
    fn default() -> Self {
        Self::new(' ', vec!['X', 'O'])
    }
}

impl Symbols {
    /// Builds a table from an empty-cell glyph and a player roster.
    pub fn new(empty: char, players: Vec<char>) -> Self {
        Self { empty, players }
    }

    /// Builds a table with one player per character of `roster`.
    pub fn from_roster(empty: char, roster: &str) -> Self {
        Self::new(empty, roster.chars().collect())
    }

    /// The glyph for `cell`.
    ///
    /// Identifiers beyond the roster render as `?`; a roster that passed
    /// [`GameConfig::validate`](crate::GameConfig::validate) covers every
    /// identifier its own turn order can produce.
    pub fn glyph(&self, cell: Cell) -> char {
        match cell.player() {
            None => self.empty,
            Some(player) => self
                .players
                .get(usize::from(player.get()) - 1)
                .copied()
                .unwrap_or('?'),
        }
    }

    /// The glyph for `player`.
    pub fn player_glyph(&self, player: PlayerId) -> char {
        self.glyph(Cell::Taken(player))
    }

    /// Number of players in the roster, saturating at 255.
    pub fn player_count(&self) -> u8 {
        u8::try_from(self.players.len()).unwrap_or(u8::MAX)
    }
}
