//! Core types shared across the engine.

use serde::{Deserialize, Serialize};

/// Identifier of a player, numbered from 1 in turn order.
///
/// The empty cell is not a player; see [`Cell`]. Wrapping a non-zero
/// integer keeps the two apart at the type level, so a cell can never
/// hold an out-of-range mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(std::num::NonZeroU8);

impl PlayerId {
    /// The player who moves first.
    pub const FIRST: PlayerId = PlayerId(std::num::NonZeroU8::MIN);

    /// Builds an identifier, rejecting zero.
    pub fn new(id: u8) -> Option<Self> {
        std::num::NonZeroU8::new(id).map(Self)
    }

    /// The numeric value, in `1..=255`.
    pub fn get(self) -> u8 {
        self.0.get()
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One addressable position on the board.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// No player has claimed this position.
    #[default]
    Empty,
    /// Claimed by the given player.
    Taken(PlayerId),
}

impl Cell {
    /// True when no mark has been placed here.
    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// The claiming player, if any.
    pub fn player(self) -> Option<PlayerId> {
        match self {
            Cell::Empty => None,
            Cell::Taken(player) => Some(player),
        }
    }
}

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// The given player completed a line.
    Winner(PlayerId),
    /// The board filled with no line complete.
    Draw,
}

impl Outcome {
    /// The winning player, if the game was not drawn.
    pub fn winner(self) -> Option<PlayerId> {
        match self {
            Outcome::Winner(player) => Some(player),
            Outcome::Draw => None,
        }
    }

    /// True when the board filled with no winner.
    pub fn is_draw(self) -> bool {
        matches!(self, Outcome::Draw)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Winner(player) => write!(f, "player {player} wins"),
            Outcome::Draw => write!(f, "draw"),
        }
    }
}
