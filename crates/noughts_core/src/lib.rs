//! Rules engine and turn loop for square-grid noughts and crosses.
//!
//! The crate owns the board state, move validation, win and draw detection,
//! and the session state machine that sequences turns. Display and input
//! stay behind the [`Presenter`] and [`MoveSource`] traits, so any front
//! end that can show a grid and produce integers can drive a game.
//!
//! # Architecture
//!
//! - **Board**: square grid with linear-index move application
//! - **Rules**: line scanning for wins, full-board detection for draws
//! - **Session**: the turn loop, retrying rejected moves with the same
//!   player and reporting through the presenter
//!
//! # Example
//!
//! ```
//! use noughts_core::{Board, PlayerId};
//!
//! let mut board = Board::default();
//! assert!(board.play(PlayerId::FIRST, 4).is_ok());
//! assert_eq!(board.winner(), None);
//! assert_eq!(board.max_move(), 8);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
pub mod rules;
mod session;
mod types;

// Crate-level exports - Board state and moves
pub use board::{Board, BoardShapeError, MoveError};

// Crate-level exports - Session loop and collaborator seams
pub use session::{MoveSource, Presenter, Session, SessionError, TurnOrder};

// Crate-level exports - Shared types
pub use types::{Cell, Outcome, PlayerId};
