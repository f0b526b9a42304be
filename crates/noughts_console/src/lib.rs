//! Console front end for the noughts and crosses engine.
//!
//! Pairs the pure rules engine with a line-oriented terminal interface:
//! a text grid renderer, a prompting line reader, a player glyph table,
//! and TOML plus command-line configuration. The `noughts` binary wires
//! these into a playable game.
//!
//! # Example
//!
//! ```
//! use noughts_console::{ConsoleInput, ConsolePresenter, Symbols};
//! use noughts_core::{Board, Session, TurnOrder};
//! use std::io::Cursor;
//!
//! let presenter = ConsolePresenter::new(Vec::new(), Symbols::default());
//! let source = ConsoleInput::new(Cursor::new("0\n3\n1\n4\n2\n"), Vec::new(), Symbols::default());
//! let turns = TurnOrder::new(2).unwrap();
//! let outcome = Session::new(Board::default(), turns, presenter, source)
//!     .run()
//!     .unwrap();
//! assert!(outcome.winner().is_some());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod input;
mod symbols;
mod ui;

// Crate-level exports - Command line and configuration
pub use cli::Cli;
pub use config::{ConfigError, GameConfig};

// Crate-level exports - Console collaborators
pub use input::ConsoleInput;
pub use symbols::Symbols;
pub use ui::ConsolePresenter;
