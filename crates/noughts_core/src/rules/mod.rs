//! Win and draw detection over a board.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{LineKind, check_winner};
