//! Turn sequencing against external display and input collaborators.

use crate::board::{Board, MoveError};
use crate::types::{Outcome, PlayerId};
use tracing::{debug, info, instrument, warn};

/// Receives game output.
///
/// Methods have no return value; a presenter that loses its output has
/// nothing useful to tell the loop.
pub trait Presenter {
    /// Shows the current grid.
    fn render_board(&mut self, board: &Board);
    /// Declares `winner` the victor.
    fn announce_winner(&mut self, winner: PlayerId);
    /// Declares the game drawn.
    fn announce_tie(&mut self);
    /// Tells the acting player the move missed the board.
    fn report_out_of_bounds(&mut self);
    /// Tells the acting player the chosen cell is taken.
    fn report_position_filled(&mut self);
}

impl<P: Presenter + ?Sized> Presenter for &mut P {
    fn render_board(&mut self, board: &Board) {
        (**self).render_board(board);
    }

    fn announce_winner(&mut self, winner: PlayerId) {
        (**self).announce_winner(winner);
    }

    fn announce_tie(&mut self) {
        (**self).announce_tie();
    }

    fn report_out_of_bounds(&mut self) {
        (**self).report_out_of_bounds();
    }

    fn report_position_filled(&mut self) {
        (**self).report_position_filled();
    }
}

/// Produces moves for players.
pub trait MoveSource {
    /// The next move for `player`, given the valid index range.
    ///
    /// Values outside `min_move..=max_move` are allowed here; the board
    /// rejects them and the player is asked again. `None` means the source
    /// has no more input, which ends the session.
    fn next_move(&mut self, player: PlayerId, min_move: usize, max_move: usize) -> Option<i64>;
}

impl<S: MoveSource + ?Sized> MoveSource for &mut S {
    fn next_move(&mut self, player: PlayerId, min_move: usize, max_move: usize) -> Option<i64> {
        (**self).next_move(player, min_move, max_move)
    }
}

/// Cyclic turn order over players `1..=count`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnOrder {
    current: PlayerId,
    count: u8,
}

impl TurnOrder {
    /// Builds a turn order for `count` players starting at player 1.
    ///
    /// Returns `None` for fewer than two players.
    pub fn new(count: u8) -> Option<Self> {
        (count >= 2).then_some(Self {
            current: PlayerId::FIRST,
            count,
        })
    }

    /// The player whose turn it is.
    pub fn current(&self) -> PlayerId {
        self.current
    }

    /// Number of players in the rotation.
    pub fn count(&self) -> u8 {
        self.count
    }

    /// Moves to the next player, wrapping back to player 1.
    pub fn advance(&mut self) {
        let next = if self.current.get() == self.count {
            1
        } else {
            self.current.get() + 1
        };
        self.current = PlayerId::new(next).unwrap_or(PlayerId::FIRST);
    }
}

/// Fatal session failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum SessionError {
    /// The move source was exhausted before the game finished.
    #[display("input closed before the game finished")]
    InputClosed,
}

impl std::error::Error for SessionError {}

/// A single game from first render to outcome.
#[derive(Debug)]
pub struct Session<P, S> {
    board: Board,
    turns: TurnOrder,
    presenter: P,
    source: S,
}

impl<P: Presenter, S: MoveSource> Session<P, S> {
    /// Wires a board and turn order to display and input collaborators.
    pub fn new(board: Board, turns: TurnOrder, presenter: P, source: S) -> Self {
        Self {
            board,
            turns,
            presenter,
            source,
        }
    }

    /// The board as it currently stands.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Plays until a winner or a draw, consuming the session.
    ///
    /// Each iteration renders the board, then checks for a winner, then for
    /// a full board, and otherwise takes one move. A rejected move keeps
    /// the turn with the acting player, so the order only advances on
    /// success. The winner check runs first: a full board can also be a
    /// won board.
    #[instrument(skip(self), fields(size = self.board.size(), players = self.turns.count()))]
    pub fn run(mut self) -> Result<Outcome, SessionError> {
        info!("starting game");
        loop {
            self.presenter.render_board(&self.board);
            if let Some(winner) = self.board.winner() {
                info!(%winner, "line complete");
                self.presenter.announce_winner(winner);
                return Ok(Outcome::Winner(winner));
            }
            if self.board.is_full() {
                info!("board full with no winner");
                self.presenter.announce_tie();
                return Ok(Outcome::Draw);
            }
            self.take_turn()?;
            self.turns.advance();
        }
    }

    /// Prompts the current player until one move lands.
    fn take_turn(&mut self) -> Result<(), SessionError> {
        let player = self.turns.current();
        loop {
            let mv = self
                .source
                .next_move(player, self.board.min_move(), self.board.max_move())
                .ok_or(SessionError::InputClosed)?;
            match self.board.play(player, mv) {
                Ok(()) => {
                    debug!(%player, mv, "move accepted");
                    return Ok(());
                }
                Err(MoveError::OutOfBounds) => {
                    warn!(%player, mv, "move out of bounds");
                    self.presenter.report_out_of_bounds();
                }
                Err(MoveError::PositionFilled) => {
                    warn!(%player, mv, "position already filled");
                    self.presenter.report_position_filled();
                }
            }
        }
    }
}
