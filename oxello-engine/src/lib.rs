//! `oxello-engine` is a complete Othello rules engine for UIs and computer players.
//!
//! The crate is layered from the bottom up:
//!
//!  - [`Board`] owns the grid of discs and implements move legality, flip
//!    computation and the single mutating entry point, [`Board::put`].
//!  - [`BoardView`] is a read-only capability over a board, handed to
//!    presentation code and move-search code so neither can mutate state.
//!  - [`Game`] sequences turns on top of a board: it applies moves for the
//!    side to play, holds the turn when the opponent has no reply, and
//!    refuses moves once the game has ended.
//!  - [`GameManager`] runs a game session, dispatching [`GameEvent`]s to
//!    attached [`GameExtension`]s such as the [`MatchTimer`].

pub mod board;
pub mod extension;
pub mod game;
pub mod manager;
pub mod piece;
pub mod position;
pub mod test_utils;

mod utils;

pub use board::{Board, BoardView, InvalidMoveError, InvalidSizeError};
pub use extension::{GameExtension, MatchTimer};
pub use game::{Game, GameError};
pub use manager::{GameCommand, GameEvent, GameManager};
pub use piece::Piece;
pub use position::{ParsePositionError, Position};

/// Edge length of a standard Othello board.
pub const STANDARD_SIZE: usize = 8;

/// The smallest playable edge length. Boards must also have even parity so
/// the four starting discs sit in the centre.
pub const MIN_SIZE: usize = 4;
