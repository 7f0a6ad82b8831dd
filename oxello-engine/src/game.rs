//! Game-level turn flow: move application, turn sequencing and end-of-game
//! detection.

use crate::board::{Board, BoardView, InvalidMoveError};
use crate::piece::Piece;
use crate::position::Position;
use thiserror::Error;
use tracing::debug;

/// Error returned by [`Game::put`].
#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
pub enum GameError {
    /// The board rejected the placement. The turn does not advance.
    #[error(transparent)]
    InvalidMove(#[from] InvalidMoveError),
    /// The game has ended; no further moves are accepted.
    #[error("the game is over")]
    GameOver,
}

/// A game of Othello: one [`Board`] plus the side whose turn it is.
///
/// Dark always moves first. Game instances are intentionally not comparable;
/// they are never interned or used as keys.
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    current: Piece,
}

impl Game {
    /// Start a game on `board` with dark to move.
    pub fn new(board: Board) -> Self {
        Self::with_current(board, Piece::default())
    }

    /// Start a game mid-way, with a chosen side to move. Useful for loading
    /// partially completed games and for custom setups.
    pub fn with_current(board: Board, current: Piece) -> Self {
        Self { board, current }
    }

    /// Place the current side's disc at `position` and advance the turn.
    ///
    /// The turn passes to the opponent only if the opponent has a legal
    /// reply; otherwise the mover keeps the turn. Whether the *mover* still
    /// has a move is deliberately not checked here; a move into a dead
    /// position is detected by [`Game::is_game_over`] afterwards.
    pub fn put(&mut self, position: Position) -> Result<(), GameError> {
        if self.is_game_over() {
            return Err(GameError::GameOver);
        }
        self.board.put(position, self.current)?;
        debug!(%position, piece = %self.current, "disc placed");
        self.next_turn();
        Ok(())
    }

    /// Advance the turn according to the forfeit rule.
    fn next_turn(&mut self) {
        if !self.board.legal_moves(self.current.opponent()).is_empty() {
            self.current = self.current.opponent();
        } else {
            debug!(piece = %self.current.opponent(), "no legal reply; turn is held");
        }
    }

    /// The side whose turn it is.
    pub fn current(&self) -> Piece {
        self.current
    }

    /// The first player's side. Always dark.
    pub fn player1(&self) -> Piece {
        Piece::Dark
    }

    /// The second player's side. Always light.
    pub fn player2(&self) -> Piece {
        Piece::Light
    }

    /// A read-only view of the board for presentation and search.
    pub fn board(&self) -> BoardView<'_> {
        self.board.as_view()
    }

    /// Whether the game has ended: neither side has a legal move.
    pub fn is_game_over(&self) -> bool {
        self.board.is_end()
    }

    /// The side with more discs, or `None` on a tie. Only meaningful once
    /// [`Game::is_game_over`] is true.
    pub fn winner(&self) -> Option<Piece> {
        let dark = self.board.count(Piece::Dark);
        let light = self.board.count(Piece::Light);
        if dark > light {
            Some(Piece::Dark)
        } else if light > dark {
            Some(Piece::Light)
        } else {
            None
        }
    }
}
