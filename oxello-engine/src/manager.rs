//! Session-level coordination: runs a [`Game`] and keeps attached
//! [`GameExtension`]s informed of its lifecycle.

use crate::extension::GameExtension;
use crate::game::{Game, GameError};
use crate::piece::Piece;
use crate::position::Position;
use tracing::trace;

/// Milestones in the lifecycle of a game session.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum GameEvent {
    /// The session has started.
    Begin,
    /// A move was applied and the game continues.
    NextTurn,
    /// The session was suspended.
    Paused,
    /// The game reached its terminal state.
    End,
}

/// An instruction a session can route through the manager. Extensions
/// observe commands after they have been applied.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum GameCommand {
    Put(Position),
    Pause,
    Resume,
}

/// Owns a [`Game`] and a set of [`GameExtension`]s, and dispatches
/// [`GameEvent`]s at the transition points of the turn flow.
///
/// Dispatch is synchronous and ordered: every handler runs to completion
/// before the manager proceeds, so extensions observe a consistent game.
pub struct GameManager {
    game: Game,
    extensions: Vec<Box<dyn GameExtension>>,
}

impl GameManager {
    /// Manage `game` with no extensions attached.
    pub fn new(game: Game) -> Self {
        Self::with_extensions(game, Vec::new())
    }

    /// Manage `game` with the given extensions attached.
    pub fn with_extensions(game: Game, extensions: Vec<Box<dyn GameExtension>>) -> Self {
        Self { game, extensions }
    }

    /// Attach another extension.
    pub fn add_extension(&mut self, extension: Box<dyn GameExtension>) {
        self.extensions.push(extension);
    }

    /// The managed game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Begin the session. Call once, before the first move.
    pub fn start(&mut self) {
        self.dispatch(GameEvent::Begin);
    }

    /// Apply a move for the current side and notify extensions. Fires
    /// [`GameEvent::End`] when the move finishes the game, otherwise
    /// [`GameEvent::NextTurn`]. On failure no event fires.
    pub fn put(&mut self, position: Position) -> Result<(), GameError> {
        self.game.put(position)?;
        if self.game.is_game_over() {
            self.dispatch(GameEvent::End);
        } else {
            self.dispatch(GameEvent::NextTurn);
        }
        Ok(())
    }

    /// Suspend the session.
    pub fn pause(&mut self) {
        self.dispatch(GameEvent::Paused);
    }

    /// Resume a suspended session. Re-fires [`GameEvent::NextTurn`] so
    /// time-keeping extensions restart their accounting from now.
    pub fn resume(&mut self) {
        self.dispatch(GameEvent::NextTurn);
    }

    /// Route a [`GameCommand`] through the manager, then let extensions
    /// observe it.
    pub fn command(&mut self, command: GameCommand) -> Result<(), GameError> {
        match command {
            GameCommand::Put(position) => self.put(position)?,
            GameCommand::Pause => self.pause(),
            GameCommand::Resume => self.resume(),
        }
        let game = &self.game;
        for extension in &mut self.extensions {
            extension.on_command(command, game);
        }
        Ok(())
    }

    /// Collect the per-side results of every extension that reports one.
    pub fn results(&self, piece: Piece) -> Vec<i64> {
        self.extensions
            .iter()
            .filter(|extension| extension.has_result())
            .filter_map(|extension| extension.result(piece))
            .collect()
    }

    fn dispatch(&mut self, event: GameEvent) {
        trace!(?event, "dispatching game event");
        let game = &self.game;
        for extension in &mut self.extensions {
            extension.on_event(event, game);
        }
    }
}
