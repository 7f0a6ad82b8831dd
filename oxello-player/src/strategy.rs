//! Move-selection policies for computer players.

use crate::eval::EvaluationStrategy;
use oxello_engine::{BoardView, Piece, Position};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Default seed for [`RandomSelection`]'s generator.
const RNG_SEED: u64 = 5;

/// A policy that picks one legal move for a side.
///
/// Strategies operate purely against the read-only [`BoardView`] and the
/// injected [`EvaluationStrategy`]; they never mutate the live board, and
/// they enumerate legal moves fresh on every call since the board changes
/// between calls.
///
/// Calling [`search`](SearchStrategy::search) with no legal move available
/// is a caller contract violation and panics; callers check
/// [`BoardView::is_end`] or the legal-move set first.
pub trait SearchStrategy {
    /// Select one legal move for `piece`.
    fn search(
        &mut self,
        board: BoardView<'_>,
        piece: Piece,
        eval: &dyn EvaluationStrategy,
    ) -> Position;
}

/// Uniform-random selection among the legal moves.
///
/// Seeded, so a fixed seed replays the same move sequence, which makes
/// games reproducible in tests.
pub struct RandomSelection {
    rng: StdRng,
}

impl RandomSelection {
    pub fn new() -> Self {
        Self::with_seed(RNG_SEED)
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomSelection {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchStrategy for RandomSelection {
    fn search(
        &mut self,
        board: BoardView<'_>,
        piece: Piece,
        _eval: &dyn EvaluationStrategy,
    ) -> Position {
        let moves: Vec<Position> = board.legal_moves(piece).into_iter().collect();
        assert!(!moves.is_empty(), "search invoked with no legal moves");
        moves[self.rng.gen_range(0..moves.len())]
    }
}

/// Picks the legal move the evaluation strategy scores highest.
///
/// Ties resolve to the last-scanned position, which is deterministic since
/// legal moves enumerate in a fixed order.
pub struct BestEvaluation;

impl SearchStrategy for BestEvaluation {
    fn search(
        &mut self,
        board: BoardView<'_>,
        piece: Piece,
        eval: &dyn EvaluationStrategy,
    ) -> Position {
        let moves = board.legal_moves(piece);
        assert!(!moves.is_empty(), "search invoked with no legal moves");
        moves
            .into_iter()
            .max_by_key(|&position| eval.evaluate(board, position, piece))
            .expect("the legal-move set was checked to be non-empty")
    }
}
