//! Scoring functions for ranking candidate placements.

use crate::minimax;
use oxello_engine::{BoardView, Piece, Position};

/// A pluggable score over a hypothetical placement.
///
/// `evaluate` scores the board that would result from `piece` playing at
/// `position`; higher is better for `piece`. Implementations explore through
/// [`BoardView::after_move`] and never touch the live board. An illegal
/// `position` scores `i64::MIN`, which sinks it below every legal
/// alternative.
pub trait EvaluationStrategy {
    fn evaluate(&self, board: BoardView<'_>, position: Position, piece: Piece) -> i64;
}

/// Scores a placement by the resulting disc difference, mover minus
/// opponent. The greedy baseline: maximises immediate material.
pub struct DiscCount;

impl EvaluationStrategy for DiscCount {
    fn evaluate(&self, board: BoardView<'_>, position: Position, piece: Piece) -> i64 {
        match board.after_move(position, piece) {
            Ok(next) => next.count(piece) as i64 - next.count(piece.opponent()) as i64,
            Err(_) => i64::MIN,
        }
    }
}

/// Scores a placement by where the disc lands: corners are strong, cells
/// next to a corner hand the corner over, edges are solid.
///
/// Weights are banded by distance from the board edge, so they apply to any
/// board size.
pub struct PositionalWeight;

/// Distance band of a coordinate from the nearer edge, saturated at 2.
fn band(coordinate: usize, edge: usize) -> usize {
    let from_edge = coordinate.min(edge - coordinate);
    from_edge.min(2)
}

fn weight(position: Position, size: usize) -> i64 {
    // Rows and columns are interchangeable, so the table is symmetric.
    const WEIGHTS: [[i64; 3]; 3] = [[100, -20, 10], [-20, -50, -5], [10, -5, 1]];
    let edge = size - 1;
    WEIGHTS[band(position.col, edge)][band(position.row, edge)]
}

impl EvaluationStrategy for PositionalWeight {
    fn evaluate(&self, board: BoardView<'_>, position: Position, piece: Piece) -> i64 {
        match board.after_move(position, piece) {
            Ok(_) => weight(position, board.size()),
            Err(_) => i64::MIN,
        }
    }
}

/// Depth-bounded alpha-beta minimax over the disc difference.
///
/// Terminal positions saturate to a win/loss band so a guaranteed result
/// outranks any heuristic score.
pub struct Minimax {
    depth: u32,
}

impl Minimax {
    /// A search that looks `depth` plies beyond the candidate placement.
    pub fn new(depth: u32) -> Self {
        Self { depth }
    }
}

impl EvaluationStrategy for Minimax {
    fn evaluate(&self, board: BoardView<'_>, position: Position, piece: Piece) -> i64 {
        match board.after_move(position, piece) {
            Ok(next) => minimax::score(&next, piece, piece.opponent(), self.depth),
            Err(_) => i64::MIN,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use oxello_engine::test_utils::parse_board;
    use oxello_engine::Board;

    #[test]
    fn disc_count_prefers_the_bigger_capture() {
        let mut board = Board::standard();
        board.put(Position::new(3, 2), Piece::Dark).unwrap();
        board.put(Position::new(4, 2), Piece::Light).unwrap();
        let view = board.as_view();

        let double = DiscCount.evaluate(view, Position::new(5, 2), Piece::Dark);
        let single = DiscCount.evaluate(view, Position::new(5, 3), Piece::Dark);
        assert!(double > single);
    }

    #[test]
    fn illegal_placements_sink_to_the_bottom() {
        let board = Board::standard();
        let view = board.as_view();
        assert_eq!(
            DiscCount.evaluate(view, Position::new(0, 0), Piece::Dark),
            i64::MIN
        );
        assert_eq!(
            PositionalWeight.evaluate(view, Position::new(3, 3), Piece::Dark),
            i64::MIN
        );
        assert_eq!(
            Minimax::new(2).evaluate(view, Position::new(0, 0), Piece::Dark),
            i64::MIN
        );
    }

    #[test]
    fn positional_weight_prefers_the_corner() {
        // Dark can take the corner at (0, 0) or the edge-adjacent (0, 1).
        let board = parse_board(
            ".O#.\n\
             .O#.\n\
             ....\n\
             ....",
        );
        let view = board.as_view();

        let corner = PositionalWeight.evaluate(view, Position::new(0, 0), Piece::Dark);
        let c_square = PositionalWeight.evaluate(view, Position::new(0, 1), Piece::Dark);
        assert!(corner > c_square);
    }

    #[test]
    fn banded_weights_cover_every_size() {
        for &size in &[4, 6, 8, 12] {
            let edge = size - 1;
            assert_eq!(weight(Position::new(0, 0), size), 100);
            assert_eq!(weight(Position::new(edge, edge), size), 100);
            assert_eq!(weight(Position::new(1, 1), size), -50);
            assert_eq!(weight(Position::new(edge - 1, edge), size), -20);
        }
    }

    #[test]
    fn minimax_sees_an_immediate_win() {
        // (3, 0) captures both light discs and empties light off the board.
        let board = parse_board(
            "#OO.\n\
             ....\n\
             ....\n\
             ....",
        );
        let view = board.as_view();
        let score = Minimax::new(3).evaluate(view, Position::new(3, 0), Piece::Dark);
        assert!(score >= minimax::WIN, "expected a winning score, got {}", score);
    }
}
