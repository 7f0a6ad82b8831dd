//! Depth-bounded adversarial search over board continuations.
//!
//! The search mirrors the engine's turn rules: a side with no legal move is
//! skipped, and a position where neither side can move is terminal. Sibling
//! moves are ordered by capture size to tighten the alpha-beta window early.

use itertools::Itertools;
use oxello_engine::{Board, Piece};
use std::cmp::Reverse;

/// Lower bound of the winning band. Terminal wins score `WIN` plus the
/// final disc difference, so any guaranteed win outranks any heuristic
/// score, and bigger wins outrank smaller ones.
pub(crate) const WIN: i64 = 10_000;

/// Score `board` from `perspective`'s point of view with `to_move` next to
/// play, searching `depth` plies.
pub(crate) fn score(board: &Board, perspective: Piece, to_move: Piece, depth: u32) -> i64 {
    alphabeta(board, perspective, to_move, depth, i64::MIN, i64::MAX)
}

fn alphabeta(
    board: &Board,
    perspective: Piece,
    to_move: Piece,
    depth: u32,
    mut alpha: i64,
    mut beta: i64,
) -> i64 {
    if depth == 0 || board.is_end() {
        return leaf_score(board, perspective);
    }

    let moves = board.legal_moves(to_move);
    if moves.is_empty() {
        // Forfeited turn: the other side moves on the same board.
        return alphabeta(board, perspective, to_move.opponent(), depth - 1, alpha, beta);
    }

    let maximizing = to_move == perspective;
    let mut best = if maximizing { i64::MIN } else { i64::MAX };

    let ordered = moves
        .into_iter()
        .sorted_by_key(|position| Reverse(board.count_flips(position.col, position.row, to_move)));

    for position in ordered {
        let mut next = board.clone();
        if next.put(position, to_move).is_err() {
            // Unreachable for an enumerated legal move.
            continue;
        }
        let value = alphabeta(
            &next,
            perspective,
            to_move.opponent(),
            depth - 1,
            alpha,
            beta,
        );

        if maximizing {
            best = best.max(value);
            alpha = alpha.max(best);
        } else {
            best = best.min(value);
            beta = beta.min(best);
        }
        if beta <= alpha {
            break;
        }
    }
    best
}

fn leaf_score(board: &Board, perspective: Piece) -> i64 {
    let difference =
        board.count(perspective) as i64 - board.count(perspective.opponent()) as i64;
    if board.is_end() {
        if difference > 0 {
            WIN + difference
        } else if difference < 0 {
            -WIN + difference
        } else {
            0
        }
    } else {
        difference
    }
}
