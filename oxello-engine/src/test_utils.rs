//! Utilities for setting up board positions in tests and tools.

use crate::board::Board;
use crate::piece::Piece;
use crate::position::Position;

/// Build a [`Board`] from an ASCII diagram: one line per row, `#` for dark,
/// `O` for light, `.` for empty. The diagram must be square; leading and
/// trailing whitespace on each line is ignored.
///
/// Diagrams bypass the start-layout constructor so tests can describe any
/// mid-game position directly.
///
/// # Panics
///
/// Panics on ragged or unrecognised input. Intended for hand-written
/// fixtures, not untrusted data.
pub fn parse_board(text: &str) -> Board {
    let rows: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    let size = rows.len();
    let mut board = Board::empty(size);

    for (row, line) in rows.iter().enumerate() {
        assert_eq!(
            line.chars().count(),
            size,
            "board diagram is not square: row {} has {} cells, expected {}",
            row,
            line.chars().count(),
            size
        );
        for (col, symbol) in line.chars().enumerate() {
            match symbol {
                '.' => {}
                '#' => board.set(Position::new(col, row), Piece::Dark),
                'O' => board.set(Position::new(col, row), Piece::Light),
                other => panic!("unrecognised board symbol {:?}", other),
            }
        }
    }
    board
}
