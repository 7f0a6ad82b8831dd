//! The board-state engine: disc placement, flip computation and move legality.

use crate::piece::Piece;
use crate::position::Position;
use crate::utils;
use crate::{MIN_SIZE, STANDARD_SIZE};
use std::collections::BTreeSet;
use std::fmt::{self, Display, Formatter};
use thiserror::Error;

/// Offsets for the eight compass directions, as `(dcol, drow)`.
const DIRECTIONS: [(isize, isize); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Error returned when a disc cannot be placed at a position: the cell is
/// occupied, out of bounds, or the placement would flip nothing.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
#[error("cannot place a {piece} disc at {position}")]
pub struct InvalidMoveError {
    pub position: Position,
    pub piece: Piece,
}

/// Error returned when constructing a board with an unplayable size.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
#[error("{0} is not a playable board size; sizes must be even and at least 4")]
pub struct InvalidSizeError(pub usize);

/// The grid of discs.
///
/// The size is fixed at construction. Every cell is either empty or holds
/// exactly one [`Piece`], and discs are never removed, only flipped, so the
/// occupied-cell count can only grow. [`Board::put`] is the single mutating
/// operation; everything else is read-only.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Board {
    size: usize,
    cells: Vec<Option<Piece>>,
}

impl Board {
    /// Construct the standard 8×8 starting board.
    pub fn standard() -> Self {
        Self::starting_grid(STANDARD_SIZE)
    }

    /// Construct a starting board with the given edge length.
    /// Sizes must be even and at least [`MIN_SIZE`].
    pub fn with_size(size: usize) -> Result<Self, InvalidSizeError> {
        if size < MIN_SIZE || size % 2 != 0 {
            return Err(InvalidSizeError(size));
        }
        Ok(Self::starting_grid(size))
    }

    /// Build the start layout: the four centre cells, light on the main
    /// diagonal.
    fn starting_grid(size: usize) -> Self {
        let mut board = Self::empty(size);
        let mid = size / 2;
        board.set(Position::new(mid - 1, mid - 1), Piece::Light);
        board.set(Position::new(mid, mid), Piece::Light);
        board.set(Position::new(mid, mid - 1), Piece::Dark);
        board.set(Position::new(mid - 1, mid), Piece::Dark);
        board
    }

    pub(crate) fn empty(size: usize) -> Self {
        Self {
            size,
            cells: vec![None; size * size],
        }
    }

    pub(crate) fn set(&mut self, position: Position, piece: Piece) {
        let index = self.index(position);
        self.cells[index] = Some(piece);
    }

    fn index(&self, position: Position) -> usize {
        position.row * self.size + position.col
    }

    fn in_bounds(&self, col: isize, row: isize) -> bool {
        0 <= col && col < self.size as isize && 0 <= row && row < self.size as isize
    }

    /// The edge length of the board.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Look up a single cell. Empty and out-of-bounds cells are `None`.
    pub fn view(&self, position: Position) -> Option<Piece> {
        if position.col >= self.size || position.row >= self.size {
            None
        } else {
            self.cells[self.index(position)]
        }
    }

    /// Count the discs a side has on the board.
    pub fn count(&self, piece: Piece) -> usize {
        self.cells.iter().filter(|&&cell| cell == Some(piece)).count()
    }

    /// Count the occupied cells.
    pub fn occupied(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Length of the capture run from `position` along one direction: the
    /// contiguous opponent discs that would flip if `piece` were placed
    /// there. The run only counts if it is terminated by one of `piece`'s
    /// own discs before an empty cell or the board edge.
    fn flips_along(&self, position: Position, piece: Piece, direction: (isize, isize)) -> usize {
        let (dcol, drow) = direction;
        let mut col = position.col as isize + dcol;
        let mut row = position.row as isize + drow;
        let mut run = 0;

        while self.in_bounds(col, row) {
            match self.cells[row as usize * self.size + col as usize] {
                Some(disc) if disc == piece.opponent() => run += 1,
                Some(_) => return run,
                None => return 0,
            }
            col += dcol;
            row += drow;
        }
        0
    }

    /// Total discs flipped by a hypothetical placement of `piece` at
    /// `(col, row)`, summed over all eight directions. Occupied and
    /// out-of-bounds cells count 0.
    pub fn count_flips(&self, col: usize, row: usize, piece: Piece) -> usize {
        if col >= self.size || row >= self.size {
            return 0;
        }
        let position = Position::new(col, row);
        if self.cells[self.index(position)].is_some() {
            return 0;
        }
        DIRECTIONS
            .iter()
            .map(|&direction| self.flips_along(position, piece, direction))
            .sum()
    }

    /// Every position where placing `piece` would flip at least one disc.
    /// Zero-flip placements are illegal, so this is exactly the set of legal
    /// moves for `piece`. Empty when the board is full or the side is
    /// blocked.
    pub fn legal_moves(&self, piece: Piece) -> BTreeSet<Position> {
        let mut moves = BTreeSet::new();
        for row in 0..self.size {
            for col in 0..self.size {
                if self.count_flips(col, row, piece) > 0 {
                    moves.insert(Position::new(col, row));
                }
            }
        }
        moves
    }

    /// Whether the game on this board is over: neither side has a legal
    /// move. This is stronger than "board full", since forfeited turns can
    /// end a game early.
    pub fn is_end(&self) -> bool {
        self.legal_moves(Piece::Dark).is_empty() && self.legal_moves(Piece::Light).is_empty()
    }

    /// Place `piece` at `position`, flipping every captured run.
    ///
    /// This is the single mutating entry point. It fails with
    /// [`InvalidMoveError`] if the cell is occupied, out of bounds, or the
    /// placement flips nothing; on failure the board is untouched.
    pub fn put(&mut self, position: Position, piece: Piece) -> Result<(), InvalidMoveError> {
        let invalid = InvalidMoveError { position, piece };
        if position.col >= self.size || position.row >= self.size {
            return Err(invalid);
        }
        if self.cells[self.index(position)].is_some() {
            return Err(invalid);
        }

        let mut runs = [0; DIRECTIONS.len()];
        for (run, &direction) in runs.iter_mut().zip(DIRECTIONS.iter()) {
            *run = self.flips_along(position, piece, direction);
        }
        if runs.iter().sum::<usize>() == 0 {
            return Err(invalid);
        }

        for (&run, &(dcol, drow)) in runs.iter().zip(DIRECTIONS.iter()) {
            let mut col = position.col as isize;
            let mut row = position.row as isize;
            for _ in 0..run {
                col += dcol;
                row += drow;
                self.cells[row as usize * self.size + col as usize] = Some(piece);
            }
        }
        self.set(position, piece);
        Ok(())
    }

    /// Get a read-only capability over this board.
    pub fn as_view(&self) -> BoardView<'_> {
        BoardView { board: self }
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        utils::format_grid(
            self.size,
            self.cells.iter().map(|cell| match cell {
                None => '.',
                Some(piece) => piece.symbol(),
            }),
            f,
        )
    }
}

/// A read-only capability over a [`Board`].
///
/// Presentation code and move-search code receive a `BoardView` rather than
/// the board itself, so nothing outside the turn controller can mutate
/// state. Search explores hypothetical continuations through
/// [`BoardView::after_move`], which hands back an owned copy.
#[derive(Clone, Copy, Debug)]
pub struct BoardView<'a> {
    board: &'a Board,
}

impl BoardView<'_> {
    /// The edge length of the board.
    pub fn size(&self) -> usize {
        self.board.size()
    }

    /// Look up a single cell. Empty and out-of-bounds cells are `None`.
    pub fn view(&self, position: Position) -> Option<Piece> {
        self.board.view(position)
    }

    /// Count the discs a side has on the board.
    pub fn count(&self, piece: Piece) -> usize {
        self.board.count(piece)
    }

    /// Total discs flipped by a hypothetical placement at `(col, row)`.
    pub fn count_flips(&self, col: usize, row: usize, piece: Piece) -> usize {
        self.board.count_flips(col, row, piece)
    }

    /// Every legal move for `piece`.
    pub fn legal_moves(&self, piece: Piece) -> BTreeSet<Position> {
        self.board.legal_moves(piece)
    }

    /// Whether neither side has a legal move.
    pub fn is_end(&self) -> bool {
        self.board.is_end()
    }

    /// The board that would result from placing `piece` at `position`.
    /// The underlying board is not touched.
    pub fn after_move(&self, position: Position, piece: Piece) -> Result<Board, InvalidMoveError> {
        let mut next = self.board.clone();
        next.put(position, piece)?;
        Ok(next)
    }

    /// An owned snapshot of the current board state.
    pub fn snapshot(&self) -> Board {
        self.board.clone()
    }
}

impl Display for BoardView<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.board.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn positions(pairs: &[(usize, usize)]) -> BTreeSet<Position> {
        pairs.iter().map(|&(col, row)| Position::new(col, row)).collect()
    }

    #[test]
    fn standard_start_layout() {
        let board = Board::standard();
        assert_eq!(board.size(), 8);
        assert_eq!(board.occupied(), 4);
        assert_eq!(board.view(Position::new(3, 3)), Some(Piece::Light));
        assert_eq!(board.view(Position::new(4, 4)), Some(Piece::Light));
        assert_eq!(board.view(Position::new(4, 3)), Some(Piece::Dark));
        assert_eq!(board.view(Position::new(3, 4)), Some(Piece::Dark));
        assert_eq!(board.view(Position::new(0, 0)), None);
    }

    #[test]
    fn odd_and_tiny_sizes_are_rejected()  {
        assert_eq!(Board::with_size(2), Err(InvalidSizeError(2)));
        assert_eq!(Board::with_size(3), Err(InvalidSizeError(3)));
        assert_eq!(Board::with_size(7), Err(InvalidSizeError(7)));
        assert!(Board::with_size(4).is_ok());
        assert!(Board::with_size(10).is_ok());
    }

    #[test]
    fn initial_legal_moves_for_dark() {
        let board = Board::standard();
        assert_eq!(
            board.legal_moves(Piece::Dark),
            positions(&[(3, 2), (2, 3), (5, 4), (4, 5)])
        );
    }

    #[test]
    fn opening_placement_flips_one_disc() {
        let mut board = Board::standard();
        assert_eq!(board.count_flips(3, 2, Piece::Dark), 1);
        board.put(Position::new(3, 2), Piece::Dark).unwrap();
        assert_eq!(board.view(Position::new(3, 3)), Some(Piece::Dark));
        assert_eq!(board.count(Piece::Dark), 4);
        assert_eq!(board.count(Piece::Light), 1);
        assert_eq!(board.occupied(), 5);
    }

    #[test]
    fn placement_flips_runs_in_multiple_directions() {
        let mut board = Board::standard();
        board.put(Position::new(3, 2), Piece::Dark).unwrap();
        board.put(Position::new(4, 2), Piece::Light).unwrap();

        // Dark at (5, 2) now captures west along the row and south-west
        // along the diagonal.
        assert_eq!(board.count_flips(5, 2, Piece::Dark), 2);
        board.put(Position::new(5, 2), Piece::Dark).unwrap();
        assert_eq!(board.view(Position::new(4, 2)), Some(Piece::Dark));
        assert_eq!(board.view(Position::new(4, 3)), Some(Piece::Dark));
        assert_eq!(board.count(Piece::Dark), 6);
        assert_eq!(board.count(Piece::Light), 1);
    }

    #[test]
    fn occupied_and_zero_flip_placements_fail() {
        let mut board = Board::standard();
        let before = board.clone();

        let occupied = board.put(Position::new(3, 3), Piece::Dark);
        assert_eq!(
            occupied,
            Err(InvalidMoveError {
                position: Position::new(3, 3),
                piece: Piece::Dark
            })
        );

        let zero_flip = board.put(Position::new(0, 0), Piece::Dark);
        assert!(zero_flip.is_err());

        let out_of_bounds = board.put(Position::new(8, 1), Piece::Dark);
        assert!(out_of_bounds.is_err());

        assert_eq!(board, before);
    }

    #[test]
    fn count_flips_is_zero_at_occupied_and_out_of_bounds_cells() {
        let board = Board::standard();
        assert_eq!(board.count_flips(3, 3, Piece::Dark), 0);
        assert_eq!(board.count_flips(3, 3, Piece::Light), 0);
        assert_eq!(board.count_flips(8, 0, Piece::Dark), 0);
        assert_eq!(board.count_flips(0, 9, Piece::Light), 0);
    }

    #[test]
    fn legal_moves_agree_with_count_flips() {
        let mut board = Board::standard();
        board.put(Position::new(3, 2), Piece::Dark).unwrap();
        board.put(Position::new(2, 2), Piece::Light).unwrap();

        for &piece in &[Piece::Dark, Piece::Light] {
            let legal = board.legal_moves(piece);
            for row in 0..board.size() {
                for col in 0..board.size() {
                    let flips = board.count_flips(col, row, piece);
                    assert_eq!(
                        legal.contains(&Position::new(col, row)),
                        flips > 0,
                        "disagreement at ({}, {}) for {}",
                        col,
                        row,
                        piece
                    );
                }
            }
        }
    }

    #[test]
    fn full_boards_have_no_legal_moves() {
        let board = crate::test_utils::parse_board(
            "#O#O\n\
             O#O#\n\
             #O#O\n\
             O#O#",
        );
        assert!(board.legal_moves(Piece::Dark).is_empty());
        assert!(board.legal_moves(Piece::Light).is_empty());
        assert!(board.is_end());
    }

    #[test]
    fn after_move_leaves_the_original_untouched() {
        let board = Board::standard();
        let view = board.as_view();
        let next = view.after_move(Position::new(3, 2), Piece::Dark).unwrap();
        assert_eq!(board.occupied(), 4);
        assert_eq!(next.occupied(), 5);
        assert!(view.after_move(Position::new(0, 0), Piece::Dark).is_err());
    }

    #[test]
    fn board_renders_as_a_grid() {
        let board = Board::with_size(4).unwrap();
        let rendered = board.to_string();
        assert!(rendered.contains("A B C D"));
        assert!(rendered.contains("O #"));
        assert!(rendered.contains("# O"));
    }
}
