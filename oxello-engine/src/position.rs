//! Code for working with [`Position`]s on the board.

use derive_more::{Display, From};
use std::str::FromStr;
use thiserror::Error;

/// A location on the board as a 0-indexed column/row pair.
///
/// `col` counts from the left edge and `row` from the top. A `Position` is a
/// plain value: it carries no board-size information, so bounds are checked
/// by whichever board it is used against.
#[derive(Clone, Copy, Debug, Display, Eq, From, Hash, Ord, PartialEq, PartialOrd)]
#[display(fmt = "{},{}", col, row)]
pub struct Position {
    pub col: usize,
    pub row: usize,
}

impl Position {
    pub fn new(col: usize, row: usize) -> Self {
        Self { col, row }
    }
}

/// Error returned when a string is not `"<col>,<row>"` notation.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
#[error("invalid position string")]
pub struct ParsePositionError;

/// Build a [`Position`] from `"<col>,<row>"` notation ("3,5").
/// The column is written first, matching the remote wire format.
impl FromStr for Position {
    type Err = ParsePositionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut segments = s.trim().split(',');
        let col = segments
            .next()
            .ok_or(ParsePositionError)?
            .trim()
            .parse()
            .map_err(|_| ParsePositionError)?;
        let row = segments
            .next()
            .ok_or(ParsePositionError)?
            .trim()
            .parse()
            .map_err(|_| ParsePositionError)?;

        if segments.next() != None {
            return Err(ParsePositionError);
        }

        Ok(Self { col, row })
    }
}
