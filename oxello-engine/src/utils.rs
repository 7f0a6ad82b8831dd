//! Miscellaneous project utilities.

use std::fmt::{self, Formatter};

/// Format `size * size` characters into a pretty grid with column letters
/// and 1-indexed row numbers. `cell_iter` must yield exactly `size * size`
/// items in row-major order.
pub(crate) fn format_grid<T: Iterator<Item = char>>(
    size: usize,
    mut cell_iter: T,
    f: &mut Formatter,
) -> fmt::Result {
    write!(f, "   ")?;
    for col in 0..size {
        write!(f, "{} ", (b'A' + col as u8) as char)?;
    }

    for row in 0..size {
        write!(f, "\n{:>2} ", row + 1)?;
        for _ in 0..size {
            write!(f, "{} ", cell_iter.next().ok_or(fmt::Error)?)?;
        }
    }

    match cell_iter.next() {
        None => Ok(()),
        _ => Err(fmt::Error),
    }
}
