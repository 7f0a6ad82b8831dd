//! The line-oriented wire format for remote moves.
//!
//! A move is one ASCII line: a fixed five-character tag followed by
//! `<col>,<row>`. The column is written first and parsed first. Decoding
//! strips the leading five characters without inspecting them, so any
//! five-character tag interoperates.

use oxello_engine::Position;
use std::io;
use thiserror::Error;

/// The tag prefixed to every move line.
pub const MOVE_TAG: &str = "12345";

/// A fault on the remote-move channel. All variants are fatal to the
/// channel: the session closes it and stops relying on remote input.
#[derive(Debug, Error)]
pub enum ChannelError {
    /// The peer closed the connection.
    #[error("peer disconnected")]
    Disconnected,
    /// A line arrived that does not decode as a move.
    #[error("malformed move line {0:?}")]
    MalformedMove(String),
    /// The underlying socket failed.
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Encode a move as a wire line, newline included.
pub(crate) fn encode(position: Position) -> String {
    format!("{}{},{}\n", MOVE_TAG, position.col, position.row)
}

/// Decode a wire line into a move.
pub(crate) fn decode(line: &str) -> Result<Position, ChannelError> {
    let malformed = || ChannelError::MalformedMove(line.trim_end().to_owned());
    let trimmed = line.trim_end_matches(|c| c == '\r' || c == '\n');
    let payload = trimmed.get(MOVE_TAG.len()..).ok_or_else(malformed)?;
    payload.parse().map_err(|_| malformed())
}
