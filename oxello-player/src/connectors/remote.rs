//! TCP transport for remote-peer play.

use super::wire::{self, ChannelError};
use async_std::io::prelude::*;
use async_std::io::BufReader;
use async_std::net::{TcpListener, TcpStream};
use oxello_engine::Position;
use std::net::Shutdown;
use tracing::{debug, info};

/// Prefix selecting the listening role in a connection string.
const HOST_PREFIX: &str = "host!:";

/// Which end of the channel this side is.
#[derive(Debug, Eq, PartialEq)]
enum Role {
    /// Bind the address and wait for the peer.
    Host(String),
    /// Connect to the peer at the address.
    Peer(String),
}

/// Split a connection string into a role and a socket address.
/// `host!:<identifier>` listens; a bare numeric identifier is a port bound
/// on all interfaces. Anything else connects as the initiator.
fn parse_connection(connection: &str) -> Role {
    let connection = connection.trim().to_ascii_lowercase();
    match connection.strip_prefix(HOST_PREFIX) {
        Some(identifier) if identifier.chars().all(|c| c.is_ascii_digit()) => {
            Role::Host(format!("0.0.0.0:{}", identifier))
        }
        Some(identifier) => Role::Host(identifier.to_owned()),
        None => Role::Peer(connection),
    }
}

/// A bidirectional move channel to one remote peer.
///
/// Reads block until a full line is available, so the host session runs
/// [`get_move`](RemoteChannel::get_move) on its own task and feeds the
/// result back into the turn controller. Any [`ChannelError`] is terminal:
/// there is no reconnect.
pub struct RemoteChannel {
    reader: BufReader<TcpStream>,
    writer: TcpStream,
    host: bool,
}

impl RemoteChannel {
    /// Open a channel from a connection string (see [`parse_connection`]).
    /// The host side does not return until a peer has connected.
    pub async fn open(connection: &str) -> Result<Self, ChannelError> {
        match parse_connection(connection) {
            Role::Host(address) => {
                let listener = TcpListener::bind(address.as_str()).await?;
                info!(%address, "waiting for a peer");
                let (stream, peer) = listener.accept().await?;
                info!(%peer, "peer connected");
                Ok(Self::from_stream(stream, true))
            }
            Role::Peer(address) => {
                let stream = TcpStream::connect(address.as_str()).await?;
                info!(%address, "connected to host");
                Ok(Self::from_stream(stream, false))
            }
        }
    }

    /// Wrap an established stream. `host` records which side accepted the
    /// connection.
    pub fn from_stream(stream: TcpStream, host: bool) -> Self {
        Self {
            reader: BufReader::new(stream.clone()),
            writer: stream,
            host,
        }
    }

    /// Whether this side accepted the connection.
    pub fn is_host(&self) -> bool {
        self.host
    }

    /// Send a move to the peer.
    pub async fn send_move(&mut self, position: Position) -> Result<(), ChannelError> {
        debug!(%position, "sending move");
        let line = wire::encode(position);
        self.writer.write_all(line.as_bytes()).await?;
        Ok(())
    }

    /// Receive the peer's next move, suspending until a full line arrives.
    ///
    /// The move is only decoded, never validated; the receiving game
    /// rejects illegal remote moves through its ordinary `put` path.
    pub async fn get_move(&mut self) -> Result<Position, ChannelError> {
        let mut line = String::new();
        let read = self.reader.read_line(&mut line).await?;
        if read == 0 {
            return Err(ChannelError::Disconnected);
        }
        let position = wire::decode(&line)?;
        debug!(%position, "received move");
        Ok(position)
    }

    /// Close the channel. A peer blocked in `get_move` observes the
    /// disconnect.
    pub fn close(self) -> Result<(), ChannelError> {
        self.writer.shutdown(Shutdown::Both)?;
        Ok(())
    }
}
