//! Channels for exchanging moves with a remote peer.
//!
//! The channel is a thin pass-through: it frames and parses move lines but
//! never checks legality. The receiving [`Game`](oxello_engine::Game)
//! validates remote moves exactly as it validates local ones; only a
//! malformed *encoding* is a channel fault.

mod remote;
mod wire;

pub use remote::RemoteChannel;
pub use wire::{ChannelError, MOVE_TAG};
