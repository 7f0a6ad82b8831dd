//! Computer players and remote-peer play built on [`oxello_engine`].
//!
//! The crate provides:
//!
//!  - [`SearchStrategy`]: pluggable move selection over a read-only board
//!    view, with a seeded-random baseline and an evaluation-driven variant.
//!  - [`EvaluationStrategy`]: pluggable scoring of a hypothetical placement
//!    (disc count, positional weights, or depth-bounded alpha-beta).
//!  - [`connectors`]: the line-oriented TCP channel for playing against a
//!    remote peer.

pub mod connectors;
pub mod eval;
pub mod strategy;

mod minimax;

pub use connectors::{ChannelError, RemoteChannel, MOVE_TAG};
pub use eval::{DiscCount, EvaluationStrategy, Minimax, PositionalWeight};
pub use strategy::{BestEvaluation, RandomSelection, SearchStrategy};
