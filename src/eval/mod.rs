//! Position features.
//!
//! Scores candidate moves from the mover's perspective: how many replies a
//! move leaves, whether it is a dead end, and whether some reply to it is
//! itself a dead end.

pub(crate) mod heuristic;

pub use heuristic::{
    branching_factor, features, is_dead_end, replies, reply_can_win, MoveFeatures,
};
