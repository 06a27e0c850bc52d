//! JSON encoding of engine state for protocol responses.
//!
//! A snapshot is the `GameState` fields plus `to_move`, so a client can tell
//! whose turn it is without re-deriving it from the history lengths.

use serde::Serialize;

use crate::board::{GameState, Side};

#[derive(Serialize)]
struct Snapshot<'a> {
    #[serde(flatten)]
    state: &'a GameState,
    to_move: Option<Side>,
}

/// Encodes a state snapshot as a single-line JSON object.
pub fn encode_snapshot(state: &GameState) -> Result<String, serde_json::Error> {
    serde_json::to_string(&Snapshot {
        state,
        to_move: state.to_move(),
    })
}

/// Decodes a snapshot back into a `GameState`; `to_move` is ignored.
pub fn decode_snapshot(json: &str) -> Result<GameState, serde_json::Error> {
    serde_json::from_str(json)
}

/// Encodes a list of country names as a JSON array.
pub fn encode_names(names: &[String]) -> Result<String, serde_json::Error> {
    serde_json::to_string(names)
}
