//! Prefix completion for move entry.

use crate::board::{AdjacencyGraph, GameState};

use super::legal_moves;

/// Returns the first legal move whose name starts with `prefix`, ignoring
/// case. Candidates are tried in table order.
pub fn suggest(graph: &AdjacencyGraph, state: &GameState, prefix: &str) -> Option<String> {
    let prefix = prefix.trim().to_lowercase();
    if prefix.is_empty() {
        return None;
    }
    legal_moves(graph, state)
        .into_iter()
        .find(|c| c.to_lowercase().starts_with(&prefix))
}
