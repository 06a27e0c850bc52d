//! Heuristic move features.
//!
//! Everything here looks at most one reply ahead. `used` is the set of
//! countries played before the candidate; the candidate itself is excluded
//! explicitly.

use crate::board::AdjacencyGraph;

/// Returns the replies left after playing `candidate`: its borders minus
/// `used` and minus `candidate` itself, in table order. Borders without a
/// graph entry are not replies.
pub fn replies<'g>(graph: &'g AdjacencyGraph, used: &[String], candidate: &str) -> Vec<&'g str> {
    graph
        .neighbors_of(candidate)
        .iter()
        .map(String::as_str)
        .filter(|n| *n != candidate && graph.contains(n) && !used.iter().any(|u| u == n))
        .collect()
}

/// Returns true if playing `candidate` leaves the other side without a move.
pub fn is_dead_end(graph: &AdjacencyGraph, used: &[String], candidate: &str) -> bool {
    replies(graph, used, candidate).is_empty()
}

/// Returns true if some reply to `candidate` is itself a dead end, so the
/// other side could win immediately.
///
/// A reply `r` wins when every border of `r` is in `used` or is
/// `candidate`. This does not look any deeper.
pub fn reply_can_win(graph: &AdjacencyGraph, used: &[String], candidate: &str) -> bool {
    replies(graph, used, candidate).into_iter().any(|r| {
        graph
            .neighbors_of(r)
            .iter()
            .all(|n| n == candidate || used.contains(n) || !graph.contains(n))
    })
}

/// Number of borders of `candidate`, ignoring what has been played.
pub fn branching_factor(graph: &AdjacencyGraph, candidate: &str) -> usize {
    graph.neighbors_of(candidate).len()
}

/// Features of one candidate move, as used by the opponent strategies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveFeatures {
    pub country: String,
    /// Replies left to the other side.
    pub reply_count: usize,
    pub reply_can_win: bool,
    pub branching: usize,
}

impl MoveFeatures {
    pub fn is_dead_end(&self) -> bool {
        self.reply_count == 0
    }
}

/// Computes the features of `candidate` given the countries in `used`.
pub fn features(graph: &AdjacencyGraph, used: &[String], candidate: &str) -> MoveFeatures {
    MoveFeatures {
        country: candidate.to_string(),
        reply_count: replies(graph, used, candidate).len(),
        reply_can_win: reply_can_win(graph, used, candidate),
        branching: branching_factor(graph, candidate),
    }
}
