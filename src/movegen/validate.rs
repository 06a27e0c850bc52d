//! Move legality checking.
//!
//! Rules are checked in a fixed order: adjacency to the current country,
//! then reuse, then whether the country exists at all. The order decides
//! which reason is reported when several apply.

use crate::board::{AdjacencyGraph, GameState};

/// Why a proposed move was refused.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveRejection {
    #[error("{candidate} does not border {current}")]
    NotAdjacent { candidate: String, current: String },

    #[error("{0} has already been played")]
    AlreadyUsed(String),

    #[error("unknown country: {0}")]
    UnknownCountry(String),
}

impl MoveRejection {
    /// Short machine-readable reason, stable across message changes.
    pub const fn kind(&self) -> &'static str {
        match self {
            MoveRejection::NotAdjacent { .. } => "not_adjacent",
            MoveRejection::AlreadyUsed(_) => "already_used",
            MoveRejection::UnknownCountry(_) => "unknown_country",
        }
    }
}

/// Checks whether `candidate` may be played next. Never mutates anything.
///
/// Before the first move (`state.current` unset) any known, unused country
/// is legal.
pub fn validate(
    graph: &AdjacencyGraph,
    state: &GameState,
    candidate: &str,
) -> Result<(), MoveRejection> {
    if let Some(current) = &state.current {
        if !graph.is_adjacent(current, candidate) {
            return Err(MoveRejection::NotAdjacent {
                candidate: candidate.to_string(),
                current: current.clone(),
            });
        }
    }

    if state.is_used(candidate) {
        return Err(MoveRejection::AlreadyUsed(candidate.to_string()));
    }

    if !graph.contains(candidate) {
        return Err(MoveRejection::UnknownCountry(candidate.to_string()));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Difficulty, Side};

    fn graph() -> AdjacencyGraph {
        AdjacencyGraph::from_table(&[("X", &["Y"]), ("Y", &["X", "Z", "Ghost"]), ("Z", &["Y"])])
    }

    #[test]
    fn any_known_country_opens() {
        let graph = graph();
        let state = GameState::new(Difficulty::Easy);
        for c in ["X", "Y", "Z"] {
            assert_eq!(validate(&graph, &state, c), Ok(()));
        }
    }

    #[test]
    fn unknown_opening_rejected() {
        let graph = graph();
        let state = GameState::new(Difficulty::Easy);
        assert_eq!(
            validate(&graph, &state, "Atlantis"),
            Err(MoveRejection::UnknownCountry("Atlantis".to_string()))
        );
    }

    #[test]
    fn non_neighbor_rejected() {
        let graph = graph();
        let mut state = GameState::new(Difficulty::Easy);
        state.push_move(Side::Human, "X");
        assert_eq!(
            validate(&graph, &state, "Z"),
            Err(MoveRejection::NotAdjacent {
                candidate: "Z".to_string(),
                current: "X".to_string(),
            })
        );
    }

    #[test]
    fn used_neighbor_rejected() {
        let graph = graph();
        let mut state = GameState::new(Difficulty::Easy);
        state.push_move(Side::Human, "X");
        state.push_move(Side::Opponent, "Y");
        assert_eq!(
            validate(&graph, &state, "X"),
            Err(MoveRejection::AlreadyUsed("X".to_string()))
        );
        assert_eq!(validate(&graph, &state, "Z"), Ok(()));
    }

    #[test]
    fn adjacency_checked_before_reuse() {
        let graph = graph();
        let mut state = GameState::new(Difficulty::Easy);
        state.push_move(Side::Human, "X");
        state.push_move(Side::Opponent, "Y");
        state.push_move(Side::Human, "Z");
        // X is used and does not border Z: adjacency wins.
        assert!(matches!(
            validate(&graph, &state, "X"),
            Err(MoveRejection::NotAdjacent { .. })
        ));
    }

    #[test]
    fn listed_border_without_entry_is_unknown() {
        let graph = graph();
        let mut state = GameState::new(Difficulty::Easy);
        state.push_move(Side::Human, "Y");
        assert_eq!(
            validate(&graph, &state, "Ghost"),
            Err(MoveRejection::UnknownCountry("Ghost".to_string()))
        );
    }

    #[test]
    fn rejection_kinds_and_messages() {
        let e = MoveRejection::NotAdjacent {
            candidate: "Z".to_string(),
            current: "X".to_string(),
        };
        assert_eq!(e.kind(), "not_adjacent");
        assert_eq!(e.to_string(), "Z does not border X");
        assert_eq!(
            MoveRejection::AlreadyUsed("X".into()).kind(),
            "already_used"
        );
        assert_eq!(
            MoveRejection::UnknownCountry("Q".into()).to_string(),
            "unknown country: Q"
        );
    }
}
