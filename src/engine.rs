//! Turn engine.
//!
//! Owns the live match, the shared adjacency graph, and the opponent's
//! random source. Every state change goes through `commit_human_move` or
//! `commit_opponent_move`; callers receive clones of the state.
//!
//! The engine is synchronous: an opponent move is computed and applied in a
//! single call, and any "thinking" delay belongs to the caller.

use std::sync::Arc;

use rand::rngs::SmallRng;
use rand::SeedableRng;
use tracing::{debug, info};

use crate::board::{AdjacencyGraph, Difficulty, GameState, Side, Status};
use crate::movegen::{self, validate, MoveRejection};
use crate::search::choose_move;

/// Why a commit was refused. The state is unchanged in every case.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TurnError {
    #[error("no match has been started")]
    NotStarted,

    #[error("the match is over")]
    GameOver,

    #[error("it is not the {0:?} side's turn")]
    NotYourTurn(Side),

    #[error(transparent)]
    Rejected(#[from] MoveRejection),
}

impl TurnError {
    /// Short machine-readable reason.
    pub const fn kind(&self) -> &'static str {
        match self {
            TurnError::NotStarted => "not_started",
            TurnError::GameOver => "game_over",
            TurnError::NotYourTurn(_) => "not_your_turn",
            TurnError::Rejected(r) => r.kind(),
        }
    }
}

/// Holds one match and the resources needed to play it.
pub struct Engine {
    graph: Arc<AdjacencyGraph>,
    state: GameState,
    rng: SmallRng,
}

impl Engine {
    /// Creates an engine over `graph` with an entropy-seeded opponent.
    pub fn new(graph: Arc<AdjacencyGraph>) -> Self {
        Engine {
            graph,
            state: GameState::default(),
            rng: SmallRng::from_entropy(),
        }
    }

    /// Creates an engine whose opponent choices are reproducible.
    pub fn with_seed(graph: Arc<AdjacencyGraph>, seed: u64) -> Self {
        Engine {
            graph,
            state: GameState::default(),
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Reseeds the opponent's random source.
    pub fn reseed(&mut self, seed: u64) {
        self.rng = SmallRng::seed_from_u64(seed);
    }

    /// Swaps the map. The current match is discarded.
    pub fn set_graph(&mut self, graph: Arc<AdjacencyGraph>) {
        self.graph = graph;
        self.state = GameState::default();
    }

    pub fn graph(&self) -> &AdjacencyGraph {
        &self.graph
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Begins a fresh match at `difficulty`, discarding any previous one.
    pub fn start(&mut self, difficulty: Difficulty) -> GameState {
        self.state = GameState::new(difficulty);
        info!(%difficulty, "match started");
        self.state.clone()
    }

    /// Discards the current match.
    pub fn reset(&mut self) -> GameState {
        self.state = GameState::default();
        debug!("match reset");
        self.state.clone()
    }

    /// Validates and applies the human's move, returning the new state.
    pub fn submit_human_move(&mut self, country: &str) -> Result<GameState, TurnError> {
        self.commit_human_move(country)?;
        Ok(self.state.clone())
    }

    /// Applies a move by the human. If the opponent is left without a reply
    /// the match ends as a human win.
    pub fn commit_human_move(&mut self, country: &str) -> Result<(), TurnError> {
        self.check_turn(Side::Human)?;
        if let Err(rejection) = validate(&self.graph, &self.state, country) {
            debug!(country, reason = rejection.kind(), "move rejected");
            return Err(rejection.into());
        }

        self.state.push_move(Side::Human, country);
        debug!(country, "human moved");

        let replies = movegen::legal_moves_from(&self.graph, country, &self.state.used_countries);
        if replies.is_empty() {
            self.finish(true);
        }
        Ok(())
    }

    /// Applies the opponent's move. `None` means the opponent had no legal
    /// move and concedes. A concrete move must come from the legal-move set;
    /// it is not validated again.
    pub fn commit_opponent_move(&mut self, country: Option<&str>) -> Result<(), TurnError> {
        self.check_turn(Side::Opponent)?;

        let Some(country) = country else {
            self.finish(true);
            return Ok(());
        };

        debug_assert!(
            validate(&self.graph, &self.state, country).is_ok(),
            "opponent proposed illegal move {}",
            country
        );
        self.state.push_move(Side::Opponent, country);
        debug!(country, "opponent moved");

        let replies = movegen::legal_moves_from(&self.graph, country, &self.state.used_countries);
        if replies.is_empty() {
            self.finish(false);
        }
        Ok(())
    }

    /// Chooses the opponent's reply at the match's difficulty and applies
    /// it. Returns the new state and the chosen country. Outside the
    /// opponent's turn nothing changes and no country is returned.
    pub fn compute_and_apply_opponent_move(&mut self) -> (GameState, Option<String>) {
        if self.state.to_move() != Some(Side::Opponent) {
            debug!(status = ?self.state.status(), "no opponent move due");
            return (self.state.clone(), None);
        }

        let choice = choose_move(&self.graph, &self.state, &mut self.rng);
        // The turn was checked above, so the commit cannot fail.
        let _ = self.commit_opponent_move(choice.as_deref());
        (self.state.clone(), choice)
    }

    /// Returns the unused borders of `country`.
    pub fn legal_moves_from(&self, country: &str, used: &[String]) -> Vec<String> {
        movegen::legal_moves_from(&self.graph, country, used)
    }

    /// Returns the moves available to whoever plays next in the live match.
    pub fn legal_moves(&self) -> Vec<String> {
        movegen::legal_moves(&self.graph, &self.state)
    }

    /// Completes `prefix` to a legal move in the live match.
    pub fn suggest(&self, prefix: &str) -> Option<String> {
        movegen::suggest(&self.graph, &self.state, prefix)
    }

    fn check_turn(&self, side: Side) -> Result<(), TurnError> {
        match self.state.status() {
            Status::NotStarted => Err(TurnError::NotStarted),
            Status::Finished { .. } => Err(TurnError::GameOver),
            Status::InProgress if self.state.to_move() != Some(side) => {
                Err(TurnError::NotYourTurn(side))
            }
            Status::InProgress => Ok(()),
        }
    }

    fn finish(&mut self, human_won: bool) {
        self.state.finish(human_won);
        info!(
            human_won,
            moves = self.state.used_countries.len(),
            "match over"
        );
    }
}
