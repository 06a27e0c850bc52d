//! Board representation and game-state types.
//!
//! Contains the country table, the adjacency graph built from it, and the
//! per-match game state.

pub mod adjacency;
pub mod country;
pub mod state;

pub use adjacency::{AdjacencyGraph, Country, GraphError};
pub use country::{COUNTRY_BORDERS, COUNTRY_COUNT};
pub use state::{Difficulty, GameState, ParseDifficultyError, Side, Status, ALL_DIFFICULTIES};
