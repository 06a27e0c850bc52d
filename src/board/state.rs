//! Game state representation.
//!
//! Holds the complete snapshot of one match: difficulty, the countries
//! played so far by each side, and whether the match is over. Mutation goes
//! through the turn engine; everything else sees clones.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Strength of the automated opponent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

pub const ALL_DIFFICULTIES: [Difficulty; 3] =
    [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

impl Difficulty {
    /// Returns the lowercase protocol name.
    pub const fn name(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a difficulty label is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown difficulty: '{0}'")]
pub struct ParseDifficultyError(pub String);

impl FromStr for Difficulty {
    type Err = ParseDifficultyError;

    /// Accepts the English names and the Croatian labels.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "easy" | "lako" => Ok(Difficulty::Easy),
            "medium" | "srednje" => Ok(Difficulty::Medium),
            "hard" | "teško" | "tesko" => Ok(Difficulty::Hard),
            _ => Err(ParseDifficultyError(s.to_string())),
        }
    }
}

/// One of the two participants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Human,
    Opponent,
}

impl Side {
    pub const fn other(self) -> Side {
        match self {
            Side::Human => Side::Opponent,
            Side::Opponent => Side::Human,
        }
    }
}

/// Lifecycle of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    NotStarted,
    InProgress,
    Finished { human_won: bool },
}

/// Snapshot of a match.
///
/// `used_countries` is always the union of both histories in the order the
/// moves were made, and `current` is the last country played.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GameState {
    pub started: bool,
    pub over: bool,
    pub difficulty: Difficulty,
    pub used_countries: Vec<String>,
    pub current: Option<String>,
    /// Only meaningful once `over` is set.
    pub human_won: Option<bool>,
    pub human_history: Vec<String>,
    pub opponent_history: Vec<String>,
}

impl GameState {
    /// A fresh match at the given difficulty, awaiting the human's first move.
    pub fn new(difficulty: Difficulty) -> Self {
        GameState {
            started: true,
            difficulty,
            ..GameState::default()
        }
    }

    pub fn status(&self) -> Status {
        if !self.started {
            Status::NotStarted
        } else if self.over {
            Status::Finished {
                human_won: self.human_won.unwrap_or(false),
            }
        } else {
            Status::InProgress
        }
    }

    /// Returns whose move it is, or `None` if the match is not in progress.
    /// The human moves first, so it is the human's turn whenever both
    /// histories have the same length.
    pub fn to_move(&self) -> Option<Side> {
        if self.status() != Status::InProgress {
            return None;
        }
        if self.human_history.len() > self.opponent_history.len() {
            Some(Side::Opponent)
        } else {
            Some(Side::Human)
        }
    }

    pub fn is_used(&self, country: &str) -> bool {
        self.used_countries.iter().any(|c| c == country)
    }

    /// Both histories interleaved in play order, human first.
    pub fn move_sequence(&self) -> Vec<(Side, &str)> {
        let mut moves = Vec::with_capacity(self.used_countries.len());
        let rounds = self.human_history.len().max(self.opponent_history.len());
        for i in 0..rounds {
            if let Some(c) = self.human_history.get(i) {
                moves.push((Side::Human, c.as_str()));
            }
            if let Some(c) = self.opponent_history.get(i) {
                moves.push((Side::Opponent, c.as_str()));
            }
        }
        moves
    }

    /// Records a move by `side`. Legality is the caller's concern.
    pub(crate) fn push_move(&mut self, side: Side, country: &str) {
        self.used_countries.push(country.to_string());
        match side {
            Side::Human => self.human_history.push(country.to_string()),
            Side::Opponent => self.opponent_history.push(country.to_string()),
        }
        self.current = Some(country.to_string());
    }

    pub(crate) fn finish(&mut self, human_won: bool) {
        self.over = true;
        self.human_won = Some(human_won);
    }
}
