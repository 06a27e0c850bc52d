//! Command parser.
//!
//! Parses incoming protocol lines into structured `Command` variants that
//! the main loop dispatches on. Country names may contain spaces, so
//! commands that take one use the rest of the line verbatim.

use tracing::warn;

use crate::board::Difficulty;

/// A parsed client-to-engine command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Handshake; engine replies with its id, options, and `hellook`.
    Hello,

    /// Synchronization ping; engine must reply `readyok`.
    IsReady,

    /// Set an engine option: `setoption name <id> [value <x>]`.
    SetOption { name: String, value: Option<String> },

    /// Begin a new match: `start <difficulty>`.
    Start { difficulty: Difficulty },

    /// Submit the human's move: `move <country>`.
    Move { country: String },

    /// Ask the opponent to answer the last move.
    Reply,

    /// List legal moves, either in the live match or from a given country.
    Legal { country: Option<String> },

    /// Complete a prefix to a legal move: `suggest <prefix>`.
    Suggest { prefix: String },

    /// Print the current state.
    State,

    /// List every country on the map.
    Countries,

    /// Discard the current match.
    Reset,

    /// Terminate the engine process.
    Quit,
}

/// Parses a single line of input into a `Command`.
///
/// Returns `None` for empty lines or unrecognized commands. Malformed
/// arguments for known commands also return `None` after logging a warning.
pub fn parse_command(line: &str) -> Option<Command> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return None;
    }

    let (keyword, rest) = match trimmed.split_once(char::is_whitespace) {
        Some((k, r)) => (k, r.trim()),
        None => (trimmed, ""),
    };

    match keyword {
        "hello" => Some(Command::Hello),
        "isready" => Some(Command::IsReady),
        "reply" => Some(Command::Reply),
        "state" => Some(Command::State),
        "countries" => Some(Command::Countries),
        "reset" => Some(Command::Reset),
        "quit" => Some(Command::Quit),

        "setoption" => parse_setoption(rest),
        "start" => parse_start(rest),
        "move" => parse_move(rest),
        "legal" => Some(Command::Legal {
            country: (!rest.is_empty()).then(|| rest.to_string()),
        }),
        "suggest" => parse_suggest(rest),

        other => {
            warn!(command = other, "unknown command");
            None
        }
    }
}

/// Parses `setoption name <id> [value <x>]`.
fn parse_setoption(rest: &str) -> Option<Command> {
    let tokens: Vec<&str> = rest.split_whitespace().collect();
    // Minimum: name <id>
    if tokens.len() < 2 || tokens[0] != "name" {
        warn!("malformed setoption: expected 'setoption name <id> [value <x>]'");
        return None;
    }

    let value_idx = tokens.iter().position(|&t| t == "value");

    let (name, value) = match value_idx {
        Some(vi) => {
            let name_parts = &tokens[1..vi];
            let value_parts = &tokens[vi + 1..];
            if name_parts.is_empty() {
                warn!("malformed setoption: empty name");
                return None;
            }
            let value = if value_parts.is_empty() {
                None
            } else {
                Some(value_parts.join(" "))
            };
            (name_parts.join(" "), value)
        }
        None => (tokens[1..].join(" "), None),
    };

    Some(Command::SetOption { name, value })
}

/// Parses `start <difficulty>`.
fn parse_start(rest: &str) -> Option<Command> {
    if rest.is_empty() {
        warn!("malformed start: expected 'start <easy|medium|hard>'");
        return None;
    }
    match rest.parse::<Difficulty>() {
        Ok(difficulty) => Some(Command::Start { difficulty }),
        Err(e) => {
            warn!("{}", e);
            None
        }
    }
}

/// Parses `move <country>`.
fn parse_move(rest: &str) -> Option<Command> {
    if rest.is_empty() {
        warn!("malformed move: expected 'move <country>'");
        return None;
    }
    Some(Command::Move {
        country: rest.to_string(),
    })
}

/// Parses `suggest <prefix>`.
fn parse_suggest(rest: &str) -> Option<Command> {
    if rest.is_empty() {
        warn!("malformed suggest: expected 'suggest <prefix>'");
        return None;
    }
    Some(Command::Suggest {
        prefix: rest.to_string(),
    })
}
