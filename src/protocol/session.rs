//! Protocol session.
//!
//! Holds the engine plus the options set through `setoption`, executes
//! parsed commands, and writes one response per command. The optional
//! thinking delay is applied here, before the opponent's reply is computed,
//! so the engine itself never blocks on a timer.

use std::collections::HashMap;
use std::fs;
use std::io::{self, Write};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use tracing::{info, warn};

use crate::board::{AdjacencyGraph, Difficulty, GraphError, Side};
use crate::engine::Engine;

use super::parser::Command;
use super::snapshot::{encode_names, encode_snapshot};

/// Upper bound for the `ThinkTime` option, in milliseconds.
const MAX_THINK_TIME_MS: u64 = 10_000;

/// Errors raised by `setoption`.
#[derive(Debug, thiserror::Error)]
pub enum OptionError {
    #[error("unknown option: '{0}'")]
    Unknown(String),

    #[error("option {0} needs a value")]
    MissingValue(String),

    #[error("invalid value '{value}' for option {name}")]
    InvalidValue { name: String, value: String },

    #[error("cannot read map file {path}: {source}")]
    ReadMap {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Map(#[from] GraphError),
}

/// Executes protocol commands against one engine.
pub struct Session {
    engine: Engine,
    options: HashMap<String, String>,
    think_time: Duration,
}

impl Session {
    pub fn new(engine: Engine) -> Self {
        Session {
            engine,
            options: HashMap::new(),
            think_time: Duration::ZERO,
        }
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    pub fn options(&self) -> &HashMap<String, String> {
        &self.options
    }

    pub fn think_time(&self) -> Duration {
        self.think_time
    }

    /// Applies an engine option. The option is only recorded if it applied.
    pub fn set_option(&mut self, name: String, value: Option<String>) -> Result<(), OptionError> {
        match name.as_str() {
            "Seed" => {
                let raw = value
                    .clone()
                    .ok_or_else(|| OptionError::MissingValue(name.clone()))?;
                let seed = parse_value::<u64>(&name, &raw)?;
                self.engine.reseed(seed);
            }
            "ThinkTime" => {
                let raw = value
                    .clone()
                    .ok_or_else(|| OptionError::MissingValue(name.clone()))?;
                let ms = parse_value::<u64>(&name, &raw)?;
                if ms > MAX_THINK_TIME_MS {
                    return Err(OptionError::InvalidValue { name, value: raw });
                }
                self.think_time = Duration::from_millis(ms);
            }
            "Map" => match &value {
                Some(path) => {
                    let json = fs::read_to_string(path).map_err(|source| OptionError::ReadMap {
                        path: path.clone(),
                        source,
                    })?;
                    let graph = AdjacencyGraph::from_json(&json)?;
                    for (a, b) in graph.asymmetric_pairs() {
                        warn!(country = %a, border = %b, "one-sided border in map");
                    }
                    info!(path = %path, countries = graph.len(), "map loaded");
                    self.engine.set_graph(Arc::new(graph));
                }
                None => self.engine.set_graph(AdjacencyGraph::world()),
            },
            _ => return Err(OptionError::Unknown(name)),
        }

        self.options.insert(name, value.unwrap_or_default());
        Ok(())
    }

    /// Runs one command. Returns `Ok(false)` once the session should end.
    pub fn execute<W: Write>(&mut self, cmd: Command, out: &mut W) -> io::Result<bool> {
        match cmd {
            Command::Hello => self.handle_hello(out)?,
            Command::IsReady => writeln!(out, "readyok")?,
            Command::SetOption { name, value } => {
                if let Err(e) = self.set_option(name, value) {
                    warn!("setoption failed: {}", e);
                }
            }
            Command::Start { difficulty } => self.handle_start(difficulty, out)?,
            Command::Move { country } => self.handle_move(&country, out)?,
            Command::Reply => self.handle_reply(out)?,
            Command::Legal { country } => self.handle_legal(country.as_deref(), out)?,
            Command::Suggest { prefix } => {
                let suggestion = self.engine.suggest(&prefix);
                writeln!(out, "suggest {}", serde_json::to_string(&suggestion)?)?;
            }
            Command::State => {
                writeln!(out, "state {}", encode_snapshot(self.engine.state())?)?;
            }
            Command::Countries => {
                let graph = self.engine.graph();
                let names: Vec<String> = graph.countries().map(str::to_string).collect();
                writeln!(out, "countries {}", encode_names(&names)?)?;
            }
            Command::Reset => {
                let state = self.engine.reset();
                writeln!(out, "ok {}", encode_snapshot(&state)?)?;
            }
            Command::Quit => return Ok(false),
        }
        out.flush()?;
        Ok(true)
    }

    /// Writes the handshake: id, options, protocol_version, and hellook.
    fn handle_hello<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "id name borderchain")?;
        writeln!(out, "id author borderchain")?;
        writeln!(out, "option name Seed type string default random")?;
        writeln!(
            out,
            "option name ThinkTime type spin default 0 min 0 max {}",
            MAX_THINK_TIME_MS
        )?;
        writeln!(out, "option name Map type string default builtin")?;
        writeln!(out, "protocol_version 1")?;
        writeln!(out, "hellook")
    }

    fn handle_start<W: Write>(&mut self, difficulty: Difficulty, out: &mut W) -> io::Result<()> {
        let state = self.engine.start(difficulty);
        writeln!(out, "ok {}", encode_snapshot(&state)?)
    }

    fn handle_move<W: Write>(&mut self, country: &str, out: &mut W) -> io::Result<()> {
        match self.engine.submit_human_move(country) {
            Ok(state) => writeln!(out, "ok {}", encode_snapshot(&state)?),
            Err(e) => writeln!(out, "rejected {} {}", e.kind(), e),
        }
    }

    /// Computes and applies the opponent's reply, after the configured delay.
    fn handle_reply<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        if !self.think_time.is_zero() && self.engine.state().to_move() == Some(Side::Opponent) {
            thread::sleep(self.think_time);
        }
        let (state, choice) = self.engine.compute_and_apply_opponent_move();
        writeln!(
            out,
            "reply {} {}",
            serde_json::to_string(&choice)?,
            encode_snapshot(&state)?
        )
    }

    fn handle_legal<W: Write>(&self, country: Option<&str>, out: &mut W) -> io::Result<()> {
        let moves = match country {
            Some(c) => self
                .engine
                .legal_moves_from(c, &self.engine.state().used_countries),
            None => self.engine.legal_moves(),
        };
        writeln!(out, "legal {}", encode_names(&moves)?)
    }
}

fn parse_value<T: std::str::FromStr>(name: &str, raw: &str) -> Result<T, OptionError> {
    raw.trim().parse::<T>().map_err(|_| OptionError::InvalidValue {
        name: name.to_string(),
        value: raw.to_string(),
    })
}
