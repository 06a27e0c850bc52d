//! Borderchain -- a border-chain country game engine.
//!
//! This binary reads commands from stdin and writes responses to stdout,
//! one line per response. Logs go to stderr.

use std::io::{self, BufRead};

use borderchain::board::AdjacencyGraph;
use borderchain::engine::Engine;
use borderchain::init_logging;
use borderchain::protocol::{parse_command, Session};
use tracing::error;

/// Runs the main protocol loop, reading commands from stdin
/// and writing responses to stdout.
fn main() {
    init_logging("warn");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    let mut session = Session::new(Engine::new(AdjacencyGraph::world()));

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(_) => break,
        };

        let cmd = match parse_command(&line) {
            Some(c) => c,
            None => continue,
        };

        match session.execute(cmd, &mut out) {
            Ok(true) => {}
            Ok(false) => break,
            Err(e) => {
                error!("failed to write response: {}", e);
                break;
            }
        }
    }
}
