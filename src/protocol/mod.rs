//! Text protocol handling.
//!
//! This module implements the line-oriented command interface a front end
//! uses to drive the engine: command parsing, JSON state snapshots, and the
//! session that executes commands and writes responses.

pub mod parser;
pub mod session;
pub mod snapshot;

pub use parser::{parse_command, Command};
pub use session::{OptionError, Session};
pub use snapshot::{decode_snapshot, encode_names, encode_snapshot};
