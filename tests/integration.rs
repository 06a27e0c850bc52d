//! Integration tests for the borderchain engine binary.
//!
//! Tests full protocol sessions by spawning the engine process, sending
//! commands via stdin, and verifying stdout responses.

use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::process::{Command, Stdio};

use borderchain::board::GameState;
use borderchain::protocol::decode_snapshot;

/// Sends a sequence of commands to the engine and collects stdout lines.
fn run_engine(commands: &[&str]) -> Vec<String> {
    let exe = env!("CARGO_BIN_EXE_borderchain");
    let mut child = Command::new(exe)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .expect("failed to start borderchain");

    let mut stdin = child.stdin.take().unwrap();
    let stdout = child.stdout.take().unwrap();
    let reader = std::io::BufReader::new(stdout);

    for cmd in commands {
        writeln!(stdin, "{}", cmd).unwrap();
    }
    stdin.flush().unwrap();
    drop(stdin);

    let lines: Vec<String> = reader.lines().map(|l| l.unwrap()).collect();
    let status = child.wait().expect("failed to wait on child");
    assert!(status.success());
    lines
}

/// Parses the snapshot out of an `ok <json>` or `state <json>` line.
fn snapshot(line: &str) -> GameState {
    let json = line
        .strip_prefix("ok ")
        .or_else(|| line.strip_prefix("state "))
        .unwrap_or_else(|| panic!("not a snapshot line: {}", line));
    decode_snapshot(json).unwrap()
}

/// Splits a `reply <choice> <json>` line into the choice and snapshot.
fn reply(line: &str) -> (Option<String>, GameState) {
    let rest = line
        .strip_prefix("reply ")
        .unwrap_or_else(|| panic!("not a reply line: {}", line));
    let mut stream = serde_json::Deserializer::from_str(rest).into_iter::<serde_json::Value>();
    let choice: Option<String> = serde_json::from_value(stream.next().unwrap().unwrap()).unwrap();
    let offset = stream.byte_offset();
    (choice, decode_snapshot(rest[offset..].trim()).unwrap())
}

/// Writes a map file unique to this test and returns its path.
fn write_map(tag: &str, json: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!(
        "borderchain-it-{}-{}.json",
        tag,
        std::process::id()
    ));
    std::fs::write(&path, json).unwrap();
    path
}

const LINE_MAP: &str = r#"{
    "X": { "name": "X", "borders": ["Y"] },
    "Y": { "name": "Y", "borders": ["X", "Z"] },
    "Z": { "name": "Z", "borders": ["Y"] }
}"#;

#[test]
fn hello_handshake_with_protocol_version() {
    let lines = run_engine(&["hello", "quit"]);

    assert!(lines.iter().any(|l| l == "id name borderchain"));
    assert!(lines.iter().any(|l| l == "protocol_version 1"));

    // hellook must be the last line of the handshake
    assert_eq!(lines.last().map(String::as_str), Some("hellook"));
    let proto_idx = lines
        .iter()
        .position(|l| l == "protocol_version 1")
        .unwrap();
    assert!(proto_idx < lines.len() - 1);
}

#[test]
fn hello_handshake_includes_options() {
    let lines = run_engine(&["hello", "quit"]);
    for name in ["Seed", "ThinkTime", "Map"] {
        let prefix = format!("option name {} type", name);
        assert!(
            lines.iter().any(|l| l.starts_with(&prefix)),
            "missing option {}",
            name
        );
    }
}

#[test]
fn isready_returns_readyok() {
    let lines = run_engine(&["isready", "quit"]);
    assert_eq!(lines, ["readyok"]);
}

#[test]
fn quit_exits_cleanly() {
    let lines = run_engine(&["quit"]);
    assert!(lines.is_empty());
}

#[test]
fn eof_exits_cleanly() {
    let lines = run_engine(&["isready"]);
    assert_eq!(lines, ["readyok"]);
}

#[test]
fn unknown_and_malformed_commands_are_ignored() {
    let lines = run_engine(&[
        "foobar",
        "start impossible",
        "move",
        "setoption",
        "",
        "isready",
        "quit",
    ]);
    assert_eq!(lines, ["readyok"]);
}

#[test]
fn start_returns_fresh_state() {
    let lines = run_engine(&["start teško", "quit"]);
    let state = snapshot(&lines[0]);
    assert!(state.started);
    assert!(!state.over);
    assert_eq!(state.difficulty.name(), "hard");
    assert!(state.used_countries.is_empty());
    assert!(state.current.is_none());
}

#[test]
fn first_move_may_be_any_country() {
    let lines = run_engine(&["start easy", "move Japan", "move Mongolija", "quit"]);
    assert_eq!(lines[1], "rejected unknown_country unknown country: Japan");
    let state = snapshot(&lines[2]);
    assert_eq!(state.current.as_deref(), Some("Mongolija"));
    assert_eq!(state.human_history, ["Mongolija"]);
}

#[test]
fn lone_line_map_human_wins() {
    let path = write_map("line", LINE_MAP);
    let set_map = format!("setoption name Map value {}", path.display());
    let lines = run_engine(&[
        &set_map,
        "start medium",
        "move X",
        "reply",
        "move Z",
        "reply",
        "quit",
    ]);
    std::fs::remove_file(&path).unwrap();

    let (choice, after_reply) = reply(&lines[2]);
    assert_eq!(choice.as_deref(), Some("Y"));
    assert!(!after_reply.over);

    let end = snapshot(&lines[3]);
    assert!(end.over);
    assert_eq!(end.human_won, Some(true));
    assert_eq!(end.used_countries, ["X", "Y", "Z"]);

    // Finished matches do not move.
    let (choice, after) = reply(&lines[4]);
    assert_eq!(choice, None);
    assert_eq!(after, end);
}

#[test]
fn non_adjacent_move_leaves_state_unchanged() {
    let lines = run_engine(&[
        "start easy",
        "move Portugal",
        "reply",
        "move Kanada",
        "state",
        "quit",
    ]);
    let (choice, before) = reply(&lines[2]);
    assert_eq!(choice.as_deref(), Some("Španija"));
    assert_eq!(
        lines[3],
        "rejected not_adjacent Kanada does not border Španija"
    );
    assert_eq!(snapshot(&lines[4]), before);
}

#[test]
fn repeated_country_is_rejected() {
    let lines = run_engine(&[
        "start easy",
        "move Portugal",
        "reply",
        "move Portugal",
        "quit",
    ]);
    assert_eq!(
        lines[3],
        "rejected already_used Portugal has already been played"
    );
}

#[test]
fn hard_opponent_takes_the_dead_end() {
    let lines = run_engine(&[
        "setoption name Seed value 3",
        "start hard",
        "move Italija",
        "reply",
        "quit",
    ]);
    let (choice, state) = reply(&lines[2]);
    assert_eq!(choice.as_deref(), Some("San Marino"));
    assert!(state.over);
    assert_eq!(state.human_won, Some(false));
    assert_eq!(state.opponent_history, ["San Marino"]);
}

#[test]
fn legal_and_suggest_follow_the_chain() {
    let lines = run_engine(&[
        "start easy",
        "move Španija",
        "legal",
        "suggest gib",
        "suggest Kan",
        "quit",
    ]);
    assert_eq!(
        lines[2],
        r#"legal ["Francuska","Andora","Portugal","Gibraltar"]"#
    );
    assert_eq!(lines[3], r#"suggest "Gibraltar""#);
    assert_eq!(lines[4], "suggest null");
}

#[test]
fn reset_then_start_matches_fresh_start() {
    let fresh = run_engine(&["start medium", "quit"]);
    let lines = run_engine(&[
        "start hard",
        "move Nemačka",
        "reply",
        "reset",
        "start medium",
        "quit",
    ]);
    let cleared = snapshot(&lines[3]);
    assert!(!cleared.started);
    assert_eq!(snapshot(&lines[4]), snapshot(&fresh[0]));
}

#[test]
fn seeded_sessions_are_reproducible() {
    let script = [
        "setoption name Seed value 42",
        "start easy",
        "move Nemačka",
        "reply",
        "quit",
    ];
    let a = run_engine(&script);
    let b = run_engine(&script);
    assert_eq!(a, b);
}

#[test]
fn selfplay_binary_writes_jsonl() {
    let exe = env!("CARGO_BIN_EXE_selfplay");
    let output = Command::new(exe)
        .args(["--games", "4", "--threads", "2", "--seed", "9", "--quiet"])
        .output()
        .expect("failed to run selfplay");
    assert!(output.status.success());

    let text = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 4);
    for (i, line) in lines.iter().enumerate() {
        let value: serde_json::Value = serde_json::from_str(line).unwrap();
        assert_eq!(value["game_id"], i);
        assert!(value["moves"].as_array().is_some_and(|m| !m.is_empty()));
    }
}
