//! Endgame Move Picker CLI
//!
//! Reads a position (FEN) plus its oracle-labeled legal moves from a JSON
//! document, runs the selection pipeline, and prints the chosen move as a
//! JSON report. The board, the tablebase probing, and any persistence stay
//! on the caller's side of this interface.
//!
//! # Usage
//!
//! ```bash
//! # Select a move for the request in request.json
//! picker select request.json
//!
//! # Read the request from stdin, with a custom threshold config
//! cat request.json | picker select - --config picker.toml
//! ```

use std::env;
use std::fs;
use std::io::Read;

use anyhow::{bail, Context, Result};
use cozy_chess::Board;
use endgame_core::{select_with_fallback, Candidate, OracleVerdict, SelectorConfig};
use fallback_selector::FallbackSelector;
use log::warn;
use practical_selector::PracticalSelector;
use serde::{Deserialize, Serialize};

/// Selection request: one position and its oracle-labeled moves.
#[derive(Debug, Deserialize)]
struct Request {
    /// Position with the side to move, as FEN.
    fen: String,
    /// Oracle-labeled legal moves, best first.
    moves: Vec<LabeledMove>,
}

#[derive(Debug, Deserialize)]
struct LabeledMove {
    uci: String,
    /// -1/0/+1 for the side to move after the move.
    wdl: i8,
    /// Signed distance-to-mate in half-moves; absent for draws.
    #[serde(default)]
    dtm: Option<i32>,
}

/// Selection report printed to stdout.
#[derive(Debug, Serialize)]
struct Report {
    uci: String,
    outcome: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    dtm: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    material: Option<&'static str>,
}

fn print_usage() {
    println!("Endgame Move Picker");
    println!();
    println!("Usage:");
    println!("  picker select <request.json | -> [--config FILE]");
    println!();
    println!("The request document:");
    println!("  {{ \"fen\": \"...\", \"moves\": [{{ \"uci\": \"e2e4\", \"wdl\": 0, \"dtm\": null }}] }}");
    println!();
    println!("wdl is stated for the side to move after the move; the picker");
    println!("inverts it to the mover's perspective.");
}

fn read_request(path: &str) -> Result<Request> {
    let text = if path == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read request from stdin")?;
        buf
    } else {
        fs::read_to_string(path).with_context(|| format!("failed to read request {}", path))?
    };
    serde_json::from_str(&text).context("failed to parse request document")
}

fn load_config(path: Option<&str>) -> Result<SelectorConfig> {
    match path {
        Some(p) => {
            let text =
                fs::read_to_string(p).with_context(|| format!("failed to read config {}", p))?;
            toml::from_str(&text).with_context(|| format!("failed to parse config {}", p))
        }
        None => Ok(SelectorConfig::default()),
    }
}

/// Convert the request's labeled moves, dropping entries that do not parse.
fn candidates_from(request: &Request) -> Vec<Candidate> {
    let mut candidates = Vec::with_capacity(request.moves.len());
    for labeled in &request.moves {
        match labeled.uci.parse() {
            Ok(mv) => candidates.push(Candidate::from_oracle(
                mv,
                OracleVerdict {
                    wdl: labeled.wdl,
                    dtm: labeled.dtm,
                },
            )),
            Err(_) => warn!("skipping unparsable move identifier {:?}", labeled.uci),
        }
    }
    candidates
}

fn run_select(args: &[String]) -> Result<()> {
    let mut request_path = None;
    let mut config_path = None;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--config" | "-c" => {
                if i + 1 >= args.len() {
                    bail!("--config requires a file argument");
                }
                config_path = Some(args[i + 1].as_str());
                i += 1;
            }
            other if request_path.is_none() => request_path = Some(other),
            other => bail!("unexpected argument: {}", other),
        }
        i += 1;
    }

    let request_path = match request_path {
        Some(p) => p,
        None => bail!("select requires a request file (or - for stdin)"),
    };

    let request = read_request(request_path)?;
    let config = load_config(config_path)?;
    let board: Board = request
        .fen
        .parse()
        .map_err(|e| anyhow::anyhow!("invalid FEN {:?}: {:?}", request.fen, e))?;
    let candidates = candidates_from(&request);

    let mut primary = PracticalSelector::new();
    let mut fallback = FallbackSelector::new();
    match select_with_fallback(&mut primary, &mut fallback, &board, &candidates, &config) {
        Some(selection) => {
            let report = Report {
                uci: selection.choice.uci(),
                outcome: selection.choice.outcome.label(),
                dtm: selection.choice.dtm,
                material: selection.material.map(|m| m.label()),
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
            Ok(())
        }
        None => bail!("the request contains no usable candidate moves"),
    }
}

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();
    match args.first().map(String::as_str) {
        Some("select") => {
            if let Err(err) = run_select(&args[1..]) {
                eprintln!("Error: {:#}", err);
                std::process::exit(1);
            }
        }
        Some("help") | None => print_usage(),
        Some(other) => {
            eprintln!("Unknown command: {}", other);
            print_usage();
            std::process::exit(2);
        }
    }
}

#[cfg(test)]
mod main_tests {
    use super::*;

    #[test]
    fn request_document_round_trip() {
        let text = r#"{
            "fen": "8/8/8/8/3kp3/8/4K3/8 w - - 0 1",
            "moves": [
                { "uci": "e2d2", "wdl": 0 },
                { "uci": "e2f2", "wdl": 0, "dtm": null },
                { "uci": "not-a-move", "wdl": 0 }
            ]
        }"#;
        let request: Request = serde_json::from_str(text).unwrap();
        assert_eq!(request.moves.len(), 3);

        let candidates = candidates_from(&request);
        assert_eq!(candidates.len(), 2, "the malformed identifier is dropped");
        assert_eq!(candidates[0].uci(), "e2d2");
    }

    #[test]
    fn config_defaults_apply_without_a_file() {
        let config = load_config(None).unwrap();
        assert_eq!(config.collapse_gap_plies, 12);
    }
}
