//! CLI smoke entry point.
//!
//! # Responsibility
//! - Replay newline-delimited JSON editor commands against a fresh session.
//! - Print each transition's announcement and focus target.
//!
//! Usage: `resume_cli [commands.jsonl]` (reads stdin when no path is given).
//! Blank lines and lines starting with `#` are skipped.

use log::{error, info};
use resume_core::{
    init_logging_from_config, EditorConfig, EditorObserver, EditorSession, EditorState,
    Notification,
};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::process::ExitCode;

struct PrintObserver;

impl EditorObserver for PrintObserver {
    fn on_transition(&mut self, _state: &EditorState, notification: &Notification) {
        if let Some(text) = &notification.announcement {
            println!("announce: {text}");
        }
        if let Some(focus) = &notification.focus {
            match serde_json::to_string(focus) {
                Ok(json) => println!("focus: {json}"),
                Err(err) => eprintln!("focus: <unserializable: {err}>"),
            }
        }
    }
}

fn main() -> ExitCode {
    let config = match EditorConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("config error: {err}");
            return ExitCode::FAILURE;
        }
    };
    if let Err(err) = init_logging_from_config(&config) {
        eprintln!("logging error: {err}");
        return ExitCode::FAILURE;
    }

    println!("resume_core ping={}", resume_core::ping());
    println!("resume_core version={}", resume_core::core_version());

    let reader: Box<dyn BufRead> = match std::env::args().nth(1) {
        Some(path) => match File::open(&path) {
            Ok(file) => Box::new(BufReader::new(file)),
            Err(err) => {
                eprintln!("cannot open `{path}`: {err}");
                return ExitCode::FAILURE;
            }
        },
        None => Box::new(BufReader::new(io::stdin())),
    };

    let mut session = EditorSession::new(&config, PrintObserver);
    for (index, line) in reader.lines().enumerate() {
        let line = match line {
            Ok(line) => line,
            Err(err) => {
                eprintln!("read error: {err}");
                return ExitCode::FAILURE;
            }
        };
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        if let Err(err) = session.dispatch_json(trimmed) {
            error!("event=replay_failed module=cli status=error line={}", index + 1);
            eprintln!("line {}: {err}", index + 1);
            return ExitCode::FAILURE;
        }
    }

    let state = session.state();
    match serde_json::to_string(&state.sections) {
        Ok(json) => println!("sections: {json}"),
        Err(err) => eprintln!("sections: <unserializable: {err}>"),
    }
    info!("event=replay_done module=cli status=ok");
    ExitCode::SUCCESS
}
