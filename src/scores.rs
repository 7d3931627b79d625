//! High score persistence
//!
//! The session treats the store as a best-effort collaborator: a missing or
//! corrupt record loads as zero and a failed write is logged and skipped, so
//! the in-memory high score stays authoritative for the running session.

use std::fs;
use std::path::PathBuf;

use log::{info, warn};
use serde::{Deserialize, Serialize};

/// Persistence collaborator for the single integer high score.
pub trait ScoreStore {
    /// Best score on record; 0 when missing or unreadable.
    fn load(&mut self) -> u32;
    /// Record a new best. Best-effort, never fatal.
    fn save(&mut self, score: u32);
}

/// Volatile store for tests and score-less front ends.
#[derive(Debug, Default)]
pub struct InMemoryScores {
    best: u32,
}

impl InMemoryScores {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ScoreStore for InMemoryScores {
    fn load(&mut self) -> u32 {
        self.best
    }

    fn save(&mut self, score: u32) {
        self.best = score;
    }
}

/// On-disk JSON record
#[derive(Debug, Serialize, Deserialize)]
struct ScoreRecord {
    best: u32,
}

/// File-backed store holding a small JSON record.
#[derive(Debug)]
pub struct JsonFileScores {
    path: PathBuf,
}

impl JsonFileScores {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ScoreStore for JsonFileScores {
    fn load(&mut self) -> u32 {
        match fs::read_to_string(&self.path) {
            Ok(json) => match serde_json::from_str::<ScoreRecord>(&json) {
                Ok(record) => record.best,
                Err(err) => {
                    warn!(
                        "ignoring corrupt score record at {}: {err}",
                        self.path.display()
                    );
                    0
                }
            },
            Err(_) => 0,
        }
    }

    fn save(&mut self, score: u32) {
        let record = ScoreRecord { best: score };
        let json = match serde_json::to_string(&record) {
            Ok(json) => json,
            Err(err) => {
                warn!("could not encode score record: {err}");
                return;
            }
        };
        match fs::write(&self.path, json) {
            Ok(()) => info!("saved best score {score}"),
            Err(err) => warn!("could not write {}: {err}", self.path.display()),
        }
    }
}
