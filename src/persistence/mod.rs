//! High score persistence
//!
//! The game only needs two calls: load once at startup, save when a run sets
//! a new best. Stores are free to fail; callers log and carry on.
//!
//! `JsonFileStore` keeps a small preferences file:
//! ```json
//! { "high_score": 42 }
//! ```

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::PersistError;

/// Where the high score lives
pub trait HighScoreStore {
    fn load_high_score(&self) -> Result<u32, PersistError>;
    fn save_high_score(&mut self, score: u32) -> Result<(), PersistError>;
}

/// In-memory store
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    pub high_score: u32,
    /// Number of successful saves
    pub saves: u32,
}

impl MemoryStore {
    pub fn new(high_score: u32) -> Self {
        Self {
            high_score,
            saves: 0,
        }
    }
}

impl HighScoreStore for MemoryStore {
    fn load_high_score(&self) -> Result<u32, PersistError> {
        Ok(self.high_score)
    }

    fn save_high_score(&mut self, score: u32) -> Result<(), PersistError> {
        self.high_score = score;
        self.saves += 1;
        Ok(())
    }
}

/// On-disk record
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
struct Prefs {
    #[serde(default)]
    high_score: u32,
}

/// JSON preferences file
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl HighScoreStore for JsonFileStore {
    /// A missing file is a fresh install, not an error
    fn load_high_score(&self) -> Result<u32, PersistError> {
        let json = match fs::read_to_string(&self.path) {
            Ok(json) => json,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::info!("No high score found, starting fresh");
                return Ok(0);
            }
            Err(e) => return Err(e.into()),
        };
        let prefs: Prefs = serde_json::from_str(&json)?;
        log::info!("Loaded high score {}", prefs.high_score);
        Ok(prefs.high_score)
    }

    /// Write to a sibling temp file, then rename over the old one
    fn save_high_score(&mut self, score: u32) -> Result<(), PersistError> {
        let json = serde_json::to_string_pretty(&Prefs { high_score: score })?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;
        log::info!("High score saved ({})", score);
        Ok(())
    }
}
