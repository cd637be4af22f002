//! JSON file score store: keeps the latest final score.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use bicopt_core::error::StoreError;

use crate::host::ScoreStore;

/// On-disk record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreRecord {
    pub score: u32,
}

/// Writes `{ "score": n }` to a single JSON file.
#[derive(Debug, Clone)]
pub struct JsonScoreStore {
    path: PathBuf,
}

impl JsonScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store `score.json` inside `dir`.
    pub fn in_dir(dir: &Path) -> Self {
        Self::new(dir.join("score.json"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Latest saved score, or `None` if nothing has been saved yet.
    pub fn latest_score(&self) -> Result<Option<u32>, StoreError> {
        if !self.path.exists() {
            return Ok(None);
        }
        let json = fs::read_to_string(&self.path)?;
        let record: ScoreRecord = serde_json::from_str(&json)?;
        Ok(Some(record.score))
    }

    /// Forget the saved score.
    pub fn clear(&self) -> Result<(), StoreError> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
        }
        Ok(())
    }
}

impl ScoreStore for JsonScoreStore {
    fn save_score(&mut self, score: u32) -> Result<(), StoreError> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)?;
        }
        let json = serde_json::to_string_pretty(&ScoreRecord { score })?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}
