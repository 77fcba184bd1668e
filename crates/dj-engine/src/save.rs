//! Saving and restoring the player's progress.
//!
//! A save holds a summary of the player, not the whole session: carried
//! items are kept by name only, and loading restores name, score, health
//! and visited rooms. Inventory and solved puzzles are not restored.

use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{GameError, GameResult};
use crate::player::PlayerState;

/// Current save format version.
pub const SAVE_VERSION: u32 = 1;

/// Default save file name.
pub const DEFAULT_SAVE_FILE: &str = "save.json";

fn current_version() -> u32 {
    SAVE_VERSION
}

fn full_health() -> i32 {
    100
}

/// The persisted subset of a player's state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaveRecord {
    /// Format version.
    #[serde(default = "current_version")]
    pub version: u32,
    /// Player name. Empty keeps the current name on load.
    #[serde(default)]
    pub player: String,
    /// Score.
    #[serde(default)]
    pub score: i64,
    /// Health.
    #[serde(rename = "vie", default = "full_health")]
    pub health: i32,
    /// Identifiers of visited rooms, sorted.
    #[serde(default)]
    pub visited: Vec<String>,
    /// Names of carried items.
    #[serde(default)]
    pub inventory: Vec<String>,
    /// When the save was taken.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saved_at: Option<DateTime<Utc>>,
}

impl SaveRecord {
    /// Capture the persisted fields of a player.
    pub fn from_player(player: &PlayerState) -> Self {
        let mut visited: Vec<String> = player.visited.iter().cloned().collect();
        visited.sort();
        Self {
            version: SAVE_VERSION,
            player: player.name.clone(),
            score: player.score,
            health: player.health,
            visited,
            inventory: player.inventory.iter().map(|i| i.name.clone()).collect(),
            saved_at: Some(Utc::now()),
        }
    }

    /// Restore name, score, health and visited rooms onto a player.
    pub fn apply_to(&self, player: &mut PlayerState) {
        if !self.player.is_empty() {
            player.name = self.player.clone();
        }
        player.score = self.score;
        player.health = self.health;
        player.visited = self.visited.iter().cloned().collect();
    }

    fn check_version(self) -> GameResult<Self> {
        if self.version > SAVE_VERSION {
            return Err(GameError::UnsupportedSaveVersion(self.version));
        }
        Ok(self)
    }
}

/// Somewhere to keep a save.
pub trait SaveStore {
    /// Persist a record, replacing any previous one.
    fn save(&self, record: &SaveRecord) -> GameResult<()>;
    /// Read back the last record.
    fn load(&self) -> GameResult<SaveRecord>;
}

/// A save kept as pretty-printed JSON in a file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Store saves at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The save file location.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for JsonFileStore {
    fn default() -> Self {
        Self::new(DEFAULT_SAVE_FILE)
    }
}

impl SaveStore for JsonFileStore {
    fn save(&self, record: &SaveRecord) -> GameResult<()> {
        let json = serde_json::to_string_pretty(record)?;
        fs::write(&self.path, json)?;
        Ok(())
    }

    fn load(&self) -> GameResult<SaveRecord> {
        let text = fs::read_to_string(&self.path)?;
        let record: SaveRecord = serde_json::from_str(&text)?;
        record.check_version()
    }
}

/// A save kept in memory. Clones share the same slot.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    slot: Rc<RefCell<Option<SaveRecord>>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// The last record saved, if any.
    pub fn last(&self) -> Option<SaveRecord> {
        self.slot.borrow().clone()
    }
}

impl SaveStore for MemoryStore {
    fn save(&self, record: &SaveRecord) -> GameResult<()> {
        *self.slot.borrow_mut() = Some(record.clone());
        Ok(())
    }

    fn load(&self) -> GameResult<SaveRecord> {
        self.last()
            .ok_or(GameError::NoSave)
            .and_then(SaveRecord::check_version)
    }
}
