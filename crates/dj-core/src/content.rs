//! Content sources: where rooms, items, puzzles and characters come from.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::character::Character;
use crate::error::{DjError, DjResult};
use crate::item::Item;
use crate::puzzle::Puzzle;
use crate::room::Room;

/// File holding the room list, wrapped in a `{"rooms": [...]}` object.
pub const ROOMS_FILE: &str = "world.json";
/// File holding the item list.
pub const ITEMS_FILE: &str = "objets.json";
/// File holding the puzzle list.
pub const PUZZLES_FILE: &str = "enigmes.json";
/// File holding the character list.
pub const CHARACTERS_FILE: &str = "personnages.json";

/// A provider of world records.
///
/// Each collection loads independently so that one broken file does not
/// take the others down with it.
pub trait ContentSource {
    /// Load the room list.
    fn rooms(&self) -> DjResult<Vec<Room>>;
    /// Load the item list.
    fn items(&self) -> DjResult<Vec<Item>>;
    /// Load the puzzle list.
    fn puzzles(&self) -> DjResult<Vec<Puzzle>>;
    /// Load the character list.
    fn characters(&self) -> DjResult<Vec<Character>>;
}

/// Content read from JSON files in a directory.
#[derive(Debug, Clone)]
pub struct DirSource {
    dir: PathBuf,
}

#[derive(Deserialize)]
struct RoomsFile {
    #[serde(default)]
    rooms: Vec<Room>,
}

impl DirSource {
    /// Read content from `dir`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The directory being read.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn read<T: DeserializeOwned>(&self, file: &str) -> DjResult<T> {
        let path = self.dir.join(file);
        let text = fs::read_to_string(&path).map_err(|source| DjError::Io {
            path: path.clone(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| DjError::Parse { path, source })
    }
}

impl ContentSource for DirSource {
    fn rooms(&self) -> DjResult<Vec<Room>> {
        self.read::<RoomsFile>(ROOMS_FILE).map(|f| f.rooms)
    }

    fn items(&self) -> DjResult<Vec<Item>> {
        self.read(ITEMS_FILE)
    }

    fn puzzles(&self) -> DjResult<Vec<Puzzle>> {
        self.read(PUZZLES_FILE)
    }

    fn characters(&self) -> DjResult<Vec<Character>> {
        self.read(CHARACTERS_FILE)
    }
}

/// Content held in memory, handy for tests and embedded worlds.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    /// Rooms to hand out.
    pub rooms: Vec<Room>,
    /// Items to hand out.
    pub items: Vec<Item>,
    /// Puzzles to hand out.
    pub puzzles: Vec<Puzzle>,
    /// Characters to hand out.
    pub characters: Vec<Character>,
}

impl ContentSource for MemorySource {
    fn rooms(&self) -> DjResult<Vec<Room>> {
        Ok(self.rooms.clone())
    }

    fn items(&self) -> DjResult<Vec<Item>> {
        Ok(self.items.clone())
    }

    fn puzzles(&self) -> DjResult<Vec<Puzzle>> {
        Ok(self.puzzles.clone())
    }

    fn characters(&self) -> DjResult<Vec<Character>> {
        Ok(self.characters.clone())
    }
}
