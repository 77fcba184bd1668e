//! Core types for Donjon: rooms, items, puzzles, characters, and the world model.
//!
//! This crate holds the dungeon's static content and the lookups the game
//! engine runs against it. It knows nothing about the player; you can build
//! a [`World`] programmatically or load one from a [`ContentSource`].

/// Non-player characters.
pub mod character;
/// Content sources and the on-disk file layout.
pub mod content;
/// Error types used throughout the crate.
pub mod error;
/// Items and their combination rules.
pub mod item;
/// Riddles bound to rooms.
pub mod puzzle;
/// Rooms and their exits.
pub mod room;
/// Consistency checks over loaded content.
pub mod validate;
/// The world model that owns every record.
pub mod world;

/// Re-export record types.
pub use character::Character;
/// Re-export content sources.
pub use content::{ContentSource, DirSource, MemorySource};
/// Re-export error types.
pub use error::{DjError, DjResult};
/// Re-export item types and sentinels.
pub use item::{DEFAULT_COMBINED_NAME, INVENTORY_LOCATION, Item};
/// Re-export puzzle type.
pub use puzzle::Puzzle;
/// Re-export room type.
pub use room::Room;
/// Re-export validation types.
pub use validate::ContentIssue;
/// Re-export the world model.
pub use world::World;
