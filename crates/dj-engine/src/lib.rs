//! Game engine for Donjon.
//!
//! Holds everything that changes while playing: the player's state, the
//! command parser, the actions behind each command, the turn loop, and the
//! bridge to saved games. All text I/O goes through an injected
//! [`Console`], so a whole game can be scripted.

mod actions;
/// Command parsing.
pub mod command;
/// Tunable game rules.
pub mod config;
/// The text I/O boundary.
pub mod console;
/// Error types for the engine.
pub mod error;
/// Player state management.
pub mod player;
/// Text views of rooms, the map and the player.
pub mod render;
/// Saved games.
pub mod save;
/// Game session management and the turn loop.
pub mod session;

pub use command::{Command, Direction, parse_command};
pub use config::GameConfig;
pub use console::{Console, ScriptedConsole};
pub use error::{GameError, GameResult};
pub use player::PlayerState;
pub use save::{DEFAULT_SAVE_FILE, JsonFileStore, MemoryStore, SaveRecord, SaveStore};
pub use session::{Ending, GameSession, LOAD_FAILED};
