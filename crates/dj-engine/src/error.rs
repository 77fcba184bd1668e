//! Error types for the game engine.
//!
//! Input errors carry the French text shown to the player; the dispatcher
//! prints them and the turn ends without touching the game state.

use thiserror::Error;

/// Result type for game operations.
pub type GameResult<T> = Result<T, GameError>;

/// Errors that can occur while playing.
#[derive(Debug, Error)]
pub enum GameError {
    /// No exit in that direction.
    #[error("Vous ne pouvez pas aller par là.")]
    NoExit,

    /// The destination is locked and the key is not carried.
    #[error("Cette salle est verrouillée. Il vous faut un objet spécifique.")]
    RoomLocked,

    /// No item with that exact name lies in the current room.
    #[error("Objet introuvable ici.")]
    ItemNotHere,

    /// The inventory is at capacity.
    #[error("Inventaire plein. Vous ne pouvez pas prendre plus d'objets.")]
    InventoryFull,

    /// The inventory is empty.
    #[error("Vous n'avez rien à jeter.")]
    NothingToDrop,

    /// No carried item matches that name.
    #[error("Objet non trouvé dans votre inventaire.")]
    ItemNotInInventory,

    /// The two named items do not combine.
    #[error("Ces objets ne peuvent pas être combinés.")]
    NotCombinable,

    /// No character stands in the current room.
    #[error("Il n'y a personne ici.")]
    NobodyHere,

    /// No puzzle is bound to the current room.
    #[error("Il n'y a pas d'énigme ici.")]
    NoPuzzleHere,

    /// The command word is not recognised.
    #[error("Commande inconnue. Tapez 'aide' pour voir les options.")]
    UnknownCommand(String),

    /// No saved game exists.
    #[error("no saved game")]
    NoSave,

    /// The save file was written by a newer version.
    #[error("unsupported save version {0}")]
    UnsupportedSaveVersion(u32),

    /// Reading or writing the save file failed.
    #[error("save file error: {0}")]
    Io(#[from] std::io::Error),

    /// The save file is not valid JSON for a save record.
    #[error("save file is corrupt: {0}")]
    Json(#[from] serde_json::Error),

    /// World model error.
    #[error("{0}")]
    World(#[from] dj_core::DjError),
}
