//! Player state management.

use std::collections::HashSet;

use dj_core::{Item, Room};

use crate::config::GameConfig;
use crate::error::{GameError, GameResult};

/// Everything about the player that changes while playing.
#[derive(Debug, Clone)]
pub struct PlayerState {
    /// The player's name.
    pub name: String,
    /// Carried items, in pick-up order.
    pub inventory: Vec<Item>,
    /// Maximum number of items [`PlayerState::add_item`] accepts.
    pub max_inventory: usize,
    /// Score. Traps can push it below zero.
    pub score: i64,
    /// Health. The game is lost at zero or below.
    pub health: i32,
    /// Identifiers of rooms entered at least once.
    pub visited: HashSet<String>,
    /// Question texts of puzzles answered correctly.
    pub solved: HashSet<String>,
    /// Hours spent waiting.
    pub turns_waited: u32,
    /// Quest log.
    pub quests: Vec<String>,
    /// Set once the game has ended, for any reason.
    pub game_over: bool,
    /// A copy of the room the player stands in.
    pub current_room: Room,
}

impl PlayerState {
    /// Create a fresh player standing in `start`.
    pub fn new(start: Room, config: &GameConfig) -> Self {
        Self {
            name: config.default_player_name.clone(),
            inventory: Vec::new(),
            max_inventory: config.max_inventory,
            score: 0,
            health: config.starting_health,
            visited: HashSet::new(),
            solved: HashSet::new(),
            turns_waited: 0,
            quests: config.quests.clone(),
            game_over: false,
            current_room: start,
        }
    }

    /// Check for a carried item by exact name.
    pub fn has_item(&self, name: &str) -> bool {
        self.inventory.iter().any(|i| i.name == name)
    }

    /// Find a carried item by name, ignoring case.
    pub fn find_item(&self, name: &str) -> Option<&Item> {
        self.inventory.iter().find(|i| i.name_matches(name))
    }

    /// Whether the inventory is at capacity.
    pub fn is_full(&self) -> bool {
        self.inventory.len() >= self.max_inventory
    }

    /// Add an item, respecting the capacity.
    pub fn add_item(&mut self, item: Item) -> GameResult<()> {
        if self.is_full() {
            return Err(GameError::InventoryFull);
        }
        self.inventory.push(item);
        Ok(())
    }

    /// Add an item regardless of capacity.
    pub fn receive_item(&mut self, item: Item) {
        self.inventory.push(item);
    }

    /// Remove the first carried item matching `name`, ignoring case.
    pub fn remove_item(&mut self, name: &str) -> Option<Item> {
        let pos = self.inventory.iter().position(|i| i.name_matches(name))?;
        Some(self.inventory.remove(pos))
    }

    /// Record a visit. Returns true the first time a room is entered.
    pub fn visit(&mut self, room_id: &str) -> bool {
        self.visited.insert(room_id.to_string())
    }

    /// Whether a room has been entered before.
    pub fn has_visited(&self, room_id: &str) -> bool {
        self.visited.contains(room_id)
    }

    /// Record a solved puzzle by its question text.
    pub fn mark_solved(&mut self, question: &str) {
        self.solved.insert(question.to_string());
    }

    /// Whether a puzzle, by question text, has been solved.
    pub fn has_solved(&self, question: &str) -> bool {
        self.solved.contains(question)
    }

    /// Lose health. Returns what is left.
    pub fn take_damage(&mut self, amount: i32) -> i32 {
        self.health -= amount;
        self.health
    }

    /// Whether the player has succumbed.
    pub fn is_dead(&self) -> bool {
        self.health <= 0
    }
}
