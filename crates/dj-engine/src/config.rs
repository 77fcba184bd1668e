//! Configuration for a game session.

/// Configuration for a game session.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// RNG seed for reproducible traps. `None` draws from the OS.
    pub seed: Option<u64>,
    /// Maximum number of items picked up from rooms.
    pub max_inventory: usize,
    /// Health at the start of a game.
    pub starting_health: i32,
    /// A trap fires on one first visit in `trap_odds`. 0 disables traps.
    pub trap_odds: u32,
    /// Score lost when a trap fires.
    pub trap_penalty: i64,
    /// Score gained for a correct answer.
    pub puzzle_reward: i64,
    /// Score gained for picking up or receiving an item.
    pub pickup_reward: i64,
    /// Health lost for a wrong answer.
    pub wrong_answer_damage: i32,
    /// Identifier of the room a game starts in.
    pub start_room: String,
    /// Identifier of the room that wins the game.
    pub victory_room: String,
    /// Player name used when none is given.
    pub default_player_name: String,
    /// Quest log shown by `quetes`.
    pub quests: Vec<String>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: None,
            max_inventory: 3,
            starting_health: 100,
            trap_odds: 5,
            trap_penalty: 5,
            puzzle_reward: 10,
            pickup_reward: 5,
            wrong_answer_damage: 10,
            start_room: "start".to_string(),
            victory_room: "victoire".to_string(),
            default_player_name: "Aventurier".to_string(),
            quests: vec![
                "Trouver la clé en argent".to_string(),
                "Parler à l’ancien mage".to_string(),
            ],
        }
    }
}

impl GameConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the inventory capacity.
    pub fn with_max_inventory(mut self, max: usize) -> Self {
        self.max_inventory = max;
        self
    }

    /// Set the trap odds (0 disables traps, 1 fires on every first visit).
    pub fn with_trap_odds(mut self, odds: u32) -> Self {
        self.trap_odds = odds;
        self
    }

    /// Set the start room identifier.
    pub fn with_start_room(mut self, id: impl Into<String>) -> Self {
        self.start_room = id.into();
        self
    }

    /// Set the victory room identifier.
    pub fn with_victory_room(mut self, id: impl Into<String>) -> Self {
        self.victory_room = id.into();
        self
    }
}
