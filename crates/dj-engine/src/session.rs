//! Game session management and the turn loop.

use log::{debug, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use dj_core::World;

use crate::command::{Command, parse_command};
use crate::config::GameConfig;
use crate::console::Console;
use crate::error::{GameError, GameResult};
use crate::player::PlayerState;
use crate::render;
use crate::save::{SaveRecord, SaveStore};

/// Printed when a saved game cannot be restored.
pub const LOAD_FAILED: &str = "Échec du chargement de la sauvegarde.";

/// How a game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ending {
    /// The player reached the victory room.
    Victory,
    /// Health ran out or a deadly puzzle was failed.
    Defeat,
    /// The player typed `quitter`.
    Quit,
    /// Input ran out before the game ended.
    EndOfInput,
}

/// A single-player game: the world, the player, and the rules tying them.
pub struct GameSession {
    pub(crate) world: World,
    pub(crate) player: PlayerState,
    pub(crate) config: GameConfig,
    rng: StdRng,
    store: Box<dyn SaveStore>,
    ending: Option<Ending>,
}

impl GameSession {
    /// Create a session with the player in the configured start room.
    ///
    /// Falls back to the first room when the start room is missing.
    pub fn new(world: World, config: GameConfig, store: Box<dyn SaveStore>) -> GameResult<Self> {
        let start = world.start_room(&config.start_room)?.clone();
        let player = PlayerState::new(start, &config);
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        Ok(Self {
            world,
            player,
            config,
            rng,
            store,
            ending: None,
        })
    }

    /// Get the world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Get the player state.
    pub fn player(&self) -> &PlayerState {
        &self.player
    }

    /// Get a mutable reference to the player state.
    pub fn player_mut(&mut self) -> &mut PlayerState {
        &mut self.player
    }

    /// Get the configuration.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// How the game ended, once it has.
    pub fn ending(&self) -> Option<Ending> {
        self.ending
    }

    /// Whether the game has ended.
    pub fn is_over(&self) -> bool {
        self.player.game_over
    }

    // -----------------------------------------------------------------------
    // Game loop
    // -----------------------------------------------------------------------

    /// Greet the player, ask for a name, then play until the game ends.
    pub fn start(&mut self, console: &mut dyn Console) -> Ending {
        let answer = console.prompt("Bienvenue dans le donjon mystique ! \n Quel est votre nom ?");
        if let Some(name) = answer
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty())
        {
            self.player.name = name;
        }
        console.print_line(&format!(
            "Bonjour {} ! L'aventure commence...\n",
            self.player.name
        ));
        self.run(console)
    }

    /// Play turns until the game ends.
    pub fn run(&mut self, console: &mut dyn Console) -> Ending {
        while !self.player.game_over {
            self.play_turn(console);
        }
        self.ending.unwrap_or(Ending::Quit)
    }

    /// Play one turn: describe the room, spring traps, then read and run
    /// one command.
    pub fn play_turn(&mut self, console: &mut dyn Console) {
        console.print_line(&render::describe_room(&self.world, &self.player.current_room));
        self.enter_room(console);

        let Some(line) = console.prompt(&render::command_prompt()) else {
            debug!("input closed, leaving the game");
            self.quit(console, Ending::EndOfInput);
            return;
        };

        if line.is_empty() {
            console.print_line("Commande vide. Réessayez.");
            return;
        }

        self.dispatch(parse_command(&line), console);
        self.check_victory(console);
    }

    /// Run one command. Input errors are shown to the player and go no
    /// further.
    pub fn dispatch(&mut self, command: Command, console: &mut dyn Console) {
        if let Err(e) = self.execute(command, console) {
            console.print_line(&e.to_string());
        }
    }

    /// Run one command, reading any follow-up input it needs from `console`.
    pub fn execute(&mut self, command: Command, console: &mut dyn Console) -> GameResult<()> {
        let output = match command {
            Command::Move { direction } => self.do_move(direction.name())?,
            Command::Take => {
                let Some(name) = console.prompt("Quel objet voulez-vous prendre ?") else {
                    return Ok(());
                };
                self.do_take(&name)?
            }
            Command::Drop => {
                if self.player.inventory.is_empty() {
                    return Err(GameError::NothingToDrop);
                }
                let Some(name) = console.prompt("Quel objet voulez-vous jeter ?") else {
                    return Ok(());
                };
                self.do_drop(&name)?
            }
            Command::Combine => {
                let Some(pair) =
                    console.prompt("Quels objets voulez-vous combiner ? (séparés par une virgule)")
                else {
                    return Ok(());
                };
                self.do_combine(&pair)?
            }
            Command::Talk => self.do_talk()?,
            Command::Puzzle => return self.do_puzzles(console),
            Command::Inventory => render::render_inventory(&self.player),
            Command::Help => render::HELP_TEXT.to_string(),
            Command::Map => render::render_map(&self.world, &self.player),
            Command::Wait => self.do_wait(),
            Command::Quests => render::render_quests(&self.player),
            Command::Quit => {
                self.quit(console, Ending::Quit);
                return Ok(());
            }
            Command::Unknown { input } => return Err(GameError::UnknownCommand(input)),
        };

        if !output.is_empty() {
            console.print_line(&output);
        }
        Ok(())
    }

    /// Mark the current room visited. The first visit may spring a trap.
    ///
    /// Returns true when a trap fired.
    pub fn enter_room(&mut self, console: &mut dyn Console) -> bool {
        let room_id = self.player.current_room.id.clone();
        if !self.player.visit(&room_id) || !self.roll_trap() {
            return false;
        }
        debug!("trap sprung in '{room_id}'");
        console.print_line(&format!(
            "\n BOUM ! Un piège vous fait perdre {} points.",
            self.config.trap_penalty
        ));
        self.player.score -= self.config.trap_penalty;
        true
    }

    fn roll_trap(&mut self) -> bool {
        self.config.trap_odds > 0 && self.rng.random_ratio(1, self.config.trap_odds)
    }

    /// End the game if the player stands in the victory room.
    pub fn check_victory(&mut self, console: &mut dyn Console) {
        if self.player.game_over || self.player.current_room.id != self.config.victory_room {
            return;
        }
        console.print_line(&format!(
            "\nFélicitations, {} ! Vous avez atteint la salle finale.",
            self.player.name
        ));
        console.print_line(&render::render_summary(&self.player));
        self.save_game();
        self.finish(Ending::Victory);
    }

    fn quit(&mut self, console: &mut dyn Console, ending: Ending) {
        self.save_game();
        console.print_line(&render::render_summary(&self.player));
        self.finish(ending);
    }

    pub(crate) fn finish(&mut self, ending: Ending) {
        debug!("game over: {ending:?}, score {}", self.player.score);
        self.player.game_over = true;
        self.ending = Some(ending);
    }

    // -----------------------------------------------------------------------
    // Persistence
    // -----------------------------------------------------------------------

    /// Save the player's progress. Failures stay out of the player's view:
    /// they are logged at debug level and otherwise ignored.
    pub fn save_game(&self) {
        let record = SaveRecord::from_player(&self.player);
        match self.store.save(&record) {
            Ok(()) => debug!("game saved for {}", record.player),
            Err(e) => debug!("could not save game: {e}"),
        }
    }

    /// Restore name, score, health and visited rooms from the last save.
    pub fn load_game(&mut self) -> GameResult<()> {
        let record = self.store.load()?;
        record.apply_to(&mut self.player);
        debug!("game loaded for {}", self.player.name);
        Ok(())
    }

    /// Restore the last save, telling the player when that fails.
    pub fn resume(&mut self, console: &mut dyn Console) -> bool {
        match self.load_game() {
            Ok(()) => true,
            Err(e) => {
                warn!("could not load game: {e}");
                console.print_line(LOAD_FAILED);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::ScriptedConsole;
    use crate::save::MemoryStore;
    use dj_core::{Character, Item, Puzzle, Room};

    fn test_world() -> World {
        World::new(
            vec![
                Room::new("start", "L'entrée")
                    .with_exit("nord", "hall")
                    .with_exit("est", "crypte"),
                Room::new("hall", "Le grand hall")
                    .with_exit("sud", "start")
                    .with_exit("nord", "victoire"),
                Room::new("crypte", "La crypte")
                    .with_exit("ouest", "start")
                    .locked_by("clé"),
                Room::new("victoire", "La salle du trésor"),
            ],
            vec![
                Item::new("clé", "start"),
                Item::new("manche", "start").combines_with("lame", "épée"),
                Item::new("lame", "hall"),
            ],
            vec![Puzzle::new("2+2", "4", "start")],
            vec![Character::new("Mage", "Bravo.", "hall").giving("amulette")],
        )
    }

    fn session_with(store: MemoryStore) -> GameSession {
        let config = GameConfig::default().with_trap_odds(0);
        GameSession::new(test_world(), config, Box::new(store)).unwrap()
    }

    fn session() -> GameSession {
        session_with(MemoryStore::new())
    }

    #[test]
    fn starts_in_start_room() {
        let s = session();
        assert_eq!(s.player().current_room.id, "start");
        assert!(!s.is_over());
        assert_eq!(s.ending(), None);
    }

    #[test]
    fn missing_start_room_uses_first() {
        let config = GameConfig::default().with_start_room("nowhere");
        let s = GameSession::new(test_world(), config, Box::new(MemoryStore::new())).unwrap();
        assert_eq!(s.player().current_room.id, "start");
    }

    #[test]
    fn empty_world_cannot_start() {
        let result = GameSession::new(
            World::default(),
            GameConfig::default(),
            Box::new(MemoryStore::new()),
        );
        assert!(matches!(result, Err(GameError::World(_))));
    }

    #[test]
    fn start_asks_for_name() {
        let mut s = session();
        let mut console = ScriptedConsole::new(["Alice", "quitter"]);
        let ending = s.start(&mut console);

        assert_eq!(ending, Ending::Quit);
        assert_eq!(s.player().name, "Alice");
        assert!(console.output().contains("Bonjour Alice !"));
    }

    #[test]
    fn blank_name_keeps_default() {
        let mut s = session();
        let mut console = ScriptedConsole::new(["", "quitter"]);
        s.start(&mut console);
        assert_eq!(s.player().name, "Aventurier");
    }

    #[test]
    fn quit_saves_and_summarises() {
        let store = MemoryStore::new();
        let mut s = session_with(store.clone());
        let mut console = ScriptedConsole::new(["quitter"]);
        let ending = s.run(&mut console);

        assert_eq!(ending, Ending::Quit);
        assert!(s.is_over());
        assert!(console.output().contains("=== Fin de l'aventure ==="));
        assert_eq!(store.last().unwrap().visited, ["start"]);
    }

    struct ReadOnlyStore;

    impl SaveStore for ReadOnlyStore {
        fn save(&self, _record: &SaveRecord) -> GameResult<()> {
            Err(GameError::Io(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "read-only",
            )))
        }

        fn load(&self) -> GameResult<SaveRecord> {
            Err(GameError::NoSave)
        }
    }

    #[test]
    fn failed_save_is_silent() {
        let config = GameConfig::default().with_trap_odds(0);
        let mut s = GameSession::new(test_world(), config, Box::new(ReadOnlyStore)).unwrap();
        let mut console = ScriptedConsole::new(["quitter"]);

        assert_eq!(s.run(&mut console), Ending::Quit);
        let output = console.output();
        assert!(output.contains("=== Fin de l'aventure ==="));
        assert!(!output.contains("read-only"));
        assert!(!output.to_lowercase().contains("sauvegarde"));
    }

    #[test]
    fn end_of_input_ends_like_quit() {
        let store = MemoryStore::new();
        let mut s = session_with(store.clone());
        let mut console = ScriptedConsole::new(Vec::<String>::new());

        assert_eq!(s.run(&mut console), Ending::EndOfInput);
        assert!(store.last().is_some());
    }

    #[test]
    fn empty_input_retries() {
        let mut s = session();
        let mut console = ScriptedConsole::new(["", "quitter"]);
        s.run(&mut console);
        assert!(console.output().contains("Commande vide. Réessayez."));
    }

    #[test]
    fn padded_input_is_unknown() {
        let mut s = session();
        let mut console = ScriptedConsole::new(["   ", " nord", "quitter"]);
        s.run(&mut console);

        let output = console.output();
        assert!(!output.contains("Commande vide."));
        assert_eq!(output.matches("Commande inconnue.").count(), 2);
        assert_eq!(s.player().current_room.id, "start");
    }

    #[test]
    fn unknown_command_reported() {
        let mut s = session();
        let mut console = ScriptedConsole::new(["danser", "quitter"]);
        s.run(&mut console);
        assert!(console.output().contains("Commande inconnue."));
        assert_eq!(s.ending(), Some(Ending::Quit));
    }

    #[test]
    fn room_described_every_turn() {
        let mut s = session();
        let mut console = ScriptedConsole::new(["attendre", "quitter"]);
        s.run(&mut console);
        let descriptions = console
            .transcript()
            .iter()
            .filter(|l| l.contains("L'entrée"))
            .count();
        assert_eq!(descriptions, 2);
    }

    #[test]
    fn reaching_victory_ends_the_turn() {
        let store = MemoryStore::new();
        let mut s = session_with(store.clone());
        let mut console = ScriptedConsole::new(["nord", "nord", "attendre"]);
        let ending = s.run(&mut console);

        assert_eq!(ending, Ending::Victory);
        assert_eq!(s.player().current_room.id, "victoire");
        assert!(console.output().contains("Vous avez atteint la salle finale."));
        assert!(console.output().contains("Score final"));
        assert_eq!(console.remaining(), 1);

        let saved = store.last().unwrap();
        assert!(saved.visited.contains(&"hall".to_string()));
        assert!(!saved.visited.contains(&"victoire".to_string()));
    }

    #[test]
    fn certain_trap_fires_once_per_room() {
        let config = GameConfig::default().with_trap_odds(1).with_seed(1);
        let mut s = GameSession::new(test_world(), config, Box::new(MemoryStore::new())).unwrap();
        let mut console = ScriptedConsole::default();

        assert!(s.enter_room(&mut console));
        assert_eq!(s.player().score, -5);
        assert!(!s.enter_room(&mut console));
        assert_eq!(s.player().score, -5);
        assert!(console.output().contains("BOUM !"));
    }

    #[test]
    fn disabled_traps_never_fire() {
        let mut s = session();
        let mut console = ScriptedConsole::default();
        assert!(!s.enter_room(&mut console));
        assert_eq!(s.player().score, 0);
        assert!(s.player().has_visited("start"));
    }

    #[test]
    fn trap_odds_roughly_one_in_five() {
        let mut fired = 0;
        for seed in 0..2000 {
            let config = GameConfig::default().with_seed(seed);
            let mut s =
                GameSession::new(test_world(), config, Box::new(MemoryStore::new())).unwrap();
            if s.enter_room(&mut ScriptedConsole::default()) {
                fired += 1;
            }
        }
        assert!((300..500).contains(&fired), "fired {fired} times");
    }

    #[test]
    fn resume_restores_summary() {
        let store = MemoryStore::new();
        let mut first = session_with(store.clone());
        first.player_mut().name = "Alice".to_string();
        first.player_mut().score = 40;
        first.player_mut().visit("hall");
        first.save_game();

        let mut second = session_with(store);
        let mut console = ScriptedConsole::default();
        assert!(second.resume(&mut console));
        assert_eq!(second.player().name, "Alice");
        assert_eq!(second.player().score, 40);
        assert!(second.player().has_visited("hall"));
    }

    #[test]
    fn resume_without_save_reports_failure() {
        let mut s = session();
        let mut console = ScriptedConsole::default();
        assert!(!s.resume(&mut console));
        assert_eq!(console.output(), LOAD_FAILED);
        assert_eq!(s.player().score, 0);
        assert_eq!(s.player().name, "Aventurier");
    }
}
