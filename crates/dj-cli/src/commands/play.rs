use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;

use dj_core::{DirSource, DjError, World};
use dj_engine::{Console, GameConfig, GameSession, JsonFileStore};
use log::info;

use crate::console::LineConsole;

/// Printed when the dungeon cannot be loaded.
const LOAD_ERROR: &str = "Erreur lors du chargement des données.";

pub struct PlayOptions {
    pub data_dir: PathBuf,
    pub seed: Option<u64>,
    pub save: PathBuf,
    pub max_inventory: usize,
    pub resume: bool,
    pub script: Option<PathBuf>,
}

pub fn run(options: &PlayOptions) -> Result<(), String> {
    let world = match World::load(&DirSource::new(&options.data_dir)) {
        Ok(world) => world,
        Err(DjError::NoRooms) => {
            println!("{LOAD_ERROR}");
            info!("no rooms in {}", options.data_dir.display());
            return Ok(());
        }
        Err(e) => return Err(e.to_string()),
    };

    let mut config = GameConfig::default().with_max_inventory(options.max_inventory);
    if let Some(seed) = options.seed {
        config = config.with_seed(seed);
    }

    let store = JsonFileStore::new(&options.save);
    let mut session =
        GameSession::new(world, config, Box::new(store)).map_err(|e| e.to_string())?;

    let stdout = io::stdout().lock();
    let mut console: Box<dyn Console> = match &options.script {
        Some(path) => {
            let file = File::open(path)
                .map_err(|e| format!("cannot read {}: {e}", path.display()))?;
            Box::new(LineConsole::new(BufReader::new(file), stdout))
        }
        None => Box::new(LineConsole::new(io::stdin().lock(), stdout)),
    };

    if options.resume {
        session.resume(console.as_mut());
    }

    let ending = session.start(console.as_mut());
    info!("game ended: {ending:?}");
    Ok(())
}
