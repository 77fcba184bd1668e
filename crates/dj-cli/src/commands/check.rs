use std::path::Path;

use comfy_table::{ContentArrangement, Table};
use dj_core::{DirSource, World};
use dj_engine::GameConfig;

pub fn run(dir: &Path) -> Result<(), String> {
    let world = World::load(&DirSource::new(dir)).map_err(|e| e.to_string())?;
    let config = GameConfig::default();
    let issues = world.validate(&config.start_room, &config.victory_room);

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Content", "Count"]);
    table.add_row(vec!["rooms".to_string(), world.rooms().len().to_string()]);
    table.add_row(vec!["items".to_string(), world.items().len().to_string()]);
    table.add_row(vec!["puzzles".to_string(), world.puzzles().len().to_string()]);
    table.add_row(vec![
        "characters".to_string(),
        world.characters().len().to_string(),
    ]);
    println!("{table}");
    println!();

    for issue in &issues {
        println!("  {issue}");
    }

    let errors = issues.iter().filter(|i| i.is_error).count();
    let warnings = issues.len() - errors;

    if errors > 0 {
        return Err(format!(
            "{} error{}, {} warning{}",
            errors,
            if errors == 1 { "" } else { "s" },
            warnings,
            if warnings == 1 { "" } else { "s" },
        ));
    }

    if warnings > 0 {
        println!(
            "  {} warning{}",
            warnings,
            if warnings == 1 { "" } else { "s" }
        );
    } else {
        println!("  All checks passed for '{}'.", dir.display());
    }

    Ok(())
}
