use std::fs;
use std::path::Path;

use dj_core::content::{CHARACTERS_FILE, ITEMS_FILE, PUZZLES_FILE, ROOMS_FILE};

const SAMPLE_ROOMS: &str = r#"{
  "rooms": [
    {
      "id": "start",
      "name": "Entrée du donjon",
      "description": "Une lourde porte se referme derrière vous.",
      "exits": { "nord": "couloir" }
    },
    {
      "id": "couloir",
      "name": "Couloir sombre",
      "description": "Des torches éteintes bordent les murs humides.",
      "exits": { "sud": "start", "est": "bibliotheque", "nord": "crypte" }
    },
    {
      "id": "bibliotheque",
      "name": "Bibliothèque oubliée",
      "description": "Des grimoires poussiéreux s'empilent jusqu'au plafond.",
      "exits": { "ouest": "couloir" }
    },
    {
      "id": "crypte",
      "name": "Crypte scellée",
      "description": "Une serrure d'argent garde le passage.",
      "exits": { "sud": "couloir", "nord": "victoire" },
      "locked": true,
      "requiredItem": "clé en argent"
    },
    {
      "id": "victoire",
      "name": "Salle du trésor",
      "description": "L'or scintille à la lueur de votre torche.",
      "exits": { "sud": "crypte" }
    }
  ]
}
"#;

const SAMPLE_ITEMS: &str = r#"[
  { "name": "torche", "description": "Une torche vacillante.", "location": "start" },
  {
    "name": "manche",
    "description": "Un manche d'épée sans lame.",
    "location": "couloir",
    "combinableWith": "lame",
    "result": "épée"
  },
  { "name": "lame", "description": "Une lame brisée de sa garde.", "location": "bibliotheque" }
]
"#;

const SAMPLE_PUZZLES: &str = r#"[
  {
    "question": "Je parle sans bouche et j'entends sans oreilles. Qui suis-je ?",
    "answer": "écho",
    "roomId": "bibliotheque"
  },
  {
    "question": "Combien de pattes a une araignée ?",
    "answer": "8",
    "roomId": "crypte",
    "deadly": true
  }
]
"#;

const SAMPLE_CHARACTERS: &str = r#"[
  {
    "name": "ancien mage",
    "message": "Tu as l'esprit vif. Prends cette clé, elle ouvre la crypte.",
    "roomId": "bibliotheque",
    "isFriendly": true,
    "givesItem": "clé en argent",
    "requirePuzzle": "Je parle sans bouche et j'entends sans oreilles. Qui suis-je ?"
  }
]
"#;

pub fn run(name: &str) -> Result<(), String> {
    let dir = Path::new(name);

    if dir.exists() {
        return Err(format!("directory '{}' already exists", name));
    }

    fs::create_dir_all(dir).map_err(|e| format!("cannot create directory: {e}"))?;

    for (file, content) in [
        (ROOMS_FILE, SAMPLE_ROOMS),
        (ITEMS_FILE, SAMPLE_ITEMS),
        (PUZZLES_FILE, SAMPLE_PUZZLES),
        (CHARACTERS_FILE, SAMPLE_CHARACTERS),
    ] {
        fs::write(dir.join(file), content).map_err(|e| format!("cannot write {file}: {e}"))?;
    }

    println!("Created dungeon '{}' in {}/", name, name);
    println!("  {ROOMS_FILE}        rooms and exits");
    println!("  {ITEMS_FILE}       items and combinations");
    println!("  {PUZZLES_FILE}      riddles");
    println!("  {CHARACTERS_FILE}  characters");
    println!();
    println!("Get started:");
    println!("  donjon check -d {}", name);
    println!("  donjon play -d {}", name);

    Ok(())
}
