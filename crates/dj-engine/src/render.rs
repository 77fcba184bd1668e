//! Read-only text views of the world and the player.

use dj_core::{Room, World};

use crate::command::COMMAND_WORDS;
use crate::player::PlayerState;

/// The command list shown by `aide`.
pub const HELP_TEXT: &str = "Commandes disponibles :
nord/sud/est/ouest - se déplacer
prendre - prendre un objet
jeter - jeter un objet de votre inventaire
inventaire - voir votre inventaire
enigme - tenter une énigme
parler - discuter avec un personnage
carte - voir la carte
attendre - passer du temps
combiner - combiner deux objets
quetes - consulter vos quêtes
aide - afficher cette aide
quitter - sauvegarder et quitter";

/// The line printed before each command prompt.
pub fn command_prompt() -> String {
    format!(
        "\nQue voulez-vous faire ? \n({})\n{}",
        COMMAND_WORDS.join("/"),
        "=".repeat(70)
    )
}

/// Room header, exits, items lying here and people standing here.
pub fn describe_room(world: &World, room: &Room) -> String {
    let mut out = format!("\n{0} {1} {0}", "=".repeat(20), room.name);

    if !room.description.is_empty() {
        out.push('\n');
        out.push_str(&room.description);
    }

    let exits: Vec<&str> = room.exits.keys().map(String::as_str).collect();
    out.push_str(&format!("\nSorties : {}", exits.join(", ")));

    let items: Vec<&str> = world
        .items_in_room(&room.id)
        .into_iter()
        .map(|i| i.name.as_str())
        .collect();
    if !items.is_empty() {
        out.push_str(&format!("\nObjets ici : {}", items.join(", ")));
    }

    let people: Vec<&str> = world
        .characters_in_room(&room.id)
        .into_iter()
        .map(|c| c.name.as_str())
        .collect();
    if !people.is_empty() {
        out.push_str(&format!("\nPersonnes ici : {}", people.join(", ")));
    }

    out
}

/// Every room in load order with a marker: `[X]` here, `[ ]` visited, ` ? ` unknown.
pub fn render_map(world: &World, player: &PlayerState) -> String {
    let mut out = String::from("\nCarte explorée :");
    for room in world.rooms() {
        let marker = if room.id == player.current_room.id {
            "[X]"
        } else if player.has_visited(&room.id) {
            "[ ]"
        } else {
            " ? "
        };
        out.push_str(&format!("\n{marker} {}", room.name));
    }
    out
}

/// The carried items.
pub fn render_inventory(player: &PlayerState) -> String {
    if player.inventory.is_empty() {
        return "Votre inventaire est vide.".to_string();
    }
    let names: Vec<&str> = player.inventory.iter().map(|i| i.name.as_str()).collect();
    format!("Inventaire : {}", names.join(", "))
}

/// The quest log.
pub fn render_quests(player: &PlayerState) -> String {
    let mut out = String::from("Quêtes en cours :");
    for quest in &player.quests {
        out.push_str(&format!("\n- {quest}"));
    }
    out
}

/// End-of-game summary.
pub fn render_summary(player: &PlayerState) -> String {
    format!(
        "\n=== Fin de l'aventure ===\n\
         Merci d'avoir joué, {} !\n\
         Salles visitées : {}\n\
         Énigmes résolues : {}\n\
         Objets ramassés : {}\n\
         Score final : {}",
        player.name,
        player.visited.len(),
        player.solved.len(),
        player.inventory.len(),
        player.score
    )
}
