//! What each command does to the world and the player.

use log::debug;

use dj_core::{Item, Puzzle};

use crate::command::parse_pair;
use crate::console::Console;
use crate::error::{GameError, GameResult};
use crate::session::{Ending, GameSession};

impl GameSession {
    /// Walk through the exit named `direction`.
    ///
    /// A locked room stays shut unless its required item is carried under
    /// that exact name. A room flagged locked without a required item is open.
    pub fn do_move(&mut self, direction: &str) -> GameResult<String> {
        let next = self
            .player
            .current_room
            .exit(direction)
            .and_then(|id| self.world.find_room(id))
            .ok_or(GameError::NoExit)?;

        if let Some(key) = next.key() {
            if !self.player.has_item(key) {
                return Err(GameError::RoomLocked);
            }
        }

        self.player.current_room = next.clone();
        Ok(String::new())
    }

    /// Pick up the item named exactly `name` from the current room.
    pub fn do_take(&mut self, name: &str) -> GameResult<String> {
        let room_id = self.player.current_room.id.clone();
        if self.world.item_in_room(&room_id, name).is_none() {
            return Err(GameError::ItemNotHere);
        }
        if self.player.is_full() {
            return Err(GameError::InventoryFull);
        }

        let item = self
            .world
            .pick_up(&room_id, name)
            .ok_or(GameError::ItemNotHere)?;
        let message = format!("Vous avez pris {}.", item.name);
        self.player.add_item(item)?;
        self.player.score += self.config.pickup_reward;
        Ok(message)
    }

    /// Throw away the first carried item matching `name`, ignoring case.
    ///
    /// The item leaves the game; it does not go back to the room.
    pub fn do_drop(&mut self, name: &str) -> GameResult<String> {
        if self.player.inventory.is_empty() {
            return Err(GameError::NothingToDrop);
        }
        let dropped = self
            .player
            .remove_item(name)
            .ok_or(GameError::ItemNotInInventory)?;
        Ok(format!("Vous avez jeté : {}", dropped.name))
    }

    /// Combine two carried items named in `input` as `first, second`.
    ///
    /// Names are matched ignoring case, but the first item's declared
    /// partner must equal the second item's stored name exactly. The two
    /// items are replaced by the first item's declared result.
    pub fn do_combine(&mut self, input: &str) -> GameResult<String> {
        let (first, second) = parse_pair(input).ok_or(GameError::NotCombinable)?;
        let inventory = &self.player.inventory;

        let i = inventory
            .iter()
            .position(|item| item.name.to_lowercase() == first)
            .ok_or(GameError::NotCombinable)?;
        let j = inventory
            .iter()
            .enumerate()
            .position(|(j, item)| j != i && item.name.to_lowercase() == second)
            .ok_or(GameError::NotCombinable)?;
        if !inventory[i].combines(&inventory[j]) {
            return Err(GameError::NotCombinable);
        }

        let result = Item::carried(inventory[i].result_name(), "Objet obtenu par combinaison");
        let (hi, lo) = if i > j { (i, j) } else { (j, i) };
        self.player.inventory.remove(hi);
        self.player.inventory.remove(lo);

        let message = format!("Vous avez créé : {} !", result.name);
        self.player.receive_item(result);
        Ok(message)
    }

    /// Talk to everyone in the current room.
    ///
    /// A character waiting on an unsolved puzzle refuses to talk; the
    /// others still do. Gifts ignore the inventory capacity.
    pub fn do_talk(&mut self) -> GameResult<String> {
        let people: Vec<_> = self
            .world
            .characters_in_room(&self.player.current_room.id)
            .into_iter()
            .cloned()
            .collect();
        if people.is_empty() {
            return Err(GameError::NobodyHere);
        }

        let mut lines = Vec::new();
        for person in people {
            if let Some(required) = &person.require_puzzle {
                if !self.player.has_solved(required) {
                    lines.push(format!(
                        "{}: Je ne peux rien te dire tant que tu n'as pas résolu une énigme.",
                        person.name
                    ));
                    continue;
                }
            }

            lines.push(format!("{}: {}", person.name, person.message));

            let Some(gift) = &person.gives_item else {
                continue;
            };
            if self.player.has_item(gift) {
                continue;
            }
            lines.push(format!("Vous recevez : {gift}"));
            self.player.receive_item(Item::carried(
                gift.as_str(),
                format!("Objet offert par {}", person.name),
            ));
            self.player.score += self.config.pickup_reward;
        }

        Ok(lines.join("\n"))
    }

    /// Ask every puzzle of the current room, reading one answer each.
    ///
    /// Puzzles already solved are asked again. A defeat does not cut the
    /// round short; the turn loop ends the game once every puzzle here has
    /// been asked.
    pub fn do_puzzles(&mut self, console: &mut dyn Console) -> GameResult<()> {
        let puzzles: Vec<Puzzle> = self
            .world
            .puzzles_in_room(&self.player.current_room.id)
            .into_iter()
            .cloned()
            .collect();
        if puzzles.is_empty() {
            return Err(GameError::NoPuzzleHere);
        }

        for puzzle in &puzzles {
            let answer = console.prompt(&format!("Énigme : {}", puzzle.question));
            let verdict = self.answer_puzzle(puzzle, answer.as_deref());
            console.print_line(&verdict);
        }
        Ok(())
    }

    /// Judge one answer. `None` (no answer at all) counts as wrong.
    pub fn answer_puzzle(&mut self, puzzle: &Puzzle, answer: Option<&str>) -> String {
        if answer.is_some_and(|a| puzzle.accepts(a)) {
            self.player.score += self.config.puzzle_reward;
            self.player.mark_solved(&puzzle.question);
            return "Bonne réponse !".to_string();
        }

        let remaining = self.player.take_damage(self.config.wrong_answer_damage);
        let mut lines = vec![
            "Mauvaise réponse.".to_string(),
            format!(
                "Vous perdez {} points de vie. Vie restante : {remaining}",
                self.config.wrong_answer_damage
            ),
        ];

        let mut lost = false;
        if self.player.is_dead() {
            lines.push("Vous avez succombé à vos blessures...".to_string());
            lost = true;
        }
        if puzzle.is_deadly() {
            lines.push("L'énigme était piégée. Vous avez perdu.".to_string());
            lost = true;
        }
        if lost {
            debug!("defeated by puzzle '{}'", puzzle.question);
            self.finish(Ending::Defeat);
        }

        lines.join("\n")
    }

    /// Let an hour pass.
    pub fn do_wait(&mut self) -> String {
        self.player.turns_waited += 1;
        format!(
            "Une heure passe... Vous avez attendu {} heure(s).",
            self.player.turns_waited
        )
    }
}
