//! Consistency checks over loaded content.
//!
//! Nothing here is enforced at play time: the game tolerates every issue
//! reported below. The checks exist so content authors can spot dangling
//! references before a player does.

use std::collections::HashSet;

use crate::world::World;

/// A warning or error found while checking content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentIssue {
    /// The record the issue was found on.
    pub subject: String,
    /// A human-readable description of the issue.
    pub message: String,
    /// Whether this is an error (true) or a warning (false).
    pub is_error: bool,
}

impl ContentIssue {
    fn error(subject: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            message: message.into(),
            is_error: true,
        }
    }

    fn warning(subject: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            message: message.into(),
            is_error: false,
        }
    }
}

impl std::fmt::Display for ContentIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let level = if self.is_error { "error" } else { "warning" };
        write!(f, "{level}: {}: {}", self.subject, self.message)
    }
}

impl World {
    /// Check the world for dangling references and suspicious records.
    ///
    /// `start_room` and `victory_room` are the identifiers the game will
    /// look for.
    pub fn validate(&self, start_room: &str, victory_room: &str) -> Vec<ContentIssue> {
        let mut issues = Vec::new();
        let mut room_ids = HashSet::new();

        for room in self.rooms() {
            if !room_ids.insert(room.id.as_str()) {
                issues.push(ContentIssue::error(
                    format!("room '{}'", room.id),
                    "duplicate room id",
                ));
            }
        }

        for room in self.rooms() {
            for (direction, target) in &room.exits {
                if !room_ids.contains(target.as_str()) {
                    issues.push(ContentIssue::error(
                        format!("room '{}'", room.id),
                        format!("exit '{direction}' leads to unknown room '{target}'"),
                    ));
                }
            }
            if room.is_locked() && room.required_item.is_none() {
                issues.push(ContentIssue::warning(
                    format!("room '{}'", room.id),
                    "locked but names no required item, so it is open",
                ));
            }
        }

        if self.find_room(start_room).is_none() {
            issues.push(ContentIssue::warning(
                format!("room '{start_room}'"),
                "start room missing, the first room will be used",
            ));
        }
        if self.find_room(victory_room).is_none() {
            issues.push(ContentIssue::warning(
                format!("room '{victory_room}'"),
                "victory room missing, the game cannot be won",
            ));
        }

        let mut item_names = HashSet::new();
        for item in self.items() {
            if !item_names.insert(item.name.as_str()) {
                issues.push(ContentIssue::warning(
                    format!("item '{}'", item.name),
                    "duplicate item name",
                ));
            }
            if !item.is_carried() && !room_ids.contains(item.location.as_str()) {
                issues.push(ContentIssue::warning(
                    format!("item '{}'", item.name),
                    format!("located in unknown room '{}'", item.location),
                ));
            }
        }

        for puzzle in self.puzzles() {
            if !room_ids.contains(puzzle.room_id.as_str()) {
                issues.push(ContentIssue::warning(
                    format!("puzzle '{}'", puzzle.question),
                    format!("bound to unknown room '{}'", puzzle.room_id),
                ));
            }
        }

        for character in self.characters() {
            if !room_ids.contains(character.room_id.as_str()) {
                issues.push(ContentIssue::warning(
                    format!("character '{}'", character.name),
                    format!("stands in unknown room '{}'", character.room_id),
                ));
            }
            let Some(question) = &character.require_puzzle else {
                continue;
            };
            if !self.puzzles().iter().any(|p| &p.question == question) {
                issues.push(ContentIssue::warning(
                    format!("character '{}'", character.name),
                    format!("requires unknown puzzle '{question}'"),
                ));
            }
        }

        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Character, Item, Puzzle, Room};

    fn messages(issues: &[ContentIssue]) -> Vec<String> {
        issues.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn clean_world_has_no_issues() {
        let world = World::new(
            vec![
                Room::new("start", "Start").with_exit("nord", "victoire"),
                Room::new("victoire", "Fin").with_exit("sud", "start"),
            ],
            vec![Item::new("clé", "start")],
            vec![Puzzle::new("2+2", "4", "start")],
            vec![Character::new("Mage", "Salut", "start").requiring("2+2")],
        );
        assert!(world.validate("start", "victoire").is_empty());
    }

    #[test]
    fn dangling_exit_is_error() {
        let world = World::new(
            vec![
                Room::new("start", "Start").with_exit("nord", "nowhere"),
                Room::new("victoire", "Fin"),
            ],
            vec![],
            vec![],
            vec![],
        );
        let issues = world.validate("start", "victoire");
        assert_eq!(issues.len(), 1);
        assert!(issues[0].is_error);
        assert!(issues[0].message.contains("nowhere"));
    }

    #[test]
    fn duplicate_room_id_is_error() {
        let world = World::new(
            vec![
                Room::new("start", "A"),
                Room::new("start", "B"),
                Room::new("victoire", "Fin"),
            ],
            vec![],
            vec![],
            vec![],
        );
        let issues = world.validate("start", "victoire");
        assert!(issues.iter().any(|i| i.is_error && i.message == "duplicate room id"));
    }

    #[test]
    fn reports_dangling_references_as_warnings() {
        let mut locked = Room::new("crypte", "Crypte");
        locked.locked = Some(true);
        let world = World::new(
            vec![Room::new("start", "Start"), locked],
            vec![Item::new("clé", "cave"), Item::new("clé", "start")],
            vec![Puzzle::new("2+2", "4", "grenier")],
            vec![Character::new("Mage", "Salut", "tour").requiring("3+3")],
        );
        let issues = world.validate("start", "victoire");
        assert!(issues.iter().all(|i| !i.is_error));

        let text = messages(&issues).join("\n");
        assert!(text.contains("locked but names no required item"));
        assert!(text.contains("victory room missing"));
        assert!(text.contains("duplicate item name"));
        assert!(text.contains("unknown room 'cave'"));
        assert!(text.contains("unknown room 'grenier'"));
        assert!(text.contains("unknown room 'tour'"));
        assert!(text.contains("unknown puzzle '3+3'"));
    }

    #[test]
    fn missing_start_room_is_warning() {
        let world = World::new(vec![Room::new("victoire", "Fin")], vec![], vec![], vec![]);
        let issues = world.validate("start", "victoire");
        assert_eq!(issues.len(), 1);
        assert!(!issues[0].is_error);
        assert!(issues[0].to_string().starts_with("warning: room 'start'"));
    }

    #[test]
    fn carried_items_need_no_room() {
        let world = World::new(
            vec![Room::new("start", "Start"), Room::new("victoire", "Fin")],
            vec![Item::carried("amulette", "")],
            vec![],
            vec![],
        );
        assert!(world.validate("start", "victoire").is_empty());
    }
}
