//! Command parsing for player input.
//!
//! Each command is a single French word. Matching ignores case and
//! surrounding whitespace but nothing else: there are no abbreviations
//! and no arguments on the command line. Commands that need an object
//! (`prendre`, `jeter`, `combiner`) ask for it on the next line.

/// Direction for movement commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// North.
    Nord,
    /// South.
    Sud,
    /// East.
    Est,
    /// West.
    Ouest,
}

impl Direction {
    /// Parse a direction from its full name.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "nord" => Some(Self::Nord),
            "sud" => Some(Self::Sud),
            "est" => Some(Self::Est),
            "ouest" => Some(Self::Ouest),
            _ => None,
        }
    }

    /// The exit key for this direction.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Nord => "nord",
            Self::Sud => "sud",
            Self::Est => "est",
            Self::Ouest => "ouest",
        }
    }
}

/// A parsed player command.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Move through an exit.
    Move {
        /// The direction to move.
        direction: Direction,
    },
    /// Pick up an item from the room.
    Take,
    /// Throw away a carried item.
    Drop,
    /// List carried items.
    Inventory,
    /// Attempt the room's puzzles.
    Puzzle,
    /// Talk to everyone in the room.
    Talk,
    /// Show the command list.
    Help,
    /// Show explored rooms.
    Map,
    /// Let an hour pass.
    Wait,
    /// Combine two carried items.
    Combine,
    /// Show the quest log.
    Quests,
    /// Save and leave.
    Quit,
    /// Unknown command.
    Unknown {
        /// The original input.
        input: String,
    },
}

/// Every recognised command word, in help order.
pub const COMMAND_WORDS: &[&str] = &[
    "nord",
    "sud",
    "est",
    "ouest",
    "prendre",
    "jeter",
    "inventaire",
    "enigme",
    "parler",
    "aide",
    "carte",
    "attendre",
    "combiner",
    "quetes",
    "quitter",
];

/// Parse a player input string into a command.
///
/// Matching ignores case but not surrounding spaces: `" nord"` is unknown.
pub fn parse_command(input: &str) -> Command {
    let word = input.to_lowercase();

    if let Some(direction) = Direction::parse(&word) {
        return Command::Move { direction };
    }

    match word.as_str() {
        "prendre" => Command::Take,
        "jeter" => Command::Drop,
        "inventaire" => Command::Inventory,
        "enigme" => Command::Puzzle,
        "parler" => Command::Talk,
        "aide" => Command::Help,
        "carte" => Command::Map,
        "attendre" => Command::Wait,
        "combiner" => Command::Combine,
        "quetes" => Command::Quests,
        "quitter" => Command::Quit,
        _ => Command::Unknown {
            input: input.to_string(),
        },
    }
}

/// Split a `combiner` answer into two lower-cased item names.
///
/// Returns `None` unless the input holds exactly two comma-separated parts.
pub fn parse_pair(input: &str) -> Option<(String, String)> {
    let lower = input.to_lowercase();
    let parts: Vec<&str> = lower.split(',').map(str::trim).collect();
    match parts.as_slice() {
        [first, second] => Some((first.to_string(), second.to_string())),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_directions() {
        assert_eq!(
            parse_command("nord"),
            Command::Move {
                direction: Direction::Nord
            }
        );
        assert_eq!(
            parse_command("OUEST"),
            Command::Move {
                direction: Direction::Ouest
            }
        );
    }

    #[test]
    fn no_abbreviations() {
        assert_eq!(
            parse_command("n"),
            Command::Unknown {
                input: "n".to_string()
            }
        );
        assert!(matches!(parse_command("i"), Command::Unknown { .. }));
        assert!(matches!(parse_command("p"), Command::Unknown { .. }));
    }

    #[test]
    fn every_word_is_recognised() {
        for word in COMMAND_WORDS {
            assert!(
                !matches!(parse_command(word), Command::Unknown { .. }),
                "{word} not recognised"
            );
        }
    }

    #[test]
    fn case_ignored() {
        assert_eq!(parse_command("Prendre"), Command::Take);
        assert_eq!(parse_command("QUITTER"), Command::Quit);
        assert_eq!(parse_command("Quetes"), Command::Quests);
    }

    #[test]
    fn padding_is_not_ignored() {
        assert_eq!(
            parse_command(" nord"),
            Command::Unknown {
                input: " nord".to_string()
            }
        );
        assert!(matches!(parse_command("prendre "), Command::Unknown { .. }));
        assert!(matches!(parse_command("   "), Command::Unknown { .. }));
    }

    #[test]
    fn arguments_are_not_accepted() {
        assert!(matches!(
            parse_command("prendre clé"),
            Command::Unknown { .. }
        ));
    }

    #[test]
    fn direction_round_trip_names() {
        for dir in [Direction::Nord, Direction::Sud, Direction::Est, Direction::Ouest] {
            assert_eq!(Direction::parse(dir.name()), Some(dir));
        }
        assert_eq!(Direction::parse("haut"), None);
    }

    #[test]
    fn parse_pair_lowercases_and_trims() {
        assert_eq!(
            parse_pair(" Manche ,  LAME "),
            Some(("manche".to_string(), "lame".to_string()))
        );
    }

    #[test]
    fn parse_pair_needs_exactly_two() {
        assert_eq!(parse_pair("manche"), None);
        assert_eq!(parse_pair("a, b, c"), None);
    }
}
