use serde::{Deserialize, Serialize};

/// A riddle bound to a room.
///
/// The question text doubles as the puzzle's identity when tracking which
/// puzzles the player has solved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Puzzle {
    /// Question text, also used as identity.
    pub question: String,
    /// Expected answer, compared case-insensitively.
    pub answer: String,
    /// Room the puzzle belongs to.
    pub room_id: String,
    /// A wrong answer to a deadly puzzle ends the game.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deadly: Option<bool>,
}

impl Puzzle {
    /// Create a harmless puzzle.
    pub fn new(
        question: impl Into<String>,
        answer: impl Into<String>,
        room_id: impl Into<String>,
    ) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
            room_id: room_id.into(),
            deadly: None,
        }
    }

    /// Builder: mark the puzzle as deadly.
    pub fn deadly(mut self) -> Self {
        self.deadly = Some(true);
        self
    }

    /// Whether the puzzle kills on a wrong answer.
    pub fn is_deadly(&self) -> bool {
        self.deadly == Some(true)
    }

    /// Whether `answer` is correct. Case is ignored, whitespace is not.
    pub fn accepts(&self, answer: &str) -> bool {
        answer.to_lowercase() == self.answer.to_lowercase()
    }
}
