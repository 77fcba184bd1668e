use serde::{Deserialize, Serialize};

/// A non-player character standing in a room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Character {
    /// Display name.
    pub name: String,
    /// What the character says when spoken to.
    pub message: String,
    /// Room the character stands in.
    pub room_id: String,
    /// Carried over from the content files; no rule reads it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_friendly: Option<bool>,
    /// Name of an item handed to the player after talking.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gives_item: Option<String>,
    /// Question text of a puzzle that must be solved before the character talks.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub require_puzzle: Option<String>,
}

impl Character {
    /// Create a character with no gift and no prerequisite.
    pub fn new(
        name: impl Into<String>,
        message: impl Into<String>,
        room_id: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            message: message.into(),
            room_id: room_id.into(),
            is_friendly: None,
            gives_item: None,
            require_puzzle: None,
        }
    }

    /// Builder: hand an item to the player.
    pub fn giving(mut self, item: impl Into<String>) -> Self {
        self.gives_item = Some(item.into());
        self
    }

    /// Builder: require a solved puzzle, by question text.
    pub fn requiring(mut self, question: impl Into<String>) -> Self {
        self.require_puzzle = Some(question.into());
        self
    }
}
