use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A room of the dungeon.
///
/// Exits map a direction name (`nord`, `sud`, ...) to the identifier of the
/// destination room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    /// Unique room identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Flavour text.
    #[serde(default)]
    pub description: String,
    /// Direction name to destination room identifier.
    #[serde(default)]
    pub exits: BTreeMap<String, String>,
    /// Whether entering requires an item.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locked: Option<bool>,
    /// Name of the item that opens this room.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required_item: Option<String>,
}

impl Room {
    /// Create an open room with no exits.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            exits: BTreeMap::new(),
            locked: None,
            required_item: None,
        }
    }

    /// Builder: add an exit.
    pub fn with_exit(mut self, direction: impl Into<String>, target: impl Into<String>) -> Self {
        self.exits.insert(direction.into(), target.into());
        self
    }

    /// Builder: set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Builder: lock the room behind an item.
    pub fn locked_by(mut self, item: impl Into<String>) -> Self {
        self.locked = Some(true);
        self.required_item = Some(item.into());
        self
    }

    /// Destination room identifier for a direction, if any.
    pub fn exit(&self, direction: &str) -> Option<&str> {
        self.exits.get(direction).map(String::as_str)
    }

    /// Whether the locked flag is set.
    pub fn is_locked(&self) -> bool {
        self.locked == Some(true)
    }

    /// The item needed to enter, if the room is locked and names one.
    ///
    /// A room flagged `locked` without a required item is open.
    pub fn key(&self) -> Option<&str> {
        if self.is_locked() {
            self.required_item.as_deref()
        } else {
            None
        }
    }
}
