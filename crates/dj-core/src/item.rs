use serde::{Deserialize, Serialize};

/// Location value of an item carried by the player.
pub const INVENTORY_LOCATION: &str = "inventaire";

/// Name given to a combination result when the source item declares none.
pub const DEFAULT_COMBINED_NAME: &str = "Objet combiné";

/// An object that can lie in a room or be carried.
///
/// Items are identified by name. Two items with the same name are
/// indistinguishable to every rule of the game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Name, also used as identity.
    pub name: String,
    /// Flavour text.
    #[serde(default)]
    pub description: String,
    /// A room identifier, or [`INVENTORY_LOCATION`].
    pub location: String,
    /// Name of the item this one combines with.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub combinable_with: Option<String>,
    /// Name of the item produced by a successful combination.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<String>,
}

impl Item {
    /// Create an item lying in a room.
    pub fn new(name: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            location: location.into(),
            combinable_with: None,
            result: None,
        }
    }

    /// Create an item that exists only in the player's inventory.
    pub fn carried(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            ..Self::new(name, INVENTORY_LOCATION)
        }
    }

    /// Builder: declare a combination partner and its result.
    pub fn combines_with(mut self, partner: impl Into<String>, result: impl Into<String>) -> Self {
        self.combinable_with = Some(partner.into());
        self.result = Some(result.into());
        self
    }

    /// Whether the item lies in the given room.
    pub fn is_in(&self, room_id: &str) -> bool {
        self.location == room_id
    }

    /// Whether the item is carried.
    pub fn is_carried(&self) -> bool {
        self.location == INVENTORY_LOCATION
    }

    /// Case-insensitive name comparison.
    pub fn name_matches(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }

    /// Whether this item combines with `other`.
    ///
    /// The partner name is compared exactly against the other item's stored
    /// name, and only in this direction.
    pub fn combines(&self, other: &Item) -> bool {
        self.combinable_with.as_deref() == Some(other.name.as_str())
    }

    /// Name of the item produced by combining this one.
    pub fn result_name(&self) -> &str {
        self.result.as_deref().unwrap_or(DEFAULT_COMBINED_NAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_content_fields() {
        let json = r#"{
            "name": "manche",
            "description": "Un manche en bois.",
            "location": "atelier",
            "combinableWith": "lame",
            "result": "épée"
        }"#;
        let item: Item = serde_json::from_str(json).unwrap();
        assert!(item.is_in("atelier"));
        assert_eq!(item.combinable_with.as_deref(), Some("lame"));
        assert_eq!(item.result_name(), "épée");
    }

    #[test]
    fn name_matching_ignores_case() {
        let item = Item::new("Clé", "start");
        assert!(item.name_matches("clé"));
        assert!(item.name_matches("CLÉ"));
        assert!(!item.name_matches("cle"));
    }

    #[test]
    fn combination_is_directional_and_case_sensitive() {
        let handle = Item::new("manche", "x").combines_with("Lame", "épée");
        let blade = Item::new("Lame", "x");
        let lower_blade = Item::new("lame", "x");

        assert!(handle.combines(&blade));
        assert!(!handle.combines(&lower_blade));
        assert!(!blade.combines(&handle));
    }

    #[test]
    fn default_result_name() {
        let mut item = Item::new("a", "x");
        item.combinable_with = Some("b".to_string());
        assert_eq!(item.result_name(), DEFAULT_COMBINED_NAME);
    }

    #[test]
    fn carried_item_location() {
        let item = Item::carried("pièce", "Objet offert");
        assert!(item.is_carried());
        assert!(!item.is_in("start"));
    }
}
