use log::{info, warn};

use crate::character::Character;
use crate::content::ContentSource;
use crate::error::{DjError, DjResult};
use crate::item::{INVENTORY_LOCATION, Item};
use crate::puzzle::Puzzle;
use crate::room::Room;

/// The dungeon: every room, item, puzzle and character loaded at startup.
///
/// Records are kept in load order. After loading, the only mutation is an
/// item's location changing when the player picks it up.
#[derive(Debug, Clone, Default)]
pub struct World {
    rooms: Vec<Room>,
    items: Vec<Item>,
    puzzles: Vec<Puzzle>,
    characters: Vec<Character>,
}

impl World {
    /// Build a world from already-loaded records.
    pub fn new(
        rooms: Vec<Room>,
        items: Vec<Item>,
        puzzles: Vec<Puzzle>,
        characters: Vec<Character>,
    ) -> Self {
        Self {
            rooms,
            items,
            puzzles,
            characters,
        }
    }

    /// Load a world from a content source.
    ///
    /// A collection that fails to load is replaced by an empty one, except
    /// rooms: a world without rooms cannot be played and yields
    /// [`DjError::NoRooms`].
    pub fn load(source: &impl ContentSource) -> DjResult<Self> {
        let rooms = or_empty("rooms", source.rooms());
        if rooms.is_empty() {
            return Err(DjError::NoRooms);
        }
        let items = or_empty("items", source.items());
        let puzzles = or_empty("puzzles", source.puzzles());
        let characters = or_empty("characters", source.characters());

        info!(
            "loaded {} rooms, {} items, {} puzzles, {} characters",
            rooms.len(),
            items.len(),
            puzzles.len(),
            characters.len()
        );

        Ok(Self::new(rooms, items, puzzles, characters))
    }

    // -----------------------------------------------------------------------
    // Lookups
    // -----------------------------------------------------------------------

    /// All rooms, in load order.
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    /// All items, in load order, wherever they are.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// All puzzles, in load order.
    pub fn puzzles(&self) -> &[Puzzle] {
        &self.puzzles
    }

    /// All characters, in load order.
    pub fn characters(&self) -> &[Character] {
        &self.characters
    }

    /// Find a room by identifier.
    pub fn find_room(&self, id: &str) -> Option<&Room> {
        self.rooms.iter().find(|r| r.id == id)
    }

    /// The room a new game starts in: `preferred` if it exists, otherwise
    /// the first room loaded.
    pub fn start_room(&self, preferred: &str) -> DjResult<&Room> {
        self.find_room(preferred)
            .or_else(|| self.rooms.first())
            .ok_or(DjError::NoRooms)
    }

    /// Items currently lying in a room.
    pub fn items_in_room(&self, room_id: &str) -> Vec<&Item> {
        self.items.iter().filter(|i| i.is_in(room_id)).collect()
    }

    /// Characters standing in a room.
    pub fn characters_in_room(&self, room_id: &str) -> Vec<&Character> {
        self.characters
            .iter()
            .filter(|c| c.room_id == room_id)
            .collect()
    }

    /// Puzzles bound to a room.
    pub fn puzzles_in_room(&self, room_id: &str) -> Vec<&Puzzle> {
        self.puzzles.iter().filter(|p| p.room_id == room_id).collect()
    }

    /// First item in a room whose name is exactly `name`.
    pub fn item_in_room(&self, room_id: &str, name: &str) -> Option<&Item> {
        self.items
            .iter()
            .find(|i| i.is_in(room_id) && i.name == name)
    }

    // -----------------------------------------------------------------------
    // Mutation
    // -----------------------------------------------------------------------

    /// Move the first item named exactly `name` out of a room and into the
    /// player's hands. Returns a copy of the relocated item.
    pub fn pick_up(&mut self, room_id: &str, name: &str) -> Option<Item> {
        let item = self
            .items
            .iter_mut()
            .find(|i| i.is_in(room_id) && i.name == name)?;
        item.location = INVENTORY_LOCATION.to_string();
        Some(item.clone())
    }
}

fn or_empty<T>(what: &str, loaded: DjResult<Vec<T>>) -> Vec<T> {
    loaded.unwrap_or_else(|e| {
        warn!("{what} unavailable, using an empty collection: {e}");
        Vec::new()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::MemorySource;

    fn test_world() -> World {
        World::new(
            vec![
                Room::new("hall", "Le hall").with_exit("nord", "start"),
                Room::new("start", "L'entrée").with_exit("sud", "hall"),
            ],
            vec![
                Item::new("clé", "start"),
                Item::new("torche", "hall"),
                Item::new("clé", "start"),
            ],
            vec![Puzzle::new("2+2", "4", "start")],
            vec![Character::new("Garde", "Halte !", "hall")],
        )
    }

    #[test]
    fn find_room_by_id() {
        let world = test_world();
        assert_eq!(world.find_room("start").unwrap().name, "L'entrée");
        assert!(world.find_room("nowhere").is_none());
    }

    #[test]
    fn start_room_prefers_named_room() {
        let world = test_world();
        assert_eq!(world.start_room("start").unwrap().id, "start");
    }

    #[test]
    fn start_room_falls_back_to_first() {
        let world = test_world();
        assert_eq!(world.start_room("missing").unwrap().id, "hall");
    }

    #[test]
    fn start_room_in_empty_world() {
        let world = World::default();
        assert!(matches!(world.start_room("start"), Err(DjError::NoRooms)));
    }

    #[test]
    fn lookups_by_room() {
        let world = test_world();
        assert_eq!(world.items_in_room("start").len(), 2);
        assert_eq!(world.items_in_room("hall")[0].name, "torche");
        assert_eq!(world.characters_in_room("hall")[0].name, "Garde");
        assert!(world.characters_in_room("start").is_empty());
        assert_eq!(world.puzzles_in_room("start")[0].question, "2+2");
        assert!(world.puzzles_in_room("nowhere").is_empty());
    }

    #[test]
    fn pick_up_relocates_first_match_only() {
        let mut world = test_world();
        let item = world.pick_up("start", "clé").unwrap();
        assert!(item.is_carried());

        let keys: Vec<_> = world.items().iter().filter(|i| i.name == "clé").collect();
        assert!(keys[0].is_carried());
        assert!(keys[1].is_in("start"));
        assert_eq!(world.items_in_room("start").len(), 1);
    }

    #[test]
    fn pick_up_is_exact_and_room_bound() {
        let mut world = test_world();
        assert!(world.pick_up("start", "Clé").is_none());
        assert!(world.pick_up("start", "torche").is_none());
        assert!(world.item_in_room("hall", "torche").is_some());
    }

    #[test]
    fn load_from_source() {
        let source = MemorySource {
            rooms: vec![Room::new("start", "Start")],
            items: vec![Item::new("clé", "start")],
            ..MemorySource::default()
        };
        let world = World::load(&source).unwrap();
        assert_eq!(world.rooms().len(), 1);
        assert_eq!(world.items().len(), 1);
        assert!(world.puzzles().is_empty());
    }

    #[test]
    fn load_without_rooms_fails() {
        let source = MemorySource {
            items: vec![Item::new("clé", "start")],
            ..MemorySource::default()
        };
        assert!(matches!(World::load(&source), Err(DjError::NoRooms)));
    }

    /// Rooms load, everything else fails.
    struct BrokenExtras;

    impl ContentSource for BrokenExtras {
        fn rooms(&self) -> DjResult<Vec<Room>> {
            Ok(vec![Room::new("start", "Start")])
        }

        fn items(&self) -> DjResult<Vec<Item>> {
            Err(DjError::NoRooms)
        }

        fn puzzles(&self) -> DjResult<Vec<Puzzle>> {
            Err(DjError::NoRooms)
        }

        fn characters(&self) -> DjResult<Vec<Character>> {
            Err(DjError::NoRooms)
        }
    }

    #[test]
    fn load_with_broken_collections_uses_empty() {
        let world = World::load(&BrokenExtras).unwrap();
        assert_eq!(world.rooms().len(), 1);
        assert!(world.items().is_empty());
        assert!(world.puzzles().is_empty());
        assert!(world.characters().is_empty());
    }
}
