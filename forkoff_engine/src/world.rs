//! World state module
//!
//! [`GameWorld`] owns every room, item, objective and the player. Handlers receive
//! it explicitly (`&GameWorld` to read, `&mut GameWorld` to mutate); there is no
//! global instance.

use log::info;

use crate::item::Item;
use crate::objective::Objective;
use crate::player::Player;
use crate::room::Room;
use crate::vocabulary::Vocabulary;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameWorld {
    pub rooms: Vec<Room>,
    pub items: Vec<Item>,
    pub objectives: Vec<Objective>,
    pub player: Player,
    /// Set by any mutation, cleared by save or load.
    pub dirty: bool,
}

impl GameWorld {
    pub fn new(rooms: Vec<Room>, items: Vec<Item>, player: Player, objectives: Vec<Objective>) -> Self {
        Self {
            rooms,
            items,
            objectives,
            player,
            dirty: false,
        }
    }

    pub fn current_room(&self) -> Option<&Room> {
        self.rooms.iter().find(|room| room.name == self.player.location)
    }

    pub fn current_room_mut(&mut self) -> Option<&mut Room> {
        let location = self.player.location.clone();
        self.rooms.iter_mut().find(|room| room.name == location)
    }

    /// Room by exact name or alias.
    pub fn room_by_name(&self, name: &str) -> Option<&Room> {
        self.rooms.iter().find(|room| room.answers_to(name))
    }

    /// Room reached by reading `phrase` as a direction from the current room.
    pub fn room_by_direction(&self, vocabulary: &Vocabulary, phrase: &str) -> Option<&Room> {
        let direction = vocabulary.resolve_direction(phrase)?;
        let target = self.current_room()?.directional_exit(direction.as_str())?;
        self.room_by_name(target)
    }

    /// Item by exact name or alias, wherever it is.
    pub fn item_by_name(&self, name: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.answers_to(name))
    }

    pub fn item_mut(&mut self, name: &str) -> Option<&mut Item> {
        self.items.iter_mut().find(|item| item.name == name)
    }

    /// Item by name or alias, looking only in the player's then the room's inventory.
    pub fn nearby_item(&self, name: &str) -> Option<&Item> {
        self.find_held(&self.player.inventory, name).or_else(|| {
            self.current_room()
                .and_then(|room| self.find_held(&room.inventory, name))
        })
    }

    fn find_held<'a>(&'a self, held: &[String], name: &str) -> Option<&'a Item> {
        held.iter()
            .filter_map(|held_name| self.items.iter().find(|item| item.name == *held_name))
            .find(|item| item.answers_to(name))
    }

    pub fn item_in_room(&self, item_name: &str) -> bool {
        self.current_room().is_some_and(|room| room.has_item(item_name))
    }

    pub fn is_nearby(&self, item_name: &str) -> bool {
        self.player.has_item(item_name) || self.item_in_room(item_name)
    }

    /// Take an item out of both inventories it could be sitting in.
    pub fn remove_item_everywhere(&mut self, item_name: &str) {
        self.player.remove_item(item_name);
        if let Some(room) = self.current_room_mut() {
            room.remove_item(item_name);
        }
    }

    pub fn objective_by_name(&self, name: &str) -> Option<&Objective> {
        self.objectives.iter().find(|objective| objective.name == name)
    }

    /// Requirements within reach (carried, or fixed in the current room) and every
    /// interaction marker set.
    pub fn is_objective_complete(&self, objective: &Objective) -> bool {
        let requirement_met = |item_name: &String| {
            self.player.has_item(item_name)
                || (self.item_in_room(item_name)
                    && self.items.iter().any(|item| item.name == *item_name && !item.is_collectible))
        };
        objective.requires.iter().all(requirement_met) && objective.interactions_complete()
    }

    pub fn all_objectives_complete(&self) -> bool {
        self.objectives.iter().all(|objective| self.is_objective_complete(objective))
    }

    /// Set the win flag once every objective is complete. Returns the flag.
    pub fn check_victory(&mut self) -> bool {
        if !self.player.won && !self.objectives.is_empty() && self.all_objectives_complete() {
            info!("all objectives complete: {} has won", self.player.name);
            self.player.won = true;
            self.dirty = true;
        }
        self.player.won
    }

    /// First blocker whose objective exists and is incomplete.
    pub fn unmet_blocker<'a>(&self, room: &'a Room) -> Option<&'a str> {
        room.blockers
            .iter()
            .find(|blocker| {
                self.objective_by_name(&blocker.name)
                    .is_some_and(|objective| !self.is_objective_complete(objective))
            })
            .map(|blocker| blocker.message.as_str())
    }

    pub fn is_blocked(&self, room: &Room) -> bool {
        self.unmet_blocker(room).is_some()
    }

    /// Full description: fragments in order, skipping those about starting items
    /// that have been found or are still hidden.
    pub fn room_description(&self, room: &Room) -> String {
        room.description
            .iter()
            .filter(|(key, _)| {
                if !room.starting_inventory.iter().any(|name| name == key) {
                    return true;
                }
                self.items
                    .iter()
                    .find(|item| item.name == *key)
                    .is_some_and(|item| item.is_collectible && !item.discovered && !item.hidden)
            })
            .map(|(_, text)| text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Discovered, collectible items lying in a room (things the player put down).
    pub fn dropped_items(&self, room: &Room) -> Vec<&Item> {
        room.inventory
            .iter()
            .filter_map(|name| self.items.iter().find(|item| item.name == *name))
            .filter(|item| item.is_collectible && item.discovered)
            .collect()
    }

    /// Move the player. Returns true on a first visit.
    pub fn move_player(&mut self, room_name: &str) -> bool {
        self.player.location = room_name.to_string();
        self.dirty = true;
        self.player.mark_visited(room_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{test_vocabulary, test_world};

    #[test]
    fn finds_rooms_by_alias_and_direction() {
        let world = test_world();
        let vocab = test_vocabulary();
        assert_eq!(world.room_by_name("hall").map(|r| r.name.as_str()), Some("hallway"));
        assert_eq!(
            world.room_by_direction(&vocab, "e").map(|r| r.name.as_str()),
            Some("kitchen")
        );
        assert!(world.room_by_direction(&vocab, "north").is_none());
    }

    #[test]
    fn nearby_item_prefers_player_inventory() {
        let mut world = test_world();
        assert!(world.nearby_item("lamp").is_some());
        assert!(world.nearby_item("fork").is_none());
        world.player.inventory.push("fork".into());
        assert_eq!(world.nearby_item("utensil").map(|i| i.name.as_str()), Some("fork"));
    }

    #[test]
    fn objective_requires_reachable_items() {
        let mut world = test_world();
        let torch = world.objective_by_name("find torch").cloned().unwrap();
        assert!(!world.is_objective_complete(&torch));
        world.player.inventory.push("torch".into());
        assert!(world.is_objective_complete(&torch));
    }

    #[test]
    fn collectible_items_in_room_do_not_satisfy_requirements() {
        let mut world = test_world();
        world.current_room_mut().unwrap().inventory.push("torch".into());
        let torch = world.objective_by_name("find torch").cloned().unwrap();
        assert!(!world.is_objective_complete(&torch));
    }

    #[test]
    fn blocked_until_objective_complete() {
        let mut world = test_world();
        let cellar = world.room_by_name("cellar").cloned().unwrap();
        assert_eq!(world.unmet_blocker(&cellar), Some("It is far too dark to go down there."));
        world.player.inventory.push("torch".into());
        assert!(!world.is_blocked(&cellar));
    }

    #[test]
    fn blocker_for_unknown_objective_is_ignored() {
        let mut world = test_world();
        world.rooms[0].blockers.push(crate::room::Blocker {
            name: "no such objective".into(),
            message: "nope".into(),
        });
        let room = world.rooms[0].clone();
        assert!(!world.is_blocked(&room));
    }

    #[test]
    fn room_description_hides_found_starting_items() {
        let mut world = test_world();
        let kitchen = world.room_by_name("kitchen").cloned().unwrap();
        assert!(world.room_description(&kitchen).contains("A fork glints"));
        world.item_mut("fork").unwrap().discovered = true;
        assert!(!world.room_description(&kitchen).contains("A fork glints"));
    }

    #[test]
    fn victory_requires_every_objective() {
        let mut world = test_world();
        assert!(!world.check_victory());
        world.player.inventory.push("torch".into());
        assert!(world.check_victory());
        assert!(world.player.won);
    }
}
