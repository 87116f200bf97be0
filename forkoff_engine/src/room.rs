//! Rooms, their connections and blockers.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::helpers::ordered_pairs;

/// Entry condition: the named objective must be complete before the room can be entered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Blocker {
    pub name: String,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub name: String,
    /// Description fragments in authored order. A fragment keyed by a starting
    /// item is only shown while that item is still lying around unfound.
    #[serde(default, with = "ordered_pairs")]
    pub description: Vec<(String, String)>,
    #[serde(default)]
    pub short_description: String,
    /// Names of connected rooms.
    #[serde(default)]
    pub exits: Vec<String>,
    /// Direction name to room name shortcuts.
    #[serde(default)]
    pub directional_exits: HashMap<String, String>,
    #[serde(default)]
    pub aliases: Vec<String>,
    #[serde(default)]
    pub blockers: Vec<Blocker>,
    #[serde(default)]
    pub inventory: Vec<String>,
    #[serde(default)]
    pub starting_inventory: Vec<String>,
}

impl Room {
    pub fn answers_to(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name) || self.aliases.iter().any(|alias| alias.eq_ignore_ascii_case(name))
    }

    pub fn is_connected_to(&self, room_name: &str) -> bool {
        self.exits.iter().any(|exit| exit == room_name)
    }

    pub fn directional_exit(&self, direction: &str) -> Option<&str> {
        self.directional_exits.get(direction).map(String::as_str)
    }

    pub fn has_item(&self, item_name: &str) -> bool {
        self.inventory.iter().any(|name| name == item_name)
    }

    pub fn remove_item(&mut self, item_name: &str) -> bool {
        let before = self.inventory.len();
        self.inventory.retain(|name| name != item_name);
        before != self.inventory.len()
    }

    pub fn add_item(&mut self, item_name: &str) {
        if !self.has_item(item_name) {
            self.inventory.push(item_name.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_room_record() {
        let json = r#"{
            "name": "kitchen",
            "description": {"intro": "A tidy kitchen.", "fork": "A fork lies on the counter."},
            "short_description": "The kitchen.",
            "exits": ["hallway"],
            "directional_exits": {"west": "hallway"},
            "aliases": ["galley"],
            "blockers": [{"name": "find light", "message": "It is too dark."}],
            "inventory": ["fork"],
            "starting_inventory": ["fork"]
        }"#;
        let room: Room = serde_json::from_str(json).unwrap();
        assert_eq!(room.description[0].0, "intro");
        assert_eq!(room.directional_exit("west"), Some("hallway"));
        assert!(room.answers_to("Galley"));
        assert!(room.is_connected_to("hallway"));
        assert_eq!(room.blockers[0].message, "It is too dark.");
    }

    #[test]
    fn inventory_add_is_idempotent_and_remove_reports() {
        let mut room = Room {
            name: "hall".into(),
            ..Room::default()
        };
        room.add_item("fork");
        room.add_item("fork");
        assert_eq!(room.inventory.len(), 1);
        assert!(room.remove_item("fork"));
        assert!(!room.remove_item("fork"));
    }
}
