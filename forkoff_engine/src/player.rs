use serde::{Deserialize, Serialize};

pub const DEFAULT_LOCATION: &str = "entry";

fn default_location() -> String {
    DEFAULT_LOCATION.to_string()
}

/// The player: where they are, what they carry, and how far they have got.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    #[serde(default)]
    pub name: String,
    /// Name of the current room.
    #[serde(default = "default_location")]
    pub location: String,
    #[serde(default)]
    pub visited_rooms: Vec<String>,
    #[serde(default)]
    pub inventory: Vec<String>,
    #[serde(default)]
    pub won: bool,
    #[serde(default)]
    pub watched_end_credits: bool,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            name: String::new(),
            location: default_location(),
            visited_rooms: Vec::new(),
            inventory: Vec::new(),
            won: false,
            watched_end_credits: false,
        }
    }
}

impl Player {
    pub fn has_item(&self, item_name: &str) -> bool {
        self.inventory.iter().any(|name| name == item_name)
    }

    pub fn add_item(&mut self, item_name: &str) {
        if !self.has_item(item_name) {
            self.inventory.push(item_name.to_string());
        }
    }

    pub fn remove_item(&mut self, item_name: &str) -> bool {
        let before = self.inventory.len();
        self.inventory.retain(|name| name != item_name);
        before != self.inventory.len()
    }

    pub fn has_visited(&self, room_name: &str) -> bool {
        self.visited_rooms.iter().any(|name| name == room_name)
    }

    /// Record a visit. Returns true if this was the first one.
    pub fn mark_visited(&mut self, room_name: &str) -> bool {
        if self.has_visited(room_name) {
            false
        } else {
            self.visited_rooms.push(room_name.to_string());
            true
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_location_falls_back_to_entry() {
        let player: Player = serde_json::from_str(r#"{"name": "Pat"}"#).unwrap();
        assert_eq!(player.location, DEFAULT_LOCATION);
        assert!(player.inventory.is_empty());
    }

    #[test]
    fn visits_are_recorded_once() {
        let mut player = Player::default();
        assert!(player.mark_visited("kitchen"));
        assert!(!player.mark_visited("kitchen"));
        assert_eq!(player.visited_rooms, vec!["kitchen".to_string()]);
    }
}
