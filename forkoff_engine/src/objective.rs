//! module: objective
//!

use serde::{Deserialize, Serialize};

/// Marker completed when the player performs `interaction_type` on `item`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectiveInteraction {
    pub item: String,
    pub interaction_type: String,
    #[serde(default)]
    pub complete: bool,
}

/// Something for the player to achieve.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Objective {
    pub name: String,
    #[serde(default)]
    pub hints: Vec<String>,
    /// Item names that must be within reach.
    #[serde(default)]
    pub requires: Vec<String>,
    #[serde(default)]
    pub interactions: Vec<ObjectiveInteraction>,
    /// Hints revealed so far this session.
    #[serde(skip)]
    pub hint_count: usize,
}

impl Objective {
    pub fn interactions_complete(&self) -> bool {
        self.interactions.iter().all(|marker| marker.complete)
    }

    /// Mark markers for `item`/`action` complete. Returns true if any changed.
    pub fn complete_interaction(&mut self, item: &str, action: &str) -> bool {
        let mut changed = false;
        for marker in &mut self.interactions {
            if marker.item == item && marker.interaction_type == action && !marker.complete {
                marker.complete = true;
                changed = true;
            }
        }
        changed
    }

    /// Reveal one more hint (up to the total) and return the revealed prefix.
    pub fn reveal_hint(&mut self) -> &[String] {
        self.hint_count = (self.hint_count + 1).min(self.hints.len());
        &self.hints[..self.hint_count]
    }
}
