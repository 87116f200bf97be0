//! Items and the interactions defined on them.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::helpers::{capitalize, ordered_pairs};

/// Swap one item for another when an interaction succeeds.
///
/// Either side may be absent: `from` alone removes an item, `to` alone creates one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transform {
    #[serde(default)]
    pub from: Option<String>,
    #[serde(default)]
    pub to: Option<String>,
}

/// Effects of performing one action on an item.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interaction {
    #[serde(default)]
    pub message: String,
    /// Replacement description fragments.
    #[serde(default)]
    pub new_description: Option<Vec<String>>,
    /// Items that must be nearby and discovered.
    #[serde(default)]
    pub requires: Vec<String>,
    #[serde(default)]
    pub transforms: Vec<Transform>,
    #[serde(default)]
    pub unhides: Vec<String>,
    #[serde(default)]
    pub unlocks: Vec<String>,
    #[serde(default)]
    pub discovers: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    #[serde(default)]
    pub alias: Vec<String>,
    #[serde(default)]
    pub description: Vec<String>,
    /// Inspect lines keyed by what they describe, in authored order.
    #[serde(default, with = "ordered_pairs")]
    pub look_at_message: Vec<(String, String)>,
    #[serde(default)]
    pub is_collectible: bool,
    #[serde(default)]
    pub discovered: bool,
    #[serde(default)]
    pub interactions: HashMap<String, Interaction>,
    #[serde(default)]
    pub locked: bool,
    #[serde(default)]
    pub hidden: bool,
}

impl Item {
    /// Exact name or alias match, ignoring case.
    pub fn answers_to(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name) || self.alias.iter().any(|alias| alias.eq_ignore_ascii_case(name))
    }

    pub fn description(&self) -> String {
        self.description.join(" ")
    }

    pub fn display_name(&self) -> String {
        capitalize(&self.name)
    }

    /// `"Name - description"`, as shown in inventory listings.
    pub fn summary(&self) -> String {
        format!("{} - {}", self.display_name(), self.description())
    }

    /// Non-collectible items count as discovered from the start.
    pub fn is_discovered(&self) -> bool {
        self.discovered || !self.is_collectible
    }

    pub fn interaction(&self, action: &str) -> Option<&Interaction> {
        self.interactions.get(action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_with_defaults_and_ordered_look_lines() {
        let json = r#"{
            "name": "fork",
            "alias": ["utensil"],
            "description": ["A silver fork.", "It gleams."],
            "look_at_message": {"fork": "It has four tines.", "list_polish": "- Polish it"},
            "is_collectible": true,
            "interactions": {"clean": {"message": "Sparkly.", "discovers": ["spoon"]}}
        }"#;
        let item: Item = serde_json::from_str(json).unwrap();
        assert_eq!(item.description(), "A silver fork. It gleams.");
        assert_eq!(item.look_at_message[1].0, "list_polish");
        assert!(!item.locked && !item.hidden && !item.discovered);
        let clean = item.interaction("clean").unwrap();
        assert_eq!(clean.discovers, vec!["spoon".to_string()]);
        assert!(clean.new_description.is_none());
    }

    #[test]
    fn non_collectible_items_are_always_discovered() {
        let item = Item {
            name: "toilet".into(),
            ..Item::default()
        };
        assert!(item.is_discovered());
        let fork = Item {
            name: "fork".into(),
            is_collectible: true,
            ..Item::default()
        };
        assert!(!fork.is_discovered());
    }

    #[test]
    fn answers_to_name_or_alias() {
        let item = Item {
            name: "rubber duck".into(),
            alias: vec!["duck".into()],
            description: vec!["Squeaky.".into()],
            ..Item::default()
        };
        assert!(item.answers_to("Duck"));
        assert!(item.answers_to("rubber duck"));
        assert!(!item.answers_to("goose"));
        assert_eq!(item.summary(), "Rubber duck - Squeaky.");
    }
}
