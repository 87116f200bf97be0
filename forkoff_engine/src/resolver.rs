//! Target resolution.
//!
//! Decides what a span of words refers to. First match wins:
//! 1. a fixed command keyword (`"n"` -> `"north"`, `"savegame"` -> `"save"`)
//! 2. a room, by name or alias
//! 3. a room, by reading the phrase as a direction from the current room
//! 4. an item, by name or alias, in the player's inventory and then the room's
//!
//! Script-originated lookups skip all of this and get the phrase back verbatim.

use crate::vocabulary::Vocabulary;
use crate::world::GameWorld;

/// Canonical name for `words`, or `None` when nothing matches.
pub fn resolve<S: AsRef<str>>(
    world: &GameWorld,
    vocabulary: &Vocabulary,
    words: &[S],
    from_player: bool,
) -> Option<String> {
    let phrase = words
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase();
    find_target(world, vocabulary, &phrase, from_player)
}

/// Resolve an already joined phrase.
pub fn find_target(world: &GameWorld, vocabulary: &Vocabulary, phrase: &str, from_player: bool) -> Option<String> {
    if !from_player {
        return Some(phrase.to_string());
    }
    if phrase.trim().is_empty() {
        return None;
    }
    if let Some(keyword) = vocabulary.command_keyword(phrase) {
        return Some(keyword.to_string());
    }
    if let Some(room) = world.room_by_name(phrase) {
        return Some(room.name.clone());
    }
    if let Some(room) = world.room_by_direction(vocabulary, phrase) {
        return Some(room.name.clone());
    }
    world.nearby_item(phrase).map(|item| item.name.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{test_vocabulary, test_world};

    #[test]
    fn keywords_win_over_rooms_and_items() {
        let world = test_world();
        let vocab = test_vocabulary();
        assert_eq!(resolve(&world, &vocab, &["e"], true).as_deref(), Some("east"));
        assert_eq!(resolve(&world, &vocab, &["switch", "on"], true).as_deref(), Some("turn on"));
    }

    #[test]
    fn rooms_resolve_by_name_and_alias() {
        let world = test_world();
        let vocab = test_vocabulary();
        assert_eq!(resolve(&world, &vocab, &["Kitchen"], true).as_deref(), Some("kitchen"));
        assert_eq!(resolve(&world, &vocab, &["hall"], true).as_deref(), Some("hallway"));
    }

    #[test]
    fn items_must_be_nearby() {
        let mut world = test_world();
        let vocab = test_vocabulary();
        assert_eq!(resolve(&world, &vocab, &["lamp"], true).as_deref(), Some("lamp"));
        assert_eq!(resolve(&world, &vocab, &["utensil"], true), None);
        world.player.location = "kitchen".into();
        assert_eq!(resolve(&world, &vocab, &["utensil"], true).as_deref(), Some("fork"));
    }

    #[test]
    fn empty_phrase_is_not_found() {
        let world = test_world();
        let vocab = test_vocabulary();
        let none: [&str; 0] = [];
        assert_eq!(resolve(&world, &vocab, &none, true), None);
        assert_eq!(find_target(&world, &vocab, "", true), None);
    }

    #[test]
    fn script_lookups_are_verbatim() {
        let world = test_world();
        let vocab = test_vocabulary();
        assert_eq!(
            resolve(&world, &vocab, &["intro_art"], false).as_deref(),
            Some("intro_art")
        );
    }
}
