//! `repl::inventory` module
//!
//! Contains handlers for picking up, dropping, listing and inspecting items.

use log::info;

use crate::action::{AchievableAction, Intent};
use crate::item::Item;
use crate::response::{Message, RequestStatus, Response};
use crate::router::UNSURE;
use crate::world::GameWorld;

pub const EMPTY_INVENTORY: &str = "You have no items in your inventory.";
pub const INVENTORY_HEADER: &str = "Inventory Contents:";
pub const ITEM_ADDED_HEADER: &str = "You added an item to your inventory:";
pub const NOT_IN_INVENTORY: &str = "You don't have that item in your inventory.";
pub const ITEM_NOT_FOUND: &str = "Hmm, you can't seem to find that.";
pub const CANT_PICK_UP: &str = "You can't pick that up.";
pub const ALREADY_HAVE: &str = "You already have that item in your inventory.";
pub const ALREADY_IN_ROOM: &str = "That item is already in this room.";

const LIST_PREFIX: &str = "list_";

pub fn handle(world: &mut GameWorld, intent: &Intent) -> Response {
    match intent.action {
        AchievableAction::Take => take_handler(world, intent.primary_target()),
        AchievableAction::Drop => drop_handler(world, intent.primary_target()),
        AchievableAction::Inventory => inventory_handler(world),
        AchievableAction::Inspect => inspect_handler(world, intent.primary_target()),
        _ => Response::failure(UNSURE),
    }
}

/// Move an item from the current room into the player's inventory.
pub fn take_handler(world: &mut GameWorld, target: Option<&str>) -> Response {
    let Some(item) = target.and_then(|name| world.item_by_name(name)) else {
        return Response::failure(ITEM_NOT_FOUND);
    };
    let name = item.name.clone();
    let in_room = world.item_in_room(&name);
    if world.player.has_item(&name) && !in_room {
        return Response::failure(ALREADY_HAVE);
    }
    if !item.is_collectible || item.locked {
        info!("{} tried to take fixed or locked item '{name}'", world.player.name);
        return Response::failure(CANT_PICK_UP);
    }
    if !in_room {
        return Response::failure(ITEM_NOT_FOUND);
    }

    if let Some(room) = world.current_room_mut() {
        room.remove_item(&name);
    }
    world.player.add_item(&name);
    let Some(item) = world.item_mut(&name) else {
        return Response::failure(ITEM_NOT_FOUND);
    };
    item.discovered = true;
    let summary = item.summary();
    world.dirty = true;
    info!("{} picked up '{name}'", world.player.name);
    Response::success_with_header(ITEM_ADDED_HEADER, summary)
}

/// Move an item from the player's inventory into the current room.
pub fn drop_handler(world: &mut GameWorld, target: Option<&str>) -> Response {
    let Some(item) = target.and_then(|name| world.item_by_name(name)) else {
        return Response::failure(ITEM_NOT_FOUND);
    };
    let name = item.name.clone();
    let summary = item.summary();
    if !world.player.has_item(&name) {
        return Response::failure(NOT_IN_INVENTORY);
    }
    if world.item_in_room(&name) {
        return Response::failure(ALREADY_IN_ROOM);
    }
    let Some(room) = world.current_room_mut() else {
        return Response::failure(ITEM_NOT_FOUND);
    };
    room.add_item(&name);
    let header = format!("You dropped an item in {}:", room.name);
    world.player.remove_item(&name);
    world.dirty = true;
    info!("{} dropped '{name}' in '{}'", world.player.name, world.player.location);
    Response::success_with_header(header, summary)
}

pub fn inventory_handler(world: &GameWorld) -> Response {
    let contents: Vec<String> = world
        .player
        .inventory
        .iter()
        .filter_map(|name| world.items.iter().find(|item| item.name == *name))
        .map(Item::summary)
        .collect();
    if contents.is_empty() {
        return Response::success(EMPTY_INVENTORY);
    }
    Response::success_with_header_and_strings(INVENTORY_HEADER, contents)
}

/// Show an item's look-at lines.
///
/// Lines keyed by another item are only shown while that item is undiscovered and
/// not hidden. Checklist lines (`list_` keys) naming a complete objective are struck.
pub fn inspect_handler(world: &GameWorld, target: Option<&str>) -> Response {
    let Some(item) = target.and_then(|name| world.item_by_name(name)) else {
        return Response::failure(ITEM_NOT_FOUND);
    };
    if !world.is_nearby(&item.name) {
        return Response::failure(ITEM_NOT_FOUND);
    }

    let mut messages = Vec::new();
    for (key, text) in &item.look_at_message {
        let bare_key = key.strip_prefix(LIST_PREFIX);
        let objective_key = bare_key.unwrap_or(key);
        let text = if world
            .objective_by_name(objective_key)
            .is_some_and(|objective| world.is_objective_complete(objective))
        {
            strike(text)
        } else {
            text.clone()
        };
        if !shows_look_line(world, item, key) {
            continue;
        }
        if bare_key.is_none() {
            messages.push(Message::Blank);
        }
        messages.push(Message::Paragraph(text));
    }
    Response::new(RequestStatus::Success, messages)
}

fn shows_look_line(world: &GameWorld, inspected: &Item, key: &str) -> bool {
    match world.item_by_name(key) {
        Some(other) if other.name != inspected.name => !other.discovered && !other.hidden,
        _ => true,
    }
}

/// Mark a checklist line done: `[-]` becomes `[x]`.
fn strike(text: &str) -> String {
    text.replace('-', "x")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_world;

    fn in_kitchen() -> GameWorld {
        let mut world = test_world();
        world.player.location = "kitchen".into();
        world
    }

    #[test]
    fn take_moves_item_and_discovers_it() {
        let mut world = in_kitchen();
        let response = take_handler(&mut world, Some("fork"));
        assert!(response.is_success());
        assert_eq!(
            response.text(),
            vec![ITEM_ADDED_HEADER, "Fork - A perfectly ordinary fork."]
        );
        assert!(world.player.has_item("fork"));
        assert!(!world.item_in_room("fork"));
        assert!(world.item_by_name("fork").unwrap().discovered);
        assert!(world.dirty);
    }

    #[test]
    fn take_from_another_room_is_not_found() {
        let mut world = test_world();
        assert_eq!(take_handler(&mut world, Some("fork")).text(), vec![ITEM_NOT_FOUND]);
        assert!(!world.item_by_name("fork").unwrap().discovered);
    }

    #[test]
    fn take_locked_or_fixed_items_fails() {
        let mut world = in_kitchen();
        assert_eq!(take_handler(&mut world, Some("key")).text(), vec![CANT_PICK_UP]);
        assert_eq!(take_handler(&mut world, Some("drawer")).text(), vec![CANT_PICK_UP]);
        assert!(!world.dirty);
    }

    #[test]
    fn take_twice_reports_already_have() {
        let mut world = in_kitchen();
        take_handler(&mut world, Some("fork"));
        assert_eq!(take_handler(&mut world, Some("fork")).text(), vec![ALREADY_HAVE]);
        assert_eq!(take_handler(&mut world, None).text(), vec![ITEM_NOT_FOUND]);
    }

    #[test]
    fn pick_up_then_drop_round_trips() {
        let mut world = in_kitchen();
        take_handler(&mut world, Some("fork"));
        let response = drop_handler(&mut world, Some("utensil"));
        assert_eq!(response.text()[0], "You dropped an item in kitchen:");
        assert!(world.item_in_room("fork"));
        assert!(!world.player.has_item("fork"));
        assert!(world.item_by_name("fork").unwrap().discovered);
    }

    #[test]
    fn drop_failures() {
        let mut world = in_kitchen();
        assert_eq!(drop_handler(&mut world, Some("fork")).text(), vec![NOT_IN_INVENTORY]);
        assert_eq!(drop_handler(&mut world, Some("unicorn")).text(), vec![ITEM_NOT_FOUND]);
        world.player.inventory.push("fork".into());
        assert_eq!(drop_handler(&mut world, Some("fork")).text(), vec![ALREADY_IN_ROOM]);
    }

    #[test]
    fn inventory_listing() {
        let mut world = test_world();
        assert_eq!(inventory_handler(&world).text(), vec![EMPTY_INVENTORY]);
        world.player.inventory.push("torch".into());
        assert_eq!(
            inventory_handler(&world).text(),
            vec![INVENTORY_HEADER, " - Torch - A perfectly ordinary torch."]
        );
    }

    #[test]
    fn inspect_shows_lines_and_hides_found_items() {
        let mut world = in_kitchen();
        let response = inspect_handler(&world, Some("fork"));
        assert_eq!(
            response.text(),
            vec![
                "Four tines, slightly bent.",
                "Something small is wedged between the tines.",
                "[-] Find a torch",
            ]
        );
        assert!(response.messages[0].is_blank());
        assert_eq!(response.messages.len(), 5);

        world.item_mut("key").unwrap().discovered = true;
        let text = inspect_handler(&world, Some("fork")).text();
        assert!(!text.iter().any(|line| line.contains("wedged")));
    }

    #[test]
    fn inspect_strikes_completed_objectives() {
        let mut world = in_kitchen();
        world.player.inventory.push("torch".into());
        let text = inspect_handler(&world, Some("fork")).text();
        assert_eq!(text.last().unwrap(), "[x] Find a torch");
    }

    #[test]
    fn inspect_needs_nearby_item() {
        let world = test_world();
        assert_eq!(inspect_handler(&world, Some("fork")).text(), vec![ITEM_NOT_FOUND]);
        assert_eq!(inspect_handler(&world, None).text(), vec![ITEM_NOT_FOUND]);
    }
}
