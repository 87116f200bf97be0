//! World assembly.
//!
//! Reads every part of a world from a [`GameStore`] into a fresh [`GameWorld`] and
//! checks that the parts refer to each other sensibly. Reference problems are
//! logged, not fatal: the game stays playable around a typo in the data.

use log::{info, warn};

use crate::player::DEFAULT_LOCATION;
use crate::store::{GameStore, LoadMode, StoreError};
use crate::world::GameWorld;

/// Load items, rooms, player and objectives, in that order.
///
/// # Errors
/// Returns the first [`StoreError`] encountered; nothing is partially applied.
pub fn load_world(store: &dyn GameStore, mode: LoadMode) -> Result<GameWorld, StoreError> {
    let items = store.load_items(mode)?;
    let rooms = store.load_rooms(mode)?;
    let player = store.load_player(mode)?;
    let objectives = store.load_objectives(mode)?;

    let mut world = GameWorld::new(rooms, items, player, objectives);
    settle_player(&mut world);
    let problems = validate_world(&world);
    for problem in &problems {
        warn!("world data: {problem}");
    }
    info!(
        "world assembled ({mode:?}): {} rooms, {} items, {} objectives, {} data warnings",
        world.rooms.len(),
        world.items.len(),
        world.objectives.len(),
        problems.len()
    );
    Ok(world)
}

/// Point the player at a room's canonical name. A location that names no room
/// falls back to the default starting room.
fn settle_player(world: &mut GameWorld) {
    let location = match world.room_by_name(&world.player.location) {
        Some(room) => room.name.clone(),
        None => {
            warn!(
                "player location '{}' is not a room; starting in '{DEFAULT_LOCATION}'",
                world.player.location
            );
            DEFAULT_LOCATION.to_string()
        },
    };
    world.player.location = location;
}

/// Cross-reference checks over a loaded world.
pub fn validate_world(world: &GameWorld) -> Vec<String> {
    let mut problems = Vec::new();
    let room_exists = |name: &str| world.rooms.iter().any(|room| room.name == name);
    let item_exists = |name: &str| world.items.iter().any(|item| item.name == name);
    let objective_exists = |name: &str| world.objectives.iter().any(|objective| objective.name == name);

    if !room_exists(&world.player.location) {
        problems.push(format!("player starts in unknown room '{}'", world.player.location));
    }
    for name in &world.player.inventory {
        if !item_exists(name) {
            problems.push(format!("player carries unknown item '{name}'"));
        }
    }

    for room in &world.rooms {
        for exit in &room.exits {
            if !room_exists(exit) {
                problems.push(format!("room '{}' has exit to unknown room '{exit}'", room.name));
            }
        }
        for (direction, target) in &room.directional_exits {
            if !room.is_connected_to(target) {
                problems.push(format!(
                    "room '{}' points {direction} to '{target}', which is not one of its exits",
                    room.name
                ));
            }
        }
        for name in &room.inventory {
            if !item_exists(name) {
                problems.push(format!("room '{}' holds unknown item '{name}'", room.name));
            }
            if world.player.has_item(name) {
                problems.push(format!("item '{name}' is in both the player's and room '{}''s inventory", room.name));
            }
        }
        for blocker in &room.blockers {
            if !objective_exists(&blocker.name) {
                problems.push(format!(
                    "room '{}' is blocked by unknown objective '{}'",
                    room.name, blocker.name
                ));
            }
        }
    }

    for objective in &world.objectives {
        for name in &objective.requires {
            if !item_exists(name) {
                problems.push(format!("objective '{}' requires unknown item '{name}'", objective.name));
            }
        }
        for marker in &objective.interactions {
            if !item_exists(&marker.item) {
                problems.push(format!(
                    "objective '{}' tracks interaction on unknown item '{}'",
                    objective.name, marker.item
                ));
            }
        }
    }
    problems
}
