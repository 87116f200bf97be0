//! `repl::interaction` module
//!
//! Contains handlers for doing things *with* items: using, pulling, chewing,
//! flushing and so on. Every verb shares one core: check the item is nearby and
//! discovered, check the item defines the action and its requirements are met,
//! then apply the interaction's effects in a fixed order.

use log::{info, warn};

use crate::action::{AchievableAction, Intent};
use crate::item::{Interaction, Transform};
use crate::repl::inventory::ITEM_NOT_FOUND;
use crate::response::{Message, RequestStatus, Response};
use crate::router::UNSURE;
use crate::world::GameWorld;

pub const TRY_NAMING: &str = "You aren't sure what to do, try naming the item.";
const USE_WITH: &str = "use_with";

pub fn handle(world: &mut GameWorld, intent: &Intent) -> Response {
    if intent.action == AchievableAction::Use {
        return use_handler(world, intent);
    }
    match intent.action.interaction_key() {
        Some(action) => single_target_handler(world, intent, action),
        None => Response::failure(UNSURE),
    }
}

/// `use X`, or `use X with Y` when more than one target was named.
pub fn use_handler(world: &mut GameWorld, intent: &Intent) -> Response {
    match intent.present_targets().as_slice() {
        [] => Response::failure(TRY_NAMING),
        [item] => handle_single(world, item, "use"),
        [first, second, rest @ ..] => {
            if !rest.is_empty() {
                info!("ignoring extra use targets {rest:?}");
            }
            handle_multiple(world, [*first, *second])
        },
    }
}

/// Thin guard for verbs that always take exactly one item.
fn single_target_handler(world: &mut GameWorld, intent: &Intent, action: &str) -> Response {
    match intent.primary_target() {
        Some(item) => handle_single(world, item, action),
        None => Response::failure(ITEM_NOT_FOUND),
    }
}

fn verb(action: &str) -> &str {
    match action {
        "sit" => "sit on",
        "use_with" => "use",
        other => other,
    }
}

fn nothing_happens(action: &str, name: &str) -> String {
    format!("You try to {} the {name} but nothing interesting happens.", verb(action))
}

fn too_far_away(action: &str, name: &str) -> String {
    format!(
        "You try to {} the {name} but it's too far away. Try picking it up first.",
        verb(action)
    )
}

/// Perform `action` on one item.
pub fn handle_single(world: &mut GameWorld, target: &str, action: &str) -> Response {
    let Some(item) = world.item_by_name(target) else {
        return Response::failure(ITEM_NOT_FOUND);
    };
    if !world.is_nearby(&item.name) {
        return Response::failure(ITEM_NOT_FOUND);
    }
    if !item.is_discovered() {
        return Response::failure(too_far_away(action, &item.name));
    }
    let Some(interaction) = item.interaction(action) else {
        return Response::failure(nothing_happens(action, &item.name));
    };
    if !requirements_met(world, interaction) || (item.is_collectible && !world.player.has_item(&item.name)) {
        return Response::failure(nothing_happens(action, &item.name));
    }

    let name = item.name.clone();
    let interaction = interaction.clone();
    info!("{} performed '{action}' on '{name}'", world.player.name);
    apply_effects(world, &name, action, &interaction);
    reveal(world, &interaction);
    let response = interaction_response(&interaction);
    transform(world, &interaction.transforms);
    world.dirty = true;
    response
}

/// `use X with Y`: both items must pass the single-item checks and both must
/// define the paired action. Effects of both apply; the first item's message and
/// transforms are the result.
fn handle_multiple(world: &mut GameWorld, targets: [&str; 2]) -> Response {
    let mut names = Vec::with_capacity(targets.len());
    for target in targets {
        let Some(item) = world.item_by_name(target) else {
            return Response::failure(TRY_NAMING);
        };
        if !world.is_nearby(&item.name) {
            return Response::failure(ITEM_NOT_FOUND);
        }
        if !item.is_discovered() {
            return Response::failure(too_far_away(USE_WITH, &item.name));
        }
        names.push(item.name.clone());
    }

    let mut interactions = Vec::with_capacity(names.len());
    for name in &names {
        let Some(item) = world.item_by_name(name) else {
            return Response::failure(ITEM_NOT_FOUND);
        };
        let usable = item.interaction(USE_WITH).filter(|interaction| {
            requirements_met(world, interaction) && !(item.is_collectible && !world.player.has_item(name))
        });
        match usable {
            Some(interaction) => interactions.push(interaction.clone()),
            None => {
                return Response::failure(format!(
                    "You try to use the {} with the {} but nothing interesting happens.",
                    names[0], names[1]
                ));
            },
        }
    }

    info!("{} used '{}' with '{}'", world.player.name, names[0], names[1]);
    let (first, second) = (&interactions[0], &interactions[1]);
    apply_effects(world, &names[0], USE_WITH, first);
    apply_effects(world, &names[1], USE_WITH, second);
    reveal(world, first);
    reveal(world, second);
    let response = interaction_response(first);
    transform(world, &first.transforms);
    world.dirty = true;
    response
}

/// Every required item must be nearby and discovered.
fn requirements_met(world: &GameWorld, interaction: &Interaction) -> bool {
    interaction.requires.iter().all(|required| {
        world
            .item_by_name(required)
            .is_some_and(|item| world.is_nearby(&item.name) && item.is_discovered())
    })
}

/// Description replacement and objective markers for the acted-on item.
fn apply_effects(world: &mut GameWorld, name: &str, action: &str, interaction: &Interaction) {
    if let Some(description) = &interaction.new_description
        && let Some(item) = world.item_mut(name)
    {
        item.description.clone_from(description);
    }
    for objective in &mut world.objectives {
        if objective.complete_interaction(name, action) {
            info!("objective '{}' progressed by '{action}' on '{name}'", objective.name);
        }
    }
}

/// Unhide, then unlock, then discover whatever the interaction lists.
fn reveal(world: &mut GameWorld, interaction: &Interaction) {
    for name in &interaction.unhides {
        match world.item_mut(name) {
            Some(item) => item.hidden = false,
            None => warn!("interaction unhides unknown item '{name}'"),
        }
    }
    for name in &interaction.unlocks {
        match world.item_mut(name) {
            Some(item) => item.locked = false,
            None => warn!("interaction unlocks unknown item '{name}'"),
        }
    }
    for name in &interaction.discovers {
        match world.item_mut(name) {
            Some(item) => item.discovered = true,
            None => warn!("interaction discovers unknown item '{name}'"),
        }
    }
}

fn interaction_response(interaction: &Interaction) -> Response {
    Response::new(
        RequestStatus::Success,
        vec![Message::Blank, Message::Paragraph(interaction.message.clone())],
    )
}

/// Remove each `from` item from wherever it sits; give the player each `to` item.
fn transform(world: &mut GameWorld, transforms: &[Transform]) {
    for Transform { from, to } in transforms {
        if let Some(from) = from {
            world.remove_item_everywhere(from);
            info!("'{from}' consumed");
        }
        if let Some(to) = to {
            world.remove_item_everywhere(to);
            world.player.add_item(to);
            match world.item_mut(to) {
                Some(item) => item.discovered = true,
                None => warn!("transform produced unknown item '{to}'"),
            }
            info!("'{to}' added to inventory");
        }
    }
}
