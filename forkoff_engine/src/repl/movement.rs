//! `repl::movement` module
//!
//! Contains handlers for commands that change or describe the player's location.

use log::{info, warn};

use crate::action::{AchievableAction, Intent};
use crate::resolver::find_target;
use crate::response::{Message, RequestStatus, Response};
use crate::room::Room;
use crate::router::UNSURE;
use crate::vocabulary::Vocabulary;
use crate::world::GameWorld;

pub const CANT_DO_THAT: &str = "Hmm, it seems like you can't do that.";
pub const NO_SUCH_ROOM: &str = "Hmm, it seems like that room doesn't exist.";
pub const ALREADY_HERE: &str = "Hmm, it seems like you're already there.";
pub const CANT_GO_THAT_WAY: &str = "Hmm, it seems like you can't go that way.";
pub const TOO_FAR_TO_SEE: &str = "Hmm, it seems like you can't quite see that room from here. Try moving closer.";
pub const USE_INSPECT: &str = "You can only use the look command to look at rooms, try the inspect command instead.";
pub const BLOCKER_MISCONFIGURED: &str = "Tell the developer that they messed up the blockers for this room.";
pub const DROPPED_ITEMS_HEADER: &str = "You previously dropped some items on the floor:";

pub fn handle(world: &mut GameWorld, vocabulary: &Vocabulary, intent: &Intent) -> Response {
    match intent.action {
        AchievableAction::Move => move_handler(world, vocabulary, intent.primary_target()),
        AchievableAction::Look => look_handler(world, vocabulary, intent.primary_target()),
        _ => Response::failure(UNSURE),
    }
}

/// Move the player to a connected, unblocked room.
pub fn move_handler(world: &mut GameWorld, vocabulary: &Vocabulary, target: Option<&str>) -> Response {
    let Some(target) = target else {
        return Response::failure(CANT_DO_THAT);
    };
    let Some(destination) = world
        .room_by_name(target)
        .or_else(|| world.room_by_direction(vocabulary, target))
    else {
        info!("{} tried to move to unknown place '{target}'", world.player.name);
        return Response::failure(CANT_DO_THAT);
    };

    if has_unmet_blockers(world, destination) {
        info!("{} was blocked from entering '{}'", world.player.name, destination.name);
        return blocked_response(destination, world.unmet_blocker(destination));
    }

    let Some(current) = world.current_room() else {
        warn!("player location '{}' is not a room", world.player.location);
        return Response::failure(CANT_DO_THAT);
    };
    if current.name == destination.name || current.aliases.iter().any(|alias| *alias == destination.name) {
        return Response::failure(ALREADY_HERE);
    }
    if !current.is_connected_to(&destination.name) {
        return Response::failure(CANT_GO_THAT_WAY);
    }

    let destination = destination.name.clone();
    let first_visit = world.move_player(&destination);
    info!("{} moved to '{destination}' (first visit: {first_visit})", world.player.name);
    match world.current_room() {
        Some(room) => describe_room(world, room, !first_visit),
        None => Response::failure(CANT_DO_THAT),
    }
}

/// Describe the current room, or explain why another target can't be looked at.
pub fn look_handler(world: &GameWorld, vocabulary: &Vocabulary, target: Option<&str>) -> Response {
    let Some(current) = world.current_room() else {
        warn!("player location '{}' is not a room", world.player.location);
        return Response::failure(NO_SUCH_ROOM);
    };
    let Some(target) = target else {
        return describe_room(world, current, false);
    };
    let Some(resolved) = find_target(world, vocabulary, target, true) else {
        return Response::failure(NO_SUCH_ROOM);
    };
    match world
        .room_by_name(&resolved)
        .or_else(|| world.room_by_direction(vocabulary, &resolved))
    {
        Some(room) if room.name == current.name => describe_room(world, current, false),
        Some(_) => Response::failure(TOO_FAR_TO_SEE),
        None => Response::failure(USE_INSPECT),
    }
}

/// A room counts as blocked when it has blockers and not every objective they
/// name is complete.
fn has_unmet_blockers(world: &GameWorld, room: &Room) -> bool {
    !room.blockers.is_empty()
        && !room
            .blockers
            .iter()
            .filter_map(|blocker| world.objective_by_name(&blocker.name))
            .all(|objective| world.is_objective_complete(objective))
}

/// Failure for a blocked room, reporting the first unmet blocker's message.
fn blocked_response(room: &Room, unmet: Option<&str>) -> Response {
    let message = unmet.unwrap_or_else(|| {
        warn!("room '{}' is blocked but no blocker matched", room.name);
        BLOCKER_MISCONFIGURED
    });
    Response::new(
        RequestStatus::Failure,
        vec![Message::Blank, Message::Paragraph(message.to_string())],
    )
}

/// Full or short description plus anything the player left lying here.
pub fn describe_room(world: &GameWorld, room: &Room, brief: bool) -> Response {
    let text = if brief {
        room.short_description.clone()
    } else {
        world.room_description(room)
    };
    let mut response = Response::new(RequestStatus::Success, vec![Message::Blank, Message::Paragraph(text)]);
    let dropped = world.dropped_items(room);
    if !dropped.is_empty() {
        response.extend(Response::success_with_header_and_strings(
            DROPPED_ITEMS_HEADER,
            dropped.iter().map(|item| item.summary()),
        ));
    }
    response
}
