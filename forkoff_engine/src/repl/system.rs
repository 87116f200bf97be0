//! `repl::system` module
//!
//! Contains handlers for game-level commands: saving and loading, help, hints,
//! synonyms, text speed, stories and art.

use log::{info, warn};

use crate::action::{AchievableAction, Intent};
use crate::game::Game;
use crate::resolver::find_target;
use crate::response::{Message, RequestStatus, Response};
use crate::router::UNSURE;
use crate::store::LoadMode;

pub const NO_STORY: &str = "No story found.";
pub const SAVED: &str = "Your game was saved successfully.";
pub const NEW_GAME_STARTED: &str = "New game started.";
pub const GAME_LOADED: &str = "Game loaded successfully.";
pub const HELP_HEADER: &str = "Available Commands:";
pub const OBJECTIVES_HEADER: &str = "Current Objectives:";
pub const ALIAS_MISSING: &str = "Please provide an alias to get help for.";
pub const SCROLL_MISSING: &str = "Please provide a valid scroll speed to change to.";
pub const SCROLL_UNCHANGED: &str = "Text printing speed not changed.";
pub const SCROLL_OFF: &str = "Text printing effects turned off.";
pub const HINT_HEADER: &str = "You begin to ponder deeply:";
pub const NOTHING_TO_PONDER: &str = "You have done everything there is to do. There is nothing left to ponder.";
pub const NO_ART: &str = "You can't quite picture that.";

pub fn handle(game: &mut Game, intent: &Intent) -> Response {
    let target = intent.primary_target();
    match intent.action {
        AchievableAction::Exit => exit_handler(game),
        AchievableAction::GameStory => story_handler(game, target),
        AchievableAction::SaveGame => save_handler(game),
        AchievableAction::LoadGame => load_handler(game, LoadMode::Resume),
        AchievableAction::NewGame => load_handler(game, LoadMode::New),
        AchievableAction::Help => help_handler(game),
        AchievableAction::Objectives => objectives_handler(game),
        AchievableAction::Alias => alias_handler(game, target),
        AchievableAction::Scroll => scroll_handler(game, target),
        AchievableAction::Hint => hint_handler(game),
        AchievableAction::GameMap | AchievableAction::Draw => draw_handler(game, target),
        _ => Response::failure(UNSURE),
    }
}

/// Stop the game loop. Nothing to show.
pub fn exit_handler(game: &mut Game) -> Response {
    info!("{} asked to exit", game.world.player.name);
    game.active = false;
    Response::empty()
}

/// Tell a named story, one paragraph per line.
pub fn story_handler(game: &Game, key: Option<&str>) -> Response {
    let Some(story) = key.and_then(|key| game.stories.get(key)) else {
        warn!("no story named {key:?}");
        return Response::failure(NO_STORY);
    };
    let mut messages = Vec::with_capacity(story.len() * 2);
    for line in story {
        messages.push(Message::Blank);
        messages.push(Message::Paragraph(line.clone()));
    }
    Response::new(RequestStatus::Success, messages)
}

pub fn save_handler(game: &mut Game) -> Response {
    match game.save() {
        Ok(()) => Response::success(SAVED),
        Err(err) => {
            warn!("save failed: {err}");
            Response::failure(format!("An error occurred while saving your game: {err}"))
        },
    }
}

/// Load a saved game or start a new one. Failing to start a new game leaves
/// nothing to play, so that failure is unrecoverable.
pub fn load_handler(game: &mut Game, mode: LoadMode) -> Response {
    match game.load(mode) {
        Ok(()) => Response::success(match mode {
            LoadMode::New => NEW_GAME_STARTED,
            LoadMode::Resume => GAME_LOADED,
        }),
        Err(err) => {
            warn!("{mode:?} load failed: {err}");
            match mode {
                LoadMode::New => Response::error(format!("An error occurred while starting a new game: {err}")),
                LoadMode::Resume => Response::failure(format!("An error occurred while loading your game: {err}")),
            }
        },
    }
}

pub fn help_handler(game: &Game) -> Response {
    Response::success_with_header_and_strings(HELP_HEADER, game.vocabulary.help_lines())
}

pub fn objectives_handler(game: &Game) -> Response {
    let world = &game.world;
    Response::success_with_header_and_strings(
        OBJECTIVES_HEADER,
        world
            .objectives
            .iter()
            .map(|objective| format!("{} - complete: {}", objective.name, world.is_objective_complete(objective))),
    )
}

/// List every known name for a room, item or command word.
pub fn alias_handler(game: &Game, target: Option<&str>) -> Response {
    let Some(target) = target else {
        return Response::failure(ALIAS_MISSING);
    };
    let world = &game.world;
    let Some(resolved) = find_target(world, &game.vocabulary, target, true) else {
        return Response::failure(format!("Unable to find an alias for '{target}'."));
    };
    let aliases: &[String] = if let Some(room) = world.room_by_name(&resolved) {
        &room.aliases
    } else if let Some(item) = world.nearby_item(&resolved) {
        &item.alias
    } else {
        let synonyms = game.vocabulary.synonyms_of(&resolved);
        if synonyms.is_empty() {
            return Response::failure(format!("Unable to find an alias for '{resolved}'."));
        }
        synonyms
    };
    if aliases.is_empty() {
        return Response::failure(format!("No aliases found for '{resolved}'."));
    }
    Response::success_with_header_and_strings(format!("Aliases for '{resolved}':"), aliases)
}

pub fn scroll_handler(game: &mut Game, target: Option<&str>) -> Response {
    let Some(word) = target else {
        return Response::failure(SCROLL_MISSING);
    };
    let Some(speed) = game.vocabulary.scroll_speed(word) else {
        return Response::failure(SCROLL_UNCHANGED);
    };
    if speed == game.scroll_speed {
        return Response::failure(SCROLL_UNCHANGED);
    }
    info!("scroll speed changed from {:?} to {speed:?}", game.scroll_speed);
    game.set_scroll_speed(speed);
    if speed == crate::render::ScrollSpeed::Off {
        Response::success(SCROLL_OFF)
    } else {
        Response::success(format!("Text printing speed changed to {word}."))
    }
}

/// Reveal one more hint for the first incomplete objective.
pub fn hint_handler(game: &mut Game) -> Response {
    let world = &mut game.world;
    let Some(index) = world
        .objectives
        .iter()
        .position(|objective| !world.is_objective_complete(objective))
    else {
        return Response::success(NOTHING_TO_PONDER);
    };
    let objective = &mut world.objectives[index];
    let hints = objective.reveal_hint().to_vec();
    info!("revealed {} hint(s) for '{}'", hints.len(), objective.name);
    Response::success_with_header_and_strings(HINT_HEADER, hints)
}

/// Show a named piece of art, unwrapped.
pub fn draw_handler(game: &Game, name: Option<&str>) -> Response {
    match name.and_then(|name| game.art.get(name)) {
        Some(lines) => Response::art(lines.clone()),
        None => {
            warn!("no art named {name:?}");
            Response::failure(NO_ART)
        },
    }
}
