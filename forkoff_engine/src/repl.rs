//! REPL and command handling.
//!
//! The game runs in a read-eval-print loop. This module drives the session
//! (opening, choosing a game, turns, closing) and its submodules implement the
//! handlers each capability group routes to.

mod input;
pub mod interaction;
pub mod inventory;
pub mod movement;
pub mod system;

use std::cell::RefCell;
use std::rc::Rc;

use anyhow::{Result, bail};
use log::info;

use crate::game::Game;
use crate::render::{Renderer, ScrollSpeed};
use crate::response::{RequestStatus, Response};
use crate::store::LoadMode;

pub use input::{ConsoleConfirm, InputEvent, InputManager};

pub const LOAD_PROMPT: &str = "Would you like to load a saved game? (y/n)";
pub const TURN_PROMPT: &str = "What would you like to do?";
pub const SAVE_PROMPT: &str = "It looks like there are unsaved changes. Would you like to save the game?";
pub const NOT_SAVED: &str = "Your game has not been saved.";
pub const FAREWELL: &str = "You have chosen to exit the game. Thanks for playing!";

/// Art and stories shown before anything else.
pub const OPENING_ART: &str = "intro_art";
pub const OPENING_STORIES: &[&str] = &["title", "introduction"];
pub const ENDING_STORY: &str = "ending";

/// A response paired with the speed it should scroll at.
pub type Printout = Vec<(Response, ScrollSpeed)>;

/// Title art and the opening stories.
pub fn opening(game: &Game) -> Printout {
    let mut out = vec![(system::draw_handler(game, Some(OPENING_ART)), game.scroll_speed)];
    for story in OPENING_STORIES {
        out.push((system::story_handler(game, Some(story)), game.scroll_speed));
    }
    out
}

/// Resume a saved game or start a new one, asking again after a failed resume.
/// Ends with the starting room's description unless the last load was fatal.
pub fn choose_game(game: &mut Game) -> Printout {
    let mut out = Printout::new();
    loop {
        let mode = if game.has_saved_game() && game.confirm(LOAD_PROMPT) {
            LoadMode::Resume
        } else {
            LoadMode::New
        };
        info!("starting session with {mode:?} load");
        let response = system::load_handler(game, mode);
        let status = response.status;
        out.push((response, game.scroll_speed));
        match status {
            RequestStatus::Failure => {},
            RequestStatus::Error => return out,
            RequestStatus::Success => break,
        }
    }
    let look = movement::look_handler(&game.world, &game.vocabulary, None);
    out.push((look, game.scroll_speed));
    out
}

/// Route one line of player input, then roll the credits on the turn the game is won.
pub fn take_turn(game: &mut Game, line: &str) -> Printout {
    let response = game.interpret_and_route(line, true);
    let mut out = vec![(response, game.scroll_speed)];
    let player = &game.world.player;
    if player.won && !player.watched_end_credits {
        info!("{} won; rolling the end credits", player.name);
        out.push((system::story_handler(game, Some(ENDING_STORY)), ScrollSpeed::Slow));
        game.world.player.watched_end_credits = true;
        game.world.dirty = true;
    }
    out
}

/// Offer to save unsaved changes, then say goodbye.
pub fn closing(game: &mut Game) -> Printout {
    let mut out = Printout::new();
    if game.world.dirty {
        let response = if game.confirm(SAVE_PROMPT) {
            system::save_handler(game)
        } else {
            Response::success(NOT_SAVED)
        };
        out.push((response, game.scroll_speed));
    }
    out.push((Response::success(FAREWELL), game.scroll_speed));
    out
}

fn print_all(renderer: &Renderer, printout: &Printout) -> Result<()> {
    for (response, speed) in printout {
        renderer.print(response, *speed)?;
    }
    Ok(())
}

fn fatal(printout: &Printout) -> Option<&Response> {
    printout
        .iter()
        .map(|(response, _)| response)
        .find(|response| response.status == RequestStatus::Error)
}

/// Run the game session until the player exits or input ends.
///
/// # Errors
/// - Fails when stdout cannot be written.
/// - Fails when a request reports an unrecoverable error, such as a new game that
///   cannot be loaded.
pub fn run_repl(game: &mut Game, renderer: &Renderer, input: &Rc<RefCell<InputManager>>) -> Result<()> {
    input.borrow_mut().set_completions(game.vocabulary.command_phrases());

    print_all(renderer, &opening(game))?;
    let started = choose_game(game);
    print_all(renderer, &started)?;
    if let Some(response) = fatal(&started) {
        bail!("could not start a game: {}", response.text().join(" "));
    }

    while game.active {
        renderer.print_prompt(TURN_PROMPT, game.scroll_speed)?;
        let event = input.borrow_mut().read_line(input::INPUT_PROMPT)?;
        let line = match event {
            InputEvent::Line(line) => line,
            InputEvent::Eof | InputEvent::Interrupted => {
                info!("input ended; leaving the game");
                break;
            },
        };
        if line.trim().is_empty() {
            continue;
        }
        let printout = take_turn(game, &line);
        print_all(renderer, &printout)?;
        if let Some(response) = fatal(&printout) {
            bail!("unrecoverable error: {}", response.text().join(" "));
        }
    }

    print_all(renderer, &closing(game))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::ScriptedConfirm;
    use crate::store::FileStore;
    use crate::test_support::{test_vocabulary, test_world};
    use tempfile::{TempDir, tempdir};

    fn game_with_answers(answers: &[&str]) -> (Game, TempDir) {
        let dir = tempdir().unwrap();
        let store = FileStore::new(dir.path().join("data"), dir.path().join("save"));
        let game = Game::from_parts(
            test_world(),
            test_vocabulary(),
            Box::new(store),
            Box::new(ScriptedConfirm::new(answers.iter().copied())),
        );
        (game, dir)
    }

    #[test]
    fn opening_tolerates_missing_art_and_stories() {
        let (game, _dir) = game_with_answers(&[]);
        let out = opening(&game);
        assert_eq!(out.len(), 3);
        assert!(out.iter().all(|(response, _)| response.is_failure()));
    }

    #[test]
    fn choose_game_without_data_is_fatal() {
        let (mut game, _dir) = game_with_answers(&[]);
        let out = choose_game(&mut game);
        assert!(fatal(&out).is_some());
    }

    #[test]
    fn winning_rolls_credits_once() {
        let (mut game, _dir) = game_with_answers(&[]);
        game.stories.insert(ENDING_STORY.into(), vec!["The end.".into()]);
        game.world.player.add_item("torch");
        let out = take_turn(&mut game, "inventory");
        assert_eq!(out.len(), 2);
        assert_eq!(out[1].1, ScrollSpeed::Slow);
        assert!(game.world.player.watched_end_credits);
        assert_eq!(take_turn(&mut game, "inventory").len(), 1);
    }

    #[test]
    fn closing_declined_save_reports_not_saved() {
        let (mut game, _dir) = game_with_answers(&["no"]);
        game.world.dirty = true;
        let text: Vec<String> = closing(&mut game).iter().flat_map(|(r, _)| r.text()).collect();
        assert_eq!(text, vec![NOT_SAVED, FAREWELL]);
    }

    #[test]
    fn closing_accepted_save_writes_files() {
        let (mut game, dir) = game_with_answers(&["yes"]);
        game.world.dirty = true;
        let text: Vec<String> = closing(&mut game).iter().flat_map(|(r, _)| r.text()).collect();
        assert_eq!(text, vec![system::SAVED, FAREWELL]);
        assert!(dir.path().join("save").join("player.json").exists());
    }

    #[test]
    fn closing_clean_world_just_says_goodbye() {
        let (mut game, _dir) = game_with_answers(&[]);
        let out = closing(&mut game);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].0.text(), vec![FAREWELL]);
    }
}
