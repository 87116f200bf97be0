//! The game context handed to the shell.
//!
//! [`Game`] bundles the world with everything a turn needs: the vocabulary, story
//! and art tables, the store, the settings and the confirmation prompt.
//! [`Game::interpret_and_route`] is the single entry point the shell calls per
//! line of input.

use log::info;

use crate::action::AchievableAction;
use crate::config::Settings;
use crate::interpreter::{Confirm, Interpreter};
use crate::loader::load_world;
use crate::render::ScrollSpeed;
use crate::response::Response;
use crate::router;
use crate::store::{GameStore, LoadMode, NamedText, StoreError};
use crate::vocabulary::Vocabulary;
use crate::world::GameWorld;

pub const LOAD_DENIED: &str = "You've chosen not to load a game.";

pub struct Game {
    pub world: GameWorld,
    pub vocabulary: Vocabulary,
    pub stories: NamedText,
    pub art: NamedText,
    pub scroll_speed: ScrollSpeed,
    pub development: bool,
    /// Cleared by the exit command; the shell stops when this is false.
    pub active: bool,
    store: Box<dyn GameStore>,
    confirm: Box<dyn Confirm>,
}

impl Game {
    /// Load the static tables and start with an empty world. The shell then loads a
    /// new or saved game through the normal `new`/`load` commands.
    ///
    /// # Errors
    /// Fails if the vocabulary, story or art tables cannot be loaded.
    pub fn new(store: Box<dyn GameStore>, mut confirm: Box<dyn Confirm>, settings: &Settings) -> Result<Self, StoreError> {
        let vocabulary = store.load_vocabulary()?;
        let stories = store.load_stories()?;
        let art = store.load_art()?;
        confirm.set_scroll_speed(settings.scroll_speed);
        Ok(Self {
            world: GameWorld::default(),
            vocabulary,
            stories,
            art,
            scroll_speed: settings.scroll_speed,
            development: settings.development,
            active: true,
            store,
            confirm,
        })
    }

    /// Assemble a game from already built parts.
    pub fn from_parts(
        world: GameWorld,
        vocabulary: Vocabulary,
        store: Box<dyn GameStore>,
        confirm: Box<dyn Confirm>,
    ) -> Self {
        Self {
            world,
            vocabulary,
            stories: NamedText::new(),
            art: NamedText::new(),
            scroll_speed: ScrollSpeed::default(),
            development: false,
            active: true,
            store,
            confirm,
        }
    }

    /// Interpret one line of input and route it. Empty input yields an empty success.
    pub fn interpret_and_route(&mut self, raw: &str, from_player: bool) -> Response {
        let intent = Interpreter::new(&self.world, &self.vocabulary, self.development).interpret(
            raw,
            from_player,
            self.confirm.as_mut(),
        );
        if intent.is_silent() {
            return Response::empty();
        }
        let response = if intent.action == AchievableAction::LoadGameDenied {
            Response::failure(LOAD_DENIED)
        } else {
            router::route(self, &intent)
        };
        self.world.check_victory();
        response
    }

    /// Change the text speed for responses and confirmation questions alike.
    pub fn set_scroll_speed(&mut self, speed: ScrollSpeed) {
        self.scroll_speed = speed;
        self.confirm.set_scroll_speed(speed);
    }

    /// Ask the player a yes/no question through the configured prompt.
    pub fn confirm(&mut self, question: &str) -> bool {
        self.confirm
            .ask(question)
            .is_some_and(|answer| self.vocabulary.is_affirmative(&answer))
    }

    pub fn has_saved_game(&self) -> bool {
        self.store.has_saved_game()
    }

    /// Replace the world with a freshly loaded one. The current world is untouched
    /// on failure.
    ///
    /// # Errors
    /// Propagates the store's failure.
    pub fn load(&mut self, mode: LoadMode) -> Result<(), StoreError> {
        let world = load_world(self.store.as_ref(), mode)?;
        self.world = world;
        self.world.dirty = false;
        info!("world replaced ({mode:?})");
        Ok(())
    }

    /// # Errors
    /// Propagates the store's failure.
    pub fn save(&mut self) -> Result<(), StoreError> {
        self.store.save_all(&self.world)?;
        self.world.dirty = false;
        Ok(())
    }
}
