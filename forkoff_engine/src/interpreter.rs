//! Command interpreter.
//!
//! Turns one line of raw text into exactly one [`Intent`]. Filler words are
//! stripped first; what remains is read as a one-word, two-word or longer
//! utterance, always trying the longest verb phrase before shorter ones and
//! falling back to reading the words as a place to move to.

use log::{debug, info};

use crate::action::{AchievableAction, Intent};
use crate::render::ScrollSpeed;
use crate::resolver;
use crate::vocabulary::Vocabulary;
use crate::world::GameWorld;

pub const LOAD_CONFIRMATION: &str = "Are you sure you want to load a saved game?";

/// Synchronous yes/no prompt used before destructive requests.
pub trait Confirm {
    /// Ask `question` and return the raw answer, or `None` if input ended.
    fn ask(&mut self, question: &str) -> Option<String>;

    /// Follow the game's text speed when printing questions.
    fn set_scroll_speed(&mut self, _speed: ScrollSpeed) {}
}

/// Answers every question from a fixed script. Runs out by answering `None`.
#[derive(Debug, Default, Clone)]
pub struct ScriptedConfirm {
    answers: Vec<String>,
    pub asked: Vec<String>,
}

impl ScriptedConfirm {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut answers: Vec<String> = answers.into_iter().map(Into::into).collect();
        answers.reverse();
        Self {
            answers,
            asked: Vec::new(),
        }
    }
}

impl Confirm for ScriptedConfirm {
    fn ask(&mut self, question: &str) -> Option<String> {
        self.asked.push(question.to_string());
        self.answers.pop()
    }
}

pub struct Interpreter<'a> {
    world: &'a GameWorld,
    vocabulary: &'a Vocabulary,
    development: bool,
}

impl<'a> Interpreter<'a> {
    pub fn new(world: &'a GameWorld, vocabulary: &'a Vocabulary, development: bool) -> Self {
        Self {
            world,
            vocabulary,
            development,
        }
    }

    /// Build the intent for one line of input.
    pub fn interpret(&self, raw: &str, from_player: bool, confirm: &mut dyn Confirm) -> Intent {
        let words = self.tokenize(raw);
        let intent = match words.as_slice() {
            [] => Intent::silent(),
            [word] => self.one_word(word, from_player, confirm),
            [first, second] => self.two_words(first, second, from_player, confirm),
            _ => self.many_words(&words, from_player, confirm),
        };
        debug!("interpreted {raw:?} as {intent:?}");
        intent
    }

    /// Lower-cased tokens with filler words removed.
    pub fn tokenize(&self, raw: &str) -> Vec<String> {
        raw.split_whitespace()
            .map(str::to_lowercase)
            .filter(|word| !self.vocabulary.is_filler(word))
            .collect()
    }

    fn one_word(&self, word: &str, from_player: bool, confirm: &mut dyn Confirm) -> Intent {
        match self.action_for(word, from_player, confirm) {
            AchievableAction::GameMap => Intent::with_target(AchievableAction::GameMap, "game_map"),
            AchievableAction::Unknown => match self.valid_target(&[word], from_player) {
                Some(target) => Intent::with_target(AchievableAction::Move, target),
                None => Intent::untargeted(AchievableAction::Unknown),
            },
            action => Intent::untargeted(action),
        }
    }

    fn two_words(&self, first: &str, second: &str, from_player: bool, confirm: &mut dyn Confirm) -> Intent {
        let phrase = format!("{first} {second}");
        match self.action_for(&phrase, from_player, confirm) {
            AchievableAction::GameMap => return Intent::with_target(AchievableAction::GameMap, "game_map"),
            AchievableAction::Unknown => {},
            action => return Intent::new(action, Vec::new()),
        }

        let action = self.action_for(first, from_player, confirm);
        if action != AchievableAction::Unknown {
            let target = match self.valid_target(&[second], from_player) {
                None if action == AchievableAction::Alias => Some(second.to_string()),
                found => found,
            };
            return Intent::new(action, target.into_iter().map(Some).collect());
        }

        let targets = self.valid_target(&[first, second], from_player);
        Intent::new(AchievableAction::Move, targets.into_iter().map(Some).collect())
    }

    fn many_words(&self, words: &[String], from_player: bool, confirm: &mut dyn Confirm) -> Intent {
        let phrase = format!("{} {}", words[0], words[1]);
        match self.action_for(&phrase, from_player, confirm) {
            AchievableAction::GameMap => return Intent::with_target(AchievableAction::GameMap, "game_map"),
            AchievableAction::Unknown => {},
            action => return Intent::new(action, self.all_valid_targets(&words[2..], from_player)),
        }

        let action = self.action_for(&words[0], from_player, confirm);
        if action != AchievableAction::Unknown {
            let mut targets = self.all_valid_targets(&words[1..], from_player);
            if targets.is_empty() && action == AchievableAction::Alias {
                targets.push(Some(words[1..].join(" ")));
            }
            return Intent::new(action, targets);
        }

        Intent::new(AchievableAction::Move, self.all_valid_targets(words, from_player))
    }

    /// Resolve a phrase to an action, applying the confirmation and context gates.
    fn action_for(&self, phrase: &str, from_player: bool, confirm: &mut dyn Confirm) -> AchievableAction {
        match self.vocabulary.resolve_action(phrase) {
            AchievableAction::LoadGame => {
                let accepted = confirm
                    .ask(LOAD_CONFIRMATION)
                    .is_some_and(|answer| self.vocabulary.is_affirmative(&answer));
                if accepted {
                    AchievableAction::LoadGame
                } else {
                    info!("player declined to load a saved game");
                    AchievableAction::LoadGameDenied
                }
            },
            AchievableAction::GameStory if from_player => AchievableAction::Unknown,
            AchievableAction::Objectives if !self.development => AchievableAction::Unknown,
            action => action,
        }
    }

    fn valid_target<S: AsRef<str>>(&self, words: &[S], from_player: bool) -> Option<String> {
        resolver::resolve(self.world, self.vocabulary, words, from_player).filter(|target| !target.is_empty())
    }

    /// Every recognizable span, found by shrinking a window from the whole list
    /// down to single words, sliding it left to right, and restarting over what is
    /// left each time a span matches.
    pub fn all_valid_targets(&self, words: &[String], from_player: bool) -> Vec<Option<String>> {
        let mut remaining = words.to_vec();
        let mut targets = Vec::new();
        let mut window = remaining.len();
        let mut start = 0;
        while window > 0 {
            let end = start + window;
            if let Some(target) = self.valid_target(&remaining[start..end], from_player) {
                targets.push(Some(target));
                remaining.drain(start..end);
                window = remaining.len();
                start = 0;
                continue;
            }
            if end == remaining.len() {
                window -= 1;
                start = 0;
            } else {
                start += 1;
            }
        }
        targets
    }
}
