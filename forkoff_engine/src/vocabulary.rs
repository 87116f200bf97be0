//! Vocabulary tables loaded from `language.json`.
//!
//! Every lookup here is exact, case-insensitive membership in a phrase list.
//! Nothing is fuzzy or prefix-matched. Callers that care about multi-word phrases
//! try the longer phrase first.

use std::collections::HashMap;

use serde::Deserialize;

use crate::action::AchievableAction;
use crate::render::ScrollSpeed;

/// Action tables in resolution precedence order.
const ACTION_TABLES: &[(&str, AchievableAction)] = &[
    ("move_requests", AchievableAction::Move),
    ("look_requests", AchievableAction::Look),
    ("take_requests", AchievableAction::Take),
    ("drop_requests", AchievableAction::Drop),
    ("exit_requests", AchievableAction::Exit),
    ("inspect_requests", AchievableAction::Inspect),
    ("save_requests", AchievableAction::SaveGame),
    ("load_requests", AchievableAction::LoadGame),
    ("new_game_requests", AchievableAction::NewGame),
    ("inventory_requests", AchievableAction::Inventory),
    ("game_story_requests", AchievableAction::GameStory),
    ("help_requests", AchievableAction::Help),
    ("use_requests", AchievableAction::Use),
    ("chew_requests", AchievableAction::Chew),
    ("pull_requests", AchievableAction::Pull),
    ("objective_requests", AchievableAction::Objectives),
    ("alias", AchievableAction::Alias),
    ("sit_requests", AchievableAction::Sit),
    ("scroll_requests", AchievableAction::Scroll),
    ("clean_requests", AchievableAction::Clean),
    ("drink_requests", AchievableAction::Drink),
    ("hints", AchievableAction::Hint),
    ("game_map", AchievableAction::GameMap),
    ("climb_requests", AchievableAction::Climb),
    ("turn_on_requests", AchievableAction::TurnOn),
    ("open_requests", AchievableAction::Open),
    ("play_requests", AchievableAction::Play),
    ("flush_requests", AchievableAction::Flush),
    ("draw_requests", AchievableAction::Draw),
];

/// Tables whose phrases reverse-resolve to a fixed command keyword.
const KEYWORD_TABLES: &[(&str, &str)] = &[
    ("move_requests", "move"),
    ("look_requests", "look"),
    ("take_requests", "take"),
    ("drop_requests", "drop"),
    ("exit_requests", "exit"),
    ("inspect_requests", "inspect"),
    ("save_requests", "save"),
    ("load_requests", "load"),
    ("new_game_requests", "new"),
    ("inventory_requests", "inventory"),
    ("help_requests", "help"),
    ("use_requests", "use"),
    ("chew_requests", "chew"),
    ("pull_requests", "pull"),
    ("alias", "alias"),
    ("sit_requests", "sit"),
    ("move_west", "west"),
    ("move_east", "east"),
    ("move_south", "south"),
    ("move_north", "north"),
    ("yes_words", "yes"),
    ("fast_words", "fast"),
    ("medium_words", "medium"),
    ("slow_words", "slow"),
    ("scroll_requests", "scroll"),
    ("off_words", "off"),
    ("clean_requests", "clean"),
    ("drink_requests", "drink"),
    ("hints", "hint"),
    ("game_map", "game_map"),
    ("climb_requests", "climb"),
    ("turn_on_requests", "turn on"),
    ("open_requests", "open"),
    ("play_requests", "play"),
    ("flush_requests", "flush"),
];

/// Search order for synonym listings.
const SYNONYM_TABLES: &[&str] = &[
    "help_requests",
    "move_requests",
    "inspect_requests",
    "look_requests",
    "take_requests",
    "drop_requests",
    "exit_requests",
    "save_requests",
    "load_requests",
    "new_game_requests",
    "chew_requests",
    "pull_requests",
    "yes_words",
    "move_west",
    "move_east",
    "move_north",
    "move_south",
    "sit_requests",
    "use_requests",
    "alias",
    "inventory_requests",
    "fast_words",
    "slow_words",
    "medium_words",
    "scroll_requests",
    "off_words",
    "clean_requests",
    "drink_requests",
    "hints",
    "game_map",
    "climb_requests",
    "turn_on_requests",
    "open_requests",
    "play_requests",
    "flush_requests",
];

const FILLER_TABLE: &str = "words_to_remove";

/// Compass directions a room may expose as shortcuts into its exits.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::North => "north",
            Direction::South => "south",
            Direction::East => "east",
            Direction::West => "west",
        }
    }

    fn table(self) -> &'static str {
        match self {
            Direction::North => "move_north",
            Direction::South => "move_south",
            Direction::East => "move_east",
            Direction::West => "move_west",
        }
    }

    const ALL: [Direction; 4] = [Direction::North, Direction::South, Direction::East, Direction::West];
}

/// On-disk shape of `language.json`.
#[derive(Debug, Default, Deserialize)]
pub struct RawVocabulary {
    #[serde(default)]
    pub help_contents: Vec<String>,
    #[serde(flatten)]
    pub tables: HashMap<String, Vec<String>>,
}

/// Immutable phrase tables shared by the interpreter, resolver and handlers.
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    tables: HashMap<String, Vec<String>>,
    help: Vec<String>,
}

impl From<RawVocabulary> for Vocabulary {
    fn from(raw: RawVocabulary) -> Self {
        let tables = raw
            .tables
            .into_iter()
            .map(|(name, phrases)| {
                let lowered = phrases
                    .into_iter()
                    .map(|phrase| phrase.trim().to_lowercase())
                    .filter(|phrase| !phrase.is_empty())
                    .collect();
                (name, lowered)
            })
            .collect();
        Self {
            tables,
            help: raw.help_contents,
        }
    }
}

impl Vocabulary {
    /// Build a vocabulary from table name / phrase pairs plus help lines.
    pub fn from_tables<I, K, P>(tables: I, help: Vec<String>) -> Self
    where
        I: IntoIterator<Item = (K, Vec<P>)>,
        K: Into<String>,
        P: Into<String>,
    {
        RawVocabulary {
            help_contents: help,
            tables: tables
                .into_iter()
                .map(|(name, phrases)| (name.into(), phrases.into_iter().map(Into::into).collect()))
                .collect(),
        }
        .into()
    }

    fn table(&self, name: &str) -> &[String] {
        self.tables.get(name).map(Vec::as_slice).unwrap_or_default()
    }

    fn contains(&self, table: &str, phrase: &str) -> bool {
        let needle = phrase.trim().to_lowercase();
        self.table(table).iter().any(|entry| *entry == needle)
    }

    /// Canonical action for a word or phrase, `Unknown` when no table lists it.
    pub fn resolve_action(&self, phrase: &str) -> AchievableAction {
        ACTION_TABLES
            .iter()
            .find(|(table, _)| self.contains(table, phrase))
            .map_or(AchievableAction::Unknown, |(_, action)| *action)
    }

    pub fn resolve_direction(&self, word: &str) -> Option<Direction> {
        Direction::ALL
            .into_iter()
            .find(|direction| self.contains(direction.table(), word))
    }

    pub fn is_affirmative(&self, word: &str) -> bool {
        self.contains("yes_words", word)
    }

    pub fn is_filler(&self, word: &str) -> bool {
        self.contains(FILLER_TABLE, word)
    }

    /// Fixed command keyword a phrase stands for, e.g. `"n"` -> `"north"`.
    pub fn command_keyword(&self, phrase: &str) -> Option<&'static str> {
        KEYWORD_TABLES
            .iter()
            .find(|(table, _)| self.contains(table, phrase))
            .map(|(_, keyword)| *keyword)
    }

    /// Every phrase in the first table listing `word`, or nothing.
    pub fn synonyms_of(&self, word: &str) -> &[String] {
        SYNONYM_TABLES
            .iter()
            .find(|table| self.contains(table, word))
            .map(|table| self.table(table))
            .unwrap_or_default()
    }

    pub fn scroll_speed(&self, word: &str) -> Option<ScrollSpeed> {
        if self.contains("fast_words", word) {
            Some(ScrollSpeed::Fast)
        } else if self.contains("medium_words", word) {
            Some(ScrollSpeed::Medium)
        } else if self.contains("slow_words", word) {
            Some(ScrollSpeed::Slow)
        } else if self.contains("off_words", word) {
            Some(ScrollSpeed::Off)
        } else {
            None
        }
    }

    pub fn help_lines(&self) -> &[String] {
        &self.help
    }

    /// Every action and direction phrase, sorted and deduplicated. Used for tab completion.
    pub fn command_phrases(&self) -> Vec<String> {
        let mut phrases: Vec<String> = ACTION_TABLES
            .iter()
            .map(|(table, _)| *table)
            .chain(Direction::ALL.iter().map(|direction| direction.table()))
            .flat_map(|table| self.table(table).iter().cloned())
            .collect();
        phrases.sort_unstable();
        phrases.dedup();
        phrases
    }
}
