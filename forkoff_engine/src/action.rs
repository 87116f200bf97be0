//! Canonical actions and the [`Intent`] built from one line of input.

use std::fmt;

/// Every action the interpreter can resolve a phrase to.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum AchievableAction {
    Exit,
    Move,
    Look,
    Take,
    Drop,
    GameStory,
    Inspect,
    Inventory,
    LoadGame,
    /// The player declined the load confirmation. Never routed.
    LoadGameDenied,
    NewGame,
    SaveGame,
    Help,
    Use,
    Pull,
    Chew,
    Objectives,
    Alias,
    Sit,
    Scroll,
    Clean,
    Drink,
    Hint,
    GameMap,
    Climb,
    TurnOn,
    Open,
    Play,
    Flush,
    Draw,
    Unknown,
}

impl AchievableAction {
    /// Key used in an item's interaction table, for actions that have one.
    pub fn interaction_key(self) -> Option<&'static str> {
        match self {
            Self::Use => Some("use"),
            Self::Chew => Some("chew"),
            Self::Pull => Some("pull"),
            Self::Sit => Some("sit"),
            Self::Clean => Some("clean"),
            Self::Drink => Some("drink"),
            Self::Climb => Some("climb"),
            Self::TurnOn => Some("turn on"),
            Self::Open => Some("open"),
            Self::Play => Some("play"),
            Self::Flush => Some("flush"),
            _ => None,
        }
    }
}

impl fmt::Display for AchievableAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}

/// What the player asked for: an action plus its target slots.
///
/// A slot holding `None` means the target is absent. The empty string is never
/// used as a "no target" marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Intent {
    pub action: AchievableAction,
    pub targets: Vec<Option<String>>,
}

impl Intent {
    pub fn new(action: AchievableAction, targets: Vec<Option<String>>) -> Self {
        Self { action, targets }
    }

    /// Intent with a single present target.
    pub fn with_target(action: AchievableAction, target: impl Into<String>) -> Self {
        Self::new(action, vec![Some(target.into())])
    }

    /// Intent with one absent target slot.
    pub fn untargeted(action: AchievableAction) -> Self {
        Self::new(action, vec![None])
    }

    /// The intent produced by input that was empty after filler stripping.
    pub fn silent() -> Self {
        Self::new(AchievableAction::Unknown, Vec::new())
    }

    /// True for the silent re-prompt intent.
    pub fn is_silent(&self) -> bool {
        self.action == AchievableAction::Unknown && self.targets.is_empty()
    }

    /// The first target slot, if it is present and non-empty.
    pub fn primary_target(&self) -> Option<&str> {
        self.targets
            .first()
            .and_then(Option::as_deref)
            .filter(|target| !target.is_empty())
    }

    /// All present targets, in order.
    pub fn present_targets(&self) -> Vec<&str> {
        self.targets.iter().filter_map(Option::as_deref).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_target_skips_absent_slot() {
        assert_eq!(Intent::untargeted(AchievableAction::Look).primary_target(), None);
        assert_eq!(Intent::with_target(AchievableAction::Take, "fork").primary_target(), Some("fork"));
    }

    #[test]
    fn silent_intent_is_distinct_from_unresolved_word() {
        assert!(Intent::silent().is_silent());
        assert!(!Intent::untargeted(AchievableAction::Unknown).is_silent());
    }

    #[test]
    fn interaction_keys_cover_single_target_verbs() {
        assert_eq!(AchievableAction::TurnOn.interaction_key(), Some("turn on"));
        assert_eq!(AchievableAction::Take.interaction_key(), None);
    }
}
