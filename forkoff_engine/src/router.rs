//! Intent dispatch.
//!
//! Each action belongs to exactly one capability group. Routing is a membership
//! test per group, in a fixed order, and each group then matches the specific
//! action again. Both levels fall back to the same failure, so an action that
//! drifts out of a group's match is reported instead of silently ignored.

use log::warn;

use crate::action::{AchievableAction, Intent};
use crate::game::Game;
use crate::repl::{interaction, inventory, movement, system};
use crate::response::Response;

pub const UNSURE: &str = "You are unsure how to do that.";

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum CapabilityGroup {
    Movement,
    GameMeta,
    Inventory,
    Interaction,
}

const MOVEMENT_ACTIONS: &[AchievableAction] = &[AchievableAction::Move, AchievableAction::Look];

const GAME_META_ACTIONS: &[AchievableAction] = &[
    AchievableAction::Exit,
    AchievableAction::GameStory,
    AchievableAction::SaveGame,
    AchievableAction::LoadGame,
    AchievableAction::NewGame,
    AchievableAction::Help,
    AchievableAction::Objectives,
    AchievableAction::Alias,
    AchievableAction::Scroll,
    AchievableAction::Hint,
    AchievableAction::GameMap,
    AchievableAction::Draw,
];

const INVENTORY_ACTIONS: &[AchievableAction] = &[
    AchievableAction::Take,
    AchievableAction::Drop,
    AchievableAction::Inventory,
    AchievableAction::Inspect,
];

const INTERACTION_ACTIONS: &[AchievableAction] = &[
    AchievableAction::Pull,
    AchievableAction::Chew,
    AchievableAction::Use,
    AchievableAction::Sit,
    AchievableAction::Clean,
    AchievableAction::Drink,
    AchievableAction::Climb,
    AchievableAction::TurnOn,
    AchievableAction::Open,
    AchievableAction::Play,
    AchievableAction::Flush,
];

/// Group memberships in routing order.
const GROUPS: &[(CapabilityGroup, &[AchievableAction])] = &[
    (CapabilityGroup::Movement, MOVEMENT_ACTIONS),
    (CapabilityGroup::GameMeta, GAME_META_ACTIONS),
    (CapabilityGroup::Inventory, INVENTORY_ACTIONS),
    (CapabilityGroup::Interaction, INTERACTION_ACTIONS),
];

/// The group that handles `action`, if any.
pub fn group_of(action: AchievableAction) -> Option<CapabilityGroup> {
    GROUPS
        .iter()
        .find(|(_, members)| members.contains(&action))
        .map(|(group, _)| *group)
}

/// Dispatch an intent to its handler group.
pub fn route(game: &mut Game, intent: &Intent) -> Response {
    match group_of(intent.action) {
        Some(CapabilityGroup::Movement) => movement::handle(&mut game.world, &game.vocabulary, intent),
        Some(CapabilityGroup::GameMeta) => system::handle(game, intent),
        Some(CapabilityGroup::Inventory) => inventory::handle(&mut game.world, intent),
        Some(CapabilityGroup::Interaction) => interaction::handle(&mut game.world, intent),
        None => {
            warn!("no handler group for {}", intent.action);
            Response::failure(UNSURE)
        },
    }
}
