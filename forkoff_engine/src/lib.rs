#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]

pub const FORKOFF_VERSION: &str = env!("CARGO_PKG_VERSION");

// Core modules
pub mod action;
pub mod config;
pub mod data_paths;
pub mod game;
pub mod helpers;
pub mod interpreter;
pub mod item;
pub mod loader;
pub mod objective;
pub mod player;
pub mod render;
pub mod repl;
pub mod resolver;
pub mod response;
pub mod room;
pub mod router;
pub mod store;
pub mod style;
pub mod vocabulary;
pub mod world;

#[cfg(test)]
mod test_support;

// Re-exports for convenience
pub use action::{AchievableAction, Intent};
pub use config::Settings;
pub use game::Game;
pub use interpreter::{Confirm, ScriptedConfirm};
pub use item::Item;
pub use loader::load_world;
pub use objective::Objective;
pub use player::Player;
pub use render::{Renderer, ScrollSpeed};
pub use repl::run_repl;
pub use response::{Message, RequestStatus, Response};
pub use room::Room;
pub use store::{FileStore, GameStore, LoadMode, StoreError};
pub use vocabulary::Vocabulary;
pub use world::GameWorld;
