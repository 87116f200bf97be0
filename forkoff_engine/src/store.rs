//! Persistence collaborator.
//!
//! The engine only ever talks to a [`GameStore`]. [`FileStore`] is the JSON-on-disk
//! implementation: a read-only data directory holding the fresh game and the
//! vocabulary, story and art tables, plus a save directory holding one resumable
//! game.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use log::info;
use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::item::Item;
use crate::objective::Objective;
use crate::player::Player;
use crate::room::Room;
use crate::vocabulary::{RawVocabulary, Vocabulary};
use crate::world::GameWorld;

pub const ROOMS_FILE: &str = "rooms.json";
pub const ITEMS_FILE: &str = "items.json";
pub const PLAYER_FILE: &str = "player.json";
pub const OBJECTIVES_FILE: &str = "objectives.json";
pub const LANGUAGE_FILE: &str = "language.json";
pub const STORIES_FILE: &str = "game_stories.json";
pub const ART_FILE: &str = "game_art.json";

const SAVE_FILES: [&str; 4] = [PLAYER_FILE, ROOMS_FILE, ITEMS_FILE, OBJECTIVES_FILE];

/// Named multi-line texts: stories and art.
pub type NamedText = HashMap<String, Vec<String>>;

/// Which copy of the world to read.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum LoadMode {
    /// The pristine world from the data directory.
    New,
    /// The last saved game.
    Resume,
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("unable to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("unable to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{path} is not valid game data: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("unable to encode {file}: {source}")]
    Encode {
        file: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

/// Load/save contract between the engine and wherever the game lives.
pub trait GameStore {
    /// # Errors
    /// Fails if the rooms cannot be read or parsed.
    fn load_rooms(&self, mode: LoadMode) -> Result<Vec<Room>, StoreError>;
    /// # Errors
    /// Fails if the items cannot be read or parsed.
    fn load_items(&self, mode: LoadMode) -> Result<Vec<Item>, StoreError>;
    /// # Errors
    /// Fails if the player cannot be read or parsed.
    fn load_player(&self, mode: LoadMode) -> Result<Player, StoreError>;
    /// # Errors
    /// Fails if the objectives cannot be read or parsed.
    fn load_objectives(&self, mode: LoadMode) -> Result<Vec<Objective>, StoreError>;
    /// # Errors
    /// Fails if the vocabulary cannot be read or parsed.
    fn load_vocabulary(&self) -> Result<Vocabulary, StoreError>;
    /// # Errors
    /// Fails if the stories cannot be read or parsed.
    fn load_stories(&self) -> Result<NamedText, StoreError>;
    /// # Errors
    /// Fails if the art cannot be read or parsed.
    fn load_art(&self) -> Result<NamedText, StoreError>;
    /// # Errors
    /// Fails if any part of the world cannot be written.
    fn save_all(&self, world: &GameWorld) -> Result<(), StoreError>;
    /// True if a complete saved game exists.
    fn has_saved_game(&self) -> bool;
}

/// JSON files on disk.
#[derive(Debug, Clone)]
pub struct FileStore {
    data_dir: PathBuf,
    save_dir: PathBuf,
}

impl FileStore {
    pub fn new(data_dir: impl Into<PathBuf>, save_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            save_dir: save_dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn save_dir(&self) -> &Path {
        &self.save_dir
    }

    fn world_dir(&self, mode: LoadMode) -> &Path {
        match mode {
            LoadMode::New => &self.data_dir,
            LoadMode::Resume => &self.save_dir,
        }
    }

    fn write_json<T: Serialize + ?Sized>(&self, file: &'static str, value: &T) -> Result<(), StoreError> {
        let path = self.save_dir.join(file);
        let json = serde_json::to_string_pretty(value).map_err(|source| StoreError::Encode { file, source })?;
        fs::write(&path, json).map_err(|source| StoreError::Write { path, source })
    }
}

fn read_json<T: DeserializeOwned>(path: PathBuf) -> Result<T, StoreError> {
    let text = fs::read_to_string(&path).map_err(|source| StoreError::Read {
        path: path.clone(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| StoreError::Parse { path, source })
}

impl GameStore for FileStore {
    fn load_rooms(&self, mode: LoadMode) -> Result<Vec<Room>, StoreError> {
        let rooms: Vec<Room> = read_json(self.world_dir(mode).join(ROOMS_FILE))?;
        info!("{} rooms loaded ({mode:?})", rooms.len());
        Ok(rooms)
    }

    fn load_items(&self, mode: LoadMode) -> Result<Vec<Item>, StoreError> {
        let items: Vec<Item> = read_json(self.world_dir(mode).join(ITEMS_FILE))?;
        info!("{} items loaded ({mode:?})", items.len());
        Ok(items)
    }

    fn load_player(&self, mode: LoadMode) -> Result<Player, StoreError> {
        let player: Player = read_json(self.world_dir(mode).join(PLAYER_FILE))?;
        info!("player '{}' loaded in '{}' ({mode:?})", player.name, player.location);
        Ok(player)
    }

    fn load_objectives(&self, mode: LoadMode) -> Result<Vec<Objective>, StoreError> {
        let objectives: Vec<Objective> = read_json(self.world_dir(mode).join(OBJECTIVES_FILE))?;
        info!("{} objectives loaded ({mode:?})", objectives.len());
        Ok(objectives)
    }

    fn load_vocabulary(&self) -> Result<Vocabulary, StoreError> {
        let raw: RawVocabulary = read_json(self.data_dir.join(LANGUAGE_FILE))?;
        info!("{} vocabulary tables loaded", raw.tables.len());
        Ok(raw.into())
    }

    fn load_stories(&self) -> Result<NamedText, StoreError> {
        let stories: NamedText = read_json(self.data_dir.join(STORIES_FILE))?;
        info!("{} stories loaded", stories.len());
        Ok(stories)
    }

    fn load_art(&self) -> Result<NamedText, StoreError> {
        let art: NamedText = read_json(self.data_dir.join(ART_FILE))?;
        info!("{} art pieces loaded", art.len());
        Ok(art)
    }

    fn save_all(&self, world: &GameWorld) -> Result<(), StoreError> {
        fs::create_dir_all(&self.save_dir).map_err(|source| StoreError::Write {
            path: self.save_dir.clone(),
            source,
        })?;
        self.write_json(PLAYER_FILE, &world.player)?;
        self.write_json(ROOMS_FILE, &world.rooms)?;
        self.write_json(ITEMS_FILE, &world.items)?;
        self.write_json(OBJECTIVES_FILE, &world.objectives)?;
        info!("game saved to {}", self.save_dir.display());
        Ok(())
    }

    fn has_saved_game(&self) -> bool {
        SAVE_FILES.iter().all(|file| self.save_dir.join(file).is_file())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_world;
    use tempfile::tempdir;

    #[test]
    fn save_then_resume_restores_world() {
        let dir = tempdir().unwrap();
        let store = FileStore::new(dir.path().join("data"), dir.path().join("save"));
        assert!(!store.has_saved_game());

        let mut world = test_world();
        world.player.location = "kitchen".into();
        world.player.inventory.push("fork".into());
        world.rooms[1].inventory.retain(|name| name != "fork");
        world.item_mut("fork").unwrap().discovered = true;
        store.save_all(&world).unwrap();
        assert!(store.has_saved_game());

        let player = store.load_player(LoadMode::Resume).unwrap();
        assert_eq!(player, world.player);
        let items = store.load_items(LoadMode::Resume).unwrap();
        assert!(items.iter().find(|item| item.name == "fork").unwrap().discovered);
        let rooms = store.load_rooms(LoadMode::Resume).unwrap();
        assert_eq!(rooms, world.rooms);
        let objectives = store.load_objectives(LoadMode::Resume).unwrap();
        assert_eq!(objectives[0].name, "find torch");
    }

    #[test]
    fn missing_files_report_the_path() {
        let dir = tempdir().unwrap();
        let store = FileStore::new(dir.path(), dir.path().join("save"));
        let err = store.load_rooms(LoadMode::New).unwrap_err();
        assert!(matches!(err, StoreError::Read { .. }));
        assert!(err.to_string().contains(ROOMS_FILE));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(PLAYER_FILE), "{ not json").unwrap();
        let store = FileStore::new(dir.path(), dir.path());
        assert!(matches!(store.load_player(LoadMode::New), Err(StoreError::Parse { .. })));
    }

    #[test]
    fn partial_save_is_not_resumable() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(PLAYER_FILE), "{}").unwrap();
        let store = FileStore::new(dir.path(), dir.path());
        assert!(!store.has_saved_game());
    }
}
