//! Runtime settings.
//!
//! Settings come from built-in defaults, optionally overridden by a TOML file
//! (`forkoff.toml` by default) and then by command-line flags. A missing file is
//! normal; an unreadable or malformed one is logged and ignored.

use std::fs;
use std::path::{Path, PathBuf};

use log::{info, warn};
use serde::Deserialize;

use crate::data_paths::{SAVE_DIR, data_root};
use crate::render::ScrollSpeed;

pub const DEFAULT_CONFIG_FILE: &str = "forkoff.toml";

/// On-disk shape of the settings file. Every field is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct SettingsFile {
    data_dir: Option<PathBuf>,
    save_dir: Option<PathBuf>,
    scroll_speed: Option<String>,
    development: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub data_dir: PathBuf,
    pub save_dir: PathBuf,
    pub scroll_speed: ScrollSpeed,
    /// Enables the `objectives` command and prints without delay.
    pub development: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_dir: data_root(),
            save_dir: PathBuf::from(SAVE_DIR),
            scroll_speed: ScrollSpeed::default(),
            development: cfg!(feature = "dev-mode"),
        }
    }
}

impl Settings {
    /// Defaults overlaid with the settings file at `path`, if it can be used.
    pub fn load(path: &Path) -> Self {
        let mut settings = Self::default();
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                info!("no settings file at {}, using defaults", path.display());
                return settings;
            },
            Err(err) => {
                warn!("failed to read settings from {}: {err}; using defaults", path.display());
                return settings;
            },
        };
        match toml::from_str::<SettingsFile>(&text) {
            Ok(file) => {
                settings.apply(file);
                info!("settings loaded from {}", path.display());
            },
            Err(err) => warn!("failed to parse settings in {}: {err}; using defaults", path.display()),
        }
        settings
    }

    fn apply(&mut self, file: SettingsFile) {
        if let Some(dir) = file.data_dir {
            self.data_dir = dir;
        }
        if let Some(dir) = file.save_dir {
            self.save_dir = dir;
        }
        if let Some(name) = file.scroll_speed {
            match ScrollSpeed::from_name(&name) {
                Some(speed) => self.scroll_speed = speed,
                None => warn!("unknown scroll_speed '{name}' in settings; keeping {:?}", self.scroll_speed),
            }
        }
        if let Some(development) = file.development {
            self.development = development;
        }
    }
}
