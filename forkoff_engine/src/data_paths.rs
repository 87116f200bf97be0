use std::env;
use std::path::PathBuf;
use std::sync::LazyLock;

/// Default directory for saved games, relative to the working directory.
pub const SAVE_DIR: &str = "save_data";

/// Cached path to the directory containing the game's data files.
static DATA_ROOT: LazyLock<PathBuf> = LazyLock::new(detect_data_root);

/// The resolved data root.
pub fn data_root() -> PathBuf {
    DATA_ROOT.clone()
}

/// Resolve the most likely location of the data directory.
fn detect_data_root() -> PathBuf {
    let mut candidates = vec![PathBuf::from("forkoff_engine/data"), PathBuf::from("data")];

    if let Ok(exe_path) = env::current_exe()
        && let Some(dir) = exe_path.parent()
    {
        candidates.push(dir.join("forkoff_engine/data"));
        candidates.push(dir.join("data"));

        if let Some(parent) = dir.parent() {
            candidates.push(parent.join("forkoff_engine/data"));
            candidates.push(parent.join("data"));
        }
    }

    candidates
        .into_iter()
        .find(|candidate| candidate.join("language.json").is_file())
        .unwrap_or_else(|| PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data"))
}
