use std::path::{Path, PathBuf};

use colormatch_core::SavedSession;
use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};

const APP_DIR: &str = "colormatch-tui";

fn app_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
}

/// Where the session is kept between runs. `COLORMATCH_SAVE` overrides the
/// default under the user's config directory.
pub fn save_path() -> PathBuf {
    std::env::var_os("COLORMATCH_SAVE")
        .map(PathBuf::from)
        .unwrap_or_else(|| app_dir().join("session.json"))
}

pub fn log_path() -> PathBuf {
    save_path().with_file_name("colormatch.log")
}

/// Board RNG, fixed by `COLORMATCH_SEED` when set.
pub fn session_rng() -> StdRng {
    match std::env::var("COLORMATCH_SEED").ok().map(|s| s.parse::<u64>()) {
        Some(Ok(seed)) => {
            log::info!("using seed {}", seed);
            StdRng::seed_from_u64(seed)
        }
        Some(Err(e)) => {
            log::warn!("ignoring COLORMATCH_SEED: {}", e);
            StdRng::seed_from_u64(rand::rng().random())
        }
        None => StdRng::seed_from_u64(rand::rng().random()),
    }
}

/// Loads the previous session. A missing file is a fresh start; an
/// unreadable one is logged and skipped.
pub fn load() -> Option<SavedSession> {
    load_from(&save_path())
}

pub fn load_from(path: &Path) -> Option<SavedSession> {
    let data = match std::fs::read_to_string(path) {
        Ok(data) => data,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return None,
        Err(e) => {
            log::warn!("could not read {}: {}", path.display(), e);
            return None;
        }
    };
    match SavedSession::from_json(&data) {
        Ok(saved) => Some(saved),
        Err(e) => {
            log::warn!("discarding save {}: {}", path.display(), e);
            None
        }
    }
}

pub fn save(saved: &SavedSession) -> Result<(), Box<dyn std::error::Error>> {
    let path = save_path();
    save_to(&path, saved).inspect_err(|e| {
        log::error!("could not save session to {}: {}", path.display(), e);
    })
}

pub fn save_to(path: &Path, saved: &SavedSession) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, saved.to_json()?)?;
    log::info!("session saved to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use colormatch_core::ColorMatchGame;

    fn scratch(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("colormatch_test_{}", name));
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn missing_file_loads_nothing() {
        let dir = scratch("missing");
        assert!(load_from(&dir.join("session.json")).is_none());
    }

    #[test]
    fn garbage_file_loads_nothing() {
        let dir = scratch("garbage");
        let path = dir.join("session.json");
        std::fs::write(&path, "{ not a session").unwrap();
        assert!(load_from(&path).is_none());
    }

    #[test]
    fn directory_in_place_of_file_loads_nothing() {
        let dir = scratch("unreadable");
        assert!(load_from(&dir).is_none());
    }

    #[test]
    fn save_under_a_file_fails() {
        let dir = scratch("blocked");
        let blocker = dir.join("blocker");
        std::fs::write(&blocker, "").unwrap();
        let saved = SavedSession::capture(&ColorMatchGame::new(), 0, 0, 0);
        assert!(save_to(&blocker.join("session.json"), &saved).is_err());
    }

    #[test]
    fn saved_file_loads_back() {
        let dir = scratch("roundtrip");
        let path = dir.join("nested").join("session.json");
        let saved = SavedSession::capture(&ColorMatchGame::new(), 2, 5, 0xFF00_FF00);
        save_to(&path, &saved).unwrap();
        assert_eq!(load_from(&path), Some(saved));
    }
}
