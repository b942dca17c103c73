//! Persistence of level progress in eframe storage.
//!
//! Only the level and the grid size survive a restart. Values read back are
//! clamped into range, so a stale or hand-edited store never prevents startup.

use crosses_game::Progress;
use eframe::Storage;
use serde::{Deserialize, Serialize};

pub const PROGRESS_KEY: &str = "progress";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressDto {
    pub level: u32,
    pub grid_size: u32,
}

impl From<Progress> for ProgressDto {
    fn from(progress: Progress) -> Self {
        Self {
            level: progress.level(),
            grid_size: progress.grid_size(),
        }
    }
}

impl ProgressDto {
    #[must_use]
    pub fn to_progress(self) -> Progress {
        let progress = Progress::clamped(self.level, self.grid_size);
        if ProgressDto::from(progress) != self {
            log::warn!(
                "stored progress level={} grid_size={} was out of range; using level={} grid_size={}",
                self.level,
                self.grid_size,
                progress.level(),
                progress.grid_size(),
            );
        }
        progress
    }
}

#[must_use]
pub fn load_progress(storage: &dyn Storage) -> Option<Progress> {
    let dto = eframe::get_value::<ProgressDto>(storage, PROGRESS_KEY)?;
    log::debug!("loaded progress {dto:?}");
    Some(dto.to_progress())
}

pub fn save_progress(storage: &mut dyn Storage, progress: Progress) {
    let dto = ProgressDto::from(progress);
    log::debug!("saving progress {dto:?}");
    eframe::set_value(storage, PROGRESS_KEY, &dto);
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[derive(Debug, Default)]
    struct MemoryStorage {
        values: HashMap<String, String>,
    }

    impl Storage for MemoryStorage {
        fn get_string(&self, key: &str) -> Option<String> {
            self.values.get(key).cloned()
        }

        fn set_string(&mut self, key: &str, value: String) {
            self.values.insert(key.to_owned(), value);
        }

        fn flush(&mut self) {}
    }

    #[test]
    fn missing_progress_loads_as_none() {
        let storage = MemoryStorage::default();
        assert_eq!(load_progress(&storage), None);
    }

    #[test]
    fn saved_progress_loads_back() {
        let mut storage = MemoryStorage::default();
        let progress = Progress::new(3, 4).unwrap();
        save_progress(&mut storage, progress);
        assert_eq!(load_progress(&storage), Some(progress));
    }

    #[test]
    fn out_of_range_progress_is_clamped() {
        let mut storage = MemoryStorage::default();
        eframe::set_value(
            &mut storage,
            PROGRESS_KEY,
            &ProgressDto {
                level: 12,
                grid_size: 3,
            },
        );
        assert_eq!(load_progress(&storage), Some(Progress::new(9, 3).unwrap()));

        let dto = ProgressDto {
            level: 0,
            grid_size: 0,
        };
        assert_eq!(dto.to_progress(), Progress::INITIAL);
    }

    #[test]
    fn absurd_grid_size_still_starts() {
        let mut storage = MemoryStorage::default();
        eframe::set_value(
            &mut storage,
            PROGRESS_KEY,
            &ProgressDto {
                level: u32::MAX,
                grid_size: 1_000_000,
            },
        );
        let progress = load_progress(&storage).unwrap();
        assert_eq!(progress.grid_size(), Progress::MAX_GRID_SIZE);

        let session = crosses_game::Session::new(progress).unwrap();
        assert_eq!(session.grid().size(), progress.grid_len());
    }

    #[test]
    fn corrupted_value_loads_as_none() {
        let mut storage = MemoryStorage::default();
        storage.set_string(PROGRESS_KEY, "not ron".to_owned());
        assert_eq!(load_progress(&storage), None);
    }
}
