//! Best-score persistence.

use std::cell::Cell;
use std::rc::Rc;

use tracing::{debug, warn};

use crate::constants::HIGH_SCORE_KEY;
use crate::error::StorageError;

pub trait ScoreStore {
    /// Stored best score; 0 when nothing usable is stored.
    fn load(&self) -> u32;
    fn save(&mut self, value: u32) -> Result<(), StorageError>;
}

/// Parses a stored decimal string, treating anything malformed as no score.
pub fn parse_score(raw: Option<&str>) -> u32 {
    match raw {
        Some(s) => s.trim().parse::<u32>().unwrap_or_else(|_| {
            debug!(raw = s, "ignoring malformed high score");
            0
        }),
        None => 0,
    }
}

/// `window.localStorage`, under a single fixed key.
#[derive(Debug, Clone)]
pub struct LocalScoreStore {
    key: &'static str,
}

impl Default for LocalScoreStore {
    fn default() -> Self {
        Self {
            key: HIGH_SCORE_KEY,
        }
    }
}

impl LocalScoreStore {
    fn storage() -> Result<web_sys::Storage, StorageError> {
        web_sys::window()
            .and_then(|win| win.local_storage().ok().flatten())
            .ok_or(StorageError::Unavailable)
    }
}

impl ScoreStore for LocalScoreStore {
    fn load(&self) -> u32 {
        match Self::storage() {
            Ok(store) => parse_score(store.get_item(self.key).ok().flatten().as_deref()),
            Err(err) => {
                warn!(%err, "high score not loaded");
                0
            }
        }
    }

    fn save(&mut self, value: u32) -> Result<(), StorageError> {
        Self::storage()?
            .set_item(self.key, &value.to_string())
            .map_err(|_| StorageError::Write {
                key: self.key.to_string(),
            })
    }
}

/// In-process store; clones share the same slot and count writes.
#[derive(Debug, Clone, Default)]
pub struct MemoryScoreStore {
    value: Rc<Cell<u32>>,
    saves: Rc<Cell<u32>>,
}

impl MemoryScoreStore {
    pub fn with_value(value: u32) -> Self {
        let store = Self::default();
        store.value.set(value);
        store
    }

    pub fn value(&self) -> u32 {
        self.value.get()
    }

    pub fn save_count(&self) -> u32 {
        self.saves.get()
    }
}

impl ScoreStore for MemoryScoreStore {
    fn load(&self) -> u32 {
        self.value.get()
    }

    fn save(&mut self, value: u32) -> Result<(), StorageError> {
        self.value.set(value);
        self.saves.set(self.saves.get() + 1);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_scores_read_as_zero() {
        assert_eq!(parse_score(None), 0);
        assert_eq!(parse_score(Some("")), 0);
        assert_eq!(parse_score(Some("abc")), 0);
        assert_eq!(parse_score(Some("-4")), 0);
        assert_eq!(parse_score(Some("12abc")), 0);
        assert_eq!(parse_score(Some("42")), 42);
        assert_eq!(parse_score(Some(" 7\n")), 7);
    }

    #[test]
    fn memory_store_clones_share_state() {
        let store = MemoryScoreStore::with_value(3);
        let mut handle = store.clone();
        handle.save(9).unwrap();
        assert_eq!(store.load(), 9);
        assert_eq!(store.save_count(), 1);
    }
}
