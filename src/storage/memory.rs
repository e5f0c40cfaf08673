//! In-memory backend
//!
//! Keeps the rendered lines in memory. Clones share the same buffer, so a
//! caller can hand one clone to a `Circle` and inspect the other.

use super::{parse_lines, FriendStore, LoadOutcome};
use crate::criteria::CriteriaSet;
use crate::error::Result;
use crate::friend::Friend;
use std::sync::{Arc, Mutex, MutexGuard};

#[derive(Debug, Default)]
struct Inner {
    lines: Vec<String>,
    saves: usize,
}

/// Friend collection held in memory
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    inner: Arc<Mutex<Inner>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from pre-rendered lines
    pub fn with_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let store = Self::default();
        store.lock().lines = lines.into_iter().map(Into::into).collect();
        store
    }

    /// Current stored lines
    pub fn lines(&self) -> Vec<String> {
        self.lock().lines.clone()
    }

    /// Number of completed saves
    pub fn save_count(&self) -> usize {
        self.lock().saves
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        // A panic while holding the lock cannot leave the buffer half-written
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl FriendStore for MemoryStore {
    fn load(&self, criteria: &Arc<CriteriaSet>) -> Result<LoadOutcome> {
        let inner = self.lock();
        Ok(parse_lines(inner.lines.iter().map(String::as_str), criteria))
    }

    fn save(&self, friends: &[Friend]) -> Result<()> {
        let mut inner = self.lock();
        inner.lines = friends.iter().map(Friend::to_line).collect();
        inner.saves += 1;
        Ok(())
    }
}
