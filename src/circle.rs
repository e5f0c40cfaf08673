//! The friend circle: an ordered collection backed by a store
//!
//! The collection is loaded once when opened and written back in full after
//! every add, update, and removal. Storage order is insertion order; ranked
//! views are computed on demand and never change the stored order.

use crate::criteria::CriteriaSet;
use crate::error::{CircleError, Result};
use crate::filter::ListFilter;
use crate::friend::{Friend, FriendSummary, ScoreMap};
use crate::storage::{FriendStore, SkippedLine};
use crate::types::Gender;
use std::sync::Arc;
use tracing::{debug, warn};

/// Ordered friend collection persisted through a `FriendStore`
pub struct Circle<S: FriendStore> {
    store: S,
    criteria: Arc<CriteriaSet>,
    friends: Vec<Friend>,
    skipped: Vec<SkippedLine>,
}

impl<S: FriendStore> Circle<S> {
    /// Load the collection from `store`
    ///
    /// Lines that fail to parse are logged and skipped; the rest load.
    pub fn open(store: S, criteria: Arc<CriteriaSet>) -> Result<Self> {
        let outcome = store.load(&criteria)?;
        if !outcome.skipped.is_empty() {
            warn!("{} stored line(s) could not be read and were skipped", outcome.skipped.len());
        }
        Ok(Self {
            store,
            criteria,
            friends: outcome.friends,
            skipped: outcome.skipped,
        })
    }

    /// Build a collection from friends already in memory, without saving
    ///
    /// Every friend must use the same criteria as the collection.
    pub fn with_friends(store: S, criteria: Arc<CriteriaSet>, friends: Vec<Friend>) -> Result<Self> {
        if let Some(stray) = friends
            .iter()
            .find(|f| !Arc::ptr_eq(f.criteria(), &criteria) && **f.criteria() != *criteria)
        {
            return Err(CircleError::Validation(format!(
                "'{}' is scored on different criteria than the collection",
                stray.name()
            )));
        }
        Ok(Self {
            store,
            criteria,
            friends,
            skipped: Vec::new(),
        })
    }

    /// Write the whole collection to the store
    pub fn save(&self) -> Result<()> {
        self.store.save(&self.friends)
    }

    /// Append a new friend and persist; returns its position
    ///
    /// Every mutation is undone in memory when the save fails, so the
    /// collection keeps matching what the store last accepted.
    pub fn add(&mut self, name: &str, scores: &ScoreMap, gender: &str) -> Result<usize> {
        let friend = Friend::from_parts(name, Some(scores), gender, None, Arc::clone(&self.criteria));
        debug!("Adding '{}' ({})", friend.name(), friend.category());
        self.friends.push(friend);
        if let Err(e) = self.save() {
            self.friends.pop();
            return Err(e);
        }
        Ok(self.friends.len() - 1)
    }

    /// Re-score and optionally rename or re-gender the friend at `index`
    ///
    /// Returns `Ok(false)` without touching anything when `index` is out of
    /// bounds. Scores go through `Friend::update_scores`. The name changes only
    /// when `new_name` is non-empty after trimming and differs from the
    /// current one; the gender only when `new_gender` is exactly `M` or `F`
    /// and differs from the current one.
    pub fn update_at(
        &mut self,
        index: usize,
        new_scores: &ScoreMap,
        new_name: Option<&str>,
        new_gender: Option<&str>,
    ) -> Result<bool> {
        let len = self.friends.len();
        let Some(friend) = self.friends.get_mut(index) else {
            debug!("Update at {} ignored, collection holds {}", index, len);
            return Ok(false);
        };
        let previous = friend.clone();

        friend.update_scores(new_scores);

        if let Some(name) = new_name.map(str::trim) {
            if !name.is_empty() && name != friend.name() {
                friend.rename(name);
            }
        }

        if let Some(symbol) = new_gender {
            if let Some(gender) = Gender::from_symbol(symbol) {
                if gender != friend.gender() {
                    friend.set_gender(symbol);
                }
            }
        }

        debug!("Updated '{}' ({})", friend.name(), friend.category());
        if let Err(e) = self.save() {
            self.friends[index] = previous;
            return Err(e);
        }
        Ok(true)
    }

    /// Remove the friend at `index` and persist
    ///
    /// Returns `Ok(None)` without touching anything when `index` is out of
    /// bounds.
    pub fn remove_at(&mut self, index: usize) -> Result<Option<Friend>> {
        if index >= self.friends.len() {
            debug!("Remove at {} ignored, collection holds {}", index, self.friends.len());
            return Ok(None);
        }
        let removed = self.friends.remove(index);
        debug!("Removed '{}'", removed.name());
        if let Err(e) = self.save() {
            self.friends.insert(index, removed);
            return Err(e);
        }
        Ok(Some(removed))
    }

    /// Friends ordered by descending total; ties keep storage order
    pub fn list_sorted(&self) -> Vec<&Friend> {
        self.ranked().into_iter().map(|(_, f)| f).collect()
    }

    /// Ranked friends passing `filter`, each with its storage position
    pub fn list(&self, filter: &ListFilter) -> Vec<(usize, &Friend)> {
        self.ranked()
            .into_iter()
            .filter(|(_, f)| filter.matches(f))
            .collect()
    }

    /// Ranked overview rows
    pub fn summaries(&self) -> Vec<FriendSummary> {
        self.list_sorted().into_iter().map(FriendSummary::from).collect()
    }

    fn ranked(&self) -> Vec<(usize, &Friend)> {
        let mut ranked: Vec<(usize, &Friend)> = self.friends.iter().enumerate().collect();
        // sort_by is stable
        ranked.sort_by(|(_, a), (_, b)| b.total().cmp(&a.total()));
        ranked
    }

    /// Friends in storage order
    pub fn friends(&self) -> &[Friend] {
        &self.friends
    }

    pub fn get(&self, index: usize) -> Option<&Friend> {
        self.friends.get(index)
    }

    pub fn len(&self) -> usize {
        self.friends.len()
    }

    pub fn is_empty(&self) -> bool {
        self.friends.is_empty()
    }

    pub fn criteria(&self) -> &Arc<CriteriaSet> {
        &self.criteria
    }

    /// Lines skipped when the collection was opened
    pub fn skipped_lines(&self) -> &[SkippedLine] {
        &self.skipped
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
