//! Ordered item collections.
//!
//! Tasks, ideas and routines all live in user-ordered sequences that support
//! the same add / remove / drag-reorder operations. [`ItemList`] implements
//! those once; the concrete record types live in [`task`] and [`idea`].

pub mod idea;
pub mod task;

use std::collections::BTreeSet;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::error::{Result, ValidationError};

pub use idea::Idea;
pub use task::Task;

/// Anything stored in an [`ItemList`].
pub trait Item {
    fn id(&self) -> u64;
}

/// An ordered sequence of items with unique numeric ids.
///
/// Order is user-significant and only changes through [`ItemList::reorder`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemList<T> {
    items: Vec<T>,
}

impl<T> Default for ItemList<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: Item> ItemList<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_vec(items: Vec<T>) -> Self {
        Self { items }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn into_vec(self) -> Vec<T> {
        self.items
    }

    pub fn get(&self, id: u64) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn get_mut(&mut self, id: u64) -> Option<&mut T> {
        self.items.iter_mut().find(|item| item.id() == id)
    }

    pub fn contains(&self, id: u64) -> bool {
        self.get(id).is_some()
    }

    /// Allocate an id that no current item uses.
    pub fn next_id(&self, now: NaiveDateTime) -> u64 {
        IdAllocator::next(now, self.items.iter().map(Item::id))
    }

    /// Append an item and return a reference to it.
    pub fn push(&mut self, item: T) -> &T {
        self.items.push(item);
        &self.items[self.items.len() - 1]
    }

    /// Remove the item with `id`, returning it. `None` leaves the list as-is.
    pub fn remove(&mut self, id: u64) -> Option<T> {
        let pos = self.items.iter().position(|item| item.id() == id)?;
        Some(self.items.remove(pos))
    }

    /// Move the element at `from` so that it ends up at index `to`.
    ///
    /// Both indices must address existing elements.
    pub fn reorder(&mut self, collection: &str, from: usize, to: usize) -> Result<()> {
        let len = self.items.len();
        for index in [from, to] {
            if index >= len {
                return Err(ValidationError::OutOfBounds {
                    collection: collection.to_string(),
                    index,
                    len,
                }
                .into());
            }
        }
        let item = self.items.remove(from);
        self.items.insert(to, item);
        Ok(())
    }

    pub(crate) fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.items.iter_mut()
    }
}

impl<'a, T> IntoIterator for &'a ItemList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Millisecond-timestamp ids, bumped past any existing id on collision.
///
/// When the largest existing id is `u64::MAX` the lowest unused id is taken.
pub struct IdAllocator;

impl IdAllocator {
    pub fn next(now: NaiveDateTime, existing: impl Iterator<Item = u64>) -> u64 {
        let stamp = u64::try_from(now.and_utc().timestamp_millis()).unwrap_or(0);
        let taken: BTreeSet<u64> = existing.collect();
        match taken.last() {
            Some(&max) if max >= stamp => max
                .checked_add(1)
                .unwrap_or_else(|| Self::lowest_free(&taken)),
            _ => stamp,
        }
    }

    fn lowest_free(taken: &BTreeSet<u64>) -> u64 {
        (1..).find(|id| !taken.contains(id)).unwrap_or(0)
    }
}
