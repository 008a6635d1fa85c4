//! Application state container.
//!
//! [`AppState`] holds the three collections and the dark-mode flag. Every
//! user intent is a method here; shells never touch the collections
//! directly. Loading and saving go through a [`Store`] as whole-collection
//! snapshots under fixed keys.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result, ValidationError};
use crate::image::ImageAttachment;
use crate::items::{Idea, ItemList, Task};
use crate::routine::{Frequency, ResetPolicy, Routine, RoutineEngine};
use crate::storage::Store;
use crate::transfer::ExportDocument;

pub const TASKS_KEY: &str = "tasks";
pub const IDEAS_KEY: &str = "ideas";
pub const ROUTINES_KEY: &str = "routines";
pub const DARK_MODE_KEY: &str = "darkMode";

/// The three user-facing collections (tabs).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Tasks,
    Ideas,
    Routines,
}

impl ItemKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemKind::Tasks => "tasks",
            ItemKind::Ideas => "ideas",
            ItemKind::Routines => "routines",
        }
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ItemKind {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "task" | "tasks" => Ok(ItemKind::Tasks),
            "idea" | "ideas" => Ok(ItemKind::Ideas),
            "routine" | "routines" => Ok(ItemKind::Routines),
            other => Err(ValidationError::InvalidValue {
                field: "kind".into(),
                message: format!("unknown collection '{other}'"),
            }),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    pub tasks: ItemList<Task>,
    pub ideas: ItemList<Idea>,
    pub routines: RoutineEngine,
    pub dark_mode: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load every collection from `store`.
    ///
    /// A key that is missing, unreadable or unparseable yields an empty
    /// collection; loading never fails.
    pub fn load(store: &dyn Store) -> Self {
        let state = Self {
            tasks: ItemList::from_vec(load_key(store, TASKS_KEY)),
            ideas: ItemList::from_vec(load_key(store, IDEAS_KEY)),
            routines: RoutineEngine::from_routines(load_key(store, ROUTINES_KEY)),
            dark_mode: load_key(store, DARK_MODE_KEY),
        };
        tracing::debug!(
            tasks = state.tasks.len(),
            ideas = state.ideas.len(),
            routines = state.routines.len(),
            "loaded state"
        );
        state
    }

    /// Write a full snapshot of every collection to `store`.
    pub fn save(&self, store: &dyn Store) -> Result<()> {
        store.set_many(&[
            (TASKS_KEY, serde_json::to_string(&self.tasks)?),
            (IDEAS_KEY, serde_json::to_string(&self.ideas)?),
            (ROUTINES_KEY, serde_json::to_string(&self.routines)?),
            (DARK_MODE_KEY, serde_json::to_string(&self.dark_mode)?),
        ])
    }

    /// Start-of-activation hook; runs the routine reset once.
    pub fn activate(&mut self, now: NaiveDateTime, policy: &ResetPolicy) {
        self.routines.apply_periodic_reset(now, policy);
    }

    /// Add an item to `kind`, returning its new id.
    pub fn add(
        &mut self,
        kind: ItemKind,
        content: String,
        attachment: ImageAttachment,
        now: NaiveDateTime,
    ) -> u64 {
        match kind {
            ItemKind::Tasks => {
                let id = self.tasks.next_id(now);
                self.tasks.push(Task::new(id, content, attachment, now)).id
            }
            ItemKind::Ideas => {
                let id = self.ideas.next_id(now);
                self.ideas.push(Idea::new(id, content, attachment, now)).id
            }
            ItemKind::Routines => self.routines.add(content, attachment, now).id,
        }
    }

    pub fn delete(&mut self, kind: ItemKind, id: u64) -> Result<()> {
        let removed = match kind {
            ItemKind::Tasks => self.tasks.remove(id).is_some(),
            ItemKind::Ideas => self.ideas.remove(id).is_some(),
            ItemKind::Routines => self.routines.remove(id).is_ok(),
        };
        if !removed {
            return Err(CoreError::NotFound { kind, id });
        }
        tracing::debug!(%kind, id, "deleted item");
        Ok(())
    }

    pub fn reorder(&mut self, kind: ItemKind, from: usize, to: usize) -> Result<()> {
        match kind {
            ItemKind::Tasks => self.tasks.reorder(kind.as_str(), from, to),
            ItemKind::Ideas => self.ideas.reorder(kind.as_str(), from, to),
            ItemKind::Routines => self.routines.reorder(from, to),
        }
    }

    pub fn complete_task(&mut self, id: u64, now: NaiveDateTime) -> Result<&Task> {
        self.tasks.complete(id, now).ok_or(CoreError::NotFound {
            kind: ItemKind::Tasks,
            id,
        })
    }

    pub fn toggle_done(&mut self, id: u64, done: bool, now: NaiveDateTime) -> Result<&Routine> {
        self.routines.toggle_done(id, done, now)
    }

    pub fn set_frequency(&mut self, id: u64, frequency: Frequency) -> Result<&Routine> {
        self.routines.set_frequency(id, frequency)
    }

    pub fn toggle_dark_mode(&mut self) -> bool {
        self.dark_mode = !self.dark_mode;
        self.dark_mode
    }

    /// Replace all three collections with an imported document.
    ///
    /// The dark-mode flag is not part of exports and stays as it is.
    pub fn apply_import(&mut self, doc: ExportDocument) {
        tracing::info!(
            tasks = doc.tasks.len(),
            ideas = doc.ideas.len(),
            routines = doc.routines.len(),
            "imported data"
        );
        self.tasks = ItemList::from_vec(doc.tasks);
        self.ideas = ItemList::from_vec(doc.ideas);
        self.routines = RoutineEngine::from_routines(doc.routines);
    }
}

fn load_key<T: DeserializeOwned + Default>(store: &dyn Store, key: &str) -> T {
    match store.get(key) {
        Ok(Some(raw)) => match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(key, error = %e, "stored value is unreadable, starting empty");
                T::default()
            }
        },
        Ok(None) => T::default(),
        Err(e) => {
            tracing::warn!(key, error = %e, "store read failed, starting empty");
            T::default()
        }
    }
}
