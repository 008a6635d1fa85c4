//! Recurring routines and their completion streaks.
//!
//! The [`RoutineEngine`] is the only writer of a routine's `done`, `streak`
//! and `last_completed_date`. Two rules govern them:
//!
//! - **Periodic reset** ([`RoutineEngine::apply_periodic_reset`]): run once per
//!   activation. A routine whose period starts today and which was not
//!   completed today gets `done = false` and `last_completed_date = None`.
//! - **Completion** ([`RoutineEngine::toggle_done`]): the first completion on a
//!   calendar day bumps the streak. Unchecking never rolls the streak back.
//!
//! All date-dependent operations take `now` from the caller.

mod frequency;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::dates;
use crate::error::{CoreError, Result};
use crate::image::ImageAttachment;
use crate::items::{Item, ItemList};
use crate::state::ItemKind;

pub use frequency::{Frequency, ResetPolicy};

/// A recurring habit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Routine {
    pub id: u64,
    pub content: String,
    #[serde(default)]
    pub frequency: Frequency,
    #[serde(default)]
    pub done: bool,
    #[serde(default)]
    pub streak: u32,
    #[serde(default, with = "dates::calendar_date")]
    pub last_completed_date: Option<NaiveDate>,
    #[serde(with = "dates::timestamp")]
    pub created_at: NaiveDateTime,
    #[serde(flatten)]
    pub attachment: ImageAttachment,
}

impl Routine {
    pub fn new(id: u64, content: String, attachment: ImageAttachment, now: NaiveDateTime) -> Self {
        Self {
            id,
            content,
            frequency: Frequency::Daily,
            done: false,
            streak: 0,
            last_completed_date: None,
            created_at: now,
            attachment,
        }
    }

    fn completed_on(&self, today: NaiveDate) -> bool {
        self.last_completed_date == Some(today)
    }
}

impl Item for Routine {
    fn id(&self) -> u64 {
        self.id
    }
}

/// Owns the ordered routine collection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoutineEngine {
    routines: ItemList<Routine>,
}

impl RoutineEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_routines(routines: Vec<Routine>) -> Self {
        Self {
            routines: ItemList::from_vec(routines),
        }
    }

    pub fn routines(&self) -> &[Routine] {
        self.routines.as_slice()
    }

    pub fn into_routines(self) -> Vec<Routine> {
        self.routines.into_vec()
    }

    pub fn get(&self, id: u64) -> Option<&Routine> {
        self.routines.get(id)
    }

    pub fn len(&self) -> usize {
        self.routines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routines.is_empty()
    }

    /// Clear `done` on every routine whose period starts today and which was
    /// not completed today.
    ///
    /// `last_completed_date` is cleared on every qualifying call, including
    /// repeated calls on the same day when it is already `None`.
    pub fn apply_periodic_reset(&mut self, now: NaiveDateTime, policy: &ResetPolicy) {
        let today = now.date();
        let mut reset = 0usize;
        for routine in self.routines.iter_mut() {
            if routine.frequency.starts_period_on(today, policy) && !routine.completed_on(today) {
                if routine.done {
                    reset += 1;
                }
                routine.done = false;
                routine.last_completed_date = None;
            }
        }
        tracing::info!(%today, reset, total = self.routines.len(), "applied periodic reset");
    }

    /// Set `done`, counting the first completion of the day toward the streak.
    pub fn toggle_done(&mut self, id: u64, done: bool, now: NaiveDateTime) -> Result<&Routine> {
        let today = now.date();
        let routine = self.routines.get_mut(id).ok_or(CoreError::NotFound {
            kind: ItemKind::Routines,
            id,
        })?;

        if done && !routine.completed_on(today) {
            routine.streak = routine.streak.saturating_add(1);
            routine.last_completed_date = Some(today);
        }
        routine.done = done;

        tracing::debug!(id, done, streak = routine.streak, "toggled routine");
        Ok(&*routine)
    }

    /// Change the frequency without touching completion state.
    pub fn set_frequency(&mut self, id: u64, frequency: Frequency) -> Result<&Routine> {
        let routine = self.routines.get_mut(id).ok_or(CoreError::NotFound {
            kind: ItemKind::Routines,
            id,
        })?;
        routine.frequency = frequency;
        tracing::debug!(id, %frequency, "changed routine frequency");
        Ok(&*routine)
    }

    pub fn reorder(&mut self, from: usize, to: usize) -> Result<()> {
        self.routines
            .reorder(ItemKind::Routines.as_str(), from, to)
    }

    /// Create a daily routine with a fresh id and an empty streak.
    pub fn add(
        &mut self,
        content: String,
        attachment: ImageAttachment,
        now: NaiveDateTime,
    ) -> &Routine {
        let id = self.routines.next_id(now);
        tracing::debug!(id, "added routine");
        self.routines.push(Routine::new(id, content, attachment, now))
    }

    pub fn remove(&mut self, id: u64) -> Result<Routine> {
        self.routines.remove(id).ok_or(CoreError::NotFound {
            kind: ItemKind::Routines,
            id,
        })
    }

    /// Sum of all streaks. Derived, never stored.
    pub fn total_streak(&self) -> u64 {
        self.routines.iter().map(|r| u64::from(r.streak)).sum()
    }

    /// Routines of one frequency, in collection order.
    pub fn by_frequency(&self, frequency: Frequency) -> impl Iterator<Item = &Routine> {
        self.routines
            .iter()
            .filter(move |r| r.frequency == frequency)
    }
}
