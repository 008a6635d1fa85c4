//! One-off tasks.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::{Item, ItemList};
use crate::dates;
use crate::image::ImageAttachment;

/// A task is pending until `completed_at` is set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: u64,
    pub content: String,
    #[serde(with = "dates::timestamp")]
    pub created_at: NaiveDateTime,
    #[serde(flatten)]
    pub attachment: ImageAttachment,
    #[serde(default, with = "dates::timestamp_opt")]
    pub completed_at: Option<NaiveDateTime>,
}

impl Task {
    pub fn new(id: u64, content: String, attachment: ImageAttachment, now: NaiveDateTime) -> Self {
        Self {
            id,
            content,
            created_at: now,
            attachment,
            completed_at: None,
        }
    }

    pub fn is_completed(&self) -> bool {
        self.completed_at.is_some()
    }
}

impl Item for Task {
    fn id(&self) -> u64 {
        self.id
    }
}

impl ItemList<Task> {
    /// Mark a task completed. Returns `None` for an unknown id.
    ///
    /// The first completion time is kept if the task is already done.
    pub fn complete(&mut self, id: u64, now: NaiveDateTime) -> Option<&Task> {
        let task = self.get_mut(id)?;
        if task.completed_at.is_none() {
            task.completed_at = Some(now);
        }
        Some(&*task)
    }

    /// Tasks to display: pending ones, plus completed ones when requested.
    pub fn visible(&self, show_completed: bool) -> impl Iterator<Item = &Task> {
        self.iter().filter(move |t| show_completed || !t.is_completed())
    }

    pub fn pending_count(&self) -> usize {
        self.iter().filter(|t| !t.is_completed()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate};

    fn at(h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 10, 17)
            .unwrap()
            .and_hms_opt(h, 0, 0)
            .unwrap()
    }

    fn list() -> ItemList<Task> {
        ItemList::from_vec(vec![
            Task::new(1, "buy milk".into(), ImageAttachment::none(), at(8)),
            Task::new(2, "call bank".into(), ImageAttachment::none(), at(9)),
        ])
    }

    #[test]
    fn complete_sets_timestamp_once() {
        let mut tasks = list();
        tasks.complete(1, at(10)).unwrap();
        tasks.complete(1, at(10) + Duration::hours(2)).unwrap();
        assert_eq!(tasks.get(1).unwrap().completed_at, Some(at(10)));
        assert!(tasks.complete(99, at(10)).is_none());
    }

    #[test]
    fn visible_hides_completed_by_default() {
        let mut tasks = list();
        tasks.complete(2, at(11));
        let pending: Vec<u64> = tasks.visible(false).map(|t| t.id).collect();
        assert_eq!(pending, vec![1]);
        assert_eq!(tasks.visible(true).count(), 2);
        assert_eq!(tasks.pending_count(), 1);
    }

    #[test]
    fn serializes_with_camel_case_schema() {
        let task = Task::new(7, "x".into(), ImageAttachment::none(), at(8));
        let json = serde_json::to_value(&task).unwrap();
        assert_eq!(json["createdAt"], "2026-10-17T08:00:00");
        assert!(json["completedAt"].is_null());
        assert!(json["image"].is_null());
        assert!(json["thumbnail"].is_null());
    }
}
