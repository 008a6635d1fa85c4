//! Free-form ideas. No lifecycle beyond add and delete.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::Item;
use crate::dates;
use crate::image::ImageAttachment;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Idea {
    pub id: u64,
    pub content: String,
    #[serde(with = "dates::timestamp")]
    pub created_at: NaiveDateTime,
    #[serde(flatten)]
    pub attachment: ImageAttachment,
}

impl Idea {
    pub fn new(id: u64, content: String, attachment: ImageAttachment, now: NaiveDateTime) -> Self {
        Self {
            id,
            content,
            created_at: now,
            attachment,
        }
    }
}

impl Item for Idea {
    fn id(&self) -> u64 {
        self.id
    }
}
