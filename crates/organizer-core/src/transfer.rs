//! JSON export and import.
//!
//! An export document carries the three collections under `tasks`, `ideas`
//! and `routines`. On import a missing key means an empty collection. Import
//! is all-or-nothing: the document is parsed completely before any state is
//! replaced.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};
use crate::items::{Idea, Item, Task};
use crate::routine::Routine;
use crate::state::AppState;

/// File name suggested for exports.
pub const DEFAULT_EXPORT_FILE: &str = "adhd_organizer_data.json";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExportDocument {
    #[serde(default)]
    pub tasks: Vec<Task>,
    #[serde(default)]
    pub ideas: Vec<Idea>,
    #[serde(default)]
    pub routines: Vec<Routine>,
}

impl ExportDocument {
    pub fn from_state(state: &AppState) -> Self {
        Self {
            tasks: state.tasks.as_slice().to_vec(),
            ideas: state.ideas.as_slice().to_vec(),
            routines: state.routines.routines().to_vec(),
        }
    }
}

/// Serialize the collections of `state` as pretty-printed JSON.
pub fn export_json(state: &AppState) -> Result<String> {
    Ok(serde_json::to_string_pretty(&ExportDocument::from_state(state))?)
}

/// Write an export to `path`, returning the number of items written.
pub fn export_to_file(state: &AppState, path: &Path) -> Result<usize> {
    let json = export_json(state)?;
    std::fs::write(path, json)?;
    let count = state.tasks.len() + state.ideas.len() + state.routines.len();
    tracing::info!(path = %path.display(), items = count, "exported data");
    Ok(count)
}

/// Parse an import document without touching any state.
///
/// Ids must be unique within each collection.
pub fn parse_import(raw: &str) -> Result<ExportDocument> {
    let doc: ExportDocument =
        serde_json::from_str(raw).map_err(|e| CoreError::Format(e.to_string()))?;
    ensure_unique_ids("tasks", &doc.tasks)?;
    ensure_unique_ids("ideas", &doc.ideas)?;
    ensure_unique_ids("routines", &doc.routines)?;
    Ok(doc)
}

fn ensure_unique_ids<T: Item>(collection: &str, items: &[T]) -> Result<()> {
    let mut seen = HashSet::with_capacity(items.len());
    match items.iter().map(Item::id).find(|id| !seen.insert(*id)) {
        Some(id) => Err(CoreError::Format(format!(
            "duplicate id {id} in {collection}"
        ))),
        None => Ok(()),
    }
}

/// Read and parse an import file.
pub fn read_import_file(path: &Path) -> Result<ExportDocument> {
    let raw = std::fs::read_to_string(path)?;
    parse_import(&raw)
}

/// Parse `raw` and, only if that succeeds, replace the collections of `state`.
pub fn import_into(state: &mut AppState, raw: &str) -> Result<()> {
    let doc = parse_import(raw)?;
    state.apply_import(doc);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::ImageAttachment;
    use crate::state::ItemKind;
    use chrono::{NaiveDate, NaiveDateTime};

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 10, 17)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap()
    }

    #[test]
    fn missing_keys_default_to_empty() {
        let doc = parse_import(r#"{ "ideas": [] }"#).unwrap();
        assert_eq!(doc, ExportDocument::default());
    }

    #[test]
    fn malformed_json_is_format_error_and_state_untouched() {
        let mut state = AppState::new();
        state.add(ItemKind::Tasks, "keep me".into(), ImageAttachment::none(), now());
        let before = state.clone();

        let err = import_into(&mut state, "{ \"tasks\": [").unwrap_err();
        assert!(matches!(err, CoreError::Format(_)));
        assert_eq!(state, before);
    }

    #[test]
    fn duplicate_ids_are_rejected_before_state_changes() {
        let mut state = AppState::new();
        state.add(ItemKind::Routines, "keep".into(), ImageAttachment::none(), now());
        let before = state.clone();

        let raw = r#"{ "routines": [
            { "id": 7, "content": "a", "frequency": "daily", "done": false,
              "streak": 0, "lastCompletedDate": null, "createdAt": "2026-10-17T09:00:00" },
            { "id": 7, "content": "b", "frequency": "weekly", "done": false,
              "streak": 0, "lastCompletedDate": null, "createdAt": "2026-10-17T09:00:00" }
        ] }"#;
        let err = import_into(&mut state, raw).unwrap_err();
        assert!(matches!(&err, CoreError::Format(m) if m.contains("duplicate id 7 in routines")));
        assert_eq!(state, before);
    }

    #[test]
    fn same_id_in_different_collections_is_allowed() {
        let raw = r#"{
            "tasks": [{ "id": 1, "content": "t", "createdAt": "2026-10-17T09:00:00" }],
            "ideas": [{ "id": 1, "content": "i", "createdAt": "2026-10-17T09:00:00" }]
        }"#;
        let doc = parse_import(raw).unwrap();
        assert_eq!(doc.tasks.len(), 1);
        assert_eq!(doc.ideas.len(), 1);
    }

    #[test]
    fn wrongly_typed_collection_is_rejected() {
        let err = parse_import(r#"{ "routines": "nope" }"#).unwrap_err();
        assert!(matches!(err, CoreError::Format(_)));
    }

    #[test]
    fn import_replaces_collections_but_keeps_dark_mode() {
        let mut state = AppState::new();
        state.dark_mode = true;
        state.add(ItemKind::Ideas, "old".into(), ImageAttachment::none(), now());

        import_into(&mut state, r#"{ "tasks": [] }"#).unwrap();
        assert!(state.ideas.is_empty());
        assert!(state.dark_mode);
    }

    #[test]
    fn imports_browser_exports() {
        let raw = r#"{
          "tasks": [{ "id": 1, "content": "t", "createdAt": "2026-10-17T07:00:00.000Z",
                      "image": null, "thumbnail": null, "streak": 0,
                      "lastCompletedDate": null, "completedAt": null }],
          "ideas": [{ "id": 2, "content": "i", "createdAt": "2026-10-17T07:00:00.000Z",
                      "image": null, "thumbnail": null, "streak": 0, "lastCompletedDate": null }],
          "routines": [{ "id": 3, "content": "r", "createdAt": "2026-10-17T07:00:00.000Z",
                         "image": null, "thumbnail": null, "streak": 2,
                         "lastCompletedDate": "Fri Oct 16 2026", "frequency": "daily", "done": true }]
        }"#;
        let doc = parse_import(raw).unwrap();
        assert_eq!(doc.tasks.len(), 1);
        assert_eq!(doc.ideas[0].content, "i");
        assert_eq!(
            doc.routines[0].last_completed_date,
            NaiveDate::from_ymd_opt(2026, 10, 16)
        );
    }
}
