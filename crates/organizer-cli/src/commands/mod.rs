pub mod config;
pub mod data;
pub mod idea;
pub mod routine;
pub mod task;
pub mod theme;

use std::error::Error;
use std::path::Path;

use chrono::NaiveDateTime;
use organizer_core::dates::{parse_date, parse_timestamp};
use organizer_core::image::capture_label;
use organizer_core::{
    AppState, Clock, Config, FixedClock, ImageAttachment, ItemKind, SqliteStore, SystemClock,
};

pub type CmdResult = Result<(), Box<dyn Error>>;

/// Parse the `--now` override. A bare date means noon on that day.
pub fn parse_now(raw: &str) -> Result<NaiveDateTime, String> {
    parse_timestamp(raw)
        .or_else(|| parse_date(raw).and_then(|d| d.and_hms_opt(12, 0, 0)))
        .ok_or_else(|| format!("invalid date/time: {raw}"))
}

/// One activation: load state, run the periodic reset, and save on close.
pub struct Session {
    pub state: AppState,
    pub config: Config,
    pub now: NaiveDateTime,
    store: SqliteStore,
}

impl Session {
    /// The reset is saved immediately, so it survives a failing command.
    pub fn open(now: Option<NaiveDateTime>) -> Result<Self, Box<dyn Error>> {
        let clock: Box<dyn Clock> = match now {
            Some(at) => Box::new(FixedClock::new(at)),
            None => Box::new(SystemClock),
        };
        let now = clock.now();
        let config = Config::load_or_default();
        let store = SqliteStore::open()?;
        let mut state = AppState::load(&store);
        state.activate(now, &config.reset_policy());
        state.save(&store)?;
        tracing::debug!(%now, "session opened");
        Ok(Self {
            state,
            config,
            now,
            store,
        })
    }

    /// Persist a full snapshot of the current state.
    pub fn save(&self) -> CmdResult {
        self.state.save(&self.store)?;
        Ok(())
    }
}

/// Add an item, optionally from an image file, and print its id.
pub fn add_item(
    session: &mut Session,
    kind: ItemKind,
    content: Option<String>,
    image: Option<&Path>,
) -> CmdResult {
    let attachment = match image {
        Some(path) => ImageAttachment::from_file(path)?,
        None => ImageAttachment::none(),
    };
    let content = match (content, image) {
        (Some(c), _) if !c.trim().is_empty() => c,
        (_, Some(path)) => capture_label(path),
        _ => return Err("content must not be empty".into()),
    };
    let id = session.state.add(kind, content, attachment, session.now);
    println!("Added to {kind}: {id}");
    Ok(())
}

pub fn delete_item(session: &mut Session, kind: ItemKind, id: u64) -> CmdResult {
    session.state.delete(kind, id)?;
    println!("Deleted from {kind}: {id}");
    Ok(())
}

pub fn move_item(session: &mut Session, kind: ItemKind, from: usize, to: usize) -> CmdResult {
    session.state.reorder(kind, from, to)?;
    println!("Moved {kind} item {from} -> {to}");
    Ok(())
}
