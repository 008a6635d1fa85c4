//! # Organizer Core Library
//!
//! Business logic for a tabbed personal organizer: one-off tasks, free-form
//! ideas, and recurring routines with completion streaks. Shells (the CLI in
//! this workspace) hold an [`AppState`], dispatch user intents to it, and
//! persist it through a [`Store`] after every change.
//!
//! ## Architecture
//!
//! - **Routine Engine**: periodic reset and streak rules for routines, driven
//!   by an injected `now` rather than the system clock
//! - **Items**: ordered task and idea lists with drag-style reordering
//! - **Storage**: SQLite key-value snapshots and TOML configuration
//! - **Transfer**: JSON export and all-or-nothing import
//!
//! ## Key Components
//!
//! - [`RoutineEngine`]: routine collection and its recurrence rules
//! - [`AppState`]: explicit state container for all collections
//! - [`SqliteStore`]: persistent key-value store
//! - [`Config`]: application configuration management

pub mod clock;
pub mod dates;
pub mod error;
pub mod image;
pub mod items;
pub mod routine;
pub mod state;
pub mod storage;
pub mod transfer;

pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{ConfigError, CoreError, Result, StoreError, ValidationError};
pub use image::ImageAttachment;
pub use items::{Idea, Item, ItemList, Task};
pub use routine::{Frequency, ResetPolicy, Routine, RoutineEngine};
pub use state::{AppState, ItemKind};
pub use storage::{Config, MemoryStore, SqliteStore, Store};
pub use transfer::{ExportDocument, DEFAULT_EXPORT_FILE};
