//! Export and import commands.

use std::path::PathBuf;

use chrono::NaiveDateTime;
use clap::Subcommand;
use organizer_core::transfer::{export_to_file, read_import_file};

use super::{CmdResult, Session};

#[derive(Subcommand)]
pub enum DataAction {
    /// Write tasks, ideas and routines to a JSON file
    Export {
        /// Output path (defaults to transfer.export_file_name)
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
    /// Replace tasks, ideas and routines with the contents of a JSON file
    Import {
        /// File produced by `data export`
        path: PathBuf,
    },
}

pub fn run(action: DataAction, now: Option<NaiveDateTime>) -> CmdResult {
    let mut session = Session::open(now)?;

    match action {
        DataAction::Export { output } => {
            let path = output
                .unwrap_or_else(|| PathBuf::from(&session.config.transfer.export_file_name));
            let count = export_to_file(&session.state, &path)?;
            println!("Exported {count} items to {}", path.display());
        }
        DataAction::Import { path } => {
            let doc = read_import_file(&path)
                .map_err(|e| format!("Error importing data. Please check the file format. ({e})"))?;
            session.state.apply_import(doc);
            println!(
                "Imported {} tasks, {} ideas, {} routines",
                session.state.tasks.len(),
                session.state.ideas.len(),
                session.state.routines.len()
            );
        }
    }

    session.save()
}
