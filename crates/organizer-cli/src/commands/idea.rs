//! Idea commands for CLI.

use std::path::PathBuf;

use chrono::NaiveDateTime;
use clap::Subcommand;
use organizer_core::ItemKind;

use super::{add_item, delete_item, move_item, CmdResult, Session};

#[derive(Subcommand)]
pub enum IdeaAction {
    /// Add an idea
    Add {
        /// Idea text (defaults to "Image: <file>" when --image is given)
        content: Option<String>,
        /// Attach an image file
        #[arg(long)]
        image: Option<PathBuf>,
    },
    /// List ideas in order
    List {
        /// Print JSON
        #[arg(long)]
        json: bool,
    },
    /// Delete an idea
    Delete {
        /// Idea ID
        id: u64,
    },
    /// Move the idea at one position to another
    Move {
        from: usize,
        to: usize,
    },
}

pub fn run(action: IdeaAction, now: Option<NaiveDateTime>) -> CmdResult {
    let mut session = Session::open(now)?;

    match action {
        IdeaAction::Add { content, image } => {
            add_item(&mut session, ItemKind::Ideas, content, image.as_deref())?;
        }
        IdeaAction::List { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(&session.state.ideas)?);
            } else {
                for (index, idea) in session.state.ideas.iter().enumerate() {
                    println!("{index:>3}. {}  ({})", idea.content, idea.id);
                }
            }
        }
        IdeaAction::Delete { id } => delete_item(&mut session, ItemKind::Ideas, id)?,
        IdeaAction::Move { from, to } => move_item(&mut session, ItemKind::Ideas, from, to)?,
    }

    session.save()
}
