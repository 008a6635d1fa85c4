//! Task management commands for CLI.

use std::path::PathBuf;

use chrono::NaiveDateTime;
use clap::Subcommand;
use organizer_core::ItemKind;

use super::{add_item, delete_item, move_item, CmdResult, Session};

#[derive(Subcommand)]
pub enum TaskAction {
    /// Add a task
    Add {
        /// Task text (defaults to "Image: <file>" when --image is given)
        content: Option<String>,
        /// Attach an image file
        #[arg(long)]
        image: Option<PathBuf>,
    },
    /// List tasks in order
    List {
        /// Include completed tasks (overrides tasks.show_completed)
        #[arg(long)]
        all: bool,
        /// Print JSON
        #[arg(long)]
        json: bool,
    },
    /// Mark a task completed
    Complete {
        /// Task ID
        id: u64,
    },
    /// Delete a task
    Delete {
        /// Task ID
        id: u64,
    },
    /// Move the task at one position to another
    Move {
        from: usize,
        to: usize,
    },
}

pub fn run(action: TaskAction, now: Option<NaiveDateTime>) -> CmdResult {
    let mut session = Session::open(now)?;

    match action {
        TaskAction::Add { content, image } => {
            add_item(&mut session, ItemKind::Tasks, content, image.as_deref())?;
        }
        TaskAction::List { all, json } => {
            let show_completed = all || session.config.tasks.show_completed;
            if json {
                let tasks: Vec<_> = session.state.tasks.visible(show_completed).collect();
                println!("{}", serde_json::to_string_pretty(&tasks)?);
            } else {
                for (index, task) in session.state.tasks.iter().enumerate() {
                    if task.is_completed() && !show_completed {
                        continue;
                    }
                    let mark = if task.is_completed() { "x" } else { " " };
                    let image = if task.attachment.is_present() { " [image]" } else { "" };
                    println!("{index:>3}. [{mark}] {}{image}  ({})", task.content, task.id);
                }
            }
        }
        TaskAction::Complete { id } => {
            let now = session.now;
            let task = session.state.complete_task(id, now)?;
            println!("Task completed: {}", task.content);
        }
        TaskAction::Delete { id } => delete_item(&mut session, ItemKind::Tasks, id)?,
        TaskAction::Move { from, to } => move_item(&mut session, ItemKind::Tasks, from, to)?,
    }

    session.save()
}
