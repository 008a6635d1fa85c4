//! Routine commands for CLI.

use std::path::PathBuf;

use chrono::NaiveDateTime;
use clap::Subcommand;
use organizer_core::{Frequency, ItemKind, Routine};

use super::{add_item, delete_item, move_item, CmdResult, Session};

#[derive(Subcommand)]
pub enum RoutineAction {
    /// Add a daily routine
    Add {
        /// Routine text (defaults to "Image: <file>" when --image is given)
        content: Option<String>,
        /// Attach an image file
        #[arg(long)]
        image: Option<PathBuf>,
    },
    /// List routines grouped by frequency, with the total streak
    List {
        /// Print JSON
        #[arg(long)]
        json: bool,
    },
    /// Mark a routine done for the current period
    Done {
        /// Routine ID
        id: u64,
    },
    /// Clear a routine's done mark (the streak is kept)
    Undo {
        /// Routine ID
        id: u64,
    },
    /// Change how often a routine resets
    Frequency {
        /// Routine ID
        id: u64,
        /// daily, weekly or monthly
        frequency: Frequency,
    },
    /// Delete a routine
    Delete {
        /// Routine ID
        id: u64,
    },
    /// Move the routine at one position to another
    Move {
        from: usize,
        to: usize,
    },
    /// Print the total streak across all routines
    Streak,
}

fn print_routine(index: usize, routine: &Routine) {
    let mark = if routine.done { "x" } else { " " };
    println!(
        "{index:>3}. [{mark}] {} (Streak: {})  ({})",
        routine.content, routine.streak, routine.id
    );
}

pub fn run(action: RoutineAction, now: Option<NaiveDateTime>) -> CmdResult {
    let mut session = Session::open(now)?;

    match action {
        RoutineAction::Add { content, image } => {
            add_item(&mut session, ItemKind::Routines, content, image.as_deref())?;
        }
        RoutineAction::List { json } => {
            let routines = &session.state.routines;
            if json {
                println!("{}", serde_json::to_string_pretty(routines)?);
            } else {
                println!("Total Streak: {}", routines.total_streak());
                for frequency in Frequency::ALL {
                    println!("{}", frequency.label());
                    for (index, routine) in routines.routines().iter().enumerate() {
                        if routine.frequency == frequency {
                            print_routine(index, routine);
                        }
                    }
                }
            }
        }
        RoutineAction::Done { id } => {
            let now = session.now;
            let routine = session.state.toggle_done(id, true, now)?;
            println!("{} done (Streak: {})", routine.content, routine.streak);
        }
        RoutineAction::Undo { id } => {
            let now = session.now;
            let routine = session.state.toggle_done(id, false, now)?;
            println!("{} not done (Streak: {})", routine.content, routine.streak);
        }
        RoutineAction::Frequency { id, frequency } => {
            let routine = session.state.set_frequency(id, frequency)?;
            println!("{} is now {}", routine.content, routine.frequency);
        }
        RoutineAction::Delete { id } => delete_item(&mut session, ItemKind::Routines, id)?,
        RoutineAction::Move { from, to } => {
            move_item(&mut session, ItemKind::Routines, from, to)?;
        }
        RoutineAction::Streak => println!("{}", session.state.routines.total_streak()),
    }

    session.save()
}
