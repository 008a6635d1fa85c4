use chrono::NaiveDateTime;
use clap::Subcommand;

use super::{CmdResult, Session};

#[derive(Subcommand)]
pub enum ThemeAction {
    /// Show whether dark mode is on
    Show,
    /// Switch dark mode on or off
    Toggle,
}

pub fn run(action: ThemeAction, now: Option<NaiveDateTime>) -> CmdResult {
    let mut session = Session::open(now)?;

    let dark = match action {
        ThemeAction::Show => session.state.dark_mode,
        ThemeAction::Toggle => session.state.toggle_dark_mode(),
    };
    println!("dark mode: {}", if dark { "on" } else { "off" });

    session.save()
}
