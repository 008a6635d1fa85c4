use chrono::NaiveDateTime;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;

mod commands;

#[derive(Parser)]
#[command(name = "organizer-cli", version, about = "Tasks, ideas and routines from the terminal")]
struct Cli {
    /// Treat this local date/time as "now" (YYYY-MM-DD or YYYY-MM-DDTHH:MM:SS)
    #[arg(long, global = true, hide = true, value_parser = commands::parse_now)]
    now: Option<NaiveDateTime>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// One-off tasks
    Task {
        #[command(subcommand)]
        action: commands::task::TaskAction,
    },
    /// Ideas
    Idea {
        #[command(subcommand)]
        action: commands::idea::IdeaAction,
    },
    /// Recurring routines and streaks
    Routine {
        #[command(subcommand)]
        action: commands::routine::RoutineAction,
    },
    /// Export and import all collections as JSON
    Data {
        #[command(subcommand)]
        action: commands::data::DataAction,
    },
    /// Dark mode preference
    Theme {
        #[command(subcommand)]
        action: commands::theme::ThemeAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
    /// Print shell completions
    Completions {
        /// Target shell
        shell: Shell,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    let now = cli.now;
    let result = match cli.command {
        Commands::Task { action } => commands::task::run(action, now),
        Commands::Idea { action } => commands::idea::run(action, now),
        Commands::Routine { action } => commands::routine::run(action, now),
        Commands::Data { action } => commands::data::run(action, now),
        Commands::Theme { action } => commands::theme::run(action, now),
        Commands::Config { action } => commands::config::run(action),
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            clap_complete::generate(shell, &mut cmd, "organizer-cli", &mut std::io::stdout());
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
