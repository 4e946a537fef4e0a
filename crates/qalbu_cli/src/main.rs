//! Command-line front end for the Qalbu core.
//!
//! # Responsibility
//! - Expose mood history, favorites and checklist operations from a shell.
//! - Keep output plain and line-oriented for quick local checks.

use anyhow::Result;
use clap::{Parser, Subcommand};
use qalbu_core::CoreConfig;
use std::path::PathBuf;

mod commands;

#[derive(Parser)]
#[command(name = "qalbu")]
#[command(about = "Qalbu - mood journal, favorites and daily practice checklist", long_about = None)]
struct Cli {
    /// Profile database path (overrides QALBU_DB_PATH).
    #[arg(long, global = true)]
    db: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Health check
    Ping,
    /// Print core version
    Version,
    /// List the mood catalog
    Moods,
    /// Mood history
    Mood {
        #[command(subcommand)]
        action: MoodAction,
    },
    /// Saved verses and hadith
    Favorite {
        #[command(subcommand)]
        action: FavoriteAction,
    },
    /// Daily practice checklist
    Checklist {
        #[command(subcommand)]
        action: ChecklistAction,
    },
}

#[derive(Subcommand)]
enum MoodAction {
    /// Record a mood selection
    Log { mood: String },
    /// Attach a journal note to a recorded selection
    Note { id: String, text: String },
    /// Show history, newest first
    History,
    /// Delete the whole history
    Clear,
    /// Show all-time and 30-day statistics
    Stats,
}

#[derive(Subcommand)]
enum FavoriteAction {
    /// Save the verse or hadith from a generated-content JSON file
    Save {
        #[arg(long)]
        content: PathBuf,
        #[arg(long, value_enum)]
        kind: commands::favorite::SaveKind,
        #[arg(long)]
        mood: String,
    },
    /// Remove a favorite by id
    Remove { id: String },
    /// List favorites, newest first
    List,
}

#[derive(Subcommand)]
enum ChecklistAction {
    /// Flip one practice id
    Toggle { id: String },
    /// Show the catalog with check marks
    List,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut config = CoreConfig::from_env();
    if let Some(db) = cli.db {
        config.db_path = db;
    }
    if let Err(err) = qalbu_core::init_logging_from_config(&config) {
        eprintln!("warning: logging disabled: {err}");
    }

    match cli.command {
        Commands::Ping => println!("qalbu_core ping={}", qalbu_core::ping()),
        Commands::Version => println!("qalbu_core version={}", qalbu_core::core_version()),
        Commands::Moods => commands::mood::catalog(),
        Commands::Mood { action } => match action {
            MoodAction::Log { mood } => commands::mood::log(&config, &mood)?,
            MoodAction::Note { id, text } => commands::mood::note(&config, &id, &text)?,
            MoodAction::History => commands::mood::history(&config)?,
            MoodAction::Clear => commands::mood::clear(&config)?,
            MoodAction::Stats => commands::mood::stats(&config)?,
        },
        Commands::Favorite { action } => match action {
            FavoriteAction::Save {
                content,
                kind,
                mood,
            } => commands::favorite::save(&config, &content, kind, &mood)?,
            FavoriteAction::Remove { id } => commands::favorite::remove(&config, &id)?,
            FavoriteAction::List => commands::favorite::list(&config)?,
        },
        Commands::Checklist { action } => match action {
            ChecklistAction::Toggle { id } => commands::checklist::toggle(&config, &id)?,
            ChecklistAction::List => commands::checklist::list(&config)?,
        },
    }

    Ok(())
}
