// src/cli/args.rs
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)] // Read from `Cargo.toml`
#[command(arg_required_else_help = true, disable_help_subcommand = true)]
pub struct Args {
    /// Path to the notes store file (overrides the config file)
    #[arg(short, long, value_name = "STORE", global = true)]
    pub store: Option<PathBuf>,

    /// Path to a TOML config file
    #[arg(short, long, value_name = "CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Verbosity level (-v = debug, -vv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Save a page selection as-is (context-menu capture)
    Capture {
        /// URL of the page the text was selected on
        #[arg(value_name = "URL")]
        url: String,

        /// Selected text, stored unmodified
        #[arg(value_name = "SELECTION")]
        selection: String,
    },

    /// Add a note by hand; only its first line is kept
    Add {
        /// URL the note refers to
        #[arg(value_name = "URL")]
        url: String,

        /// Note text (read from stdin when omitted)
        #[arg(value_name = "TEXT")]
        text: Option<String>,
    },

    /// List the most recent notes
    List {
        /// Only show notes whose body contains this text (case-insensitive)
        #[arg(value_name = "SEARCH")]
        search: Option<String>,

        /// Number of notes to load (defaults to the configured limit)
        #[arg(short = 'n', long, value_name = "N", conflicts_with = "all")]
        limit: Option<usize>,

        /// Load every note
        #[arg(short, long)]
        all: bool,

        /// Mark these note ids as checked
        #[arg(long = "select", value_name = "ID")]
        select: Vec<i64>,

        /// Output notes as JSON
        #[arg(long)]
        json: bool,
    },

    /// Delete a note by id
    Delete {
        /// Note ID to delete
        #[arg(value_name = "NOTE_ID")]
        note_id: i64,
    },

    /// Export selected notes to notes_YYYY-MM-DD.json
    Export {
        /// Ids of the notes to export
        #[arg(value_name = "NOTE_ID")]
        note_ids: Vec<i64>,

        /// Directory to write the file into (defaults to the configured one)
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,
    },

    /// Process newline-delimited JSON background events from stdin
    Listen,
}
