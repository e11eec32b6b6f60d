use clap::{Parser, Subcommand};
use docwatch::view::SortKey;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "docwatch", bin_name = "docwatch", version)]
#[command(about = "Track document expiration dates and export calendar reminders", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding documents and config (defaults to $DOCWATCH_HOME, then the platform data dir)
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Register a document
    #[command(alias = "n", display_order = 1)]
    Add {
        /// Document name (words are joined with spaces)
        #[arg(required = true, num_args = 1..)]
        name: Vec<String>,

        /// Expiration date (YYYY-MM-DD)
        #[arg(short, long, value_name = "DATE")]
        expires: String,

        /// Days before expiration to start alerting (defaults to the configured value)
        #[arg(short, long, value_name = "DAYS", allow_hyphen_values = true)]
        alert: Option<String>,
    },

    /// List documents with their status
    #[command(alias = "ls", display_order = 2)]
    List {
        /// Only show documents whose name contains this text
        #[arg(short, long)]
        search: Option<String>,

        /// Ordering: expiration-asc, expiration-desc, name-asc, name-desc
        #[arg(long, value_name = "KEY")]
        sort: Option<SortKey>,
    },

    /// Show documents in alert or already expired, most urgent first
    #[command(display_order = 3)]
    Alerts,

    /// Change a document's name, expiration or alert lead time
    #[command(alias = "e", display_order = 10)]
    Edit {
        /// Document number (from `list`) or id prefix
        selector: String,

        /// New name
        #[arg(long)]
        name: Option<String>,

        /// New expiration date (YYYY-MM-DD)
        #[arg(short, long, value_name = "DATE")]
        expires: Option<String>,

        /// New alert lead time in days
        #[arg(short, long, value_name = "DAYS", allow_hyphen_values = true)]
        alert: Option<String>,
    },

    /// Remove one or more documents
    #[command(alias = "rm", display_order = 11)]
    Remove {
        /// Document numbers (e.g. 1 3 5, 2-4) or id prefixes
        #[arg(required = true, num_args = 1..)]
        selectors: Vec<String>,
    },

    /// Write iCalendar reminder files (alert day + expiration day)
    #[command(display_order = 12)]
    Export {
        /// Document numbers or id prefixes, one .ics file each
        #[arg(num_args = 0.., required_unless_present = "all", conflicts_with = "all")]
        selectors: Vec<String>,

        /// Export every document into a single calendar file
        #[arg(long)]
        all: bool,

        /// Directory to write to (defaults to the current directory)
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,
    },

    /// Remove every document
    #[command(display_order = 20)]
    Clear {
        /// Skip confirmation
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Get or set configuration (default-alert-days, default-sort)
    #[command(display_order = 30)]
    Config {
        /// Configuration key
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
