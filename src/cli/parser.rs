use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for tuna-backfill
/// CLI tool to maintain a local tuna-timer MongoDB database
#[derive(Parser)]
#[command(
    name = "tuna-backfill",
    version = env!("CARGO_PKG_VERSION"),
    about = "Backfill actual_minutes and edits on tuna-timer's MongoDB timers collection",
    long_about = None
)]
pub struct Cli {
    /// Override the MongoDB connection URI (useful for tests or remote instances)
    #[arg(global = true, long = "uri")]
    pub uri: Option<String>,

    /// Override the database name (default: tuna_timer_dev)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration file
    Init,

    /// Manage the configuration file (view, check or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/vim/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Backfill actual_minutes and edits on timers that miss them
    Backfill {
        #[arg(
            long = "dry-run",
            help = "Report what would change without writing anything"
        )]
        dry_run: bool,
    },

    /// Show database and backfill status
    Status,

    /// Export timer documents to a file
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, help = "Export only timers still waiting for backfill")]
        pending: bool,

        #[arg(long, short = 'f', help = "Overwrite output file without confirmation")]
        force: bool,
    },

    /// Dump the timers collection to a JSON backup file
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, help = "Compress the backup with gzip")]
        compress: bool,
    },
}
