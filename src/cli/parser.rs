use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for worklog
#[derive(Parser)]
#[command(
    name = "worklog",
    version = env!("CARGO_PKG_VERSION"),
    about = "Log daily work periods, compare them with a daily target, export and import CSV/JSON",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
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
    /// Initialize the store and configuration
    Init,

    /// Show or edit the configuration file
    Config {
        #[arg(long = "print", help = "Print the effective configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Clock in: open a new period
    In {
        #[arg(long, help = "Date (YYYY-MM-DD), default today")]
        date: Option<String>,

        #[arg(long, help = "Clock-in time (HH:MM), default now")]
        at: Option<String>,
    },

    /// Clock out: close the open period
    Out {
        #[arg(long, help = "Date (YYYY-MM-DD), default today")]
        date: Option<String>,

        #[arg(long, help = "Clock-out time (HH:MM), default now")]
        at: Option<String>,
    },

    /// Add a period manually
    Add {
        /// Date of the period (YYYY-MM-DD)
        date: String,

        #[arg(long, help = "Start time (HH:MM)")]
        start: Option<String>,

        #[arg(long, help = "End time (HH:MM)")]
        end: Option<String>,
    },

    /// Edit an existing period
    Edit {
        /// Date of the period (YYYY-MM-DD)
        date: String,

        #[arg(long = "period", short = 'p', help = "Period number as shown by `list`")]
        period: usize,

        #[arg(long, help = "New start time (HH:MM)")]
        start: Option<String>,

        #[arg(long, help = "New end time (HH:MM)", conflicts_with = "reopen")]
        end: Option<String>,

        #[arg(long, help = "Remove the end time, making the period open again")]
        reopen: bool,
    },

    /// Delete a period
    Del {
        /// Date of the period (YYYY-MM-DD)
        date: String,

        #[arg(long = "period", short = 'p', help = "Period number to delete")]
        period: usize,

        #[arg(long, short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Set or clear the note of a day
    Note {
        /// Date (YYYY-MM-DD)
        date: String,

        /// Note text; omit to clear the note
        text: Option<String>,
    },

    /// Show or set the daily target (e.g. 8h, 7h30m, 450, 07:30)
    Target { value: Option<String> },

    /// List periods and balance
    List {
        #[arg(long = "today", help = "Show only today")]
        now: bool,

        #[arg(
            long,
            value_name = "DATE",
            num_args = 0..=1,
            default_missing_value = "",
            help = "Show the week containing DATE (default this week)"
        )]
        week: Option<String>,

        #[arg(
            long,
            value_name = "YYYY-MM",
            num_args = 0..=1,
            default_missing_value = "",
            help = "Show a whole month (default this month)"
        )]
        month: Option<String>,

        #[arg(long, value_name = "RANGE", help = "Year/month/day or A:B range")]
        range: Option<String>,

        #[arg(long, help = "Show every stored day")]
        all: bool,
    },

    /// Export records
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(
            long,
            value_name = "RANGE",
            help = "Filter export by year/month/day or a custom range"
        )]
        range: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Import a JSON export, replacing all records
    Import {
        #[arg(long, value_name = "FILE")]
        file: String,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },
}
