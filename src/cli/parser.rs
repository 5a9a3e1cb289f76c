use crate::export::ExportFormat;
use crate::models::rounding_policy::RoundingPolicy;
use clap::{Parser, Subcommand};

/// Command-line interface definition for workhours
/// CLI application to compute net working hours and keep them per badge
#[derive(Parser)]
#[command(
    name = "workhours",
    version = env!("CARGO_PKG_VERSION"),
    about = "Compute net working hours (rounded entry/exit minus meal breaks) and keep them per badge number",
    long_about = None
)]
pub struct Cli {
    /// Override record file path (useful for tests or a second record set)
    #[arg(global = true, long = "file", value_name = "FILE")]
    pub file: Option<String>,

    /// Override configuration file path
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    /// Enable debug diagnostics on stderr
    #[arg(global = true, long, short)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration and record files
    Init,

    /// Calculate net working hours without saving
    Calc {
        /// Entry time (HH:MM)
        entry: String,

        /// Exit time (HH:MM)
        exit: String,

        #[arg(long = "weekend", help = "Use the weekend break configuration")]
        weekend: bool,

        #[arg(
            long = "rounding",
            value_enum,
            help = "Rounding algorithm for this calculation (default: from configuration)"
        )]
        rounding: Option<RoundingPolicy>,
    },

    /// Calculate and save a record for a badge number
    Add {
        /// Badge number of the worker
        badge: String,

        /// Entry time (HH:MM)
        entry: String,

        /// Exit time (HH:MM)
        exit: String,

        #[arg(long = "weekend", help = "Use the weekend break configuration")]
        weekend: bool,

        #[arg(long = "date", help = "Record date (YYYY-MM-DD), defaults to today")]
        date: Option<String>,

        #[arg(
            long = "rounding",
            value_enum,
            help = "Rounding algorithm for this calculation (default: from configuration)"
        )]
        rounding: Option<RoundingPolicy>,
    },

    /// List saved records
    List {
        #[arg(long, short, help = "Only show records of this badge number")]
        badge: Option<String>,
    },

    /// Delete a saved record (badge, date, entry and exit must all match)
    Del {
        badge: String,

        /// Record date (YYYY-MM-DD)
        date: String,

        /// Rounded entry time as saved (HH:MM)
        entry: String,

        /// Rounded exit time as saved (HH:MM)
        exit: String,

        #[arg(long, short, help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Create a new, empty record file
    New {
        #[arg(value_name = "FILE")]
        path: String,

        #[arg(long, short = 'f', help = "Overwrite an existing file without asking")]
        force: bool,
    },

    /// Export saved records
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long = "out", value_name = "FILE")]
        out: String,

        #[arg(long, short, help = "Only export records of this badge number")]
        badge: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Manage the configuration file (view, check or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(
            long = "get",
            value_name = "KEY",
            help = "Print one value, e.g. breaks.weekday.lunch.start_time"
        )]
        get: Option<String>,

        #[arg(
            long = "set",
            value_name = "KEY=VALUE",
            help = "Change one value, e.g. rounding_algorithm=nearest_5"
        )]
        set: Option<String>,

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
}

impl Cli {
    /// Configuration file this invocation reads and writes.
    pub fn config_path(&self) -> std::path::PathBuf {
        crate::config::Config::resolve_config_file(self.config.as_deref())
    }
}
