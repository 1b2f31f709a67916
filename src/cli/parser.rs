use crate::models::IdentifierKind;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rMotoHours
#[derive(Parser)]
#[command(
    name = "rmotohours",
    version = env!("CARGO_PKG_VERSION"),
    about = "Log engine hours per vehicle and keep daily totals (SQLite backed)",
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
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Add missing fields with their default values")]
        migrate: bool,

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

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Log hours for a vehicle (the vehicle is created on first use)
    Add {
        /// Registration number (1234AB-1) or last 4 VIN digits
        identifier: String,

        /// Hours of use, e.g. 2.5 (a decimal comma is accepted)
        #[arg(allow_hyphen_values = true)]
        hours: String,

        /// Date label (defaults to today, formatted with `date_format`)
        #[arg(long = "date")]
        date: Option<String>,

        /// Identifier scheme for this command (overrides the configuration)
        #[arg(long = "kind", value_enum)]
        kind: Option<IdentifierKind>,
    },

    /// Change the hours of an existing entry
    Hours {
        /// Vehicle identifier
        identifier: String,

        /// Entry number as shown by `list`
        entry: usize,

        /// New hours value
        #[arg(allow_hyphen_values = true)]
        hours: String,
    },

    /// Change a vehicle's identifier
    Rename {
        /// Current identifier
        identifier: String,

        /// New identifier
        new_identifier: String,

        #[arg(long = "kind", value_enum)]
        kind: Option<IdentifierKind>,
    },

    /// Delete one entry of a vehicle (the vehicle goes with its last entry)
    Del {
        /// Vehicle identifier
        identifier: String,

        /// Entry number as shown by `list`
        entry: usize,

        #[arg(long = "yes", short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// List vehicles and their entries
    List {
        #[arg(long = "vehicle", help = "Show only this vehicle")]
        vehicle: Option<String>,
    },

    /// Print total hours
    Total {
        #[arg(long = "vehicle", help = "Total of a single vehicle")]
        vehicle: Option<String>,
    },

    /// Save today's total
    Save {
        #[arg(
            long = "auto",
            help = "Guarded save: skipped when today is already saved or the total is zero"
        )]
        auto: bool,
    },

    /// List saved daily totals
    Saved,

    /// Delete a saved daily total
    Unsave {
        /// Position as shown by `saved`
        position: usize,

        #[arg(long = "yes", short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Export both collections as a JSON document
    Export {
        #[arg(long, value_name = "FILE")]
        file: String,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },
}
