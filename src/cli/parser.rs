use crate::export::ExportFormat;
use crate::models::TimeSlot;
use clap::{Parser, Subcommand};

/// Command-line interface definition for carpool-ledger
#[derive(Parser)]
#[command(
    name = "carpool-ledger",
    version = env!("CARGO_PKG_VERSION"),
    about = "Split daily carpool costs among regular members and settle driver reimbursements",
    long_about = None
)]
pub struct Cli {
    /// Override the session store path (useful for tests or a separate ledger)
    #[arg(global = true, long = "store")]
    pub store: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration and an empty session store
    Init,

    /// Manage the configuration file (view, check or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

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

    /// Show or update the roster of regular members
    Members {
        /// Replace the roster with a comma-separated list
        #[arg(long = "set", value_name = "NAMES", help = "Replace the roster (comma-separated)")]
        set: Option<String>,

        #[arg(long = "add", value_name = "NAME", help = "Add a member to the roster")]
        add: Vec<String>,

        #[arg(long = "remove", value_name = "NAME", help = "Remove a member from the roster")]
        remove: Vec<String>,
    },

    /// Record (or overwrite) one ride session
    Ride {
        /// Date of the ride (YYYY-MM-DD or "today")
        date: String,

        #[arg(long, value_enum, help = "Time of day of the ride")]
        slot: Option<TimeSlot>,

        #[arg(
            long = "with",
            value_name = "NAMES",
            default_value = "",
            help = "Attendees, comma-separated"
        )]
        attendees: String,

        #[arg(long, help = "An external paying guest was on board")]
        guest: bool,

        #[arg(
            long,
            value_name = "AMOUNT",
            default_value_t = 0.0,
            allow_negative_numbers = true,
            help = "Money collected from outside the roster"
        )]
        earnings: f64,

        #[arg(long, value_name = "NAME", help = "Member who drove")]
        driver: Option<String>,
    },

    /// Delete a ride session (or every session of a date)
    Del {
        /// Date (YYYY-MM-DD)
        date: String,

        #[arg(long, value_enum, help = "Delete only this slot")]
        slot: Option<TimeSlot>,

        #[arg(long, short = 'f', help = "Do not ask for confirmation")]
        force: bool,
    },

    /// List stored ride sessions
    List {
        #[arg(long, short, help = "Filter by year/month/day or a custom range")]
        range: Option<String>,
    },

    /// Compute the daily breakdown, weekly totals and settlement
    Settle {
        /// Period to settle.
        ///
        /// Supported formats: YYYY, YYYY-MM, YYYY-MM-DD, same-format ranges
        /// like 2025-09-01:2025-09-07, or "all" (default).
        #[arg(long, short, help = "Filter by year/month/day or a custom range")]
        range: Option<String>,
    },

    /// Export rides and settlement tables
    Export {
        #[arg(long, value_enum, default_value = "xlsx")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE", help = "Output file (absolute path)")]
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
}
