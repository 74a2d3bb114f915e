use clap::{Parser, Subcommand};

/// Command-line interface definition for studiobook
/// CLI application to manage hourly studio bookings with SQLite
#[derive(Parser)]
#[command(
    name = "studiobook",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple studio booking CLI: hourly slots, availability checks and conflict detection using SQLite",
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

    /// Manage the configuration file (view or check)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for invalid fields")]
        check: bool,
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

    /// Print or manage the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Submit a booking request (persisted only when the slot is free)
    Add {
        /// Date of the booking (YYYY-MM-DD)
        date: String,

        /// Studio space slug
        #[arg(
            long = "space",
            help = "Studio space: principal-zone, natural-light, cyclorama, darkroom"
        )]
        space: Option<String>,

        /// Start time (HH:MM)
        #[arg(long = "time", help = "Start time (HH:MM, hourly grid)")]
        time: String,

        /// Duration in whole hours ("2" or "2h")
        #[arg(long = "duration", help = "Duration in whole hours, e.g. 2 or 2h")]
        duration: Option<String>,

        /// Client name attached to the booking
        #[arg(long = "client", help = "Client name for the booking")]
        client: Option<String>,
    },

    /// Check whether one proposed booking would be available
    Check {
        /// Date of the booking (YYYY-MM-DD)
        date: String,

        #[arg(
            long = "space",
            help = "Studio space: principal-zone, natural-light, cyclorama, darkroom"
        )]
        space: Option<String>,

        #[arg(long = "time", help = "Start time (HH:MM, hourly grid)")]
        time: String,

        #[arg(long = "duration", help = "Duration in whole hours, e.g. 2 or 2h")]
        duration: Option<String>,

        #[arg(long = "json", help = "Print the result as JSON")]
        json: bool,
    },

    /// Show the occupied / pending / available slots for a whole day
    Day {
        /// Date to inspect (YYYY-MM-DD)
        date: String,

        #[arg(
            long = "space",
            help = "Studio space: principal-zone, natural-light, cyclorama, darkroom"
        )]
        space: Option<String>,

        #[arg(long = "json", help = "Print the schedule as JSON")]
        json: bool,
    },

    /// List bookings
    List {
        #[arg(long, short, help = "Filter by year/month/day or a custom range")]
        period: Option<String>,

        #[arg(long, help = "Filter by studio space slug")]
        space: Option<String>,

        #[arg(long, help = "Filter by booking status")]
        status: Option<String>,

        #[arg(long = "today", help = "Show only today's bookings")]
        now: bool,
    },

    /// Change the status of a booking (admin action)
    Status {
        /// Booking id
        id: i64,

        /// New status: pending, confirmed, cancelled, completed
        status: String,
    },

    /// Delete a booking by id, or every booking of a date
    Del {
        /// Booking id to delete
        id: Option<i64>,

        #[arg(long = "date", help = "Delete all bookings for this date instead")]
        date: Option<String>,
    },
}
