use clap::{Parser, Subcommand};

/// Command-line interface definition for punchbank
/// CLI application to track attendance punches with SQLite
#[derive(Parser)]
#[command(
    name = "punchbank",
    version = env!("CARGO_PKG_VERSION"),
    about = "An attendance punch ledger: clock events, break intervals, and a bank-of-hours balance",
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

    /// Manage the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,
    },

    /// Record a clock-in punch
    In {
        /// Date of the punch (YYYY-MM-DD, default: today)
        #[arg(long = "date")]
        date: Option<String>,

        /// Time of the punch (HH:MM, default: now)
        #[arg(long = "at")]
        at: Option<String>,

        /// Location code (O=Office, R=Remote, C=Customer)
        #[arg(long = "pos")]
        pos: Option<String>,
    },

    /// Record a clock-out punch (auto-closes an open break)
    Out {
        #[arg(long = "date", help = "Date of the punch (YYYY-MM-DD, default: today)")]
        date: Option<String>,

        #[arg(long = "at", help = "Time of the punch (HH:MM, default: now)")]
        at: Option<String>,

        #[arg(long = "pos", help = "Location code (O=Office, R=Remote, C=Customer)")]
        pos: Option<String>,
    },

    /// Record the start of a break
    BreakStart {
        #[arg(long = "date", help = "Date of the punch (YYYY-MM-DD, default: today)")]
        date: Option<String>,

        #[arg(long = "at", help = "Time of the punch (HH:MM, default: now)")]
        at: Option<String>,

        #[arg(long = "pos", help = "Location code (O=Office, R=Remote, C=Customer)")]
        pos: Option<String>,
    },

    /// Record the end of a break
    BreakEnd {
        #[arg(long = "date", help = "Date of the punch (YYYY-MM-DD, default: today)")]
        date: Option<String>,

        #[arg(long = "at", help = "Time of the punch (HH:MM, default: now)")]
        at: Option<String>,

        #[arg(long = "pos", help = "Location code (O=Office, R=Remote, C=Customer)")]
        pos: Option<String>,
    },

    /// Show what the guards would allow on a date, plus its derived state
    Status {
        #[arg(long = "date", help = "Date to inspect (YYYY-MM-DD, default: today)")]
        date: Option<String>,
    },

    /// List recorded days with breaks and totals
    List {
        /// Period: YYYY-MM-DD, YYYY-MM, YYYY, start:end range, or "all"
        #[arg(long = "period")]
        period: Option<String>,

        /// Print the raw punch rows instead of the day summaries
        #[arg(long = "punches")]
        punches: bool,
    },

    /// Apply an approved retroactive adjustment to one clock punch
    Adjust {
        /// Date of the punch to adjust (YYYY-MM-DD)
        date: String,

        /// Punch kind to adjust: "in" or "out"
        kind: String,

        /// New time (HH:MM)
        time: String,

        /// Id of the specific punch, required when the day is ambiguous
        #[arg(long = "punch")]
        punch: Option<i64>,
    },

    /// Print the bank-of-hours balance
    Bank,

    /// Print or manage the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },
}
