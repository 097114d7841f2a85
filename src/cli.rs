use clap::{Parser, Subcommand};

use crate::maintenance::Period;

#[derive(Parser)]
#[command(
    name = "mcleaner",
    about = "A macOS cleanup tool — find and remove junk files",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Scan for junk files without removing anything
    Scan,

    /// Remove cache files under the cache directories
    CleanCache,

    /// Remove all .DS_Store files under the home directory
    CleanDsstore,

    /// Remove temporary files and stale downloads
    CleanTemp,

    /// Run macOS periodic maintenance scripts
    Maintenance {
        /// Which maintenance period to run
        #[arg(value_enum)]
        period: Period,
    },
}
