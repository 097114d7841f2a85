mod categories;
mod cleaner;
mod cli;
mod commands;
mod maintenance;
mod output;
mod roots;
mod walker;

use clap::Parser;

fn main() {
    let cli = cli::Cli::parse();

    match cli.command {
        cli::Command::Scan => commands::scan(),
        cli::Command::CleanCache => commands::clean_cache(),
        cli::Command::CleanDsstore => commands::clean_dsstore(),
        cli::Command::CleanTemp => commands::clean_temp(),
        cli::Command::Maintenance { period } => maintenance::run(period),
    }
}
