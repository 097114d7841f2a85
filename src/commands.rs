use std::path::PathBuf;

use crate::categories::{Cache, DsStore, Temp};
use crate::cleaner::Cleaner;
use crate::output;

/// Home resolution failure is fatal to the invoking command only: the error
/// is printed and the command returns without touching anything.
fn resolve_home() -> Option<PathBuf> {
    let home = dirs::home_dir();
    if home.is_none() {
        output::print_warning("cannot determine the home directory");
    }
    home
}

pub fn scan() {
    output::print_status("Scanning for junk files...");
    let Some(home) = resolve_home() else { return };

    let cache = Cache::new(&home).scan();
    let ds_store = DsStore::new(&home).scan();
    let temp = Temp::new(&home).scan();

    println!();
    output::print_section("Scan results:");
    output::print_row("Cache found:", &output::format_size(cache.total_bytes));
    output::print_row(".DS_Store files:", &ds_store.entries.len().to_string());
    output::print_row("Temporary files:", &output::format_size(temp.total_bytes));
    output::print_row(
        "Total recoverable space:",
        &output::format_size(cache.total_bytes + temp.total_bytes),
    );
}

pub fn clean_cache() {
    output::print_status("Cleaning cache...");
    let Some(home) = resolve_home() else { return };
    run_clean(&Cache::new(&home), None);
}

pub fn clean_dsstore() {
    output::print_status("Removing .DS_Store files...");
    let Some(home) = resolve_home() else { return };
    run_clean(&DsStore::new(&home), Some(".DS_Store files removed:"));
}

pub fn clean_temp() {
    output::print_status("Removing temporary files...");
    let Some(home) = resolve_home() else { return };
    run_clean(&Temp::new(&home), Some("Temporary files removed:"));
}

/// Shared tail of every clean command: run the cleaner, echo each removal
/// and failure, then summarize. Failures never change the exit status.
fn run_clean(cleaner: &dyn Cleaner, count_label: Option<&str>) {
    let result = cleaner.clean();

    for entry in &result.entries {
        output::print_removed(&entry.path, &output::format_size(entry.size_bytes));
    }
    for err in &result.errors {
        output::print_warning(&format!("{}: {err}", cleaner.label()));
    }

    println!();
    output::print_done("Cleaning completed!");
    if let Some(label) = count_label {
        output::print_row(label, &result.entries.len().to_string());
    }
    output::print_row("Space freed:", &output::format_size(result.total_bytes));
}
