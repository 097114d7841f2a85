use colored::Colorize;
use std::path::Path;

const UNITS: [&str; 6] = ["KB", "MB", "GB", "TB", "PB", "EB"];

/// Format a byte count as a human-readable base-1024 string.
pub fn format_size(bytes: u64) -> String {
    const UNIT: u64 = 1024;
    if bytes < UNIT {
        return format!("{bytes} B");
    }
    let mut div = UNIT;
    let mut exp = 0;
    let mut n = bytes / UNIT;
    while n >= UNIT {
        div *= UNIT;
        exp += 1;
        n /= UNIT;
    }
    format!("{:.1} {}", bytes as f64 / div as f64, UNITS[exp])
}

pub fn print_status(msg: &str) {
    println!("{}", msg.bold().cyan());
}

pub fn print_section(msg: &str) {
    println!("{}", msg.bold().white());
}

pub fn print_row(label: &str, value: &str) {
    println!("  {:<26} {}", label, value.green());
}

pub fn print_removed(path: &Path, size: &str) {
    println!(
        "  {} {}  {}",
        "Removed".red(),
        path.display().to_string().dimmed(),
        size.yellow()
    );
}

pub fn print_warning(msg: &str) {
    println!("{} {}", "Warning:".red().bold(), msg);
}

pub fn print_done(msg: &str) {
    println!("{}", msg.green().bold());
}
