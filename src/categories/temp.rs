use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

use crate::cleaner::{Cleaner, ScanEntry, ScanResult};
use crate::roots;
use crate::walker::{self, Visit, VisitedEntry};

/// Downloads older than this are treated as stale installers.
const STALE_AGE_DAYS: u64 = 30;

const INSTALLER_SUFFIXES: &[&str] = &[".dmg", ".zip", ".tar.gz"];

/// Temporary files and stale downloads. Matches files by name pattern
/// everywhere, plus old installer-like archives under a Downloads root.
/// Cleaning never removes directories.
pub struct Temp {
    roots: Vec<PathBuf>,
}

impl Temp {
    pub fn new(home: &Path) -> Self {
        Self::with_roots(roots::temp_roots(home))
    }

    pub fn with_roots(roots: Vec<PathBuf>) -> Self {
        Self { roots }
    }

    fn run(&self, mut on_match: impl FnMut(&VisitedEntry, &mut ScanResult)) -> ScanResult {
        let mut result = ScanResult::new();
        let cutoff = SystemTime::now()
            .checked_sub(Duration::from_secs(STALE_AGE_DAYS * 86400))
            .unwrap_or(SystemTime::UNIX_EPOCH);

        for root in &self.roots {
            let in_downloads = roots::is_downloads_root(root);
            walker::walk(root, |entry| {
                if !entry.is_dir && matches(entry, in_downloads, cutoff) {
                    on_match(entry, &mut result);
                }
                Visit::Continue
            });
        }

        result
    }
}

fn is_temp_name(name: &str) -> bool {
    let lower = name.to_lowercase();
    lower.ends_with(".tmp")
        || lower.ends_with(".temp")
        || lower.contains("temp")
        || lower.starts_with("tmp")
}

fn is_stale_installer(name: &str, modified: SystemTime, cutoff: SystemTime) -> bool {
    if modified > cutoff {
        return false;
    }
    let lower = name.to_lowercase();
    INSTALLER_SUFFIXES.iter().any(|s| lower.ends_with(s)) || lower.contains("installer")
}

fn matches(entry: &VisitedEntry, in_downloads: bool, cutoff: SystemTime) -> bool {
    is_temp_name(&entry.name)
        || (in_downloads && is_stale_installer(&entry.name, entry.modified, cutoff))
}

impl Cleaner for Temp {
    fn label(&self) -> &'static str {
        "Temporary files"
    }

    fn scan(&self) -> ScanResult {
        self.run(|entry, result| {
            result.total_bytes += entry.size;
            result.entries.push(ScanEntry {
                path: entry.path.clone(),
                size_bytes: entry.size,
            });
        })
    }

    fn clean(&self) -> ScanResult {
        self.run(|entry, result| match fs::remove_file(&entry.path) {
            Ok(()) => {
                result.total_bytes += entry.size;
                result.entries.push(ScanEntry {
                    path: entry.path.clone(),
                    size_bytes: entry.size,
                });
            }
            Err(e) => {
                result
                    .errors
                    .push(format!("Failed to remove {}: {e}", entry.path.display()));
            }
        })
    }
}
