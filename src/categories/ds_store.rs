use std::fs;
use std::path::{Path, PathBuf};

use crate::cleaner::{Cleaner, ScanEntry, ScanResult};
use crate::walker::{self, Visit};

/// Finder metadata files, matched by exact base name anywhere under the
/// home directory.
pub struct DsStore {
    root: PathBuf,
}

impl DsStore {
    pub fn new(home: &Path) -> Self {
        Self::with_root(home.to_path_buf())
    }

    pub fn with_root(root: PathBuf) -> Self {
        Self { root }
    }
}

fn is_ds_store(name: &str) -> bool {
    name == ".DS_Store"
}

impl Cleaner for DsStore {
    fn label(&self) -> &'static str {
        ".DS_Store"
    }

    fn scan(&self) -> ScanResult {
        let mut result = ScanResult::new();

        walker::walk(&self.root, |entry| {
            if !entry.is_dir && is_ds_store(&entry.name) {
                result.total_bytes += entry.size;
                result.entries.push(ScanEntry {
                    path: entry.path.clone(),
                    size_bytes: entry.size,
                });
            }
            Visit::Continue
        });

        result
    }

    fn clean(&self) -> ScanResult {
        let mut result = ScanResult::new();

        walker::walk(&self.root, |entry| {
            if entry.is_dir || !is_ds_store(&entry.name) {
                return Visit::Continue;
            }
            match fs::remove_file(&entry.path) {
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
            }
            Visit::Continue
        });

        result
    }
}
