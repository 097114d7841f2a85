use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::cleaner::{Cleaner, ScanEntry, ScanResult};
use crate::roots;
use crate::walker::{self, Visit};

/// Cache files: every regular file under a cache root counts, no name
/// filtering. Cleaning additionally prunes subdirectories left empty by the
/// file pass, but never a root itself and never a protected path.
pub struct Cache {
    roots: Vec<PathBuf>,
}

impl Cache {
    pub fn new(home: &Path) -> Self {
        Self::with_roots(roots::cache_roots(home))
    }

    pub fn with_roots(roots: Vec<PathBuf>) -> Self {
        Self { roots }
    }
}

/// Directories left behind by the file pass, deepest first so children go
/// before their parents. The root itself is excluded.
fn subdirectories(root: &Path) -> Vec<PathBuf> {
    let mut dirs = Vec::new();
    walker::walk(root, |entry| {
        if entry.is_dir && entry.path != root {
            dirs.push(entry.path.clone());
        }
        Visit::Continue
    });
    dirs.sort_by_key(|p| std::cmp::Reverse(p.components().count()));
    dirs
}

impl Cleaner for Cache {
    fn label(&self) -> &'static str {
        "Cache"
    }

    fn scan(&self) -> ScanResult {
        let mut result = ScanResult::new();

        for root in &self.roots {
            walker::walk(root, |entry| {
                if !entry.is_dir {
                    result.total_bytes += entry.size;
                    result.entries.push(ScanEntry {
                        path: entry.path.clone(),
                        size_bytes: entry.size,
                    });
                }
                Visit::Continue
            });
        }

        result
    }

    fn clean(&self) -> ScanResult {
        let mut result = ScanResult::new();

        for root in &self.roots {
            walker::walk(root, |entry| {
                if entry.is_dir {
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

            prune_subdirectories(root, roots::is_protected(root), &mut result.errors);
        }

        result
    }
}

/// Second pass after the file sweep: drop subdirectories the sweep emptied.
/// Skipped wholesale when the root is a protected path. remove_dir refuses
/// non-empty directories, so anything still holding an undeletable file
/// survives; only unexpected removal failures are recorded.
fn prune_subdirectories(root: &Path, protected: bool, errors: &mut Vec<String>) {
    if protected {
        return;
    }
    for dir in subdirectories(root) {
        if let Err(e) = fs::remove_dir(&dir) {
            match e.kind() {
                io::ErrorKind::DirectoryNotEmpty | io::ErrorKind::NotFound => {}
                _ => errors.push(format!("Failed to remove {}: {e}", dir.display())),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scan_counts_every_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.db"), vec![0u8; 100]).unwrap();
        fs::create_dir(dir.path().join("com.example.app")).unwrap();
        fs::write(dir.path().join("com.example.app/blob"), vec![0u8; 50]).unwrap();

        let result = Cache::with_roots(vec![dir.path().to_path_buf()]).scan();
        assert_eq!(result.entries.len(), 2);
        assert_eq!(result.total_bytes, 150);
        assert!(result.errors.is_empty());
    }

    #[test]
    fn scan_does_not_delete() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("keepme");
        fs::write(&file, b"data").unwrap();

        Cache::with_roots(vec![dir.path().to_path_buf()]).scan();
        assert!(file.exists());
    }

    #[test]
    fn clean_removes_files_and_empty_subdirs_but_not_root() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a"), vec![0u8; 10]).unwrap();
        fs::create_dir_all(dir.path().join("x/y")).unwrap();
        fs::write(dir.path().join("x/y/b"), vec![0u8; 20]).unwrap();

        let result = Cache::with_roots(vec![dir.path().to_path_buf()]).clean();
        assert_eq!(result.entries.len(), 2);
        assert_eq!(result.total_bytes, 30);
        assert!(dir.path().exists());
        assert!(!dir.path().join("x").exists());
    }

    #[test]
    fn prune_leaves_protected_roots_alone() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("empty")).unwrap();

        let mut errors = Vec::new();
        prune_subdirectories(dir.path(), true, &mut errors);
        assert!(dir.path().join("empty").is_dir());
        assert!(errors.is_empty());

        prune_subdirectories(dir.path(), false, &mut errors);
        assert!(!dir.path().join("empty").exists());
        assert!(errors.is_empty());
    }

    #[test]
    fn prune_ignores_non_empty_dirs_without_reporting() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("full")).unwrap();
        fs::write(dir.path().join("full/stuck"), b"x").unwrap();

        let mut errors = Vec::new();
        prune_subdirectories(dir.path(), false, &mut errors);
        assert!(dir.path().join("full").is_dir());
        assert!(dir.path().join("full/stuck").exists());
        assert!(errors.is_empty());
    }

    #[test]
    fn clean_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a"), vec![0u8; 10]).unwrap();

        let cache = Cache::with_roots(vec![dir.path().to_path_buf()]);
        cache.clean();
        let second = cache.clean();
        assert_eq!(second.entries.len(), 0);
        assert_eq!(second.total_bytes, 0);
    }

    #[test]
    fn missing_root_contributes_zero() {
        let dir = tempfile::tempdir().unwrap();
        let gone = dir.path().join("nope");

        let cache = Cache::with_roots(vec![gone]);
        let scanned = cache.scan();
        assert_eq!(scanned.total_bytes, 0);
        let cleaned = cache.clean();
        assert_eq!(cleaned.total_bytes, 0);
        assert!(cleaned.errors.is_empty());
    }

    #[test]
    fn clean_frees_no_more_than_scan_reported() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a"), vec![0u8; 123]).unwrap();
        fs::write(dir.path().join("b"), vec![0u8; 456]).unwrap();

        let cache = Cache::with_roots(vec![dir.path().to_path_buf()]);
        let scanned = cache.scan();
        let cleaned = cache.clean();
        assert!(cleaned.total_bytes <= scanned.total_bytes);
        assert_eq!(cleaned.total_bytes, 579);
    }
}
