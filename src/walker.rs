use std::path::{Path, PathBuf};
use std::time::SystemTime;
use walkdir::WalkDir;

/// Maximum depth to traverse. Guards against pathological nesting and
/// symlink cycles (links are additionally never followed).
const MAX_DEPTH: usize = 64;

/// One filesystem node handed to a visitor. Ephemeral — only valid for the
/// duration of the visit call.
pub struct VisitedEntry {
    pub path: PathBuf,
    pub is_dir: bool,
    pub size: u64,
    pub modified: SystemTime,
    pub name: String,
}

/// What the visitor wants the walk to do next.
pub enum Visit {
    /// Keep going.
    Continue,
    /// Do not descend into this directory (no effect on files).
    SkipDir,
    /// Stop the whole traversal.
    Abort,
}

/// Walk the tree rooted at `path` depth-first, calling `visit` once per
/// readable entry (the root included). A missing root means zero visits.
/// Entries that cannot be read are skipped and the walk continues; the
/// walker itself never mutates anything.
pub fn walk<F>(root: &Path, mut visit: F)
where
    F: FnMut(&VisitedEntry) -> Visit,
{
    if !root.exists() {
        return;
    }

    let mut it = WalkDir::new(root)
        .max_depth(MAX_DEPTH)
        .follow_links(false)
        .into_iter();

    while let Some(entry) = it.next() {
        let entry = match entry {
            Ok(e) => e,
            Err(_) => continue,
        };
        let meta = match entry.metadata() {
            Ok(m) => m,
            Err(_) => continue,
        };

        let visited = VisitedEntry {
            path: entry.path().to_path_buf(),
            is_dir: meta.is_dir(),
            size: meta.len(),
            // An unreadable mtime reads as fresh so age rules never match.
            modified: meta.modified().unwrap_or_else(|_| SystemTime::now()),
            name: entry.file_name().to_string_lossy().into_owned(),
        };

        match visit(&visited) {
            Visit::Continue => {}
            Visit::SkipDir => {
                if visited.is_dir {
                    it.skip_current_dir();
                }
            }
            Visit::Abort => break,
        }
    }
}
