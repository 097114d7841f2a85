use std::path::{Path, PathBuf};

/// Directories scanned for cache files.
pub fn cache_roots(home: &Path) -> Vec<PathBuf> {
    vec![
        home.join("Library/Caches"),
        PathBuf::from("/Library/Caches"),
        PathBuf::from("/tmp"),
    ]
}

/// Directories scanned for temporary files and stale downloads.
pub fn temp_roots(home: &Path) -> Vec<PathBuf> {
    vec![
        PathBuf::from("/tmp"),
        PathBuf::from("/var/tmp"),
        home.join("Downloads"),
        home.join("Library/Caches/Temporary Items"),
    ]
}

/// Paths that must never be removed as directories, whatever their contents.
pub fn is_protected(path: &Path) -> bool {
    path == Path::new("/") || path == Path::new("/tmp")
}

/// A root whose stale installer rule applies (any path with a Downloads
/// component, so the rule survives relocation under test trees).
pub fn is_downloads_root(root: &Path) -> bool {
    root.components()
        .any(|c| c.as_os_str() == "Downloads")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn protected_paths() {
        assert!(is_protected(Path::new("/")));
        assert!(is_protected(Path::new("/tmp")));
        assert!(!is_protected(Path::new("/var/tmp")));
        assert!(!is_protected(Path::new("/tmp/sub")));
    }

    #[test]
    fn downloads_detection() {
        assert!(is_downloads_root(Path::new("/Users/me/Downloads")));
        assert!(is_downloads_root(Path::new("/scratch/Downloads/nested")));
        assert!(!is_downloads_root(Path::new("/Users/me/Documents")));
    }

    #[test]
    fn cache_roots_are_home_relative_and_absolute() {
        let roots = cache_roots(Path::new("/Users/me"));
        assert_eq!(roots[0], Path::new("/Users/me/Library/Caches"));
        assert_eq!(roots[1], Path::new("/Library/Caches"));
        assert_eq!(roots[2], Path::new("/tmp"));
    }
}
