use std::path::PathBuf;

/// One item found during a scan.
pub struct ScanEntry {
    pub path: PathBuf,
    pub size_bytes: u64,
}

/// Result of scanning or cleaning a single category. After a clean,
/// `entries` holds only the items actually removed and `total_bytes` the
/// space confirmed freed.
pub struct ScanResult {
    pub entries: Vec<ScanEntry>,
    pub total_bytes: u64,
    pub errors: Vec<String>,
}

impl ScanResult {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            total_bytes: 0,
            errors: Vec::new(),
        }
    }
}

/// The trait every category module implements.
pub trait Cleaner {
    /// Human-readable label for display (e.g. "Cache").
    fn label(&self) -> &'static str;

    /// Scan and return what would be cleaned. Never deletes anything.
    fn scan(&self) -> ScanResult;

    /// Delete matching entries. Bytes are counted only after the removal
    /// succeeded; a failed removal is recorded in `errors` and the walk
    /// continues.
    fn clean(&self) -> ScanResult;
}
