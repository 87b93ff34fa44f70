// src/watch/scan.rs

use std::collections::BTreeSet;
use std::path::PathBuf;
use std::time::SystemTime;

use tracing::debug;
use walkdir::{DirEntry, WalkDir};

use crate::errors::Result;
use crate::watch::resolve::ExtensionFilter;

/// Hidden entries start with a dot; the bare `.` cwd marker does not count.
fn is_hidden(entry: &DirEntry) -> bool {
    let name = entry.file_name().to_string_lossy();
    name != "." && name.starts_with('.')
}

fn is_ignored(entry: &DirEntry, ignore: &BTreeSet<String>) -> bool {
    ignore.contains(entry.path().to_string_lossy().as_ref())
}

/// Walk `root` in pre-order and return the first file modified strictly
/// after `baseline`, or `None` when nothing qualifies.
///
/// Hidden and ignored directories are pruned with their whole subtree;
/// hidden, ignored or wrong-extension files are skipped individually.
/// Ignore matching is by exact path, not by prefix. The walk stops at the
/// first hit, so at most one path is reported per call and the rest of the
/// tree stays unvisited. Any I/O failure during the walk aborts it with no
/// partial result.
pub fn scan_for_change(
    root: &str,
    ignore: &BTreeSet<String>,
    extensions: &ExtensionFilter,
    baseline: SystemTime,
) -> Result<Option<PathBuf>> {
    debug!(root, "scanning for changes");

    let walker = WalkDir::new(root)
        .into_iter()
        .filter_entry(|entry| !is_hidden(entry) && !is_ignored(entry, ignore));

    for entry in walker {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        if !extensions.matches(entry.path()) {
            continue;
        }
        let modified = entry.metadata()?.modified()?;
        if modified > baseline {
            return Ok(Some(entry.into_path()));
        }
    }

    Ok(None)
}
