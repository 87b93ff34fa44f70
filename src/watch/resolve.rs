// src/watch/resolve.rs

use std::collections::BTreeSet;
use std::path::Path;

use tracing::debug;

use crate::errors::{PollwatchError, Result};

/// Extensions monitored when the user configures none.
pub const DEFAULT_EXTENSIONS: &[&str] = &["rs"];

/// The set of file extensions considered for change detection.
///
/// Entries are stored with their leading dot (`".rs"`), matching what
/// `Path::extension` produces once normalised. An empty input list falls
/// back to [`DEFAULT_EXTENSIONS`].
#[derive(Debug, Clone)]
pub struct ExtensionFilter(BTreeSet<String>);

impl ExtensionFilter {
    pub fn new(extensions: &[String]) -> Self {
        let dotted: BTreeSet<String> = if extensions.is_empty() {
            DEFAULT_EXTENSIONS.iter().map(|e| format!(".{e}")).collect()
        } else {
            extensions.iter().map(|e| format!(".{e}")).collect()
        };
        Self(dotted)
    }

    /// Whether `path` carries one of the monitored extensions.
    pub fn matches(&self, path: &Path) -> bool {
        match path.extension() {
            Some(ext) => self.0.contains(&format!(".{}", ext.to_string_lossy())),
            None => false,
        }
    }
}

/// Expand a list of path patterns into an overlap-free set of paths.
///
/// Patterns containing a `*` are expanded with [`glob::glob`], which
/// supports the recursive `**` wildcard; each match is kept only if its
/// extension passes `extensions`. Patterns without a wildcard are kept
/// verbatim: they may name a directory, a file whose extension should not
/// gate inclusion, or a path that does not exist yet.
///
/// A pattern that fails to parse as a glob fails the whole resolution; no
/// partial set is returned.
pub fn resolve_paths(
    patterns: &[String],
    extensions: &ExtensionFilter,
) -> Result<BTreeSet<String>> {
    let mut candidates = BTreeSet::new();

    for pattern in patterns {
        if pattern.contains('*') {
            let matches =
                glob::glob(pattern).map_err(|source| PollwatchError::GlobPattern {
                    pattern: pattern.clone(),
                    source,
                })?;
            for entry in matches {
                let path = entry.map_err(|e| PollwatchError::IoError(e.into_error()))?;
                if extensions.matches(&path) {
                    candidates.insert(path.to_string_lossy().into_owned());
                }
            }
        } else {
            candidates.insert(pattern.clone());
        }
    }

    let resolved = remove_overlapped(candidates);
    debug!(?resolved, "resolved path set");
    Ok(resolved)
}

/// Drop every path already covered by an ancestor in the same set.
///
/// A scan of an ancestor's tree visits all of its descendants, so keeping
/// a descendant alongside its ancestor only duplicates scan work. Runs in
/// two passes: mark the descendants, then filter them out.
fn remove_overlapped(paths: BTreeSet<String>) -> BTreeSet<String> {
    let discard: BTreeSet<&str> = paths
        .iter()
        .flat_map(|p1| {
            paths
                .iter()
                .filter(move |p2| p2.as_str() != p1.as_str() && p2.starts_with(p1.as_str()))
                .map(String::as_str)
        })
        .collect();

    paths
        .iter()
        .filter(|p| !discard.contains(p.as_str()))
        .cloned()
        .collect()
}
