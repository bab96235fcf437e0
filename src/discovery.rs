//! Enumerate the documents that should appear in the index.
//!
//! Traversal prunes excluded directories up front rather than filtering their contents after the
//! fact, so large dependency caches are never descended into.

use crate::config::Config;
use crate::document::DocPath;
use crate::error::{Error, Result};
use std::collections::BTreeSet;
use std::path::Path;
use walkdir::{DirEntry, WalkDir};

/// Collect the relative paths of every document under `root`.
///
/// Excludes the index document, the configured toolchain files, and anything beneath a skipped
/// directory. Unreadable entries below the root are logged and skipped.
///
/// # Errors
///
/// Returns an error if `root` is missing, not a directory, or cannot be read.
pub fn find_documents(root: &Path, config: &Config) -> Result<BTreeSet<DocPath>> {
    if !root.is_dir() {
        return Err(Error::RootNotFound {
            path: root.to_path_buf(),
        });
    }

    let mut documents = BTreeSet::new();
    let walker = WalkDir::new(root)
        .into_iter()
        .filter_entry(|entry| entry.depth() == 0 || !is_pruned(entry, config));

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) if e.depth() == 0 => {
                return Err(Error::Walk {
                    path: root.to_path_buf(),
                    source: e,
                });
            }
            Err(e) => {
                tracing::warn!("Skipping unreadable entry under '{}': {}", root.display(), e);
                continue;
            }
        };

        // Symlinked files count; symlinked directories are not descended into.
        if !entry.path().is_file() || !has_extension(entry.path(), &config.file_extension) {
            continue;
        }

        let name = entry.file_name().to_string_lossy();
        if config.is_skipped_file(&name) {
            continue;
        }

        if let Ok(relative) = entry.path().strip_prefix(root) {
            documents.insert(DocPath::from_relative(relative));
        }
    }

    tracing::debug!(
        "Found {} document(s) under '{}'",
        documents.len(),
        root.display()
    );
    Ok(documents)
}

fn is_pruned(entry: &DirEntry, config: &Config) -> bool {
    let name = entry.file_name().to_string_lossy();
    if entry.file_type().is_dir() {
        config.is_skipped_dir(&name)
    } else {
        config.is_skipped_file(&name)
    }
}

fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext == extension)
}

#[cfg(test)]
#[path = "tests/discovery.rs"]
mod tests;
