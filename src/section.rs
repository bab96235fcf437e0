//! Section grouping for documents missing from the index.
//!
//! A section is the part of the index a document belongs in, decided by its top-level directory.
//! Documents directly in the root form their own bucket, and top-level directories that are not
//! recognised share an overflow bucket.

use crate::document::DocPath;
use std::collections::BTreeSet;
use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq)]
/// Destination bucket for newly discovered documents.
pub enum Section {
    /// Documents sitting directly in the documentation root.
    Root,
    /// A recognised top-level directory, stored as configured.
    Named(String),
    /// Every other top-level directory.
    Other,
}

impl Section {
    #[must_use]
    /// Name to look for in the index when placing this section's entries.
    ///
    /// Root documents follow `root_anchor`; the overflow bucket has no anchor and is appended.
    pub fn anchor<'a>(&'a self, root_anchor: &'a str) -> Option<&'a str> {
        match self {
            Self::Root => Some(root_anchor),
            Self::Named(name) => Some(name),
            Self::Other => None,
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Root => f.write_str("root"),
            Self::Named(name) => f.write_str(name),
            Self::Other => f.write_str("other"),
        }
    }
}

#[must_use]
/// Partition `missing` into sections, skipping empty ones.
///
/// Buckets come out as root first, then `named` in the given order, then the overflow bucket.
/// Top-level directories are matched case-insensitively and paths within a bucket are sorted.
pub fn group_by_section(
    missing: &BTreeSet<DocPath>,
    named: &[String],
) -> Vec<(Section, Vec<DocPath>)> {
    let mut root = Vec::new();
    let mut buckets: Vec<Vec<DocPath>> = vec![Vec::new(); named.len()];
    let mut other = Vec::new();

    for path in missing {
        match path.top_level_dir() {
            None => root.push(path.clone()),
            Some(dir) => match named.iter().position(|name| name.eq_ignore_ascii_case(dir)) {
                Some(i) => buckets[i].push(path.clone()),
                None => other.push(path.clone()),
            },
        }
    }

    std::iter::once((Section::Root, root))
        .chain(
            named
                .iter()
                .zip(buckets)
                .map(|(name, paths)| (Section::Named(name.clone()), paths)),
        )
        .chain(std::iter::once((Section::Other, other)))
        .filter(|(_, paths)| !paths.is_empty())
        .map(|(section, mut paths)| {
            paths.sort();
            (section, paths)
        })
        .collect()
}

#[cfg(test)]
#[path = "tests/section.rs"]
mod tests;
