//! The edit plan turns a section's missing documents into index lines.
//!
//! Entries are laid out the way a `SUMMARY.md` nests them: a directory overview becomes the
//! parent entry with its siblings indented one level beneath it.

use crate::document::{DocPath, Document};
use crate::section::Section;
use std::collections::BTreeMap;

/// Spaces per nesting level.
const INDENT: &str = "  ";

#[derive(Clone, Debug, PartialEq, Eq)]
/// One list entry to be inserted into the index.
pub struct Entry {
    /// Document the entry links to.
    pub document: Document,
    /// Nesting depth, 0 for a top-level entry.
    pub level: usize,
}

impl Entry {
    #[must_use]
    /// The entry as an index line: `<indent>* [<title>](<path>)`.
    pub fn render(&self) -> String {
        format!(
            "{}* [{}]({})",
            INDENT.repeat(self.level),
            self.document.title,
            self.document.path
        )
    }
}

#[must_use]
/// Lay out entries for the sorted `paths` of one section, resolving titles with `title`.
///
/// Root documents are all top-level. Elsewhere documents are grouped by directory: a group that
/// includes its overview document (stem `canonical_index`) lists it first at level 0 with the
/// rest at level 1, and a group without one lists everything at level 1.
pub fn entries_for_section(
    section: &Section,
    paths: &[DocPath],
    canonical_index: &str,
    mut title: impl FnMut(&DocPath) -> String,
) -> Vec<Entry> {
    let mut to_entry = |path: &DocPath, level: usize| Entry {
        document: Document {
            path: path.clone(),
            title: title(path),
        },
        level,
    };

    if *section == Section::Root {
        return paths.iter().map(|path| to_entry(path, 0)).collect();
    }

    let mut groups: BTreeMap<&str, Vec<&DocPath>> = BTreeMap::new();
    for path in paths {
        groups.entry(path.parent()).or_default().push(path);
    }

    let mut entries = Vec::with_capacity(paths.len());
    for siblings in groups.into_values() {
        match siblings
            .iter()
            .position(|path| path.is_canonical_index(canonical_index))
        {
            Some(overview) => {
                entries.push(to_entry(siblings[overview], 0));
                for (i, path) in siblings.iter().enumerate() {
                    if i != overview {
                        entries.push(to_entry(*path, 1));
                    }
                }
            }
            None => entries.extend(siblings.iter().map(|path| to_entry(*path, 1))),
        }
    }
    entries
}

#[cfg(test)]
#[path = "tests/edit_plan.rs"]
mod tests;
