//! One update pass over a documentation tree.
//!
//! Read the index, discover documents, take the difference, and insert entries for whatever is
//! missing section by section. Nothing touches the disk here apart from reads; writing the result
//! back is left to the caller so that dry runs and checks share the same path.

use crate::config::Config;
use crate::discovery::find_documents;
use crate::document::DocPath;
use crate::edit_plan::{entries_for_section, Entry};
use crate::error::Result;
use crate::formats::markdown::MarkdownFormat;
use crate::section::group_by_section;
use crate::summary::{read_index, IndexDocument};
use crate::title::TitleExtractor;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

#[derive(Debug)]
/// Outcome of an update pass, not yet written to disk.
pub struct Update {
    /// Location of the index document.
    pub index_path: PathBuf,
    /// Index content after insertion; identical to the input when nothing was added.
    pub content: String,
    /// Documents given a new entry, in sorted order.
    pub added: Vec<DocPath>,
    /// Whether the index existed before the run.
    pub index_existed: bool,
}

impl Update {
    #[must_use]
    /// Whether the index needs writing back.
    pub fn is_changed(&self) -> bool {
        !self.added.is_empty()
    }
}

/// Compute the updated index for the documentation tree at `root`.
///
/// # Errors
///
/// Returns an error if the root cannot be walked, the index exists but cannot be read, or the
/// heading parser cannot be set up.
pub fn update_summary(root: &Path, config: &Config) -> Result<Update> {
    let index_path = root.join(&config.index_file);
    let (content, index_existed) = read_index(&index_path, config)?;
    let documents = find_documents(root, config)?;
    let (content, added) = add_missing_files(&content, &documents, root, config)?;

    Ok(Update {
        index_path,
        content,
        added,
        index_existed,
    })
}

#[must_use]
/// Documents on disk that the index does not link to yet.
pub fn missing_files(
    discovered: &BTreeSet<DocPath>,
    existing: &BTreeSet<DocPath>,
) -> BTreeSet<DocPath> {
    discovered.difference(existing).cloned().collect()
}

/// Insert entries for every document in `documents` that `content` does not already link to.
///
/// Returns the new content with the paths that were added. When nothing is missing the content
/// is returned unchanged.
///
/// # Errors
///
/// Returns an error if the link pattern or the heading parser cannot be set up.
pub fn add_missing_files(
    content: &str,
    documents: &BTreeSet<DocPath>,
    root: &Path,
    config: &Config,
) -> Result<(String, Vec<DocPath>)> {
    let mut index = IndexDocument::parse(content, &config.file_extension)?
        .with_heading_spans_section(config.heading_spans_section);
    let missing = missing_files(documents, &index.linked_paths());
    if missing.is_empty() {
        return Ok((content.to_string(), Vec::new()));
    }

    let mut titles = TitleExtractor::new(&MarkdownFormat, &config.canonical_index)?;
    for (section, paths) in group_by_section(&missing, &config.sections) {
        let entries = entries_for_section(&section, &paths, &config.canonical_index, |path| {
            titles.title(&root.join(path.as_str()))
        });
        let at = index.insertion_point(section.anchor(&config.root_anchor));
        tracing::debug!(
            "Adding {} entries to section '{}' at line {}",
            entries.len(),
            section,
            at + 1
        );
        index.insert(at, entries.iter().map(Entry::render));
    }

    Ok((index.render(), missing.into_iter().collect()))
}

#[cfg(test)]
#[path = "tests/updater.rs"]
mod tests;
