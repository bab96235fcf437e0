//! Documents and the relative paths that identify them.
//!
//! A [`DocPath`] is the identity key shared by discovery and by the links in the index document,
//! so both sides must spell it the same way: `/`-separated, relative to the documentation root,
//! and never normalised beyond that.

use std::fmt;
use std::path::{Component, Path};

#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Relative path of a document under the documentation root.
pub struct DocPath(String);

impl DocPath {
    #[must_use]
    /// Wraps a path exactly as written in an index link.
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    #[must_use]
    /// Builds the key for a file found on disk, joining its normal components with `/`.
    pub fn from_relative(path: &Path) -> Self {
        let parts: Vec<String> = path
            .components()
            .filter_map(|c| match c {
                Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
                _ => None,
            })
            .collect();
        Self(parts.join("/"))
    }

    #[must_use]
    /// The path as written.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Path segments from the root down to the file name.
    pub fn components(&self) -> impl Iterator<Item = &str> {
        self.0.split('/')
    }

    #[must_use]
    /// Number of path segments; 1 for a document directly in the root.
    pub fn depth(&self) -> usize {
        self.components().count()
    }

    #[must_use]
    /// Top-level directory, or `None` for a document directly in the root.
    pub fn top_level_dir(&self) -> Option<&str> {
        self.0.split_once('/').map(|(first, _)| first)
    }

    #[must_use]
    /// Directory containing the document, empty for the root.
    pub fn parent(&self) -> &str {
        self.0.rsplit_once('/').map_or("", |(parent, _)| parent)
    }

    #[must_use]
    /// Final path segment.
    pub fn file_name(&self) -> &str {
        self.0.rsplit_once('/').map_or(self.0.as_str(), |(_, name)| name)
    }

    #[must_use]
    /// File name without its last extension.
    pub fn file_stem(&self) -> &str {
        let name = self.file_name();
        match name.rsplit_once('.') {
            Some((stem, _)) if !stem.is_empty() => stem,
            _ => name,
        }
    }

    #[must_use]
    /// Whether this is a directory overview document such as `guide/README.md`.
    pub fn is_canonical_index(&self, canonical: &str) -> bool {
        self.file_stem().eq_ignore_ascii_case(canonical)
    }

    #[must_use]
    /// Whether the link points off-site rather than at a local document.
    pub fn is_external(&self) -> bool {
        self.0.starts_with("http://") || self.0.starts_with("https://")
    }
}

impl fmt::Display for DocPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// A document ready to be listed: its identity plus the title shown for it.
pub struct Document {
    /// Relative path used as the link target.
    pub path: DocPath,
    /// Human-readable link text.
    pub title: String,
}

#[cfg(test)]
#[path = "tests/document.rs"]
mod tests;
