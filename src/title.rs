//! Derive the link text for a document.
//!
//! The first level-one heading wins. Documents without one, or that cannot be read, are named
//! after their file (or, for a directory overview, after the directory).

use crate::error::{Error, Result};
use crate::formats::Format;
use std::fs;
use std::path::Path;
use streaming_iterator::StreamingIterator;
use tree_sitter::{Parser, Query, QueryCursor};

/// Reusable parser and heading query for pulling titles out of documents.
pub struct TitleExtractor {
    parser: Parser,
    query: Query,
    canonical_index: String,
}

impl TitleExtractor {
    /// Prepare a parser for `format`, treating files named `canonical_index` as directory
    /// overviews when falling back to a filename title.
    ///
    /// # Errors
    ///
    /// Returns an error if the grammar or the title query cannot be loaded.
    pub fn new(format: &impl Format, canonical_index: &str) -> Result<Self> {
        let language = format.language();
        let mut parser = Parser::new();
        parser
            .set_language(&language)
            .map_err(|e| Error::Parser(e.to_string()))?;
        let query =
            Query::new(&language, format.title_query()).map_err(|e| Error::Parser(e.to_string()))?;
        Ok(Self {
            parser,
            query,
            canonical_index: canonical_index.to_string(),
        })
    }

    /// Title for the document at `path`, never failing.
    ///
    /// Read errors (permissions, invalid UTF-8) are logged and answered with the filename title.
    pub fn title(&mut self, path: &Path) -> String {
        match fs::read_to_string(path) {
            Ok(content) => self
                .heading(&content)
                .unwrap_or_else(|| title_from_filename(path, &self.canonical_index)),
            Err(e) => {
                tracing::warn!("Could not read {}: {}", path.display(), e);
                title_from_filename(path, &self.canonical_index)
            }
        }
    }

    /// Text of the first level-one heading in `source`, trimmed.
    pub fn heading(&mut self, source: &str) -> Option<String> {
        let tree = self.parser.parse(source, None)?;
        let mut cursor = QueryCursor::new();
        let mut matches = cursor.matches(&self.query, tree.root_node(), source.as_bytes());

        let mut first: Option<(usize, String)> = None;
        while let Some(m) = matches.next() {
            for capture in m.captures {
                let Ok(text) = capture.node.utf8_text(source.as_bytes()) else {
                    continue;
                };
                // Closing sequence, as in `# Title #`
                let text = text.trim().trim_end_matches('#').trim();
                if text.is_empty() {
                    continue;
                }
                let start = capture.node.start_byte();
                if first.as_ref().is_none_or(|(pos, _)| start < *pos) {
                    first = Some((start, text.to_string()));
                }
            }
        }
        first.map(|(_, text)| text)
    }
}

#[must_use]
/// Title derived from a document's file name.
///
/// A directory overview (`guide/README.md`) is named after its directory. Hyphens and underscores
/// become spaces and the result is title-cased.
pub fn title_from_filename(path: &Path, canonical_index: &str) -> String {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    let name = if stem.eq_ignore_ascii_case(canonical_index) {
        path.parent()
            .and_then(Path::file_name)
            .map_or(stem, |dir| dir.to_string_lossy().into_owned())
    } else {
        stem
    };

    title_case(&name.replace(['-', '_'], " "))
}

#[must_use]
/// Upper-case the first letter of every run of letters and lower-case the rest.
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_word = false;
    for c in text.chars() {
        if c.is_alphabetic() {
            if in_word {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(c);
            in_word = false;
        }
    }
    out
}

#[cfg(test)]
#[path = "tests/title.rs"]
mod tests;
