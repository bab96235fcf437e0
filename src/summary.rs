//! The index document as an editable sequence of lines.
//!
//! Content is split on `\n` and re-joined on render, so every line we do not insert comes back
//! byte-for-byte (carriage returns and the presence or absence of a final newline included).
//! All edits are insertions; nothing here deletes or reorders an existing line.

use crate::config::Config;
use crate::document::DocPath;
use crate::error::{Error, Result};
use regex::Regex;
use std::collections::BTreeSet;
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// The index document held in memory while entries are added.
pub struct IndexDocument {
    lines: Vec<String>,
    link: Regex,
    heading_spans_section: bool,
}

impl IndexDocument {
    /// Split `content` into lines, recognising links to `.{extension}` documents.
    ///
    /// The title may itself contain brackets (`[Arrays [beta]](arr.md)`) and the target may
    /// contain spaces (`(release notes.md)`), since entries are written with both verbatim.
    ///
    /// # Errors
    ///
    /// Returns an error if the link pattern cannot be built from `extension`.
    pub fn parse(content: &str, extension: &str) -> Result<Self> {
        let link = Regex::new(&format!(
            r"\[.+?\]\(([^()]+?\.{})\)",
            regex::escape(extension)
        ))?;
        Ok(Self {
            lines: content.split('\n').map(str::to_string).collect(),
            link,
            heading_spans_section: false,
        })
    }

    #[must_use]
    /// Let a `## Section` anchor run to the next heading instead of stopping at the first
    /// top-level entry beneath it.
    pub fn with_heading_spans_section(mut self, on: bool) -> Self {
        self.heading_spans_section = on;
        self
    }

    #[must_use]
    /// Current lines, without their `\n` terminators.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    #[must_use]
    /// Every local document path the index already links to.
    ///
    /// Links to `http://` or `https://` targets are external and never counted.
    pub fn linked_paths(&self) -> BTreeSet<DocPath> {
        self.lines
            .iter()
            .flat_map(|line| self.link_targets(line))
            .collect()
    }

    fn link_targets<'a>(&'a self, line: &'a str) -> impl Iterator<Item = DocPath> + 'a {
        self.link
            .captures_iter(line)
            .filter_map(|caps| caps.get(1))
            .map(|m| DocPath::new(m.as_str()))
            .filter(|path| !path.is_external())
    }

    #[must_use]
    /// Line index at which entries for `section` should be inserted.
    ///
    /// The first line naming the section (a `## Section` heading, a top-level entry titled after
    /// it, or a link into its directory) anchors the search, which then runs forward to the end of
    /// that section: the next level-1/2 heading or top-level entry, skipping blank lines. Entries
    /// go directly after the last non-blank line before that. With no section, or no
    /// anchor, they go after the last non-blank line of the document.
    pub fn insertion_point(&self, section: Option<&str>) -> usize {
        let Some(name) = section else {
            return self.end_of_content(0, self.lines.len());
        };
        let Some(start) = self
            .lines
            .iter()
            .position(|line| self.names_section(line, name))
        else {
            tracing::debug!("No anchor for section '{}', appending", name);
            return self.end_of_content(0, self.lines.len());
        };

        let on_heading =
            self.heading_spans_section && heading_level(&self.lines[start]).is_some();
        let stop = self
            .lines
            .iter()
            .enumerate()
            .skip(start + 1)
            .filter(|(_, line)| !is_blank(line))
            .find(|(_, line)| {
                heading_level(line).is_some_and(|level| level <= 2)
                    || (!on_heading && is_top_level_item(line))
            })
            .map_or(self.lines.len(), |(j, _)| j);

        let at = self.end_of_content(start, stop);
        tracing::debug!(
            "Section '{}' anchored at line {}, inserting at line {}",
            name,
            start + 1,
            at + 1
        );
        at
    }

    fn names_section(&self, line: &str, name: &str) -> bool {
        let wanted = normalise(name);
        if heading_level(line) == Some(2) && normalise(heading_text(line)) == wanted {
            return true;
        }
        if top_level_title(line).is_some_and(|title| normalise(title) == wanted) {
            return true;
        }
        self.link_targets(line).any(|path| {
            let segments: Vec<&str> = path.components().collect();
            segments[..segments.len() - 1]
                .iter()
                .any(|segment| segment.eq_ignore_ascii_case(name))
        })
    }

    /// One past the last non-blank line in `start..stop`, or `start` if they are all blank.
    fn end_of_content(&self, start: usize, stop: usize) -> usize {
        self.lines[start..stop]
            .iter()
            .rposition(|line| !is_blank(line))
            .map_or(start, |offset| start + offset + 1)
    }

    /// Insert `new_lines` before line `at`, keeping every existing line in order.
    pub fn insert(&mut self, at: usize, new_lines: impl IntoIterator<Item = String>) {
        let at = at.min(self.lines.len());
        self.lines.splice(at..at, new_lines);
    }

    #[must_use]
    /// The document text.
    pub fn render(&self) -> String {
        self.lines.join("\n")
    }
}

fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

fn heading_level(line: &str) -> Option<usize> {
    let level = line.chars().take_while(|&c| c == '#').count();
    if level == 0 || level > 6 {
        return None;
    }
    match line[level..].chars().next() {
        None | Some(' ' | '\t' | '\r') => Some(level),
        Some(_) => None,
    }
}

fn heading_text(line: &str) -> &str {
    line.trim_start_matches('#').trim()
}

fn is_top_level_item(line: &str) -> bool {
    ["* ", "- ", "+ "]
        .iter()
        .any(|marker| line.starts_with(marker))
}

/// Link text of a top-level entry, which may itself contain brackets.
fn top_level_title(line: &str) -> Option<&str> {
    if !is_top_level_item(line) {
        return None;
    }
    let rest = line[2..].trim_start().strip_prefix('[')?;
    rest.split_once("](")
        .or_else(|| rest.split_once(']'))
        .map(|(title, _)| title)
}

fn normalise(name: &str) -> String {
    name.replace(['-', '_'], " ").trim().to_lowercase()
}

/// Read the index document, or synthesise a minimal one if it does not exist.
///
/// Returns the content and whether the file was already present.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read.
pub fn read_index(path: &Path, config: &Config) -> Result<(String, bool)> {
    match fs::read_to_string(path) {
        Ok(content) => Ok((content, true)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            tracing::info!(
                "No index at '{}', starting from a default one",
                path.display()
            );
            Ok((config.default_index(), false))
        }
        Err(source) => Err(Error::IndexRead {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Replace the index document with `content` in a single rename.
///
/// An existing file keeps its permissions.
///
/// # Errors
///
/// Returns an error if the temporary file cannot be written or moved into place.
pub fn write_index(path: &Path, content: &str) -> Result<()> {
    let wrap = |source: io::Error| Error::IndexWrite {
        path: path.to_path_buf(),
        source,
    };

    let Ok(metadata) = fs::metadata(path) else {
        return fs::write(path, content).map_err(wrap);
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut file = NamedTempFile::new_in(dir).map_err(wrap)?;
    file.write_all(content.as_bytes()).map_err(wrap)?;
    file.as_file()
        .set_permissions(metadata.permissions())
        .map_err(wrap)?;
    file.persist(path).map_err(|e| wrap(e.error))?;
    Ok(())
}

#[cfg(test)]
#[path = "tests/summary.rs"]
mod tests;
