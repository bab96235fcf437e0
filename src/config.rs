//! Configuration to acknowledge documentation layout preferences as well as set defaults.
//!
//! Specifically, we try to find a tocsync.toml in the documentation root, and if present we load
//! settings from there. Every field falls back to the layout of a gitbook tree, so an absent file
//! gives the stock behaviour.

use crate::error::{Error, Result};
use facet::Facet;
use std::fs;
use std::io;
use std::path::Path;

/// Name of the optional configuration file looked up in the documentation root.
pub const CONFIG_FILE: &str = "tocsync.toml";

#[derive(Facet, Clone, Debug)]
/// Layout preferences loaded from tocsync.toml or falling back to defaults.
pub struct Config {
    #[facet(default = "SUMMARY.md".to_string())]
    /// Filename of the index document within the root.
    pub index_file: String,
    #[facet(default = "md".to_string())]
    /// Extension (without the dot) of the documents to index.
    pub file_extension: String,
    #[facet(default = "README".to_string())]
    /// File stem of a directory's overview document.
    pub canonical_index: String,
    #[facet(default = vec![".gitbook".to_string()])]
    /// File names never treated as documents.
    pub skip_files: Vec<String>,
    #[facet(default = vec![
        ".git".to_string(),
        "node_modules".to_string(),
        ".github".to_string(),
        ".gitbook".to_string(),
    ])]
    /// Directory names whose contents are never scanned.
    pub skip_dirs: Vec<String>,
    #[facet(default = vec![
        "introduction".to_string(),
        "cookbook".to_string(),
        "sdk".to_string(),
        "backend".to_string(),
        "frontend".to_string(),
    ])]
    /// Top-level directories recognised as named sections, in processing order.
    pub sections: Vec<String>,
    #[facet(default = "introduction".to_string())]
    /// Section whose location receives documents sitting directly in the root.
    pub root_anchor: String,
    #[facet(default = false)]
    /// Let a `## Section` heading own every entry up to the next heading, rather than ending the
    /// section at the first top-level entry after it.
    pub heading_spans_section: bool,
    #[facet(default = "Table of contents".to_string())]
    /// Heading written into a freshly synthesised index.
    pub default_heading: String,
}

impl Config {
    /// Load configuration from `tocsync.toml` in `root` if present.
    ///
    /// The file is optional: when absent the defaults apply, and when unreadable or malformed a
    /// warning is logged and the defaults apply.
    ///
    /// # Errors
    ///
    /// Returns an error only if the built-in defaults cannot be parsed.
    pub fn load(root: &Path) -> Result<Self> {
        let path = root.join(CONFIG_FILE);
        match fs::read_to_string(&path) {
            Ok(contents) => Self::parse_or_defaults(&path, &contents),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Self::defaults(),
            Err(e) => {
                tracing::warn!("Ignoring unreadable config '{}': {}", path.display(), e);
                Self::defaults()
            }
        }
    }

    /// Load configuration from a file the user named explicitly.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, or if the built-in defaults cannot be parsed.
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|source| Error::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse_or_defaults(path, &contents)
    }

    fn parse_or_defaults(path: &Path, contents: &str) -> Result<Self> {
        match facet_toml::from_str::<Self>(contents) {
            Ok(config) => Ok(config),
            Err(e) => {
                tracing::warn!("Ignoring malformed config '{}': {}", path.display(), e);
                Self::defaults()
            }
        }
    }

    /// The built-in configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the defaults cannot be parsed.
    pub fn defaults() -> Result<Self> {
        facet_toml::from_str::<Self>("").map_err(|e| Error::Config(e.to_string()))
    }

    #[must_use]
    /// Whether a file name is excluded from discovery.
    pub fn is_skipped_file(&self, name: &str) -> bool {
        name == self.index_file || self.skip_files.iter().any(|s| s == name)
    }

    #[must_use]
    /// Whether a directory name is pruned from discovery.
    pub fn is_skipped_dir(&self, name: &str) -> bool {
        self.skip_dirs.iter().any(|s| s == name)
    }

    #[must_use]
    /// Contents used when the index document does not exist yet.
    pub fn default_index(&self) -> String {
        format!(
            "# {}\n\n* [Introduction]({}.{})\n",
            self.default_heading, self.canonical_index, self.file_extension
        )
    }
}

#[cfg(test)]
#[path = "tests/config.rs"]
mod tests;
