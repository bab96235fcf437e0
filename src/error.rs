//! Error types for the index update pass.
//!
//! Only failures that make the whole run meaningless surface here. A single unreadable document
//! is logged and routed around instead.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Fatal failures of an update run.
#[derive(Error, Debug)]
pub enum Error {
    /// The documentation root does not exist or is not a directory.
    #[error("documentation root '{path}' does not exist or is not a directory")]
    RootNotFound {
        /// Root that was requested.
        path: PathBuf,
    },

    /// Traversal of the documentation root failed.
    #[error("failed to walk documentation root '{path}': {source}")]
    Walk {
        /// Root being walked.
        path: PathBuf,
        /// Underlying traversal error.
        #[source]
        source: walkdir::Error,
    },

    /// The index document exists but could not be read.
    #[error("failed to read index '{path}': {source}")]
    IndexRead {
        /// Index document path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The updated index could not be written back.
    #[error("failed to write index '{path}': {source}")]
    IndexWrite {
        /// Index document path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A configuration file named on the command line could not be read.
    #[error("failed to read config '{path}': {source}")]
    ConfigRead {
        /// Configuration file path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The built-in configuration could not be parsed.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// The link pattern built from the configured extension did not compile.
    #[error("invalid link pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// The tree-sitter grammar or heading query could not be loaded.
    #[error("failed to set up heading parser: {0}")]
    Parser(String),
}
