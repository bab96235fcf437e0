//! tocsync: keep a documentation table of contents in step with the files on disk.
//!
//! The index document (`SUMMARY.md` by default) is a nested markdown list of links.
//! An update pass finds every document under the root that the index does not link to yet and
//! inserts an entry for it into the matching section, leaving every existing line where it was.
#![allow(clippy::multiple_crate_versions)]

pub mod config;
pub mod discovery;
pub mod document;
pub mod edit_plan;
pub mod error;
pub mod formats;
pub mod section;
pub mod summary;
pub mod title;
pub mod updater;

pub use error::{Error, Result};
pub use updater::{update_summary, Update};
