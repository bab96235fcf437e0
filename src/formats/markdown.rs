//! Markdown format implementation using tree-sitter-md.
//!
//! This module provides the tree-sitter query for finding a markdown document's title, taken as
//! its first ATX-style level-one heading (`# Title`).

use crate::formats::Format;

/// Tree-sitter query for ATX-style level-one markdown headings.
pub struct MarkdownFormat;

impl Format for MarkdownFormat {
    fn language(&self) -> tree_sitter::Language {
        tree_sitter_md::LANGUAGE.into()
    }

    fn title_query(&self) -> &'static str {
        "(atx_heading (atx_h1_marker) (inline) @title)"
    }
}
