//! Format trait and implementations for different document types.
//!
//! This module defines the `Format` trait which abstracts over the kinds of document a
//! documentation tree can hold by providing the grammar and the tree-sitter query that
//! locates a document's title heading.

pub mod markdown;

/// Grammar and title query for one document format.
pub trait Format {
    /// Tree-sitter grammar used to parse documents of this format.
    fn language(&self) -> tree_sitter::Language;
    /// Query whose `@title` capture yields top-level heading text.
    fn title_query(&self) -> &str;
}
