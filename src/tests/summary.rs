use super::{read_index, write_index, IndexDocument};
use crate::config::Config;
use crate::document::DocPath;
use std::fs;
use tempfile::TempDir;

const BOOK: &str = "# Table of contents

* [Introduction](README.md)

## Cookbook

* [Recipes](cookbook/README.md)
  * [Bread](cookbook/bread.md)

## SDK

* [SDK](sdk/README.md)
";

fn parse(content: &str) -> IndexDocument {
    IndexDocument::parse(content, "md").unwrap()
}

#[test]
fn test_linked_paths_skip_external_and_other_files() {
    let doc = parse(
        "* [A](a.md)\n  * [B](dir/b.md) and [C](dir/c.md)\n* [Ext](https://example.com/x.md)\n* [Img](pic.png)\n",
    );

    let paths: Vec<String> = doc.linked_paths().iter().map(ToString::to_string).collect();

    assert_eq!(paths, vec!["a.md", "dir/b.md", "dir/c.md"]);
}

#[test]
fn test_linked_paths_with_brackets_spaces_and_parentheses() {
    let doc = parse(
        "* [Arrays [beta]](arr.md)\n* [Release Notes](release notes.md)\n* [Setup (advanced)](guide/setup.md)\n[a](x.png) and [b](y.md)\n",
    );

    let paths: Vec<String> = doc.linked_paths().iter().map(ToString::to_string).collect();

    assert_eq!(
        paths,
        vec!["arr.md", "guide/setup.md", "release notes.md", "y.md"]
    );
}

#[test]
fn test_bracketed_title_names_section() {
    let doc = parse("* [Intro [draft]](intro.md)\n* [Cookbook [wip]](recipes.md)\n* [Z](z.md)\n");

    assert_eq!(doc.insertion_point(Some("cookbook [wip]")), 2);
}

#[test]
fn test_render_is_lossless() {
    for content in [BOOK, "no newline at end", "crlf\r\n* [A](a.md)\r\n", ""] {
        assert_eq!(parse(content).render(), content);
    }
}

#[test]
fn test_heading_anchor_stops_at_first_top_level_entry() {
    let doc = parse(BOOK);

    // Directly under "## Cookbook", since "* [Recipes]" ends the scan
    assert_eq!(doc.insertion_point(Some("cookbook")), 5);
    assert_eq!(doc.lines()[4], "## Cookbook");
}

#[test]
fn test_heading_spanning_section_runs_to_next_heading() {
    let doc = parse(BOOK).with_heading_spans_section(true);

    // After "  * [Bread](cookbook/bread.md)", before the blank line and "## SDK"
    assert_eq!(doc.insertion_point(Some("cookbook")), 8);
    assert_eq!(doc.lines()[7], "  * [Bread](cookbook/bread.md)");
}

#[test]
fn test_entry_anchor_stops_at_next_heading() {
    let doc = parse(BOOK);

    assert_eq!(doc.insertion_point(Some("introduction")), 3);
}

#[test]
fn test_entry_anchor_stops_at_next_top_level_entry() {
    let doc = parse("* [Introduction](README.md)\n* [Other](other.md)\n");

    assert_eq!(doc.insertion_point(Some("introduction")), 1);
}

#[test]
fn test_link_into_directory_anchors_section() {
    let doc = parse(
        "# Contents\n\n* [Start](README.md)\n* [Reference](ref/index.md)\n  * [CLI](guides/cli.md)\n  * [API](guides/api.md)\n* [Last](last.md)\n",
    );

    assert_eq!(doc.insertion_point(Some("guides")), 6);
}

#[test]
fn test_file_name_is_not_a_directory_match() {
    let doc = parse("* [Notes](notes/sdk.md)\n## Other\n\n");

    assert_eq!(
        doc.insertion_point(Some("sdk")),
        2,
        "Appends after the last non-blank line"
    );
}

#[test]
fn test_no_anchor_appends_after_content() {
    let doc = parse("# Table of contents\n\n* [Introduction](README.md)\n");

    assert_eq!(doc.insertion_point(None), 3);
    assert_eq!(doc.insertion_point(Some("frontend")), 3);
    assert_eq!(parse("").insertion_point(None), 0);
}

#[test]
fn test_insert_keeps_existing_lines_in_order() {
    let mut doc = parse(BOOK);
    let before: Vec<String> = doc.lines().to_vec();

    let at = doc.insertion_point(Some("cookbook"));
    doc.insert(at, vec!["  * [Soup](cookbook/soup.md)".to_string()]);

    let after = doc.lines();
    assert_eq!(after.len(), before.len() + 1);
    assert_eq!(after[at], "  * [Soup](cookbook/soup.md)");
    let kept: Vec<&String> = after
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != at)
        .map(|(_, l)| l)
        .collect();
    assert_eq!(kept, before.iter().collect::<Vec<_>>());
    assert!(doc.linked_paths().contains(&DocPath::new("cookbook/soup.md")));
}

#[test]
fn test_read_missing_index_synthesises_default() {
    let dir = TempDir::new().unwrap();
    let cfg = Config::defaults().unwrap();

    let (content, existed) = read_index(&dir.path().join("SUMMARY.md"), &cfg).unwrap();

    assert!(!existed);
    assert_eq!(content, "# Table of contents\n\n* [Introduction](README.md)\n");
}

#[test]
fn test_write_index_creates_and_replaces() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("SUMMARY.md");

    write_index(&path, "first\n").unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), "first\n");

    write_index(&path, "second\n").unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), "second\n");

    let (content, existed) = read_index(&path, &Config::defaults().unwrap()).unwrap();
    assert!(existed);
    assert_eq!(content, "second\n");
}
