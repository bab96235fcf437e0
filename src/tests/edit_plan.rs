use super::{entries_for_section, Entry};
use crate::document::{DocPath, Document};
use crate::section::Section;

fn stem_title(path: &DocPath) -> String {
    path.file_stem().to_string()
}

fn layout(section: &Section, list: &[&str]) -> Vec<(String, usize)> {
    let paths: Vec<DocPath> = list.iter().map(|p| DocPath::new(*p)).collect();
    entries_for_section(section, &paths, "README", stem_title)
        .into_iter()
        .map(|e| (e.document.path.to_string(), e.level))
        .collect()
}

#[test]
fn test_render_entry() {
    let entry = Entry {
        document: Document {
            path: DocPath::new("guide/setup.md"),
            title: "Setup".to_string(),
        },
        level: 1,
    };

    assert_eq!(entry.render(), "  * [Setup](guide/setup.md)");
}

#[test]
fn test_overview_leads_its_directory() {
    let entries = layout(&Section::Other, &["guide/README.md", "guide/setup.md"]);

    assert_eq!(
        entries,
        vec![
            ("guide/README.md".to_string(), 0),
            ("guide/setup.md".to_string(), 1),
        ]
    );
}

#[test]
fn test_overview_moved_ahead_of_earlier_siblings() {
    let entries = layout(
        &Section::Named("sdk".to_string()),
        &["sdk/api/ADVANCED.md", "sdk/api/README.md"],
    );

    assert_eq!(
        entries,
        vec![
            ("sdk/api/README.md".to_string(), 0),
            ("sdk/api/ADVANCED.md".to_string(), 1),
        ]
    );
}

#[test]
fn test_directory_without_overview_is_indented() {
    let entries = layout(
        &Section::Named("cookbook".to_string()),
        &["cookbook/bread.md", "cookbook/soup.md"],
    );

    assert_eq!(
        entries,
        vec![
            ("cookbook/bread.md".to_string(), 1),
            ("cookbook/soup.md".to_string(), 1),
        ]
    );
}

#[test]
fn test_groups_follow_directory_order() {
    let entries = layout(
        &Section::Named("sdk".to_string()),
        &["sdk/js/README.md", "sdk/js/install.md", "sdk/python/usage.md"],
    );

    assert_eq!(
        entries,
        vec![
            ("sdk/js/README.md".to_string(), 0),
            ("sdk/js/install.md".to_string(), 1),
            ("sdk/python/usage.md".to_string(), 1),
        ]
    );
}

#[test]
fn test_nested_directory_is_its_own_group() {
    let entries = layout(
        &Section::Named("sdk".to_string()),
        &["sdk/x/README.md", "sdk/x/y/z.md"],
    );

    assert_eq!(
        entries,
        vec![
            ("sdk/x/README.md".to_string(), 0),
            ("sdk/x/y/z.md".to_string(), 1),
        ]
    );
}

#[test]
fn test_root_documents_are_top_level() {
    let entries = layout(&Section::Root, &["README.md", "faq.md"]);

    assert_eq!(
        entries,
        vec![("README.md".to_string(), 0), ("faq.md".to_string(), 0)]
    );
}

#[test]
fn test_titles_come_from_resolver() {
    let paths = vec![DocPath::new("notes.md")];
    let entries = entries_for_section(&Section::Root, &paths, "README", |_| "Notes".to_string());

    assert_eq!(entries[0].render(), "* [Notes](notes.md)");
}
