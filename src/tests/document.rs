use super::DocPath;
use std::path::Path;

#[test]
fn test_from_relative_joins_with_slashes() {
    let path = DocPath::from_relative(Path::new("guide").join("setup.md").as_path());
    assert_eq!(path.as_str(), "guide/setup.md");

    let dotted = DocPath::from_relative(Path::new("./notes.md"));
    assert_eq!(dotted.as_str(), "notes.md");
}

#[test]
fn test_path_parts() {
    let path = DocPath::new("sdk/python/usage.md");

    assert_eq!(path.depth(), 3);
    assert_eq!(path.top_level_dir(), Some("sdk"));
    assert_eq!(path.parent(), "sdk/python");
    assert_eq!(path.file_name(), "usage.md");
    assert_eq!(path.file_stem(), "usage");
}

#[test]
fn test_root_document_has_no_directory() {
    let path = DocPath::new("README.md");

    assert_eq!(path.depth(), 1);
    assert_eq!(path.top_level_dir(), None);
    assert_eq!(path.parent(), "");
}

#[test]
fn test_canonical_index_ignores_case() {
    assert!(DocPath::new("guide/README.md").is_canonical_index("README"));
    assert!(DocPath::new("guide/readme.md").is_canonical_index("README"));
    assert!(!DocPath::new("guide/README-old.md").is_canonical_index("README"));
}

#[test]
fn test_external_links() {
    assert!(DocPath::new("https://example.com/x.md").is_external());
    assert!(DocPath::new("http://example.com/x.md").is_external());
    assert!(!DocPath::new("docs/https.md").is_external());
}
