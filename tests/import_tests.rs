//! Import module tests

use hugo_wxr::import::{
    ContentReader, FrontMatterParser, ImportError, LineFrontMatterParser, discover_content_files,
    split_document,
};
use hugo_wxr::export::WXRExporter;
use hugo_wxr::models::{FrontMatter, FrontMatterValue};
use std::fs;
use std::path::Path;
use tempfile::tempdir;

mod front_matter_tests {
    use super::*;

    #[test]
    fn test_hugo_style_front_matter() {
        let block = r#"title: "Moving to WordPress"
date: 2023-11-05 08:15:00 +0100
draft: false
tags: [hugo, wordpress]
categories:
  - Blogging
  - Meta
description: A short note: why we moved
"#;
        let fm = LineFrontMatterParser::new().parse(block).unwrap();

        assert_eq!(fm.text("title"), Some("Moving to WordPress"));
        assert_eq!(fm.text("date"), Some("2023-11-05 08:15:00 +0100"));
        assert_eq!(fm.text("tags"), Some("[hugo, wordpress]"));
        assert_eq!(fm.list("categories"), vec!["Blogging", "Meta"]);
        assert_eq!(fm.text("description"), Some("A short note: why we moved"));
    }

    #[test]
    fn test_bracketed_title_is_not_a_list() {
        let fm = LineFrontMatterParser::new()
            .parse("title: [WIP]\ndate: 2024-01-02 10:00:00 +0000")
            .unwrap();
        let item = WXRExporter::default()
            .build_item(&fm, "", Path::new("wip.md"))
            .unwrap();
        assert_eq!(item.title, "[WIP]");
    }

    #[test]
    fn test_last_duplicate_key_wins() {
        let fm = LineFrontMatterParser::new()
            .parse("title: One\ntitle: Two")
            .unwrap();
        assert_eq!(fm.text("title"), Some("Two"));
    }

    #[test]
    fn test_custom_parser_is_pluggable() {
        struct EverythingIsTitle;
        impl FrontMatterParser for EverythingIsTitle {
            fn parse(&self, block: &str) -> Result<FrontMatter, ImportError> {
                Ok(FrontMatter::new().with("title", block.trim()))
            }
        }

        let reader = ContentReader::with_parts(
            EverythingIsTitle,
            hugo_wxr::import::CommonMarkRenderer::new(),
        );
        let doc = reader
            .parse(Path::new("x.md"), "---\nraw header\n---\nbody")
            .unwrap();
        assert_eq!(
            doc.front_matter.get("title"),
            Some(&FrontMatterValue::Text("raw header".to_string()))
        );
    }
}

mod document_tests {
    use super::*;

    #[test]
    fn test_body_keeps_horizontal_rules() {
        let text = "---\ntitle: T\n---\nintro\n\n---\n\noutro\n";
        let (_, body) = split_document(text).unwrap();
        assert!(body.contains("---"));

        let doc = ContentReader::new().parse(Path::new("t.md"), text).unwrap();
        assert!(doc.html.contains("<hr />"));
        assert!(doc.html.contains("<p>outro</p>"));
    }

    #[test]
    fn test_byte_order_mark_is_ignored() {
        let text = "\u{feff}---\ntitle: X\ndate: 2024-01-02 10:00:00 +0000\n---\n# Hi\n\n---\n\nmore\n";
        let doc = ContentReader::new().parse(Path::new("bom.md"), text).unwrap();

        assert_eq!(doc.front_matter.text("title"), Some("X"));
        assert_eq!(doc.front_matter.text("date"), Some("2024-01-02 10:00:00 +0000"));
        assert!(doc.html.contains("<h1>Hi</h1>"));
        assert!(doc.html.contains("<p>more</p>"));
    }

    #[test]
    fn test_single_delimiter_is_malformed() {
        let result = ContentReader::new().parse(Path::new("t.md"), "---\ntitle: T\n");
        match result {
            Err(ImportError::MalformedContent(reason)) => assert!(reason.contains("---")),
            other => panic!("expected malformed content, got {:?}", other),
        }
    }

    #[test]
    fn test_read_missing_file() {
        let dir = tempdir().unwrap();
        let result = ContentReader::new().read(&dir.path().join("gone.md"));
        assert!(matches!(result, Err(ImportError::IoError(_))));
    }
}

mod discovery_tests {
    use super::*;

    #[test]
    fn test_discover_nested_sections() {
        let dir = tempdir().unwrap();
        for section in ["posts", "posts/2023", "pages"] {
            fs::create_dir_all(dir.path().join(section)).unwrap();
        }
        fs::write(dir.path().join("_index.md"), "").unwrap();
        fs::write(dir.path().join("posts/first.md"), "").unwrap();
        fs::write(dir.path().join("posts/2023/second.md"), "").unwrap();
        fs::write(dir.path().join("pages/about.md"), "").unwrap();
        fs::write(dir.path().join("pages/about.html"), "").unwrap();

        let files = discover_content_files(dir.path()).unwrap();
        assert_eq!(files.len(), 4);
        assert!(files.iter().all(|p| p.extension().unwrap() == "md"));
        assert!(files.iter().all(|p| p.starts_with(dir.path())));
    }

    #[test]
    fn test_discover_missing_root_error_message() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("nope");
        let err = discover_content_files(&missing).unwrap_err();
        assert!(err.to_string().contains("nope"));
    }
}
