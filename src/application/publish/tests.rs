//! Tests for the publish use case

use std::path::{Path, PathBuf};

use super::{PublishOptions, Publisher};
use crate::domain::ports::FileSystem;
use crate::domain::Normalizer;
use crate::error::PagewrightError;
use crate::infrastructure::fs::MockFs;
use crate::infrastructure::{LocalFs, MarkdownRenderer};

fn options() -> PublishOptions {
    PublishOptions {
        template: PathBuf::from("template.html"),
        marker: "{{ post }}".to_string(),
        normalizer: Normalizer::new("out", "html"),
    }
}

fn publisher(fs: MockFs) -> Publisher<MockFs, MarkdownRenderer> {
    Publisher::new(fs, MarkdownRenderer::new(), options())
}

// === publish ===

#[test]
fn test_publish_composes_rendered_document_into_template() {
    let fs = MockFs::new()
        .with_file("template.html", "<html>{{ post }}</html>")
        .with_file("pages/hi.md", "# Hi");

    let published = publisher(fs.clone()).publish(Path::new("pages/hi.md")).unwrap();

    assert_eq!(published.output, PathBuf::from("out/hi.html"));
    assert_eq!(
        fs.contents("out/hi.html").unwrap(),
        b"<html><h1 id=\"hi\">Hi</h1>\n</html>".to_vec()
    );
    assert_eq!(published.bytes, fs.contents("out/hi.html").unwrap().len());
}

#[test]
fn test_publish_flattens_and_normalizes_name() {
    let fs = MockFs::new()
        .with_file("template.html", "{{ post }}")
        .with_file("pages/deep/nest/My Cool File.md", "text");

    let published = publisher(fs.clone())
        .publish(Path::new("pages/deep/nest/My Cool File.md"))
        .unwrap();

    assert_eq!(published.output, PathBuf::from("out/my-cool-file.html"));
    assert!(fs.exists(Path::new("out/my-cool-file.html")));
}

#[test]
fn test_publish_missing_marker_writes_nothing() {
    let fs = MockFs::new()
        .with_file("template.html", "<html></html>")
        .with_file("pages/hi.md", "# Hi");

    let err = publisher(fs.clone())
        .publish(Path::new("pages/hi.md"))
        .unwrap_err();

    assert!(matches!(err, PagewrightError::MissingMarker { .. }));
    assert!(fs.writes.lock().unwrap().is_empty());
}

#[test]
fn test_publish_missing_template_is_read_error() {
    let fs = MockFs::new().with_file("pages/hi.md", "# Hi");

    let err = publisher(fs).publish(Path::new("pages/hi.md")).unwrap_err();

    match err {
        PagewrightError::Read { path, .. } => assert_eq!(path, PathBuf::from("template.html")),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_publish_missing_source_is_read_error() {
    let fs = MockFs::new().with_file("template.html", "{{ post }}");

    let err = publisher(fs).publish(Path::new("pages/gone.md")).unwrap_err();

    assert_eq!(err.path(), Some(Path::new("pages/gone.md")));
}

#[test]
fn test_publish_reads_template_fresh_each_time() {
    let fs = MockFs::new()
        .with_file("template.html", "<old>{{ post }}</old>")
        .with_file("pages/a.md", "a");
    let publisher = publisher(fs.clone());

    publisher.publish(Path::new("pages/a.md")).unwrap();
    fs.write(Path::new("template.html"), b"<new>{{ post }}</new>")
        .unwrap();
    publisher.publish(Path::new("pages/a.md")).unwrap();

    let page = String::from_utf8(fs.contents("out/a.html").unwrap()).unwrap();
    assert!(page.starts_with("<new>"), "got: {page}");
}

#[test]
fn test_publish_twice_is_byte_identical() {
    let fs = MockFs::new()
        .with_file("template.html", "<main>{{ post }}</main>")
        .with_file("pages/post.md", "# Title\n\n`a`\n`b`\n");
    let publisher = publisher(fs.clone());

    publisher.publish(Path::new("pages/post.md")).unwrap();
    let first = fs.contents("out/post.html").unwrap();
    publisher.publish(Path::new("pages/post.md")).unwrap();

    assert_eq!(first, fs.contents("out/post.html").unwrap());
}

#[test]
fn test_publish_with_repeated_marker_replaces_first_only() {
    let fs = MockFs::new()
        .with_file("template.html", "{{ post }}|{{ post }}")
        .with_file("pages/x.md", "x");

    publisher(fs.clone()).publish(Path::new("pages/x.md")).unwrap();

    assert_eq!(
        fs.contents("out/x.html").unwrap(),
        b"<p>x</p>\n|{{ post }}".to_vec()
    );
}

// === clean_output_tree ===

#[test]
fn test_clean_deletes_only_output_extension() {
    let fs = MockFs::new()
        .with_file("out/a.html", "a")
        .with_file("out/b.html", "b")
        .with_file("out/c.png", "c")
        .with_file("pages/d.html", "keep");

    let result = publisher(fs.clone()).clean_output_tree().unwrap();

    assert_eq!(
        result.deleted,
        vec![PathBuf::from("out/a.html"), PathBuf::from("out/b.html")]
    );
    assert_eq!(
        fs.paths(),
        vec![PathBuf::from("out/c.png"), PathBuf::from("pages/d.html")]
    );
}

#[test]
fn test_leading_dot_document_publishes_and_cleans() {
    let fs = MockFs::new()
        .with_file("template.html", "{{ post }}")
        .with_file("pages/.md", "dot");

    let publisher = publisher(fs.clone());
    let published = publisher.publish(Path::new("pages/.md")).unwrap();
    assert_eq!(published.output, PathBuf::from("out/.html"));
    assert!(fs.exists(Path::new("out/.html")));

    let result = publisher.clean_output_tree().unwrap();
    assert_eq!(result.deleted, vec![PathBuf::from("out/.html")]);
    assert!(!fs.exists(Path::new("out/.html")));
}

#[test]
fn test_clean_empty_output_tree() {
    let result = publisher(MockFs::new()).clean_output_tree().unwrap();
    assert!(result.is_empty());
    assert_eq!(result.count(), 0);
}

#[test]
fn test_clean_on_disk_recurses_and_tolerates_missing_dir() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("out");
    let options = PublishOptions {
        template: dir.path().join("template.html"),
        marker: "{{ post }}".to_string(),
        normalizer: Normalizer::new(&out, "html"),
    };
    let publisher = Publisher::new(LocalFs::new(), MarkdownRenderer::new(), options);

    assert!(publisher.clean_output_tree().unwrap().is_empty());

    std::fs::create_dir_all(out.join("old")).unwrap();
    std::fs::write(out.join("index.html"), "x").unwrap();
    std::fs::write(out.join("old/stale.html"), "x").unwrap();
    std::fs::write(out.join("style.css"), "x").unwrap();

    let result = publisher.clean_output_tree().unwrap();

    assert_eq!(result.count(), 2);
    assert!(!out.join("index.html").exists());
    assert!(!out.join("old/stale.html").exists());
    assert!(out.join("style.css").exists());
}

#[test]
fn test_options_from_site_config() {
    let site = crate::config::SiteConfig::default();
    let options = PublishOptions::from_site(&site);
    assert_eq!(options.template, PathBuf::from("template.html"));
    assert_eq!(options.marker, "{{ post }}");
    assert_eq!(options.normalizer.output_dir(), Path::new("out"));
}
