//! Tests for the config module

use super::types::*;
use super::{apply_overrides, CONFIG_FILE_NAME};
use crate::error::PagewrightError;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

fn overrides(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |k| map.get(k).cloned()
}

#[test]
fn test_config_default() {
    let config = Config::default();

    assert_eq!(config.site.pages, PathBuf::from("pages"));
    assert_eq!(config.site.output, PathBuf::from("out"));
    assert_eq!(config.site.template, PathBuf::from("template.html"));
    assert_eq!(config.site.marker, "{{ post }}");
    assert_eq!(config.site.source_extension, "md");
    assert_eq!(config.site.output_extension, "html");
    assert_eq!(config.logging.level, "warn");
    assert_eq!(config.output.color, ColorMode::Auto);
}

#[test]
fn test_config_parse_toml_partial() {
    let toml = r#"
[site]
pages = "content"
marker = "<!-- body -->"

[output]
color = "never"
"#;

    let config: Config = toml::from_str(toml).unwrap();

    assert_eq!(config.site.pages, PathBuf::from("content"));
    assert_eq!(config.site.marker, "<!-- body -->");
    // Unspecified keys keep their defaults
    assert_eq!(config.site.output, PathBuf::from("out"));
    assert_eq!(config.output.color, ColorMode::Never);
    assert!(config.output.unicode);
}

#[test]
fn test_load_with_warnings_reports_unknown_keys() {
    let dir = tempdir().unwrap();
    let path = dir.path().join(CONFIG_FILE_NAME);
    fs::write(&path, "[site]\ntemplte = \"base.html\"\n").unwrap();

    let (config, warnings) = Config::load_with_warnings(&path).unwrap();

    assert_eq!(config.site.template, PathBuf::from("template.html"));
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].key, "templte");
    assert_eq!(warnings[0].line, Some(2));
    assert_eq!(warnings[0].suggestion.as_deref(), Some("template"));
}

#[test]
fn test_load_invalid_toml_is_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join(CONFIG_FILE_NAME);
    fs::write(&path, "[site\npages = ").unwrap();

    let err = Config::load(&path).unwrap_err();
    assert!(matches!(err, PagewrightError::InvalidConfig { .. }));
}

#[test]
fn test_load_rejects_empty_marker() {
    let dir = tempdir().unwrap();
    let path = dir.path().join(CONFIG_FILE_NAME);
    fs::write(&path, "[site]\nmarker = \"\"\n").unwrap();

    let err = Config::load(&path).unwrap_err();
    assert!(err.to_string().contains("site.marker"));
}

#[test]
fn test_validate_rejects_same_extensions() {
    let mut config = Config::default();
    config.site.output_extension = "md".to_string();

    let err = config.validate(Path::new(CONFIG_FILE_NAME)).unwrap_err();
    assert!(err.to_string().contains("must differ"));
}

#[test]
fn test_load_or_default_without_file() {
    let dir = tempdir().unwrap();
    let (config, warnings) = Config::load_or_default(dir.path()).unwrap();

    assert_eq!(config.site, SiteConfig::default());
    assert!(warnings.is_empty());
}

#[test]
fn test_load_or_default_reads_file() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join(CONFIG_FILE_NAME),
        "[site]\noutput = \"public\"\n",
    )
    .unwrap();

    let (config, _) = Config::load_or_default(dir.path()).unwrap();
    assert_eq!(config.site.output, PathBuf::from("public"));
}

#[test]
fn test_overrides_apply_on_top_of_file_values() {
    let config = Config {
        site: SiteConfig {
            pages: PathBuf::from("content"),
            ..SiteConfig::default()
        },
        ..Config::default()
    };

    let config = apply_overrides(
        config,
        overrides(&[
            ("PAGEWRIGHT_PAGES", "docs"),
            ("PAGEWRIGHT_TEMPLATE", "layout.html"),
            ("PAGEWRIGHT_LOG", "DEBUG"),
        ]),
    );

    assert_eq!(config.site.pages, PathBuf::from("docs"));
    assert_eq!(config.site.template, PathBuf::from("layout.html"));
    assert_eq!(config.site.output, PathBuf::from("out"));
    assert_eq!(config.logging.level, "debug");
}

#[test]
fn test_site_config_builds_domain_rules() {
    let site = SiteConfig::default();

    assert!(site.classifier().is_source_document(Path::new("pages/a.md")));
    assert_eq!(
        site.normalizer()
            .to_output_path(Path::new("pages/A B.md"))
            .unwrap(),
        PathBuf::from("out/a-b.html")
    );
}
