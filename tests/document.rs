//! Integration tests for loading and rendering chart documents

use std::fs;
use std::path::Path;

use pretty_assertions::assert_eq;
use tempfile::TempDir;

use svg_charts::{
    render_document, render_document_with_config, ChartDocument, ChartKind, DocumentError,
    SvgConfig,
};

fn samples_dir() -> &'static Path {
    Path::new(concat!(env!("CARGO_MANIFEST_DIR"), "/samples"))
}

#[test]
fn test_sample_files_load() {
    for kind in ChartKind::ALL {
        let path = samples_dir().join(format!("{}.toml", kind.name()));
        let doc = ChartDocument::from_file(&path).expect("sample file should load");
        assert_eq!(doc.kind(), kind);
    }
}

#[test]
fn test_sample_bar_document() {
    let doc = ChartDocument::from_file(&samples_dir().join("bar.toml")).unwrap();
    let svg = doc.render(&SvgConfig::default()).unwrap();
    assert!(svg.contains(r#"width="800""#));
    assert!(svg.contains("Sample Bar Chart"));
    assert_eq!(svg.matches(r#"class="bar""#).count(), 6);
}

#[test]
fn test_from_file_roundtrip_through_tempdir() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("chart.toml");
    fs::write(
        &path,
        r#"
kind = "line"

[options]
title = "From disk"
show_dots = false

[[data]]
x = 0
y = 1

[[data]]
x = 1
y = 4
"#,
    )
    .unwrap();

    let doc = ChartDocument::from_file(&path).unwrap();
    let svg = doc.render(&SvgConfig::default()).unwrap();
    assert!(svg.contains("From disk"));
    assert_eq!(svg.matches(r#"class="data-line""#).count(), 1);
    assert!(!svg.contains("<circle"));
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = TempDir::new().unwrap();
    let err = ChartDocument::from_file(&dir.path().join("missing.toml")).unwrap_err();
    assert!(matches!(err, DocumentError::Io(_)));
}

#[test]
fn test_file_output_matches_string_render() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("pie.svg");
    let config = SvgConfig::file_export();
    let svg = render_document_with_config(ChartKind::Pie.sample(), &config).unwrap();
    fs::write(&out, &svg).unwrap();

    let written = fs::read_to_string(&out).unwrap();
    assert!(written.starts_with(r#"<?xml version="1.0" encoding="UTF-8"?>"#));
    assert_eq!(written, svg);
}

#[test]
fn test_options_override_defaults() {
    let svg = render_document(
        r##"
kind = "bar"

[options]
width = 300
height = 200
colors = ["#123456"]
class_name = "revenue"
show_grid = false

[[data]]
label = "x"
value = 1
"##,
    )
    .unwrap();
    assert!(svg.contains(r#"viewBox="0 0 300 200""#));
    assert!(svg.contains(r#"class="revenue""#));
    assert!(svg.contains(r##"fill="#123456""##));
    assert!(!svg.contains("stroke-dasharray"));
}

#[test]
fn test_wrong_option_type_is_parse_error() {
    let result = render_document(
        r#"
kind = "pie"

[options]
show_legend = "yes"
"#,
    );
    assert!(matches!(result, Err(DocumentError::Parse(_))));
}

#[test]
fn test_mismatched_data_message() {
    let err = render_document(
        r#"
kind = "line"
data = [{ label = "a", value = 1 }]
"#,
    )
    .unwrap_err();
    assert_eq!(err.to_string(), "line chart data must be x/y pairs");
}
