//! Library-level integration tests: path resolution plus file conversion,
//! the same sequence the binary runs.

use md2html::{
    convert_file, convert_to_file, resolve_paths, ConversionConfig, Extension, Md2HtmlError,
};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

#[test]
fn resolve_then_convert() {
    let dir = TempDir::new().unwrap();
    let src = dir.path().join("guide.md");
    std::fs::write(&src, "## Passos\n\n1. um\n2. dois\n").unwrap();

    let config = ConversionConfig::default();
    let paths = resolve_paths(&src, None::<&Path>, &config);
    assert_eq!(paths.output, dir.path().join("guide.html"));
    assert!(paths.warnings.is_empty());

    convert_to_file(&paths.input, &paths.output, &config).unwrap();
    let html = std::fs::read_to_string(&paths.output).unwrap();
    assert!(html.starts_with("<h2>Passos</h2>"), "got: {html}");
    assert!(html.contains("<ol>"));
}

#[test]
fn explicit_output_verbatim() {
    let paths = resolve_paths(
        "exemplo.md",
        Some(PathBuf::from("out/sub/exemplo.html")),
        &ConversionConfig::default(),
    );
    assert_eq!(paths.output, PathBuf::from("out/sub/exemplo.html"));
}

#[test]
fn tables_can_be_switched_off() {
    let dir = TempDir::new().unwrap();
    let src = dir.path().join("t.md");
    std::fs::write(&src, "| a |\n|---|\n| 1 |\n").unwrap();

    let config = ConversionConfig::builder()
        .extensions([Extension::FencedCodeBlocks])
        .build()
        .unwrap();
    let out = convert_file(&src, &config).unwrap();
    assert!(!out.html.contains("<table>"));
}

#[test]
fn overwrite_existing_output() {
    let dir = TempDir::new().unwrap();
    let src = dir.path().join("a.md");
    let dst = dir.path().join("a.html");
    std::fs::write(&src, "novo\n").unwrap();
    std::fs::write(&dst, "<p>antigo</p>\n").unwrap();

    for atomic in [true, false] {
        let config = ConversionConfig::builder().atomic_write(atomic).build().unwrap();
        convert_to_file(&src, &dst, &config).unwrap();
        assert_eq!(std::fs::read_to_string(&dst).unwrap(), "<p>novo</p>\n");
    }
}

#[test]
fn missing_input_is_reported() {
    let dir = TempDir::new().unwrap();
    let err = convert_file(dir.path().join("missing.md"), &ConversionConfig::default())
        .unwrap_err();
    match err {
        Md2HtmlError::InputNotFound { path } => assert!(path.ends_with("missing.md")),
        other => panic!("unexpected error: {other:?}"),
    }
}
