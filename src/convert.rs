//! Conversion entry points.
//!
//! [`convert_str`] is the pure translation step. [`convert_file`] adds the
//! read, and [`convert_to_file`] runs the whole read → render → write
//! sequence the CLI uses. Each returns on the first failure.

use crate::config::ConversionConfig;
use crate::error::Md2HtmlError;
use crate::output::{ConversionOutput, ConversionStats};
use crate::pipeline::render::Translator;
use crate::pipeline::{input, write};
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info};

/// Translate Markdown text to an HTML fragment.
///
/// # Example
/// ```rust
/// use md2html::{convert_str, ConversionConfig};
///
/// let html = convert_str("| a |\n|---|\n| 1 |\n", &ConversionConfig::default());
/// assert!(html.contains("<table>"));
/// ```
pub fn convert_str(markdown: &str, config: &ConversionConfig) -> String {
    Translator::new(&config.extensions).render(markdown)
}

/// Read a Markdown file and translate it, without writing anything.
///
/// # Errors
/// - [`Md2HtmlError::InputNotFound`] if `input` does not exist
/// - [`Md2HtmlError::InputReadFailed`] for any other read error
pub fn convert_file(
    input_path: impl AsRef<Path>,
    config: &ConversionConfig,
) -> Result<ConversionOutput, Md2HtmlError> {
    let start = Instant::now();
    let input_path = input_path.as_ref();

    let markdown = input::read_markdown(input_path)?;
    let html = convert_str(&markdown, config);
    debug!(
        "Rendered {} bytes of Markdown into {} bytes of HTML",
        markdown.len(),
        html.len()
    );

    let stats = ConversionStats {
        input_bytes: markdown.len(),
        output_bytes: html.len(),
        duration_ms: start.elapsed().as_millis() as u64,
    };
    Ok(ConversionOutput { html, stats })
}

/// Convert a Markdown file and write the HTML to `output_path`.
///
/// Missing directories in `output_path` are created first. Nothing is
/// written if the input cannot be read.
///
/// # Errors
/// Everything [`convert_file`] returns, plus
/// [`Md2HtmlError::OutputWriteFailed`] if the directory cannot be created or
/// the file cannot be written.
pub fn convert_to_file(
    input_path: impl AsRef<Path>,
    output_path: impl AsRef<Path>,
    config: &ConversionConfig,
) -> Result<ConversionStats, Md2HtmlError> {
    let start = Instant::now();
    let input_path = input_path.as_ref();
    let output_path = output_path.as_ref();
    info!(
        "Converting {} -> {}",
        input_path.display(),
        output_path.display()
    );

    let output = convert_file(input_path, config)?;

    write::ensure_parent_dir(output_path)?;
    write::write_html(output_path, &output.html, config.atomic_write)?;

    let stats = ConversionStats {
        duration_ms: start.elapsed().as_millis() as u64,
        ..output.stats
    };
    info!(
        "Conversion complete: {} bytes written in {}ms",
        stats.output_bytes, stats.duration_ms
    );
    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const SAMPLE: &str = "# Exemplo\n\n```rust\nlet x = 1;\n```\n\n| k | v |\n|---|---|\n| a | 1 |\n";

    #[test]
    fn convert_str_honours_both_extensions() {
        let html = convert_str(SAMPLE, &ConversionConfig::default());
        assert!(html.contains("<h1>Exemplo</h1>"));
        assert!(html.contains("<pre><code class=\"language-rust\">"));
        assert!(html.contains("<table>"));
        assert!(!html.contains("|---|"));
    }

    #[test]
    fn convert_file_reports_sizes() {
        let dir = TempDir::new().unwrap();
        let src = dir.path().join("doc.md");
        std::fs::write(&src, SAMPLE).unwrap();

        let out = convert_file(&src, &ConversionConfig::default()).unwrap();
        assert_eq!(out.stats.input_bytes, SAMPLE.len());
        assert_eq!(out.stats.output_bytes, out.html.len());
    }

    #[test]
    fn convert_to_file_creates_nested_output() {
        let dir = TempDir::new().unwrap();
        let src = dir.path().join("exemplo.md");
        std::fs::write(&src, SAMPLE).unwrap();
        let dst = dir.path().join("out/sub/exemplo.html");

        let stats = convert_to_file(&src, &dst, &ConversionConfig::default()).unwrap();

        let written = std::fs::read_to_string(&dst).unwrap();
        assert_eq!(written.len(), stats.output_bytes);
        assert!(written.contains("<table>"));
    }

    #[test]
    fn missing_input_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let src = dir.path().join("missing.md");
        let dst = dir.path().join("out/missing.html");

        let err = convert_to_file(&src, &dst, &ConversionConfig::default()).unwrap_err();
        assert!(matches!(err, Md2HtmlError::InputNotFound { .. }));
        assert!(!dst.exists());
        assert!(!dir.path().join("out").exists());
    }
}
