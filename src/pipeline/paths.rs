//! Argument resolution: turn the user-supplied input and optional output
//! paths into the pair of paths the conversion works on.
//!
//! Only the output path is derived here. The input is not checked for
//! existence; a missing file surfaces later as
//! [`crate::error::Md2HtmlError::InputNotFound`] when it is read.

use crate::config::ConversionConfig;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// A non-fatal diagnostic raised while resolving paths.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathWarning {
    /// The input path does not end with the expected markup extension.
    #[error("input file '{}' does not have a .{expected} extension", .path.display())]
    NotMarkdownExtension { path: PathBuf, expected: String },
}

/// Input and output paths after resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPaths {
    pub input: PathBuf,
    pub output: PathBuf,
    pub warnings: Vec<PathWarning>,
}

/// Resolve the input path and the (possibly absent) output path.
///
/// An explicit `output` is used verbatim. Otherwise the output is the input
/// with its final extension replaced by `config.output_extension`
/// (`notes.txt` → `notes.html`, `archive.tar.gz` → `archive.tar.html`,
/// `readme` → `readme.html`).
pub fn resolve_paths(
    input: impl AsRef<Path>,
    output: Option<impl AsRef<Path>>,
    config: &ConversionConfig,
) -> ResolvedPaths {
    let input = input.as_ref().to_path_buf();
    let mut warnings = Vec::new();

    if !has_extension_ignore_case(&input, &config.markup_extension) {
        debug!(
            "Input {} lacks .{} extension",
            input.display(),
            config.markup_extension
        );
        warnings.push(PathWarning::NotMarkdownExtension {
            path: input.clone(),
            expected: config.markup_extension.clone(),
        });
    }

    let output = match output {
        Some(p) => p.as_ref().to_path_buf(),
        None => derive_output_path(&input, &config.output_extension),
    };
    debug!("Resolved output path: {}", output.display());

    ResolvedPaths {
        input,
        output,
        warnings,
    }
}

/// Replace the final extension of `input` with `ext`, or append it when the
/// path has none.
///
/// Paths without a file-name component (`""`, `".."`) get `.ext` appended to
/// the raw text so the result is never empty. A trailing separator is
/// dropped (`docs/a.md/` → `docs/a.html`) and an all-dots name keeps its
/// dots as the stem (`...` → `...html`).
pub fn derive_output_path(input: &Path, ext: &str) -> PathBuf {
    if input.file_name().is_some() {
        return input.with_extension(ext);
    }
    let mut raw = OsString::from(input.as_os_str());
    raw.push(".");
    raw.push(ext);
    PathBuf::from(raw)
}

/// Case-insensitive textual suffix check (`README.MD` counts as `.md`).
fn has_extension_ignore_case(path: &Path, ext: &str) -> bool {
    let text = path.to_string_lossy().to_lowercase();
    text.ends_with(&format!(".{}", ext.to_lowercase()))
}
