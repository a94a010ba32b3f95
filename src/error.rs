//! Error types for the md2html library.
//!
//! Every failure is fatal for the single document being converted, so one
//! enum is enough: [`Md2HtmlError`] is returned from the `convert*` functions
//! and from the translator probe. Non-fatal diagnostics (an input without the
//! `.md` extension) are not errors; they are reported as
//! [`crate::pipeline::paths::PathWarning`] values instead.

use std::path::PathBuf;
use thiserror::Error;

/// All fatal errors returned by the md2html library.
#[derive(Debug, Error)]
pub enum Md2HtmlError {
    // ── Startup ───────────────────────────────────────────────────────────
    /// The Markdown translator failed its startup self-check.
    #[error(
        "Markdown translator is unavailable: {0}\n\
The built-in renderer did not produce tables and fenced code blocks.\n\
Rebuild md2html with the default pulldown-cmark features enabled."
    )]
    TranslatorUnavailable(String),

    // ── Input errors ──────────────────────────────────────────────────────
    /// Input file was not found at the given path.
    #[error("Input file not found: '{}'", .path.display())]
    InputNotFound { path: PathBuf },

    /// The input exists but could not be read as UTF-8 text.
    #[error("Failed to read input file '{}': {source}", .path.display())]
    InputReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // ── Output errors ─────────────────────────────────────────────────────
    /// Could not create the output directory or write the HTML file.
    #[error("Failed to write output file '{}': {source}", .path.display())]
    OutputWriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // ── Config errors ─────────────────────────────────────────────────────
    /// Builder validation failed.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
