//! # md2html
//!
//! Convert Markdown files to HTML fragments.
//!
//! The Markdown itself is parsed and rendered by
//! [`pulldown-cmark`](https://docs.rs/pulldown-cmark) with two extensions
//! switched on: fenced code blocks and GitHub-style tables. This crate owns
//! everything around that call: deriving the output path, reading and writing
//! files, creating the output directory, and reporting errors.
//!
//! ## Pipeline Overview
//!
//! ```text
//! input.md
//!  │
//!  ├─ 1. Paths   derive output path (input.md → input.html), warn on non-.md input
//!  ├─ 2. Input   read the file as UTF-8
//!  ├─ 3. Render  pulldown-cmark with fenced code blocks + tables
//!  └─ 4. Write   create missing directories, atomic write
//! ```
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use md2html::{convert_to_file, resolve_paths, ConversionConfig};
//! use std::path::Path;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ConversionConfig::default();
//!     let paths = resolve_paths("exemplo.md", None::<&Path>, &config);
//!     let stats = convert_to_file(&paths.input, &paths.output, &config)?;
//!     eprintln!("{} bytes written to {}", stats.output_bytes, paths.output.display());
//!     Ok(())
//! }
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `cli`   | on      | Enables the `md2html` binary (clap + anyhow + serde_json + tracing-subscriber) |
//!
//! Disable `cli` when using only the library:
//! ```toml
//! md2html = { version = "0.1", default-features = false }
//! ```

// ── Modules ──────────────────────────────────────────────────────────────

pub mod config;
pub mod convert;
pub mod error;
pub mod output;
pub mod pipeline;

// ── Re-exports ───────────────────────────────────────────────────────────

pub use config::{ConversionConfig, ConversionConfigBuilder, Extension};
pub use convert::{convert_file, convert_str, convert_to_file};
pub use error::Md2HtmlError;
pub use output::{ConversionOutput, ConversionStats};
pub use pipeline::paths::{resolve_paths, PathWarning, ResolvedPaths};
pub use pipeline::render::Translator;
