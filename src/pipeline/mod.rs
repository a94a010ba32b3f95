//! Pipeline stages for Markdown-to-HTML conversion.
//!
//! Each submodule implements exactly one step, so each is testable on its
//! own.
//!
//! ## Data Flow
//!
//! ```text
//! paths ──▶ input ──▶ render ──▶ write
//! (resolve)  (read)   (cmark)   (mkdir + persist)
//! ```
//!
//! 1. [`paths`]  — derive the output path and collect non-fatal warnings
//! 2. [`input`]  — read the source file as UTF-8
//! 3. [`render`] — translate Markdown to an HTML fragment
//! 4. [`write`]  — create the output directory and write the file

pub mod input;
pub mod paths;
pub mod render;
pub mod write;
