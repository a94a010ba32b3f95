//! Configuration types for Markdown-to-HTML conversion.
//!
//! All conversion behaviour is controlled through [`ConversionConfig`], built
//! via its [`ConversionConfigBuilder`]. The defaults reproduce the command-line
//! tool exactly: fenced code blocks and tables enabled, `.md` inputs expected,
//! `.html` outputs derived, atomic writes.

use crate::error::Md2HtmlError;
use pulldown_cmark::Options;

/// Configuration for a Markdown-to-HTML conversion.
///
/// # Example
/// ```rust
/// use md2html::{ConversionConfig, Extension};
///
/// let config = ConversionConfig::builder()
///     .extensions([Extension::Tables])
///     .atomic_write(false)
///     .build()
///     .unwrap();
/// assert_eq!(config.extensions, vec![Extension::Tables]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionConfig {
    /// Translation extensions requested from the renderer.
    /// Default: `[FencedCodeBlocks, Tables]`.
    pub extensions: Vec<Extension>,

    /// File extension (without the dot) used when deriving the output path.
    /// Default: `"html"`.
    pub output_extension: String,

    /// File extension (without the dot) an input is expected to carry.
    /// Inputs without it only produce a warning. Default: `"md"`.
    pub markup_extension: String,

    /// Write through a temp file in the target directory and rename it into
    /// place, so readers never observe a half-written file. Default: true.
    pub atomic_write: bool,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            extensions: vec![Extension::FencedCodeBlocks, Extension::Tables],
            output_extension: "html".to_string(),
            markup_extension: "md".to_string(),
            atomic_write: true,
        }
    }
}

impl ConversionConfig {
    /// Create a new builder for `ConversionConfig`.
    pub fn builder() -> ConversionConfigBuilder {
        ConversionConfigBuilder {
            config: Self::default(),
        }
    }
}

/// Builder for [`ConversionConfig`].
#[derive(Debug)]
pub struct ConversionConfigBuilder {
    config: ConversionConfig,
}

impl ConversionConfigBuilder {
    pub fn extensions(mut self, extensions: impl IntoIterator<Item = Extension>) -> Self {
        let mut list: Vec<Extension> = Vec::new();
        for ext in extensions {
            if !list.contains(&ext) {
                list.push(ext);
            }
        }
        self.config.extensions = list;
        self
    }

    pub fn output_extension(mut self, ext: impl Into<String>) -> Self {
        self.config.output_extension = ext.into();
        self
    }

    pub fn markup_extension(mut self, ext: impl Into<String>) -> Self {
        self.config.markup_extension = ext.into();
        self
    }

    pub fn atomic_write(mut self, v: bool) -> Self {
        self.config.atomic_write = v;
        self
    }

    /// Build the configuration, validating constraints.
    pub fn build(self) -> Result<ConversionConfig, Md2HtmlError> {
        let c = &self.config;
        validate_file_extension("output_extension", &c.output_extension)?;
        validate_file_extension("markup_extension", &c.markup_extension)?;
        Ok(self.config)
    }
}

fn validate_file_extension(field: &str, ext: &str) -> Result<(), Md2HtmlError> {
    if ext.is_empty() {
        return Err(Md2HtmlError::InvalidConfig(format!(
            "{field} must not be empty"
        )));
    }
    if ext.starts_with('.') {
        return Err(Md2HtmlError::InvalidConfig(format!(
            "{field} is given without the leading dot, got '{ext}'"
        )));
    }
    if ext.contains('/') || ext.contains('\\') {
        return Err(Md2HtmlError::InvalidConfig(format!(
            "{field} must not contain a path separator, got '{ext}'"
        )));
    }
    Ok(())
}

// ── Enums ────────────────────────────────────────────────────────────────

/// A named optional behaviour of the Markdown translator.
///
/// Not to be confused with a file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Extension {
    /// ```` ``` ```` / `~~~` fenced code blocks, with an optional info string
    /// rendered as a `language-*` class.
    FencedCodeBlocks,
    /// GitHub-flavoured pipe tables.
    Tables,
}

impl Extension {
    /// Stable kebab-case name, as used in logs.
    pub fn name(self) -> &'static str {
        match self {
            Extension::FencedCodeBlocks => "fenced-code-blocks",
            Extension::Tables => "tables",
        }
    }

    /// Parser options this extension switches on.
    ///
    /// Fenced code blocks are core CommonMark and need no flag.
    pub(crate) fn options(self) -> Options {
        match self {
            Extension::FencedCodeBlocks => Options::empty(),
            Extension::Tables => Options::ENABLE_TABLES,
        }
    }
}
