//! Render stage: Markdown text → HTML fragment via `pulldown-cmark`.
//!
//! The renderer returns a fragment (no doctype, `<head>` or `<body>`),
//! exactly what the parser emits.

use crate::config::Extension;
use crate::error::Md2HtmlError;
use pulldown_cmark::{html, Options, Parser};
use tracing::debug;

/// Sample used by [`Translator::probe`]; holds one construct per extension.
const PROBE_SAMPLE: &str = "```rust\nfn main() {}\n```\n\n| a | b |\n|---|---|\n| 1 | 2 |\n";

/// The Markdown translator, configured with a fixed set of extensions.
#[derive(Debug, Clone, Copy)]
pub struct Translator {
    options: Options,
}

impl Default for Translator {
    fn default() -> Self {
        Self::new(&[Extension::FencedCodeBlocks, Extension::Tables])
    }
}

impl Translator {
    pub fn new(extensions: &[Extension]) -> Self {
        let options = extensions
            .iter()
            .fold(Options::empty(), |acc, ext| acc | ext.options());
        debug!(
            "Translator extensions: [{}]",
            extensions
                .iter()
                .map(|e| e.name())
                .collect::<Vec<_>>()
                .join(", ")
        );
        Self { options }
    }

    /// Render `markdown` to an HTML fragment.
    pub fn render(&self, markdown: &str) -> String {
        let parser = Parser::new_ext(markdown, self.options);
        // HTML output is typically a bit larger than its source.
        let mut out = String::with_capacity(markdown.len() + markdown.len() / 2);
        html::push_html(&mut out, parser);
        out
    }

    /// Startup self-check: render a sample with a fenced block and a table and
    /// confirm both come back as HTML.
    pub fn probe() -> Result<Self, Md2HtmlError> {
        let translator = Self::default();
        let html = translator.render(PROBE_SAMPLE);

        if !html.contains("<pre><code") {
            return Err(Md2HtmlError::TranslatorUnavailable(
                "fenced code block was not rendered".into(),
            ));
        }
        if !html.contains("<table>") {
            return Err(Md2HtmlError::TranslatorUnavailable(
                "table was not rendered".into(),
            ));
        }

        debug!("Translator probe passed ({} bytes of HTML)", html.len());
        Ok(translator)
    }
}
