//! CLI binary for md2html.
//!
//! A thin shim over the library crate that maps the two positional
//! arguments to `resolve_paths` + `convert_to_file` and prints the result.
//! Every failure is returned to `main`, which exits with status 1.

use anyhow::{Context, Result};
use clap::Parser;
use md2html::{convert_to_file, resolve_paths, ConversionConfig, ConversionStats, Translator};
use serde::Serialize;
use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

// ── ANSI colour helpers (no extra deps) ──────────────────────────────────────

fn green(s: &str) -> String {
    format!("\x1b[32m{s}\x1b[0m")
}
fn yellow(s: &str) -> String {
    format!("\x1b[33m{s}\x1b[0m")
}

fn paint(s: &str, colour: fn(&str) -> String, enabled: bool) -> String {
    if enabled {
        colour(s)
    } else {
        s.to_string()
    }
}

const AFTER_HELP: &str = r#"EXAMPLES:
  # Writes exemplo.html next to the input
  md2html exemplo.md

  # Explicit output; missing directories are created
  md2html exemplo.md output/exemplo.html

  # Machine-readable report
  md2html --json notes.md

TRANSLATION:
  CommonMark via pulldown-cmark, with fenced code blocks and tables.
  The output is an HTML fragment (no <html>/<head>/<body> wrapper).

ENVIRONMENT VARIABLES:
  RUST_LOG          Override the log filter (e.g. RUST_LOG=md2html=debug)
  MD2HTML_VERBOSE   Same as --verbose
  MD2HTML_QUIET     Same as --quiet
  MD2HTML_JSON      Same as --json
"#;

/// Convert a Markdown file to HTML.
#[derive(Parser, Debug)]
#[command(
    name = "md2html",
    version,
    about = "Convert a Markdown (.md) file to HTML",
    arg_required_else_help = true,
    color = clap::ColorChoice::Auto,
    after_long_help = AFTER_HELP
)]
struct Cli {
    /// Input Markdown file (.md).
    #[arg(value_name = "ENTRADA")]
    entrada: PathBuf,

    /// Output HTML file (.html). Defaults to ENTRADA with a .html extension.
    #[arg(value_name = "SAIDA")]
    saida: Option<PathBuf>,

    /// Enable DEBUG-level tracing logs.
    #[arg(short, long, env = "MD2HTML_VERBOSE")]
    verbose: bool,

    /// Suppress all output except errors.
    #[arg(short, long, env = "MD2HTML_QUIET", conflicts_with = "verbose")]
    quiet: bool,

    /// Print a JSON report instead of the summary lines.
    #[arg(long, env = "MD2HTML_JSON")]
    json: bool,
}

#[derive(Serialize)]
struct Report<'a> {
    input: &'a Path,
    output: &'a Path,
    stats: ConversionStats,
}

fn main() -> Result<()> {
    // ── Translator self-check ────────────────────────────────────────────
    // Runs before argument parsing so a broken build fails the same way
    // regardless of what was passed on the command line.
    Translator::probe().context("Startup check failed")?;

    let cli = Cli::parse();

    // ── Logging setup ────────────────────────────────────────────────────
    let filter = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        "warn"
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(io::stderr)
        .init();

    // ── Resolve paths ────────────────────────────────────────────────────
    let config = ConversionConfig::default();
    let paths = resolve_paths(&cli.entrada, cli.saida.as_ref(), &config);

    if !cli.quiet {
        let colour = io::stderr().is_terminal();
        for warning in &paths.warnings {
            eprintln!("{} {}", paint("Warning:", yellow, colour), warning);
        }
    }

    // ── Run conversion ───────────────────────────────────────────────────
    let stats = convert_to_file(&paths.input, &paths.output, &config)
        .context("Conversion failed")?;

    if cli.json {
        let report = Report {
            input: &paths.input,
            output: &paths.output,
            stats,
        };
        let json = serde_json::to_string_pretty(&report).context("Failed to serialise report")?;
        println!("{json}");
    } else if !cli.quiet {
        let colour = io::stdout().is_terminal();
        println!("{}", paint("File converted successfully!", green, colour));
        println!("Input:  {}", paths.input.display());
        println!("Output: {}", paths.output.display());
    }

    Ok(())
}
