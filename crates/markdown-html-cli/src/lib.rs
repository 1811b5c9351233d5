use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use markdown_html::{convert, Conversion, ConvertError};
use markdown_html_config::{Config, LoadOptions};
use tracing::warn;
use tracing_subscriber::{filter::EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Convert GANJES_DAO_DESIGN_DOCUMENT.md in the current directory into a
/// styled, print-ready GANJES_DAO_DESIGN_DOCUMENT.html.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Log diagnostics to stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

/// Entry point for CLI execution. Returns the desired exit code.
pub fn run() -> Result<i32> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = Config::load(LoadOptions::default())?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    execute(&config, &mut out)?;
    Ok(0)
}

/// Run one conversion with `config`, writing status messages to `out`.
///
/// Conversion failures are reported, not returned: only failures to write the
/// status messages themselves surface as errors.
pub fn execute<W: Write>(config: &Config, out: &mut W) -> Result<()> {
    let input = &config.paths.input;
    let output = &config.paths.output;

    if !input.exists() {
        writeln!(out, "❌ Markdown file not found: {}", display_name(input, config))?;
        return Ok(());
    }

    writeln!(out, "🔄 Converting Ganjes DAO Design Document to HTML...")?;
    writeln!(out, "📖 Input: {}", display_name(input, config))?;
    writeln!(out, "🌐 Output: {}", display_name(output, config))?;
    writeln!(out, "{}", "-".repeat(60))?;

    let reported = match convert(config) {
        Ok(conversion) => print_success(&conversion, config, out),
        Err(err) => {
            warn!(error = %err, "conversion failed");
            print_failure(&err, out)
        }
    };
    reported.context("failed to write status output")
}

fn print_success<W: Write>(conversion: &Conversion, config: &Config, out: &mut W) -> io::Result<()> {
    writeln!(out, "✅ HTML conversion completed successfully!")?;
    writeln!(
        out,
        "🌐 HTML saved as: {}",
        display_name(&conversion.output, config)
    )?;
    writeln!(
        out,
        "📑 Table of contents: {} entries",
        conversion.toc_entries
    )?;
    writeln!(out)?;
    writeln!(out, "📄 To create PDF:")?;
    writeln!(out, "1. Open the HTML file in your browser")?;
    writeln!(out, "2. Click the 'Print to PDF' button, or")?;
    writeln!(out, "3. Use browser's Print menu → Save as PDF")?;
    writeln!(out, "4. Choose 'Save as PDF' in print dialog")?;
    writeln!(out)?;
    writeln!(out, "🎨 The HTML includes:")?;
    writeln!(out, "  • Professional styling and layout")?;
    writeln!(out, "  • Print-optimized CSS")?;
    writeln!(out, "  • Interactive print button")?;
    writeln!(out, "  • Responsive design")?;
    writeln!(out, "  • Enhanced typography")?;
    out.flush()
}

fn print_failure<W: Write>(err: &ConvertError, out: &mut W) -> io::Result<()> {
    writeln!(out, "❌ Error during conversion: {err}")?;
    out.flush()
}

/// Paths are shown relative to the working directory, as they were given.
fn display_name(path: &Path, config: &Config) -> String {
    path.strip_prefix(&config.paths.working_directory)
        .unwrap_or(path)
        .display()
        .to_string()
}

/// Install a stderr subscriber. Silent unless `-v` was passed.
fn init_tracing(verbose: u8) {
    if verbose == 0 {
        return;
    }

    let directives = match verbose {
        1 => "warn,markdown_html=info,markdown_html_cli=info",
        2 => "warn,markdown_html=debug,markdown_html_cli=debug",
        _ => "debug,markdown_html=trace,markdown_html_cli=trace",
    };
    let filter = EnvFilter::try_new(directives).unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(true)
                .with_writer(io::stderr)
                .compact(),
        )
        .try_init();
}
