//! Convert a Markdown document into a styled, standalone HTML page.
//!
//! The pipeline is linear: read the source, render it with `pulldown-cmark`,
//! embed the fragment in the fixed page template, write the page atomically.

pub mod anchors;
pub mod convert;
pub mod error;
pub mod fs;
pub mod template;
pub mod toc;

use std::path::{Path, PathBuf};

use markdown_html_config::Config;
use tracing::{debug, info};

pub use anchors::{generate_anchor, AnchorRegistry};
pub use convert::{render_fragment, Fragment};
pub use error::{ConvertError, ConvertResult};
pub use template::Document;
pub use toc::TocEntry;

/// Summary of a completed conversion.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Conversion {
    pub input: PathBuf,
    pub output: PathBuf,
    pub bytes_read: usize,
    pub bytes_written: usize,
    pub headings: usize,
    pub toc_entries: usize,
}

/// Render Markdown text into a complete HTML page without touching the filesystem.
pub fn convert_str(source: &str, config: &Config) -> String {
    let fragment = render_fragment(source, &config.extensions);
    Document::new(config.document.clone()).render(&fragment)
}

/// Convert the configured input file into the configured output file.
pub fn convert(config: &Config) -> ConvertResult<Conversion> {
    convert_file(&config.paths.input, &config.paths.output, config)
}

/// Convert `input` into a standalone page at `output`, creating or replacing it.
///
/// A missing input is reported before anything else happens, so no output is
/// created or modified in that case.
pub fn convert_file(input: &Path, output: &Path, config: &Config) -> ConvertResult<Conversion> {
    if !input.exists() {
        return Err(ConvertError::InputNotFound {
            path: input.to_path_buf(),
        });
    }

    let source = std::fs::read_to_string(input).map_err(|source| ConvertError::Read {
        path: input.to_path_buf(),
        source,
    })?;
    debug!(input = %input.display(), bytes = source.len(), "read markdown source");

    let fragment = render_fragment(&source, &config.extensions);
    debug!(
        headings = fragment.headings,
        toc_entries = fragment.toc.len(),
        fragment_bytes = fragment.html.len(),
        "rendered html fragment"
    );

    let page = Document::new(config.document.clone()).render(&fragment);
    fs::atomic_write(output, &page).map_err(|source| ConvertError::Write {
        path: output.to_path_buf(),
        source,
    })?;
    info!(output = %output.display(), bytes = page.len(), "wrote html document");

    Ok(Conversion {
        input: input.to_path_buf(),
        output: output.to_path_buf(),
        bytes_read: source.len(),
        bytes_written: page.len(),
        headings: fragment.headings,
        toc_entries: fragment.toc.len(),
    })
}
