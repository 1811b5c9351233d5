//! Run settings for the markdown-html converter.
//!
//! Nothing here is read from disk or the environment: the input and output
//! locations, the Markdown extension set and the document metadata are fixed.
//! The loader only resolves the fixed relative paths against a working
//! directory so callers (and tests) can run the converter in any folder.

use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Markdown source converted on every run, relative to the working directory.
pub const INPUT_FILE_NAME: &str = "GANJES_DAO_DESIGN_DOCUMENT.md";

/// Rendered document written on every run, relative to the working directory.
pub const OUTPUT_FILE_NAME: &str = "GANJES_DAO_DESIGN_DOCUMENT.html";

/// Complete settings for a conversion run.
#[derive(Clone, Debug)]
pub struct Config {
    pub paths: PathSettings,
    pub extensions: Extensions,
    pub document: DocumentMeta,
}

/// Absolute input/output locations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PathSettings {
    pub working_directory: PathBuf,
    pub input: PathBuf,
    pub output: PathBuf,
}

/// Markdown extensions applied on top of CommonMark.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Extensions {
    pub fenced_code_blocks: bool,
    pub tables: bool,
    pub header_ids: bool,
    pub toc: bool,
}

impl Extensions {
    /// Every supported extension switched on.
    pub const fn all() -> Self {
        Extensions {
            fenced_code_blocks: true,
            tables: true,
            header_ids: true,
            toc: true,
        }
    }

    /// Plain CommonMark.
    pub const fn none() -> Self {
        Extensions {
            fenced_code_blocks: false,
            tables: false,
            header_ids: false,
            toc: false,
        }
    }
}

impl Default for Extensions {
    fn default() -> Self {
        Extensions::all()
    }
}

/// Static text stamped into the page head, header block and footer block.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DocumentMeta {
    pub page_title: String,
    pub title: String,
    pub subtitle: String,
    pub version: String,
    pub last_updated: String,
    pub authors: String,
}

impl Default for DocumentMeta {
    fn default() -> Self {
        DocumentMeta {
            page_title: "Ganjes DAO - Comprehensive Design Document".to_owned(),
            title: "Ganjes DAO".to_owned(),
            subtitle: "Comprehensive Design Document".to_owned(),
            version: "1.0".to_owned(),
            last_updated: "August 7, 2025".to_owned(),
            authors: "Ganjes Development Team".to_owned(),
        }
    }
}

/// Loader options, typically supplied by the CLI layer.
#[derive(Clone, Debug, Default)]
pub struct LoadOptions {
    pub working_dir: Option<PathBuf>,
}

impl LoadOptions {
    pub fn with_working_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(path.into());
        self
    }
}

/// Errors surfaced while resolving settings.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to resolve working directory {attempted}: {source}")]
    WorkingDirectory {
        attempted: PathBuf,
        source: io::Error,
    },
}

impl Config {
    /// Resolves the fixed settings against the requested (or current) working directory.
    pub fn load(options: LoadOptions) -> Result<Self, ConfigError> {
        let working_dir = resolve_working_dir(options.working_dir)?;
        Ok(Config::for_working_dir(&working_dir))
    }

    /// Builds settings rooted at `working_dir` without touching the filesystem.
    pub fn for_working_dir(working_dir: &Path) -> Self {
        Config {
            paths: PathSettings {
                working_directory: working_dir.to_path_buf(),
                input: working_dir.join(INPUT_FILE_NAME),
                output: working_dir.join(OUTPUT_FILE_NAME),
            },
            extensions: Extensions::all(),
            document: DocumentMeta::default(),
        }
    }
}

fn resolve_working_dir(override_dir: Option<PathBuf>) -> Result<PathBuf, ConfigError> {
    match override_dir {
        Some(path) => fs::canonicalize(&path).map_err(|source| ConfigError::WorkingDirectory {
            attempted: path,
            source,
        }),
        None => env::current_dir().map_err(|source| ConfigError::WorkingDirectory {
            attempted: PathBuf::from("."),
            source,
        }),
    }
}
