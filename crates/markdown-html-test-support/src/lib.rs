//! Shared test harness utilities for markdown-html crates.

use std::fs;
use std::path::{Path, PathBuf};

use markdown_html_config::{Config, LoadOptions, INPUT_FILE_NAME};
use tempfile::TempDir;

/// Document exercising headings, a table, fenced code and a link.
pub const SAMPLE_DOCUMENT: &str = r#"# Ganjes DAO Design

## Table of Contents

- [Overview](#overview)
- [Voting](#voting)

## Overview

The DAO lets investors vote on proposals. See [the docs](https://example.com/docs).

| Role | Permission |
|------|------------|
| Investor | Vote |
| Admin | Execute |

## Voting

```solidity
function vote(uint256 proposalId, bool support) external;
```

### Status

- Quorum checks implemented
- Delegation planned
"#;

/// Source whose fenced block is never closed.
pub const UNTERMINATED_FENCE: &str = "# Broken\n\n```rust\nfn main() {\n    println!(\"never closed\");\n";

/// Temporary directory standing in for the folder the converter runs in.
pub struct Workspace {
    dir: TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        Workspace {
            dir: TempDir::new().expect("create temp workspace"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Settings rooted at this workspace.
    pub fn config(&self) -> Config {
        Config::load(LoadOptions::default().with_working_dir(self.path()))
            .expect("load config for temp workspace")
    }

    /// Write the fixed-name Markdown input and return its path.
    pub fn write_input(&self, contents: &str) -> PathBuf {
        self.write_file(INPUT_FILE_NAME, contents)
    }

    pub fn write_file(&self, relative: &str, contents: &str) -> PathBuf {
        let path = self.path().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create parent directory");
        }
        fs::write(&path, contents).expect("write file");
        path
    }

    /// File names currently present, sorted.
    pub fn entries(&self) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(self.path())
            .expect("read workspace")
            .filter_map(Result::ok)
            .map(|entry| entry.file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }
}

impl Default for Workspace {
    fn default() -> Self {
        Self::new()
    }
}
