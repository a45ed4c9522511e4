//! Ignore pattern handling for template discovery.
//! This module processes .stencilignore files to exclude specific paths
//! from template discovery, similar to .gitignore functionality.

use crate::error::{Error, Result};
use globset::{Glob, GlobSet, GlobSetBuilder};
use log::debug;
use std::{fs::read_to_string, path::Path};

/// Patterns that are always ignored
pub const DEFAULT_IGNORE_PATTERNS: [&str; 3] = [".git", ".git/**", "**/.DS_Store"];

/// Reads and processes a .stencilignore file into a set of glob patterns.
///
/// # Arguments
/// * `ignore_path` - Path to the .stencilignore file
///
/// # Returns
/// * `Result<GlobSet>` - Compiled glob patterns, including the defaults
///
/// # Notes
/// - A missing ignore file yields just the default patterns
/// - Each non-empty line is a glob; lines starting with `#` are comments
pub fn parse_ignore_file<P: AsRef<Path>>(ignore_path: P) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();

    for pattern in DEFAULT_IGNORE_PATTERNS {
        builder.add(Glob::new(pattern).map_err(Error::GlobSetError)?);
    }

    if let Ok(contents) = read_to_string(ignore_path.as_ref()) {
        for line in contents.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            builder.add(Glob::new(line).map_err(Error::GlobSetError)?);
        }
    } else {
        debug!(".stencilignore does not exist");
    }

    builder.build().map_err(Error::GlobSetError)
}
