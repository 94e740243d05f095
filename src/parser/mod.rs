//! Parser module — scanner construction and batch input handling.

pub mod availability;
pub mod classify;
pub mod declaration;
pub mod extract;
pub mod nesting;

use crate::config::ScanConfig;
use crate::error::{Error, Result};
use crate::model::ApiElement;
use availability::AvailabilityInterpreter;
use declaration::DeclarationMatcher;
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Immutable, compiled scanner. Build once and share by reference.
#[derive(Debug, Clone)]
pub struct Scanner {
    pub(crate) config: ScanConfig,
    pub(crate) declarations: DeclarationMatcher,
    pub(crate) availability: AvailabilityInterpreter,
    pub(crate) blank_runs: Regex,
}

impl Scanner {
    pub fn new(config: ScanConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            declarations: DeclarationMatcher::new()?,
            availability: AvailabilityInterpreter::new(&config.platform)?,
            blank_runs: Regex::new(r"\n{3,}")?,
            config,
        })
    }

    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    /// Extract eligible elements from in-memory text.
    pub fn scan_str(&self, input: &str, source_file: &str) -> Vec<ApiElement> {
        extract::extract(self, input, source_file)
    }

    /// Read and scan one file.
    pub fn scan_file(&self, path: &Path) -> Result<Vec<ApiElement>> {
        let content = fs::read_to_string(path).map_err(|source| Error::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(self.scan_str(&content, &path.to_string_lossy()))
    }
}

/// Scan files in order. A file that cannot be read is logged and contributes
/// nothing; it never aborts the batch.
pub fn scan_files(scanner: &Scanner, files: &[PathBuf]) -> Vec<ApiElement> {
    let mut elements = Vec::new();
    for path in files {
        debug!(file = %path.display(), "scanning");
        match scanner.scan_file(path) {
            Ok(found) => {
                info!(file = %path.display(), count = found.len(), "found eligible symbols");
                elements.extend(found);
            }
            Err(e) => {
                warn!(file = %path.display(), error = %e, "skipping unreadable file");
            }
        }
    }
    info!(files = files.len(), elements = elements.len(), "scan complete");
    elements
}

/// Scan every `*.<extension>` file directly inside `dir`, in sorted order.
pub fn scan_dir(scanner: &Scanner, dir: &Path) -> Result<Vec<ApiElement>> {
    let files = list_dir(dir, scanner.config().extension())?;
    Ok(scan_files(scanner, &files))
}

/// Non-recursive, lexicographically sorted listing of `*.<extension>` in `dir`.
pub fn list_dir(dir: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(Error::MissingDir(dir.to_path_buf()));
    }
    // Escape the directory so brackets in real paths are not read as
    // character classes.
    let pattern = format!(
        "{}/*.{}",
        glob::Pattern::escape(&dir.to_string_lossy()),
        extension
    );
    let mut files: Vec<PathBuf> = glob::glob(&pattern)?
        .filter_map(|r| r.ok())
        .filter(|p| p.is_file())
        .collect();
    files.sort();
    Ok(files)
}

/// Expand CLI inputs into a sorted, de-duplicated file list.
///
/// Each input may be a file (taken as-is), a directory (its `*.<extension>`
/// files, non-recursive), or a glob pattern.
pub fn expand_inputs(inputs: &[String], extension: &str) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for input in inputs {
        let path = Path::new(input);
        if path.is_file() {
            files.push(path.to_path_buf());
            continue;
        }
        if path.is_dir() {
            files.extend(list_dir(path, extension)?);
            continue;
        }
        let matches: Vec<_> = glob::glob(input)?
            .filter_map(|r| r.ok())
            .filter(|p| p.is_file())
            .collect();
        if matches.is_empty() {
            warn!(pattern = %input, "no files matched");
        }
        files.extend(matches);
    }
    // Sort for deterministic output
    files.sort();
    files.dedup();
    Ok(files)
}
