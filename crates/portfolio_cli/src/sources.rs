//! File-system enumeration of record sources.
//!
//! # Invariants
//! - Only regular `*.md` files directly inside the directory are read.
//! - Sources are returned sorted by file name so loads are reproducible.

use crate::error::CliError;
use portfolio_core::RecordSource;
use std::fs;
use std::path::{Path, PathBuf};

const RECORD_EXTENSION: &str = "md";

/// Reads every markdown record in `dir`.
pub fn load_record_sources(dir: &Path) -> Result<Vec<RecordSource>, CliError> {
    let entries = fs::read_dir(dir).map_err(|source| io_error(dir, source))?;

    let mut paths: Vec<PathBuf> = Vec::new();
    for entry in entries {
        let path = entry.map_err(|source| io_error(dir, source))?.path();
        let is_record = path.is_file()
            && path
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case(RECORD_EXTENSION));
        if is_record {
            paths.push(path);
        }
    }
    paths.sort();

    paths
        .into_iter()
        .map(|path| {
            let raw_text = read_text(&path)?;
            Ok(RecordSource::new(path, raw_text))
        })
        .collect()
}

/// Reads one UTF-8 text file.
pub fn read_text(path: &Path) -> Result<String, CliError> {
    fs::read_to_string(path).map_err(|source| io_error(path, source))
}

fn io_error(path: &Path, source: std::io::Error) -> CliError {
    CliError::Io {
        path: path.to_path_buf(),
        source,
    }
}
