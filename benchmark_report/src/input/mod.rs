//!
//! Benchmark results input.
//!

pub mod error;

use std::path::Path;
use std::path::PathBuf;

use crate::model::collection::Collection;

use self::error::Error as InputError;

/// The results file looked up when a directory is given.
pub const DEFAULT_FILE_NAME: &str = "results.json";

///
/// Resolves a directory to the results file inside it.
///
pub fn resolve(path: &Path) -> PathBuf {
    if path.is_dir() {
        path.join(DEFAULT_FILE_NAME)
    } else {
        path.to_path_buf()
    }
}

impl TryFrom<&Path> for Collection {
    type Error = InputError;

    fn try_from(path: &Path) -> Result<Self, Self::Error> {
        let path = resolve(path);
        let text = std::fs::read_to_string(path.as_path()).map_err(|error| InputError::Reading {
            error,
            path: path.clone(),
        })?;
        if text.trim().is_empty() {
            return Err(InputError::EmptyFile { path });
        }
        let collection: Self =
            serde_json::from_str(text.as_str()).map_err(|error| InputError::Parsing {
                error,
                path: path.clone(),
            })?;
        if collection.runs.is_empty() {
            return Err(InputError::NoSuiteRuns { path });
        }
        Ok(collection)
    }
}
