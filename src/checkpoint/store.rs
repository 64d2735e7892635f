//! JSON checkpoint file
//!
//! The checkpoint is a pretty-printed JSON array of `VesselRecord`. It is read
//! once at start and rewritten wholesale on every flush: the new content goes
//! to a sibling temporary file which is then renamed over the old one, so a
//! crash mid-write leaves the previous checkpoint intact.

use crate::model::{VesselListing, VesselRecord};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur reading or writing checkpoint files
#[derive(Debug, Error)]
pub enum CheckpointError {
    #[error("Failed to read {}: {}", .path.display(), .source)]
    Read { path: PathBuf, source: io::Error },

    #[error(
        "{} exists but is not a valid JSON array of records ({}); refusing to overwrite it",
        .path.display(),
        .source
    )]
    Corrupt {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Failed to write {}: {}", .path.display(), .source)]
    Write { path: PathBuf, source: io::Error },

    #[error("Failed to serialize {}: {}", .path.display(), .source)]
    Serialize {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Result type for checkpoint operations
pub type CheckpointResult<T> = Result<T, CheckpointError>;

/// Handle on the checkpoint file of scraped vessels
#[derive(Debug, Clone)]
pub struct CheckpointStore {
    path: PathBuf,
}

impl CheckpointStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads every record in the checkpoint
    ///
    /// A missing file is an empty store. A file that exists but does not parse
    /// is an error, so the next flush cannot clobber it.
    pub fn load(&self) -> CheckpointResult<Vec<VesselRecord>> {
        match read_json_array(&self.path)? {
            Some(records) => {
                tracing::debug!(
                    "Loaded {} records from {}",
                    records.len(),
                    self.path.display()
                );
                Ok(records)
            }
            None => {
                tracing::info!(
                    "No checkpoint at {}, starting fresh",
                    self.path.display()
                );
                Ok(Vec::new())
            }
        }
    }

    /// Replaces the checkpoint with the given records
    pub fn save(&self, records: &[VesselRecord]) -> CheckpointResult<()> {
        write_json_atomic(&self.path, records)
    }
}

/// Reads an exported vessel listing; None when the file does not exist
pub fn load_listing(path: &Path) -> CheckpointResult<Option<Vec<VesselListing>>> {
    read_json_array(path)
}

/// Writes a vessel listing export
pub fn save_listing(path: &Path, listings: &[VesselListing]) -> CheckpointResult<()> {
    write_json_atomic(path, listings)
}

fn read_json_array<T: DeserializeOwned>(path: &Path) -> CheckpointResult<Option<Vec<T>>> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(CheckpointError::Read {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    serde_json::from_str(&content)
        .map(Some)
        .map_err(|source| CheckpointError::Corrupt {
            path: path.to_path_buf(),
            source,
        })
}

fn write_json_atomic<T: Serialize>(path: &Path, items: &[T]) -> CheckpointResult<()> {
    let mut json =
        serde_json::to_string_pretty(items).map_err(|source| CheckpointError::Serialize {
            path: path.to_path_buf(),
            source,
        })?;
    json.push('\n');

    let tmp_path = temp_path(path);
    let write_err = |source: io::Error| CheckpointError::Write {
        path: path.to_path_buf(),
        source,
    };

    let mut file = fs::File::create(&tmp_path).map_err(write_err)?;
    file.write_all(json.as_bytes()).map_err(write_err)?;
    file.sync_all().map_err(write_err)?;
    drop(file);

    fs::rename(&tmp_path, path).map_err(write_err)?;
    Ok(())
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}
