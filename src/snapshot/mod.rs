//! Snapshot loading for diary and reflection records.
//!
//! The stats engine consumes fully-materialized record lists; this module is
//! the input boundary that produces them from JSON snapshot files in the
//! configured directory. It only reads: a missing file is an empty collection
//! (there is simply nothing recorded yet), while an unreadable or malformed
//! file is an error.

use crate::constants::{DIARY_SNAPSHOT_FILE, REFLECTION_SNAPSHOT_FILE};
use crate::errors::{AppResult, SnapshotError};
use crate::records::{DiaryEntry, Reflection};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Loads all diary entries from `diario.json` in the snapshot directory.
///
/// # Errors
///
/// Returns `SnapshotError::Unreadable` if the file exists but cannot be read,
/// or `SnapshotError::Malformed` if it is not a valid JSON array of entries.
pub fn load_diary_entries(snapshot_dir: &Path) -> AppResult<Vec<DiaryEntry>> {
    load_records(&snapshot_dir.join(DIARY_SNAPSHOT_FILE))
}

/// Loads all reflection sessions from `reflexiones.json` in the snapshot
/// directory.
///
/// # Errors
///
/// Returns `SnapshotError::Unreadable` if the file exists but cannot be read,
/// or `SnapshotError::Malformed` if it is not a valid JSON array of sessions.
pub fn load_reflections(snapshot_dir: &Path) -> AppResult<Vec<Reflection>> {
    load_records(&snapshot_dir.join(REFLECTION_SNAPSHOT_FILE))
}

fn load_records<T: DeserializeOwned>(path: &Path) -> AppResult<Vec<T>> {
    if !path.exists() {
        debug!("Snapshot file {:?} does not exist; treating as empty", path);
        return Ok(Vec::new());
    }

    let raw = fs::read_to_string(path).map_err(|e| SnapshotError::Unreadable {
        path: path.to_path_buf(),
        source: e,
    })?;

    let records: Vec<T> = serde_json::from_str(&raw).map_err(|e| SnapshotError::Malformed {
        path: path.to_path_buf(),
        source: e,
    })?;

    debug!("Loaded {} records from {:?}", records.len(), path);
    Ok(records)
}
