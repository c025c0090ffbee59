//! # Snapshot File I/O
//!
//! Persists the dataset payload as a flat JSON snapshot and loads it back.
//! Saves are atomic: serialize, write to a `.tmp` sibling, fsync, rename.
//! A present-but-corrupt snapshot fails hard with a structured error so the
//! host can fall back to an in-memory build ([`load_or_build`]).
//!
//! ## Example
//!
//! ```rust,no_run
//! use facade_core::dataset::build_dataset;
//! use facade_core::snapshot::{save_dataset, load_dataset};
//! use std::path::Path;
//!
//! let dataset = build_dataset(None)?;
//! save_dataset(&dataset, Path::new("data/system_dataset.json"))?;
//! let reloaded = load_dataset(Path::new("data/system_dataset.json"))?;
//! # Ok::<(), facade_core::errors::FacadeError>(())
//! ```

use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::Path;

use tracing::{debug, info};

use crate::dataset::{build_dataset, FacadeDataset};
use crate::errors::{FacadeError, FacadeResult};

/// Save a dataset to a file with atomic write semantics.
///
/// Writes pretty-printed JSON to `<path>.tmp`, syncs it to disk, then
/// renames over the target so an interrupted save never leaves a truncated
/// snapshot behind.
pub fn save_dataset(dataset: &FacadeDataset, path: &Path) -> FacadeResult<()> {
    let json =
        serde_json::to_string_pretty(dataset).map_err(|e| FacadeError::SerializationError {
            reason: e.to_string(),
        })?;

    let tmp_path = path.with_extension("json.tmp");

    let mut tmp_file = File::create(&tmp_path).map_err(|e| {
        FacadeError::file_error("create temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.write_all(json.as_bytes()).map_err(|e| {
        FacadeError::file_error("write temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.sync_all().map_err(|e| {
        FacadeError::file_error("sync temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    fs::rename(&tmp_path, path).map_err(|e| {
        // Leave no temp file behind on a failed rename
        let _ = fs::remove_file(&tmp_path);
        FacadeError::file_error("rename to final", path.display().to_string(), e.to_string())
    })?;

    info!(path = %path.display(), bytes = json.len(), "snapshot saved");
    Ok(())
}

/// Load a dataset snapshot from a file.
///
/// # Returns
///
/// * `Ok(FacadeDataset)` - Successfully loaded snapshot
/// * `Err(FacadeError::FileError)` - I/O error
/// * `Err(FacadeError::SerializationError)` - Invalid JSON
pub fn load_dataset(path: &Path) -> FacadeResult<FacadeDataset> {
    let mut file = File::open(path).map_err(|e| {
        FacadeError::file_error("open", path.display().to_string(), e.to_string())
    })?;

    let mut contents = String::new();
    file.read_to_string(&mut contents).map_err(|e| {
        FacadeError::file_error("read", path.display().to_string(), e.to_string())
    })?;

    let dataset: FacadeDataset =
        serde_json::from_str(&contents).map_err(|e| FacadeError::SerializationError {
            reason: format!("Invalid JSON in {}: {}", path.display(), e),
        })?;

    debug!(path = %path.display(), profiles = dataset.profiles.len(), "snapshot loaded");
    Ok(dataset)
}

/// Load the snapshot if present, otherwise build the dataset in-memory from
/// the reference profiles.
///
/// Mirrors the host startup path: an absent file is normal on first run; a
/// corrupt file is an error the caller must handle.
pub fn load_or_build(path: &Path) -> FacadeResult<FacadeDataset> {
    if path.exists() {
        load_dataset(path)
    } else {
        debug!(path = %path.display(), "no snapshot found, building in-memory");
        build_dataset(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_save_load_roundtrip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("system_dataset.json");

        let dataset = build_dataset(None).unwrap();
        save_dataset(&dataset, &path).unwrap();

        let reloaded = load_dataset(&path).unwrap();
        assert_eq!(reloaded.active_profile_id, dataset.active_profile_id);
        assert_eq!(reloaded.profiles, dataset.profiles);
        assert_eq!(reloaded.geometry, dataset.geometry);
        assert_eq!(reloaded.structural, dataset.structural);
        assert_eq!(reloaded.generated_at, dataset.generated_at);
    }

    #[test]
    fn test_save_leaves_no_temp_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("system_dataset.json");

        let dataset = build_dataset(None).unwrap();
        save_dataset(&dataset, &path).unwrap();

        assert!(path.exists());
        assert!(!path.with_extension("json.tmp").exists());
    }

    #[test]
    fn test_load_missing_file_is_file_error() {
        let dir = tempdir().unwrap();
        let err = load_dataset(&dir.path().join("absent.json")).unwrap_err();
        assert_eq!(err.error_code(), "FILE_ERROR");
    }

    #[test]
    fn test_load_corrupt_snapshot_fails_hard() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("system_dataset.json");
        fs::write(&path, "{ not json").unwrap();

        let err = load_dataset(&path).unwrap_err();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");
    }

    #[test]
    fn test_load_or_build_prefers_snapshot() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("system_dataset.json");

        let mut dataset = build_dataset(None).unwrap();
        dataset.active_profile_id = "DX-42".to_string();
        save_dataset(&dataset, &path).unwrap();

        let loaded = load_or_build(&path).unwrap();
        assert_eq!(loaded.active_profile_id, "DX-42");
    }

    #[test]
    fn test_load_or_build_falls_back_when_absent() {
        let dir = tempdir().unwrap();
        let loaded = load_or_build(&dir.path().join("absent.json")).unwrap();
        assert_eq!(loaded.active_profile_id, "DX-01");
        assert_eq!(loaded.profiles.len(), 3);
    }

    #[test]
    fn test_overwrite_existing_snapshot() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("system_dataset.json");

        let first = build_dataset(None).unwrap();
        save_dataset(&first, &path).unwrap();

        let mut profiles = crate::profile::build_profiles();
        profiles.rotate_left(1);
        let second = build_dataset(Some(&profiles)).unwrap();
        save_dataset(&second, &path).unwrap();

        let reloaded = load_dataset(&path).unwrap();
        assert_eq!(reloaded.active_profile_id, "DX-02");
    }
}
