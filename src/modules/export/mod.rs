//! Export Module
//!
//! Writes a read-only snapshot of the built-in datasets:
//! - `:export csv`  → patient roster as CSV
//! - `:export json` → every dataset as one JSON document
//!
//! Files are named `<prefix>-<timestamp>.<ext>` inside the export directory,
//! with a `-N` suffix when that name is already taken.

mod csv_export;
mod json_export;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::Local;
use thiserror::Error;

use crate::core::ExportFormat;
use crate::data::Dataset;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("cannot create {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Io(#[from] io::Error),

    #[error("csv: {0}")]
    Csv(#[from] csv::Error),

    #[error("json: {0}")]
    Json(#[from] serde_json::Error),
}

/// Generate a timestamped filename
fn generate_filename(prefix: &str, extension: &str) -> String {
    let timestamp = Local::now().format("%Y-%m-%d-%H%M%S-%3f");
    format!("{}-{}.{}", prefix, timestamp, extension)
}

/// First free path in `dir` for a new export file
fn unique_path(dir: &Path, prefix: &str, extension: &str) -> PathBuf {
    let path = dir.join(generate_filename(prefix, extension));
    if !path.exists() {
        return path;
    }
    let stem = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| prefix.to_string());
    (1..)
        .map(|n| dir.join(format!("{stem}-{n}.{extension}")))
        .find(|candidate| !candidate.exists())
        .unwrap_or(path)
}

/// Write the snapshot for `format` into `dir`, creating it if needed.
/// Returns the path of the written file.
pub fn export_dataset(
    dataset: &Dataset,
    format: ExportFormat,
    dir: &Path,
) -> Result<PathBuf, ExportError> {
    fs::create_dir_all(dir).map_err(|source| ExportError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })?;

    let path = match format {
        ExportFormat::Csv => {
            let path = unique_path(dir, "patients", format.extension());
            csv_export::write_patients(&path, dataset.patients)?;
            path
        }
        ExportFormat::Json => {
            let path = unique_path(dir, "medicare", format.extension());
            json_export::write_dataset(&path, dataset)?;
            path
        }
    };
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filename_shape() {
        let name = generate_filename("patients", "csv");
        assert!(name.starts_with("patients-"));
        assert!(name.ends_with(".csv"));
    }

    #[test]
    fn test_taken_name_gets_a_suffix() {
        let dir = tempfile::tempdir().unwrap();
        let first = unique_path(dir.path(), "patients", "csv");
        fs::write(&first, "").unwrap();
        let second = unique_path(dir.path(), "patients", "csv");
        assert_ne!(first, second);
        assert!(!second.exists());
    }

    #[test]
    fn test_back_to_back_exports_keep_both_files() {
        let dir = tempfile::tempdir().unwrap();
        let data = Dataset::builtin();
        let first = export_dataset(&data, ExportFormat::Csv, dir.path()).unwrap();
        let second = export_dataset(&data, ExportFormat::Csv, dir.path()).unwrap();
        assert_ne!(first, second);
        assert!(first.exists() && second.exists());
    }

    #[test]
    fn test_export_creates_missing_dir() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        let path = export_dataset(&Dataset::builtin(), ExportFormat::Csv, &nested).unwrap();
        assert!(path.starts_with(&nested));
        assert!(path.exists());
    }

    #[test]
    fn test_export_into_file_path_fails() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "").unwrap();
        let err = export_dataset(&Dataset::builtin(), ExportFormat::Json, &blocker).unwrap_err();
        assert!(matches!(err, ExportError::CreateDir { .. }));
    }
}
