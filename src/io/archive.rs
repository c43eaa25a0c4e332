//! Input file archiving for the split-and-archive mode
//!
//! After a successful split, the consumed input file is moved into an
//! archive directory under its original base name. The move refuses to
//! overwrite an existing destination and reports that as a failure
//! instead of relying on platform rename semantics.

use crate::types::SplitError;
use std::fs;
use std::path::{Path, PathBuf};

/// Move the input file into the archive directory
///
/// Creates the archive directory if needed, then moves the file while
/// preserving its base name. Uses `fs::rename` first and falls back to
/// copy-then-remove when the rename fails (e.g. across filesystems).
///
/// Overwrite policy: if the destination already exists the move is
/// refused and reported as `ArchiveFailed`.
///
/// # Arguments
///
/// * `input_path` - The consumed input file
/// * `archive_dir` - Directory the file is moved into
///
/// # Returns
///
/// * `Ok(PathBuf)` - The destination path inside the archive directory
/// * `Err(SplitError::ArchiveFailed)` - The move could not be completed;
///   the input file is left in place
pub fn archive_input(input_path: &Path, archive_dir: &Path) -> Result<PathBuf, SplitError> {
    let file_name = input_path.file_name().ok_or_else(|| {
        SplitError::archive_failed(input_path, archive_dir, "input path has no file name")
    })?;
    let dest_path = archive_dir.join(file_name);

    fs::create_dir_all(archive_dir)
        .map_err(|error| SplitError::archive_failed(input_path, &dest_path, &error.to_string()))?;

    if dest_path.exists() {
        return Err(SplitError::archive_failed(
            input_path,
            &dest_path,
            "destination already exists",
        ));
    }

    if fs::rename(input_path, &dest_path).is_err() {
        // Rename can fail across filesystems; fall back to copy + remove.
        fs::copy(input_path, &dest_path).map_err(|error| {
            SplitError::archive_failed(input_path, &dest_path, &error.to_string())
        })?;
        fs::remove_file(input_path).map_err(|error| {
            SplitError::archive_failed(input_path, &dest_path, &error.to_string())
        })?;
    }

    Ok(dest_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, content).expect("Failed to write file");
        path
    }

    #[test]
    fn test_archive_moves_file() {
        let dir = TempDir::new().unwrap();
        let input = write_file(dir.path(), "export.csv", "data");
        let archive_dir = dir.path().join("archive");

        let dest = archive_input(&input, &archive_dir).unwrap();

        assert_eq!(dest, archive_dir.join("export.csv"));
        assert!(!input.exists());
        assert_eq!(fs::read_to_string(&dest).unwrap(), "data");
    }

    #[test]
    fn test_archive_creates_directory() {
        let dir = TempDir::new().unwrap();
        let input = write_file(dir.path(), "export.csv", "data");
        let archive_dir = dir.path().join("nested").join("archive");

        let result = archive_input(&input, &archive_dir);

        assert!(result.is_ok());
        assert!(archive_dir.join("export.csv").exists());
    }

    #[test]
    fn test_archive_refuses_existing_destination() {
        let dir = TempDir::new().unwrap();
        let input = write_file(dir.path(), "export.csv", "new");
        let archive_dir = dir.path().join("archive");
        fs::create_dir_all(&archive_dir).unwrap();
        write_file(&archive_dir, "export.csv", "old");

        let result = archive_input(&input, &archive_dir);

        assert!(matches!(
            result.err(),
            Some(SplitError::ArchiveFailed { .. })
        ));
        // Input stays put and the archived copy is untouched
        assert!(input.exists());
        assert_eq!(
            fs::read_to_string(archive_dir.join("export.csv")).unwrap(),
            "old"
        );
    }

    #[test]
    fn test_archive_into_directory_holding_other_files() {
        let dir = TempDir::new().unwrap();
        let input = write_file(dir.path(), "export.csv", "data");
        let archive_dir = dir.path().join("archive");
        fs::create_dir_all(&archive_dir).unwrap();
        write_file(&archive_dir, "processed_001.txt", "a|b\n");

        let result = archive_input(&input, &archive_dir);

        assert!(result.is_ok());
        assert!(archive_dir.join("export.csv").exists());
        assert!(archive_dir.join("processed_001.txt").exists());
    }

    #[test]
    fn test_archive_missing_input_reports_failure() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("never-written.csv");
        let archive_dir = dir.path().join("archive");

        let result = archive_input(&input, &archive_dir);

        assert!(matches!(
            result.err(),
            Some(SplitError::ArchiveFailed { .. })
        ));
    }
}
