//! Chunk file writing and rollover
//!
//! This module provides the ChunkWriter that owns the current output
//! file and rolls over to the next one at the configured row capacity.
//!
//! # Rollover rule
//!
//! A new chunk opens whenever the running row count modulo the chunk
//! capacity is zero. That includes the very first row: no file exists
//! before it, so an input with no valid rows produces no output files at
//! all. Chunks are named `processed_{seq:03}.txt` with a 1-based,
//! zero-padded sequence number that grows past three digits unbounded.
//!
//! # Resource discipline
//!
//! At most one output handle is open at a time. The current chunk is
//! flushed and closed before the next opens, and `finish` closes the
//! final chunk at end of input. Each closed chunk is reported with its
//! final row count.

use crate::io::csv_format::render_line;
use crate::types::{CredentialRecord, SplitError, SplitSummary};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// The current output file and its path, kept together for reporting.
struct Chunk {
    path: PathBuf,
    writer: BufWriter<File>,
}

/// Writer that splits records across capped, numbered chunk files
///
/// Created once per run; records are appended with [`write`] and the
/// final chunk is closed by [`finish`], which returns the run totals.
///
/// [`write`]: ChunkWriter::write
/// [`finish`]: ChunkWriter::finish
pub struct ChunkWriter {
    output_dir: PathBuf,
    rows_per_file: usize,
    current: Option<Chunk>,
    file_seq: u32,
    rows_in_chunk: usize,
    files_created: u32,
    total_rows: u64,
}

impl ChunkWriter {
    /// Create a chunk writer for one run
    ///
    /// Validates the chunk capacity and creates the output directory.
    /// No chunk file is created until the first record arrives.
    ///
    /// # Arguments
    ///
    /// * `output_dir` - Directory the chunk files are written into
    /// * `rows_per_file` - Maximum rows per chunk; must be non-zero
    ///
    /// # Returns
    ///
    /// * `Ok(ChunkWriter)` ready to accept records
    /// * `Err(SplitError::InvalidChunkSize)` if `rows_per_file` is zero
    /// * `Err(SplitError::Io)` if the output directory cannot be created
    pub fn new(output_dir: &Path, rows_per_file: usize) -> Result<Self, SplitError> {
        if rows_per_file == 0 {
            return Err(SplitError::InvalidChunkSize {
                rows: rows_per_file,
            });
        }

        fs::create_dir_all(output_dir)?;

        Ok(ChunkWriter {
            output_dir: output_dir.to_path_buf(),
            rows_per_file,
            current: None,
            file_seq: 1,
            rows_in_chunk: 0,
            files_created: 0,
            total_rows: 0,
        })
    }

    /// Append one record, rolling over to a new chunk when due
    ///
    /// # Arguments
    ///
    /// * `record` - The record to write as one pipe-delimited line
    ///
    /// # Returns
    ///
    /// * `Ok(())` if the line was written
    /// * `Err(SplitError::Io)` on any file creation or write failure
    pub fn write(&mut self, record: &CredentialRecord) -> Result<(), SplitError> {
        if self.rows_in_chunk % self.rows_per_file == 0 {
            self.close_current()?;
            self.open_next()?;
        }

        // open_next always installs a chunk
        if let Some(chunk) = self.current.as_mut() {
            writeln!(chunk.writer, "{}", render_line(record))?;
        }

        self.rows_in_chunk += 1;
        self.total_rows += 1;
        Ok(())
    }

    /// Close the final chunk and return the run totals
    ///
    /// Consumes the writer so no further records can be appended. The
    /// returned summary's `skipped_rows` is zero; the caller fills it in
    /// from the reader.
    pub fn finish(mut self) -> Result<SplitSummary, SplitError> {
        self.close_current()?;

        Ok(SplitSummary {
            total_rows: self.total_rows,
            skipped_rows: 0,
            files_created: self.files_created,
        })
    }

    /// Flush, close, and report the current chunk, if one is open
    fn close_current(&mut self) -> Result<(), SplitError> {
        if let Some(mut chunk) = self.current.take() {
            chunk.writer.flush()?;
            println!(
                "Created file: {} with {} rows.",
                chunk.path.display(),
                self.rows_in_chunk
            );
        }
        Ok(())
    }

    /// Open the next chunk file in sequence
    fn open_next(&mut self) -> Result<(), SplitError> {
        let path = self
            .output_dir
            .join(format!("processed_{:03}.txt", self.file_seq));
        let file = File::create(&path)?;

        self.current = Some(Chunk {
            path,
            writer: BufWriter::new(file),
        });
        self.file_seq += 1;
        self.files_created += 1;
        self.rows_in_chunk = 0;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use tempfile::TempDir;

    fn record(n: usize) -> CredentialRecord {
        CredentialRecord::new(format!("user{n}@example.com"), format!("pw{n}"), None)
    }

    fn chunk_lines(dir: &Path, name: &str) -> Vec<String> {
        fs::read_to_string(dir.join(name))
            .unwrap_or_else(|e| panic!("Failed to read {name}: {e}"))
            .lines()
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn test_zero_rows_per_file_is_rejected() {
        let dir = TempDir::new().unwrap();
        let result = ChunkWriter::new(dir.path(), 0);
        assert_eq!(result.err(), Some(SplitError::InvalidChunkSize { rows: 0 }));
    }

    #[test]
    fn test_no_records_creates_no_files() {
        let dir = TempDir::new().unwrap();
        let writer = ChunkWriter::new(dir.path(), 10).unwrap();

        let summary = writer.finish().unwrap();

        assert_eq!(summary.total_rows, 0);
        assert_eq!(summary.files_created, 0);
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_creates_output_directory() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("out").join("deep");

        let writer = ChunkWriter::new(&nested, 10).unwrap();
        writer.finish().unwrap();

        assert!(nested.is_dir());
    }

    #[rstest]
    #[case::exact_multiple(6, 3, vec![3, 3])]
    #[case::remainder(7, 3, vec![3, 3, 1])]
    #[case::single_chunk(2, 10, vec![2])]
    #[case::one_per_file(3, 1, vec![1, 1, 1])]
    fn test_rollover_row_distribution(
        #[case] total: usize,
        #[case] rows_per_file: usize,
        #[case] expected: Vec<usize>,
    ) {
        let dir = TempDir::new().unwrap();
        let mut writer = ChunkWriter::new(dir.path(), rows_per_file).unwrap();

        for n in 0..total {
            writer.write(&record(n)).unwrap();
        }
        let summary = writer.finish().unwrap();

        assert_eq!(summary.total_rows, total as u64);
        assert_eq!(summary.files_created, expected.len() as u32);

        for (i, rows) in expected.iter().enumerate() {
            let name = format!("processed_{:03}.txt", i + 1);
            assert_eq!(chunk_lines(dir.path(), &name).len(), *rows, "{name}");
        }
    }

    #[test]
    fn test_chunk_naming_is_zero_padded() {
        let dir = TempDir::new().unwrap();
        let mut writer = ChunkWriter::new(dir.path(), 1).unwrap();

        for n in 0..12 {
            writer.write(&record(n)).unwrap();
        }
        writer.finish().unwrap();

        assert!(dir.path().join("processed_001.txt").exists());
        assert!(dir.path().join("processed_009.txt").exists());
        assert!(dir.path().join("processed_012.txt").exists());
    }

    #[test]
    fn test_rows_preserve_order_across_chunks() {
        let dir = TempDir::new().unwrap();
        let mut writer = ChunkWriter::new(dir.path(), 2).unwrap();

        for n in 0..5 {
            writer.write(&record(n)).unwrap();
        }
        writer.finish().unwrap();

        let mut all_lines = Vec::new();
        for name in ["processed_001.txt", "processed_002.txt", "processed_003.txt"] {
            all_lines.extend(chunk_lines(dir.path(), name));
        }

        let emails: Vec<_> = all_lines
            .iter()
            .map(|line| line.split('|').next().unwrap().to_string())
            .collect();
        let expected: Vec<_> = (0..5).map(|n| format!("user{n}@example.com")).collect();
        assert_eq!(emails, expected);
    }

    #[test]
    fn test_recovery_email_rendering_in_chunks() {
        let dir = TempDir::new().unwrap();
        let mut writer = ChunkWriter::new(dir.path(), 10).unwrap();

        writer
            .write(&CredentialRecord::new(
                "a@x.com".to_string(),
                "pw".to_string(),
                Some("r@x.com".to_string()),
            ))
            .unwrap();
        writer
            .write(&CredentialRecord::new(
                "b@x.com".to_string(),
                "pw".to_string(),
                None,
            ))
            .unwrap();
        writer.finish().unwrap();

        let lines = chunk_lines(dir.path(), "processed_001.txt");
        assert_eq!(lines, vec!["a@x.com|pw|r@x.com", "b@x.com|pw"]);
    }

    #[test]
    fn test_sequence_grows_past_three_digits() {
        let dir = TempDir::new().unwrap();
        let mut writer = ChunkWriter::new(dir.path(), 1).unwrap();
        writer.file_seq = 1000;

        writer.write(&record(0)).unwrap();
        writer.finish().unwrap();

        assert!(dir.path().join("processed_1000.txt").exists());
    }
}
