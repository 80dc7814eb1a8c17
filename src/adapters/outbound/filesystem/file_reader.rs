use crate::application::dto::ResultSource;
use crate::license_evaluation::domain::ResultSet;
use crate::ports::outbound::ResultSetReader;
use crate::shared::error::BouncerError;
use crate::shared::security::{validate_input_file, MAX_RESULTS_FILE_SIZE};
use crate::shared::Result;
use std::fs;
use std::io::{self, Read};
use std::path::Path;

/// FileSystemReader adapter for reading evaluated license results
///
/// This adapter implements the ResultSetReader port for files and stdin.
/// The expected document is the JSON array the JSON presenter writes.
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }

    /// Parses a result document; `source_name` only labels errors
    pub fn parse_results(content: &str, source_name: &str) -> Result<ResultSet> {
        serde_json::from_str(content).map_err(|e| {
            BouncerError::ResultsParseError {
                source_name: source_name.to_string(),
                details: e.to_string(),
            }
            .into()
        })
    }

    /// Safely read a file with security checks:
    /// - Reject symbolic links
    /// - Check file size limits
    /// - Validate file is a regular file
    fn safe_read_file(&self, path: &Path) -> Result<String> {
        // symlink_metadata so a dangling link reaches the symlink check
        if fs::symlink_metadata(path).is_err() {
            return Err(BouncerError::ResultsNotFound {
                path: path.to_path_buf(),
                suggestion: "Check the --input path, or pipe the results on stdin".to_string(),
            }
            .into());
        }

        validate_input_file(path, MAX_RESULTS_FILE_SIZE)?;

        fs::read_to_string(path).map_err(|e| {
            BouncerError::FileReadError {
                path: path.to_path_buf(),
                details: e.to_string(),
            }
            .into()
        })
    }

    fn read_stdin(&self) -> Result<String> {
        Self::read_capped(io::stdin().lock(), MAX_RESULTS_FILE_SIZE)
    }

    /// Reads a whole stream, failing once it grows past `max_size` bytes
    fn read_capped<R: Read>(reader: R, max_size: u64) -> Result<String> {
        let mut content = String::new();
        reader
            .take(max_size + 1)
            .read_to_string(&mut content)
            .map_err(|e| anyhow::anyhow!("Failed to read license results from stdin: {}", e))?;

        if content.len() as u64 > max_size {
            anyhow::bail!(
                "License results on stdin exceed the maximum allowed size of {} bytes",
                max_size
            );
        }
        Ok(content)
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl ResultSetReader for FileSystemReader {
    fn read_results(&self, source: &ResultSource) -> Result<ResultSet> {
        let content = match source {
            ResultSource::Stdin => self.read_stdin()?,
            ResultSource::File(path) => self.safe_read_file(path)?,
        };
        Self::parse_results(&content, &source.display_name())
    }
}
