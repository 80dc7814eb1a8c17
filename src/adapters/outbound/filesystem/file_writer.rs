use crate::ports::outbound::{OutputDestination, Presenter};
use crate::shared::error::BouncerError;
use crate::shared::security::reject_symlink;
use crate::shared::Result;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// FileDestination adapter for writing the rendered document to a file
///
/// This adapter implements the OutputDestination port for file output.
/// It creates (or truncates) the file, lets the presenter write through a
/// buffered writer, then closes it.
pub struct FileDestination {
    output_path: PathBuf,
}

impl FileDestination {
    pub fn new(output_path: PathBuf) -> Self {
        Self { output_path }
    }

    /// Validates that the parent directory exists before writing
    fn validate_parent_directory(&self) -> Result<()> {
        if let Some(parent) = self.output_path.parent() {
            if !parent.exists() && parent != Path::new("") {
                return Err(BouncerError::FileWriteError {
                    path: self.output_path.clone(),
                    details: format!(
                        "Parent directory does not exist: {}",
                        parent.display()
                    ),
                }
                .into());
            }
        }
        Ok(())
    }

    fn open(&self) -> Result<BufWriter<File>> {
        self.validate_parent_directory()?;
        reject_symlink(&self.output_path, "write")?;

        let file = File::create(&self.output_path).map_err(|e| BouncerError::FileWriteError {
            path: self.output_path.clone(),
            details: e.to_string(),
        })?;
        Ok(BufWriter::new(file))
    }
}

impl OutputDestination for FileDestination {
    fn deliver(&self, presenter: &dyn Presenter) -> Result<()> {
        let mut writer = self.open()?;
        presenter.present(&mut writer)?;
        writer.flush().map_err(|e| BouncerError::FileWriteError {
            path: self.output_path.clone(),
            details: e.to_string(),
        })?;
        Ok(())
    }
}

/// StdoutDestination adapter for writing the rendered document to stdout
///
/// Holds the stdout lock for the duration of one render.
pub struct StdoutDestination;

impl StdoutDestination {
    pub fn new() -> Self {
        Self
    }
}

impl Default for StdoutDestination {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputDestination for StdoutDestination {
    fn deliver(&self, presenter: &dyn Presenter) -> Result<()> {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        presenter.present(&mut handle)
    }
}
