use crate::shared::error::BouncerError;
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Maximum size of a license result document (100 MB)
pub const MAX_RESULTS_FILE_SIZE: u64 = 100 * 1024 * 1024;

/// Rejects a path that is itself a symbolic link.
///
/// Uses `symlink_metadata()` so the link is inspected rather than its target.
/// A path that does not exist passes; callers creating new files rely on that.
pub fn reject_symlink(path: &Path, operation: &str) -> Result<()> {
    let metadata = match fs::symlink_metadata(path) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(()),
        Err(e) => {
            anyhow::bail!(
                "Failed to read metadata for {} operation on {}: {}",
                operation,
                path.display(),
                e
            )
        }
    };

    if metadata.is_symlink() {
        return Err(BouncerError::SecurityError {
            path: path.to_path_buf(),
            reason: format!(
                "{} operations on symbolic links are not allowed",
                operation
            ),
            hint: "Pass the path of the real file instead of a link".to_string(),
        }
        .into());
    }

    Ok(())
}

/// Validates that an existing path is a regular file within the size limit
///
/// # Errors
/// Returns an error if:
/// - The path is a symbolic link
/// - The path is not a regular file
/// - The file is larger than `max_size`
pub fn validate_input_file(path: &Path, max_size: u64) -> Result<()> {
    let metadata = fs::symlink_metadata(path).map_err(|e| BouncerError::FileReadError {
        path: path.to_path_buf(),
        details: e.to_string(),
    })?;

    if metadata.is_symlink() {
        return Err(BouncerError::SecurityError {
            path: path.to_path_buf(),
            reason: "Input is a symbolic link".to_string(),
            hint: "Pass the path of the real results file instead of a link".to_string(),
        }
        .into());
    }

    if !metadata.is_file() {
        anyhow::bail!("{} is not a regular file", path.display());
    }

    if metadata.len() > max_size {
        return Err(BouncerError::SecurityError {
            path: path.to_path_buf(),
            reason: format!(
                "File is too large ({} bytes). Maximum allowed size is {} bytes.",
                metadata.len(),
                max_size
            ),
            hint: "Split the result set or check that the right file was passed".to_string(),
        }
        .into());
    }

    Ok(())
}
