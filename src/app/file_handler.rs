//! Provides utility functions for file system operations critical to the application.
//!
//! This includes validating the input tree file path and initializing the
//! buffered writer the flattened rules are streamed into. It uses macros
//! from the parent `app` module for verbose logging.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Error as IoError};
use std::path::{Path, PathBuf};
// Use super:: for macros defined in app/mod.rs
use super::error::AppError;
use super::verbose_eprintln; // These macros write to the log file if the logger is initialized.

/// Validates the given input tree file path.
///
/// Checks that the path exists and points to a file.
///
/// # Errors
/// Returns `AppError::InvalidPath` if the path is invalid (not found or not a file).
pub fn validate_input_file(input_path: &PathBuf, quiet_mode: bool) -> Result<(), AppError> {
    if !input_path.exists() {
        let error_msg = format!("File not found: {}", input_path.display());
        verbose_eprintln!(quiet_mode, "Input Error: {}", error_msg);
        return Err(AppError::InvalidPath(error_msg));
    }
    if !input_path.is_file() {
        let error_msg = format!("Path is not a file: {}", input_path.display());
        verbose_eprintln!(quiet_mode, "Input Error: {}", error_msg);
        return Err(AppError::InvalidPath(error_msg));
    }
    Ok(())
}

/// Initializes and returns a `BufWriter<File>` for the rules output file.
///
/// The file is created if it doesn't exist and truncated if it does, so each
/// run produces a complete, self-contained rules file. Rules are streamed
/// into the writer one line at a time as the traversal yields them; the
/// caller flushes the writer once the traversal completes.
///
/// # Errors
/// Returns an `IoError` if the file cannot be opened or created.
pub fn init_output_writer(file_path: &Path) -> Result<BufWriter<File>, IoError> {
    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(file_path)?;
    Ok(BufWriter::new(file))
}
