//! Utility functions for error handling
//!
//! Filesystem helpers that attach the offending path to every failure.

use std::fs;
use std::io;
use std::path::Path;

use crate::error::{CareerGraphError, Result};

/// Safely open a file with rich error information
///
/// # Arguments
/// * `path` - The path to the file to open
/// * `purpose` - Why the file is being opened (for error context)
pub fn safe_open_file(path: &Path, purpose: &str) -> Result<fs::File> {
    if !path.exists() {
        return Err(CareerGraphError::io_error(
            io::ErrorKind::NotFound,
            format!("File not found (needed for {purpose})"),
            path,
        ));
    }

    if !path.is_file() {
        return Err(CareerGraphError::io_error(
            io::ErrorKind::InvalidInput,
            format!("Path is not a file (expected a file for {purpose})"),
            path,
        ));
    }

    fs::File::open(path).map_err(|e| {
        let context = match e.kind() {
            io::ErrorKind::PermissionDenied => {
                "Permission denied - check file permissions".to_string()
            }
            _ => format!("Failed to open file for {purpose} ({e})"),
        };
        CareerGraphError::io_error(e.kind(), context, path)
    })
}

/// Check if a directory exists and is readable, with rich error information
pub fn validate_directory(path: &Path, purpose: &str) -> Result<()> {
    if !path.exists() {
        return Err(CareerGraphError::io_error(
            io::ErrorKind::NotFound,
            format!("Directory not found (needed for {purpose})"),
            path,
        ));
    }

    if !path.is_dir() {
        return Err(CareerGraphError::io_error(
            io::ErrorKind::InvalidInput,
            format!("Path is not a directory (expected a directory for {purpose})"),
            path,
        ));
    }

    match fs::read_dir(path) {
        Ok(_) => Ok(()),
        Err(e) => {
            let context = match e.kind() {
                io::ErrorKind::PermissionDenied => {
                    "Permission denied - check directory permissions".to_string()
                }
                _ => format!("Failed to access directory for {purpose} ({e})"),
            };
            Err(CareerGraphError::io_error(e.kind(), context, path))
        }
    }
}
