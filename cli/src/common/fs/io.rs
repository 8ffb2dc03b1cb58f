//! # Filesystem I/O Helpers
//!
//! File: cli/src/common/fs/io.rs
//!
//! ## Overview
//!
//! Thin wrappers around `std::fs` that add context to errors:
//! - **`ensure_dir_exists`**: creates a directory (and parents) when missing and
//!   rejects a path that exists as something other than a directory.
//! - **`read_file_to_string`**: reads a whole file, used by config loading.
//! - **`write_string_to_file`**: writes a file after making sure its parent
//!   directory exists, used by report export.
//!
//! ```rust
//! use crate::common::fs::io;
//!
//! io::write_string_to_file(Path::new("reportes/chat.txt"), "USER: hola")?;
//! let content = io::read_file_to_string(Path::new(".fiuba-chat.toml"))?;
//! ```
//!
use crate::core::error::{ChatError, Result};
use anyhow::Context;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Ensures that a directory exists at `path`, creating it (like `mkdir -p`)
/// when missing.
///
/// # Errors
///
/// Returns an `Err` if the path exists but is not a directory, or if
/// creating it fails.
pub fn ensure_dir_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)
            .with_context(|| format!("Failed to create directory {:?}", path))?;
        info!("Created directory: {:?}", path);
    } else if !path.is_dir() {
        anyhow::bail!(ChatError::FileSystem(format!(
            "Path exists but is not a directory: {:?}",
            path
        )));
    } else {
        debug!("Directory already exists: {:?}", path);
    }
    Ok(())
}

/// Reads the entire content of a file into a string.
pub fn read_file_to_string(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read file {:?}", path))
}

/// Writes `content` to `path`, overwriting an existing file.
///
/// The parent directory is created first when it does not exist.
pub fn write_string_to_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        // `Path::parent` of a bare file name is "", which is the current directory.
        if !parent.as_os_str().is_empty() {
            ensure_dir_exists(parent)?;
        }
    }
    fs::write(path, content).with_context(|| format!("Failed to write to file {:?}", path))?;
    debug!("Wrote {} bytes to {:?}", content.len(), path);
    Ok(())
}
