//! Windows-specific path resolution.

use std::path::PathBuf;

use crate::error::{Error, Result};

/// Returns the user's config directory on Windows.
///
/// Returns `%APPDATA%` which is typically `C:\Users\<user>\AppData\Roaming`.
///
/// # Errors
///
/// Returns an error if the `APPDATA` environment variable is not set.
pub fn config_dir() -> Result<PathBuf> {
    std::env::var("APPDATA")
        .map(PathBuf::from)
        .map_err(Error::from)
}

/// Returns the conventional executable install directories on Windows,
/// most specific first.
///
/// Per-user installers place binaries under `%LOCALAPPDATA%\Programs`;
/// machine-wide installers use `%ProgramFiles%`.
///
/// # Errors
///
/// Returns an error if the `LOCALAPPDATA` environment variable is not set.
pub fn well_known_bin_dirs() -> Result<Vec<PathBuf>> {
    let local = std::env::var("LOCALAPPDATA").map(PathBuf::from)?;
    let program_files =
        std::env::var("ProgramFiles").unwrap_or_else(|_| r"C:\Program Files".to_string());
    Ok(vec![
        local.join(r"Programs\faas-cli"),
        PathBuf::from(&program_files).join("faas-cli"),
        PathBuf::from(program_files),
    ])
}
