//! macOS-specific path resolution.

use std::path::PathBuf;

use crate::error::Result;

/// Returns the user's config directory on macOS.
///
/// Most CLI tools use `~/.config/` following XDG conventions,
/// though native macOS apps prefer `~/Library/Application Support/`.
///
/// # Errors
///
/// Returns an error if the home directory cannot be determined.
pub fn config_dir() -> Result<PathBuf> {
    Ok(super::home_dir()?.join(".config"))
}

/// Returns the conventional executable install directories on macOS,
/// most specific first.
///
/// Homebrew installs to `/opt/homebrew/bin` on Apple Silicon and
/// `/usr/local/bin` on Intel; standalone installers use `~/.local/bin`.
///
/// # Errors
///
/// Returns an error if the home directory cannot be determined.
pub fn well_known_bin_dirs() -> Result<Vec<PathBuf>> {
    let home = super::home_dir()?;
    Ok(vec![
        home.join(".local/bin"),
        PathBuf::from("/opt/homebrew/bin"),
        PathBuf::from("/usr/local/bin"),
        PathBuf::from("/usr/bin"),
    ])
}
