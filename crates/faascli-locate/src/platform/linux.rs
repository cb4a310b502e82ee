//! Linux-specific path resolution with XDG Base Directory support.

use std::path::PathBuf;

use crate::error::Result;

fn xdg_path_if_valid(var_name: &str) -> Option<PathBuf> {
    std::env::var(var_name).ok().and_then(|val| {
        let path = PathBuf::from(&val);
        if !val.is_empty() && path.is_absolute() {
            Some(path)
        } else {
            None
        }
    })
}

/// Returns the user's config directory on Linux.
///
/// Respects `XDG_CONFIG_HOME` if set to an absolute path,
/// otherwise defaults to `~/.config/`.
///
/// # Errors
///
/// Returns an error if the home directory cannot be determined.
pub fn config_dir() -> Result<PathBuf> {
    if let Some(path) = xdg_path_if_valid("XDG_CONFIG_HOME") {
        return Ok(path);
    }
    Ok(super::home_dir()?.join(".config"))
}

/// Returns the conventional executable install directories on Linux,
/// most specific first.
///
/// Package managers and install scripts place user binaries in
/// `~/.local/bin` or `~/bin`; system-wide installs land in
/// `/usr/local/bin` or `/usr/bin`.
///
/// # Errors
///
/// Returns an error if the home directory cannot be determined.
pub fn well_known_bin_dirs() -> Result<Vec<PathBuf>> {
    let home = super::home_dir()?;
    Ok(vec![
        home.join(".local/bin"),
        home.join("bin"),
        PathBuf::from("/usr/local/bin"),
        PathBuf::from("/usr/bin"),
    ])
}
