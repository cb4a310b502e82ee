//! Binary location provider.
//!
//! Searches PATH first (via the `which` crate), then the platform's
//! conventional install directories. Every call re-scans the host; results
//! are never cached.

use std::path::PathBuf;

use log::debug;

use crate::error::{Error, Result};
use crate::platform;
use crate::types::ToolSpec;

/// Finds a binary executable in PATH.
///
/// Returns `Ok(Some(path))` if found, `Ok(None)` if not found,
/// or `Err` for system errors (e.g., canonicalization failures).
///
/// Cross-platform: handles Windows extensions (.exe, .cmd, etc.) automatically.
///
/// # Errors
///
/// Returns [`Error::BinaryDetection`] if a system error occurs during search.
pub fn find_binary(name: &str) -> Result<Option<PathBuf>> {
    match which::which(name) {
        Ok(path) => Ok(Some(path)),
        Err(which::Error::CannotFindBinaryPath) => Ok(None),
        Err(e) => Err(Error::BinaryDetection(e.to_string())),
    }
}

/// Searches the host for a tool executable.
///
/// Implemented by [`CliLocationProvider`] for real detection; tests inject
/// scripted providers.
pub trait LocationProvider {
    /// Returns the first existing match, or `None` if the tool is absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the search itself fails (not if the tool is
    /// merely missing).
    fn locate(&self) -> Result<Option<PathBuf>>;
}

/// Location provider that scans PATH and well-known install directories.
#[derive(Debug, Clone, Copy)]
pub struct CliLocationProvider {
    spec: ToolSpec,
}

impl CliLocationProvider {
    #[must_use]
    pub fn new(spec: ToolSpec) -> Self {
        Self { spec }
    }
}

impl LocationProvider for CliLocationProvider {
    fn locate(&self) -> Result<Option<PathBuf>> {
        for name in self.spec.binary_names {
            if let Some(path) = find_binary(name)? {
                debug!("found {} on PATH: {}", name, path.display());
                return Ok(Some(path));
            }
        }

        for dir in platform::well_known_bin_dirs()? {
            for name in self.spec.binary_names {
                let candidate = dir.join(platform::executable_name(name));
                if candidate.is_file() {
                    debug!("found {} at {}", name, candidate.display());
                    return Ok(Some(candidate));
                }
            }
        }

        debug!("{} not found on this system", self.spec.tool_name);
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::FAAS_CLI;

    #[test]
    fn find_binary_returns_none_for_nonexistent() {
        let result = find_binary("nonexistent-binary-xyz-12345");
        assert!(result.is_ok());
        assert!(result.unwrap().is_none());
    }

    #[test]
    fn find_binary_returns_some_for_common_binary() {
        #[cfg(unix)]
        let binary = "ls";
        #[cfg(windows)]
        let binary = "cmd";

        let result = find_binary(binary);
        assert!(result.is_ok());
        assert!(result.unwrap().is_some());
    }

    #[test]
    fn provider_locate_does_not_error_when_tool_absent() {
        let spec = ToolSpec {
            binary_names: &["nonexistent-binary-xyz-12345"],
            ..FAAS_CLI
        };
        let provider = CliLocationProvider::new(spec);
        let result = provider.locate();
        assert!(result.is_ok());
        assert!(result.unwrap().is_none());
    }

    #[test]
    fn provider_locate_finds_path_binaries() {
        #[cfg(unix)]
        let spec = ToolSpec {
            binary_names: &["ls"],
            ..FAAS_CLI
        };
        #[cfg(windows)]
        let spec = ToolSpec {
            binary_names: &["cmd"],
            ..FAAS_CLI
        };

        let provider = CliLocationProvider::new(spec);
        let found = provider.locate().unwrap();
        assert!(found.is_some());
    }
}
