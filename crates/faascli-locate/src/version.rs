//! CLI version probing and validation.
//!
//! The detected binary is probed with `version --short-version` and the
//! reported version checked against the range this toolkit supports.
//! Detection itself does not depend on the probe; callers run it when they
//! are about to drive the CLI and want early feedback on incompatibility.

use std::fmt;
use std::path::Path;
use std::process::Command;
use std::sync::OnceLock;

use regex::Regex;

use crate::error::{Error, Result};

/// Lowest CLI version this toolkit supports.
pub const MIN_VERSION: CliVersion = CliVersion {
    major: 0,
    minor: 16,
    patch: 0,
};

/// First CLI version this toolkit does not support.
pub const MAX_EXCLUSIVE_VERSION: CliVersion = CliVersion {
    major: 1,
    minor: 0,
    patch: 0,
};

static VERSION_RE: OnceLock<Regex> = OnceLock::new();

fn version_re() -> &'static Regex {
    VERSION_RE.get_or_init(|| Regex::new(r"(\d+)\.(\d+)\.(\d+)").unwrap())
}

/// A parsed CLI version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct CliVersion {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl fmt::Display for CliVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// How a probed version relates to the supported range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionCheck {
    Supported,
    TooOld,
    TooNew,
}

/// Extracts a version from the CLI's version output.
///
/// # Errors
///
/// Returns [`Error::VersionParse`] if no `MAJOR.MINOR.PATCH` triple is
/// present.
pub fn parse_version(text: &str) -> Result<CliVersion> {
    let captures = version_re()
        .captures(text)
        .ok_or_else(|| Error::VersionParse(text.to_string()))?;

    // The regex guarantees each group is all digits; overflow is the only
    // failure mode left.
    let field = |i: usize| {
        captures[i]
            .parse::<u32>()
            .map_err(|_| Error::VersionParse(text.to_string()))
    };
    Ok(CliVersion {
        major: field(1)?,
        minor: field(2)?,
        patch: field(3)?,
    })
}

/// Runs the CLI at `cli_path` and parses its reported version.
///
/// # Errors
///
/// Returns [`Error::VersionProbe`] if the process cannot be spawned or
/// exits unsuccessfully, and [`Error::VersionParse`] if its output has no
/// version in it.
pub fn probe_version(cli_path: &Path) -> Result<CliVersion> {
    let output = Command::new(cli_path)
        .args(["version", "--short-version"])
        .output()
        .map_err(|e| Error::VersionProbe(format!("{}: {e}", cli_path.display())))?;

    if !output.status.success() {
        return Err(Error::VersionProbe(format!(
            "{} exited with {}",
            cli_path.display(),
            output.status
        )));
    }

    let text = String::from_utf8_lossy(&output.stdout);
    parse_version(&text)
}

/// Checks a version against the supported half-open range
/// `[MIN_VERSION, MAX_EXCLUSIVE_VERSION)`.
#[must_use]
pub fn validate(version: &CliVersion) -> VersionCheck {
    if *version < MIN_VERSION {
        VersionCheck::TooOld
    } else if *version >= MAX_EXCLUSIVE_VERSION {
        VersionCheck::TooNew
    } else {
        VersionCheck::Supported
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_plain_triple() {
        let version = parse_version("0.16.4").unwrap();
        assert_eq!(
            version,
            CliVersion {
                major: 0,
                minor: 16,
                patch: 4
            }
        );
    }

    #[test]
    fn parse_tolerates_surrounding_text() {
        let version = parse_version("faas-cli version 0.17.1 (commit abc123)\n").unwrap();
        assert_eq!(version.to_string(), "0.17.1");
    }

    #[test]
    fn parse_rejects_output_without_version() {
        let result = parse_version("no version here");
        assert!(matches!(result, Err(Error::VersionParse(_))));
    }

    #[test]
    fn versions_order_numerically_not_lexically() {
        let small = parse_version("0.9.0").unwrap();
        let big = parse_version("0.16.0").unwrap();
        assert!(small < big);
    }

    #[test]
    fn validate_supported_range() {
        assert_eq!(validate(&MIN_VERSION), VersionCheck::Supported);
        assert_eq!(
            validate(&parse_version("0.17.9").unwrap()),
            VersionCheck::Supported
        );
    }

    #[test]
    fn validate_flags_old_and_new() {
        assert_eq!(
            validate(&parse_version("0.15.9").unwrap()),
            VersionCheck::TooOld
        );
        assert_eq!(validate(&MAX_EXCLUSIVE_VERSION), VersionCheck::TooNew);
        assert_eq!(
            validate(&parse_version("2.0.0").unwrap()),
            VersionCheck::TooNew
        );
    }

    #[test]
    fn probe_fails_for_missing_binary() {
        let result = probe_version(Path::new("/nonexistent/faas-cli-xyz"));
        assert!(matches!(result, Err(Error::VersionProbe(_))));
    }
}
