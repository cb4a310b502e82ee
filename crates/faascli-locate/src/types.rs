//! Core type definitions for CLI detection.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Describes an external CLI tool this crate can detect.
///
/// The built-in [`FAAS_CLI`] spec covers the faas CLI; embedders that ship
/// additional tooling can construct their own specs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolSpec {
    /// Human-readable tool name, used in notification messages.
    pub tool_name: &'static str,
    /// Known executable names, canonical name first.
    pub binary_names: &'static [&'static str],
    /// Install documentation opened by the "learn more" notification action.
    pub install_help_url: &'static str,
}

/// The faas CLI tool spec.
pub const FAAS_CLI: ToolSpec = ToolSpec {
    tool_name: "faas CLI",
    binary_names: &["faas-cli", "faas"],
    install_help_url: "https://docs.openfaas.com/cli/install/",
};

/// A resolved tool location produced by one detection pass.
///
/// `path` is the empty string when the tool was not found. The value is
/// constructed fresh on every pass and never cached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolLocation {
    /// Filesystem path to the executable, or `""` if not found.
    pub path: String,
    /// `true` if the path came from the location provider rather than
    /// from stored configuration.
    pub auto_detected: bool,
}

impl ToolLocation {
    /// Returns `true` if this location represents a missing tool.
    #[must_use]
    pub fn is_missing(&self) -> bool {
        self.path.is_empty()
    }
}

/// Parameters for one detection pass.
///
/// `passive` marks a background pass that should not record an outcome.
/// `show_message`: `Some(true)` always notifies, `Some(false)` never
/// notifies except when the tool is missing, `None` notifies as `Some(true)`
/// does.
#[derive(Debug, Clone, Copy, Default)]
pub struct DetectRequest {
    pub passive: bool,
    pub show_message: Option<bool>,
}

/// Result of a non-passive detection pass, reported to the telemetry sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DetectOutcome {
    Succeeded,
    Failed,
}

impl fmt::Display for DetectOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Succeeded => write!(f, "Succeeded"),
            Self::Failed => write!(f, "Failed"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn faas_cli_spec_has_canonical_binary_first() {
        assert_eq!(FAAS_CLI.binary_names[0], "faas-cli");
    }

    #[test]
    fn empty_path_is_missing() {
        let location = ToolLocation {
            path: String::new(),
            auto_detected: true,
        };
        assert!(location.is_missing());
    }

    #[test]
    fn non_empty_path_is_not_missing() {
        let location = ToolLocation {
            path: "/usr/local/bin/faas-cli".into(),
            auto_detected: false,
        };
        assert!(!location.is_missing());
    }

    #[test]
    fn detect_request_defaults_to_active_without_message_override() {
        let request = DetectRequest::default();
        assert!(!request.passive);
        assert!(request.show_message.is_none());
    }

    #[test]
    fn outcome_display_matches_wire_values() {
        assert_eq!(DetectOutcome::Succeeded.to_string(), "Succeeded");
        assert_eq!(DetectOutcome::Failed.to_string(), "Failed");
    }
}
