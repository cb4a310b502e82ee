#![doc = include_str!("../README.md")]
//!
//! ## Modules
//!
//! - [`controller`] - Serialized detection controller
//! - [`detection`] - Binary location provider
//! - [`error`] - Error types
//! - [`features`] - Feature flag gate
//! - [`platform`] - Platform-specific path resolution
//! - [`settings`] - Settings storage
//! - [`types`] - Core type definitions
//! - [`version`] - CLI version probing

pub mod controller;
pub mod detection;
pub mod error;
pub mod features;
pub mod platform;
pub mod settings;
pub mod types;
pub mod version;

pub use controller::{DetectionController, Interaction, TelemetrySink};
pub use detection::{CliLocationProvider, LocationProvider, find_binary};
pub use error::{Error, Result};
pub use features::FeatureGate;
pub use settings::{FileSettings, LOCATION_KEY, SettingsStore, TOGGLE_PREFIX, ToolSettings};
pub use types::{DetectOutcome, DetectRequest, FAAS_CLI, ToolLocation, ToolSpec};
pub use version::{CliVersion, VersionCheck, parse_version, probe_version, validate};
