//! Serialized detection controller.
//!
//! One detection pass resolves the tool location, decides whether to notify
//! the user, optionally persists a user-picked override, and reports an
//! outcome. Passes are serialized process-wide: a second caller queues on
//! the lock and observes the first pass's settled settings before its own
//! pass begins.

use std::sync::Mutex;

use log::{debug, warn};

use crate::detection::LocationProvider;
use crate::error::Result;
use crate::settings::{SettingsStore, ToolSettings};
use crate::types::{DetectOutcome, DetectRequest, ToolLocation, ToolSpec};

/// Process-wide lock serializing detection passes.
static DETECT_LOCK: Mutex<()> = Mutex::new(());

/// Receives outcome records for non-passive detection passes.
///
/// Fire-and-forget: implementations must not fail the pass.
pub trait TelemetrySink {
    fn record_detect(&self, outcome: DetectOutcome);
}

/// User-facing dialog surface consumed by the controller.
///
/// Implementations decide how (and whether) each primitive blocks; the
/// controller holds the detection lock across these calls, so a pending
/// dialog queues any concurrently triggered pass behind it.
pub trait Interaction {
    /// Shows an error notification with action buttons. Returns the index
    /// of the chosen action, or `None` if the user dismissed it.
    fn notify_error(&self, message: &str, actions: &[&str]) -> Option<usize>;

    /// Shows an informational notification. Fire-and-forget.
    fn notify_info(&self, message: &str);

    /// Opens a single-file picker. Zero or one path is expected; anything
    /// else is treated as no selection.
    fn pick_file(&self) -> Vec<std::path::PathBuf>;

    /// Opens an external help resource. Fire-and-forget.
    fn open_external(&self, url: &str);
}

/// Orchestrates detection passes for one tool.
pub struct DetectionController<'a> {
    spec: ToolSpec,
    store: &'a dyn SettingsStore,
    provider: &'a dyn LocationProvider,
    ui: &'a dyn Interaction,
    telemetry: &'a dyn TelemetrySink,
}

impl<'a> DetectionController<'a> {
    #[must_use]
    pub fn new(
        spec: ToolSpec,
        store: &'a dyn SettingsStore,
        provider: &'a dyn LocationProvider,
        ui: &'a dyn Interaction,
        telemetry: &'a dyn TelemetrySink,
    ) -> Self {
        Self {
            spec,
            store,
            provider,
            ui,
            telemetry,
        }
    }

    /// Runs one detection pass and returns the resolved location.
    ///
    /// Concurrent callers block until the in-flight pass (including any
    /// pending user dialog) completes. Override-persistence failures are
    /// reported through the interaction surface and do not fail the pass.
    ///
    /// # Errors
    ///
    /// Returns an error only if the location search itself fails; a
    /// missing tool is a normal result with an empty path.
    pub fn run_pass(&self, request: DetectRequest) -> Result<ToolLocation> {
        let _guard = DETECT_LOCK.lock().unwrap_or_else(|e| e.into_inner());

        let settings = ToolSettings::new(self.store);
        let previous = settings.location();
        debug!("stored {} location before pass: {previous:?}", self.spec.tool_name);

        // A stored value is never overwritten here: the settings document
        // may be shared by several host sessions, each with a different
        // local filesystem, and auto-updating it would make them fight.
        let resolved = self.resolve(previous)?;
        let not_found = resolved.is_missing();
        debug!(
            "resolved {} location: {:?} (auto_detected={}, not_found={})",
            self.spec.tool_name, resolved.path, resolved.auto_detected, not_found
        );

        if request.show_message != Some(false) || not_found {
            if not_found {
                self.notify_tool_missing(&settings);
            } else if request.show_message.unwrap_or(true) {
                self.ui
                    .notify_info(&settings_updated_message(&self.spec, &resolved.path));
            }
        }

        if !request.passive {
            let outcome = if not_found {
                DetectOutcome::Failed
            } else {
                DetectOutcome::Succeeded
            };
            self.telemetry.record_detect(outcome);
        }

        Ok(resolved)
    }

    fn resolve(&self, previous: Option<String>) -> Result<ToolLocation> {
        if let Some(stored) = previous.filter(|p| !p.is_empty()) {
            return Ok(ToolLocation {
                path: stored,
                auto_detected: false,
            });
        }

        let path = self
            .provider
            .locate()?
            .map(|p| p.to_string_lossy().into_owned())
            .unwrap_or_default();
        Ok(ToolLocation {
            path,
            auto_detected: true,
        })
    }

    fn notify_tool_missing(&self, settings: &ToolSettings<'_>) {
        let learn_more = format!("Get {}", self.spec.tool_name);
        let browse = format!("Locate {}...", self.spec.tool_name);
        let message = format!(
            "Cannot find {}, which is required to build and deploy serverless \
             functions. If you have already installed it, update your settings \
             by locating it.",
            self.spec.tool_name
        );

        match self
            .ui
            .notify_error(&message, &[learn_more.as_str(), browse.as_str()])
        {
            Some(0) => self.ui.open_external(self.spec.install_help_url),
            Some(1) => {
                let picked = self.ui.pick_file();
                if picked.len() == 1 {
                    let path = picked[0].to_string_lossy().into_owned();
                    self.persist_override(settings, &path);
                }
            }
            _ => {}
        }
    }

    fn persist_override(&self, settings: &ToolSettings<'_>, path: &str) {
        match settings.set_location(path) {
            Ok(()) => self
                .ui
                .notify_info(&settings_updated_message(&self.spec, path)),
            Err(e) => {
                warn!("failed to persist {} location override: {e}", self.spec.tool_name);
                self.ui.notify_error(
                    &format!("Could not save the {} location: {e}", self.spec.tool_name),
                    &[],
                );
            }
        }
    }
}

fn settings_updated_message(spec: &ToolSpec, location: &str) -> String {
    format!("Settings updated. {} location: {location}", spec.tool_name)
}
