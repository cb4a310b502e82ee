//! Feature flag access over the settings store.
//!
//! Flags live under `toggle.<key>` in the settings document. Keys listed as
//! session-permanent are snapshotted once when the gate is constructed and
//! keep that value for the life of the gate; all other keys are read from
//! the store on every call.

use std::collections::HashMap;

use serde_json::Value;

use crate::settings::{SettingsStore, TOGGLE_PREFIX};

/// Feature gate with a construction-time snapshot for permanent keys.
pub struct FeatureGate<'a> {
    store: &'a dyn SettingsStore,
    permanent: HashMap<String, bool>,
}

impl<'a> FeatureGate<'a> {
    /// Builds a gate over `store`, snapshotting `permanent_keys` now.
    ///
    /// Changing a snapshotted key in the store afterwards has no effect
    /// until a new gate is constructed.
    #[must_use]
    pub fn new(store: &'a dyn SettingsStore, permanent_keys: &[&str]) -> Self {
        let permanent = permanent_keys
            .iter()
            .map(|key| ((*key).to_string(), read_flag(store, key)))
            .collect();
        Self { store, permanent }
    }

    /// Returns whether the feature `key` is active.
    ///
    /// Unset and malformed flags read as inactive.
    #[must_use]
    pub fn is_active(&self, key: &str) -> bool {
        if let Some(&active) = self.permanent.get(key) {
            return active;
        }
        read_flag(self.store, key)
    }
}

fn read_flag(store: &dyn SettingsStore, key: &str) -> bool {
    store
        .read(&format!("{TOGGLE_PREFIX}{key}"))
        .is_some_and(|value| value_as_flag(&value))
}

/// Sanitizes an arbitrary stored value to a strict boolean.
fn value_as_flag(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::HashMap;

    use serde_json::json;

    use super::*;
    use crate::error::Result;

    #[derive(Default)]
    struct MemoryStore {
        map: RefCell<HashMap<String, Value>>,
    }

    impl MemoryStore {
        fn set(&self, key: &str, value: Value) {
            self.map.borrow_mut().insert(key.to_string(), value);
        }
    }

    impl SettingsStore for MemoryStore {
        fn read(&self, key: &str) -> Option<Value> {
            self.map.borrow().get(key).cloned()
        }

        fn write(&self, key: &str, value: Value) -> Result<()> {
            self.set(key, value);
            Ok(())
        }
    }

    #[test]
    fn unset_flag_is_inactive() {
        let store = MemoryStore::default();
        let gate = FeatureGate::new(&store, &[]);
        assert!(!gate.is_active("newDeployFlow"));
    }

    #[test]
    fn boolean_flag_reads_through() {
        let store = MemoryStore::default();
        store.set("toggle.newDeployFlow", json!(true));
        let gate = FeatureGate::new(&store, &[]);
        assert!(gate.is_active("newDeployFlow"));

        store.set("toggle.newDeployFlow", json!(false));
        assert!(!gate.is_active("newDeployFlow"));
    }

    #[test]
    fn non_boolean_values_sanitize_to_bool() {
        let store = MemoryStore::default();
        let gate = FeatureGate::new(&store, &[]);

        store.set("toggle.f", json!("yes"));
        assert!(gate.is_active("f"));
        store.set("toggle.f", json!(""));
        assert!(!gate.is_active("f"));
        store.set("toggle.f", json!(1));
        assert!(gate.is_active("f"));
        store.set("toggle.f", json!(0));
        assert!(!gate.is_active("f"));
        store.set("toggle.f", json!(null));
        assert!(!gate.is_active("f"));
        store.set("toggle.f", json!({}));
        assert!(gate.is_active("f"));
    }

    #[test]
    fn permanent_key_keeps_construction_value() {
        let store = MemoryStore::default();
        store.set("toggle.pinned", json!(true));
        let gate = FeatureGate::new(&store, &["pinned"]);

        store.set("toggle.pinned", json!(false));
        assert!(gate.is_active("pinned"), "snapshot should win");
    }

    #[test]
    fn non_permanent_key_tracks_store_changes() {
        let store = MemoryStore::default();
        let gate = FeatureGate::new(&store, &["pinned"]);

        assert!(!gate.is_active("dynamic"));
        store.set("toggle.dynamic", json!(true));
        assert!(gate.is_active("dynamic"));
    }

    #[test]
    fn permanent_key_unset_at_construction_stays_inactive() {
        let store = MemoryStore::default();
        let gate = FeatureGate::new(&store, &["pinned"]);

        store.set("toggle.pinned", json!(true));
        assert!(!gate.is_active("pinned"));
    }
}
