//! Persisted settings.
//!
//! The only durable state is the "setup completed" flag. The backing store
//! is abstracted by [`Preferences`]; macOS uses NSUserDefaults
//! (`platform::macos::storage::UserDefaults`), tests and other platforms use
//! [`MemoryPreferences`].

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use tracing::debug;

use crate::model::constants::PREF_SETUP_COMPLETED;

/// Per-user key/value settings store.
pub trait Preferences {
    /// `None` when the key was never written.
    fn get_bool(&self, key: &str) -> Option<bool>;

    fn set_bool(&self, key: &str, value: bool);

    fn remove(&self, key: &str);
}

impl<P: Preferences + ?Sized> Preferences for &P {
    fn get_bool(&self, key: &str) -> Option<bool> {
        (**self).get_bool(key)
    }

    fn set_bool(&self, key: &str, value: bool) {
        (**self).set_bool(key, value)
    }

    fn remove(&self, key: &str) {
        (**self).remove(key)
    }
}

/// In-process store. Clones share the same map, so a clone behaves like the
/// same store opened again.
#[derive(Debug, Clone, Default)]
pub struct MemoryPreferences {
    values: Arc<Mutex<HashMap<String, bool>>>,
}

impl MemoryPreferences {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Preferences for MemoryPreferences {
    fn get_bool(&self, key: &str) -> Option<bool> {
        self.values
            .lock()
            .map(|map| map.get(key).copied())
            .unwrap_or(None)
    }

    fn set_bool(&self, key: &str, value: bool) {
        if let Ok(mut map) = self.values.lock() {
            map.insert(key.to_string(), value);
        }
    }

    fn remove(&self, key: &str) {
        if let Ok(mut map) = self.values.lock() {
            map.remove(key);
        }
    }
}

/// The "first launch setup finished" flag.
pub struct SetupFlag<P> {
    prefs: P,
}

impl<P: Preferences> SetupFlag<P> {
    pub fn new(prefs: P) -> Self {
        Self { prefs }
    }

    /// Unset reads as not completed.
    pub fn is_completed(&self) -> bool {
        self.prefs.get_bool(PREF_SETUP_COMPLETED).unwrap_or(false)
    }

    pub fn mark_completed(&self) {
        debug!("setup marked completed");
        self.prefs.set_bool(PREF_SETUP_COMPLETED, true);
    }

    /// Forget the flag so the setup flow runs on next launch.
    pub fn reset(&self) {
        debug!("setup flag reset");
        self.prefs.remove(PREF_SETUP_COMPLETED);
    }
}
