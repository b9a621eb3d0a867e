//! Configuration constants and default values.
//!
//! This module contains all application constants including NSUserDefaults
//! keys, timer intervals, the settings deep link and window geometry.

// === NSUserDefaults Keys ===

/// Key for the "first launch setup finished" flag.
pub const PREF_SETUP_COMPLETED: &str = "setupCompleted";

// === Timers ===

/// Interval of the permission poll while the setup flow waits for trust (seconds).
pub const PERMISSION_POLL_INTERVAL_SECS: f64 = 2.0;

/// Delay before refreshing the running-apps list after a hide (seconds).
/// Hidden apps need a moment before the workspace reports the change.
pub const REFRESH_AFTER_HIDE_DELAY_SECS: f64 = 0.5;

// === System Settings ===

/// Deep link to Privacy & Security → Accessibility.
pub const ACCESSIBILITY_SETTINGS_URL: &str =
    "x-apple.systempreferences:com.apple.preference.security?Privacy_Accessibility";

// === Window Geometry ===

/// Main window content size (width, height).
pub const MAIN_WINDOW_SIZE: (f64, f64) = (460.0, 420.0);

/// Setup window content size (width, height).
pub const SETUP_WINDOW_SIZE: (f64, f64) = (480.0, 260.0);

// === Text ===

/// Application name shown in titles and menus.
pub const APP_NAME: &str = "Focus Mode";

/// Placeholder for the whitelist field.
pub const WHITELIST_PLACEHOLDER: &str = "Safari, Xcode, Notes";

/// Default log filter when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "focusmode=info";
