//! Main screen state (pure Rust, no FFI).
//!
//! Holds what the main window displays: the whitelist text as typed, the
//! running application names and the status line.

use crate::error::Error;
use crate::visibility::HideReport;
use crate::whitelist::Whitelist;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FocusState {
    /// Whitelist text exactly as typed by the user.
    pub whitelist_text: String,
    /// Display names of running regular apps, sorted.
    pub running_apps: Vec<String>,
    /// Inline status message.
    pub status: String,
}

impl FocusState {
    pub fn set_whitelist_text(&mut self, text: impl Into<String>) {
        self.whitelist_text = text.into();
    }

    pub fn whitelist(&self) -> Whitelist {
        Whitelist::parse(&self.whitelist_text)
    }

    /// The "Hide others" action needs at least one whitelisted app.
    pub fn can_hide(&self) -> bool {
        !self.whitelist().is_empty()
    }

    pub fn set_running_apps(&mut self, names: Vec<String>) {
        self.running_apps = names;
    }

    /// Append a name to the whitelist text. Returns false when it was
    /// already whitelisted (ignoring case) or blank.
    pub fn add_to_whitelist(&mut self, name: &str) -> bool {
        let name = name.trim();
        if name.is_empty() || self.whitelist().contains(name) {
            return false;
        }
        let current = self.whitelist_text.trim_end();
        self.whitelist_text = if current.is_empty() {
            name.to_string()
        } else if current.ends_with(',') {
            format!("{} {}", current, name)
        } else {
            format!("{}, {}", current, name)
        };
        true
    }

    pub fn record_hide(&mut self, report: &HideReport) {
        self.status = status_for_report(report);
    }

    pub fn record_error(&mut self, err: &Error) {
        self.status = err.status_text();
    }

    /// Names currently running that the whitelist would keep visible.
    pub fn whitelisted_running(&self) -> Vec<&str> {
        let list = self.whitelist();
        self.running_apps
            .iter()
            .filter(|n| list.contains(n))
            .map(String::as_str)
            .collect()
    }
}

/// Status line for a finished hide pass.
pub fn status_for_report(report: &HideReport) -> String {
    let hidden = report.hidden.len();
    let failed = report.failed.len();
    if hidden == 0 && failed == 0 {
        return "Nothing to hide".to_string();
    }
    let noun = if hidden == 1 { "app" } else { "apps" };
    if failed == 0 {
        format!("Hid {} {}", hidden, noun)
    } else {
        format!("Hid {} {}, {} failed", hidden, noun, failed)
    }
}
