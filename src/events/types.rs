//! Application events for inter-module communication.
//!
//! These events represent high-level application actions that can be
//! published by any module and handled by the event dispatcher.
//! This module is pure Rust with no FFI dependencies, making it fully testable.

/// Application-level events for decoupled communication between modules.
///
/// Events flow from producers (buttons, status menu, workspace observers)
/// through the EventBus to the dispatcher, which executes the actions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    // === Window Events ===
    /// Bring the main window to front
    ShowMainWindow,

    /// Open the setup flow (first launch or from the status menu)
    ShowSetup,

    // === Setup Flow ===
    /// Move the setup flow one page forward
    SetupNext,

    /// Move the setup flow one page back
    SetupBack,

    /// User finished the last setup page
    SetupFinished,

    /// Setup window was closed before finishing
    SetupClosed,

    // === Focus Actions ===
    /// Hide every app not on the whitelist
    HideOthers,

    /// Re-read the running apps list
    RefreshApps,

    /// Whitelist text field was edited
    WhitelistChanged,

    /// Append a running app to the whitelist
    AddToWhitelist(String),

    // === Permission ===
    /// Show the system Accessibility prompt
    RequestPermission,

    /// Open System Settings at the Accessibility pane
    OpenAccessibilitySettings,

    /// Permission poll timer fired
    PermissionPolled,

    // === System Events ===
    /// An application launched or terminated
    WorkspaceChanged,

    /// This app came to the front (permission may have changed meanwhile)
    AppActivated,

    /// Quit the application
    Quit,
}

impl AppEvent {
    /// Returns true if handling this event changes which apps are running
    /// or visible, so the list must be read again afterwards.
    pub fn refreshes_app_list(&self) -> bool {
        matches!(
            self,
            AppEvent::RefreshApps | AppEvent::WorkspaceChanged | AppEvent::ShowMainWindow
        )
    }

    /// Returns a human-readable description of the event for debugging.
    pub fn description(&self) -> &'static str {
        match self {
            AppEvent::ShowMainWindow => "Show main window",
            AppEvent::ShowSetup => "Show setup flow",
            AppEvent::SetupNext => "Next setup page",
            AppEvent::SetupBack => "Previous setup page",
            AppEvent::SetupFinished => "Setup finished",
            AppEvent::SetupClosed => "Setup window closed",
            AppEvent::HideOthers => "Hide non-whitelisted apps",
            AppEvent::RefreshApps => "Refresh running apps",
            AppEvent::WhitelistChanged => "Whitelist edited",
            AppEvent::AddToWhitelist(_) => "Add app to whitelist",
            AppEvent::RequestPermission => "Request accessibility permission",
            AppEvent::OpenAccessibilitySettings => "Open accessibility settings",
            AppEvent::PermissionPolled => "Permission poll",
            AppEvent::WorkspaceChanged => "Running apps changed",
            AppEvent::AppActivated => "App activated",
            AppEvent::Quit => "Quit",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_refresh_required_for_workspace_events() {
        assert!(AppEvent::RefreshApps.refreshes_app_list());
        assert!(AppEvent::WorkspaceChanged.refreshes_app_list());
        assert!(AppEvent::ShowMainWindow.refreshes_app_list());
    }

    #[test]
    fn test_refresh_not_required_for_other_events() {
        assert!(!AppEvent::HideOthers.refreshes_app_list());
        assert!(!AppEvent::SetupNext.refreshes_app_list());
        assert!(!AppEvent::WhitelistChanged.refreshes_app_list());
        assert!(!AppEvent::Quit.refreshes_app_list());
        assert!(!AppEvent::AppActivated.refreshes_app_list());
    }

    #[test]
    fn test_event_equality() {
        assert_eq!(AppEvent::HideOthers, AppEvent::HideOthers);
        assert_ne!(AppEvent::HideOthers, AppEvent::RefreshApps);
        assert_ne!(
            AppEvent::AddToWhitelist("Mail".into()),
            AppEvent::AddToWhitelist("Notes".into())
        );
    }

    #[test]
    fn test_event_debug() {
        let event = AppEvent::HideOthers;
        assert_eq!(format!("{:?}", event), "HideOthers");
    }

    #[test]
    fn test_all_events_have_descriptions() {
        let events = [
            AppEvent::ShowMainWindow,
            AppEvent::ShowSetup,
            AppEvent::SetupNext,
            AppEvent::SetupBack,
            AppEvent::SetupFinished,
            AppEvent::SetupClosed,
            AppEvent::HideOthers,
            AppEvent::RefreshApps,
            AppEvent::WhitelistChanged,
            AppEvent::AddToWhitelist(String::new()),
            AppEvent::RequestPermission,
            AppEvent::OpenAccessibilitySettings,
            AppEvent::PermissionPolled,
            AppEvent::WorkspaceChanged,
            AppEvent::AppActivated,
            AppEvent::Quit,
        ];

        for event in events {
            assert!(!event.description().is_empty());
        }
    }
}
