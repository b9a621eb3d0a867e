//! Tests for the model layer (FocusState and the setup flow).

use focusmode::model::{permission_status_text, status_for_report};
use focusmode::{Error, FocusState, HideReport, SetupStep, SetupWizard};

fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

// === Hide Action Tests ===

#[test]
fn focus_state_cannot_hide_by_default() {
    let state = FocusState::default();
    assert!(!state.can_hide());
}

#[test]
fn focus_state_cannot_hide_with_blank_whitelist() {
    let mut state = FocusState::default();
    state.set_whitelist_text(" , ,\n ");
    assert!(!state.can_hide());
}

#[test]
fn focus_state_can_hide_with_one_entry() {
    let mut state = FocusState::default();
    state.set_whitelist_text("Safari");
    assert!(state.can_hide());
}

#[test]
fn focus_state_keeps_raw_text() {
    let mut state = FocusState::default();
    state.set_whitelist_text("  Safari,, ");
    assert_eq!(state.whitelist_text, "  Safari,, ");
    assert_eq!(state.whitelist().len(), 1);
}

// === Add To Whitelist Tests ===

#[test]
fn add_to_whitelist_into_empty_text() {
    let mut state = FocusState::default();
    assert!(state.add_to_whitelist("Safari"));
    assert_eq!(state.whitelist_text, "Safari");
}

#[test]
fn add_to_whitelist_appends_with_comma() {
    let mut state = FocusState::default();
    state.set_whitelist_text("Safari");
    assert!(state.add_to_whitelist("Mail"));
    assert_eq!(state.whitelist_text, "Safari, Mail");
}

#[test]
fn add_to_whitelist_after_trailing_comma() {
    let mut state = FocusState::default();
    state.set_whitelist_text("Safari, ");
    assert!(state.add_to_whitelist("Mail"));
    assert_eq!(state.whitelist_text, "Safari, Mail");
}

#[test]
fn add_to_whitelist_ignores_existing_name() {
    let mut state = FocusState::default();
    state.set_whitelist_text("Safari");
    assert!(!state.add_to_whitelist("safari"));
    assert_eq!(state.whitelist_text, "Safari");
}

#[test]
fn add_to_whitelist_ignores_blank_name() {
    let mut state = FocusState::default();
    assert!(!state.add_to_whitelist("  "));
    assert!(state.whitelist_text.is_empty());
}

#[test]
fn whitelisted_running_filters_running_apps() {
    let mut state = FocusState::default();
    state.set_running_apps(names(&["Finder", "Mail", "Safari"]));
    state.set_whitelist_text("safari, Xcode");
    assert_eq!(state.whitelisted_running(), vec!["Safari"]);
}

// === Status Text Tests ===

#[test]
fn status_for_empty_report() {
    assert_eq!(status_for_report(&HideReport::default()), "Nothing to hide");
}

#[test]
fn status_for_single_hidden_app() {
    let report = HideReport {
        hidden: names(&["Mail"]),
        ..Default::default()
    };
    assert_eq!(status_for_report(&report), "Hid 1 app");
}

#[test]
fn status_counts_failures() {
    let report = HideReport {
        hidden: names(&["Mail", "Music"]),
        kept: names(&["Safari"]),
        failed: names(&["Finder"]),
    };
    assert_eq!(status_for_report(&report), "Hid 2 apps, 1 failed");
}

#[test]
fn record_error_sets_permission_hint() {
    let mut state = FocusState::default();
    state.record_error(&Error::AccessibilityNotGranted);
    assert!(state.status.contains("Accessibility"));
}

#[test]
fn record_hide_replaces_status() {
    let mut state = FocusState::default();
    state.record_error(&Error::AccessibilityNotGranted);
    state.record_hide(&HideReport::default());
    assert_eq!(state.status, "Nothing to hide");
}

// === Setup Flow Tests ===

#[test]
fn setup_starts_on_welcome() {
    let wizard = SetupWizard::new();
    assert_eq!(wizard.step(), SetupStep::Welcome);
    assert!(wizard.is_first());
    assert!(!wizard.is_last());
    assert_eq!(wizard.progress(), "1 of 3");
}

#[test]
fn setup_pages_forward_in_order() {
    let mut wizard = SetupWizard::new();
    assert!(wizard.next());
    assert_eq!(wizard.step(), SetupStep::Permission);
    assert!(wizard.next());
    assert_eq!(wizard.step(), SetupStep::Ready);
    assert!(wizard.is_last());
}

#[test]
fn setup_next_clamps_at_last_step() {
    let mut wizard = SetupWizard::new();
    wizard.next();
    wizard.next();
    assert!(!wizard.next());
    assert_eq!(wizard.index(), wizard.count() - 1);
}

#[test]
fn setup_back_clamps_at_first_step() {
    let mut wizard = SetupWizard::new();
    assert!(!wizard.back());
    assert_eq!(wizard.index(), 0);

    wizard.next();
    assert!(wizard.back());
    assert_eq!(wizard.step(), SetupStep::Welcome);
}

#[test]
fn setup_polls_only_on_permission_step() {
    let mut wizard = SetupWizard::new();
    assert!(!wizard.polls_permission());
    wizard.next();
    assert!(wizard.polls_permission());
    wizard.next();
    assert!(!wizard.polls_permission());
}

#[test]
fn setup_next_label_on_last_step() {
    let mut wizard = SetupWizard::new();
    assert_eq!(wizard.next_label(), "Continue");
    wizard.next();
    wizard.next();
    assert_eq!(wizard.next_label(), "Start");
}

#[test]
fn setup_steps_have_text() {
    for step in SetupStep::ALL {
        assert!(!step.title().is_empty());
        assert!(!step.body().is_empty());
    }
}

#[test]
fn permission_text_differs_by_state() {
    assert_ne!(permission_status_text(true), permission_status_text(false));
}
