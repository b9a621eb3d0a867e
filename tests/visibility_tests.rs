//! Tests for the visibility manager over fake workspace/accessibility.

use std::cell::{Cell, RefCell};

use focusmode::{
    Accessibility, ActivationPolicy, Error, FocusState, Result, RunningApp, VisibilityManager,
    Whitelist, Workspace,
};

const OWN_PID: i32 = 4242;

fn app(pid: i32, name: &str, policy: ActivationPolicy) -> RunningApp {
    RunningApp {
        pid,
        name: name.to_string(),
        bundle_id: Some(format!("com.example.{}", name.to_lowercase())),
        policy,
    }
}

fn regular(pid: i32, name: &str) -> RunningApp {
    app(pid, name, ActivationPolicy::Regular)
}

#[derive(Default)]
struct FakeWorkspace {
    apps: Vec<RunningApp>,
    failing: Vec<String>,
    hidden: RefCell<Vec<String>>,
}

impl FakeWorkspace {
    fn with_apps(apps: Vec<RunningApp>) -> Self {
        Self {
            apps,
            ..Default::default()
        }
    }

    fn failing_on(mut self, name: &str) -> Self {
        self.failing.push(name.to_string());
        self
    }
}

impl Workspace for &FakeWorkspace {
    fn running_apps(&self) -> Vec<RunningApp> {
        self.apps.clone()
    }

    fn hide(&self, app: &RunningApp) -> Result<()> {
        if self.failing.contains(&app.name) {
            return Err(Error::HideFailed {
                name: app.name.clone(),
            });
        }
        self.hidden.borrow_mut().push(app.name.clone());
        Ok(())
    }

    fn own_pid(&self) -> i32 {
        OWN_PID
    }
}

#[derive(Default)]
struct FakeAccessibility {
    trusted: bool,
    prompts: Cell<usize>,
    settings_opened: Cell<usize>,
}

impl FakeAccessibility {
    fn trusted() -> Self {
        Self {
            trusted: true,
            ..Default::default()
        }
    }

    fn untrusted() -> Self {
        Self::default()
    }
}

impl Accessibility for &FakeAccessibility {
    fn is_trusted(&self) -> bool {
        self.trusted
    }

    fn prompt(&self) {
        self.prompts.set(self.prompts.get() + 1);
    }

    fn open_settings(&self) -> Result<()> {
        self.settings_opened.set(self.settings_opened.get() + 1);
        Ok(())
    }
}

// === Listing Tests ===

#[test]
fn visible_apps_only_regular() {
    let ws = FakeWorkspace::with_apps(vec![
        regular(1, "Safari"),
        app(2, "Rectangle", ActivationPolicy::Accessory),
        app(3, "loginwindow", ActivationPolicy::Prohibited),
        regular(4, "Mail"),
    ]);
    let ax = FakeAccessibility::trusted();
    let manager = VisibilityManager::new(&ws, &ax);

    assert_eq!(manager.visible_app_names(), vec!["Mail", "Safari"]);
}

#[test]
fn visible_apps_sorted_case_insensitively() {
    let ws = FakeWorkspace::with_apps(vec![
        regular(1, "zoom.us"),
        regular(2, "Xcode"),
        regular(3, "iTerm2"),
        regular(4, "Activity Monitor"),
    ]);
    let ax = FakeAccessibility::trusted();
    let manager = VisibilityManager::new(&ws, &ax);

    assert_eq!(
        manager.visible_app_names(),
        vec!["Activity Monitor", "iTerm2", "Xcode", "zoom.us"]
    );
}

#[test]
fn visible_apps_skip_blank_and_duplicate_names() {
    let ws = FakeWorkspace::with_apps(vec![
        regular(1, "Terminal"),
        regular(2, "  "),
        regular(3, "Terminal"),
    ]);
    let ax = FakeAccessibility::trusted();
    let manager = VisibilityManager::new(&ws, &ax);

    assert_eq!(manager.visible_app_names(), vec!["Terminal"]);
}

#[test]
fn visible_apps_do_not_need_permission() {
    let ws = FakeWorkspace::with_apps(vec![regular(1, "Safari")]);
    let ax = FakeAccessibility::untrusted();
    let manager = VisibilityManager::new(&ws, &ax);

    assert_eq!(manager.visible_app_names(), vec!["Safari"]);
    assert_eq!(ax.prompts.get(), 0);
}

// === Hide Tests ===

#[test]
fn hide_without_permission_prompts_and_hides_nothing() {
    let ws = FakeWorkspace::with_apps(vec![regular(1, "Safari"), regular(2, "Mail")]);
    let ax = FakeAccessibility::untrusted();
    let manager = VisibilityManager::new(&ws, &ax);

    let result = manager.hide_all_except(&Whitelist::parse("Safari"));

    assert_eq!(result, Err(Error::AccessibilityNotGranted));
    assert!(ws.hidden.borrow().is_empty());
    assert_eq!(ax.prompts.get(), 1);
}

#[test]
fn hide_keeps_whitelisted_apps_ignoring_case() {
    let ws = FakeWorkspace::with_apps(vec![
        regular(1, "Safari"),
        regular(2, "Mail"),
        regular(3, "Notes"),
    ]);
    let ax = FakeAccessibility::trusted();
    let manager = VisibilityManager::new(&ws, &ax);

    let report = manager
        .hide_all_except(&Whitelist::parse("safari, NOTES"))
        .unwrap();

    assert_eq!(*ws.hidden.borrow(), vec!["Mail"]);
    assert_eq!(report.hidden, vec!["Mail"]);
    assert_eq!(report.kept, vec!["Safari", "Notes"]);
    assert!(report.is_clean());
}

#[test]
fn hide_continues_after_failure() {
    let ws = FakeWorkspace::with_apps(vec![
        regular(1, "Finder"),
        regular(2, "Mail"),
        regular(3, "Music"),
    ])
    .failing_on("Mail");
    let ax = FakeAccessibility::trusted();
    let manager = VisibilityManager::new(&ws, &ax);

    let report = manager
        .hide_all_except(&Whitelist::parse("Safari"))
        .unwrap();

    assert_eq!(*ws.hidden.borrow(), vec!["Finder", "Music"]);
    assert_eq!(report.failed, vec!["Mail"]);
    assert!(!report.is_clean());
}

#[test]
fn hide_skips_non_regular_apps() {
    let ws = FakeWorkspace::with_apps(vec![
        regular(1, "Mail"),
        app(2, "Bartender", ActivationPolicy::Accessory),
        app(3, "WindowServer", ActivationPolicy::Prohibited),
    ]);
    let ax = FakeAccessibility::trusted();
    let manager = VisibilityManager::new(&ws, &ax);

    manager
        .hide_all_except(&Whitelist::parse("Safari"))
        .unwrap();

    assert_eq!(*ws.hidden.borrow(), vec!["Mail"]);
}

#[test]
fn hide_never_hides_own_process() {
    let ws = FakeWorkspace::with_apps(vec![regular(OWN_PID, "Focus Mode"), regular(7, "Mail")]);
    let ax = FakeAccessibility::trusted();
    let manager = VisibilityManager::new(&ws, &ax);

    let report = manager
        .hide_all_except(&Whitelist::parse("Safari"))
        .unwrap();

    assert_eq!(*ws.hidden.borrow(), vec!["Mail"]);
    assert!(!report.hidden.iter().any(|n| n == "Focus Mode"));
}

#[test]
fn hide_with_everything_whitelisted_hides_nothing() {
    let ws = FakeWorkspace::with_apps(vec![regular(1, "Safari"), regular(2, "Mail")]);
    let ax = FakeAccessibility::trusted();
    let manager = VisibilityManager::new(&ws, &ax);

    let report = manager
        .hide_all_except(&Whitelist::parse("Mail, Safari"))
        .unwrap();

    assert!(report.hidden.is_empty());
    assert!(ws.hidden.borrow().is_empty());
}

#[test]
fn hide_with_empty_whitelist_hides_nothing() {
    let ws = FakeWorkspace::with_apps(vec![regular(1, "Safari"), regular(2, "Mail")]);
    let ax = FakeAccessibility::trusted();
    let manager = VisibilityManager::new(&ws, &ax);

    // State of a fresh main window: the button is disabled, the menu item is not
    let state = FocusState::default();
    assert!(!state.can_hide());

    let report = manager.hide_all_except(&state.whitelist()).unwrap();

    assert!(ws.hidden.borrow().is_empty());
    assert!(report.hidden.is_empty());
    assert!(report.kept.is_empty());
}

#[test]
fn hide_with_blank_whitelist_text_does_not_prompt() {
    let ws = FakeWorkspace::with_apps(vec![regular(1, "Safari")]);
    let ax = FakeAccessibility::untrusted();
    let manager = VisibilityManager::new(&ws, &ax);

    let report = manager.hide_all_except(&Whitelist::parse(" , \n ")).unwrap();

    assert_eq!(report, Default::default());
    assert!(ws.hidden.borrow().is_empty());
    assert_eq!(ax.prompts.get(), 0);
}

// === Permission Tests ===

#[test]
fn permission_queries_pass_through() {
    let ws = FakeWorkspace::default();
    let ax = FakeAccessibility::untrusted();
    let manager = VisibilityManager::new(&ws, &ax);

    assert!(!manager.has_permission());
    manager.request_permission();
    assert_eq!(ax.prompts.get(), 1);
    assert!(manager.open_permission_settings().is_ok());
    assert_eq!(ax.settings_opened.get(), 1);
}
