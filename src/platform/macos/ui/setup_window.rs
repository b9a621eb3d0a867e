//! First-launch setup window.
//!
//! One window whose title, body and buttons are re-rendered for each
//! [`SetupStep`](crate::model::SetupStep). While the permission page is
//! visible a repeating timer re-checks the trust flag.

use tracing::debug;

use crate::model::constants::{PERMISSION_POLL_INTERVAL_SECS, SETUP_WINDOW_SIZE};
use crate::model::setup::permission_status_text;
use crate::model::{SetupStep, SetupWizard};
use crate::platform::macos::app::with_context;
use crate::platform::macos::ffi::bridge::{
    get_class, get_id_ivar, id, msg_send, nil, nsstring_id, sel, set_id_ivar, YES,
};
use crate::platform::macos::ui::widgets::{
    add_subviews, make_button, make_label, make_title_label, make_window, make_wrapping_label,
    present, rect, set_hidden, set_text,
};

/// Ivars cleared when the window goes away.
const SETUP_IVARS: &[&str] = &[
    "_setupWindow",
    "_setupTitle",
    "_setupBody",
    "_setupProgress",
    "_setupPermissionLabel",
    "_setupSettingsButton",
    "_setupBackButton",
    "_setupNextButton",
];

/// Open the setup window on its first page.
///
/// # Safety
/// `controller` must be the FocusController. Main thread only.
pub unsafe fn show_setup_window(controller: id) {
    with_context(|ctx| ctx.wizard = SetupWizard::new());

    let mut window = get_id_ivar(controller, "_setupWindow");
    if window == nil {
        window = build_setup_window(controller);
        set_id_ivar(controller, "_setupWindow", window);
    }
    render_setup_window(controller);
    present(window);
}

unsafe fn build_setup_window(controller: id) -> id {
    let (w, h) = SETUP_WINDOW_SIZE;
    let window = make_window("Focus Mode Setup", w, h);
    let _: () = msg_send![window, setDelegate: controller];

    let title = make_title_label(rect(24.0, h - 52.0, w - 48.0, 26.0), "", 18.0);
    let body = make_wrapping_label(rect(24.0, h - 140.0, w - 48.0, 80.0), "");
    let permission_label = make_label(rect(24.0, 66.0, w - 220.0, 20.0), "");
    let settings_button = make_button(
        rect(w - 190.0, 60.0, 166.0, 30.0),
        "Open System Settings",
        controller,
        sel!(openAccessibilitySettings:),
    );
    let progress = make_label(rect(24.0, 20.0, 80.0, 20.0), "");
    let back_button = make_button(
        rect(w - 232.0, 14.0, 100.0, 32.0),
        "Back",
        controller,
        sel!(setupBack:),
    );
    let next_button = make_button(
        rect(w - 124.0, 14.0, 100.0, 32.0),
        "Continue",
        controller,
        sel!(setupNext:),
    );
    let _: () = msg_send![next_button, setKeyEquivalent: nsstring_id("\r")];

    add_subviews(
        window,
        &[
            title,
            body,
            permission_label,
            settings_button,
            progress,
            back_button,
            next_button,
        ],
    );

    set_id_ivar(controller, "_setupTitle", title);
    set_id_ivar(controller, "_setupBody", body);
    set_id_ivar(controller, "_setupProgress", progress);
    set_id_ivar(controller, "_setupPermissionLabel", permission_label);
    set_id_ivar(controller, "_setupSettingsButton", settings_button);
    set_id_ivar(controller, "_setupBackButton", back_button);
    set_id_ivar(controller, "_setupNextButton", next_button);
    window
}

/// Render the current wizard page and start/stop the permission timer.
///
/// # Safety
/// `controller` must be the FocusController. Main thread only.
pub unsafe fn render_setup_window(controller: id) {
    if get_id_ivar(controller, "_setupWindow") == nil {
        return;
    }
    let Some((wizard, granted)) =
        with_context(|ctx| (ctx.wizard.clone(), ctx.manager.has_permission()))
    else {
        return;
    };
    let step = wizard.step();

    set_text(get_id_ivar(controller, "_setupTitle"), step.title());
    set_text(get_id_ivar(controller, "_setupBody"), step.body());
    set_text(get_id_ivar(controller, "_setupProgress"), &wizard.progress());

    let on_permission = step == SetupStep::Permission;
    let permission_label = get_id_ivar(controller, "_setupPermissionLabel");
    set_hidden(permission_label, !on_permission);
    set_text(permission_label, permission_status_text(granted));
    set_hidden(
        get_id_ivar(controller, "_setupSettingsButton"),
        !on_permission || granted,
    );

    set_hidden(get_id_ivar(controller, "_setupBackButton"), wizard.is_first());
    let next_button = get_id_ivar(controller, "_setupNextButton");
    if next_button != nil {
        let _: () = msg_send![next_button, setTitle: nsstring_id(wizard.next_label())];
    }

    if wizard.polls_permission() && !granted {
        start_permission_timer(controller);
    } else {
        stop_permission_timer(controller);
    }
}

/// Refresh only the permission line; stops polling once granted.
///
/// # Safety
/// `controller` must be the FocusController. Main thread only.
pub unsafe fn render_setup_permission(controller: id) {
    let Some(granted) = with_context(|ctx| ctx.manager.has_permission()) else {
        return;
    };
    set_text(
        get_id_ivar(controller, "_setupPermissionLabel"),
        permission_status_text(granted),
    );
    set_hidden(get_id_ivar(controller, "_setupSettingsButton"), granted);
    if granted {
        debug!("accessibility granted during setup");
        stop_permission_timer(controller);
    }
}

/// Close the window (if open) and forget its controls.
///
/// # Safety
/// `controller` must be the FocusController. Main thread only.
pub unsafe fn close_setup_window(controller: id) {
    let window = get_id_ivar(controller, "_setupWindow");
    if window != nil {
        // Clear first so windowWillClose: does not report a user close
        forget_setup_window(controller);
        let _: () = msg_send![window, setDelegate: nil];
        let _: () = msg_send![window, close];
    }
}

/// Drop references after the window closed and stop polling.
///
/// # Safety
/// `controller` must be the FocusController. Main thread only.
pub unsafe fn forget_setup_window(controller: id) {
    stop_permission_timer(controller);
    for name in SETUP_IVARS {
        set_id_ivar(controller, name, nil);
    }
}

unsafe fn start_permission_timer(controller: id) {
    if get_id_ivar(controller, "_permissionTimer") != nil {
        return;
    }
    let timer: id = msg_send![
        get_class("NSTimer"),
        scheduledTimerWithTimeInterval: PERMISSION_POLL_INTERVAL_SECS,
        target: controller,
        selector: sel!(pollPermission:),
        userInfo: nil,
        repeats: YES
    ];
    debug!("permission poll started");
    set_id_ivar(controller, "_permissionTimer", timer);
}

unsafe fn stop_permission_timer(controller: id) {
    let timer = get_id_ivar(controller, "_permissionTimer");
    if timer != nil {
        let _: () = msg_send![timer, invalidate];
        set_id_ivar(controller, "_permissionTimer", nil);
        debug!("permission poll stopped");
    }
}
