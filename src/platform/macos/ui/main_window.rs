//! Main window: whitelist entry, running apps and the "Hide Others" action.
//!
//! Layout (top to bottom): permission line, whitelist field, add-app popup
//! with refresh, running apps list, status line and the action button.

use crate::model::constants::{APP_NAME, MAIN_WINDOW_SIZE, WHITELIST_PLACEHOLDER};
use crate::model::setup::permission_status_text;
use crate::model::FocusState;
use crate::platform::macos::app::with_context;
use crate::platform::macos::ffi::bridge::{
    get_class, get_id_ivar, id, msg_send, nil, nsstring_id, nsstring_to_string, sel, set_id_ivar, NO,
};
use crate::platform::macos::ui::widgets::{
    add_subviews, make_button, make_label, make_read_only_text, make_text_field, make_window,
    present, rect, set_enabled, set_hidden, set_text,
};

const ADD_APP_TITLE: &str = "Add running app…";

/// Create the main window on first use, then bring it to front.
///
/// # Safety
/// `controller` must be the FocusController. Main thread only.
pub unsafe fn show_main_window(controller: id) {
    let mut window = get_id_ivar(controller, "_mainWindow");
    if window == nil {
        window = build_main_window(controller);
        set_id_ivar(controller, "_mainWindow", window);
    }
    render_main_window(controller);
    present(window);
}

unsafe fn build_main_window(controller: id) -> id {
    let (w, h) = MAIN_WINDOW_SIZE;
    let window = make_window(APP_NAME, w, h);

    let permission_label = make_label(rect(20.0, h - 36.0, w - 180.0, 20.0), "");
    let permission_button = make_button(
        rect(w - 160.0, h - 42.0, 140.0, 30.0),
        "Open Settings…",
        controller,
        sel!(openAccessibilitySettings:),
    );

    let whitelist_label = make_label(
        rect(20.0, h - 70.0, w - 40.0, 20.0),
        "Apps to keep visible (comma separated):",
    );
    let whitelist_field = make_text_field(rect(20.0, h - 98.0, w - 40.0, 24.0), WHITELIST_PLACEHOLDER);
    let _: () = msg_send![whitelist_field, setDelegate: controller];

    let apps_popup: id = msg_send![get_class("NSPopUpButton"), alloc];
    let apps_popup: id = msg_send![
        apps_popup,
        initWithFrame: rect(20.0, h - 134.0, 240.0, 26.0),
        pullsDown: NO
    ];
    let _: () = msg_send![apps_popup, setTarget: controller];
    let _: () = msg_send![apps_popup, setAction: sel!(addRunningApp:)];

    let refresh_button = make_button(
        rect(w - 120.0, h - 136.0, 100.0, 30.0),
        "Refresh",
        controller,
        sel!(refreshApps:),
    );

    let apps_label = make_label(rect(20.0, h - 164.0, w - 40.0, 20.0), "Running apps:");
    let (apps_scroll, apps_text) = make_read_only_text(rect(20.0, 90.0, w - 40.0, h - 260.0));

    let status_label = make_label(rect(20.0, 56.0, w - 40.0, 20.0), "");
    let hide_button = make_button(
        rect(w - 160.0, 14.0, 140.0, 32.0),
        "Hide Others",
        controller,
        sel!(hideOthers:),
    );
    let _: () = msg_send![hide_button, setKeyEquivalent: nsstring_id("\r")];

    add_subviews(
        window,
        &[
            permission_label,
            permission_button,
            whitelist_label,
            whitelist_field,
            apps_popup,
            refresh_button,
            apps_label,
            apps_scroll,
            status_label,
            hide_button,
        ],
    );

    set_id_ivar(controller, "_whitelistField", whitelist_field);
    set_id_ivar(controller, "_hideButton", hide_button);
    set_id_ivar(controller, "_appsText", apps_text);
    set_id_ivar(controller, "_appsPopup", apps_popup);
    set_id_ivar(controller, "_statusLabel", status_label);
    set_id_ivar(controller, "_permissionLabel", permission_label);
    set_id_ivar(controller, "_permissionButton", permission_button);

    // Restore text typed before the window was closed
    if let Some(text) = with_context(|ctx| ctx.state.whitelist_text.clone()) {
        set_text(whitelist_field, &text);
    }

    window
}

/// Push the current [`FocusState`] and permission flag into the controls.
/// No-op until the window has been built.
///
/// # Safety
/// `controller` must be the FocusController. Main thread only.
pub unsafe fn render_main_window(controller: id) {
    if get_id_ivar(controller, "_mainWindow") == nil {
        return;
    }
    let Some((state, granted)) =
        with_context(|ctx| (ctx.state.clone(), ctx.manager.has_permission()))
    else {
        return;
    };

    set_enabled(get_id_ivar(controller, "_hideButton"), state.can_hide());
    set_text(get_id_ivar(controller, "_statusLabel"), &state.status);
    set_text(
        get_id_ivar(controller, "_permissionLabel"),
        permission_status_text(granted),
    );
    set_hidden(get_id_ivar(controller, "_permissionButton"), granted);

    render_app_list(controller, &state);
}

unsafe fn render_app_list(controller: id, state: &FocusState) {
    let kept = state.whitelisted_running();
    let is_kept = |name: &str| kept.contains(&name);

    let text_view = get_id_ivar(controller, "_appsText");
    if text_view != nil {
        let body = state
            .running_apps
            .iter()
            .map(|name| {
                let marker = if is_kept(name) { "●" } else { " " };
                format!("{} {}", marker, name)
            })
            .collect::<Vec<_>>()
            .join("\n");
        let _: () = msg_send![text_view, setString: nsstring_id(&body)];
    }

    let popup = get_id_ivar(controller, "_appsPopup");
    if popup != nil {
        let _: () = msg_send![popup, removeAllItems];
        let _: () = msg_send![popup, addItemWithTitle: nsstring_id(ADD_APP_TITLE)];
        for name in state.running_apps.iter().filter(|n| !is_kept(n)) {
            let _: () = msg_send![popup, addItemWithTitle: nsstring_id(name)];
        }
        let _: () = msg_send![popup, selectItemAtIndex: 0isize];
    }
}

/// Current text of the whitelist field, if the window exists.
///
/// # Safety
/// `controller` must be the FocusController. Main thread only.
pub unsafe fn whitelist_field_text(controller: id) -> Option<String> {
    let field = get_id_ivar(controller, "_whitelistField");
    if field == nil {
        return None;
    }
    let value: id = msg_send![field, stringValue];
    Some(nsstring_to_string(value))
}

/// Replace the whitelist field text.
///
/// # Safety
/// `controller` must be the FocusController. Main thread only.
pub unsafe fn set_whitelist_field_text(controller: id, text: &str) {
    set_text(get_id_ivar(controller, "_whitelistField"), text);
}
