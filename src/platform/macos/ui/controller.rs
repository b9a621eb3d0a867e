//! FocusController: the NSObject subclass every control targets.
//!
//! It owns references to the windows and controls (as ivars) and turns
//! AppKit callbacks (button actions, text edits, timers, window delegate
//! calls) into [`AppEvent`]s, then runs the dispatcher.

use objc2::runtime::{AnyClass, AnyObject, ClassBuilder, Sel};

use crate::events::{publish, AppEvent};
use crate::platform::macos::ffi::bridge::{
    get_id_ivar, id, msg_send, nil, nsstring_to_string, sel, set_id_ivar,
};
use crate::platform::macos::handlers::dispatch_events;

/// Every `id` ivar of the controller.
const ID_IVARS: &[&std::ffi::CStr] = &[
    // Main window
    c"_mainWindow",
    c"_whitelistField",
    c"_hideButton",
    c"_appsText",
    c"_appsPopup",
    c"_statusLabel",
    c"_permissionLabel",
    c"_permissionButton",
    // Setup window
    c"_setupWindow",
    c"_setupTitle",
    c"_setupBody",
    c"_setupProgress",
    c"_setupPermissionLabel",
    c"_setupSettingsButton",
    c"_setupBackButton",
    c"_setupNextButton",
    c"_permissionTimer",
    // Menu bar
    c"_statusItem",
];

/// Register the controller class (once) and create the single instance.
///
/// # Safety
/// Must be called from the main thread.
pub unsafe fn create_controller() -> id {
    let class_name = c"FocusController";
    let cls = if let Some(cls) = AnyClass::get(class_name) {
        cls
    } else {
        let superclass = AnyClass::get(c"NSObject").expect("NSObject exists");
        let mut builder =
            ClassBuilder::new(class_name, superclass).expect("FocusController registered once");

        for name in ID_IVARS {
            builder.add_ivar::<id>(name);
        }
        register_methods(&mut builder);

        builder.register()
    };

    let controller: id = msg_send![cls, new];
    for name in ID_IVARS {
        let name = name.to_str().unwrap_or_default();
        set_id_ivar(controller, name, nil);
    }
    controller
}

unsafe fn register_methods(builder: &mut ClassBuilder) {
    // Main window
    builder.add_method(
        sel!(hideOthers:),
        hide_others as unsafe extern "C-unwind" fn(_, _, _),
    );
    builder.add_method(
        sel!(refreshApps:),
        refresh_apps as unsafe extern "C-unwind" fn(_, _, _),
    );
    builder.add_method(
        sel!(refreshAfterHide:),
        refresh_apps as unsafe extern "C-unwind" fn(_, _, _),
    );
    builder.add_method(
        sel!(addRunningApp:),
        add_running_app as unsafe extern "C-unwind" fn(_, _, _),
    );
    builder.add_method(
        sel!(controlTextDidChange:),
        control_text_did_change as unsafe extern "C-unwind" fn(_, _, _),
    );

    // Permission
    builder.add_method(
        sel!(openAccessibilitySettings:),
        open_accessibility_settings as unsafe extern "C-unwind" fn(_, _, _),
    );
    builder.add_method(
        sel!(pollPermission:),
        poll_permission as unsafe extern "C-unwind" fn(_, _, _),
    );

    // Setup flow
    builder.add_method(
        sel!(setupNext:),
        setup_next as unsafe extern "C-unwind" fn(_, _, _),
    );
    builder.add_method(
        sel!(setupBack:),
        setup_back as unsafe extern "C-unwind" fn(_, _, _),
    );
    builder.add_method(
        sel!(windowWillClose:),
        window_will_close as unsafe extern "C-unwind" fn(_, _, _),
    );

    // Status bar menu
    builder.add_method(
        sel!(showMainWindow:),
        show_main_window as unsafe extern "C-unwind" fn(_, _, _),
    );
    builder.add_method(
        sel!(showSetup:),
        show_setup as unsafe extern "C-unwind" fn(_, _, _),
    );
    builder.add_method(
        sel!(quitApp:),
        quit_app as unsafe extern "C-unwind" fn(_, _, _),
    );
}

/// Publish and handle immediately.
unsafe fn emit(this: &mut AnyObject, event: AppEvent) {
    publish(event);
    dispatch_events(this as *mut _ as id);
}

unsafe extern "C-unwind" fn hide_others(this: &mut AnyObject, _cmd: Sel, _sender: id) {
    emit(this, AppEvent::HideOthers);
}

unsafe extern "C-unwind" fn refresh_apps(this: &mut AnyObject, _cmd: Sel, _sender: id) {
    emit(this, AppEvent::RefreshApps);
}

unsafe extern "C-unwind" fn add_running_app(this: &mut AnyObject, _cmd: Sel, sender: id) {
    let index: isize = msg_send![sender, indexOfSelectedItem];
    // Item 0 is the "Add running app…" title
    if index <= 0 {
        return;
    }
    let title: id = msg_send![sender, titleOfSelectedItem];
    let name = nsstring_to_string(title);
    let _: () = msg_send![sender, selectItemAtIndex: 0isize];
    emit(this, AppEvent::AddToWhitelist(name));
}

unsafe extern "C-unwind" fn control_text_did_change(this: &mut AnyObject, _cmd: Sel, _notif: id) {
    emit(this, AppEvent::WhitelistChanged);
}

unsafe extern "C-unwind" fn open_accessibility_settings(
    this: &mut AnyObject,
    _cmd: Sel,
    _sender: id,
) {
    emit(this, AppEvent::OpenAccessibilitySettings);
}

unsafe extern "C-unwind" fn poll_permission(this: &mut AnyObject, _cmd: Sel, _timer: id) {
    emit(this, AppEvent::PermissionPolled);
}

unsafe extern "C-unwind" fn setup_next(this: &mut AnyObject, _cmd: Sel, _sender: id) {
    emit(this, AppEvent::SetupNext);
}

unsafe extern "C-unwind" fn setup_back(this: &mut AnyObject, _cmd: Sel, _sender: id) {
    emit(this, AppEvent::SetupBack);
}

unsafe extern "C-unwind" fn window_will_close(this: &mut AnyObject, _cmd: Sel, notif: id) {
    let window: id = msg_send![notif, object];
    let setup = get_id_ivar(this as *mut _ as id, "_setupWindow");
    if window != nil && window == setup {
        emit(this, AppEvent::SetupClosed);
    }
}

unsafe extern "C-unwind" fn show_main_window(this: &mut AnyObject, _cmd: Sel, _sender: id) {
    emit(this, AppEvent::ShowMainWindow);
}

unsafe extern "C-unwind" fn show_setup(this: &mut AnyObject, _cmd: Sel, _sender: id) {
    emit(this, AppEvent::ShowSetup);
}

unsafe extern "C-unwind" fn quit_app(this: &mut AnyObject, _cmd: Sel, _sender: id) {
    emit(this, AppEvent::Quit);
}

/// Schedule a one-shot list refresh after `delay` seconds.
///
/// # Safety
/// `controller` must be the FocusController instance.
pub unsafe fn schedule_refresh(controller: id, delay: f64) {
    let _: () = msg_send![
        controller,
        performSelector: sel!(refreshAfterHide:),
        withObject: nil,
        afterDelay: delay
    ];
}
