//! Status bar (menu bar) item with dropdown menu.
//!
//! The app runs as an accessory (no Dock icon), so this menu is the way back
//! to the main window after it was closed:
//! - Show Focus Mode
//! - Hide Others
//! - Setup…
//! - Quit

use crate::platform::macos::ffi::bridge::{
    get_class, id, msg_send, nil, nsstring_id, sel, set_id_ivar, NSApp, Sel,
};

/// Menu bar title when no icon is bundled.
const STATUS_TITLE: &str = "◐";

/// Install the status bar item with menu.
///
/// # Safety
/// Must be called from main thread, after the app is initialized.
/// `controller` must be the FocusController.
pub unsafe fn install_status_bar(controller: id) {
    let status_bar: id = msg_send![get_class("NSStatusBar"), systemStatusBar];

    // NSVariableStatusItemLength = -1.0
    let status_item: id = msg_send![status_bar, statusItemWithLength: -1.0f64];

    // Keep a strong reference so it doesn't get deallocated
    let _: id = msg_send![status_item, retain];
    set_id_ivar(controller, "_statusItem", status_item);

    let button: id = msg_send![status_item, button];
    if button != nil {
        let _: () = msg_send![button, setTitle: nsstring_id(STATUS_TITLE)];
    }

    let menu = create_status_menu(controller);
    let _: () = msg_send![status_item, setMenu: menu];
}

unsafe fn create_status_menu(controller: id) -> id {
    let menu: id = msg_send![get_class("NSMenu"), alloc];
    let menu: id = msg_send![menu, init];

    add_item(menu, "Show Focus Mode", sel!(showMainWindow:), "", controller);
    add_item(menu, "Hide Others", sel!(hideOthers:), "h", controller);
    add_item(menu, "Setup…", sel!(showSetup:), "", controller);

    let separator: id = msg_send![get_class("NSMenuItem"), separatorItem];
    let _: () = msg_send![menu, addItem: separator];

    add_item(menu, "Quit", sel!(quitApp:), "q", controller);
    menu
}

unsafe fn add_item(menu: id, title: &str, action: Sel, key: &str, target: id) -> id {
    let item: id = msg_send![get_class("NSMenuItem"), alloc];
    let item: id = msg_send![
        item,
        initWithTitle: nsstring_id(title),
        action: action,
        keyEquivalent: nsstring_id(key)
    ];
    if target != nil {
        let _: () = msg_send![item, setTarget: target];
    }
    let _: () = msg_send![menu, addItem: item];
    item
}

/// Install a minimal main menu with the standard Edit items.
///
/// Accessory apps never show a menu bar, but key equivalents are still
/// routed through the main menu; without it Cmd+C/V/X/A do nothing in the
/// whitelist field.
///
/// # Safety
/// Must be called from main thread, after the app is initialized.
pub unsafe fn install_edit_menu() {
    let main_menu: id = msg_send![get_class("NSMenu"), alloc];
    let main_menu: id = msg_send![main_menu, init];

    let edit_root: id = msg_send![get_class("NSMenuItem"), alloc];
    let edit_root: id = msg_send![edit_root, init];
    let _: () = msg_send![main_menu, addItem: edit_root];

    let edit_menu: id = msg_send![get_class("NSMenu"), alloc];
    let edit_menu: id = msg_send![edit_menu, initWithTitle: nsstring_id("Edit")];

    // nil target: sent down the responder chain to the focused field
    add_item(edit_menu, "Undo", sel!(undo:), "z", nil);
    add_item(edit_menu, "Cut", sel!(cut:), "x", nil);
    add_item(edit_menu, "Copy", sel!(copy:), "c", nil);
    add_item(edit_menu, "Paste", sel!(paste:), "v", nil);
    add_item(edit_menu, "Select All", sel!(selectAll:), "a", nil);

    let _: () = msg_send![edit_root, setSubmenu: edit_menu];
    let _: () = msg_send![NSApp(), setMainMenu: main_menu];
}
