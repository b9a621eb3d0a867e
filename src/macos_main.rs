//! macOS-specific entry point.
//!
//! Sets up the event bus and context, creates the controller, status menu
//! and observers, opens either the setup flow or the main window, then runs
//! the AppKit loop.

use focusmode::events::{init_event_bus, publish, AppEvent};
use focusmode::platform::macos::app::{init_context, with_context};
use focusmode::platform::macos::ffi::bridge::{autoreleasepool, id, msg_send, NSApp};
use focusmode::platform::macos::handlers::dispatch_events;
use focusmode::platform::macos::observers::install_observers;
use focusmode::platform::macos::ui::{create_controller, install_edit_menu, install_status_bar};
use tracing::info;

/// Main entry point for macOS.
pub fn run() {
    init_event_bus();
    init_context();

    autoreleasepool(|| unsafe {
        let app = NSApp();
        // NSApplicationActivationPolicyAccessory = 1
        let _: bool = msg_send![app, setActivationPolicy: 1i64];

        let controller: id = create_controller();
        // Lives for the whole process
        let _: id = msg_send![controller, retain];

        install_edit_menu();
        install_status_bar(controller);
        install_observers(controller);

        let setup_done = with_context(|ctx| ctx.setup.is_completed()).unwrap_or(false);
        info!(setup_done, "starting");
        publish(if setup_done {
            AppEvent::ShowMainWindow
        } else {
            AppEvent::ShowSetup
        });
        dispatch_events(controller);

        let _: () = msg_send![app, run];
    });
}
