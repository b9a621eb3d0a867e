//! Observers that keep the windows current while the app sits in the
//! background.

use block2::RcBlock;
use tracing::warn;

use crate::events::{publisher, AppEvent, EventPublisher};
use crate::platform::macos::ffi::bridge::{get_class, id, msg_send, nil};
use crate::platform::macos::handlers::dispatch_events;

/// Publish `WorkspaceChanged` whenever an application launches or quits,
/// and `AppActivated` whenever this app comes to the front.
///
/// # Safety
/// - `controller` must be the FocusController and outlive the app.
/// - Must be called from main thread with valid autorelease pool.
pub unsafe fn install_observers(controller: id) {
    let Some(events) = publisher() else {
        warn!("event bus not initialized, observers not installed");
        return;
    };

    let ws: id = msg_send![get_class("NSWorkspace"), sharedWorkspace];
    let ws_center: id = msg_send![ws, notificationCenter];
    add_observer(
        ws_center,
        c"NSWorkspaceDidLaunchApplicationNotification",
        controller,
        &events,
        AppEvent::WorkspaceChanged,
    );
    add_observer(
        ws_center,
        c"NSWorkspaceDidTerminateApplicationNotification",
        controller,
        &events,
        AppEvent::WorkspaceChanged,
    );

    let app_center: id = msg_send![get_class("NSNotificationCenter"), defaultCenter];
    add_observer(
        app_center,
        c"NSApplicationDidBecomeActiveNotification",
        controller,
        &events,
        AppEvent::AppActivated,
    );
}

unsafe fn add_observer(
    center: id,
    name_cstr: &std::ffi::CStr,
    controller: id,
    events: &EventPublisher,
    event: AppEvent,
) {
    let name: id = msg_send![get_class("NSString"), stringWithUTF8String: name_cstr.as_ptr()];
    let events = events.clone();
    let block = RcBlock::new(move |_note: id| unsafe {
        events.publish(event.clone());
        dispatch_events(controller);
    });
    // The center copies the block; the returned token is kept for the
    // life of the process
    let _: id =
        msg_send![center, addObserverForName: name, object: nil, queue: nil, usingBlock: &*block];
}
