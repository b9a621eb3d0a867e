//! Event dispatcher for handling application events.
//!
//! Every controller action publishes an event and then calls
//! [`dispatch_events`], which drains the bus and runs the handlers.
//!
//! # Architecture
//!
//! ```text
//! publish() → drain_events() → dispatch_single_event() → model + UI
//! ```
//!
//! Handlers read and write the Rust state through short `with_context`
//! scopes and only touch AppKit outside of them, so AppKit callbacks fired
//! while a handler runs never find the context borrowed.

use std::sync::atomic::{AtomicBool, Ordering};

use tracing::{debug, info, warn};

use crate::events::{drain_events, publish, AppEvent};
use crate::model::constants::REFRESH_AFTER_HIDE_DELAY_SECS;
use crate::model::SetupWizard;
use crate::platform::macos::app::with_context;
use crate::platform::macos::ffi::bridge::{id, msg_send, nil, NSApp};
use crate::platform::macos::ui::{
    close_setup_window, forget_setup_window, render_main_window, render_setup_permission,
    render_setup_window, schedule_refresh, set_whitelist_field_text, show_main_window,
    show_setup_window, whitelist_field_text,
};

/// Set while events are being handled.
///
/// Handlers may run AppKit code that calls back into the controller (which
/// publishes and dispatches again). The nested call returns at once and the
/// outer loop picks the new events up on its next drain.
static DISPATCH_GUARD: AtomicBool = AtomicBool::new(false);

/// Dispatch all pending events from the global event bus.
///
/// # Safety
///
/// Must be called from the main thread. `controller` must be the
/// FocusController instance.
pub unsafe fn dispatch_events(controller: id) {
    if DISPATCH_GUARD
        .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
        .is_err()
    {
        return;
    }

    loop {
        let events = drain_events();
        if events.is_empty() {
            break;
        }
        for event in events {
            debug!(event = event.description(), "dispatch");
            dispatch_single_event(controller, &event);
            if event.refreshes_app_list() {
                refresh_apps(controller);
            }
        }
    }

    DISPATCH_GUARD.store(false, Ordering::SeqCst);
}

/// Dispatch a single event.
///
/// # Safety
///
/// Must be called from the main thread. `controller` must be valid.
unsafe fn dispatch_single_event(controller: id, event: &AppEvent) {
    match event {
        AppEvent::ShowMainWindow => show_main_window(controller),

        AppEvent::ShowSetup => show_setup_window(controller),

        AppEvent::SetupNext => {
            let moved = with_context(|ctx| {
                if ctx.wizard.is_last() {
                    return None;
                }
                ctx.wizard.next();
                Some(ctx.wizard.polls_permission() && !ctx.manager.has_permission())
            });
            match moved {
                Some(None) => publish(AppEvent::SetupFinished),
                Some(Some(needs_prompt)) => {
                    render_setup_window(controller);
                    if needs_prompt {
                        publish(AppEvent::RequestPermission);
                    }
                }
                None => {}
            }
        }

        AppEvent::SetupBack => {
            with_context(|ctx| ctx.wizard.back());
            render_setup_window(controller);
        }

        AppEvent::SetupFinished => {
            with_context(|ctx| {
                ctx.setup.mark_completed();
                ctx.wizard = SetupWizard::new();
            });
            info!("setup completed");
            close_setup_window(controller);
            publish(AppEvent::ShowMainWindow);
        }

        AppEvent::SetupClosed => {
            // Closed with the window button; ask again on next launch
            debug!("setup window closed before finishing");
            forget_setup_window(controller);
            with_context(|ctx| ctx.wizard = SetupWizard::new());
        }

        AppEvent::HideOthers => hide_others(controller),

        // Listed in `refreshes_app_list`; the loop does the work
        AppEvent::RefreshApps | AppEvent::WorkspaceChanged => {}

        AppEvent::WhitelistChanged => {
            sync_whitelist_from_field(controller);
            render_main_window(controller);
        }

        AppEvent::AddToWhitelist(name) => {
            let text = with_context(|ctx| {
                ctx.state
                    .add_to_whitelist(name)
                    .then(|| ctx.state.whitelist_text.clone())
            })
            .flatten();
            match text {
                Some(text) => {
                    set_whitelist_field_text(controller, &text);
                    render_main_window(controller);
                }
                None => debug!(app = %name, "already whitelisted"),
            }
        }

        AppEvent::RequestPermission => {
            with_context(|ctx| ctx.manager.request_permission());
            render_setup_permission(controller);
            render_main_window(controller);
        }

        AppEvent::OpenAccessibilitySettings => {
            let result = with_context(|ctx| {
                let result = ctx.manager.open_permission_settings();
                if let Err(e) = &result {
                    ctx.state.record_error(e);
                }
                result
            });
            if let Some(Err(e)) = result {
                warn!("{}", e);
                render_main_window(controller);
            }
        }

        // Access may have been granted in System Settings while we were
        // in the background
        AppEvent::PermissionPolled | AppEvent::AppActivated => {
            render_setup_permission(controller);
            render_main_window(controller);
        }

        AppEvent::Quit => {
            info!("quit requested");
            let _: () = msg_send![NSApp(), terminate: nil];
        }
    }
}

/// Copy the field text into the state. No-op before the window exists.
unsafe fn sync_whitelist_from_field(controller: id) {
    if let Some(text) = whitelist_field_text(controller) {
        with_context(|ctx| ctx.state.set_whitelist_text(text));
    }
}

unsafe fn hide_others(controller: id) {
    sync_whitelist_from_field(controller);

    with_context(|ctx| {
        match ctx.manager.hide_all_except(&ctx.state.whitelist()) {
            Ok(report) => ctx.state.record_hide(&report),
            Err(e) => ctx.state.record_error(&e),
        }
    });

    render_main_window(controller);
    // Hidden apps stay in the list; refresh once the OS settled
    schedule_refresh(controller, REFRESH_AFTER_HIDE_DELAY_SECS);
}

unsafe fn refresh_apps(controller: id) {
    with_context(|ctx| {
        let names = ctx.manager.visible_app_names();
        ctx.state.set_running_apps(names);
    });
    render_main_window(controller);
}
