//! Rust-side application state.
//!
//! AppKit objects live in ivars of the controller; the plain Rust state
//! (main screen model, setup paging, OS services) lives here. Everything runs
//! on the main thread, so a thread local `RefCell` is enough. Closures passed
//! to [`with_context`] must not call back into AppKit code that may re-enter
//! the dispatcher.

use std::cell::RefCell;

use tracing::warn;

use crate::model::{FocusState, SetupWizard};
use crate::platform::macos::storage::UserDefaults;
use crate::platform::macos::workspace::{visibility_manager, MacVisibilityManager};
use crate::storage::SetupFlag;

pub struct AppContext {
    pub state: FocusState,
    pub wizard: SetupWizard,
    pub manager: MacVisibilityManager,
    pub setup: SetupFlag<UserDefaults>,
}

impl AppContext {
    fn new() -> Self {
        Self {
            state: FocusState::default(),
            wizard: SetupWizard::new(),
            manager: visibility_manager(),
            setup: SetupFlag::new(UserDefaults),
        }
    }
}

thread_local! {
    static CONTEXT: RefCell<Option<AppContext>> = const { RefCell::new(None) };
}

/// Create the context. Must run on the main thread before the first event.
pub fn init_context() {
    CONTEXT.with(|cell| {
        let mut slot = cell.borrow_mut();
        if slot.is_none() {
            *slot = Some(AppContext::new());
        }
    });
}

/// Run `f` with mutable access to the context.
///
/// Returns `None` when the context is missing or already borrowed.
pub fn with_context<R>(f: impl FnOnce(&mut AppContext) -> R) -> Option<R> {
    CONTEXT.with(|cell| {
        let Ok(mut slot) = cell.try_borrow_mut() else {
            warn!("application context re-entered");
            return None;
        };
        slot.as_mut().map(f)
    })
}
