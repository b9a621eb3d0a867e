//! Global access to the application event bus.
//!
//! The bus is initialized once at startup via `init_event_bus()`, then any
//! module (Objective-C action methods, observer blocks, timers) can publish
//! events via `publish()` or `publisher()` without holding a reference.
//!
//! # Design
//!
//! - One `EventPublisher` lives in the static and is cloned on demand
//! - The `EventBus` itself sits behind a `Mutex`; only the main thread drains it
//!
//! # Example
//!
//! ```ignore
//! // In main.rs at startup:
//! events::init_event_bus();
//!
//! // In any module:
//! events::publish(AppEvent::HideOthers);
//!
//! // Or get a publisher for repeated use (e.g. inside an observer block):
//! if let Some(publisher) = events::publisher() {
//!     publisher.publish(AppEvent::WorkspaceChanged);
//! }
//! ```

use std::sync::{Mutex, OnceLock};

use tracing::warn;

use super::bus::{EventBus, EventPublisher};
use super::types::AppEvent;

struct GlobalBus {
    publisher: EventPublisher,
    // Only the main thread drains
    bus: Mutex<EventBus>,
}

static BUS: OnceLock<GlobalBus> = OnceLock::new();

/// Initialize the global event bus. Calling it again is a no-op.
pub fn init_event_bus() {
    BUS.get_or_init(|| {
        let bus = EventBus::new();
        GlobalBus {
            publisher: bus.publisher(),
            bus: Mutex::new(bus),
        }
    });
}

/// Get a publisher handle for the global event bus.
///
/// Returns `None` before `init_event_bus()`.
pub fn publisher() -> Option<EventPublisher> {
    BUS.get().map(|global| global.publisher.clone())
}

/// Publish an event to the global event bus.
///
/// Events published before initialization are dropped with a warning.
pub fn publish(event: AppEvent) {
    match BUS.get() {
        Some(global) => global.publisher.publish(event),
        None => warn!(?event, "event bus not initialized, dropping event"),
    }
}

/// Drain all pending events from the global event bus, in publish order.
pub fn drain_events() -> Vec<AppEvent> {
    let Some(global) = BUS.get() else {
        return Vec::new();
    };
    match global.bus.lock() {
        Ok(bus) => bus.drain(),
        Err(_) => {
            warn!("event bus mutex poisoned");
            Vec::new()
        }
    }
}
