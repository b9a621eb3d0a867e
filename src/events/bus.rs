//! Event queue shared between the AppKit callbacks and the dispatcher.
//!
//! Producers hold an [`EventPublisher`] (cheap to clone, usable from any
//! thread); the dispatcher owns the [`EventBus`] and empties it in batches.

use std::sync::mpsc::{self, Receiver, Sender};

use super::types::AppEvent;

/// Single-consumer queue of [`AppEvent`]s.
///
/// # Example
///
/// ```
/// use focusmode::events::{AppEvent, EventBus};
///
/// let bus = EventBus::new();
/// bus.publisher().publish(AppEvent::HideOthers);
///
/// assert_eq!(bus.drain(), vec![AppEvent::HideOthers]);
/// assert!(bus.drain().is_empty());
/// ```
pub struct EventBus {
    sender: Sender<AppEvent>,
    receiver: Receiver<AppEvent>,
}

impl EventBus {
    pub fn new() -> Self {
        let (sender, receiver) = mpsc::channel();
        Self { sender, receiver }
    }

    /// New producer handle feeding this bus.
    pub fn publisher(&self) -> EventPublisher {
        EventPublisher {
            sender: self.sender.clone(),
        }
    }

    /// Everything queued so far, oldest first. Never blocks.
    pub fn drain(&self) -> Vec<AppEvent> {
        self.receiver.try_iter().collect()
    }
}

/// Producer side of an [`EventBus`].
#[derive(Clone)]
pub struct EventPublisher {
    sender: Sender<AppEvent>,
}

impl EventPublisher {
    /// Queue an event. Dropped silently once the bus is gone (shutdown).
    pub fn publish(&self, event: AppEvent) {
        let _ = self.sender.send(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_bus_is_empty() {
        assert!(EventBus::new().drain().is_empty());
    }

    #[test]
    fn test_drain_keeps_publish_order() {
        let bus = EventBus::new();
        let publisher = bus.publisher();

        publisher.publish(AppEvent::WhitelistChanged);
        publisher.publish(AppEvent::AddToWhitelist("Xcode".into()));
        publisher.publish(AppEvent::HideOthers);

        assert_eq!(
            bus.drain(),
            vec![
                AppEvent::WhitelistChanged,
                AppEvent::AddToWhitelist("Xcode".into()),
                AppEvent::HideOthers
            ]
        );
        assert!(bus.drain().is_empty());
    }

    #[test]
    fn test_publish_from_observer_thread() {
        let bus = EventBus::new();
        let publisher = bus.publisher();

        std::thread::spawn(move || publisher.publish(AppEvent::WorkspaceChanged))
            .join()
            .unwrap();

        assert_eq!(bus.drain(), vec![AppEvent::WorkspaceChanged]);
    }

    #[test]
    fn test_publish_after_bus_dropped_is_ignored() {
        let bus = EventBus::new();
        let publisher = bus.publisher();
        drop(bus);

        publisher.publish(AppEvent::Quit);
    }
}
