//! Event handlers for the macOS application.

pub mod dispatcher;

pub use dispatcher::dispatch_events;
