#![allow(unexpected_cfgs)] // Silence cfg warnings from objc macros

//! Focus mode: hide every running application except a whitelist.
//!
//! Everything outside `platform` is free of macOS FFI so tests run as normal
//! integration tests on any host.

pub mod error;
pub mod events;
pub mod logging;
pub mod model;
pub mod storage;
pub mod visibility;
pub mod whitelist;

#[cfg(target_os = "macos")]
pub mod platform;

pub use error::{Error, Result};
pub use events::{AppEvent, EventBus, EventPublisher};
pub use model::{FocusState, SetupStep, SetupWizard};
pub use storage::{MemoryPreferences, Preferences, SetupFlag};
pub use visibility::{
    Accessibility, ActivationPolicy, HideReport, RunningApp, VisibilityManager, Workspace,
};
pub use whitelist::Whitelist;
