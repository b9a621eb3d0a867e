//! macOS-specific implementation using AppKit via objc2.
//!
//! This module contains all macOS-specific code:
//! - FFI bindings to the objc2 runtime and ApplicationServices
//! - NSWorkspace / NSRunningApplication services
//! - UI components (main window, setup window, status menu)
//! - Workspace observers
//! - Storage (NSUserDefaults persistence)

pub mod app;
pub mod ffi;
pub mod handlers;
pub mod observers;
pub mod storage;
pub mod ui;
pub mod workspace;

// Re-export commonly used items
pub use app::*;
pub use ffi::bridge;
pub use handlers::*;
pub use observers::install_observers;
pub use storage::*;
pub use ui::*;
pub use workspace::{visibility_manager, MacAccessibility, MacVisibilityManager, MacWorkspace};
