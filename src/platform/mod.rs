//! Platform-specific implementations.
//!
//! Only macOS is implemented. It provides:
//! - FFI bindings (objc2 runtime helpers, ApplicationServices trust API)
//! - Workspace and accessibility services behind the `visibility` traits
//! - UI components (main window, setup window, status menu)
//! - Storage (NSUserDefaults persistence)

#[cfg(target_os = "macos")]
pub mod macos;

// Re-export the current platform's modules for convenience
#[cfg(target_os = "macos")]
pub use macos::*;
