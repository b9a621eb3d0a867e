//! Application domain model.
//!
//! This module contains pure logic (no FFI dependencies): the main screen
//! state, the setup flow paging and configuration constants.
//!
//! Platform-specific persistence is in `platform::macos::storage`.

pub mod app_state;
pub mod constants;
pub mod setup;

pub use app_state::{status_for_report, FocusState};
pub use constants::*;
pub use setup::{permission_status_text, SetupStep, SetupWizard};
