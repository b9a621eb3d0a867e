//! FFI bindings for macOS frameworks.
//!
//! `bridge` wraps the objc2 runtime for untyped messaging; `accessibility`
//! declares the ApplicationServices trust API.

pub mod accessibility;
pub mod bridge;

pub use accessibility::{is_process_trusted, prompt_for_trust};
