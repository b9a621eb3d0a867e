//! FFI bindings for ApplicationServices (Accessibility) and the bits of
//! CoreFoundation needed to build the prompt options dictionary.
//!
//! Provides the TCC Accessibility API to check/prompt for the permission
//! macOS requires before this app may hide other applications.

use std::ffi::c_void;

use tracing::debug;

// === FFI Declarations - CoreFoundation ===

/// Opaque `CFDictionaryKeyCallBacks` / `CFDictionaryValueCallBacks`;
/// only their addresses are used.
#[repr(C)]
pub struct CFDictionaryCallBacks {
    _private: [u8; 0],
}

#[link(name = "CoreFoundation", kind = "framework")]
extern "C" {
    pub fn CFRelease(obj: *const c_void);

    pub fn CFDictionaryCreate(
        allocator: *const c_void,
        keys: *const *const c_void,
        values: *const *const c_void,
        num_values: isize,
        key_call_backs: *const CFDictionaryCallBacks,
        value_call_backs: *const CFDictionaryCallBacks,
    ) -> *const c_void;

    pub static kCFBooleanTrue: *const c_void;
    pub static kCFTypeDictionaryKeyCallBacks: CFDictionaryCallBacks;
    pub static kCFTypeDictionaryValueCallBacks: CFDictionaryCallBacks;
}

// === FFI Declarations - ApplicationServices ===

#[link(name = "ApplicationServices", kind = "framework")]
extern "C" {
    pub fn AXIsProcessTrusted() -> bool;

    pub fn AXIsProcessTrustedWithOptions(options: *const c_void) -> bool;

    pub static kAXTrustedCheckOptionPrompt: *const c_void;
}

/// Check the Accessibility trust flag without showing any UI.
pub fn is_process_trusted() -> bool {
    unsafe { AXIsProcessTrusted() }
}

/// Check the trust flag, showing the system prompt when not yet granted.
///
/// Returns the trust state at the time of the call; granting happens
/// asynchronously in System Settings.
pub fn prompt_for_trust() -> bool {
    unsafe {
        let keys = [kAXTrustedCheckOptionPrompt];
        let values = [kCFBooleanTrue];

        let dict = CFDictionaryCreate(
            std::ptr::null(), // default allocator
            keys.as_ptr(),
            values.as_ptr(),
            1,
            &kCFTypeDictionaryKeyCallBacks,
            &kCFTypeDictionaryValueCallBacks,
        );

        let trusted = AXIsProcessTrustedWithOptions(dict);

        if !dict.is_null() {
            CFRelease(dict);
        }
        debug!(trusted, "accessibility prompt issued");
        trusted
    }
}
