//! Thin helpers over the objc2 runtime for untyped `msg_send!` UI code.
//!
//! Window and control construction uses raw `id` pointers and `msg_send!`;
//! workspace access uses the typed `objc2-app-kit` API instead
//! (see `platform::macos::workspace`).

#![allow(non_upper_case_globals)]
#![allow(non_camel_case_types)]

use std::ffi::{CStr, CString};

pub use objc2::runtime::{AnyClass, AnyObject, Bool, Sel};
pub use objc2::{msg_send, sel};

pub use objc2_foundation::{NSPoint, NSRect, NSSize, NSString};

use objc2::encode::Encode;
use objc2::rc::Retained;

/// Objective-C object pointer for untyped messaging.
pub type id = *mut AnyObject;

/// Null object pointer.
pub const nil: id = std::ptr::null_mut();

/// Objective-C `YES` (BOOL, not Rust bool).
pub const YES: Bool = Bool::YES;

/// Objective-C `NO` (BOOL, not Rust bool).
pub const NO: Bool = Bool::NO;

/// Get the shared NSApplication instance.
#[inline]
#[allow(non_snake_case)]
pub fn NSApp() -> id {
    unsafe { msg_send![get_class("NSApplication"), sharedApplication] }
}

/// Create an NSString and return as raw id pointer.
///
/// The returned string is retained and never released; use for the short
/// labels handed to AppKit controls, which copy them.
#[inline]
pub fn nsstring_id(s: &str) -> id {
    let ns = NSString::from_str(s);
    Retained::into_raw(ns) as id
}

/// Copy an NSString (given as raw id) into a Rust String.
///
/// # Safety
/// `ns` must be nil or a valid NSString.
pub unsafe fn nsstring_to_string(ns: id) -> String {
    if ns == nil {
        return String::new();
    }
    let utf8: *const std::ffi::c_char = msg_send![ns, UTF8String];
    if utf8.is_null() {
        return String::new();
    }
    CStr::from_ptr(utf8).to_string_lossy().into_owned()
}

/// Get a class by name, panicking if not found.
///
/// Only used with AppKit/Foundation classes that always exist, and with the
/// classes this crate registers before first use.
#[inline]
pub fn get_class(name: &str) -> &'static AnyClass {
    let c_name = CString::new(name).expect("Invalid class name");
    AnyClass::get(&c_name).unwrap_or_else(|| panic!("Class '{}' not found", name))
}

/// Extension trait for accessing instance variables on AnyObject.
pub trait ObjectExt {
    /// Load a reference to an instance variable.
    ///
    /// # Safety
    /// - The ivar must exist and be of type T
    /// - Must be called from the main thread for UI objects
    unsafe fn load_ivar<T: Encode>(&self, name: &str) -> &T;

    /// Store a value in an instance variable.
    ///
    /// # Safety
    /// - The ivar must exist and be of type T
    /// - Must be called from the main thread for UI objects
    unsafe fn store_ivar<T: Encode>(&mut self, name: &str, value: T);
}

impl ObjectExt for AnyObject {
    unsafe fn load_ivar<T: Encode>(&self, name: &str) -> &T {
        let cls = self.class();
        let c_name = CString::new(name).expect("Invalid ivar name");
        let ivar = cls
            .instance_variable(&c_name)
            .unwrap_or_else(|| panic!("ivar '{}' not found", name));
        ivar.load::<T>(self)
    }

    unsafe fn store_ivar<T: Encode>(&mut self, name: &str, value: T) {
        let cls = self.class();
        let c_name = CString::new(name).expect("Invalid ivar name");
        let ivar = cls
            .instance_variable(&c_name)
            .unwrap_or_else(|| panic!("ivar '{}' not found", name));
        *ivar.load_mut::<T>(self) = value;
    }
}

/// Read an `id` ivar from a raw object pointer.
///
/// # Safety
/// `obj` must be valid and own an `id` ivar named `name`.
#[inline]
pub unsafe fn get_id_ivar(obj: id, name: &str) -> id {
    *(*obj).load_ivar::<id>(name)
}

/// Write an `id` ivar on a raw object pointer.
///
/// # Safety
/// `obj` must be valid and own an `id` ivar named `name`.
#[inline]
pub unsafe fn set_id_ivar(obj: id, name: &str, value: id) {
    (*obj).store_ivar::<id>(name, value);
}

/// Run a closure within an autorelease pool.
#[inline]
pub fn autoreleasepool<R, F: FnOnce() -> R>(f: F) -> R {
    unsafe {
        let pool: id = msg_send![get_class("NSAutoreleasePool"), new];
        let result = f();
        let _: () = msg_send![pool, drain];
        result
    }
}
