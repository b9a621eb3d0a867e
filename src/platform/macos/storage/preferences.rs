//! Persistence of settings to NSUserDefaults.

use crate::platform::macos::ffi::bridge::{get_class, id, msg_send, nil, Bool, NSString};
use crate::storage::Preferences;

/// `NSUserDefaults.standardUserDefaults` as a [`Preferences`] store.
///
/// All calls must happen on the main thread.
#[derive(Debug, Clone, Copy, Default)]
pub struct UserDefaults;

impl UserDefaults {
    fn standard() -> id {
        unsafe { msg_send![get_class("NSUserDefaults"), standardUserDefaults] }
    }
}

// Keys are created per call and released when the Retained drops.
impl Preferences for UserDefaults {
    fn get_bool(&self, key: &str) -> Option<bool> {
        let k = NSString::from_str(key);
        unsafe {
            let ud = Self::standard();
            let obj: id = msg_send![ud, objectForKey: &*k];
            if obj == nil {
                None
            } else {
                let val: Bool = msg_send![ud, boolForKey: &*k];
                Some(val.as_bool())
            }
        }
    }

    fn set_bool(&self, key: &str, value: bool) {
        let k = NSString::from_str(key);
        unsafe {
            let _: () = msg_send![Self::standard(), setBool: Bool::new(value), forKey: &*k];
        }
    }

    fn remove(&self, key: &str) {
        let k = NSString::from_str(key);
        unsafe {
            let _: () = msg_send![Self::standard(), removeObjectForKey: &*k];
        }
    }
}
