//! NSWorkspace / NSRunningApplication backed [`Workspace`] and the
//! ApplicationServices backed [`Accessibility`].

#![allow(unused_unsafe)]

use objc2_app_kit::{NSRunningApplication, NSWorkspace};
use objc2_foundation::{NSString, NSURL};
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::model::constants::ACCESSIBILITY_SETTINGS_URL;
use crate::platform::macos::ffi::{is_process_trusted, prompt_for_trust};
use crate::visibility::{Accessibility, ActivationPolicy, RunningApp, VisibilityManager, Workspace};

/// Visibility manager wired to the real OS services.
pub type MacVisibilityManager = VisibilityManager<MacWorkspace, MacAccessibility>;

pub fn visibility_manager() -> MacVisibilityManager {
    VisibilityManager::new(MacWorkspace, MacAccessibility)
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MacWorkspace;

impl MacWorkspace {
    fn describe(app: &NSRunningApplication) -> RunningApp {
        unsafe {
            RunningApp {
                pid: app.processIdentifier(),
                name: app
                    .localizedName()
                    .map(|n| n.to_string())
                    .unwrap_or_default(),
                bundle_id: app.bundleIdentifier().map(|b| b.to_string()),
                policy: ActivationPolicy::from_raw(app.activationPolicy().0 as i64),
            }
        }
    }
}

impl Workspace for MacWorkspace {
    fn running_apps(&self) -> Vec<RunningApp> {
        unsafe {
            let workspace = NSWorkspace::sharedWorkspace();
            let apps = workspace.runningApplications();
            let list: Vec<RunningApp> = apps.iter().map(|app| Self::describe(&app)).collect();
            debug!(count = list.len(), "enumerated running applications");
            list
        }
    }

    fn hide(&self, app: &RunningApp) -> Result<()> {
        unsafe {
            let Some(running) = NSRunningApplication::runningApplicationWithProcessIdentifier(app.pid)
            else {
                // Quit between enumeration and hide
                debug!(app = %app.name, pid = app.pid, "no longer running");
                return Ok(());
            };
            if running.hide() {
                Ok(())
            } else {
                Err(Error::HideFailed {
                    name: app.name.clone(),
                })
            }
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MacAccessibility;

impl Accessibility for MacAccessibility {
    fn is_trusted(&self) -> bool {
        is_process_trusted()
    }

    fn prompt(&self) {
        let trusted = prompt_for_trust();
        debug!(trusted, "trust state after prompt");
    }

    fn open_settings(&self) -> Result<()> {
        unsafe {
            let url_string = NSString::from_str(ACCESSIBILITY_SETTINGS_URL);
            let Some(url) = NSURL::URLWithString(&url_string) else {
                return Err(Error::OpenSettingsFailed(format!(
                    "invalid URL {}",
                    ACCESSIBILITY_SETTINGS_URL
                )));
            };
            if NSWorkspace::sharedWorkspace().openURL(&url) {
                Ok(())
            } else {
                warn!("NSWorkspace refused to open the accessibility pane");
                Err(Error::OpenSettingsFailed(
                    "NSWorkspace openURL returned NO".to_string(),
                ))
            }
        }
    }
}
