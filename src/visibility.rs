//! Application visibility manager.
//!
//! Pure logic over two OS seams: [`Workspace`] enumerates and hides running
//! applications, [`Accessibility`] answers and prompts for the trust flag the
//! OS requires before one process may hide another. The macOS implementations
//! live in `platform::macos::workspace`.

use tracing::{debug, info, warn};

use crate::error::{Error, Result};
use crate::whitelist::Whitelist;

/// Mirror of `NSApplicationActivationPolicy`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivationPolicy {
    /// Ordinary app with a Dock icon and menu bar.
    Regular,
    /// Agent app (menu bar extras, helpers).
    Accessory,
    /// Background-only process.
    Prohibited,
}

impl ActivationPolicy {
    /// Map the raw `NSApplicationActivationPolicy` value.
    pub fn from_raw(raw: i64) -> Self {
        match raw {
            0 => ActivationPolicy::Regular,
            1 => ActivationPolicy::Accessory,
            _ => ActivationPolicy::Prohibited,
        }
    }
}

/// A running application as reported by the workspace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunningApp {
    pub pid: i32,
    pub name: String,
    pub bundle_id: Option<String>,
    pub policy: ActivationPolicy,
}

impl RunningApp {
    /// Dock-visible application with a usable display name.
    pub fn is_regular(&self) -> bool {
        self.policy == ActivationPolicy::Regular && !self.name.trim().is_empty()
    }
}

/// Outcome of a hide pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HideReport {
    pub hidden: Vec<String>,
    pub kept: Vec<String>,
    pub failed: Vec<String>,
}

impl HideReport {
    pub fn is_clean(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Process enumeration and the per-process hide action.
pub trait Workspace {
    /// Every running application, regardless of activation policy.
    fn running_apps(&self) -> Vec<RunningApp>;

    /// Ask the OS to hide one application.
    fn hide(&self, app: &RunningApp) -> Result<()>;

    /// Process id of this program.
    fn own_pid(&self) -> i32 {
        std::process::id() as i32
    }
}

/// The OS accessibility trust flag.
pub trait Accessibility {
    /// Check without prompting.
    fn is_trusted(&self) -> bool;

    /// Show the system permission prompt (no-op when already trusted).
    fn prompt(&self);

    /// Open the Privacy & Security → Accessibility settings pane.
    fn open_settings(&self) -> Result<()>;
}

pub struct VisibilityManager<W, A> {
    workspace: W,
    accessibility: A,
}

impl<W: Workspace, A: Accessibility> VisibilityManager<W, A> {
    pub fn new(workspace: W, accessibility: A) -> Self {
        Self {
            workspace,
            accessibility,
        }
    }

    /// Sorted display names of the running regular applications.
    pub fn visible_app_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .workspace
            .running_apps()
            .into_iter()
            .filter(RunningApp::is_regular)
            .map(|app| app.name)
            .collect();
        names.sort_by(|a, b| a.to_lowercase().cmp(&b.to_lowercase()).then(a.cmp(b)));
        names.dedup();
        names
    }

    /// Hide every regular application whose name is not whitelisted.
    ///
    /// An empty whitelist hides nothing. Without accessibility trust nothing
    /// is hidden; the system prompt is shown again and
    /// `Error::AccessibilityNotGranted` is returned. Each hide is independent:
    /// a failure is logged and recorded, the rest continue.
    pub fn hide_all_except(&self, whitelist: &Whitelist) -> Result<HideReport> {
        if whitelist.is_empty() {
            debug!("empty whitelist, nothing to hide");
            return Ok(HideReport::default());
        }
        if !self.accessibility.is_trusted() {
            warn!("accessibility permission not granted, requesting");
            self.accessibility.prompt();
            return Err(Error::AccessibilityNotGranted);
        }

        let own_pid = self.workspace.own_pid();
        let mut report = HideReport::default();

        for app in self.workspace.running_apps() {
            if !app.is_regular() || app.pid == own_pid {
                continue;
            }
            if whitelist.contains(&app.name) {
                debug!(app = %app.name, "keeping whitelisted app");
                report.kept.push(app.name);
                continue;
            }
            match self.workspace.hide(&app) {
                Ok(()) => {
                    debug!(app = %app.name, pid = app.pid, "hidden");
                    report.hidden.push(app.name);
                }
                Err(e) => {
                    warn!(app = %app.name, pid = app.pid, "hide failed: {}", e);
                    report.failed.push(app.name);
                }
            }
        }

        info!(
            hidden = report.hidden.len(),
            kept = report.kept.len(),
            failed = report.failed.len(),
            "focus pass complete"
        );
        Ok(report)
    }

    pub fn has_permission(&self) -> bool {
        self.accessibility.is_trusted()
    }

    pub fn request_permission(&self) {
        self.accessibility.prompt();
    }

    pub fn open_permission_settings(&self) -> Result<()> {
        self.accessibility.open_settings()
    }
}
