//! First-launch setup flow paging.

/// One page of the setup window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetupStep {
    Welcome,
    Permission,
    Ready,
}

impl SetupStep {
    pub const ALL: [SetupStep; 3] = [SetupStep::Welcome, SetupStep::Permission, SetupStep::Ready];

    pub fn title(&self) -> &'static str {
        match self {
            SetupStep::Welcome => "Welcome to Focus Mode",
            SetupStep::Permission => "Allow Accessibility Access",
            SetupStep::Ready => "You're All Set",
        }
    }

    pub fn body(&self) -> &'static str {
        match self {
            SetupStep::Welcome => {
                "Focus Mode hides every running app except the ones you choose, \
                 so only what you need stays on screen."
            }
            SetupStep::Permission => {
                "macOS only lets an app hide other apps once it is trusted for \
                 Accessibility. Open System Settings and enable Focus Mode under \
                 Privacy & Security → Accessibility."
            }
            SetupStep::Ready => {
                "Type the apps you want to keep, separated by commas, then press \
                 Hide Others. Focus Mode stays in the menu bar."
            }
        }
    }
}

/// Step paging for the setup window. Moves are clamped at both ends.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SetupWizard {
    index: usize,
}

impl SetupWizard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> SetupStep {
        SetupStep::ALL[self.index]
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn count(&self) -> usize {
        SetupStep::ALL.len()
    }

    pub fn is_first(&self) -> bool {
        self.index == 0
    }

    pub fn is_last(&self) -> bool {
        self.index + 1 == self.count()
    }

    /// Advance one step. Returns false when already on the last step.
    pub fn next(&mut self) -> bool {
        if self.is_last() {
            return false;
        }
        self.index += 1;
        true
    }

    /// Go back one step. Returns false when already on the first step.
    pub fn back(&mut self) -> bool {
        if self.is_first() {
            return false;
        }
        self.index -= 1;
        true
    }

    /// The permission timer only runs on the permission page.
    pub fn polls_permission(&self) -> bool {
        self.step() == SetupStep::Permission
    }

    /// Label of the forward button.
    pub fn next_label(&self) -> &'static str {
        if self.is_last() {
            "Start"
        } else {
            "Continue"
        }
    }

    /// "2 of 3" style progress text.
    pub fn progress(&self) -> String {
        format!("{} of {}", self.index + 1, self.count())
    }
}

/// Text for the permission line on the setup and main windows.
pub fn permission_status_text(granted: bool) -> &'static str {
    if granted {
        "Accessibility access granted"
    } else {
        "Waiting for Accessibility access…"
    }
}
