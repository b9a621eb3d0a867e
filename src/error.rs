//! Library error type.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The process is not trusted for Accessibility, so it may not hide
    /// other applications.
    #[error("accessibility permission not granted")]
    AccessibilityNotGranted,

    /// The OS refused to hide a single application.
    #[error("failed to hide {name}")]
    HideFailed { name: String },

    /// The System Settings deep link could not be opened.
    #[error("could not open System Settings: {0}")]
    OpenSettingsFailed(String),

    /// Hiding applications is only implemented on macOS.
    #[error("application hiding is not supported on this platform")]
    Unsupported,
}

impl Error {
    /// Short text suitable for the inline status label.
    pub fn status_text(&self) -> String {
        match self {
            Error::AccessibilityNotGranted => {
                "Accessibility permission required. Grant it in System Settings.".to_string()
            }
            other => other.to_string(),
        }
    }
}
