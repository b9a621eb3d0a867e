//! Storage for macOS using NSUserDefaults.

pub mod preferences;

pub use preferences::UserDefaults;
