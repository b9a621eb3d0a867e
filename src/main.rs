#![allow(unexpected_cfgs)] // Silence cfg warnings from objc macros

use focusmode::logging::init_logging;

#[cfg(target_os = "macos")]
mod macos_main;

#[cfg(target_os = "macos")]
fn main() {
    init_logging();
    macos_main::run();
}

#[cfg(not(target_os = "macos"))]
fn main() -> std::process::ExitCode {
    init_logging();
    tracing::error!("{}", focusmode::Error::Unsupported);
    std::process::ExitCode::FAILURE
}
