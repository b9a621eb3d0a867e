//! AppKit user interface: the controller object, windows and status menu.

pub mod controller;
pub mod main_window;
pub mod setup_window;
pub mod status_bar;
pub mod widgets;

pub use controller::{create_controller, schedule_refresh};
pub use main_window::{
    render_main_window, set_whitelist_field_text, show_main_window, whitelist_field_text,
};
pub use setup_window::{
    close_setup_window, forget_setup_window, render_setup_permission, render_setup_window,
    show_setup_window,
};
pub use status_bar::{install_edit_menu, install_status_bar};
