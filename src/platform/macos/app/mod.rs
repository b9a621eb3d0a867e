//! Main-thread application context shared by the dispatcher and the UI.

pub mod context;

pub use context::{init_context, with_context, AppContext};
